//! The errors that conversions, normalization and distances can return. None of them are
//! transient: every operation in this crate is deterministic math, so nothing is ever retried.

use thiserror::Error;

use crate::color::RGBChannel;
use crate::space::ColorSpace;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Everything that can go wrong when working with colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// An RGB channel was given a value outside of [0, 255]. Raised before any conversion math
    /// runs.
    #[error("{channel} value {value} is outside [0, 255]")]
    InvalidChannel {
        /// The offending channel.
        channel: RGBChannel,
        /// The value as given, which may not fit in any fixed-size type we know about.
        value: String,
    },

    /// A channel of a color space has the same minimum and maximum, so it can't be normalized.
    /// This is a bug in that space's range table, not a problem with the data.
    #[error("channel {channel} of {space} has an empty range [{min}, {max}]")]
    DegenerateRange {
        /// The space whose table is broken.
        space: ColorSpace,
        /// The channel, counting from 1.
        channel: usize,
        /// Declared minimum.
        min: f64,
        /// Declared maximum.
        max: f64,
    },

    /// A value from another space had to be reconverted for a distance, but it doesn't know the
    /// RGB color it came from.
    #[error("cannot express a {from} value in {to}: its source RGB color is unknown")]
    CrossSpace {
        /// The space of the value that couldn't be reconverted.
        from: ColorSpace,
        /// The space it needed to be expressed in.
        to: ColorSpace,
    },

    /// A string that should have been a `#rrggbb` hex code wasn't.
    #[error("invalid hex color code: {0:?}")]
    InvalidHexCode(String),

    /// A string didn't name any supported color space.
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),
}
