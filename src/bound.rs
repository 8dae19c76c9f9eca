//! This module describes the Bound trait: the fixed range each channel of a color space covers when
//! it is fed every 8-bit RGB color. Those ranges are what make normalization to [0, 1] possible, and
//! what the weighted normalized distance uses to decide how much each channel counts.

use crate::color::Color;
use crate::coord::Coord;
use crate::error::{ColorError, Result};
use crate::space::ColorSpace;

/// Describes a color space whose channels have explicit, constant bounds. The bounds are tabulated,
/// not computed, so a few spaces can land a hair outside of them through floating-point rounding:
/// XYZ white has a Z of 301.41000000000003 against a declared maximum of 301.41.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::colors::I1I2I3Color;
/// let red = I1I2I3Color::convert(255, 0, 0)?;
/// let normalized = I1I2I3Color::normalize_coord(red.into())?;
/// assert_eq!(normalized.x, 1. / 3.);
/// assert_eq!(normalized.y, 1.);
/// assert_eq!(normalized.z, 1.);
/// # Ok::<(), colorspaces::ColorError>(())
/// ```
pub trait Bound: Color {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] with the bounds on each channel,
    /// in the order that they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];

    /// Given a Coord, returns a Coord with each component clamped to the bounds of its channel.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let components: [f64; 3] = point.into();
        let mut clamped = [0.; 3];
        for i in 0..3 {
            let (min, max) = ranges[i];
            clamped[i] = components[i].max(min).min(max);
        }
        Coord::from(clamped)
    }

    /// Maps each channel of a point onto [0, 1] using this space's bounds.
    /// # Errors
    /// `ColorError::DegenerateRange` if any channel's maximum equals its minimum.
    fn normalize_coord(point: Coord) -> Result<Coord> {
        normalize_within(Self::SPACE, &Self::bounds(), point)
    }
}

/// Checks that every channel of a range table can be divided by.
pub(crate) fn check_ranges(space: ColorSpace, bounds: &[(f64, f64); 3]) -> Result<()> {
    for (i, &(min, max)) in bounds.iter().enumerate() {
        if max - min == 0. {
            return Err(ColorError::DegenerateRange {
                space,
                channel: i + 1,
                min,
                max,
            });
        }
    }
    Ok(())
}

/// Computes `(c - min) / (max - min)` for each channel.
pub(crate) fn normalize_within(
    space: ColorSpace,
    bounds: &[(f64, f64); 3],
    point: Coord,
) -> Result<Coord> {
    check_ranges(space, bounds)?;
    let components: [f64; 3] = point.into();
    let mut normalized = [0.; 3];
    for i in 0..3 {
        let (min, max) = bounds[i];
        normalized[i] = (components[i] - min) / (max - min);
    }
    Ok(Coord::from(normalized))
}

/// The weight of each channel in the normalized distance: the square of its range, scaled so the
/// three weights sum to 1.
pub(crate) fn channel_weights(space: ColorSpace, bounds: &[(f64, f64); 3]) -> Result<[f64; 3]> {
    check_ranges(space, bounds)?;
    let mut weights = [0.; 3];
    for i in 0..3 {
        let (min, max) = bounds[i];
        weights[i] = (max - min).powi(2);
    }
    let total: f64 = weights.iter().sum();
    for w in weights.iter_mut() {
        *w /= total;
    }
    Ok(weights)
}
