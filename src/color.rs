//! This module defines [`RGBColor`], the validated 8-bit input every conversion starts from, and the
//! [`Color`] trait that each of the alternative color spaces in [`colors`](crate::colors)
//! implements. Conversions only ever go one way, from RGB into a space: there is no inverse.

use std::fmt;
use std::str::FromStr;

use num::PrimInt;
use regex::Regex;

use crate::coord::Coord;
use crate::error::{ColorError, Result};
use crate::space::ColorSpace;

lazy_static! {
    // leading '#' is optional, case doesn't matter
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// One of the three channels of an RGB color. Only used to say which channel was out of range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RGBChannel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl fmt::Display for RGBChannel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            RGBChannel::Red => "red",
            RGBChannel::Green => "green",
            RGBChannel::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// Any primitive integer that can be offered as an RGB channel. Values are range-checked, never
/// truncated, so `256u16` or `4294967296i64` are rejected instead of wrapping around.
pub trait ChannelValue: PrimInt + fmt::Display {}

impl<T: PrimInt + fmt::Display> ChannelValue for T {}

fn checked_channel<T: ChannelValue>(channel: RGBChannel, value: T) -> Result<u8> {
    num::cast::<T, u8>(value).ok_or_else(|| ColorError::InvalidChannel {
        channel,
        value: value.to_string(),
    })
}

/// A color in 8-bit RGB, the only representation this crate converts from. Every channel is in
/// [0, 255] by construction.
///
/// Colors order by their packed `0xRRGGBB` value, so sorting a list of them sorts it by hex code.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// let orange = RGBColor::new(255, 165, 0)?;
/// assert_eq!(orange.to_string(), "#FFA500");
/// assert_eq!("#ffa500".parse::<RGBColor>()?, orange);
/// assert!(RGBColor::new(256, 0, 0).is_err());
/// # Ok::<(), colorspaces::ColorError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// The default color of every space: what a conversion reports when it is handed white.
    pub const WHITE: RGBColor = RGBColor {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Pure black.
    pub const BLACK: RGBColor = RGBColor { r: 0, g: 0, b: 0 };

    /// Builds a color from three integers of any primitive type, checking red, then green, then
    /// blue.
    /// # Errors
    /// `ColorError::InvalidChannel` for the first channel outside [0, 255].
    pub fn new<T: ChannelValue>(r: T, g: T, b: T) -> Result<RGBColor> {
        Ok(RGBColor {
            r: checked_channel(RGBChannel::Red, r)?,
            g: checked_channel(RGBChannel::Green, g)?,
            b: checked_channel(RGBChannel::Blue, b)?,
        })
    }

    /// Parses a hex code of the form `#rrggbb`. The `#` is optional and case doesn't matter.
    /// # Errors
    /// `ColorError::InvalidHexCode` if the string isn't exactly six hex digits.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor> {
        let invalid = || ColorError::InvalidHexCode(hex.to_string());
        let caps = HEX_CODE.captures(hex.trim()).ok_or_else(invalid)?;
        let component = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| invalid());
        Ok(RGBColor {
            r: component(1)?,
            g: component(2)?,
            b: component(3)?,
        })
    }

    /// Packs the color into `0xRRGGBB`.
    pub fn to_hex(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Unpacks `0xRRGGBB`. Anything above the low 24 bits is ignored.
    pub fn from_hex(hex: u32) -> RGBColor {
        RGBColor {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// Whether all three channels are equal.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// The channels as floats, for the conversion formulas.
    pub(crate) fn channels(self) -> (f64, f64, f64) {
        (f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<RGBColor> {
        RGBColor::from_hex_code(s)
    }
}

/// A three-channel color space that RGB colors can be converted into. Each implementor is one of
/// the variants of [`ColorSpace`], and maps its channels onto the `x`, `y` and `z` axes of a
/// [`Coord`] in the order they're named: for `CIELABColor`, `l` is `x`, `a` is `y` and `b` is `z`.
pub trait Color: Copy + Into<Coord> + From<Coord> {
    /// The runtime tag of this space.
    const SPACE: ColorSpace;
    /// Short labels for the three channels, in order, as a viewer would print them on its axes.
    const CHANNELS: [&'static str; 3];

    /// Converts an already-validated RGB color. Never fails.
    fn from_rgb(rgb: RGBColor) -> Self;

    /// Validates the three channels and converts.
    /// # Errors
    /// `ColorError::InvalidChannel` if any channel is outside [0, 255]; no math is done in that case.
    fn convert<T: ChannelValue>(r: T, g: T, b: T) -> Result<Self> {
        Ok(Self::from_rgb(RGBColor::new(r, g, b)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_validation() {
        assert!(RGBColor::new(0, 0, 0).is_ok());
        assert!(RGBColor::new(255u32, 255, 255).is_ok());
        assert_eq!(
            RGBColor::new(256, 0, 0),
            Err(ColorError::InvalidChannel {
                channel: RGBChannel::Red,
                value: "256".to_string()
            })
        );
        assert_eq!(
            RGBColor::new(0, 300, 0),
            Err(ColorError::InvalidChannel {
                channel: RGBChannel::Green,
                value: "300".to_string()
            })
        );
        assert_eq!(
            RGBColor::new(0, 0, 4_294_967_296_i64),
            Err(ColorError::InvalidChannel {
                channel: RGBChannel::Blue,
                value: "4294967296".to_string()
            })
        );
        assert!(RGBColor::new(-1, 0, 0).is_err());
        assert!(RGBColor::new(0u64, 0, u64::MAX).is_err());
    }

    #[test]
    fn test_first_bad_channel_wins() {
        match RGBColor::new(0, 999, 999) {
            Err(ColorError::InvalidChannel { channel, .. }) => assert_eq!(channel, RGBChannel::Green),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_hex_codes() {
        let teal = RGBColor::from_hex_code("#008080").unwrap();
        assert_eq!(teal, RGBColor { r: 0, g: 128, b: 128 });
        assert_eq!(RGBColor::from_hex_code("aBcDeF").unwrap().to_string(), "#ABCDEF");
        assert_eq!(teal.to_hex(), 0x008080);
        assert_eq!(RGBColor::from_hex(0x008080), teal);
        for bad in &["", "#", "#12345", "#1234567", "#gg0000", "rgb(1, 2, 3)"] {
            assert_eq!(
                bad.parse::<RGBColor>(),
                Err(ColorError::InvalidHexCode(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_ordering_matches_hex() {
        let mut colors = vec![
            RGBColor::from_hex(0x00ff00),
            RGBColor::from_hex(0x0000ff),
            RGBColor::from_hex(0xff0000),
            RGBColor::from_hex(0x00ff01),
        ];
        colors.sort();
        let hexes: Vec<u32> = colors.into_iter().map(RGBColor::to_hex).collect();
        assert_eq!(hexes, vec![0x0000ff, 0x00ff00, 0x00ff01, 0xff0000]);
    }

    #[test]
    fn test_gray() {
        assert!(RGBColor::WHITE.is_gray());
        assert!(RGBColor::from((7, 7, 7)).is_gray());
        assert!(!RGBColor::from((7, 7, 8)).is_gray());
    }
}
