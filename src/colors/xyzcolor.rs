//! This module implements a CIE XYZ primary system computed directly from 8-bit RGB with a fixed
//! linear transform, without gamma decoding or illuminant handling. It's the intermediate
//! representation for both [`CIELABColor`](super::CIELABColor) and
//! [`CIELUVColor`](super::CIELUVColor), which reference everything to the XYZ value of RGB white.
//!
//! Reference: N. Vandenbroucke, L. Macaire, and J.-G. Postaire, "Color systems coding for color
//! image processing", CGIP 2000.

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::space::ColorSpace;

lazy_static! {
    /// The XYZ value of RGB (255, 255, 255). Lab and Luv divide by this.
    pub(crate) static ref REFERENCE_WHITE: XYZColor = XYZColor::from_rgb(RGBColor::WHITE);
}

/// A color in the XYZ primary system. The components keep the 0-255 scale of the RGB input instead
/// of being normalized to Y = 1.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::colors::XYZColor;
/// let white = XYZColor::convert(255, 255, 255)?;
/// assert!((white.x - 250.155).abs() <= 1e-2);
/// assert!((white.y - 255.).abs() <= 1e-2);
/// assert!((white.z - 301.41).abs() <= 1e-2);
/// # Ok::<(), colorspaces::ColorError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X component. Ranges from 0 to 250.16.
    pub x: f64,
    /// The Y component, which is the luma of the color. Ranges from 0 to 255.
    pub y: f64,
    /// The Z component. Ranges from 0 to 301.41.
    pub z: f64,
}

impl Color for XYZColor {
    const SPACE: ColorSpace = ColorSpace::Xyz;
    const CHANNELS: [&'static str; 3] = ["X", "Y", "Z"];

    fn from_rgb(rgb: RGBColor) -> XYZColor {
        let (r, g, b) = rgb.channels();
        XYZColor {
            x: r * 0.607 + g * 0.174 + b * 0.200,
            y: r * 0.299 + g * 0.587 + b * 0.114,
            z: g * 0.066 + b * 1.116,
        }
    }
}

impl Bound for XYZColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 250.16), (0., 255.), (0., 301.41)]
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(c: XYZColor) -> Coord {
        Coord {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_xyz_black() {
        let black = XYZColor::convert(0, 0, 0).unwrap();
        assert_eq!(black, XYZColor { x: 0., y: 0., z: 0. });
    }

    #[test]
    fn test_xyz_primaries() {
        let red = XYZColor::convert(255, 0, 0).unwrap();
        assert!((red.x - 154.785).abs() <= 1e-9);
        assert!((red.y - 76.245).abs() <= 1e-9);
        assert_eq!(red.z, 0.);
        let blue = XYZColor::convert(0, 0, 255).unwrap();
        assert!((blue.x - 51.).abs() <= 1e-9);
        assert!((blue.z - 284.58).abs() <= 1e-9);
    }

    #[test]
    fn test_reference_white() {
        assert_eq!(*REFERENCE_WHITE, XYZColor::from_rgb(RGBColor::WHITE));
        assert!((REFERENCE_WHITE.x - 250.155).abs() <= 1e-9);
    }
}
