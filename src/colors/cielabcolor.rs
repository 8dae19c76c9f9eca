//! A module that implements the CIELAB color space on top of [`XYZColor`]. Like
//! [`CIELUVColor`](super::CIELUVColor), it is referenced to the XYZ value of RGB white rather than a
//! standard illuminant, so the numbers won't match a D50 or D65 CIELAB from another library.
//! Formally the three values are called L\*, a\*, and b\*, but they're just `l`, `a` and `b` here.
//!
//! `b` is computed as `500·(f(Y) − f(Z))` and then clamped, not with the usual CIE factor of 200.
//! Most colors get a `b` 2.5 times larger than standard CIELAB, and saturated blues and yellows
//! pile up on the bounds. [`CIELABColor::from_rgb_cie`] uses 200 instead.
//!
//! Reference: G. Sharma and H. J. Trussell, "Digital Color Imaging", IEEE Transactions on Image
//! Processing 6(7), 1997.

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::colors::cieluvcolor::{lightness, LINEAR_CUTOFF};
use crate::colors::xyzcolor::{XYZColor, REFERENCE_WHITE};
use crate::coord::Coord;
use crate::space::ColorSpace;

// the cube-root nonlinearity, with a linear segment near 0
fn f(x: f64) -> f64 {
    if x > LINEAR_CUTOFF {
        x.powf(1.0 / 3.0)
    } else {
        7.787 * x + 16.0 / 116.0
    }
}

/// A color in the CIELAB color space. `a` and `b` are opponent color axes, clamped to the range
/// 8-bit RGB colors cover.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The lightness of the color: 0 for black, 100 for white.
    pub l: f64,
    /// The green (negative) to magenta (positive) axis. Ranges from -137.72 to 96.84.
    pub a: f64,
    /// The blue (negative) to yellow (positive) axis. Ranges from -99.23 to 115.65.
    pub b: f64,
}

impl Color for CIELABColor {
    const SPACE: ColorSpace = ColorSpace::Lab;
    const CHANNELS: [&'static str; 3] = ["L", "a", "b"];

    fn from_rgb(rgb: RGBColor) -> CIELABColor {
        CIELABColor::with_b_factor(rgb, 500.0)
    }
}

impl CIELABColor {
    /// Converts with the standard CIE factor of 200 on `b`. Every other channel matches
    /// [`from_rgb`](trait.Color.html#tymethod.from_rgb), and the result is clamped the same way.
    /// [`ColorSpace::Lab`](crate::space::ColorSpace::Lab) always uses `from_rgb`.
    pub fn from_rgb_cie(rgb: RGBColor) -> CIELABColor {
        CIELABColor::with_b_factor(rgb, 200.0)
    }

    fn with_b_factor(rgb: RGBColor, b_factor: f64) -> CIELABColor {
        let xyz = XYZColor::from_rgb(rgb);
        let wp = *REFERENCE_WHITE;
        let fx = f(xyz.x / wp.x);
        let fy = f(xyz.y / wp.y);
        let fz = f(xyz.z / wp.z);

        let l = lightness(xyz.y / wp.y);
        let a = 500.0 * (fx - fy);
        let b = b_factor * (fy - fz);
        CIELABColor::from(CIELABColor::clamp_coord(Coord { x: l, y: a, z: b }))
    }
}

impl Bound for CIELABColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 100.), (-137.72, 96.84), (-99.23, 115.65)]
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(c: CIELABColor) -> Coord {
        Coord {
            x: c.l,
            y: c.a,
            z: c.b,
        }
    }
}
