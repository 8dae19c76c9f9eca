//! This module implements the CIELUV color space, a luminance-chrominance system computed from
//! [`XYZColor`]. The reference white isn't a CIE illuminant: it's whatever RGB (255, 255, 255)
//! converts to, so white always lands on L = 100, u = v = 0.
//!
//! Reference: G. Sharma and H. J. Trussell, "Digital Color Imaging", IEEE Transactions on Image
//! Processing 6(7), 1997.

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::colors::xyzcolor::{XYZColor, REFERENCE_WHITE};
use crate::coord::Coord;
use crate::space::ColorSpace;

/// Below this relative luminance, lightness is linear instead of a cube root.
pub(crate) const LINEAR_CUTOFF: f64 = 0.008856;

/// CIE lightness from relative luminance `Y / Y_white`. Shared with CIELAB.
pub(crate) fn lightness(y_ratio: f64) -> f64 {
    if y_ratio > LINEAR_CUTOFF {
        116.0 * y_ratio.powf(1.0 / 3.0) - 16.0
    } else {
        903.3 * y_ratio
    }
}

// u' and v' chromaticity; None for black, where the denominator is 0
fn chromaticity(xyz: XYZColor) -> Option<(f64, f64)> {
    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if denom == 0.0 {
        None
    } else {
        Some((4.0 * xyz.x / denom, 9.0 * xyz.y / denom))
    }
}

/// A color in CIELUV. U and V describe chromaticity and are clamped to the range that 8-bit RGB
/// colors cover.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::colors::CIELUVColor;
/// let white = CIELUVColor::convert(255, 255, 255)?;
/// assert!((white.l - 100.).abs() <= 1e-9);
/// assert!(white.u.abs() <= 1e-9);
/// assert!(white.v.abs() <= 1e-9);
/// # Ok::<(), colorspaces::ColorError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The lightness component. Ranges from 0 to 100.
    pub l: f64,
    /// Roughly how red (positive) versus green (negative) the color is. Ranges from -131.95 to
    /// 220.8.
    pub u: f64,
    /// Roughly how yellow (positive) versus blue (negative) the color is. Ranges from -139.05 to
    /// 121.47.
    pub v: f64,
}

impl Color for CIELUVColor {
    const SPACE: ColorSpace = ColorSpace::Luv;
    const CHANNELS: [&'static str; 3] = ["L", "u", "v"];

    fn from_rgb(rgb: RGBColor) -> CIELUVColor {
        let xyz = XYZColor::from_rgb(rgb);
        let wp = *REFERENCE_WHITE;

        let l = lightness(xyz.y / wp.y);
        // black has no chromaticity, but with l = 0 it doesn't need one
        let (u, v) = match (chromaticity(xyz), chromaticity(wp)) {
            (Some((u_prime, v_prime)), Some((u_prime_n, v_prime_n))) => (
                13.0 * l * (u_prime - u_prime_n),
                13.0 * l * (v_prime - v_prime_n),
            ),
            _ => (0.0, 0.0),
        };
        CIELUVColor::from(CIELUVColor::clamp_coord(Coord { x: l, y: u, z: v }))
    }
}

impl Bound for CIELUVColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 100.), (-131.95, 220.8), (-139.05, 121.47)]
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<CIELUVColor> for Coord {
    fn from(c: CIELUVColor) -> Coord {
        Coord {
            x: c.l,
            y: c.u,
            z: c.v,
        }
    }
}
