//! This file implements HSI (hue, saturation, intensity), a perceptual system. Unlike the hexagonal
//! HSL and HSV, the hue here is a true angle computed with an arccosine, measured in radians.
//!
//! Grays have no hue; this crate puts every gray at a hue of π, the middle of the range, with a
//! saturation of 0.

use std::f64::consts::PI;

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::space::ColorSpace;

/// A color in HSI.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// # use colorspaces::colors::HSIColor;
/// use std::f64::consts::PI;
/// let black = HSIColor::convert(0, 0, 0)?;
/// assert_eq!(black.h, PI);
/// assert_eq!(black.s, 0.);
/// assert_eq!(black.i, 0.);
/// # Ok::<(), colorspaces::ColorError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSIColor {
    /// The hue, in radians. Ranges from 0 to 2π.
    pub h: f64,
    /// The saturation. Ranges from 0 to 1.
    pub s: f64,
    /// The intensity, the mean of the RGB channels. Ranges from 0 to 255.
    pub i: f64,
}

impl Color for HSIColor {
    const SPACE: ColorSpace = ColorSpace::Hsi;
    const CHANNELS: [&'static str; 3] = ["H", "S", "I"];

    fn from_rgb(rgb: RGBColor) -> HSIColor {
        let (r, g, b) = rgb.channels();
        let sum = r + g + b;
        let i = sum / 3.0;
        if rgb.is_gray() {
            return HSIColor { h: PI, s: 0.0, i };
        }

        let r_g = r - g;
        let r_b = r - b;
        let g_b = g - b;
        // the denominator is only 0 for grays, handled above
        let num = 0.5 * (r_g + r_b);
        let den = (r_g * r_g + r_b * g_b).sqrt();
        // rounding can push the ratio just past ±1, where acos is NaN
        let mut h = (num / den).max(-1.0).min(1.0).acos();
        if b > g {
            h = 2.0 * PI - h;
        }

        let min = r.min(g).min(b);
        let s = 1.0 - 3.0 * min / sum;
        HSIColor { h, s, i }
    }
}

impl Bound for HSIColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 2. * PI), (0., 1.), (0., 255.)]
    }
}

impl From<Coord> for HSIColor {
    fn from(c: Coord) -> HSIColor {
        HSIColor {
            h: c.x,
            s: c.y,
            i: c.z,
        }
    }
}

impl From<HSIColor> for Coord {
    fn from(c: HSIColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.i,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsi_grays() {
        for &v in &[0u8, 1, 128, 255] {
            let gray = HSIColor::from_rgb(RGBColor::from((v, v, v)));
            assert_eq!(gray.h, PI);
            assert_eq!(gray.s, 0.);
            assert_eq!(gray.i, f64::from(v));
        }
    }

    #[test]
    fn test_hsi_primaries() {
        let red = HSIColor::convert(255, 0, 0).unwrap();
        assert!(red.h.abs() <= 1e-12);
        assert!((red.s - 1.).abs() <= 1e-12);
        assert_eq!(red.i, 85.);

        let green = HSIColor::convert(0, 255, 0).unwrap();
        assert!((green.h - 2. * PI / 3.).abs() <= 1e-12);

        // blue is past the b > g reflection
        let blue = HSIColor::convert(0, 0, 255).unwrap();
        assert!((blue.h - 4. * PI / 3.).abs() <= 1e-12);
    }

    #[test]
    fn test_hsi_saturation() {
        // min is 50, sum is 300: 1 - 150 / 300
        let c = HSIColor::convert(150, 100, 50).unwrap();
        assert!((c.s - 0.5).abs() <= 1e-12);
        assert!(c.h > 0. && c.h < PI / 3.);
    }
}
