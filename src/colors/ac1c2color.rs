//! The AC1C2 space: an achromatic axis and two chromatic axes, designed to fit human vision better
//! than raw RGB while staying a cheap linear transform of it.
//!
//! Reference: M. J. Swain and D. H. Ballard, "Color Indexing", IJCV 7(1), 1991.

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::space::ColorSpace;

// sqrt(3) / 2
pub(crate) const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Rounds to three decimal places, half away from zero.
pub(crate) fn round_millis(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// A color in AC1C2.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AC1C2Color {
    /// The achromatic component, the mean of the RGB channels. Ranges from 0 to 255.
    pub a: f64,
    /// The red-green axis, rounded to three decimals. Ranges over ±255·√3/2.
    pub c1: f64,
    /// The blue-yellow axis. Ranges from -255 to 255.
    pub c2: f64,
}

impl Color for AC1C2Color {
    const SPACE: ColorSpace = ColorSpace::Ac1c2;
    const CHANNELS: [&'static str; 3] = ["A", "C1", "C2"];

    fn from_rgb(rgb: RGBColor) -> AC1C2Color {
        let (r, g, b) = rgb.channels();
        AC1C2Color {
            a: (r + g + b) / 3.0,
            c1: round_millis(HALF_SQRT_3 * (r - g)),
            c2: b - (r + g) * 0.5,
        }
    }
}

impl Bound for AC1C2Color {
    fn bounds() -> [(f64, f64); 3] {
        [
            (0., 255.),
            (-255. * HALF_SQRT_3, 255. * HALF_SQRT_3),
            (-255., 255.),
        ]
    }
}

impl From<Coord> for AC1C2Color {
    fn from(c: Coord) -> AC1C2Color {
        AC1C2Color {
            a: c.x,
            c1: c.y,
            c2: c.z,
        }
    }
}

impl From<AC1C2Color> for Coord {
    fn from(c: AC1C2Color) -> Coord {
        Coord {
            x: c.a,
            y: c.c1,
            z: c.c2,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_half_sqrt_3() {
        assert!((HALF_SQRT_3 - 3f64.sqrt() / 2.).abs() <= 1e-15);
    }

    #[test]
    fn test_ac1c2_rounding() {
        let red = AC1C2Color::convert(255, 0, 0).unwrap();
        assert_eq!(red.c1, 220.836);
        assert!(red.c1 <= AC1C2Color::bounds()[1].1);
        assert_eq!(red.a, 85.);
        assert_eq!(red.c2, -127.5);
        let c = AC1C2Color::convert(10, 9, 0).unwrap();
        assert_eq!(c.c1, 0.866);
    }

    #[test]
    fn test_ac1c2_gray_axis() {
        let gray = AC1C2Color::convert(40, 40, 40).unwrap();
        assert_eq!(gray, AC1C2Color { a: 40., c1: 0., c2: 0. });
    }
}
