//! The YC1C2 space, the AC1C2 idea turned around: C1 opposes red to green and blue, C2 opposes blue
//! to green.
//!
//! Reference: T. Carron, "Segmentation d'images couleur dans la base Teinte Luminance Saturation",
//! PhD thesis, Université de Savoie, 1995.

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::colors::ac1c2color::{round_millis, HALF_SQRT_3};
use crate::coord::Coord;
use crate::space::ColorSpace;

/// A color in YC1C2.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YC1C2Color {
    /// The mean of the RGB channels. Ranges from 0 to 255.
    pub y: f64,
    /// Red against the mean of green and blue, rounded to three decimals. Ranges from -255 to 255.
    pub c1: f64,
    /// Blue against green. Ranges over ±255·√3/2.
    pub c2: f64,
}

impl Color for YC1C2Color {
    const SPACE: ColorSpace = ColorSpace::Yc1c2;
    const CHANNELS: [&'static str; 3] = ["Y", "C1", "C2"];

    fn from_rgb(rgb: RGBColor) -> YC1C2Color {
        let (r, g, b) = rgb.channels();
        YC1C2Color {
            y: (r + g + b) / 3.0,
            c1: round_millis(r - (g + b) * 0.5),
            c2: HALF_SQRT_3 * (b - g),
        }
    }
}

impl Bound for YC1C2Color {
    fn bounds() -> [(f64, f64); 3] {
        [
            (0., 255.),
            (-255., 255.),
            (-255. * HALF_SQRT_3, 255. * HALF_SQRT_3),
        ]
    }
}

impl From<Coord> for YC1C2Color {
    fn from(c: Coord) -> YC1C2Color {
        YC1C2Color {
            y: c.x,
            c1: c.y,
            c2: c.z,
        }
    }
}

impl From<YC1C2Color> for Coord {
    fn from(c: YC1C2Color) -> Coord {
        Coord {
            x: c.y,
            y: c.c1,
            z: c.c2,
        }
    }
}
