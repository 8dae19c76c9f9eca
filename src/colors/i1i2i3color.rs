//! Ohta's I1I2I3 space, an approximation of the Karhunen-Loève transform of RGB: the three axes are
//! close to statistically independent for natural images.
//!
//! Reference: Y.-I. Ohta, T. Kanade and T. Sakai, "Color Information for Region Segmentation",
//! CGIP 13(3), 1980.

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::space::ColorSpace;

/// A color in I1I2I3.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct I1I2I3Color {
    /// The mean of the RGB channels. Ranges from 0 to 255.
    pub i1: f64,
    /// Half of red minus blue. Ranges from -127.5 to 127.5.
    pub i2: f64,
    /// A quarter of twice red minus green and blue. Ranges from -127.5 to 127.5.
    pub i3: f64,
}

impl Color for I1I2I3Color {
    const SPACE: ColorSpace = ColorSpace::I1i2i3;
    const CHANNELS: [&'static str; 3] = ["I1", "I2", "I3"];

    fn from_rgb(rgb: RGBColor) -> I1I2I3Color {
        let (r, g, b) = rgb.channels();
        I1I2I3Color {
            i1: (r + g + b) / 3.0,
            i2: 0.5 * (r - b),
            i3: 0.25 * (2.0 * r - g - b),
        }
    }
}

impl Bound for I1I2I3Color {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 255.), (-127.5, 127.5), (-127.5, 127.5)]
    }
}

impl From<Coord> for I1I2I3Color {
    fn from(c: Coord) -> I1I2I3Color {
        I1I2I3Color {
            i1: c.x,
            i2: c.y,
            i3: c.z,
        }
    }
}

impl From<I1I2I3Color> for Coord {
    fn from(c: I1I2I3Color) -> Coord {
        Coord {
            x: c.i1,
            y: c.i2,
            z: c.i3,
        }
    }
}
