//! The H1H2H3 space, another linear system with roughly independent components, used for color
//! quantization.
//!
//! Reference: J. P. Braquelaire and L. Brun, "Comparison and optimization of methods of color image
//! quantization", IEEE Transactions on Image Processing 6(7), 1997.

use crate::bound::Bound;
use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::space::ColorSpace;

/// A color in H1H2H3.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct H1H2H3Color {
    /// Red plus green. Ranges from 0 to 510.
    pub h1: f64,
    /// Red minus green. Ranges from -255 to 255.
    pub h2: f64,
    /// Blue minus the mean of red and green. Ranges from -255 to 255.
    pub h3: f64,
}

impl Color for H1H2H3Color {
    const SPACE: ColorSpace = ColorSpace::H1h2h3;
    const CHANNELS: [&'static str; 3] = ["H1", "H2", "H3"];

    fn from_rgb(rgb: RGBColor) -> H1H2H3Color {
        let (r, g, b) = rgb.channels();
        let h1 = r + g;
        H1H2H3Color {
            h1,
            h2: r - g,
            h3: b - 0.5 * h1,
        }
    }
}

impl Bound for H1H2H3Color {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 510.), (-255., 255.), (-255., 255.)]
    }
}

impl From<Coord> for H1H2H3Color {
    fn from(c: Coord) -> H1H2H3Color {
        H1H2H3Color {
            h1: c.x,
            h2: c.y,
            h3: c.z,
        }
    }
}

impl From<H1H2H3Color> for Coord {
    fn from(c: H1H2H3Color) -> Coord {
        Coord {
            x: c.h1,
            y: c.h2,
            z: c.h3,
        }
    }
}
