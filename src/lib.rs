//! Colorspaces converts 8-bit RGB colors into eight alternative color spaces: CIE XYZ, CIELUV,
//! CIELAB, AC1C2, YC1C2, HSI, I1I2I3 and H1H2H3. Every space has a fixed range per channel, so a
//! converted color can also be normalized onto the unit cube and compared with other colors through
//! a weighted, normalized distance.
//!
//! There are two ways in. Code that knows statically which space it wants uses the structs in
//! [`colors`] and the [`Color`](color::Color) trait. Code that picks a space at runtime uses
//! [`ColorSpace`] and gets back a [`ColorSpaceValue`], which remembers the RGB color it came from so
//! values from different spaces can still be compared.
//!
//! ```
//! use colorspaces::prelude::*;
//!
//! let space: ColorSpace = "lab".parse()?;
//! let a = space.convert(255, 140, 0)?;
//! let b = ColorSpace::Hsi.convert(255, 165, 0)?;
//! // b is reconverted into Lab first
//! assert!(a.distance(&b)? > 0.);
//! assert!(a.normalized_distance(&b)? <= 1.);
//! # Ok::<(), colorspaces::ColorError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/colorspaces/0.1.0")]
#![deny(missing_docs)]
// the range tables and matrix constants read better without separators
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod bound;
pub mod color;
pub mod colors;
pub mod config;
pub mod coord;
pub mod distance;
pub mod error;
pub mod prelude;
pub mod projection;
pub mod space;
pub mod value;

pub use crate::error::{ColorError, Result};
pub use crate::space::ColorSpace;
pub use crate::value::ColorSpaceValue;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;
    use crate::color::{Color, RGBColor};
    use crate::colors::*;
    use proptest::prelude::*;

    fn in_declared_range(value: &ColorSpaceValue) -> bool {
        let bounds = value.space().bounds();
        let c = value.coord();
        [c.x, c.y, c.z]
            .iter()
            .zip(bounds.iter())
            .all(|(&v, &(min, max))| v >= min - 1e-9 && v <= max + 1e-9)
    }

    #[test]
    fn test_reference_values() {
        let white = ColorSpace::Xyz.convert(255, 255, 255).unwrap();
        assert!((white.c1() - 250.155).abs() <= 1e-2);
        assert!((white.c2() - 255.).abs() <= 1e-2);
        assert!((white.c3() - 301.41).abs() <= 1e-2);

        for space in &[ColorSpace::Xyz, ColorSpace::I1i2i3, ColorSpace::H1h2h3] {
            let black = space.convert(0, 0, 0).unwrap();
            assert_eq!((black.c1(), black.c2(), black.c3()), (0., 0., 0.));
        }
        let hsi = ColorSpace::Hsi.convert(0, 0, 0).unwrap();
        assert_eq!(
            (hsi.c1(), hsi.c2(), hsi.c3()),
            (std::f64::consts::PI, 0., 0.)
        );
    }

    #[test]
    fn test_invalid_channels_in_every_space() {
        for space in ColorSpace::ALL.iter() {
            assert_eq!(
                space.convert(256, 0, 0),
                Err(ColorError::InvalidChannel {
                    channel: color::RGBChannel::Red,
                    value: "256".to_string(),
                })
            );
            assert_eq!(
                space.convert(0, 300, 0),
                Err(ColorError::InvalidChannel {
                    channel: color::RGBChannel::Green,
                    value: "300".to_string(),
                })
            );
            assert_eq!(
                space.convert(0i64, 0, 4_294_967_296),
                Err(ColorError::InvalidChannel {
                    channel: color::RGBChannel::Blue,
                    value: "4294967296".to_string(),
                })
            );
            assert!(space.convert(-1, 0, 0).is_err());
        }
        assert!(XYZColor::convert(0, 0, 256).is_err());
        assert!(HSIColor::convert(0u16, 0, 1000).is_err());
    }

    #[test]
    fn test_typed_and_dynamic_agree() {
        let rgb = RGBColor::from((31, 41, 59));
        let luv: crate::coord::Coord = CIELUVColor::from_rgb(rgb).into();
        assert_eq!(ColorSpace::Luv.convert_rgb(rgb).coord(), luv);
        let value = ColorSpace::Ac1c2.convert_rgb(rgb);
        assert_eq!(value.typed::<AC1C2Color>(), Some(AC1C2Color::from_rgb(rgb)));
        assert_eq!(
            value.normalize().unwrap(),
            AC1C2Color::normalize_coord(value.coord()).unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_convert_in_range(r: u8, g: u8, b: u8) {
            for space in ColorSpace::ALL.iter() {
                let value = space.convert(r, g, b).unwrap();
                prop_assert!(in_declared_range(&value), "{:?}", value);
                let n = value.normalize().unwrap();
                for &c in [n.x, n.y, n.z].iter() {
                    prop_assert!(c >= -1e-9 && c <= 1. + 1e-9);
                }
            }
        }

        #[test]
        fn prop_conversion_is_idempotent(r: u8, g: u8, b: u8) {
            for space in ColorSpace::ALL.iter() {
                let first = space.convert(r, g, b).unwrap();
                let second = space.convert(r, g, b).unwrap();
                prop_assert_eq!(first.c1().to_bits(), second.c1().to_bits());
                prop_assert_eq!(first.c2().to_bits(), second.c2().to_bits());
                prop_assert_eq!(first.c3().to_bits(), second.c3().to_bits());
            }
        }

        #[test]
        fn prop_distances(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) {
            for space in ColorSpace::ALL.iter() {
                let a = space.convert(r1, g1, b1).unwrap();
                let b = space.convert(r2, g2, b2).unwrap();
                prop_assert_eq!(a.distance(&a).unwrap(), 0.);
                prop_assert_eq!(a.normalized_distance(&a).unwrap(), 0.);
                let d = a.distance(&b).unwrap();
                prop_assert!(d >= 0.);
                prop_assert!((d - b.distance(&a).unwrap()).abs() <= 1e-9);
                let nd = a.normalized_distance(&b).unwrap();
                prop_assert!(nd >= 0. && nd <= 1. + 1e-9);
            }
        }

        #[test]
        fn prop_cross_space_uses_source(r: u8, g: u8, b: u8) {
            let xyz = ColorSpace::Xyz.convert(r, g, b).unwrap();
            for space in ColorSpace::ALL.iter() {
                let other = space.convert(r, g, b).unwrap();
                prop_assert_eq!(xyz.distance(&other).unwrap(), 0.);
            }
        }
    }
}
