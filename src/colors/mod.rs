//! This module contains one module per supported color space, each with a type that implements
//! [`Color`] and [`Bound`]. For convenience, each type is imported into this module's namespace
//! directly.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`Bound`]: ../bound/trait.Bound.html
pub mod ac1c2color;
pub mod cielabcolor;
pub mod cieluvcolor;
pub mod h1h2h3color;
pub mod hsicolor;
pub mod i1i2i3color;
pub mod xyzcolor;
pub mod yc1c2color;

// for convenience, use this namespace for the color objects
pub use self::ac1c2color::AC1C2Color;
pub use self::cielabcolor::CIELABColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::h1h2h3color::H1H2H3Color;
pub use self::hsicolor::HSIColor;
pub use self::i1i2i3color::I1I2I3Color;
pub use self::xyzcolor::XYZColor;
pub use self::yc1c2color::YC1C2Color;
