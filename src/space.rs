//! This module provides [`ColorSpace`], the closed set of supported color spaces as a runtime value.
//! Where the types in [`colors`](crate::colors) are for code that knows statically which space it
//! wants, `ColorSpace` is for code that picks one at runtime, such as a viewer letting its user
//! switch between spaces.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::bound::{self, Bound};
use crate::color::{ChannelValue, Color, RGBColor};
use crate::colors::{
    AC1C2Color, CIELABColor, CIELUVColor, H1H2H3Color, HSIColor, I1I2I3Color, XYZColor,
    YC1C2Color,
};
use crate::coord::Coord;
use crate::error::{ColorError, Result};
use crate::value::ColorSpaceValue;

lazy_static! {
    // lowercase name -> space; FromStr lowercases its input before looking it up
    static ref SPACE_NAMES: HashMap<&'static str, ColorSpace> = hashmap! {
        "xyz" => ColorSpace::Xyz,
        "ciexyz" => ColorSpace::Xyz,
        "luv" => ColorSpace::Luv,
        "cieluv" => ColorSpace::Luv,
        "lab" => ColorSpace::Lab,
        "cielab" => ColorSpace::Lab,
        "ac1c2" => ColorSpace::Ac1c2,
        "yc1c2" => ColorSpace::Yc1c2,
        "hsi" => ColorSpace::Hsi,
        "i1i2i3" => ColorSpace::I1i2i3,
        "h1h2h3" => ColorSpace::H1h2h3,
    };
}

/// One of the eight supported color spaces.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// let lab: ColorSpace = "cielab".parse()?;
/// assert_eq!(lab, ColorSpace::Lab);
/// assert_eq!(lab.channel_names(), ["L", "a", "b"]);
///
/// let orange = lab.convert(255, 165, 0)?;
/// let point = orange.normalize()?;
/// assert!(point.x > 0. && point.x < 1.);
/// # Ok::<(), colorspaces::ColorError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColorSpace {
    /// See [`XYZColor`].
    #[serde(rename = "XYZ", alias = "xyz")]
    Xyz,
    /// See [`CIELUVColor`].
    #[serde(rename = "Luv", alias = "luv")]
    Luv,
    /// See [`CIELABColor`].
    #[serde(rename = "Lab", alias = "lab")]
    Lab,
    /// See [`AC1C2Color`].
    #[serde(rename = "AC1C2", alias = "ac1c2")]
    Ac1c2,
    /// See [`YC1C2Color`].
    #[serde(rename = "YC1C2", alias = "yc1c2")]
    Yc1c2,
    /// See [`HSIColor`].
    #[serde(rename = "HSI", alias = "hsi")]
    Hsi,
    /// See [`I1I2I3Color`].
    #[serde(rename = "I1I2I3", alias = "i1i2i3")]
    I1i2i3,
    /// See [`H1H2H3Color`].
    #[serde(rename = "H1H2H3", alias = "h1h2h3")]
    H1h2h3,
}

fn coord_of<T: Color>(rgb: RGBColor) -> Coord {
    T::from_rgb(rgb).into()
}

impl ColorSpace {
    /// Every space, in the order a viewer offers them.
    pub const ALL: [ColorSpace; 8] = [
        ColorSpace::Xyz,
        ColorSpace::Luv,
        ColorSpace::Lab,
        ColorSpace::Ac1c2,
        ColorSpace::Yc1c2,
        ColorSpace::Hsi,
        ColorSpace::I1i2i3,
        ColorSpace::H1h2h3,
    ];

    /// The canonical name of the space.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Xyz => "XYZ",
            ColorSpace::Luv => "Luv",
            ColorSpace::Lab => "Lab",
            ColorSpace::Ac1c2 => "AC1C2",
            ColorSpace::Yc1c2 => "YC1C2",
            ColorSpace::Hsi => "HSI",
            ColorSpace::I1i2i3 => "I1I2I3",
            ColorSpace::H1h2h3 => "H1H2H3",
        }
    }

    /// Labels for the three channels, suitable for axis names.
    pub fn channel_names(self) -> [&'static str; 3] {
        match self {
            ColorSpace::Xyz => XYZColor::CHANNELS,
            ColorSpace::Luv => CIELUVColor::CHANNELS,
            ColorSpace::Lab => CIELABColor::CHANNELS,
            ColorSpace::Ac1c2 => AC1C2Color::CHANNELS,
            ColorSpace::Yc1c2 => YC1C2Color::CHANNELS,
            ColorSpace::Hsi => HSIColor::CHANNELS,
            ColorSpace::I1i2i3 => I1I2I3Color::CHANNELS,
            ColorSpace::H1h2h3 => H1H2H3Color::CHANNELS,
        }
    }

    /// The fixed [min, max] of each channel. See [`Bound::bounds`].
    pub fn bounds(self) -> [(f64, f64); 3] {
        match self {
            ColorSpace::Xyz => XYZColor::bounds(),
            ColorSpace::Luv => CIELUVColor::bounds(),
            ColorSpace::Lab => CIELABColor::bounds(),
            ColorSpace::Ac1c2 => AC1C2Color::bounds(),
            ColorSpace::Yc1c2 => YC1C2Color::bounds(),
            ColorSpace::Hsi => HSIColor::bounds(),
            ColorSpace::I1i2i3 => I1I2I3Color::bounds(),
            ColorSpace::H1h2h3 => H1H2H3Color::bounds(),
        }
    }

    /// Converts an already-validated RGB color into this space.
    pub fn convert_rgb(self, rgb: RGBColor) -> ColorSpaceValue {
        let coord = match self {
            ColorSpace::Xyz => coord_of::<XYZColor>(rgb),
            ColorSpace::Luv => coord_of::<CIELUVColor>(rgb),
            ColorSpace::Lab => coord_of::<CIELABColor>(rgb),
            ColorSpace::Ac1c2 => coord_of::<AC1C2Color>(rgb),
            ColorSpace::Yc1c2 => coord_of::<YC1C2Color>(rgb),
            ColorSpace::Hsi => coord_of::<HSIColor>(rgb),
            ColorSpace::I1i2i3 => coord_of::<I1I2I3Color>(rgb),
            ColorSpace::H1h2h3 => coord_of::<H1H2H3Color>(rgb),
        };
        trace!(space = %self, %rgb, c1 = coord.x, c2 = coord.y, c3 = coord.z, "converted");
        ColorSpaceValue::converted(self, coord, rgb)
    }

    /// Validates three RGB channels and converts them into this space.
    /// # Errors
    /// `ColorError::InvalidChannel` if any channel is outside [0, 255].
    pub fn convert<T: ChannelValue>(self, r: T, g: T, b: T) -> Result<ColorSpaceValue> {
        Ok(self.convert_rgb(RGBColor::new(r, g, b)?))
    }

    /// Maps a point in this space onto [0, 1] per channel.
    /// # Errors
    /// `ColorError::DegenerateRange` if the space's range table has an empty channel.
    pub fn normalize(self, point: Coord) -> Result<Coord> {
        bound::normalize_within(self, &self.bounds(), point)
    }
}

impl Default for ColorSpace {
    fn default() -> ColorSpace {
        ColorSpace::Xyz
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    /// Parses a space name, ignoring case. Besides the canonical names, `CIEXYZ`, `CIELUV` and
    /// `CIELAB` are accepted.
    fn from_str(s: &str) -> Result<ColorSpace> {
        SPACE_NAMES
            .get(s.trim().to_lowercase().as_str())
            .cloned()
            .ok_or_else(|| ColorError::UnknownSpace(s.to_string()))
    }
}
