//! This module defines [`ColorSpaceValue`], what a runtime conversion through [`ColorSpace`]
//! produces. Alongside the three channels it remembers the RGB color it came from, which is what
//! lets values from two different spaces be compared: the other value is simply converted again.

use float_cmp::ApproxEq;
use tracing::debug;

use crate::bound;
use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::distance::NormalizedMetric;
use crate::error::{ColorError, Result};
use crate::space::ColorSpace;

/// A color expressed in one of the supported spaces. Values are immutable; every conversion makes a
/// new one.
///
/// Values serialize but don't deserialize: a stored source RGB color could disagree with the stored
/// channels, and cross-space distances trust the source. Persist the [`RGBColor`] and convert again.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// let xyz = ColorSpace::Xyz.convert(10, 20, 30)?;
/// let lab = ColorSpace::Lab.convert(10, 20, 30)?;
/// // the Lab value is reconverted to XYZ through (10, 20, 30) first
/// assert_eq!(xyz.distance(&lab)?, 0.);
/// # Ok::<(), colorspaces::ColorError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ColorSpaceValue {
    space: ColorSpace,
    coord: Coord,
    source: Option<RGBColor>,
}

impl ColorSpaceValue {
    pub(crate) fn converted(space: ColorSpace, coord: Coord, source: RGBColor) -> ColorSpaceValue {
        ColorSpaceValue {
            space,
            coord,
            source: Some(source),
        }
    }

    /// Wraps raw channel values that didn't come from a conversion. Such a value has no source RGB
    /// color, so it can only be compared with values of its own space.
    pub fn from_coord(space: ColorSpace, coord: Coord) -> ColorSpaceValue {
        ColorSpaceValue {
            space,
            coord,
            source: None,
        }
    }

    /// The space this value is expressed in.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The first channel.
    pub fn c1(&self) -> f64 {
        self.coord.x
    }

    /// The second channel.
    pub fn c2(&self) -> f64 {
        self.coord.y
    }

    /// The third channel.
    pub fn c3(&self) -> f64 {
        self.coord.z
    }

    /// All three channels.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The RGB color this value was converted from, if it came from a conversion.
    pub fn source(&self) -> Option<RGBColor> {
        self.source
    }

    /// The value as its statically typed color, or `None` if `T` is a different space.
    pub fn typed<T: Color>(&self) -> Option<T> {
        if T::SPACE == self.space {
            Some(T::from(self.coord))
        } else {
            None
        }
    }

    /// Maps each channel onto [0, 1] using the space's fixed bounds.
    /// # Errors
    /// `ColorError::DegenerateRange` if the space's range table has an empty channel.
    pub fn normalize(&self) -> Result<Coord> {
        self.space.normalize(self.coord)
    }

    /// Expresses this value in another space by converting its source RGB color. Returns a copy if
    /// it's already in that space.
    /// # Errors
    /// `ColorError::CrossSpace` if a conversion is needed but the source is unknown.
    pub fn express_in(&self, space: ColorSpace) -> Result<ColorSpaceValue> {
        if space == self.space {
            return Ok(*self);
        }
        let rgb = self.source.ok_or(ColorError::CrossSpace {
            from: self.space,
            to: space,
        })?;
        debug!(from = %self.space, to = %space, %rgb, "re-expressing through source RGB");
        Ok(space.convert_rgb(rgb))
    }

    /// Euclidean distance over the raw channels. `other` is first expressed in this value's space.
    /// # Errors
    /// `ColorError::CrossSpace` if `other` is from another space and has no source RGB color.
    pub fn distance(&self, other: &ColorSpaceValue) -> Result<f64> {
        let other = other.express_in(self.space)?;
        Ok(self.coord.euclidean_distance(&other.coord))
    }

    /// The weighted normalized distance with the default [`NormalizedMetric`], which only looks at
    /// the first channel. Lies in [0, 1] for values produced by a conversion.
    /// # Errors
    /// As [`normalized_distance_with`](#method.normalized_distance_with).
    pub fn normalized_distance(&self, other: &ColorSpaceValue) -> Result<f64> {
        self.normalized_distance_with(other, NormalizedMetric::default())
    }

    /// The weighted normalized distance: each channel's squared difference after normalization,
    /// weighted by the square of the channel's range, with the weights scaled to sum to 1.
    /// # Errors
    /// `ColorError::CrossSpace` as for [`distance`](#method.distance), or
    /// `ColorError::DegenerateRange` for a broken range table.
    pub fn normalized_distance_with(
        &self,
        other: &ColorSpaceValue,
        metric: NormalizedMetric,
    ) -> Result<f64> {
        let other = other.express_in(self.space)?;
        let bounds = self.space.bounds();
        let weights = bound::channel_weights(self.space, &bounds)?;
        let a = bound::normalize_within(self.space, &bounds, self.coord)?;
        let b = bound::normalize_within(self.space, &bounds, other.coord)?;
        Ok(metric.weighted(a, b, weights))
    }

    /// Whether two values are in the same space and every channel matches to within floating-point
    /// noise. Sources are not compared.
    pub fn approx_equal(&self, other: &ColorSpaceValue) -> bool {
        let a: [f64; 3] = self.coord.into();
        let b: [f64; 3] = other.coord.into();
        self.space == other.space
            && a
                .iter()
                .zip(b.iter())
                .all(|(&x, &y)| x.approx_eq(y, (1e-9, 4)))
    }
}
