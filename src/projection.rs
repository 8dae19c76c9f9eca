//! A [`Projection`] turns RGB colors into points in the unit cube of one selected color space,
//! ready to be drawn as a 3D scatter plot. It holds the currently selected space, so switching spaces
//! is a matter of calling [`Projection::select`] and projecting again.

use std::collections::BTreeSet;

use tracing::debug;

use crate::color::RGBColor;
use crate::config::ProjectionConfig;
use crate::coord::Coord;
use crate::distance::NormalizedMetric;
use crate::error::Result;
use crate::space::ColorSpace;
use crate::value::ColorSpaceValue;

/// Projects RGB colors into the normalized coordinates of a selected color space.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// let mut projection = Projection::new(ColorSpace::Hsi);
/// assert_eq!(projection.axis_names(), ["H", "S", "I"]);
///
/// projection.select(ColorSpace::I1i2i3);
/// let white = projection.point(RGBColor::WHITE)?;
/// assert_eq!(white.x, 1.);
/// assert_eq!(projection.lattice_points()?.len(), 32 * 32 * 32);
/// # Ok::<(), colorspaces::ColorError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    space: ColorSpace,
    lattice_step: u8,
    metric: NormalizedMetric,
}

impl Default for Projection {
    fn default() -> Projection {
        Projection::from_config(&ProjectionConfig::default())
    }
}

impl Projection {
    /// A projection into `space` with the default lattice step and metric.
    pub fn new(space: ColorSpace) -> Projection {
        Projection {
            space,
            ..Projection::default()
        }
    }

    /// A projection set up from stored settings.
    pub fn from_config(config: &ProjectionConfig) -> Projection {
        Projection {
            space: config.space,
            lattice_step: config.lattice_step.max(1),
            metric: config.metric,
        }
    }

    /// Switches to another space. Points already computed are not touched.
    pub fn select(&mut self, space: ColorSpace) {
        debug!(from = %self.space, to = %space, "selected color space");
        self.space = space;
    }

    /// The currently selected space.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The metric [`normalized_distance`](#method.normalized_distance) uses.
    pub fn metric(&self) -> NormalizedMetric {
        self.metric
    }

    /// Labels for the x, y and z axes.
    pub fn axis_names(&self) -> [&'static str; 3] {
        self.space.channel_names()
    }

    /// Converts a color into the selected space without normalizing it.
    pub fn value(&self, rgb: RGBColor) -> ColorSpaceValue {
        self.space.convert_rgb(rgb)
    }

    /// Converts a color into the selected space and normalizes it, giving a point in the unit cube.
    /// # Errors
    /// `ColorError::DegenerateRange` if the space's range table is broken.
    pub fn point(&self, rgb: RGBColor) -> Result<Coord> {
        self.value(rgb).normalize()
    }

    /// The normalized distance between two colors in the selected space, using the configured
    /// metric.
    pub fn normalized_distance(&self, a: RGBColor, b: RGBColor) -> Result<f64> {
        self.value(a)
            .normalized_distance_with(&self.value(b), self.metric)
    }

    /// Every RGB color whose channels are all multiples of `step`, starting at 0, ordered by red,
    /// then green, then blue. A step of 0 is treated as 1.
    ///
    /// ```
    /// # use colorspaces::prelude::*;
    /// let lattice = Projection::lattice(128);
    /// assert_eq!(lattice.len(), 8);
    /// assert_eq!(lattice[1], RGBColor::from((0, 0, 128)));
    /// assert_eq!(lattice[7], RGBColor::from((128, 128, 128)));
    /// ```
    pub fn lattice(step: u8) -> Vec<RGBColor> {
        let step = usize::from(step.max(1));
        let values: Vec<u8> = (0..=255u8).step_by(step).collect();
        let mut colors = Vec::with_capacity(values.len().pow(3));
        for &r in &values {
            for &g in &values {
                for &b in &values {
                    colors.push(RGBColor { r, g, b });
                }
            }
        }
        colors
    }

    /// The configured lattice projected into the selected space.
    pub fn lattice_points(&self) -> Result<Vec<Coord>> {
        let lattice = Projection::lattice(self.lattice_step);
        debug!(space = %self.space, step = self.lattice_step, count = lattice.len(), "projecting lattice");
        lattice.into_iter().map(|rgb| self.point(rgb)).collect()
    }

    /// The distinct colors among `pixels`, sorted by hex code.
    pub fn unique_colors<I>(pixels: I) -> Vec<RGBColor>
    where
        I: IntoIterator<Item = RGBColor>,
    {
        let unique: BTreeSet<RGBColor> = pixels.into_iter().collect();
        unique.into_iter().collect()
    }

    /// Projects the colors of an image, each distinct color once. The points come back alongside
    /// their colors, sorted by hex code.
    pub fn image_points<I>(&self, pixels: I) -> Result<Vec<(RGBColor, Coord)>>
    where
        I: IntoIterator<Item = RGBColor>,
    {
        let colors = Projection::unique_colors(pixels);
        debug!(space = %self.space, count = colors.len(), "projecting image colors");
        colors
            .into_iter()
            .map(|rgb| Ok((rgb, self.point(rgb)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lattice() {
        let lattice = Projection::lattice(8);
        assert_eq!(lattice.len(), 32768);
        assert_eq!(lattice[0], RGBColor::BLACK);
        assert_eq!(lattice[1], RGBColor::from((0, 0, 8)));
        assert_eq!(lattice[32], RGBColor::from((0, 8, 0)));
        assert_eq!(*lattice.last().unwrap(), RGBColor::from((248, 248, 248)));
    }

    #[test]
    fn test_lattice_edges() {
        // 255 is only reached when the step divides it
        assert_eq!(Projection::lattice(255).len(), 8);
        assert_eq!(Projection::lattice(51).len(), 216);
        let mut sorted = Projection::lattice(64);
        sorted.sort();
        assert_eq!(sorted, Projection::lattice(64));
    }

    #[test]
    fn test_select() {
        let mut projection = Projection::new(ColorSpace::Lab);
        assert_eq!(projection.axis_names(), ["L", "a", "b"]);
        let before = projection.point(RGBColor::from((10, 200, 30))).unwrap();
        projection.select(ColorSpace::H1h2h3);
        assert_eq!(projection.space(), ColorSpace::H1h2h3);
        let after = projection.point(RGBColor::from((10, 200, 30))).unwrap();
        assert_ne!(before, after);
        assert_eq!(after.x, 210. / 510.);
    }

    #[test]
    fn test_from_config() {
        let config = ProjectionConfig {
            space: ColorSpace::Yc1c2,
            lattice_step: 85,
            metric: NormalizedMetric::PerChannel,
        };
        let projection = Projection::from_config(&config);
        assert_eq!(projection.space(), ColorSpace::Yc1c2);
        assert_eq!(projection.metric(), NormalizedMetric::PerChannel);
        assert_eq!(projection.lattice_points().unwrap().len(), 64);
        assert_eq!(Projection::default(), Projection::new(ColorSpace::Xyz));
    }

    #[test]
    fn test_lattice_points_in_unit_cube() {
        for space in ColorSpace::ALL.iter() {
            let projection = Projection::from_config(&ProjectionConfig {
                space: *space,
                lattice_step: 51,
                ..ProjectionConfig::default()
            });
            for p in projection.lattice_points().unwrap() {
                for &c in [p.x, p.y, p.z].iter() {
                    assert!(c >= -1e-9 && c <= 1. + 1e-9, "{} out of range in {}", c, space);
                }
            }
        }
    }

    #[test]
    fn test_image_colors() {
        let red = RGBColor::from((255, 0, 0));
        let teal = RGBColor::from((0, 128, 128));
        let pixels = vec![red, teal, red, RGBColor::WHITE, teal, RGBColor::BLACK];
        assert_eq!(
            Projection::unique_colors(pixels.clone()),
            vec![RGBColor::BLACK, teal, red, RGBColor::WHITE]
        );

        let projection = Projection::new(ColorSpace::I1i2i3);
        let points = projection.image_points(pixels).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], (RGBColor::BLACK, Coord::from([0., 0.5, 0.5])));
        assert_eq!(points[3].1.x, 1.);
    }

    #[test]
    fn test_configured_metric() {
        let a = RGBColor::from((90, 90, 0));
        let b = RGBColor::from((0, 90, 90));
        let first = Projection::new(ColorSpace::I1i2i3);
        assert_eq!(first.normalized_distance(a, b).unwrap(), 0.);
        let per = Projection::from_config(&ProjectionConfig {
            space: ColorSpace::I1i2i3,
            metric: NormalizedMetric::PerChannel,
            ..ProjectionConfig::default()
        });
        assert!(per.normalized_distance(a, b).unwrap() > 0.);
    }
}
