//! This file provides the two distances this crate knows about. The first is plain **Euclidean
//! distance**: treating two colors as points in 3D space and returning the length of the line
//! between them. The second is a **normalized distance**, which rescales each channel to [0, 1] and
//! weights it by the square of its range, so that a channel covering a wider span of values counts
//! for more.
//!
//! Neither is perceptually accurate in any of these spaces. In HSI, for example, two reds with hues
//! of 0.01 and 2π - 0.01 are nearly identical but about as far apart as hues can be.

use crate::color::Color;
use crate::coord::Coord;

/// Euclidean distance between two colors of the same type. To compare colors of different spaces,
/// go through [`ColorSpaceValue::distance`](crate::value::ColorSpaceValue::distance), which
/// reconverts from the source RGB color instead.
pub trait EuclideanDistance: Color {
    /// Gets the Euclidean distance between these two points when embedded in 3D space. Formally
    /// speaking, this is a *metric*: it is 0 if and only if self and other are the same, and it is
    /// never negative.
    fn euclidean_distance(self, other: Self) -> f64 {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        c1.euclidean_distance(&c2)
    }
}

impl<T: Color> EuclideanDistance for T {
    // nothing to do
}

/// Which channels the normalized distance compares.
///
/// The default, `FirstChannel`, squares the difference of the *first* normalized channel three times
/// and weights each copy by a different channel's range. Since the weights sum to 1, the result is
/// just the squared difference of channel 1: hue in HSI, lightness in Lab, and so on. Existing
/// results depend on it, so it stays the default. `PerChannel` compares each channel with its own
/// weight instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedMetric {
    /// Every term uses channel 1: `Σ wi · (n1(a) - n1(b))²`.
    FirstChannel,
    /// Each term uses its own channel: `Σ wi · (ni(a) - ni(b))²`.
    PerChannel,
}

impl Default for NormalizedMetric {
    fn default() -> NormalizedMetric {
        NormalizedMetric::FirstChannel
    }
}

impl NormalizedMetric {
    /// Combines two normalized points with per-channel weights that sum to 1.
    pub(crate) fn weighted(self, a: Coord, b: Coord, weights: [f64; 3]) -> f64 {
        let diff: [f64; 3] = (a - b).into();
        let terms = match self {
            NormalizedMetric::FirstChannel => [diff[0].powi(2); 3],
            NormalizedMetric::PerChannel => [diff[0].powi(2), diff[1].powi(2), diff[2].powi(2)],
        };
        weights.iter().zip(terms.iter()).map(|(w, d)| w * d).sum()
    }
}
