//! Settings for a [`Projection`](crate::projection::Projection), meant to be loaded from whatever
//! format the caller persists them in. Every field has a default, so an empty document is valid.

use crate::distance::NormalizedMetric;
use crate::space::ColorSpace;

/// The lattice step used when none is given: 32 values per channel.
pub const DEFAULT_LATTICE_STEP: u8 = 8;

/// How a [`Projection`](crate::projection::Projection) starts out.
/// # Example
///
/// ```
/// # use colorspaces::prelude::*;
/// let config: ProjectionConfig = serde_json::from_str(r#"{"space": "lab"}"#).unwrap();
/// assert_eq!(config.space, ColorSpace::Lab);
/// assert_eq!(config.lattice_step, 8);
/// assert_eq!(config.metric, NormalizedMetric::FirstChannel);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// The space to project into.
    pub space: ColorSpace,
    /// Distance between neighboring lattice values on each RGB channel. 0 is treated as 1.
    pub lattice_step: u8,
    /// The metric used for normalized distances.
    pub metric: NormalizedMetric,
}

impl Default for ProjectionConfig {
    fn default() -> ProjectionConfig {
        ProjectionConfig {
            space: ColorSpace::default(),
            lattice_step: DEFAULT_LATTICE_STEP,
            metric: NormalizedMetric::default(),
        }
    }
}
