//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: every trait, the runtime [`ColorSpace`] and its [`ColorSpaceValue`],
//! [`RGBColor`], the projection types and the error type. The per-space structs in
//! [`colors`](crate::colors) are not included.

pub use crate::bound::Bound;
pub use crate::color::{ChannelValue, Color, RGBChannel, RGBColor};
pub use crate::config::ProjectionConfig;
pub use crate::coord::Coord;
pub use crate::distance::{EuclideanDistance, NormalizedMetric};
pub use crate::error::ColorError;
pub use crate::projection::Projection;
pub use crate::space::ColorSpace;
pub use crate::value::ColorSpaceValue;
