//! Distance primitives for the built-in numeric metrics.
//!
//! Exposes scalar implementations of the Euclidean distance and the raw angle
//! quotient. The public routines validate their inputs and surface detailed
//! errors; [`Metric`] dispatches to unchecked kernels for rows that were
//! validated once at ingestion.

mod angle;
mod euclidean;
mod helpers;
mod metric;
mod types;

pub use self::angle::angle_similarity;
pub use self::euclidean::euclidean_distance;
pub use self::metric::Metric;
pub use self::types::{Distance, DistanceError, Norm, Result, Vector, VectorKind};
