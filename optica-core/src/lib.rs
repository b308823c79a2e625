//! Optica core library: OPTICS cluster ordering and threshold extraction.
//!
//! The pipeline runs in three passes over a [`DataSource`]:
//! [`NeighbourhoodIndex::build`] computes epsilon-neighbourhoods and core
//! distances, [`compute_ordering`] walks the points through a [`SeedFrontier`]
//! to produce the cluster ordering, and [`extract_clusters`] cuts that ordering
//! into flat labels. [`Optics::run`] chains all three.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod datasource;
mod dense;
pub mod distance;
mod error;
mod extract;
mod frontier;
mod neighbourhood;
mod optics;
mod ordering;
mod result;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::OpticsBuilder,
    datasource::DataSource,
    dense::DenseSource,
    distance::{DistanceError, Metric, angle_similarity, euclidean_distance},
    error::{DataSourceError, DataSourceErrorCode, OpticsError, OpticsErrorCode, Result},
    extract::extract_clusters,
    frontier::{Seed, SeedFrontier},
    neighbourhood::{Neighbour, Neighbourhood, NeighbourhoodIndex},
    optics::Optics,
    ordering::{ClusterOrdering, compute_ordering},
    result::{ClusterId, ClusterLabel, OpticsResult, OrderedPoint, or_infinity},
};

/// Clusters in-memory `points` with the named metric.
///
/// Parameters are validated first, then the metric name, then the rows, so
/// the first reported error follows that order.
///
/// # Errors
/// Returns [`OpticsError::InvalidEpsilon`] or [`OpticsError::InvalidMinPts`]
/// for invalid parameters, [`OpticsError::UnknownMetric`] for an unrecognised
/// metric name, and [`OpticsError::DataSource`] when the rows fail
/// validation. An empty `points` vector yields an empty result.
///
/// # Examples
/// ```
/// use optica_core::{ClusterId, ClusterLabel, run};
///
/// let points = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
/// let result = run(points, 1.5, 1, "euclidean")?;
///
/// let first = ClusterLabel::Cluster(ClusterId::new(1));
/// assert_eq!(result.labels(), &[first, first, first, ClusterLabel::Noise]);
/// assert_eq!(result.reachability(0), None);
/// assert_eq!(result.core_distance(0), Some(1.0));
/// # Ok::<(), optica_core::OpticsError>(())
/// ```
pub fn run(points: Vec<Vec<f64>>, epsilon: f64, min_pts: usize, metric: &str) -> Result<OpticsResult> {
    const NAME: &str = "points";

    let optics = OpticsBuilder::new()
        .with_epsilon(epsilon)
        .with_min_pts(min_pts)
        .build()?;
    let metric: Metric = metric.parse()?;
    let source = DenseSource::try_new(NAME, points, metric).map_err(|error| OpticsError::DataSource {
        data_source: NAME.into(),
        error,
    })?;
    optics.run(&source)
}
