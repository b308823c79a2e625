//! Threshold extraction of flat cluster labels from a cluster ordering.

use tracing::{debug, instrument};

use crate::{
    ordering::ClusterOrdering,
    result::{ClusterId, ClusterLabel},
};

/// Cuts `ordering` into clusters at `epsilon`.
///
/// Walks the ordering once. A point whose reachability exceeds `epsilon` (or
/// is undefined) opens a new cluster when its own core distance is within
/// `epsilon` and is noise otherwise; every other point joins the current
/// cluster. Cluster identifiers start at 1, so a point reachable before any
/// cluster has opened is labelled `Cluster(0)`.
///
/// The returned labels are indexed by point.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use optica_core::{
///     ClusterId, ClusterLabel, DenseSource, Metric, NeighbourhoodIndex, compute_ordering,
///     extract_clusters,
/// };
///
/// let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
/// let source = DenseSource::try_new("line", rows, Metric::Euclidean)?;
/// let ordering = compute_ordering(&NeighbourhoodIndex::build(&source, 1.5, NonZeroUsize::MIN)?);
/// let labels = extract_clusters(&ordering, 1.5);
///
/// let first = ClusterLabel::Cluster(ClusterId::new(1));
/// assert_eq!(labels, vec![first, first, first, ClusterLabel::Noise]);
/// # Ok::<(), optica_core::DataSourceError>(())
/// ```
#[must_use]
#[instrument(name = "core.extract", level = "debug", skip(ordering), fields(items = ordering.len()))]
pub fn extract_clusters(ordering: &ClusterOrdering, epsilon: f64) -> Vec<ClusterLabel> {
    let reachability = ordering.reachability();
    let core_distances = ordering.core_distances();
    let mut labels = vec![ClusterLabel::Noise; ordering.len()];
    let mut current = 0_u64;

    for &point in ordering.order() {
        let reach = reachability.get(point).copied().flatten();
        let label = if within(reach, epsilon) {
            ClusterLabel::Cluster(ClusterId::new(current))
        } else if within(core_distances.get(point).copied().flatten(), epsilon) {
            current += 1;
            ClusterLabel::Cluster(ClusterId::new(current))
        } else {
            ClusterLabel::Noise
        };
        if let Some(slot) = labels.get_mut(point) {
            *slot = label;
        }
    }

    debug!(clusters = current, "extraction completed");
    labels
}

fn within(distance: Option<f64>, epsilon: f64) -> bool {
    distance.is_some_and(|value| value <= epsilon)
}
