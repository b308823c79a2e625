//! Result types for OPTICS runs.
//!
//! [`OpticsResult`] bundles the cluster ordering, the per-point distances,
//! the extracted labels and the neighbourhoods computed during the run.

use std::{collections::HashSet, fmt};

use crate::{
    neighbourhood::{Neighbour, Neighbourhood},
    ordering::ClusterOrdering,
};

/// Renders an undefined distance as `+inf`.
///
/// # Examples
/// ```
/// use optica_core::or_infinity;
///
/// assert_eq!(or_infinity(Some(0.5)), 0.5);
/// assert_eq!(or_infinity(None), f64::INFINITY);
/// ```
#[must_use]
pub fn or_infinity(distance: Option<f64>) -> f64 {
    distance.unwrap_or(f64::INFINITY)
}

/// Identifier assigned to a cluster.
///
/// # Examples
/// ```
/// use optica_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final label of a point.
///
/// # Examples
/// ```
/// use optica_core::{ClusterId, ClusterLabel};
///
/// let label = ClusterLabel::Cluster(ClusterId::new(2));
/// assert_eq!(label.cluster_id(), Some(ClusterId::new(2)));
/// assert!(ClusterLabel::Noise.is_noise());
/// assert_eq!(ClusterLabel::Noise.to_string(), "noise");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClusterLabel {
    /// The point belongs to no cluster.
    #[default]
    Noise,
    /// The point belongs to the given cluster.
    Cluster(ClusterId),
}

impl ClusterLabel {
    /// Returns `true` for [`ClusterLabel::Noise`].
    #[must_use]
    pub const fn is_noise(self) -> bool {
        matches!(self, Self::Noise)
    }

    /// Returns the cluster identifier, or `None` for noise.
    #[must_use]
    pub const fn cluster_id(self) -> Option<ClusterId> {
        match self {
            Self::Noise => None,
            Self::Cluster(id) => Some(id),
        }
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noise => f.write_str("noise"),
            Self::Cluster(id) => id.fmt(f),
        }
    }
}

/// One entry of the cluster ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderedPoint {
    /// Zero-based position in the ordering.
    pub position: usize,
    /// Index of the point in the input.
    pub id: usize,
    /// Reachability distance; `None` when undefined.
    pub reachability: Option<f64>,
    /// Core distance; `None` when undefined.
    pub core_distance: Option<f64>,
    /// Extracted label.
    pub label: ClusterLabel,
}

/// Output of [`crate::Optics::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpticsResult {
    ordering: ClusterOrdering,
    labels: Vec<ClusterLabel>,
    neighbourhoods: Vec<Neighbourhood>,
    cluster_count: usize,
}

impl OpticsResult {
    pub(crate) fn new(
        ordering: ClusterOrdering,
        labels: Vec<ClusterLabel>,
        neighbourhoods: Vec<Neighbourhood>,
    ) -> Self {
        let cluster_count = labels
            .iter()
            .filter_map(|label| label.cluster_id())
            .collect::<HashSet<_>>()
            .len();
        Self {
            ordering,
            labels,
            neighbourhoods,
            cluster_count,
        }
    }

    /// Returns point indices in cluster-ordering sequence.
    #[must_use]
    pub fn ordering(&self) -> &[usize] {
        self.ordering.order()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when the result holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the core distance of `pid`; `None` when undefined or when
    /// `pid` is out of range.
    #[must_use]
    pub fn core_distance(&self, pid: usize) -> Option<f64> {
        self.ordering.core_distances().get(pid).copied().flatten()
    }

    /// Returns the reachability distance of `pid`; `None` when undefined or
    /// when `pid` is out of range.
    #[must_use]
    pub fn reachability(&self, pid: usize) -> Option<f64> {
        self.ordering.reachability().get(pid).copied().flatten()
    }

    /// Returns every core distance indexed by point.
    #[must_use]
    pub fn core_distances(&self) -> &[Option<f64>] {
        self.ordering.core_distances()
    }

    /// Returns every reachability distance indexed by point.
    #[must_use]
    pub fn reachabilities(&self) -> &[Option<f64>] {
        self.ordering.reachability()
    }

    /// Returns the label of `pid`, or `None` when `pid` is out of range.
    #[must_use]
    pub fn label(&self, pid: usize) -> Option<ClusterLabel> {
        self.labels.get(pid).copied()
    }

    /// Returns every label indexed by point.
    #[must_use]
    pub fn labels(&self) -> &[ClusterLabel] {
        &self.labels
    }

    /// Counts distinct cluster identifiers. Noise is not a cluster.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Counts points labelled as noise.
    #[must_use]
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_noise()).count()
    }

    /// Returns the epsilon-neighbours of `pid` in ascending index order, or
    /// `None` when `pid` is out of range.
    #[must_use]
    pub fn neighbours(&self, pid: usize) -> Option<&[Neighbour]> {
        self.neighbourhoods.get(pid).map(Neighbourhood::neighbours)
    }

    /// Iterates over the points in cluster-ordering sequence.
    ///
    /// # Examples
    /// ```
    /// use optica_core::{ClusterLabel, run};
    ///
    /// let result = run(vec![vec![0.0], vec![5.0]], 1.0, 1, "euclidean")?;
    /// let ids: Vec<usize> = result.points().map(|point| point.id).collect();
    /// assert_eq!(ids, vec![0, 1]);
    /// assert!(result.points().all(|point| point.label == ClusterLabel::Noise));
    /// # Ok::<(), optica_core::OpticsError>(())
    /// ```
    pub fn points(&self) -> impl Iterator<Item = OrderedPoint> + '_ {
        self.ordering
            .order()
            .iter()
            .enumerate()
            .map(|(position, &id)| OrderedPoint {
                position,
                id,
                reachability: self.reachability(id),
                core_distance: self.core_distance(id),
                label: self.label(id).unwrap_or_default(),
            })
    }
}
