//! The OPTICS traversal: produces the cluster ordering and reachability
//! distances from precomputed neighbourhoods.
//!
//! Points are visited in index order. Each visited point is emitted once; a
//! core point pushes its unprocessed neighbours onto the [`SeedFrontier`] and
//! the frontier is drained before the outer scan advances, so every
//! density-connected component is emitted contiguously.

use tracing::{debug, instrument};

use crate::{
    frontier::SeedFrontier,
    neighbourhood::{Neighbourhood, NeighbourhoodIndex},
};

/// The traversal output: visit order plus per-point distances.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterOrdering {
    order: Vec<usize>,
    reachability: Vec<Option<f64>>,
    core_distances: Vec<Option<f64>>,
}

impl ClusterOrdering {
    #[cfg(test)]
    pub(crate) fn from_parts(
        order: Vec<usize>,
        reachability: Vec<Option<f64>>,
        core_distances: Vec<Option<f64>>,
    ) -> Self {
        Self {
            order,
            reachability,
            core_distances,
        }
    }

    /// Returns the point indices in visit order; a permutation of `0..n`.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns reachability distances indexed by point.
    #[must_use]
    pub fn reachability(&self) -> &[Option<f64>] {
        &self.reachability
    }

    /// Returns core distances indexed by point.
    #[must_use]
    pub fn core_distances(&self) -> &[Option<f64>] {
        &self.core_distances
    }

    /// Returns the number of ordered points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when nothing was ordered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Runs the traversal over `index`.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use optica_core::{DenseSource, Metric, NeighbourhoodIndex, compute_ordering};
///
/// let rows = vec![vec![0.0], vec![10.0], vec![1.0], vec![2.0]];
/// let source = DenseSource::try_new("line", rows, Metric::Euclidean)?;
/// let index = NeighbourhoodIndex::build(&source, 1.5, NonZeroUsize::MIN)?;
/// let ordering = compute_ordering(&index);
///
/// assert_eq!(ordering.order(), &[0, 2, 3, 1]);
/// assert_eq!(ordering.reachability()[2], Some(1.0));
/// assert_eq!(ordering.reachability()[1], None);
/// # Ok::<(), optica_core::DataSourceError>(())
/// ```
#[must_use]
#[instrument(name = "core.order", level = "debug", skip(index), fields(items = index.len()))]
pub fn compute_ordering(index: &NeighbourhoodIndex) -> ClusterOrdering {
    let ordering = OrderingEngine::new(index).run();
    debug!(ordered = ordering.len(), "ordering completed");

    #[cfg(feature = "metrics")]
    metrics::counter!("optics_points_ordered")
        .increment(u64::try_from(ordering.len()).unwrap_or(u64::MAX));

    ordering
}

/// Mutable traversal state. Lives for a single run.
struct OrderingEngine<'a> {
    index: &'a NeighbourhoodIndex,
    processed: Vec<bool>,
    reachability: Vec<Option<f64>>,
    order: Vec<usize>,
    frontier: SeedFrontier,
}

impl<'a> OrderingEngine<'a> {
    fn new(index: &'a NeighbourhoodIndex) -> Self {
        let items = index.len();
        Self {
            index,
            processed: vec![false; items],
            reachability: vec![None; items],
            order: Vec::with_capacity(items),
            frontier: SeedFrontier::with_capacity(items),
        }
    }

    fn run(mut self) -> ClusterOrdering {
        for point in 0..self.index.len() {
            if self.is_processed(point) {
                continue;
            }
            self.emit(point);
            while let Some(seed) = self.frontier.dequeue() {
                self.emit(seed.id);
            }
        }

        ClusterOrdering {
            order: self.order,
            reachability: self.reachability,
            core_distances: self.index.core_distances(),
        }
    }

    fn is_processed(&self, point: usize) -> bool {
        self.processed.get(point).copied().unwrap_or(true)
    }

    /// Appends `point` to the ordering and, for a core point, expands the
    /// frontier with its neighbours.
    fn emit(&mut self, point: usize) {
        if let Some(flag) = self.processed.get_mut(point) {
            *flag = true;
        }
        self.order.push(point);

        let index = self.index;
        if let Some(neighbourhood) = index.get(point) {
            if let Some(core_distance) = neighbourhood.core_distance() {
                self.update(neighbourhood, core_distance);
            }
        }
    }

    /// Offers every unprocessed neighbour the reachability
    /// `max(core_distance, distance)`, keeping only strict improvements.
    fn update(&mut self, neighbourhood: &Neighbourhood, core_distance: f64) {
        for neighbour in neighbourhood.neighbours() {
            if self.is_processed(neighbour.id) {
                continue;
            }
            let candidate = core_distance.max(neighbour.distance);
            let Some(slot) = self.reachability.get_mut(neighbour.id) else {
                continue;
            };
            match *slot {
                None => {
                    *slot = Some(candidate);
                    self.frontier.enqueue(neighbour.id, candidate);
                }
                Some(current) if candidate < current => {
                    *slot = Some(candidate);
                    self.frontier.move_up(neighbour.id, candidate);
                }
                Some(_) => {}
            }
        }
    }
}
