//! Epsilon-neighbourhoods and core distances.
//!
//! Every point is compared against every other point in index order. Points
//! strictly closer than `epsilon` become neighbours; the core distance is the
//! `min_pts`-th smallest neighbour distance when at least `min_pts`
//! neighbours exist.

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::{datasource::DataSource, error::DataSourceError};

/// A point within `epsilon` of another, with the distance between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    /// Index of the neighbouring point.
    pub id: usize,
    /// Distance from the owning point to `id`.
    pub distance: f64,
}

/// Neighbours of one point, in ascending index order, plus its core distance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Neighbourhood {
    neighbours: Vec<Neighbour>,
    core_distance: Option<f64>,
}

impl Neighbourhood {
    /// Returns the neighbours in ascending index order. Never contains the
    /// owning point.
    #[must_use]
    pub fn neighbours(&self) -> &[Neighbour] {
        &self.neighbours
    }

    /// Returns the core distance, or `None` when the point has fewer than
    /// `min_pts` neighbours.
    #[must_use]
    pub const fn core_distance(&self) -> Option<f64> {
        self.core_distance
    }

    /// Returns `true` when the point has a defined core distance.
    #[must_use]
    pub const fn is_core(&self) -> bool {
        self.core_distance.is_some()
    }
}

/// Precomputed neighbourhoods for every point of a [`DataSource`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeighbourhoodIndex {
    entries: Vec<Neighbourhood>,
}

impl NeighbourhoodIndex {
    /// Builds the index with a full pairwise scan.
    ///
    /// # Errors
    /// Propagates the first [`DataSourceError`] returned by the source.
    ///
    /// # Examples
    /// ```
    /// use std::num::NonZeroUsize;
    /// use optica_core::{DenseSource, Metric, NeighbourhoodIndex};
    ///
    /// let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
    /// let source = DenseSource::try_new("line", rows, Metric::Euclidean)?;
    /// let min_pts = NonZeroUsize::new(2).expect("non-zero");
    /// let index = NeighbourhoodIndex::build(&source, 1.5, min_pts)?;
    ///
    /// let middle = index.get(1).expect("point 1 exists");
    /// assert_eq!(middle.neighbours().len(), 2);
    /// assert_eq!(middle.core_distance(), Some(1.0));
    /// assert_eq!(index.get(3).expect("point 3 exists").core_distance(), None);
    /// # Ok::<(), optica_core::DataSourceError>(())
    /// ```
    #[instrument(
        name = "core.neighbourhoods",
        level = "debug",
        err,
        skip(source),
        fields(items = source.len()),
    )]
    pub fn build<D: DataSource + ?Sized>(
        source: &D,
        epsilon: f64,
        min_pts: NonZeroUsize,
    ) -> Result<Self, DataSourceError> {
        let items = source.len();
        let mut entries = Vec::with_capacity(items);
        for point in 0..items {
            entries.push(scan_point(source, point, epsilon, min_pts)?);
        }

        #[cfg(feature = "metrics")]
        metrics::counter!("optics_distance_evaluations")
            .increment(u64::try_from(items.saturating_mul(items.saturating_sub(1))).unwrap_or(u64::MAX));

        let core_points = entries.iter().filter(|entry| entry.is_core()).count();
        debug!(items, core_points, "neighbourhoods computed");
        Ok(Self { entries })
    }

    /// Returns the neighbourhood of `point`.
    #[must_use]
    pub fn get(&self, point: usize) -> Option<&Neighbourhood> {
        self.entries.get(point)
    }

    /// Returns the number of indexed points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no points are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every point's core distance in index order.
    #[must_use]
    pub fn core_distances(&self) -> Vec<Option<f64>> {
        self.entries.iter().map(Neighbourhood::core_distance).collect()
    }

    pub(crate) fn into_entries(self) -> Vec<Neighbourhood> {
        self.entries
    }
}

fn scan_point<D: DataSource + ?Sized>(
    source: &D,
    point: usize,
    epsilon: f64,
    min_pts: NonZeroUsize,
) -> Result<Neighbourhood, DataSourceError> {
    let candidates: Vec<usize> = (0..source.len()).filter(|&other| other != point).collect();
    let distances = source.batch_distances(point, &candidates)?;
    let neighbours: Vec<Neighbour> = candidates
        .into_iter()
        .zip(distances)
        .filter(|&(_, distance)| distance < epsilon)
        .map(|(id, distance)| Neighbour { id, distance })
        .collect();

    let core_distance = core_distance(&neighbours, min_pts);
    Ok(Neighbourhood {
        neighbours,
        core_distance,
    })
}

/// Distance to the `min_pts`-th nearest neighbour.
fn core_distance(neighbours: &[Neighbour], min_pts: NonZeroUsize) -> Option<f64> {
    if neighbours.len() < min_pts.get() {
        return None;
    }
    let mut distances: Vec<f64> = neighbours.iter().map(|n| n.distance).collect();
    let rank = min_pts.get() - 1;
    let (_, nth, _) = distances.select_nth_unstable_by(rank, f64::total_cmp);
    Some(*nth)
}
