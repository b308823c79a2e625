//! Data source abstractions for the optica runtime.

use crate::error::DataSourceError;

/// Abstraction over a collection of points that can yield pairwise distances.
///
/// The engine only ever reads points through [`DataSource::distance`], so any
/// dissimilarity can be plugged in. Implementations must be deterministic.
///
/// # Examples
/// ```
/// use optica_core::{DataSource, DataSourceError};
///
/// struct Line(Vec<f64>);
///
/// impl DataSource for Line {
///     fn len(&self) -> usize { self.0.len() }
///     fn name(&self) -> &str { "line" }
///     fn distance(&self, i: usize, j: usize) -> Result<f64, DataSourceError> {
///         let a = self.0.get(i).ok_or(DataSourceError::OutOfBounds { index: i })?;
///         let b = self.0.get(j).ok_or(DataSourceError::OutOfBounds { index: j })?;
///         Ok((a - b).abs())
///     }
/// }
///
/// let src = Line(vec![1.0, 2.0, 4.0]);
/// assert_eq!(src.len(), 3);
/// assert_eq!(src.distance(0, 2)?, 3.0);
/// assert_eq!(src.batch_distances(0, &[1, 2])?, [1.0, 3.0]);
/// # Ok::<(), DataSourceError>(())
/// ```
pub trait DataSource {
    /// Returns number of points in the source.
    fn len(&self) -> usize;

    /// Returns whether the source contains no points.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Computes the distance between two points.
    ///
    /// # Errors
    /// Implementations must return [`DataSourceError::OutOfBounds`] for
    /// invalid indices.
    fn distance(&self, i: usize, j: usize) -> Result<f64, DataSourceError>;

    /// Computes the distances from `query` to every entry in `candidates`.
    ///
    /// The default implementation calls [`DataSource::distance`] repeatedly
    /// and collects the results in candidate order.
    ///
    /// # Errors
    /// Returns the first [`DataSourceError`] surfaced by
    /// [`DataSource::distance`].
    fn batch_distances(
        &self,
        query: usize,
        candidates: &[usize],
    ) -> Result<Vec<f64>, DataSourceError> {
        candidates
            .iter()
            .map(|&candidate| self.distance(query, candidate))
            .collect()
    }
}
