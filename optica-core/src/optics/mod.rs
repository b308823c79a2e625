//! The [`Optics`] runtime entry point.
//!
//! A run is three sequential passes: the pairwise neighbourhood scan, the
//! ordering traversal, and the threshold extraction. Data-source failures are
//! wrapped with the source name before they leave this module.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    datasource::DataSource,
    error::{DataSourceError, OpticsError},
    extract::extract_clusters,
    neighbourhood::NeighbourhoodIndex,
    ordering::compute_ordering,
    result::OpticsResult,
};

/// Validated OPTICS parameters. Construct through [`crate::OpticsBuilder`].
///
/// # Examples
/// ```
/// use optica_core::{ClusterLabel, DataSource, DataSourceError, OpticsBuilder};
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
/// let optics = OpticsBuilder::new()
///     .with_epsilon(1.5)
///     .with_min_pts(2)
///     .build()
///     .expect("builder must succeed");
/// let result = optics
///     .run(&Line(vec![0.0, 1.0, 2.0, 10.0]))
///     .expect("run must succeed");
/// assert_eq!(result.ordering(), &[0, 1, 2, 3]);
/// assert_eq!(result.cluster_count(), 1);
/// assert_eq!(result.label(3), Some(ClusterLabel::Noise));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optics {
    epsilon: f64,
    min_pts: NonZeroUsize,
}

impl Optics {
    pub(crate) fn new(epsilon: f64, min_pts: NonZeroUsize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Returns the neighbourhood radius.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the minimum neighbour count required for a core point.
    #[must_use]
    pub fn min_pts(&self) -> NonZeroUsize {
        self.min_pts
    }

    /// Computes the cluster ordering of `source` and extracts flat labels at
    /// the configured radius.
    ///
    /// An empty source yields an empty ordering and no labels.
    ///
    /// # Errors
    /// Returns [`OpticsError::DataSource`] when the source fails to produce a
    /// distance.
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            data_source = %source.name(),
            items = source.len(),
            epsilon = self.epsilon,
            min_pts = %self.min_pts,
        ),
    )]
    pub fn run<D: DataSource + ?Sized>(&self, source: &D) -> Result<OpticsResult> {
        if source.is_empty() {
            warn!(
                data_source = source.name(),
                "data source is empty, ordering will be empty"
            );
        }

        let index = self.wrap_datasource_error(
            source,
            NeighbourhoodIndex::build(source, self.epsilon, self.min_pts),
        )?;
        let ordering = compute_ordering(&index);
        let labels = extract_clusters(&ordering, self.epsilon);
        let result = OpticsResult::new(ordering, labels, index.into_entries());

        info!(
            clusters = result.cluster_count(),
            noise = result.noise_count(),
            "optics run completed"
        );
        Ok(result)
    }

    fn wrap_datasource_error<D: DataSource + ?Sized, T>(
        &self,
        source: &D,
        result: core::result::Result<T, DataSourceError>,
    ) -> Result<T> {
        result.map_err(|error| OpticsError::DataSource {
            data_source: Arc::from(source.name()),
            error,
        })
    }
}
