//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use optica_core::{DataSourceError, OpticsError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic source generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Parameter validation or the clustering run failed.
    #[error("OPTICS run failed: {0}")]
    Optics(#[from] OpticsError),
    /// Building a neighbourhood index failed.
    #[error("data source error: {0}")]
    DataSource(#[from] DataSourceError),
}
