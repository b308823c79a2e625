//! Seeded synthetic data sources for benchmarking.
//!
//! Both generators are deterministic for a given seed so Criterion runs
//! compare like with like.

mod errors;
mod generation;

pub use errors::SyntheticError;

use generation::{blob_centroids, checked_total, standard_normal_sample};
use optica_core::{DataSource, DataSourceError, DenseSource, Metric};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Uniform random vectors in `[0, extent)` on every axis.
#[derive(Clone, Debug)]
pub struct UniformConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Dimensionality of each vector.
    pub dimensions: usize,
    /// Upper bound of every coordinate.
    pub extent: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Isotropic Gaussian blobs around centroids spaced on a circle.
#[derive(Clone, Debug)]
pub struct GaussianBlobConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Dimensionality of each vector.
    pub dimensions: usize,
    /// Number of blobs.
    pub cluster_count: usize,
    /// Radius of the circle the centroids sit on.
    pub separation: f64,
    /// Standard deviation of every blob.
    pub spread: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A generated Euclidean [`DataSource`], optionally with the blob each point
/// was drawn from.
#[derive(Clone, Debug)]
pub struct SyntheticSource {
    source: DenseSource,
    truth: Option<Vec<usize>>,
}

impl SyntheticSource {
    /// Generates uniform random vectors.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate_uniform(config: &UniformConfig) -> Result<Self, SyntheticError> {
        let total = checked_total(config.point_count, config.dimensions)?;
        if !config.extent.is_finite() || config.extent <= 0.0 {
            return Err(SyntheticError::InvalidFloatParameter { parameter: "extent" });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let values: Vec<f64> = (0..total).map(|_| rng.gen_range(0.0..config.extent)).collect();
        let source = DenseSource::from_row_major(
            "synthetic-uniform",
            config.dimensions,
            values,
            Metric::Euclidean,
        )?;
        Ok(Self {
            source,
            truth: None,
        })
    }

    /// Generates Gaussian blobs and records the blob index of every point.
    ///
    /// Points are dealt to blobs round-robin, so blob sizes differ by at most
    /// one.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    #[expect(
        clippy::float_arithmetic,
        reason = "blob samples are centroid plus scaled Gaussian noise"
    )]
    pub fn generate_gaussian_blobs(config: &GaussianBlobConfig) -> Result<Self, SyntheticError> {
        let total = checked_total(config.point_count, config.dimensions)?;
        validate_blob_config(config)?;

        let centroids = blob_centroids(config.cluster_count, config.dimensions, config.separation);
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut values = Vec::with_capacity(total);
        let mut truth = Vec::with_capacity(config.point_count);
        for (blob, centroid) in centroids
            .iter()
            .enumerate()
            .cycle()
            .take(config.point_count)
        {
            truth.push(blob);
            for centre in centroid {
                values.push(centre + standard_normal_sample(&mut rng) * config.spread);
            }
        }

        let source = DenseSource::from_row_major(
            "synthetic-gaussian-blobs",
            config.dimensions,
            values,
            Metric::Euclidean,
        )?;
        Ok(Self {
            source,
            truth: Some(truth),
        })
    }

    /// Returns the blob index of every point, when known.
    #[must_use]
    pub fn truth(&self) -> Option<&[usize]> {
        self.truth.as_deref()
    }

    /// Returns the dimensionality of each vector.
    #[must_use]
    pub const fn dimensions(&self) -> usize {
        self.source.dimension()
    }
}

fn validate_blob_config(config: &GaussianBlobConfig) -> Result<(), SyntheticError> {
    if config.cluster_count == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    if config.cluster_count > config.point_count {
        return Err(SyntheticError::ClusterCountExceedsPointCount {
            cluster_count: config.cluster_count,
            point_count: config.point_count,
        });
    }
    if !config.separation.is_finite() || config.separation <= 0.0 {
        return Err(SyntheticError::InvalidFloatParameter {
            parameter: "separation",
        });
    }
    if !config.spread.is_finite() || config.spread <= 0.0 {
        return Err(SyntheticError::InvalidFloatParameter { parameter: "spread" });
    }
    Ok(())
}

impl DataSource for SyntheticSource {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn name(&self) -> &str {
        self.source.name()
    }

    fn distance(&self, left: usize, right: usize) -> Result<f64, DataSourceError> {
        self.source.distance(left, right)
    }

    fn batch_distances(&self, query: usize, candidates: &[usize]) -> Result<Vec<f64>, DataSourceError> {
        self.source.batch_distances(query, candidates)
    }
}
