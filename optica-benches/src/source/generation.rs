//! Numeric generator helper routines.

use std::f64::consts::TAU;

use rand::{Rng, rngs::SmallRng};

use super::SyntheticError;

pub(super) fn checked_total(point_count: usize, dimensions: usize) -> Result<usize, SyntheticError> {
    if point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if dimensions == 0 {
        return Err(SyntheticError::ZeroDimensions);
    }
    point_count
        .checked_mul(dimensions)
        .ok_or(SyntheticError::Overflow)
}

/// Places `count` centroids evenly on a circle of radius `separation` in the
/// first two axes; remaining axes stay at zero.
#[expect(
    clippy::cast_precision_loss,
    reason = "centroid angles are derived from small cluster indices"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "centroid placement uses trigonometric expressions"
)]
pub(super) fn blob_centroids(count: usize, dimensions: usize, separation: f64) -> Vec<Vec<f64>> {
    (0..count)
        .map(|index| {
            let angle = (index as f64 / count as f64) * TAU;
            let mut centroid = vec![0.0; dimensions];
            if let Some(value) = centroid.get_mut(0) {
                *value = separation * angle.cos();
            }
            if let Some(value) = centroid.get_mut(1) {
                *value = separation * angle.sin();
            }
            centroid
        })
        .collect()
}

/// Box-Muller sample from the standard normal distribution.
#[expect(
    clippy::float_arithmetic,
    reason = "Box-Muller transform requires floating-point arithmetic"
)]
pub(super) fn standard_normal_sample(rng: &mut SmallRng) -> f64 {
    let u1 = rng.gen_range(f64::EPSILON..1.0);
    let u2 = rng.gen_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}
