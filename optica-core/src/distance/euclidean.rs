use crate::distance::helpers::{squared_difference, validate_dimensions};
use crate::distance::types::{Distance, Result, Vector, VectorKind};

/// Computes the Euclidean distance between two vectors.
///
/// # Examples
///
/// ```
/// use optica_core::{DistanceError, euclidean_distance};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = euclidean_distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 8.0])?;
///     assert!((distance.value() - 50.0_f64.sqrt()).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`crate::DistanceError::ZeroLength`] when any input is empty.
/// - [`crate::DistanceError::DimensionMismatch`] when input lengths differ.
/// - [`crate::DistanceError::NonFinite`] when a value is NaN or infinite.
pub fn euclidean_distance(left: &[f64], right: &[f64]) -> Result<Distance> {
    let left = Vector::new(left, VectorKind::Left)?;
    let right = Vector::new(right, VectorKind::Right)?;
    validate_dimensions(&left, &right)?;

    Ok(Distance::from_raw(squared_difference(&left, &right).sqrt()))
}

/// Euclidean kernel for rows already validated by the caller.
pub(crate) fn euclidean_unchecked(left: &[f64], right: &[f64]) -> f64 {
    squared_difference(left, right).sqrt()
}
