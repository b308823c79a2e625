use crate::distance::helpers::{accumulate_components, validate_dimensions};
use crate::distance::types::{Distance, Norm, Result, Vector, VectorKind};

/// Computes the raw angle quotient `dot(a, b) / (|a| |b|)` between two vectors.
///
/// The value is returned as-is: it is not clamped to `[-1, 1]` and it is not
/// converted into an angular distance, so parallel vectors score `1.0` and
/// opposite vectors score `-1.0`.
///
/// # Examples
///
/// ```
/// use optica_core::{DistanceError, angle_similarity};
///
/// fn main() -> Result<(), DistanceError> {
///     let orthogonal = angle_similarity(&[1.0, 0.0], &[0.0, 1.0])?;
///     assert!(orthogonal.value().abs() < 1e-12);
///
///     let opposite = angle_similarity(&[1.0, 0.0], &[-2.0, 0.0])?;
///     assert!((opposite.value() + 1.0).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`crate::DistanceError::ZeroLength`] when any input is empty.
/// - [`crate::DistanceError::DimensionMismatch`] when input lengths differ.
/// - [`crate::DistanceError::NonFinite`] when a value is NaN or infinite.
/// - [`crate::DistanceError::ZeroMagnitude`] when either vector has zero L2 norm.
pub fn angle_similarity(left: &[f64], right: &[f64]) -> Result<Distance> {
    let left = Vector::new(left, VectorKind::Left)?;
    let right = Vector::new(right, VectorKind::Right)?;
    validate_dimensions(&left, &right)?;

    let (dot, left_squares, right_squares) = accumulate_components(&left, &right);
    let left_norm = Norm::from_squared_sum(left_squares, VectorKind::Left)?;
    let right_norm = Norm::from_squared_sum(right_squares, VectorKind::Right)?;

    Ok(Distance::from_raw(
        dot / (left_norm.value() * right_norm.value()),
    ))
}

/// Angle kernel for rows already validated by the caller.
///
/// A zero-magnitude row yields NaN, which compares false against any radius.
pub(crate) fn angle_unchecked(left: &[f64], right: &[f64]) -> f64 {
    let (dot, left_squares, right_squares) = accumulate_components(left, right);
    dot / (left_squares.sqrt() * right_squares.sqrt())
}
