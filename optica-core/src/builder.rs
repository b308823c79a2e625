//! Builder for configuring [`Optics`] runs.
//!
//! Parameters are validated once in [`OpticsBuilder::build`] so a constructed
//! [`Optics`] always carries a finite positive radius and a non-zero
//! neighbour count.

use std::num::NonZeroUsize;

use crate::{Result, error::OpticsError, optics::Optics};

/// Configures and constructs [`Optics`] instances.
///
/// # Examples
/// ```
/// use optica_core::OpticsBuilder;
///
/// let optics = OpticsBuilder::new()
///     .with_epsilon(0.02)
///     .with_min_pts(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(optics.epsilon(), 0.02);
/// assert_eq!(optics.min_pts().get(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct OpticsBuilder {
    epsilon: f64,
    min_pts: usize,
}

impl Default for OpticsBuilder {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            min_pts: 5,
        }
    }
}

impl OpticsBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use optica_core::OpticsBuilder;
    ///
    /// let builder = OpticsBuilder::new();
    /// assert_eq!(builder.epsilon(), 0.5);
    /// assert_eq!(builder.min_pts(), 5);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the neighbourhood radius.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the configured neighbourhood radius.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Overrides the minimum neighbour count required for a core point.
    #[must_use]
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Returns the configured minimum neighbour count.
    #[must_use]
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Validates the configuration and constructs an [`Optics`] instance.
    ///
    /// # Errors
    /// Returns [`OpticsError::InvalidEpsilon`] when `epsilon` is not a finite
    /// positive number and [`OpticsError::InvalidMinPts`] when `min_pts` is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use optica_core::{OpticsBuilder, OpticsError};
    ///
    /// let err = OpticsBuilder::new().with_epsilon(0.0).build().unwrap_err();
    /// assert!(matches!(err, OpticsError::InvalidEpsilon { .. }));
    ///
    /// let err = OpticsBuilder::new().with_min_pts(0).build().unwrap_err();
    /// assert!(matches!(err, OpticsError::InvalidMinPts { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Optics> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(OpticsError::InvalidEpsilon { got: self.epsilon });
        }
        let min_pts = NonZeroUsize::new(self.min_pts).ok_or(OpticsError::InvalidMinPts {
            got: self.min_pts,
        })?;

        Ok(Optics::new(self.epsilon, min_pts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn build_rejects_invalid_epsilon(#[case] epsilon: f64) {
        let err = OpticsBuilder::new()
            .with_epsilon(epsilon)
            .build()
            .expect_err("epsilon must be rejected");
        assert!(matches!(err, OpticsError::InvalidEpsilon { .. }));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn build_checks_epsilon_before_min_pts() {
        let err = OpticsBuilder::new()
            .with_epsilon(-0.5)
            .with_min_pts(0)
            .build()
            .expect_err("both parameters are invalid");
        assert!(matches!(err, OpticsError::InvalidEpsilon { .. }));
    }

    #[test]
    fn build_accepts_minimal_parameters() {
        let optics = OpticsBuilder::new()
            .with_epsilon(f64::MIN_POSITIVE)
            .with_min_pts(1)
            .build()
            .expect("smallest valid parameters");
        assert_eq!(optics.min_pts(), NonZeroUsize::MIN);
    }
}
