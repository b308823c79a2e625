//! Named metric selection.

use std::{fmt, str::FromStr, sync::Arc};

use crate::error::OpticsError;

use super::{angle::angle_unchecked, euclidean::euclidean_unchecked};

/// Built-in metrics understood by [`crate::DenseSource`].
///
/// # Examples
/// ```
/// use optica_core::{Metric, OpticsError};
///
/// let metric: Metric = "Euclidean".parse()?;
/// assert_eq!(metric, Metric::Euclidean);
/// assert_eq!(metric.as_str(), "euclidean");
///
/// let err = "manhattan".parse::<Metric>().expect_err("unknown metric");
/// assert!(matches!(err, OpticsError::UnknownMetric { .. }));
/// # Ok::<(), OpticsError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Metric {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Raw `dot / (|a| |b|)` quotient.
    Angle,
}

impl Metric {
    /// Returns the canonical lowercase name of the metric.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Angle => "angle",
        }
    }

    /// Evaluates the metric on rows that were validated at ingestion.
    ///
    /// A zero-magnitude row under [`Metric::Angle`] evaluates to NaN.
    pub(crate) fn evaluate(self, left: &[f64], right: &[f64]) -> f64 {
        match self {
            Self::Euclidean => euclidean_unchecked(left, right),
            Self::Angle => angle_unchecked(left, right),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = OpticsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "angle" => Ok(Self::Angle),
            _ => Err(OpticsError::UnknownMetric {
                name: Arc::from(raw),
            }),
        }
    }
}
