//! Parsing options for delimited matrices.

use optica_core::Metric;

/// How fields on a line are separated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Delimiter {
    /// Commas, whitespace, or any mix of both.
    #[default]
    Auto,
    /// Runs of whitespace.
    Whitespace,
    /// Single commas; surrounding whitespace is trimmed.
    Comma,
}

/// Element-wise transform applied to every parsed value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Transform {
    /// Values are used as parsed.
    #[default]
    None,
    /// Values are replaced by their base-10 logarithm.
    Log10,
}

/// Options controlling how a matrix is parsed and compared.
///
/// # Examples
/// ```
/// use optica_core::Metric;
/// use optica_providers_delimited::{Delimiter, ParseOptions, Transform};
///
/// let options = ParseOptions::default()
///     .with_delimiter(Delimiter::Comma)
///     .with_transform(Transform::Log10)
///     .with_metric(Metric::Angle);
/// assert_eq!(options.delimiter(), Delimiter::Comma);
/// assert_eq!(options.transform(), Transform::Log10);
/// assert_eq!(options.metric(), Metric::Angle);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    delimiter: Delimiter,
    transform: Transform,
    metric: Metric,
}

impl ParseOptions {
    /// Overrides the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Overrides the value transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Overrides the metric the loaded source compares rows with.
    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Returns the field delimiter.
    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Returns the value transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the metric.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }
}
