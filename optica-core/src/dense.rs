//! In-memory feature matrix implementing [`DataSource`].

use crate::{datasource::DataSource, distance::Metric, error::DataSourceError};

/// Row-major matrix of validated `f64` feature vectors paired with a
/// [`Metric`].
///
/// All validation happens on construction so the pairwise scan never meets a
/// malformed row.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseSource {
    name: String,
    rows: usize,
    dimension: usize,
    values: Vec<f64>,
    metric: Metric,
}

impl DenseSource {
    /// Creates a source from individual rows.
    ///
    /// An empty `rows` yields an empty source. All-zero rows are accepted
    /// under every metric; under [`Metric::Angle`] their quotient is NaN, so
    /// they never fall inside a neighbourhood.
    ///
    /// # Errors
    /// Returns [`DataSourceError::ZeroDimension`] when the first row is empty,
    /// [`DataSourceError::DimensionMismatch`] when a row differs in length
    /// from the first, and [`DataSourceError::NonFinite`] for NaN or infinite
    /// values.
    ///
    /// # Examples
    /// ```
    /// use optica_core::{DataSource, DataSourceError, DenseSource, Metric};
    ///
    /// let source = DenseSource::try_new("demo", vec![vec![0.0, 0.0], vec![3.0, 4.0]], Metric::Euclidean)?;
    /// assert_eq!(source.len(), 2);
    /// assert_eq!(source.dimension(), 2);
    /// assert_eq!(source.distance(0, 1)?, 5.0);
    ///
    /// let ragged = DenseSource::try_new("demo", vec![vec![0.0], vec![1.0, 2.0]], Metric::Euclidean);
    /// assert!(matches!(ragged, Err(DataSourceError::DimensionMismatch { row: 1, .. })));
    /// # Ok::<(), DataSourceError>(())
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        rows: Vec<Vec<f64>>,
        metric: Metric,
    ) -> Result<Self, DataSourceError> {
        let Some(first) = rows.first() else {
            return Ok(Self {
                name: name.into(),
                rows: 0,
                dimension: 0,
                values: Vec::new(),
                metric,
            });
        };
        let dimension = first.len();
        let row_count = rows.len();
        let mut values = Vec::with_capacity(row_count.saturating_mul(dimension));
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != dimension {
                return Err(DataSourceError::DimensionMismatch {
                    row: index,
                    expected: dimension,
                    actual: row.len(),
                });
            }
            values.extend(row);
        }
        Self::from_row_major(name, dimension, values, metric)
    }

    /// Creates a source from a row-major buffer of `dimension`-wide rows.
    ///
    /// # Errors
    /// Returns the same validation errors as [`DenseSource::try_new`]; a
    /// buffer whose length is not a multiple of `dimension` reports
    /// [`DataSourceError::DimensionMismatch`] for the trailing row.
    pub fn from_row_major(
        name: impl Into<String>,
        dimension: usize,
        values: Vec<f64>,
        metric: Metric,
    ) -> Result<Self, DataSourceError> {
        if dimension == 0 {
            return Err(DataSourceError::ZeroDimension);
        }
        let rows = values.len() / dimension;
        let remainder = values.len() % dimension;
        if remainder != 0 {
            return Err(DataSourceError::DimensionMismatch {
                row: rows,
                expected: dimension,
                actual: remainder,
            });
        }

        for (row, chunk) in values.chunks_exact(dimension).enumerate() {
            if let Some(column) = chunk.iter().position(|value| !value.is_finite()) {
                return Err(DataSourceError::NonFinite { row, column });
            }
        }

        Ok(Self {
            name: name.into(),
            rows,
            dimension,
            values,
            metric,
        })
    }

    /// Returns the dimensionality of each row.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the metric used by [`DataSource::distance`].
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns the row at `index`, if present.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows {
            return None;
        }
        let start = index.checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        self.values.get(start..end)
    }
}

impl DataSource for DenseSource {
    fn len(&self) -> usize {
        self.rows
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64, DataSourceError> {
        let left = self.row(i).ok_or(DataSourceError::OutOfBounds { index: i })?;
        let right = self.row(j).ok_or(DataSourceError::OutOfBounds { index: j })?;
        Ok(self.metric.evaluate(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(vec![vec![]], DataSourceError::ZeroDimension)]
    #[case(
        vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0]],
        DataSourceError::DimensionMismatch { row: 2, expected: 2, actual: 1 },
    )]
    #[case(
        vec![vec![0.0, 1.0], vec![f64::NAN, 3.0]],
        DataSourceError::NonFinite { row: 1, column: 0 },
    )]
    #[case(
        vec![vec![0.0], vec![f64::INFINITY]],
        DataSourceError::NonFinite { row: 1, column: 0 },
    )]
    fn try_new_rejects_invalid_rows(
        #[case] rows: Vec<Vec<f64>>,
        #[case] expected: DataSourceError,
    ) {
        let err = DenseSource::try_new("bad", rows, Metric::Euclidean)
            .expect_err("invalid rows must be rejected");
        assert_eq!(err, expected);
    }

    #[test]
    fn empty_rows_yield_an_empty_source() {
        let source = DenseSource::try_new("empty", Vec::new(), Metric::Angle)
            .expect("no rows is a valid source");
        assert!(source.is_empty());
        assert_eq!(source.dimension(), 0);
        assert_eq!(source.row(0), None);
    }

    #[test]
    fn angle_metric_accepts_zero_rows_with_nan_quotient() {
        let source = DenseSource::try_new("zero", vec![vec![1.0, 0.0], vec![0.0, 0.0]], Metric::Angle)
            .expect("zero rows are valid for angle");
        assert_eq!(source.len(), 2);
        assert!(source.distance(0, 1).expect("in bounds").is_nan());
        assert!(source.distance(1, 1).expect("in bounds").is_nan());
    }

    #[test]
    fn euclidean_metric_accepts_zero_rows() {
        let source = DenseSource::try_new("ok", vec![vec![0.0, 0.0], vec![3.0, 4.0]], Metric::Euclidean)
            .expect("zero rows are valid for euclidean");
        assert_eq!(source.distance(1, 0).expect("in bounds"), 5.0);
    }

    #[test]
    fn distance_rejects_out_of_bounds() {
        let source = DenseSource::try_new("ok", vec![vec![1.0]], Metric::Euclidean)
            .expect("valid source");
        let err = source.distance(0, 3).expect_err("index 3 is out of bounds");
        assert_eq!(err, DataSourceError::OutOfBounds { index: 3 });
    }

    #[test]
    fn row_major_rejects_trailing_partial_row() {
        let err = DenseSource::from_row_major("bad", 2, vec![1.0, 2.0, 3.0], Metric::Euclidean)
            .expect_err("partial row must be rejected");
        assert_eq!(
            err,
            DataSourceError::DimensionMismatch { row: 1, expected: 2, actual: 1 }
        );
    }
}
