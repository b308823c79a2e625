//! Delimited matrix provider implementation.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use optica_core::{DataSource, DataSourceError, DenseSource};
use tracing::{debug, instrument};

use crate::{errors::DelimitedMatrixError, options::ParseOptions, parse::parse_rows};

/// Numeric matrix loaded from delimited text.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use optica_core::DataSource;
/// use optica_providers_delimited::{DelimitedMatrixProvider, ParseOptions};
///
/// let input = "# x y\n0 0\n3,4\n";
/// let provider = DelimitedMatrixProvider::try_from_reader("demo", Cursor::new(input), ParseOptions::default())?;
/// assert_eq!(provider.len(), 2);
/// assert_eq!(provider.dimension(), 2);
/// assert_eq!(provider.distance(0, 1)?, 5.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct DelimitedMatrixProvider {
    source: DenseSource,
    options: ParseOptions,
}

impl DelimitedMatrixProvider {
    /// Parses `reader` into a provider.
    ///
    /// # Errors
    /// Returns [`DelimitedMatrixError`] when reading fails, when no data rows
    /// exist, when a field does not parse or is not finite, when rows differ in
    /// width, when [`crate::Transform::Log10`] meets a non-positive value, or
    /// when the rows fail the metric's validation.
    #[instrument(
        name = "providers.delimited.load",
        level = "debug",
        err,
        skip(name, reader, options),
        fields(delimiter = ?options.delimiter(), transform = ?options.transform()),
    )]
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        options: ParseOptions,
    ) -> Result<Self, DelimitedMatrixError> {
        let parsed = parse_rows(reader, &options)?;
        debug!(
            rows = parsed.rows.len(),
            skipped = parsed.skipped,
            "parsed delimited matrix"
        );
        let source = DenseSource::try_new(name, parsed.rows, options.metric())?;
        Ok(Self { source, options })
    }

    /// Opens and parses the file at `path`.
    ///
    /// # Errors
    /// Returns [`DelimitedMatrixError::Io`] when the file cannot be opened,
    /// otherwise the same errors as [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        options: ParseOptions,
    ) -> Result<Self, DelimitedMatrixError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file), options)
    }

    /// Returns the dimensionality of each row.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.source.dimension()
    }

    /// Returns the options the matrix was parsed with.
    #[must_use]
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Returns the row at `index` after any transform was applied.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.source.row(index)
    }

    /// Consumes the provider, yielding the validated in-memory source.
    #[must_use]
    pub fn into_source(self) -> DenseSource {
        self.source
    }
}

impl DataSource for DelimitedMatrixProvider {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn name(&self) -> &str {
        self.source.name()
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64, DataSourceError> {
        self.source.distance(i, j)
    }

    fn batch_distances(&self, query: usize, candidates: &[usize]) -> Result<Vec<f64>, DataSourceError> {
        self.source.batch_distances(query, candidates)
    }
}
