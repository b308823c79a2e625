use optica_core::DataSourceError;
use thiserror::Error;

/// Errors raised while loading a delimited matrix.
///
/// Line and field numbers are 1-based and refer to the raw input, so blank
/// and comment lines still count.
#[derive(Debug, Error)]
pub enum DelimitedMatrixError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input contains no data rows")]
    EmptyInput,
    #[error("line {line}, field {field}: `{value}` is not a number")]
    InvalidValue {
        line: usize,
        field: usize,
        value: String,
    },
    #[error("line {line} has {actual} fields but expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },
    #[error("line {line}, field {field}: value is not finite")]
    NonFinite { line: usize, field: usize },
    #[error("line {line}, field {field}: log10 requires a positive value, got {value}")]
    NonPositive { line: usize, field: usize, value: f64 },
    #[error(transparent)]
    Source(#[from] DataSourceError),
}
