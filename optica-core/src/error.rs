//! Error types for the optica core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable codes and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DataSource`] operations or while validating
/// the feature vectors backing a source.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataSourceError {
    /// Requested index was outside the source's bounds.
    #[error("index {index} is out of bounds")]
    OutOfBounds {
        /// The requested row that exceeded the source bounds.
        index: usize,
    },
    /// A row's dimensionality differed from the first row.
    #[error("row {row} has dimension {actual} but expected {expected}")]
    DimensionMismatch {
        /// Row whose length disagreed with the first row.
        row: usize,
        /// Dimensionality established by the first row.
        expected: usize,
        /// Dimensionality of the offending row.
        actual: usize,
    },
    /// Data source rows must have positive dimension.
    #[error("data source vectors must have positive dimension")]
    ZeroDimension,
    /// A row contained NaN or an infinity.
    #[error("row {row} contains a non-finite value at column {column}")]
    NonFinite {
        /// Row containing the value.
        row: usize,
        /// Position of the value within the row.
        column: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DataSourceError`] variants.
    enum DataSourceErrorCode for DataSourceError {
        /// Requested index was outside the source's bounds.
        OutOfBounds => OutOfBounds { .. } => "DATA_SOURCE_OUT_OF_BOUNDS",
        /// A row's dimensionality differed from the first row.
        DimensionMismatch => DimensionMismatch { .. } => "DATA_SOURCE_DIMENSION_MISMATCH",
        /// Data source rows must have positive dimension.
        ZeroDimension => ZeroDimension => "DATA_SOURCE_ZERO_DIMENSION",
        /// A row contained NaN or an infinity.
        NonFinite => NonFinite { .. } => "DATA_SOURCE_NON_FINITE",
    }
}

/// Error type produced when configuring or running [`crate::Optics`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum OpticsError {
    /// The neighbourhood radius must be a finite, strictly positive number.
    #[error("epsilon must be finite and greater than 0 (got {got})")]
    InvalidEpsilon {
        /// The rejected radius.
        got: f64,
    },
    /// At least one neighbour is required to form a core point.
    #[error("min_pts must be at least 1 (got {got})")]
    InvalidMinPts {
        /// The rejected neighbour count.
        got: usize,
    },
    /// The metric name did not match a built-in metric.
    #[error("unknown metric `{name}`; expected `euclidean` or `angle`")]
    UnknownMetric {
        /// Name supplied by the caller.
        name: Arc<str>,
    },
    /// A [`crate::DataSource`] operation failed while running the algorithm.
    #[error("data source `{data_source}` failed: {error}")]
    DataSource {
        /// Identifier for the data source that produced the error.
        data_source: Arc<str>,
        #[source]
        /// Underlying data source error bubbled up by the algorithm.
        error: DataSourceError,
    },
}

define_error_codes! {
    /// Stable codes describing [`OpticsError`] variants.
    enum OpticsErrorCode for OpticsError {
        /// The neighbourhood radius was not finite and positive.
        InvalidEpsilon => InvalidEpsilon { .. } => "OPTICS_INVALID_EPSILON",
        /// The minimum neighbour count was zero.
        InvalidMinPts => InvalidMinPts { .. } => "OPTICS_INVALID_MIN_PTS",
        /// The metric name did not match a built-in metric.
        UnknownMetric => UnknownMetric { .. } => "OPTICS_UNKNOWN_METRIC",
        /// A [`crate::DataSource`] operation failed while running the algorithm.
        DataSourceFailure => DataSource { .. } => "OPTICS_DATA_SOURCE_FAILURE",
    }
}

impl OpticsError {
    /// Retrieve the inner [`DataSourceErrorCode`] when the error originated in a [`crate::DataSource`].
    #[must_use]
    pub const fn data_source_code(&self) -> Option<DataSourceErrorCode> {
        match self {
            Self::DataSource { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    /// Returns `true` for the parameter-validation failures raised before any
    /// computation starts.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidEpsilon { .. } | Self::InvalidMinPts { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, OpticsError>;
