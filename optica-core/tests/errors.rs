use std::sync::Arc;

use optica_core::{DataSourceError, DataSourceErrorCode, OpticsError, OpticsErrorCode};
use rstest::rstest;

#[rstest]
#[case(DataSourceError::OutOfBounds { index: 0 }, DataSourceErrorCode::OutOfBounds)]
#[case(
    DataSourceError::DimensionMismatch { row: 1, expected: 2, actual: 3 },
    DataSourceErrorCode::DimensionMismatch,
)]
#[case(DataSourceError::ZeroDimension, DataSourceErrorCode::ZeroDimension)]
#[case(DataSourceError::NonFinite { row: 0, column: 1 }, DataSourceErrorCode::NonFinite)]
fn returns_expected_data_source_code(
    #[case] error: DataSourceError,
    #[case] expected: DataSourceErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[rstest]
#[case(OpticsError::InvalidEpsilon { got: 0.0 }, OpticsErrorCode::InvalidEpsilon, None)]
#[case(OpticsError::InvalidMinPts { got: 0 }, OpticsErrorCode::InvalidMinPts, None)]
#[case(
    OpticsError::UnknownMetric { name: Arc::from("manhattan") },
    OpticsErrorCode::UnknownMetric,
    None,
)]
#[case(
    OpticsError::DataSource {
        data_source: Arc::from("source"),
        error: DataSourceError::OutOfBounds { index: 1 },
    },
    OpticsErrorCode::DataSourceFailure,
    Some(DataSourceErrorCode::OutOfBounds),
)]
fn returns_expected_optics_code(
    #[case] error: OpticsError,
    #[case] expected: OpticsErrorCode,
    #[case] data_source_code: Option<DataSourceErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.data_source_code(), data_source_code);
}

#[rstest]
#[case(OpticsErrorCode::InvalidEpsilon, "OPTICS_INVALID_EPSILON")]
#[case(OpticsErrorCode::DataSourceFailure, "OPTICS_DATA_SOURCE_FAILURE")]
fn codes_display_as_stable_strings(#[case] code: OpticsErrorCode, #[case] expected: &str) {
    assert_eq!(code.to_string(), expected);
}

#[test]
fn datasource_error_display_includes_index() {
    let err = DataSourceError::OutOfBounds { index: 5 };
    assert_eq!(format!("{err}"), "index 5 is out of bounds");
}

#[test]
fn optics_error_datasource_includes_source_name() {
    let inner = DataSourceError::DimensionMismatch {
        row: 2,
        expected: 3,
        actual: 1,
    };
    let err = OpticsError::DataSource {
        data_source: Arc::from("points"),
        error: inner.clone(),
    };
    assert!(matches!(
        err,
        OpticsError::DataSource { ref data_source, ref error }
            if data_source.as_ref() == "points" && error == &inner
    ));
    assert!(format!("{err}").contains("points"));
}
