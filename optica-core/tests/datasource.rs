#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Integration tests for the DataSource trait behaviour.
use optica_core::{DataSource, DataSourceError, DenseSource, Metric};
use rstest::{fixture, rstest};

struct Line(Vec<f64>);

#[fixture]
fn line(#[default(vec![1.0, 2.0])] data: Vec<f64>) -> Line {
    Line(data)
}

impl DataSource for Line {
    fn len(&self) -> usize {
        self.0.len()
    }
    fn name(&self) -> &str {
        "line"
    }
    fn distance(&self, i: usize, j: usize) -> Result<f64, DataSourceError> {
        let a = self
            .0
            .get(i)
            .ok_or(DataSourceError::OutOfBounds { index: i })?;
        let b = self
            .0
            .get(j)
            .ok_or(DataSourceError::OutOfBounds { index: j })?;
        Ok((a - b).abs())
    }
}

#[rstest(line(vec![1.0, 3.0, 6.0]))]
fn batch_distances_follow_candidate_order(line: Line) {
    let distances = line
        .batch_distances(1, &[2, 0])
        .expect("batch_distances must succeed");
    assert_eq!(distances, vec![3.0, 2.0]);
}

#[rstest]
fn batch_distances_propagate_errors(line: Line) {
    let err = line
        .batch_distances(0, &[1, 99])
        .expect_err("batch_distances must propagate inner errors");
    assert!(matches!(err, DataSourceError::OutOfBounds { index: 99 }));
}

#[rstest(line(vec![]))]
fn empty_source_reports_empty(line: Line) {
    assert!(line.is_empty());
    assert!(line.batch_distances(0, &[]).expect("no candidates").is_empty());
}

#[rstest]
fn distance_out_of_bounds(line: Line) {
    let err = line
        .distance(0, 2)
        .expect_err("distance must check bounds");
    assert!(matches!(err, DataSourceError::OutOfBounds { index: 2 }));
}

#[rstest]
#[case::euclidean(Metric::Euclidean, 2.0_f64.sqrt())]
#[case::angle(Metric::Angle, 0.96)]
fn dense_source_dispatches_on_metric(#[case] metric: Metric, #[case] expected: f64) {
    let source = DenseSource::try_new("pair", vec![vec![3.0, 4.0], vec![4.0, 3.0]], metric)
        .expect("rows are valid");
    let distance = source.distance(0, 1).expect("in bounds");
    assert!((distance - expected).abs() < 1e-12);
}

#[test]
fn dense_source_exposes_rows_and_name() {
    let source = DenseSource::from_row_major("flat", 2, vec![1.0, 2.0, 3.0, 4.0], Metric::Euclidean)
        .expect("buffer is valid");
    assert_eq!(source.name(), "flat");
    assert_eq!(source.len(), 2);
    assert_eq!(source.row(1), Some(&[3.0, 4.0][..]));
    assert_eq!(source.row(2), None);
}
