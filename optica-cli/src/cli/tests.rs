//! Unit tests for argument parsing, command execution and label output.

use super::commands::{derive_data_source_name, run_command};
use super::{
    Cli, CliError, Command, DEFAULT_NOISE_LABEL, DelimiterArg, ExecutionSummary, MetricArg,
    OutputOrder, RunCommand, TransformArg, render_summary, run_cli,
};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use optica_core::{DataSourceError, Metric, OpticsError};
use optica_providers_delimited::DelimitedMatrixError;
use optica_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("create temporary directory")
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input file");
    path
}

fn command(path: PathBuf, epsilon: f64, min_pts: usize) -> RunCommand {
    RunCommand {
        path,
        epsilon,
        min_pts,
        metric: MetricArg::Euclidean,
        delimiter: DelimiterArg::Auto,
        transform: TransformArg::None,
        output: None,
        order: OutputOrder::Original,
        noise_label: DEFAULT_NOISE_LABEL.to_owned(),
        name: None,
    }
}

fn rendered_labels(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    summary
        .labels
        .write(&summary.result, &mut buffer)
        .expect("write labels to memory");
    String::from_utf8(buffer).expect("labels are UTF-8")
}

#[rstest]
#[case::override_name("/tmp/points.txt", Some("override"), "override")]
#[case::stem_with_extension("/tmp/points.txt", None, "points")]
#[case::stem_without_extension("/tmp/points", None, "points")]
#[case::missing_stem("", None, "data_source")]
fn derive_data_source_name_selects_expected_name(
    #[case] raw_path: &str,
    #[case] override_name: Option<&'static str>,
    #[case] expected: &str,
) {
    let name = derive_data_source_name(Path::new(raw_path), override_name);
    assert_eq!(name, expected);
}

#[rstest]
fn run_arguments_use_documented_defaults() {
    let cli = Cli::try_parse_from(["optica", "run", "in.txt", "--epsilon", "0.5", "--min-pts", "3"])
        .expect("arguments must parse");
    let Command::Run(run) = cli.command;
    assert_eq!(run.path, PathBuf::from("in.txt"));
    assert_eq!(run.epsilon, 0.5);
    assert_eq!(run.min_pts, 3);
    assert_eq!(run.metric, MetricArg::Euclidean);
    assert_eq!(run.delimiter, DelimiterArg::Auto);
    assert_eq!(run.transform, TransformArg::None);
    assert_eq!(run.order, OutputOrder::Original);
    assert_eq!(run.noise_label, "9223372036854775807");
    assert_eq!(run.output, None);
    assert_eq!(run.name, None);
}

#[rstest]
fn run_arguments_accept_every_option() {
    let cli = Cli::try_parse_from([
        "optica",
        "run",
        "in.csv",
        "--epsilon",
        "2",
        "--min-pts",
        "4",
        "--metric",
        "angle",
        "--delimiter",
        "comma",
        "--transform",
        "log10",
        "--output",
        "labels.csv",
        "--order",
        "cluster",
        "--noise-label=-1",
        "--name",
        "demo",
    ])
    .expect("arguments must parse");
    let Command::Run(run) = cli.command;
    assert_eq!(run.metric, MetricArg::Angle);
    assert_eq!(run.delimiter, DelimiterArg::Comma);
    assert_eq!(run.transform, TransformArg::Log10);
    assert_eq!(run.output, Some(PathBuf::from("labels.csv")));
    assert_eq!(run.order, OutputOrder::Cluster);
    assert_eq!(run.noise_label, "-1");
    assert_eq!(run.name.as_deref(), Some("demo"));
}

#[rstest]
#[case::missing_epsilon(&["optica", "run", "in.txt", "--min-pts", "3"][..])]
#[case::missing_min_pts(&["optica", "run", "in.txt", "--epsilon", "1"][..])]
#[case::unknown_metric(&["optica", "run", "in.txt", "--epsilon", "1", "--min-pts", "1", "--metric", "cosine"][..])]
#[case::negative_min_pts(&["optica", "run", "in.txt", "--epsilon", "1", "--min-pts", "-2"][..])]
fn run_arguments_reject_invalid_input(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
#[case(MetricArg::Euclidean, Metric::Euclidean)]
#[case(MetricArg::Angle, Metric::Angle)]
fn metric_arguments_map_to_core_metrics(#[case] arg: MetricArg, #[case] expected: Metric) {
    assert_eq!(Metric::from(arg), expected);
}

#[rstest]
fn run_labels_points_in_original_order(temp_dir: TempDir) -> TestResult {
    let path = write_input(&temp_dir, "line.txt", "0\n1\n2\n10\n");
    let summary = run_command(command(path, 1.5, 1))?;
    assert_eq!(summary.data_source, "line");
    assert_eq!(summary.points, 4);
    assert_eq!(summary.result.cluster_count(), 1);
    assert_eq!(summary.result.noise_count(), 1);
    assert_eq!(
        rendered_labels(&summary),
        "0,1\n1,1\n2,1\n3,9223372036854775807\n"
    );
    Ok(())
}

#[rstest]
fn run_writes_cluster_ordered_labels_to_file(temp_dir: TempDir) -> TestResult {
    let path = write_input(&temp_dir, "groups.txt", "0\n10\n0.4\n10.4\n30\n");
    let output = temp_dir.path().join("labels.csv");
    let mut run = command(path, 0.5, 1);
    run.output = Some(output.clone());
    run.order = OutputOrder::Cluster;
    run.noise_label = "noise".to_owned();

    let summary = run_command(run)?;
    assert_eq!(summary.output.as_deref(), Some(output.as_path()));
    assert_eq!(
        fs::read_to_string(&output)?,
        "0,1\n2,1\n1,2\n3,2\n4,noise\n"
    );
    Ok(())
}

#[rstest]
fn run_applies_transform_and_delimiter(temp_dir: TempDir) -> TestResult {
    let path = write_input(&temp_dir, "scaled.csv", "# value,weight\n1,1\n10,10\n100,100\n1000000,1000000\n");
    let mut run = command(path, 2.0, 1);
    run.delimiter = DelimiterArg::Comma;
    run.transform = TransformArg::Log10;
    run.name = Some("scaled".to_owned());

    let summary = run_command(run)?;
    assert_eq!(summary.data_source, "scaled");
    assert_eq!(summary.points, 4);
    assert_eq!(summary.result.cluster_count(), 1);
    assert_eq!(summary.result.noise_count(), 1);
    Ok(())
}

#[rstest]
fn invalid_parameters_fail_before_reading_input(temp_dir: TempDir) {
    let missing = temp_dir.path().join("absent.txt");
    let err = run_command(command(missing, 0.0, 1)).expect_err("epsilon must be rejected");
    assert!(matches!(err, CliError::Core(OpticsError::InvalidEpsilon { .. })));
    assert_eq!(err.code().map(|code| code.as_str()), Some("OPTICS_INVALID_EPSILON"));
}

#[rstest]
fn missing_input_reports_path(temp_dir: TempDir) {
    let missing = temp_dir.path().join("absent.txt");
    let err = run_command(command(missing.clone(), 1.0, 1)).expect_err("file must be missing");
    match err {
        CliError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn ragged_input_is_rejected(temp_dir: TempDir) {
    let path = write_input(&temp_dir, "ragged.txt", "0 0\n1\n");
    let err = run_command(command(path, 1.0, 1)).expect_err("ragged rows must fail");
    assert!(matches!(
        err,
        CliError::Delimited(DelimitedMatrixError::RaggedRow { line: 2, expected: 2, actual: 1 })
    ));
    assert_eq!(err.code(), None);
}

#[rstest]
fn zero_rows_under_angle_are_labelled_noise(temp_dir: TempDir) -> TestResult {
    let path = write_input(&temp_dir, "zero.txt", "1 0\n0 0\n0.9 0.1\n");
    let mut run = command(path, 1.5, 1);
    run.metric = MetricArg::Angle;
    run.noise_label = "noise".to_owned();

    let summary = run_command(run)?;
    assert_eq!(summary.points, 3);
    assert_eq!(summary.result.cluster_count(), 1);
    assert_eq!(rendered_labels(&summary), "0,1\n1,noise\n2,1\n");
    Ok(())
}

#[rstest]
fn wrapped_source_errors_expose_their_code() {
    let err = CliError::Delimited(DelimitedMatrixError::Source(DataSourceError::NonFinite {
        row: 0,
        column: 1,
    }));
    assert_eq!(err.code(), None);
    assert_eq!(
        err.data_source_code().map(|code| code.as_str()),
        Some("DATA_SOURCE_NON_FINITE")
    );
}

#[rstest]
fn unwritable_output_is_reported(temp_dir: TempDir) {
    let path = write_input(&temp_dir, "line.txt", "0\n1\n");
    let output = temp_dir.path().join("missing-dir").join("labels.csv");
    let mut run = command(path, 1.5, 1);
    run.output = Some(output.clone());
    let err = run_command(run).expect_err("output directory does not exist");
    match err {
        CliError::Output { path, .. } => assert_eq!(path, output),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn render_summary_lists_counts_and_timing(temp_dir: TempDir) -> TestResult {
    let path = write_input(&temp_dir, "line.txt", "0\n1\n2\n10\n");
    let mut summary = run_command(command(path, 1.5, 1))?;
    summary.elapsed = Duration::from_millis(1250);

    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(
        String::from_utf8(buffer)?,
        "data source: line\npoints: 4\nclusters: 1\nnoise: 1\nelapsed: 1.250000s\n"
    );
    Ok(())
}

#[rstest]
fn run_cli_records_spans_and_completion_event(temp_dir: TempDir) -> TestResult {
    let path = write_input(&temp_dir, "line.txt", "0\n1\n2\n10\n");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || {
        run_cli(Cli {
            command: Command::Run(command(path, 1.5, 1)),
        })
    })?;

    let run_span = layer.span_named("cli.run").expect("cli.run span recorded");
    assert_eq!(run_span.fields.get("command").map(String::as_str), Some("run"));
    let execute = layer
        .span_named("cli.execute")
        .expect("cli.execute span recorded");
    assert_eq!(execute.fields.get("min_pts").map(String::as_str), Some("1"));
    assert!(execute.fields.contains_key("elapsed_ms"));
    assert!(layer.span_named("core.run").is_some());
    assert!(layer.has_event(Level::INFO, "command completed"));
    Ok(())
}
