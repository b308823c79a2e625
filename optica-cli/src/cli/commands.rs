//! Argument parsing and command execution for the `optica` binary.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use optica_core::{
    DataSource, DataSourceErrorCode, Metric, Optics, OpticsBuilder, OpticsError, OpticsErrorCode,
    OpticsResult,
};
use optica_providers_delimited::{
    DelimitedMatrixError, DelimitedMatrixProvider, Delimiter, ParseOptions, Transform,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::output::{DEFAULT_NOISE_LABEL, LabelWriter, OutputOrder};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "optica",
    version,
    about = "Order and cluster points with OPTICS."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a delimited matrix, run OPTICS and write one label per point.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a text file with one point per line.
    pub path: PathBuf,

    /// Neighbourhood radius; must be finite and positive.
    #[arg(long)]
    pub epsilon: f64,

    /// Neighbours required, excluding the point itself, for a core point.
    #[arg(long = "min-pts", value_parser = clap::value_parser!(usize))]
    pub min_pts: usize,

    /// Distance metric applied to the rows.
    #[arg(long, value_enum, default_value_t)]
    pub metric: MetricArg,

    /// Field separator used by the input file.
    #[arg(long, value_enum, default_value_t)]
    pub delimiter: DelimiterArg,

    /// Element-wise transform applied after parsing.
    #[arg(long, value_enum, default_value_t)]
    pub transform: TransformArg,

    /// Write labels to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Sequence in which labels are written.
    #[arg(long, value_enum, default_value_t)]
    pub order: OutputOrder,

    /// Text written in place of a cluster id for noise points.
    #[arg(long = "noise-label", default_value = DEFAULT_NOISE_LABEL)]
    pub noise_label: String,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Metric names accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Dot product over the product of magnitudes.
    Angle,
}

impl From<MetricArg> for Metric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Euclidean => Self::Euclidean,
            MetricArg::Angle => Self::Angle,
        }
    }
}

/// Field separators accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DelimiterArg {
    /// Commas, whitespace, or a mix of both.
    #[default]
    Auto,
    /// Runs of whitespace.
    Whitespace,
    /// Single commas.
    Comma,
}

impl From<DelimiterArg> for Delimiter {
    fn from(value: DelimiterArg) -> Self {
        match value {
            DelimiterArg::Auto => Self::Auto,
            DelimiterArg::Whitespace => Self::Whitespace,
            DelimiterArg::Comma => Self::Comma,
        }
    }
}

/// Transforms accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TransformArg {
    /// Use values as parsed.
    #[default]
    None,
    /// Replace every value by its base-10 logarithm.
    Log10,
}

impl From<TransformArg> for Transform {
    fn from(value: TransformArg) -> Self {
        match value {
            TransformArg::None => Self::None,
            TransformArg::Log10 => Self::Log10,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the label file failed.
    #[error("failed to write `{path}`: {source}")]
    Output {
        /// Destination path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parsing the delimited matrix failed.
    #[error(transparent)]
    Delimited(#[from] DelimitedMatrixError),
    /// Parameter validation or the clustering run failed.
    #[error(transparent)]
    Core(#[from] OpticsError),
}

impl CliError {
    /// Returns the stable core code when the failure came from the core crate.
    #[must_use]
    pub const fn code(&self) -> Option<OpticsErrorCode> {
        match self {
            Self::Core(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Returns the data-source code carried by core or loader failures.
    #[must_use]
    pub const fn data_source_code(&self) -> Option<DataSourceErrorCode> {
        match self {
            Self::Core(error) => error.data_source_code(),
            Self::Delimited(DelimitedMatrixError::Source(error)) => Some(error.code()),
            _ => None,
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the data source.
    pub data_source: String,
    /// Number of points loaded.
    pub points: usize,
    /// Ordering, distances and labels.
    pub result: OpticsResult,
    /// Wall-clock time spent in [`Optics::run`].
    pub elapsed: Duration,
    /// How labels are rendered.
    pub labels: LabelWriter,
    /// File the labels were written to, or `None` when they belong on stdout.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the parameters are invalid, the input cannot be
/// loaded, or the label file cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use optica_cli::cli::Cli;
/// # use optica_cli::cli::run_cli;
/// # use clap::Parser;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0\n1\n2\n10\n")?;
/// let path = file.path().to_string_lossy().into_owned();
/// let cli = Cli::try_parse_from(["optica", "run", path.as_str(), "--epsilon", "1.5", "--min-pts", "1"])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.points, 4);
/// assert_eq!(summary.result.cluster_count(), 1);
/// assert_eq!(summary.result.noise_count(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = %command.path.display(),
        epsilon = command.epsilon,
        min_pts = command.min_pts,
        metric = ?command.metric,
        elapsed_ms = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let optics = OpticsBuilder::new()
        .with_epsilon(command.epsilon)
        .with_min_pts(command.min_pts)
        .build()?;

    let options = ParseOptions::default()
        .with_delimiter(command.delimiter.into())
        .with_transform(command.transform.into())
        .with_metric(command.metric.into());
    let name = derive_data_source_name(&command.path, command.name.as_deref());
    let reader = open_input(&command.path)?;
    let provider = DelimitedMatrixProvider::try_from_reader(name, reader, options)?;

    let (result, elapsed) = timed_run(&optics, &provider)?;
    Span::current().record("elapsed_ms", field::display(elapsed.as_millis()));

    let labels = LabelWriter::new(command.order, command.noise_label);
    if let Some(path) = &command.output {
        write_label_file(&labels, &result, path)?;
    }

    info!(
        data_source = provider.name(),
        points = provider.len(),
        clusters = result.cluster_count(),
        noise = result.noise_count(),
        elapsed_s = elapsed.as_secs_f64(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        points: provider.len(),
        result,
        elapsed,
        labels,
        output: command.output,
    })
}

/// Runs `optics` over `source` and measures the wall-clock time it took.
pub(super) fn timed_run<D: DataSource + ?Sized>(
    optics: &Optics,
    source: &D,
) -> Result<(OpticsResult, Duration), OpticsError> {
    let started = Instant::now();
    let result = optics.run(source)?;
    Ok((result, started.elapsed()))
}

#[instrument(name = "cli.open_input", err, fields(path = %path.display()))]
pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[instrument(name = "cli.write_labels", err, skip(labels, result), fields(path = %path.display()))]
pub(super) fn write_label_file(
    labels: &LabelWriter,
    result: &OpticsResult,
    path: &Path,
) -> Result<(), CliError> {
    let to_output_error = |source| CliError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_output_error)?;
    let mut writer = BufWriter::new(file);
    labels.write(result, &mut writer).map_err(to_output_error)?;
    writer.flush().map_err(to_output_error)
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "data_source".to_owned(), ToOwned::to_owned)
}
