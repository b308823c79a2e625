//! Command-line interface for the `optica` binary.
//!
//! The single `run` command loads a delimited matrix, runs OPTICS with the
//! supplied radius and neighbour count, and writes one `pid,label` line per
//! point either to a file or to stdout after the summary.

mod commands;
mod output;

pub use commands::{
    Cli, CliError, Command, DelimiterArg, ExecutionSummary, MetricArg, RunCommand, TransformArg,
    run_cli,
};
pub use output::{DEFAULT_NOISE_LABEL, LabelWriter, OutputOrder, render_summary};

#[cfg(test)]
mod tests;
