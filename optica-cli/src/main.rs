//! Entry point for the `optica` binary.
//!
//! Installs logging, runs the parsed command, prints the summary (and the
//! labels when no output file was given) to stdout, and maps failures to a
//! non-zero exit code after logging their stable codes.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use optica_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    if summary.output.is_none() {
        summary
            .labels
            .write(&summary.result, &mut writer)
            .context("failed to write labels")?;
    }
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let code = cli_error
            .and_then(CliError::code)
            .map(|code| field::display(code.as_str()));
        let data_source_code = cli_error
            .and_then(CliError::data_source_code)
            .map(|code| field::display(code.as_str()));

        error!(
            error = format_args!("{err:#}"),
            code,
            data_source_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable until logging initialises"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
