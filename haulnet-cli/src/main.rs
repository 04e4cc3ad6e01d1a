//! CLI entry point for the haulnet delivery-network tools.
//!
//! Parses command-line arguments with clap, executes the requested query,
//! renders the report to stdout, and maps errors to exit codes. Logging is
//! initialised eagerly so subsequent operations can emit structured
//! diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use haulnet_cli::{
    cli::{Cli, CliError, render_report, run_cli},
    logging,
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the report, and flush
/// the output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(CliError::network_code);
        let code_field = code.map(|code| field::display(code.as_str()));

        error!(error = %err, code = code_field, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
