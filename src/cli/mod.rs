//! Command-line interface: argument parsing, command dispatch and reporting.

use std::process::ExitCode;

use anyhow::Result;
use tracing::Level;

mod args;
pub mod commands;
mod exit_code;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, ExtractArgs, ExtractCommand};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();
    init_tracing(verbose);

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result).into())
}

/// Debug-level diagnostics on stderr with `-v`; silent otherwise.
fn init_tracing(verbose: bool) {
    if verbose {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
