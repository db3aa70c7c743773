//! Stepgraph - step-by-step graph algorithm traces
//!
//! Loads a weighted undirected graph, runs one of the registered engines
//! and prints every step of the run.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use stepgraph_core::error::{ExitCode as StepGraphExitCode, StepGraphError};
use stepgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(StepGraphExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Print a clap failure and pick the exit code.
///
/// `Cli.format` is unknown when parsing fails, so the raw arguments decide
/// whether the error goes out as a JSON envelope or as clap's own text.
fn report_parse_error(err: clap::Error) -> ExitCode {
    if !requests_json(env::args().skip(1)) {
        err.exit();
    }
    match classify_parse_error(err.kind(), err.to_string()) {
        Some(error) => {
            eprintln!("{}", error.to_json());
            ExitCode::from(error.exit_code() as u8)
        }
        None => err.exit(),
    }
}

/// Map a clap error kind onto our error type; `None` for help and version output
fn classify_parse_error(kind: ErrorKind, message: String) -> Option<StepGraphError> {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        // a repeated --format lands here too
        ErrorKind::ArgumentConflict
        | ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument => Some(StepGraphError::UsageError(message)),
        _ => Some(StepGraphError::Other(message)),
    }
}

fn requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
