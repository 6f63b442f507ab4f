//! Problem generator CLI.
//!
//! This binary delegates to `drone_problem::cli` for parsing and generation,
//! keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use drone_problem::cli::{CliError, ParseOutcome, parse_args, run, success_message};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> ExitCode {
    init_tracing();
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> Result<(), CliError> {
    match parse_args(env::args_os())? {
        ParseOutcome::Display(text) => {
            write_stdout(text.trim_end());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let report = run(&options)?;
            write_stdout(&success_message(&report));
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn write_stdout(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
