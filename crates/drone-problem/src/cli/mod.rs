//! CLI support for generating problem files.
//!
//! This module provides parsing and run helpers for the `drone-problem-gen`
//! binary. The binary delegates to these functions so they can be exercised
//! in tests without spawning a subprocess.

use std::ffi::OsString;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::info;

use crate::config::{GenerationConfig, ProblemSize};
use crate::generator::generate_problem;
use crate::output::{OutputFormat, write_problem};
use crate::random::RandomSource;

mod error;

pub use error::CliError;

/// Parsed options for the problem generator CLI.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "drone-problem-gen",
    about = "Generate random, feasible drone delivery problems for a planner",
    version
)]
pub struct Options {
    /// Number of drones.
    #[arg(short = 'd', long, value_name = "NUM")]
    drones: usize,
    /// Number of carriers.
    #[arg(short = 'r', long, value_name = "NUM")]
    carriers: usize,
    /// Number of locations, not counting the depot.
    #[arg(short = 'l', long, value_name = "NUM")]
    locations: usize,
    /// Number of persons.
    #[arg(short = 'p', long, value_name = "NUM")]
    persons: usize,
    /// Number of crates.
    #[arg(short = 'c', long, value_name = "NUM")]
    crates: usize,
    /// Number of goals (person needs a content type).
    #[arg(short = 'g', long, value_name = "NUM")]
    goals: usize,
    /// RNG seed; a random seed is drawn and logged when omitted.
    #[arg(long, env = "DRONE_PROBLEM_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// Directory the problem file is written to.
    #[arg(
        long,
        env = "DRONE_PROBLEM_OUTPUT_DIR",
        value_name = "DIR",
        default_value = "."
    )]
    output_dir: Utf8PathBuf,
    /// Output file format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pddl)]
    format: OutputFormat,
}

impl Options {
    /// Returns the requested object counts.
    #[must_use]
    pub const fn problem_size(&self) -> ProblemSize {
        ProblemSize {
            drones: self.drones,
            carriers: self.carriers,
            locations: self.locations,
            persons: self.persons,
            crates: self.crates,
            goals: self.goals,
        }
    }

    /// Returns the directory the problem is written to.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Print this text (help or version) and exit successfully.
    Display(String),
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of a successful generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Path of the written problem file.
    pub path: Utf8PathBuf,
    /// Seed that reproduces the problem.
    pub seed: u64,
}

/// Parses CLI arguments, including the program name, into run options.
///
/// # Errors
///
/// Returns [`CliError::InvalidArguments`] when required flags are missing or
/// values cannot be parsed.
///
/// # Example
///
/// ```
/// use drone_problem::cli::{ParseOutcome, parse_args};
///
/// let args = ["drone-problem-gen", "-d", "1", "-r", "0", "-l", "3", "-p", "3", "-c", "3", "-g", "3"];
/// let outcome = parse_args(args).expect("parse args");
///
/// let ParseOutcome::Options(options) = outcome else {
///     panic!("expected options");
/// };
/// assert_eq!(options.problem_size().goals, 3);
/// ```
pub fn parse_args<I, T>(args: I) -> Result<ParseOutcome, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Options::try_parse_from(args) {
        Ok(options) => Ok(ParseOutcome::Options(options)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(ParseOutcome::Display(err.to_string()))
            }
            _ => Err(CliError::InvalidArguments {
                message: err.to_string(),
            }),
        },
    }
}

/// Validates the options, generates a problem and writes it to disk.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the requested counts cannot yield a
/// feasible problem, and [`CliError::Output`] when the file cannot be
/// written.
pub fn run(options: &Options) -> Result<RunReport, CliError> {
    let config = GenerationConfig::try_from(options.problem_size())?;
    let mut rng = options
        .seed
        .map_or_else(RandomSource::from_entropy, RandomSource::seeded);
    info!(seed = rng.seed(), "random source ready");

    let problem = generate_problem(&config, &mut rng);
    let path = write_problem(&options.output_dir, &problem, options.format)?;

    Ok(RunReport {
        path,
        seed: rng.seed(),
    })
}

/// Formats the success message emitted by the CLI.
///
/// # Example
///
/// ```
/// use drone_problem::cli::{RunReport, success_message};
///
/// let report = RunReport {
///     path: "out/drone_problem_d1_r0_l3_p3_c3_g3_ct2.pddl".into(),
///     seed: 2026,
/// };
///
/// assert_eq!(
///     success_message(&report),
///     "Generated: out/drone_problem_d1_r0_l3_p3_c3_g3_ct2.pddl (seed=2026)"
/// );
/// ```
#[must_use]
pub fn success_message(report: &RunReport) -> String {
    format!("Generated: {} (seed={})", report.path, report.seed)
}
