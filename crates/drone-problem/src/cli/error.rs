//! Error types for the problem generator CLI.

use thiserror::Error;

use crate::error::{ConfigError, OutputError};

/// Errors surfaced by the CLI parsing and run flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Arguments were missing or malformed; the message is clap's report.
    #[error("{message}")]
    InvalidArguments {
        /// Rendered argument error, including usage.
        message: String,
    },
    /// The requested counts cannot yield a feasible problem.
    #[error("invalid configuration: {source}")]
    Config {
        /// Underlying validation error.
        #[from]
        #[source]
        source: ConfigError,
    },
    /// The problem file could not be written.
    #[error("output error: {source}")]
    Output {
        /// Underlying output error.
        #[from]
        #[source]
        source: OutputError,
    },
}
