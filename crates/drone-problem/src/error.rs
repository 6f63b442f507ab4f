//! Error types for the drone-problem crate.
//!
//! This module defines semantic error enums for configuration validation and
//! artifact output, following the project's error handling conventions with
//! `thiserror`. Generation itself has no error path: it only accepts a
//! configuration that already passed validation.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when a requested problem size cannot yield a feasible
/// instance.
///
/// These are fatal configuration errors. They are detected before any
/// randomness is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Every goal consumes one crate, so goals cannot outnumber crates.
    #[error("cannot have more goals ({goals}) than crates ({crates})")]
    MoreGoalsThanCrates {
        /// Requested goal count.
        goals: usize,
        /// Requested crate count.
        crates: usize,
    },

    /// Every content type needs at least one crate.
    #[error("cannot have more content types ({content_types}) than crates ({crates})")]
    TooFewCrates {
        /// Requested crate count.
        crates: usize,
        /// Number of content types in the domain.
        content_types: usize,
    },

    /// A person can need each content type at most once.
    #[error("for {persons} persons, you can have at most {max_goals} goals (requested {goals})")]
    TooManyGoals {
        /// Requested person count.
        persons: usize,
        /// Upper bound on goals for this person count.
        max_goals: usize,
        /// Requested goal count.
        goals: usize,
    },

    /// Persons are never placed at the depot, so they need somewhere to be.
    #[error("{persons} persons require at least one location besides the depot")]
    NoLocationsForPersons {
        /// Requested person count.
        persons: usize,
    },
}

/// Errors that can occur while writing a generated problem to disk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The output directory could not be created or opened.
    #[error("failed to open output directory '{path}': {message}")]
    OpenDirError {
        /// Path to the output directory.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The problem file could not be written.
    #[error("failed to write problem file '{path}': {message}")]
    WriteError {
        /// Path of the file being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The problem could not be serialized.
    #[error("failed to serialize problem: {message}")]
    SerializeError {
        /// Description of the serialization error.
        message: String,
    },
}
