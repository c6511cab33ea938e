//! Error types for the CLI

use springs::puzzle::Part;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be read
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// A part failed to solve
    #[error("{part}: {source}")]
    Solve {
        part: Part,
        #[source]
        source: springs::SolveError,
    },

    /// A part produced a different answer than the one expected
    #[error("{part}: expected {expected}, got {actual}")]
    AnswerMismatch {
        part: Part,
        expected: u64,
        actual: u64,
    },

    /// Executor thread failed
    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Result receiver hung up
    #[error("Channel send error")]
    ChannelSend,

    /// Executor thread panicked
    #[error("Executor thread panicked")]
    Panicked,
}

/// Input-specific errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}
