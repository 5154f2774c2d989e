//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] turns
//! an error into a message on stderr and exit code 2.

use handscope_engine::errors::{EvalError, ParseCardError};
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A card label could not be parsed
    #[error("Invalid card: {0}")]
    Parse(#[from] ParseCardError),

    /// The evaluator rejected the card set
    #[error("{0}")]
    Eval(#[from] EvalError),
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(error))
    }
}
