//! Error types for the CLI application.
//!
//! All command handlers propagate failures through [`CliError`] so that the
//! dispatcher can map them to exit codes uniformly.

use cartamaroc_engine::errors::{GameError, TriviaError};
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error (unreadable or malformed question bank)
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

// Bank load failures are configuration problems; the rest are engine errors.
impl From<TriviaError> for CliError {
    fn from(error: TriviaError) -> Self {
        match error {
            TriviaError::BankRead(_) | TriviaError::BankParse(_) | TriviaError::NoQuestions => {
                CliError::Config(error.to_string())
            }
            other => CliError::Engine(other.to_string()),
        }
    }
}
