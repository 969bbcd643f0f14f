//! Error types for peter

use thiserror::Error;

/// Main error type for the peter application
#[derive(Debug, Error)]
pub enum PeterError {
    #[error("No questions found in config file '{0}'. Please add questions and try again.")]
    ConfigEmpty(String),

    #[error("Malformed store entry: {0}")]
    MalformedStore(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PeterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PeterError::ConfigEmpty(_) => 2,
            PeterError::MalformedStore(_) => 3,
            PeterError::Cancelled => 130,
            _ => 1,
        }
    }
}

/// Result type using PeterError
pub type Result<T> = std::result::Result<T, PeterError>;
