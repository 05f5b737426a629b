//! Error types for the settlement calculator
//!
//! Settling itself never fails; errors only come from loading configuration
//! or reading participant documents.

use thiserror::Error;

/// Result type for settlement calculator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Settlement calculator errors
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Participant document could not be read
    #[error("Invalid input: {0}")]
    Input(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
