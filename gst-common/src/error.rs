//! Common error types for GST

use thiserror::Error;

/// Common result type for GST operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the build
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An upstream snapshot or catalog could not be fetched or decoded
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
