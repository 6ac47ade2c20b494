//! Common error types for factree

use thiserror::Error;

/// Common result type for factree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types across the factorization library
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid user input (non-positive value)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Recursion depth guard tripped during tree construction
    #[error("Factorization depth limit exceeded: {0}")]
    DepthLimit(usize),

    /// Node-count guard tripped during tree construction
    #[error("Factorization node limit exceeded: {0}")]
    NodeLimit(usize),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error (wraps serde_json::Error)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
