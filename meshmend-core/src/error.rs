//! Error types for meshmend

use thiserror::Error;

/// Main error type for meshmend operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    /// An internal consistency check failed. Distinct from `InvalidData`:
    /// the input passed validation but the algorithm observed a state it
    /// should not reach on well-formed geometry.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Did not converge after {passes} passes")]
    NotConverged { passes: usize },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type alias for meshmend operations
pub type Result<T> = std::result::Result<T, Error>;
