//! Error types for the mantle engine.
//!
//! All crates return `MantleResult<T>` from fallible operations.
//! Degenerate numerics (coincident segments, zero-length constraints)
//! are resolved locally by the simulation and never surface here.

use thiserror::Error;

/// Unified error type for the mantle engine.
#[derive(Debug, Error, PartialEq)]
pub enum MantleError {
    /// A construction parameter is below its allowed minimum.
    #[error("{parameter} must be larger than or equal to {minimum} (got {value})")]
    OutOfRange {
        parameter: &'static str,
        value: i64,
        minimum: i64,
    },

    /// An index lies outside the array it addresses.
    #[error("{what} index {index} is out of bounds (length {len})")]
    IndexOutOfBounds {
        what: &'static str,
        index: i64,
        len: usize,
    },

    /// A buffer was supplied with the wrong number of positions.
    #[error("Expected {expected} positions, got {actual}")]
    PositionCount { expected: usize, actual: usize },

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MantleError {
    /// Shorthand for a construction parameter below its minimum.
    pub fn below_minimum(parameter: &'static str, value: i64, minimum: i64) -> Self {
        Self::OutOfRange {
            parameter,
            value,
            minimum,
        }
    }
}

/// Convenience alias for `Result<T, MantleError>`.
pub type MantleResult<T> = Result<T, MantleError>;
