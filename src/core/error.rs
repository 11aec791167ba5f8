//! Error types for the vol-target simulator.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, VolTargetError>;

/// Error types for simulation and strategy evaluation.
///
/// Configuration problems are rejected eagerly at construction time.
/// Arithmetic degeneracies (a zero volatility estimate producing an
/// infinite exposure weight) are NOT errors: they propagate through
/// floating-point semantics into downstream aggregates.
#[derive(Error, Debug)]
pub enum VolTargetError {
    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Data length mismatch between a matrix and its configuration.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Path index out of range.
    #[error("Path index {index} out of bounds for {npaths} paths")]
    PathOutOfBounds { index: usize, npaths: usize },
}

impl VolTargetError {
    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a path-out-of-bounds error.
    pub fn path_out_of_bounds(index: usize, npaths: usize) -> Self {
        Self::PathOutOfBounds { index, npaths }
    }
}
