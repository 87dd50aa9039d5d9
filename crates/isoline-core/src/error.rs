//! Error types for contour extraction.

use thiserror::Error;

/// Result type alias using ContourError.
pub type ContourResult<T> = Result<T, ContourError>;

/// Errors that can occur when configuring or running an extraction.
#[derive(Debug, Error)]
pub enum ContourError {
    /// The worker count must be at least 1.
    #[error("invalid worker count: {0} (must be >= 1)")]
    InvalidWorkerCount(usize),

    /// The sample buffer does not match the declared grid dimensions.
    #[error("field dimension mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
