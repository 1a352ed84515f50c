//! Error types for the synthetic data generators.

use thiserror::Error;

/// Result type alias using CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Primary error type for heat-core operations.
///
/// Generators report failures instead of silently substituting defaults;
/// callers at the HTTP boundary decide whether a fallback snapshot is an
/// acceptable response.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),

    #[error("Invalid grid shape: {width}x{height}")]
    InvalidGridShape { width: usize, height: usize },

    #[error("No valid cells remain after masking")]
    EmptyGrid,
}
