//! Error types for preview rendering.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Primary error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    #[error("Color ramp needs at least two stops, got {0}")]
    NotEnoughStops(usize),

    #[error("Grid shape mismatch: {len} cells for {width}x{height}")]
    ShapeMismatch { len: usize, width: usize, height: usize },

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}
