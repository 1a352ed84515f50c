//! Error types for the dashboard API.

use axum::http::{header, StatusCode};
use axum::response::Response;
use thiserror::Error;

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

/// Primary error type for dashboard API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: &'static str, message: String },

    #[error("Invalid layer type: {0}")]
    UnknownLayer(String),

    #[error("Status store not configured")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Data generation failed: {0}")]
    Generation(#[from] heat_core::CoreError),

    #[error("Rendering failed: {0}")]
    Render(#[from] renderer::RenderError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_)
            | ApiError::InvalidParameter { .. }
            | ApiError::UnknownLayer(_) => StatusCode::BAD_REQUEST,

            ApiError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            ApiError::Database(_)
            | ApiError::Generation(_)
            | ApiError::Render(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render as a JSON error response with a `detail` field, the body shape
    /// the dashboard front-end expects.
    pub fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        Response::builder()
            .status(self.http_status_code())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.to_string().into())
            .unwrap()
    }
}
