//! Common response helpers shared across handlers.

use axum::http::{header, StatusCode};
use axum::response::Response;
use serde::Serialize;

use crate::error::ApiError;

/// Serialize a payload as a 200 JSON response.
pub fn json_response<T: Serialize>(payload: &T) -> Response {
    match serde_json::to_string(payload) {
        Ok(json) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(json.into())
            .unwrap(),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            ApiError::Internal("Failed to serialize response".to_string()).into_response()
        }
    }
}
