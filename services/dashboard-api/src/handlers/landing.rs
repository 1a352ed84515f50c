//! Landing route handler.

use axum::response::Response;
use serde::Serialize;

use crate::handlers::common::json_response;

#[derive(Serialize)]
pub struct LandingResponse {
    pub message: String,
    pub version: String,
}

/// GET /api/ - Service banner
pub async fn landing_handler() -> Response {
    json_response(&LandingResponse {
        message: "Urban Heat & Greenness Dashboard API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
