//! Health and readiness handlers.

use std::sync::Arc;
use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

/// GET /health - Basic health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check (verifies database connectivity when a
/// status store is configured; without one the service is always ready)
pub async fn ready_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let db_status = match &state.status_store {
        Some(store) => Some(match store.ping().await {
            Ok(()) => "ok".to_string(),
            Err(e) => format!("error: {}", e),
        }),
        None => None,
    };

    let is_ready = db_status.as_deref().map(|s| s == "ok").unwrap_or(true);

    let response = ReadyResponse {
        ready: is_ready,
        database: db_status,
    };

    let status = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let json = serde_json::to_string(&response).unwrap_or_default();

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_data::StaticData;

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_ready_without_store() {
        let state = Arc::new(AppState {
            region: "Peel".to_string(),
            static_data: StaticData::default(),
            status_store: None,
        });
        let response = ready_handler(Extension(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
