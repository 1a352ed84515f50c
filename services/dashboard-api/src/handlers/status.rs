//! Status-check handlers.
//!
//! Both routes require the optional PostgreSQL store and answer 503 when the
//! service runs without one.

use axum::extract::Extension;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::handlers::common::json_response;
use crate::state::AppState;
use crate::status_store::{StatusCheck, LIST_LIMIT};

/// Request body for creating a status check.
#[derive(Debug, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// POST /api/status - Record a status check, echoing the stored row.
pub async fn create_status_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<StatusCheckCreate>,
) -> Response {
    let Some(store) = &state.status_store else {
        return ApiError::StoreUnavailable.into_response();
    };

    let check = StatusCheck::new(&payload.client_name);
    match store.insert(&check).await {
        Ok(()) => json_response(&check),
        Err(e) => {
            tracing::error!("Failed to record status check: {}", e);
            e.into_response()
        }
    }
}

/// GET /api/status - List recent status checks, newest first.
pub async fn list_status_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let Some(store) = &state.status_store else {
        return ApiError::StoreUnavailable.into_response();
    };

    match store.list(LIST_LIMIT).await {
        Ok(checks) => json_response(&checks),
        Err(e) => {
            tracing::error!("Failed to list status checks: {}", e);
            e.into_response()
        }
    }
}
