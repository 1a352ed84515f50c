//! Timeseries handler.

use axum::extract::Extension;
use axum::response::Response;
use std::sync::Arc;

use heat_core::generate_timeseries;

use crate::handlers::common::json_response;
use crate::state::AppState;

/// GET /api/timeseries - 2018-2025 trend series for the charts.
pub async fn timeseries_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    if let Some(static_series) = &state.static_data.timeseries {
        return json_response(static_series);
    }

    let mut rng = rand::thread_rng();
    json_response(&generate_timeseries(&mut rng))
}
