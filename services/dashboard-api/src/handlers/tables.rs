//! Static chart table handlers.
//!
//! These serve the curated tables behind the bar and donut charts. Each
//! endpoint prefers its static export when one is loaded.

use axum::extract::Extension;
use axum::response::Response;
use std::sync::Arc;

use heat_core::{heat_distribution, land_use_distribution, regional_breakdown};

use crate::handlers::common::json_response;
use crate::state::AppState;

/// GET /api/regional-breakdown - Per-municipality summary rows.
pub async fn regional_breakdown_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    if let Some(static_rows) = &state.static_data.regional_breakdown {
        return json_response(static_rows);
    }

    json_response(&regional_breakdown())
}

/// GET /api/land-use - Land use shares for the donut chart.
pub async fn land_use_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    if let Some(static_shares) = &state.static_data.land_use {
        return json_response(static_shares);
    }

    json_response(&land_use_distribution())
}

/// GET /api/heat-distribution - DUHI histogram buckets.
pub async fn heat_distribution_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    if let Some(static_buckets) = &state.static_data.heat_distribution {
        return json_response(static_buckets);
    }

    json_response(&heat_distribution())
}
