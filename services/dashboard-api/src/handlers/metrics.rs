//! Regional metrics handler.

use axum::extract::{Extension, Query};
use axum::response::Response;
use serde::Deserialize;
use std::sync::Arc;

use heat_core::{regional_metrics, RegionalMetrics};

use crate::handlers::common::json_response;
use crate::state::AppState;

/// Query parameters for the metrics endpoint.
#[derive(Debug, Deserialize)]
pub struct MetricsParams {
    /// Region stamped into the snapshot; defaults to the configured region.
    pub region: Option<String>,
}

/// GET /api/metrics - Aggregate snapshot for the KPI cards.
///
/// Serves a static export verbatim when one is configured; otherwise
/// computes a fresh synthetic snapshot. Generation failures are the one
/// place fallback substitution happens: the handler logs the error and
/// serves the documented constant snapshot instead.
pub async fn metrics_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<MetricsParams>,
) -> Response {
    if let Some(static_metrics) = &state.static_data.metrics {
        return json_response(static_metrics);
    }

    let region = params.region.as_deref().unwrap_or(&state.region);

    let mut rng = rand::thread_rng();
    match regional_metrics(region, &mut rng) {
        Ok(metrics) => json_response(&metrics),
        Err(e) => {
            tracing::warn!("Metrics generation failed, serving fallback snapshot: {}", e);
            json_response(&RegionalMetrics::fallback(region))
        }
    }
}
