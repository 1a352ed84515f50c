//! Hotspot GeoJSON handler.

use axum::extract::Extension;
use axum::response::Response;
use std::sync::Arc;

use crate::handlers::common::json_response;
use crate::state::AppState;

/// GET /api/geojson/hotspots - Curated heat/cool spots as a FeatureCollection.
pub async fn hotspots_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    if let Some(static_hotspots) = &state.static_data.hotspots {
        return json_response(static_hotspots);
    }

    json_response(&heat_core::hotspots())
}
