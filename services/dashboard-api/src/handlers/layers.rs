//! Layer preview handler.

use axum::extract::Path;
use axum::response::Response;
use serde::Serialize;

use heat_core::{generate_grid, LayerKind, GRID_HEIGHT, GRID_WIDTH};
use renderer::{duhi_ramp, lst_ramp, ndvi_ramp, render_data_uri, ColorRamp, PREVIEW_HEIGHT, PREVIEW_WIDTH};

use crate::error::{ApiError, ApiResult};
use crate::handlers::common::json_response;

/// Wire payload: the preview image as a data URI plus the layer it renders.
#[derive(Serialize)]
pub struct LayerPreviewResponse {
    pub image: String,
    pub layer: LayerKind,
}

/// GET /api/layer-preview/:layer - Colored raster preview for the map.
pub async fn layer_preview_handler(Path(layer): Path<String>) -> Response {
    let Some(kind) = LayerKind::from_name(&layer) else {
        return ApiError::UnknownLayer(layer).into_response();
    };

    match render_preview(kind) {
        Ok(image) => json_response(&LayerPreviewResponse { image, layer: kind }),
        Err(e) => {
            tracing::error!("Preview rendering failed for layer {}: {}", kind.as_str(), e);
            e.into_response()
        }
    }
}

/// Color ramp matching the front-end legend for each layer.
fn ramp_for(kind: LayerKind) -> ColorRamp {
    match kind {
        LayerKind::Duhi => duhi_ramp(),
        LayerKind::Ndvi => ndvi_ramp(),
        LayerKind::Lst => lst_ramp(),
    }
}

fn render_preview(kind: LayerKind) -> ApiResult<String> {
    let mut rng = rand::thread_rng();
    let grid = generate_grid(kind, GRID_WIDTH, GRID_HEIGHT, &mut rng)?;
    let uri = render_data_uri(
        &grid.data,
        grid.width,
        grid.height,
        PREVIEW_WIDTH,
        PREVIEW_HEIGHT,
        &ramp_for(kind),
    )?;
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_unknown_layer_is_bad_request() {
        let response = layer_preview_handler(Path("albedo".to_string())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_known_layer_renders() {
        let response = layer_preview_handler(Path("ndvi".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_render_preview_produces_data_uri() {
        for kind in [LayerKind::Duhi, LayerKind::Ndvi, LayerKind::Lst] {
            let uri = render_preview(kind).unwrap();
            assert!(uri.starts_with("data:image/png;base64,"), "{}", kind.as_str());
        }
    }

    #[test]
    fn test_ramp_windows_match_layer_data() {
        // The ramp windows must bracket each layer's distribution center.
        assert!(ramp_for(LayerKind::Duhi).vmin() < 2.5 && ramp_for(LayerKind::Duhi).vmax() > 2.5);
        assert!(ramp_for(LayerKind::Ndvi).vmin() < 0.35 && ramp_for(LayerKind::Ndvi).vmax() > 0.35);
        assert!(ramp_for(LayerKind::Lst).vmin() < 32.0 && ramp_for(LayerKind::Lst).vmax() > 32.0);
    }
}
