//! Tests for the dashboard API HTTP surface.
//!
//! These exercise the handlers and their wire formats directly, without a
//! network listener or a database connection: each handler is invoked with
//! hand-built state and its JSON body decoded back.

use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use dashboard_api::handlers;
use dashboard_api::handlers::location::LocationParams;
use dashboard_api::handlers::metrics::MetricsParams;
use dashboard_api::handlers::status::StatusCheckCreate;
use dashboard_api::state::AppState;
use dashboard_api::static_data::StaticData;

/// State with no static exports and no status store: everything live.
fn live_state() -> Arc<AppState> {
    Arc::new(AppState {
        region: "Peel".to_string(),
        static_data: StaticData::default(),
        status_store: None,
    })
}

fn location_params(lat: Option<&str>, lng: Option<&str>, year: Option<&str>) -> LocationParams {
    LocationParams {
        lat: lat.map(String::from),
        lng: lng.map(String::from),
        year: year.map(String::from),
    }
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Landing and health
// ============================================================================

#[tokio::test]
async fn test_landing_banner_fields() {
    let response = handlers::landing::landing_handler().await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Urban Heat & Greenness Dashboard API");
    assert!(!json["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_ready_without_database_reports_ready() {
    let response = handlers::health::ready_handler(Extension(live_state())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ready"], true);
    // No store configured, so no database field is reported.
    assert!(json.get("database").is_none());
}

// ============================================================================
// Metrics
// ============================================================================

#[tokio::test]
async fn test_metrics_payload_has_all_kpi_fields() {
    let response = handlers::metrics::metrics_handler(
        Extension(live_state()),
        Query(MetricsParams { region: None }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    for key in [
        "mean_duhi",
        "area_exceeding_4c",
        "mean_ndvi",
        "correlation_ndvi_lst",
        "mean_lst",
        "duhi_trend",
        "region",
    ] {
        assert!(json.get(key).is_some(), "missing field {key}");
    }
    assert_eq!(json["region"], "Peel");
    assert_eq!(json["duhi_trend"], 3.846);
}

#[tokio::test]
async fn test_metrics_region_param_overrides_configured_region() {
    let response = handlers::metrics::metrics_handler(
        Extension(live_state()),
        Query(MetricsParams { region: Some("Halton".to_string()) }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["region"], "Halton");
}

#[tokio::test]
async fn test_metrics_static_export_served_verbatim() {
    let static_data = StaticData {
        metrics: Some(serde_json::json!({"mean_duhi": 9.9, "region": "Frozen"})),
        ..StaticData::default()
    };
    let state = Arc::new(AppState {
        region: "Peel".to_string(),
        static_data,
        status_store: None,
    });

    let response = handlers::metrics::metrics_handler(
        Extension(state),
        Query(MetricsParams { region: Some("Ignored".to_string()) }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["mean_duhi"], 9.9);
    assert_eq!(json["region"], "Frozen");
}

// ============================================================================
// Timeseries
// ============================================================================

#[tokio::test]
async fn test_timeseries_covers_2018_through_2025() {
    let response = handlers::timeseries::timeseries_handler(Extension(live_state())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let years: Vec<i64> = json["years"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(years, (2018..=2025).collect::<Vec<_>>());

    for column in ["lst", "ndvi", "duhi"] {
        assert_eq!(
            json[column].as_array().unwrap().len(),
            years.len(),
            "column {column} length"
        );
    }
}

// ============================================================================
// Location data
// ============================================================================

#[tokio::test]
async fn test_location_report_shape_at_downtown() {
    let response = handlers::location::location_data_handler(Query(location_params(
        Some("43.7315"),
        Some("-79.7624"),
        None,
    )))
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["location_type"], "downtown");
    assert!(json["duhi"].is_number());
    assert!(json["ndvi"].is_number());
    assert!(json["lst"].is_number());
    assert!(json["description"]
        .as_str()
        .unwrap()
        .contains("urban core"));
}

#[tokio::test]
async fn test_location_south_of_region_is_water() {
    // Below the 43.55 N cutoff everything reads as lake.
    let response = handlers::location::location_data_handler(Query(location_params(
        Some("43.40"),
        Some("-79.70"),
        None,
    )))
    .await;

    let json = body_json(response).await;
    assert_eq!(json["location_type"], "water");
    // Water values jitter around the fixed baseline.
    let lst = json["lst"].as_f64().unwrap();
    assert!((21.0..=23.0).contains(&lst), "water lst {lst}");
    let duhi = json["duhi"].as_f64().unwrap();
    assert!((0.2..=0.8).contains(&duhi), "water duhi {duhi}");
}

#[tokio::test]
async fn test_location_missing_lat_is_json_400() {
    let response = handlers::location::location_data_handler(Query(location_params(
        None,
        Some("-79.70"),
        None,
    )))
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("lat"));
}

#[tokio::test]
async fn test_location_year_shifts_heat_upward() {
    // 2025 sits seven trend-years above the 2018 baseline; with +-0.3
    // jitter the 2025 reading always exceeds the 2018 one at the same
    // non-water point (trend contributes +2.8 C).
    let early = handlers::location::location_data_handler(Query(location_params(
        Some("43.6847"),
        Some("-79.6951"),
        Some("2018"),
    )))
    .await;
    let late = handlers::location::location_data_handler(Query(location_params(
        Some("43.6847"),
        Some("-79.6951"),
        Some("2025"),
    )))
    .await;

    let early_duhi = body_json(early).await["duhi"].as_f64().unwrap();
    let late_duhi = body_json(late).await["duhi"].as_f64().unwrap();
    assert!(late_duhi > early_duhi, "2025 {late_duhi} vs 2018 {early_duhi}");
}

// ============================================================================
// Layer previews
// ============================================================================

#[tokio::test]
async fn test_layer_preview_returns_data_uri() {
    let response = handlers::layers::layer_preview_handler(Path("duhi".to_string())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["layer"], "duhi");
    assert!(json["image"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_layer_preview_unknown_layer_is_json_400() {
    let response = handlers::layers::layer_preview_handler(Path("albedo".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["detail"], "Invalid layer type: albedo");
}

// ============================================================================
// Hotspots and tables
// ============================================================================

#[tokio::test]
async fn test_hotspots_is_point_feature_collection() {
    let response = handlers::hotspots::hotspots_handler(Extension(live_state())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["type"], "FeatureCollection");

    let features = json["features"].as_array().unwrap();
    assert!(!features.is_empty());
    for feature in features {
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"].as_array().unwrap().len(), 2);
        assert!(feature["properties"]["name"].is_string());
    }
}

#[tokio::test]
async fn test_regional_breakdown_rows() {
    let response = handlers::tables::regional_breakdown_handler(Extension(live_state())).await;
    let json = body_json(response).await;

    let rows = json.as_array().unwrap();
    assert!(!rows.is_empty());
    for row in rows {
        assert!(row["name"].is_string());
        assert!(row["mean_ndvi"].is_number());
        assert!(row["mean_lst"].is_number());
        assert!(row["duhi_trend"].is_number());
        assert!(row["correlation"].is_number());
    }
}

#[tokio::test]
async fn test_land_use_shares_sum_to_100() {
    let response = handlers::tables::land_use_handler(Extension(live_state())).await;
    let json = body_json(response).await;

    let total: u64 = json
        .as_array()
        .unwrap()
        .iter()
        .map(|share| share["percent"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 100);
}

#[tokio::test]
async fn test_heat_distribution_buckets() {
    let response = handlers::tables::heat_distribution_handler(Extension(live_state())).await;
    let json = body_json(response).await;

    let buckets = json.as_array().unwrap();
    assert!(!buckets.is_empty());
    for bucket in buckets {
        assert!(bucket["range"].is_string());
        assert!(bucket["percentage"].is_number());
        assert!(bucket["color"].as_str().unwrap().starts_with('#'));
    }
}

#[tokio::test]
async fn test_insights_cards() {
    let response = handlers::insights::insights_handler().await;
    let json = body_json(response).await;

    let cards = json.as_array().unwrap();
    assert!(!cards.is_empty());
    for card in cards {
        assert!(card["category"].is_string());
        assert!(card["title"].is_string());
        assert!(card["text"].is_string());
        assert!(card["icon"].is_string());
    }
}

// ============================================================================
// Status routes without a store
// ============================================================================

#[tokio::test]
async fn test_status_create_without_store_is_503() {
    let response = handlers::status::create_status_handler(
        Extension(live_state()),
        Json(StatusCheckCreate { client_name: "dashboard".to_string() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["detail"], "Status store not configured");
}

#[tokio::test]
async fn test_status_list_without_store_is_503() {
    let response = handlers::status::list_status_handler(Extension(live_state())).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
