//! Per-location classification handler.

use axum::extract::Query;
use axum::response::Response;
use serde::Deserialize;

use heat_core::location_report;

use crate::error::{ApiError, ApiResult};
use crate::handlers::common::json_response;

/// Query parameters for the location-data endpoint. Raw strings so the
/// handler can return JSON 400 bodies for missing or non-numeric values.
#[derive(Debug, Deserialize)]
pub struct LocationParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub year: Option<String>,
}

/// GET /api/location-data - Classified values for a clicked map point.
pub async fn location_data_handler(Query(params): Query<LocationParams>) -> Response {
    let (lat, lng, year) = match parse_params(&params) {
        Ok(parsed) => parsed,
        Err(e) => return e.into_response(),
    };

    let mut rng = rand::thread_rng();
    json_response(&location_report(lat, lng, year, &mut rng))
}

fn parse_params(params: &LocationParams) -> ApiResult<(f64, f64, Option<i32>)> {
    let lat = parse_coord(params.lat.as_deref(), "lat")?;
    let lng = parse_coord(params.lng.as_deref(), "lng")?;

    let year = match params.year.as_deref() {
        Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| ApiError::InvalidParameter {
            param: "year",
            message: format!("expected a year, got '{}'", raw),
        })?),
        None => None,
    };

    Ok((lat, lng, year))
}

fn parse_coord(raw: Option<&str>, param: &'static str) -> ApiResult<f64> {
    let raw = match raw {
        Some(r) if !r.trim().is_empty() => r,
        _ => return Err(ApiError::MissingParameter(param)),
    };

    raw.trim().parse::<f64>().map_err(|_| ApiError::InvalidParameter {
        param,
        message: format!("expected a number, got '{}'", raw),
    })
}
