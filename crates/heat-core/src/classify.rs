//! Per-location classification against the reference table.
//!
//! [`classify`] is the pure, deterministic half: nearest reference point,
//! open-water override, distance-based formulas. Jitter and range clamps
//! live on [`Classification`] so tests can exercise the raw formulas with
//! noise disabled, and the RNG is always injected by the caller.

use rand::Rng;
use serde::Serialize;

use crate::reference::{LandCategory, REFERENCE_POINTS};

/// Southern latitude bound. Anything below is treated as open water.
const WATER_LAT_BOUND: f64 = 43.55;
/// Western longitude bound. Anything further west is treated as open water.
const WATER_LNG_BOUND: f64 = -80.0;

/// First year of the observation window; trend adjustments count from here.
pub const BASE_YEAR: i32 = 2018;

/// Warming trend applied to heat delta and surface temperature, degrees C per year.
const HEAT_TREND_PER_YEAR: f64 = 0.4;
/// Greening trend applied to the vegetation index per year.
const NDVI_TREND_PER_YEAR: f64 = 0.008;

/// One classified point. Values may be outside the documented ranges until
/// [`Classification::clamped`] is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub category: LandCategory,
    /// Urban heat island delta, degrees C.
    pub heat_delta: f64,
    /// Vegetation index.
    pub ndvi: f64,
    /// Land surface temperature, degrees C.
    pub lst: f64,
}

impl Classification {
    /// Fixed values substituted by the open-water override.
    const WATER: Classification = Classification {
        category: LandCategory::Water,
        heat_delta: 0.5,
        ndvi: 0.12,
        lst: 22.0,
    };

    /// Add uniform measurement jitter to all three outputs.
    pub fn jittered<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.heat_delta += rng.gen_range(-0.3..0.3);
        self.ndvi += rng.gen_range(-0.03..0.03);
        self.lst += rng.gen_range(-1.0..1.0);
        self
    }

    /// Clamp all three outputs to their documented ranges: heat delta to
    /// [0, 10], vegetation index to [0, 1], surface temperature to [18, 48].
    pub fn clamped(mut self) -> Self {
        self.heat_delta = self.heat_delta.clamp(0.0, 10.0);
        self.ndvi = self.ndvi.clamp(0.0, 1.0);
        self.lst = self.lst.clamp(18.0, 48.0);
        self
    }
}

/// Classify a point against the nearest reference location.
///
/// Pure and deterministic: no jitter, no clamping, so the returned values
/// are the raw formula outputs. At zero distance this reproduces the
/// reference point's baselines exactly.
pub fn classify(lat: f64, lng: f64) -> Classification {
    let mut min_dist = f64::INFINITY;
    let mut nearest = &REFERENCE_POINTS[0];
    for point in &REFERENCE_POINTS {
        let dist = ((lat - point.lat).powi(2) + (lng - point.lng).powi(2)).sqrt();
        if dist < min_dist {
            min_dist = dist;
            nearest = point;
        }
    }

    // The open-water bounds check runs after the scan and overrides its
    // result unconditionally.
    if lat < WATER_LAT_BOUND || lng < WATER_LNG_BOUND {
        return Classification::WATER;
    }

    // Heat climbs with distance from an industrial core and falls with
    // distance from everything else.
    let heat_sign = if nearest.category == LandCategory::Industrial { 1.0 } else { -1.0 };
    let heat_delta = nearest.heat_delta + min_dist * 15.0 * heat_sign;

    // Vegetation decays away from green baselines and picks up slightly
    // away from built-up ones.
    let ndvi = match nearest.category {
        LandCategory::Park | LandCategory::Residential => nearest.ndvi - min_dist * 0.5,
        _ => nearest.ndvi + min_dist * 0.1,
    };

    // Surface temperature tracks the heat delta and inverse vegetation.
    let lst = 28.0 + heat_delta + (1.0 - ndvi) * 8.0;

    Classification { category: nearest.category, heat_delta, ndvi, lst }
}

/// Wire payload for a classified map click.
#[derive(Debug, Clone, Serialize)]
pub struct LocationReport {
    pub duhi: f64,
    pub ndvi: f64,
    pub lst: f64,
    pub location_type: LandCategory,
    pub description: &'static str,
}

/// Full per-location report: classify, jitter, clamp, then apply the linear
/// warming/greening trend when a year is supplied (re-clamping afterwards so
/// the documented ranges hold for every output this function produces).
pub fn location_report<R: Rng + ?Sized>(
    lat: f64,
    lng: f64,
    year: Option<i32>,
    rng: &mut R,
) -> LocationReport {
    let mut c = classify(lat, lng).jittered(rng).clamped();

    if let Some(year) = year {
        let years = (year - BASE_YEAR) as f64;
        c.heat_delta += years * HEAT_TREND_PER_YEAR;
        c.lst += years * HEAT_TREND_PER_YEAR;
        c.ndvi += years * NDVI_TREND_PER_YEAR;
        c = c.clamped();
    }

    LocationReport {
        duhi: c.heat_delta,
        ndvi: c.ndvi,
        lst: c.lst,
        location_type: c.category,
        description: c.category.description(),
    }
}
