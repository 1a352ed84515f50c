//! Eight-year trend series for the dashboard charts.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// First year covered by the series.
pub const START_YEAR: i32 = 2018;
/// Last year covered by the series, inclusive.
pub const END_YEAR: i32 = 2025;

/// Column-oriented series payload, one entry per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesData {
    pub years: Vec<i32>,
    pub lst: Vec<f64>,
    pub ndvi: Vec<f64>,
    pub duhi: Vec<f64>,
}

/// Generate the 2018-2025 series: a linear trend per variable plus bounded
/// uniform noise, regenerated fresh on every call.
pub fn generate_timeseries<R: Rng + ?Sized>(rng: &mut R) -> TimeseriesData {
    let years: Vec<i32> = (START_YEAR..=END_YEAR).collect();

    let mut lst = Vec::with_capacity(years.len());
    let mut ndvi = Vec::with_capacity(years.len());
    let mut duhi = Vec::with_capacity(years.len());
    for i in 0..years.len() {
        let step = i as f64;
        lst.push(28.0 + step * 0.8 + rng.gen_range(-0.5..0.5));
        ndvi.push(0.30 + step * 0.01 + rng.gen_range(-0.02..0.02));
        duhi.push(3.0 + step * 0.3 + rng.gen_range(-0.2..0.2));
    }

    TimeseriesData { years, lst, ndvi, duhi }
}
