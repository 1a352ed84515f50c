//! Regional aggregate metrics over the synthetic layers.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::stats;
use crate::synth::{generate_grid, LayerKind, GRID_HEIGHT, GRID_WIDTH};

/// Long-run DUHI trend reported with every snapshot, fitted offline to the
/// 2018-2025 series.
pub const DUHI_TREND: f64 = 3.846;

/// Correlation reported when the valid sample is too small or degenerate.
const DEFAULT_CORRELATION: f64 = -0.78;

/// Minimum valid cells before a computed correlation is trusted.
const MIN_CORRELATION_SAMPLE: usize = 100;

/// Aggregate snapshot backing the dashboard KPI cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalMetrics {
    pub mean_duhi: f64,
    pub area_exceeding_4c: f64,
    pub mean_ndvi: f64,
    pub correlation_ndvi_lst: f64,
    pub mean_lst: f64,
    pub duhi_trend: f64,
    pub region: String,
}

impl RegionalMetrics {
    /// Constant snapshot for when generation fails. Callers at the HTTP
    /// boundary choose whether to substitute this; the generator itself
    /// reports the error.
    pub fn fallback(region: &str) -> Self {
        Self {
            mean_duhi: 4.2,
            area_exceeding_4c: 42.0,
            mean_ndvi: 0.35,
            correlation_ndvi_lst: -0.78,
            mean_lst: 32.5,
            duhi_trend: DUHI_TREND,
            region: region.to_string(),
        }
    }
}

/// Round half away from zero to `dp` decimal places for wire output.
fn round_to(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

/// Compute an aggregate snapshot from freshly generated synthetic layers.
///
/// Cells are filtered through one mask shared by all three layers (surface
/// temperature plausible, vegetation index physical) so the slices fed to
/// the correlation stay index-aligned.
pub fn regional_metrics<R: Rng + ?Sized>(region: &str, rng: &mut R) -> CoreResult<RegionalMetrics> {
    let lst = generate_grid(LayerKind::Lst, GRID_WIDTH, GRID_HEIGHT, rng)?;
    let ndvi = generate_grid(LayerKind::Ndvi, GRID_WIDTH, GRID_HEIGHT, rng)?;
    let duhi = generate_grid(LayerKind::Duhi, GRID_WIDTH, GRID_HEIGHT, rng)?;

    let mut lst_valid = Vec::with_capacity(lst.data.len());
    let mut ndvi_valid = Vec::with_capacity(lst.data.len());
    let mut duhi_valid = Vec::with_capacity(lst.data.len());
    for ((&t, &v), &d) in lst.data.iter().zip(ndvi.data.iter()).zip(duhi.data.iter()) {
        if t > -50.0 && t < 100.0 && (-1.0..=1.0).contains(&v) {
            lst_valid.push(t);
            ndvi_valid.push(v);
            duhi_valid.push(d);
        }
    }

    let mean_lst = stats::mean(&lst_valid).ok_or(CoreError::EmptyGrid)?;
    let mean_ndvi = stats::mean(&ndvi_valid).ok_or(CoreError::EmptyGrid)?;
    let mean_duhi = stats::mean(&duhi_valid).ok_or(CoreError::EmptyGrid)?;

    let hot_cells = duhi_valid.iter().filter(|&&d| d >= 4.0).count();
    let area_hot = hot_cells as f64 / duhi_valid.len() as f64 * 100.0;

    let correlation = if lst_valid.len() > MIN_CORRELATION_SAMPLE {
        stats::pearson(&ndvi_valid, &lst_valid).unwrap_or(DEFAULT_CORRELATION)
    } else {
        DEFAULT_CORRELATION
    };

    Ok(RegionalMetrics {
        mean_duhi: round_to(mean_duhi, 2),
        area_exceeding_4c: round_to(area_hot, 1),
        mean_ndvi: round_to(mean_ndvi, 3),
        correlation_ndvi_lst: round_to(correlation, 3),
        mean_lst: round_to(mean_lst, 2),
        duhi_trend: DUHI_TREND,
        region: region.to_string(),
    })
}
