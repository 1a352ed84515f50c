//! Constant chart tables for the region.
//!
//! These are curated summary figures, not derived from the synthetic layers;
//! the constructors allocate fresh values so callers can serialize or embed
//! them without touching shared state.

use serde::{Deserialize, Serialize};

/// Per-municipality metric summary for the breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub name: String,
    pub mean_ndvi: f64,
    pub mean_lst: f64,
    pub duhi_trend: f64,
    pub correlation: f64,
}

/// Metric summaries for each municipality plus the region roll-up.
pub fn regional_breakdown() -> Vec<RegionSummary> {
    vec![
        RegionSummary {
            name: "Brampton".to_string(),
            mean_ndvi: 0.32,
            mean_lst: 33.2,
            duhi_trend: 3.9,
            correlation: -0.76,
        },
        RegionSummary {
            name: "Mississauga".to_string(),
            mean_ndvi: 0.29,
            mean_lst: 34.1,
            duhi_trend: 3.7,
            correlation: -0.79,
        },
        RegionSummary {
            name: "Caledon".to_string(),
            mean_ndvi: 0.48,
            mean_lst: 28.5,
            duhi_trend: 2.8,
            correlation: -0.81,
        },
        RegionSummary {
            name: "Peel (All)".to_string(),
            mean_ndvi: 0.35,
            mean_lst: 32.5,
            duhi_trend: 3.8,
            correlation: -0.78,
        },
    ]
}

/// One land-use class share for the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandUseShare {
    pub name: String,
    pub percent: u32,
}

/// Land-use split of the region. Shares sum to 100.
pub fn land_use_distribution() -> Vec<LandUseShare> {
    let shares = [
        ("Industrial", 18),
        ("Commercial", 15),
        ("Residential", 42),
        ("Parks/Green", 12),
        ("Infrastructure", 8),
        ("Undeveloped", 5),
    ];
    shares
        .into_iter()
        .map(|(name, percent)| LandUseShare { name: name.to_string(), percent })
        .collect()
}

/// One DUHI severity bucket for the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatBucket {
    pub range: String,
    pub percentage: u32,
    /// CSS hex color used by the front-end bars.
    pub color: String,
}

/// DUHI severity distribution. Percentages sum to 100.
pub fn heat_distribution() -> Vec<HeatBucket> {
    let buckets = [
        ("Safe (0-2°C)", 28, "#10b981"),
        ("Moderate (2-4°C)", 30, "#f59e0b"),
        ("High (4-6°C)", 25, "#f97316"),
        ("Extreme (>6°C)", 17, "#ef4444"),
    ];
    buckets
        .into_iter()
        .map(|(range, percentage, color)| HeatBucket {
            range: range.to_string(),
            percentage,
            color: color.to_string(),
        })
        .collect()
}
