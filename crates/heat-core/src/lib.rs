//! Core data model for the Urban Heat & Greenness dashboard.
//!
//! There is no real raster pipeline behind this crate: layers are drawn from
//! fixed distributions, per-location values come from a nearest-reference-
//! point lookup, and the chart tables are curated constants. Every generator
//! takes the RNG as a parameter, so callers decide between fresh randomness
//! per request and a pinned seed for reproducible output.

pub mod classify;
pub mod error;
pub mod geojson;
pub mod insights;
pub mod metrics;
pub mod reference;
pub mod stats;
pub mod synth;
pub mod tables;
pub mod timeseries;

pub use classify::{classify, location_report, Classification, LocationReport, BASE_YEAR};
pub use error::{CoreError, CoreResult};
pub use geojson::{hotspots, Feature, FeatureCollection, HotspotProperties, PointGeometry, SpotKind};
pub use insights::{insights, Insight};
pub use metrics::{regional_metrics, RegionalMetrics, DUHI_TREND};
pub use reference::{LandCategory, ReferencePoint, REFERENCE_POINTS};
pub use synth::{generate_grid, LayerKind, SyntheticGrid, GRID_HEIGHT, GRID_WIDTH};
pub use tables::{
    heat_distribution, land_use_distribution, regional_breakdown, HeatBucket, LandUseShare,
    RegionSummary,
};
pub use timeseries::{generate_timeseries, TimeseriesData, END_YEAR, START_YEAR};
