//! Pre-exported dataset loading.
//!
//! The static-export tool writes each dashboard dataset to its own JSON
//! file. When `STATIC_DATA_DIR` points at such a directory, the files found
//! there are loaded once at startup and served verbatim for the matching
//! endpoints; datasets without a file fall through to live generation.

use anyhow::{Context, Result};
use std::path::Path;

/// Per-dataset static payloads, each present only when its file exists.
#[derive(Debug, Clone, Default)]
pub struct StaticData {
    pub metrics: Option<serde_json::Value>,
    pub timeseries: Option<serde_json::Value>,
    pub regional_breakdown: Option<serde_json::Value>,
    pub hotspots: Option<serde_json::Value>,
    pub land_use: Option<serde_json::Value>,
    pub heat_distribution: Option<serde_json::Value>,
}

impl StaticData {
    /// Load static datasets from a directory of JSON files.
    ///
    /// A missing directory yields the empty default (everything computed
    /// live); a file that exists but fails to parse is a startup error.
    pub fn load_from_dir(dir: &str) -> Result<Self> {
        let path = Path::new(dir);

        if !path.exists() {
            tracing::warn!("Static data directory {} does not exist, serving live data", dir);
            return Ok(Self::default());
        }

        let data = Self {
            metrics: load_optional(path, "metrics.json")?,
            timeseries: load_optional(path, "timeseries.json")?,
            regional_breakdown: load_optional(path, "regional_breakdown.json")?,
            hotspots: load_optional(path, "hotspots.geojson")?,
            land_use: load_optional(path, "land_use.json")?,
            heat_distribution: load_optional(path, "heat_distribution.json")?,
        };

        tracing::info!("Loaded {} static datasets from {}", data.loaded_count(), dir);

        Ok(data)
    }

    /// Number of datasets with a static payload.
    pub fn loaded_count(&self) -> usize {
        [
            self.metrics.is_some(),
            self.timeseries.is_some(),
            self.regional_breakdown.is_some(),
            self.hotspots.is_some(),
            self.land_use.is_some(),
            self.heat_distribution.is_some(),
        ]
        .iter()
        .filter(|&&loaded| loaded)
        .count()
    }
}

fn load_optional(dir: &Path, file_name: &str) -> Result<Option<serde_json::Value>> {
    let file_path = dir.join(file_name);
    if !file_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&file_path)
        .with_context(|| format!("Failed to read: {:?}", file_path))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse: {:?}", file_path))?;

    Ok(Some(value))
}
