//! Application state for the dashboard API.

use anyhow::Result;

use crate::static_data::StaticData;
use crate::status_store::StatusStore;

/// Shared application state.
pub struct AppState {
    /// Region name stamped into metrics payloads.
    pub region: String,

    /// Pre-exported datasets served verbatim when present.
    pub static_data: StaticData,

    /// Optional status-check store; absent when DATABASE_URL is unset.
    pub status_store: Option<StatusStore>,
}

impl AppState {
    /// Create a new AppState from environment configuration.
    pub async fn new() -> Result<Self> {
        let region = std::env::var("REGION_NAME").unwrap_or_else(|_| "Peel".to_string());

        let static_data = match std::env::var("STATIC_DATA_DIR") {
            Ok(dir) => StaticData::load_from_dir(&dir)?,
            Err(_) => StaticData::default(),
        };

        let status_store = match std::env::var("DATABASE_URL") {
            Ok(url) => {
                let store = StatusStore::connect(&url).await?;
                store.migrate().await?;
                tracing::info!("Status store connected");
                Some(store)
            }
            Err(_) => {
                tracing::info!("DATABASE_URL not set, status routes disabled");
                None
            }
        };

        Ok(Self { region, static_data, status_store })
    }
}
