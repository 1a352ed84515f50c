//! HTTP request handlers for the dashboard API.

pub mod landing;
pub mod metrics;
pub mod timeseries;
pub mod location;
pub mod layers;
pub mod hotspots;
pub mod tables;
pub mod insights;
pub mod status;
pub mod health;
pub mod common;
