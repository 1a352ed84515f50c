//! Dashboard API Service Library
//!
//! This crate provides the HTTP server implementation for the
//! Urban Heat & Greenness dashboard backend.

pub mod error;
pub mod handlers;
pub mod state;
pub mod static_data;
pub mod status_store;
