//! Dashboard API Server
//!
//! Backend for the Urban Heat & Greenness dashboard.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use clap::Parser;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use dashboard_api::handlers;
use dashboard_api::state::AppState;

/// Dashboard API Server
#[derive(Parser, Debug)]
#[command(name = "dashboard-api")]
#[command(about = "Urban heat and greenness dashboard backend")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8084", env = "DASHBOARD_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "DASHBOARD_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting dashboard API server");

    // Initialize application state
    let state = match AppState::new().await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    // Build router
    let app = Router::new()
        // Landing page
        .route("/api", get(handlers::landing::landing_handler))
        .route("/api/", get(handlers::landing::landing_handler))
        // Aggregate metrics
        .route("/api/metrics", get(handlers::metrics::metrics_handler))
        // Trend timeseries
        .route(
            "/api/timeseries",
            get(handlers::timeseries::timeseries_handler),
        )
        // Point lookups
        .route(
            "/api/location-data",
            get(handlers::location::location_data_handler),
        )
        // Layer previews
        .route(
            "/api/layer-preview/:layer",
            get(handlers::layers::layer_preview_handler),
        )
        // Hotspot features
        .route(
            "/api/geojson/hotspots",
            get(handlers::hotspots::hotspots_handler),
        )
        // Chart tables
        .route(
            "/api/regional-breakdown",
            get(handlers::tables::regional_breakdown_handler),
        )
        .route("/api/land-use", get(handlers::tables::land_use_handler))
        .route(
            "/api/heat-distribution",
            get(handlers::tables::heat_distribution_handler),
        )
        // Insight cards
        .route("/api/insights", get(handlers::insights::insights_handler))
        // Status checks
        .route(
            "/api/status",
            post(handlers::status::create_status_handler)
                .get(handlers::status::list_status_handler),
        )
        // Health and readiness
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    // Parse listen address
    let addr: SocketAddr = args.listen.parse().expect("Invalid listen address");

    info!("Dashboard API listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server failed");
}
