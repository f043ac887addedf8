mod config;
mod errors;
mod extraction;
mod matching;
mod routes;
mod similarity;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::pdf::PdfExtractor;
use crate::routes::build_router;
use crate::similarity::strategy::StrategyRegistry;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS Match API v{}", env!("CARGO_PKG_VERSION"));

    // No fallback: an unavailable default strategy stops startup
    let strategies = StrategyRegistry::new(config.strategy)
        .context("Configured SIMILARITY_STRATEGY cannot be used")?;
    info!(
        "Similarity strategy: {} (tiers: high > {}, moderate > {})",
        strategies.default_kind(),
        config.tier_thresholds.high,
        config.tier_thresholds.moderate
    );

    let state = AppState {
        config: config.clone(),
        strategies,
        extractor: Arc::new(PdfExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
