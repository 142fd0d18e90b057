//! SkillBoard API Server
//!
//! Run with: cargo run --bin skillboard-api
//!
//! # Configuration
//!
//! Read from the standard config locations (see `skillboard config`).
//! Environment variables:
//! - `SKILLBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SKILLBOARD_PORT` or `PORT`: Port to listen on (default: 5000)
//! - `SKILLBOARD_DEMO_MODE`: Serve the sample profile for every URL
//! - `RUST_LOG`: Log filter (default: skillboard=info)

use std::sync::Arc;

use skillboard::api::{serve, AppState};
use skillboard::config::Config;
use skillboard::logging::init_tracing;
use skillboard::scraper::{DemoProfileSource, HttpProfileScraper, ProfileSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let lookup = Config::load_default();
    let config = &lookup.config;
    init_tracing(&config.logging);
    lookup.report();

    tracing::info!("Starting SkillBoard API server v{}", env!("CARGO_PKG_VERSION"));

    let source: Arc<dyn ProfileSource> = if config.scraper.demo_mode {
        tracing::info!("Demo mode enabled, serving the sample profile");
        Arc::new(DemoProfileSource)
    } else {
        Arc::new(HttpProfileScraper::new(&config.scraper.scraper())?)
    };

    let api_config = config.api.server();
    let state = AppState::new(source, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("SkillBoard API server stopped");
    Ok(())
}
