//! Outbreak API Server
//!
//! Run with: cargo run --bin outbreak
//!
//! # Configuration
//!
//! Read from the first of `~/.config/outbreak/config.toml`,
//! `/etc/outbreak/config.toml` and `./config.toml` that exists, then
//! overridden by environment variables:
//! - `OUTBREAK_SOURCE_URL`: Statistics API base URL
//! - `OUTBREAK_LOOKBACK_DAYS`: Days of history per chart (default: 60)
//! - `OUTBREAK_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `OUTBREAK_API_PORT`: Port to listen on (default: 8083)
//! - `OUTBREAK_LOG_LEVEL` / `OUTBREAK_LOG_FORMAT`: Logging (`RUST_LOG` wins)

use outbreak::api::{serve, AppState};
use outbreak::config::Config;
use outbreak::dashboard::Dashboard;
use outbreak::logging;
use outbreak::source::DiseaseShClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    logging::init(&config.logging);

    tracing::info!("Starting Outbreak API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        source = %config.source.base_url,
        lookback_days = config.source.lookback_days,
        "Statistics source configured"
    );

    let source = Arc::new(DiseaseShClient::new(config.source.clone())?);
    let dashboard = Arc::new(Dashboard::new(
        source,
        config.dashboard.clone(),
        config.source.lookback_days,
    ));

    let state = AppState::new(dashboard, config.api.clone());

    serve(state, &config.api).await?;

    tracing::info!("Outbreak API server stopped");
    Ok(())
}
