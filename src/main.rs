use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod error;
mod models;
mod synth;
mod warmer;
mod web;

use crate::config::Config;
use crate::warmer::CacheWarmer;
use crate::web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mockfeed=info,tower_http=warn")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    // Load configuration and wrap in Arc
    let config = Arc::new(Config::load()?);
    info!(
        "Serving {} ({}) at {} on {}",
        config.asset.display_name,
        config.asset.display_symbol,
        config.asset.contract_address,
        config.asset.network_id
    );

    // Cache warmer owns the warm-status record
    let warmer = Arc::new(CacheWarmer::new(config.clone()));
    warmer.clone().spawn_interval();
    info!(
        "Cache warm cycle scheduled every {} seconds",
        config.warm_interval_secs
    );

    // Shared state for all handlers
    let state = AppState::new(config.clone(), warmer);

    // Start the API server (runs until the process is stopped)
    web::server::start_server(state, config).await
}
