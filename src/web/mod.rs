//! Web API module for the mock market-data façade.
//!
//! One axum router serves the façade's own endpoints plus the
//! provider-shaped surfaces (CoinGecko, Binance, Trust Wallet,
//! CoinMarketCap), all answering from the single configured asset.

pub mod binance;
pub mod coingecko;
pub mod coinmarketcap;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod trustwallet;

use std::sync::Arc;

use axum::Json;
use serde_json::Value;
use tracing::warn;

use crate::config::Config;
use crate::warmer::CacheWarmer;

/// Shared application state for all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration, including the canonical asset
    pub config: Arc<Config>,
    /// Owner of the cache-warm status record
    pub warmer: Arc<CacheWarmer>,
}

impl AppState {
    pub fn new(config: Arc<Config>, warmer: Arc<CacheWarmer>) -> Self {
        Self { config, warmer }
    }
}

/// Always-answer policy: provider-shaped endpoints serve a safe placeholder
/// payload instead of surfacing an error to the client.
pub fn or_fallback(result: anyhow::Result<Value>, endpoint: &str, fallback: Value) -> Json<Value> {
    match result {
        Ok(value) => Json(value),
        Err(e) => {
            warn!("{} failed, serving fallback payload: {:#}", endpoint, e);
            Json(fallback)
        }
    }
}
