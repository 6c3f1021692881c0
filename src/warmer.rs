//! Periodic cache-warm cycle.
//!
//! Re-issues GET requests against our own endpoints so that any cache sitting
//! in front of the façade (CDN, reverse proxy) stays populated. Failures are
//! recorded per endpoint and never abort the batch.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::config::Config;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmStatus {
    pub last_warm_time: Option<DateTime<Utc>>,
    pub is_warming: bool,
    pub warmed_endpoints: Vec<String>,
}

pub struct CacheWarmer {
    base_url: String,
    client: reqwest::Client,
    config: Arc<Config>,
    status: Mutex<WarmStatus>,
}

impl CacheWarmer {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            base_url: format!("http://127.0.0.1:{}", config.port),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            config,
            status: Mutex::new(WarmStatus::default()),
        }
    }

    /// Every GET endpoint the façade serves, with representative parameters.
    pub fn warm_paths(&self) -> Vec<String> {
        let asset = &self.config.asset;
        let address = asset.contract_address.to_lowercase();
        vec![
            "/health".to_string(),
            "/api/token-info".to_string(),
            "/api/cache-status".to_string(),
            format!("/api/token-balance/{}", address),
            format!(
                "/api/v3/simple/price?ids={}&vs_currencies=usd,eur&include_market_cap=true",
                asset.coingecko_id
            ),
            format!(
                "/api/v3/coins/{}/contract/{}",
                asset.network_id, address
            ),
            format!("/api/v3/coins/markets?ids={}", asset.coingecko_id),
            format!("/api/v3/coins/{}/market_chart?days=1", asset.coingecko_id),
            "/api/v3/asset_platforms".to_string(),
            format!("/api/v3/ticker/price?symbol={}USD", asset.display_symbol),
            format!("/api/v3/ticker/24hr?symbol={}USD", asset.display_symbol),
            format!("/api/v1/assets/{}", address),
            "/api/v1/tokenlist".to_string(),
            format!(
                "/api/cmc/v1/cryptocurrency/quotes/latest?symbol={}",
                asset.display_symbol
            ),
            "/api/generate-qr?url=https%3A%2F%2Fexample.com".to_string(),
        ]
    }

    pub async fn status(&self) -> WarmStatus {
        self.status.lock().await.clone()
    }

    /// Check-and-set the in-progress flag under a single lock acquisition.
    /// Returns false when a cycle is already running.
    pub(crate) async fn begin(&self) -> bool {
        let mut status = self.status.lock().await;
        if status.is_warming {
            return false;
        }
        status.is_warming = true;
        true
    }

    /// Fire all self-requests concurrently and record which succeeded.
    /// Assumes `begin()` already claimed the in-progress flag.
    pub(crate) async fn execute(&self) {
        let paths = self.warm_paths();
        let total = paths.len();

        let fetches = paths.into_iter().map(|path| {
            let url = format!("{}{}", self.base_url, path);
            let client = self.client.clone();
            async move {
                match client.get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => {
                        debug!("Warmed {}", path);
                        Some(path)
                    }
                    Ok(resp) => {
                        warn!("Warm request to {} returned {}", path, resp.status());
                        None
                    }
                    Err(e) => {
                        warn!("Warm request to {} failed: {}", path, e);
                        None
                    }
                }
            }
        });

        let warmed: Vec<String> = join_all(fetches).await.into_iter().flatten().collect();
        info!("Cache warm cycle complete: {}/{} endpoints", warmed.len(), total);

        let mut status = self.status.lock().await;
        status.last_warm_time = Some(Utc::now());
        status.warmed_endpoints = warmed;
        status.is_warming = false;
    }

    /// Run one full cycle, returning false if one was already in flight.
    pub async fn run_cycle(&self) -> bool {
        if !self.begin().await {
            debug!("Warm cycle already in progress, skipping");
            return false;
        }
        self.execute().await;
        true
    }

    /// On-demand trigger: claims the flag, then finishes in the background so
    /// the HTTP handler can answer immediately.
    pub async fn trigger(self: &Arc<Self>) -> bool {
        if !self.begin().await {
            return false;
        }
        let warmer = self.clone();
        tokio::spawn(async move {
            warmer.execute().await;
        });
        true
    }

    /// Fixed-interval warm loop. The first cycle runs one interval after
    /// startup, once the server is accepting connections.
    pub fn spawn_interval(self: Arc<Self>) {
        let period = Duration::from_secs(self.config.warm_interval_secs);
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.tick().await; // immediate first tick
            loop {
                ticker.tick().await;
                self.run_cycle().await;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warmer() -> Arc<CacheWarmer> {
        // Port nothing listens on, so every warm request fails fast.
        let mut config = Config::load().unwrap();
        config.port = 1;
        Arc::new(CacheWarmer::new(Arc::new(config)))
    }

    #[tokio::test]
    async fn test_begin_suppresses_concurrent_cycles() {
        let warmer = warmer();
        assert!(warmer.begin().await);
        assert!(!warmer.begin().await);
        assert!(warmer.status().await.is_warming);
    }

    #[tokio::test]
    async fn test_run_cycle_clears_flag_and_records_time() {
        let warmer = warmer();
        assert!(warmer.run_cycle().await);

        let status = warmer.status().await;
        assert!(!status.is_warming);
        assert!(status.last_warm_time.is_some());
        // Nothing listening: every endpoint failed, none recorded.
        assert!(status.warmed_endpoints.is_empty());
    }

    #[tokio::test]
    async fn test_warmed_endpoints_bounded_by_path_count() {
        let warmer = warmer();
        warmer.run_cycle().await;
        let status = warmer.status().await;
        assert!(status.warmed_endpoints.len() <= warmer.warm_paths().len());
    }
}
