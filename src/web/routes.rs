//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};

use super::{binance, coingecko, coinmarketcap, handlers, trustwallet};
use super::AppState;

/// Create all API routes
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Façade's own surface
        .route("/health", get(handlers::health_check))
        .route("/api/token-info", get(handlers::token_info))
        .route("/api/cache-status", get(handlers::cache_status))
        .route("/api/warm-cache", post(handlers::warm_cache))
        .route("/api/token-balance/:address", get(handlers::token_balance))
        .route("/api/generate-qr", get(handlers::generate_qr))

        // CoinGecko-shaped (current + legacy paths without /v3)
        .route("/api/v3/simple/price", get(coingecko::simple_price))
        .route("/api/simple/price", get(coingecko::simple_price))
        .route("/api/v3/coins/markets", get(coingecko::coins_markets))
        .route("/api/coins/markets", get(coingecko::coins_markets))
        .route("/api/v3/coins/:id/contract/:address", get(coingecko::contract_info))
        .route("/api/coins/:id/contract/:address", get(coingecko::contract_info))
        .route("/api/v3/coins/:id/market_chart", get(coingecko::market_chart))
        .route("/api/coins/:id/market_chart", get(coingecko::market_chart))
        .route("/api/v3/asset_platforms", get(coingecko::asset_platforms))
        .route("/api/asset_platforms", get(coingecko::asset_platforms))

        // Exchange-ticker-shaped
        .route("/api/v3/ticker/price", get(binance::ticker_price))
        .route("/api/v3/ticker/24hr", get(binance::ticker_24hr))

        // Trust-Wallet-shaped
        .route("/api/v1/assets/:address", get(trustwallet::asset_info))
        .route("/api/v1/tokenlist", get(trustwallet::tokenlist))

        // CoinMarketCap-shaped
        .route(
            "/api/cmc/v1/cryptocurrency/quotes/latest",
            get(coinmarketcap::quotes_latest),
        )

        // Add state to all routes
        .with_state(state)
}
