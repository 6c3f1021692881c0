//! Request and Response DTOs for the Web API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Health & Status
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct WarmTriggerResponse {
    pub started: bool,
    pub message: String,
}

// ============================================================================
// QR
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QrQuery {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    pub url: String,
    /// `data:image/svg+xml;base64,...`
    pub qr_code: String,
}

// ============================================================================
// Exchange tickers (Binance-shaped)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TickerQuery {
    pub symbol: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PriceTickerResponse {
    pub symbol: String,
    pub price: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24hResponse {
    pub symbol: String,
    pub price_change: String,
    pub price_change_percent: String,
    pub weighted_avg_price: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub last_price: String,
    pub bid_price: String,
    pub ask_price: String,
    pub volume: String,
    pub quote_volume: String,
    pub open_time: i64,
    pub close_time: i64,
    pub count: u64,
}

// ============================================================================
// Trust-Wallet-shaped asset metadata
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AssetInfoResponse {
    pub asset: String,
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
}

#[derive(Debug, Serialize)]
pub struct TokenListResponse {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub version: TokenListVersion,
    pub tokens: Vec<TokenListEntry>,
}

#[derive(Debug, Serialize)]
pub struct TokenListVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListEntry {
    pub chain_id: u32,
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
}
