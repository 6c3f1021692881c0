//! CoinGecko-shaped endpoints.
//!
//! Response shapes follow the public CoinGecko v3 API closely enough that a
//! client library pointed at this sandbox parses them unchanged. The
//! configured asset is always a $1.00 stablecoin; anything else gets
//! placeholder values.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::{or_fallback, AppState};
use crate::error::FacadeError;
use crate::models::AssetDescriptor;
use crate::synth;

// ============================================================================
// Simple price
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SimplePriceQuery {
    pub ids: Option<String>,
    pub contract_addresses: Option<String>,
    pub vs_currencies: Option<String>,
    // Kept as strings so odd values never reject the request
    pub include_market_cap: Option<String>,
    pub include_24hr_vol: Option<String>,
    pub include_24hr_change: Option<String>,
    pub include_last_updated_at: Option<String>,
}

/// Lenient flag parsing: "true" and "1" enable, anything else is off.
fn flag(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("true") | Some("1"))
}

pub async fn simple_price(
    State(state): State<AppState>,
    Query(query): Query<SimplePriceQuery>,
) -> Json<Value> {
    let result = build_simple_price(&state.config.asset, &query);
    or_fallback(result, "simple/price", json!({}))
}

fn build_simple_price(asset: &AssetDescriptor, query: &SimplePriceQuery) -> anyhow::Result<Value> {
    let currencies: Vec<String> = query
        .vs_currencies
        .as_deref()
        .unwrap_or("usd")
        .split(',')
        .filter(|c| !c.is_empty())
        .map(|c| c.trim().to_lowercase())
        .collect();

    let mut out = Map::new();

    for id in split_list(query.ids.as_deref()) {
        let matched = asset.matches_id(&id);
        out.insert(id, price_entry(matched, &currencies, query));
    }
    for address in split_list(query.contract_addresses.as_deref()) {
        let matched = asset.matches_address(&address);
        out.insert(address.to_lowercase(), price_entry(matched, &currencies, query));
    }

    Ok(Value::Object(out))
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn price_entry(matched: bool, currencies: &[String], query: &SimplePriceQuery) -> Value {
    let mut entry = Map::new();
    for currency in currencies {
        let price = if matched { 1.0 } else { synth::random_price() };
        entry.insert(currency.clone(), json!(price));

        if flag(&query.include_market_cap) {
            let cap = if matched {
                json!(synth::STABLE_MARKET_CAP)
            } else {
                json!(synth::jitter(price * 1_000_000_000.0, 0.1))
            };
            entry.insert(format!("{}_market_cap", currency), cap);
        }
        if flag(&query.include_24hr_vol) {
            let vol = if matched {
                json!(synth::STABLE_VOLUME_24H)
            } else {
                json!(synth::jitter(price * 100_000_000.0, 0.1))
            };
            entry.insert(format!("{}_24h_vol", currency), vol);
        }
        if flag(&query.include_24hr_change) {
            let change = if matched {
                synth::small_change()
            } else {
                synth::small_change() * 100.0
            };
            entry.insert(format!("{}_24h_change", currency), json!(change));
        }
    }
    if flag(&query.include_last_updated_at) {
        entry.insert("last_updated_at".to_string(), json!(Utc::now().timestamp()));
    }
    Value::Object(entry)
}

// ============================================================================
// Contract metadata
// ============================================================================

pub async fn contract_info(
    State(state): State<AppState>,
    Path((chain, address)): Path<(String, String)>,
) -> Result<Json<Value>, FacadeError> {
    let asset = &state.config.asset;
    if !asset.matches_address(&address) {
        return Err(FacadeError::NotFound("coin not found".to_string()));
    }

    let contract = asset.contract_address.to_lowercase();
    let currencies = ["usd", "eur", "gbp", "jpy", "cny", "btc"];
    let current_price: Map<String, Value> = currencies
        .iter()
        .map(|c| (c.to_string(), json!(1.0)))
        .collect();

    let mut platforms = Map::new();
    platforms.insert(chain.clone(), json!(contract.clone()));
    let mut detail_platforms = Map::new();
    detail_platforms.insert(
        chain.clone(),
        json!({ "decimal_place": asset.decimals, "contract_address": contract.clone() }),
    );

    Ok(Json(json!({
        "id": asset.coingecko_id,
        "symbol": asset.display_symbol.to_lowercase(),
        "name": asset.display_name,
        "asset_platform_id": chain,
        "platforms": platforms,
        "detail_platforms": detail_platforms,
        "contract_address": contract,
        "image": {
            "thumb": asset.logo_url,
            "small": asset.logo_url,
            "large": asset.logo_url,
        },
        "market_cap_rank": synth::STABLE_MARKET_CAP_RANK,
        "market_data": {
            "current_price": current_price,
            "market_cap": { "usd": synth::STABLE_MARKET_CAP },
            "total_volume": { "usd": synth::STABLE_VOLUME_24H },
        },
        "last_updated": Utc::now().to_rfc3339(),
    })))
}

// ============================================================================
// Market listing
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MarketsQuery {
    pub ids: Option<String>,
}

pub async fn coins_markets(
    State(state): State<AppState>,
    Query(query): Query<MarketsQuery>,
) -> Json<Value> {
    let result = build_markets(&state.config.asset, &query);
    or_fallback(result, "coins/markets", json!([]))
}

fn build_markets(asset: &AssetDescriptor, query: &MarketsQuery) -> anyhow::Result<Value> {
    // An unfiltered listing includes our asset; a filtered one only when
    // some requested id denotes it.
    let listed = match query.ids.as_deref() {
        None => true,
        Some(ids) => split_list(Some(ids)).iter().any(|id| asset.matches_id(id)),
    };
    if !listed {
        return Ok(json!([]));
    }

    Ok(json!([{
        "id": asset.coingecko_id,
        "symbol": asset.display_symbol.to_lowercase(),
        "name": asset.display_name,
        "image": asset.logo_url,
        "current_price": 1.0,
        "market_cap": synth::STABLE_MARKET_CAP,
        "market_cap_rank": synth::STABLE_MARKET_CAP_RANK,
        "fully_diluted_valuation": synth::STABLE_MARKET_CAP,
        "total_volume": synth::STABLE_VOLUME_24H,
        "high_24h": 1.001,
        "low_24h": 0.999,
        "price_change_24h": synth::small_change() / 100.0,
        "price_change_percentage_24h": synth::small_change(),
        "circulating_supply": synth::STABLE_MARKET_CAP,
        "total_supply": synth::STABLE_MARKET_CAP,
        "last_updated": Utc::now().to_rfc3339(),
    }]))
}

// ============================================================================
// Historical chart
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MarketChartQuery {
    pub days: Option<String>,
}

pub async fn market_chart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<MarketChartQuery>,
) -> Json<Value> {
    let result = build_market_chart(&state.config.asset, &id, &query);
    or_fallback(
        result,
        "coins/market_chart",
        json!({ "prices": [], "market_caps": [], "total_volumes": [] }),
    )
}

fn build_market_chart(
    asset: &AssetDescriptor,
    id: &str,
    query: &MarketChartQuery,
) -> anyhow::Result<Value> {
    let days: u32 = query
        .days
        .as_deref()
        .unwrap_or("1")
        .parse()
        .unwrap_or(1)
        .clamp(1, 365);

    let matched = asset.matches_id(id);
    let price_base = if matched { 1.0 } else { synth::random_price() };
    let cap_base = if matched {
        synth::STABLE_MARKET_CAP as f64
    } else {
        price_base * 1_000_000_000.0
    };
    let volume_base = if matched {
        synth::STABLE_VOLUME_24H as f64
    } else {
        price_base * 100_000_000.0
    };

    let now_ms = Utc::now().timestamp_millis();
    let to_pairs = |series: Vec<(i64, f64)>| -> Vec<Value> {
        series.into_iter().map(|(ts, v)| json!([ts, v])).collect()
    };

    Ok(json!({
        "prices": to_pairs(synth::chart_series(now_ms, days, price_base, synth::PRICE_JITTER)),
        "market_caps": to_pairs(synth::chart_series(now_ms, days, cap_base, synth::MARKET_CAP_JITTER)),
        "total_volumes": to_pairs(synth::chart_series(now_ms, days, volume_base, synth::VOLUME_JITTER)),
    }))
}

// ============================================================================
// Asset platforms
// ============================================================================

pub async fn asset_platforms() -> Json<Value> {
    Json(json!([
        { "id": "ethereum", "chain_identifier": 1, "name": "Ethereum", "shortname": "eth" },
        { "id": "binance-smart-chain", "chain_identifier": 56, "name": "BNB Smart Chain", "shortname": "BSC" },
        { "id": "polygon-pos", "chain_identifier": 137, "name": "Polygon POS", "shortname": "MATIC" },
        { "id": "arbitrum-one", "chain_identifier": 42161, "name": "Arbitrum One", "shortname": "arbitrum" },
        { "id": "optimistic-ethereum", "chain_identifier": 10, "name": "Optimism", "shortname": "optimism" },
    ]))
}
