//! CoinMarketCap-shaped quote endpoint.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::{or_fallback, AppState};
use crate::models::AssetDescriptor;
use crate::synth;

#[derive(Debug, Deserialize)]
pub struct QuotesQuery {
    pub symbol: Option<String>,
    pub id: Option<String>,
    pub convert: Option<String>,
}

pub async fn quotes_latest(
    State(state): State<AppState>,
    Query(query): Query<QuotesQuery>,
) -> Json<Value> {
    let result = build_quotes(&state.config.asset, &query);
    or_fallback(result, "cmc/quotes/latest", envelope(Map::new()))
}

fn build_quotes(asset: &AssetDescriptor, query: &QuotesQuery) -> anyhow::Result<Value> {
    let convert = query
        .convert
        .as_deref()
        .unwrap_or("USD")
        .to_uppercase();

    // Symbols come from ?symbol=; a numeric ?id= matching the configured
    // CMC id denotes the asset too. Default to the configured symbol.
    let symbols: Vec<String> = match (&query.symbol, &query.id) {
        (Some(raw), _) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
            .collect(),
        (None, Some(id)) if id.trim() == asset.coinmarketcap_id.to_string() => {
            vec![asset.display_symbol.to_uppercase()]
        }
        _ => vec![asset.display_symbol.to_uppercase()],
    };

    let now = Utc::now().to_rfc3339();
    let mut data = Map::new();
    for symbol in symbols {
        let entry = if asset.matches_symbol(&symbol) {
            quote_entry(
                asset.coinmarketcap_id,
                &asset.display_name,
                &symbol,
                &asset.coingecko_id,
                &convert,
                1.0,
                synth::STABLE_MARKET_CAP as f64,
                synth::STABLE_VOLUME_24H as f64,
                synth::STABLE_MARKET_CAP_RANK,
                &now,
            )
        } else {
            let price = synth::random_price();
            let mut rng = rand::thread_rng();
            quote_entry(
                rng.gen_range(1000..10000),
                &symbol,
                &symbol,
                &symbol.to_lowercase(),
                &convert,
                price,
                synth::jitter(price * 1_000_000_000.0, 0.1),
                synth::jitter(price * 100_000_000.0, 0.1),
                rng.gen_range(50..2000),
                &now,
            )
        };
        data.insert(symbol, entry);
    }

    Ok(envelope(data))
}

#[allow(clippy::too_many_arguments)]
fn quote_entry(
    id: u32,
    name: &str,
    symbol: &str,
    slug: &str,
    convert: &str,
    price: f64,
    market_cap: f64,
    volume: f64,
    rank: u32,
    now: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "symbol": symbol,
        "slug": slug,
        "cmc_rank": rank,
        "last_updated": now,
        "quote": {
            convert: {
                "price": price,
                "volume_24h": volume,
                "percent_change_1h": synth::small_change(),
                "percent_change_24h": synth::small_change(),
                "percent_change_7d": synth::small_change(),
                "market_cap": market_cap,
                "last_updated": now,
            }
        }
    })
}

fn envelope(data: Map<String, Value>) -> Value {
    json!({
        "status": {
            "timestamp": Utc::now().to_rfc3339(),
            "error_code": 0,
            "error_message": null,
            "elapsed": 10,
            "credit_count": 1,
        },
        "data": data,
    })
}
