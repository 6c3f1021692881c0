//! Binance/Trust-Wallet-shaped exchange ticker endpoints.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;

use super::models::{PriceTickerResponse, Ticker24hResponse, TickerQuery};
use super::AppState;
use crate::synth::{self, fmt8, Ticker24h};

pub async fn ticker_price(
    State(state): State<AppState>,
    Query(query): Query<TickerQuery>,
) -> Json<PriceTickerResponse> {
    let asset = &state.config.asset;
    let symbol = query
        .symbol
        .unwrap_or_else(|| format!("{}USD", asset.display_symbol));

    let price = if asset.matches_pair(&symbol) {
        synth::STABLE_PRICE_STR.to_string()
    } else {
        fmt8(synth::random_price())
    };

    Json(PriceTickerResponse { symbol, price })
}

pub async fn ticker_24hr(
    State(state): State<AppState>,
    Query(query): Query<TickerQuery>,
) -> Json<Ticker24hResponse> {
    let asset = &state.config.asset;
    let symbol = query
        .symbol
        .unwrap_or_else(|| format!("{}USD", asset.display_symbol));

    let ticker = if asset.matches_pair(&symbol) {
        Ticker24h::stable()
    } else {
        Ticker24h::random()
    };

    let now_ms = Utc::now().timestamp_millis();
    Json(Ticker24hResponse {
        symbol,
        price_change: fmt8(ticker.price_change()),
        price_change_percent: format!("{:.3}", ticker.price_change_percent()),
        weighted_avg_price: fmt8((ticker.open + ticker.last) / 2.0),
        open_price: fmt8(ticker.open),
        high_price: fmt8(ticker.high),
        low_price: fmt8(ticker.low),
        last_price: fmt8(ticker.last),
        bid_price: fmt8(ticker.bid),
        ask_price: fmt8(ticker.ask),
        volume: format!("{:.2}", ticker.volume),
        quote_volume: format!("{:.2}", ticker.quote_volume),
        open_time: now_ms - 24 * synth::HOUR_MS,
        close_time: now_ms,
        count: 1_250_000,
    })
}
