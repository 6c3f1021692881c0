//! Synthetic market-value generation.
//!
//! Everything here is placeholder data for sandbox clients: the configured
//! stablecoin gets fixed figures, every other asset gets lightly randomized
//! ones. Nothing is derived from real markets.

use rand::Rng;

/// Fixed figures reported for the configured stablecoin.
pub const STABLE_MARKET_CAP: u64 = 83_500_000_000;
pub const STABLE_VOLUME_24H: u64 = 45_750_000_000;
pub const STABLE_MARKET_CAP_RANK: u32 = 3;
pub const STABLE_PRICE_STR: &str = "1.00000000";

/// Per-series jitter bands for the historical chart.
pub const PRICE_JITTER: f64 = 0.0025;
pub const MARKET_CAP_JITTER: f64 = 0.0009;
pub const VOLUME_JITTER: f64 = 0.022;

pub const HOUR_MS: i64 = 3_600_000;

/// Price for any asset that is not the configured one.
pub fn random_price() -> f64 {
    rand::thread_rng().gen_range(0.1..100.0)
}

/// Uniform jitter of `base` by up to `pct` in either direction.
pub fn jitter(base: f64, pct: f64) -> f64 {
    base * (1.0 + rand::thread_rng().gen_range(-pct..pct))
}

/// Small drift figure for 24h-change placeholders.
pub fn small_change() -> f64 {
    rand::thread_rng().gen_range(-0.05..0.05)
}

/// Hourly `[timestamp_ms, value]` series: `days * 24 + 1` points, oldest
/// first, one-hour steps ending at `now_ms`.
pub fn chart_series(now_ms: i64, days: u32, base: f64, jitter_pct: f64) -> Vec<(i64, f64)> {
    let points = i64::from(days) * 24 + 1;
    let start = now_ms - (points - 1) * HOUR_MS;
    (0..points)
        .map(|i| (start + i * HOUR_MS, jitter(base, jitter_pct)))
        .collect()
}

/// A synthesized 24h ticker with internally consistent OHLC figures.
#[derive(Debug, Clone)]
pub struct Ticker24h {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub last: f64,
    pub bid: f64,
    pub ask: f64,
    pub volume: f64,
    pub quote_volume: f64,
}

impl Ticker24h {
    /// Invariants: low <= min(open, last) <= max(open, last) <= high, bid < ask.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let open: f64 = rng.gen_range(0.1..100.0);
        let last = open * rng.gen_range(0.9..1.1);
        let high = open.max(last) * rng.gen_range(1.0..1.05);
        let low = open.min(last) * rng.gen_range(0.95..1.0);
        let volume = rng.gen_range(10_000.0..5_000_000.0);
        Self {
            open,
            high,
            low,
            last,
            bid: last * 0.999,
            ask: last * 1.001,
            volume,
            quote_volume: volume * last,
        }
    }

    /// The stablecoin pair barely moves: pinned to 1.0 with a hair of spread.
    pub fn stable() -> Self {
        Self {
            open: 1.0001,
            high: 1.0004,
            low: 0.9996,
            last: 1.0,
            bid: 0.9999,
            ask: 1.0001,
            volume: STABLE_VOLUME_24H as f64,
            quote_volume: STABLE_VOLUME_24H as f64,
        }
    }

    pub fn price_change(&self) -> f64 {
        self.last - self.open
    }

    pub fn price_change_percent(&self) -> f64 {
        (self.last - self.open) / self.open * 100.0
    }
}

/// Exchange-style 8-decimal price string.
pub fn fmt8(value: f64) -> String {
    format!("{:.8}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_price_range() {
        for _ in 0..200 {
            let p = random_price();
            assert!((0.1..100.0).contains(&p));
        }
    }

    #[test]
    fn test_chart_series_point_count_and_ordering() {
        let now_ms = 1_700_000_000_000;
        for days in [1u32, 2, 7, 30] {
            let series = chart_series(now_ms, days, 1.0, PRICE_JITTER);
            assert_eq!(series.len(), days as usize * 24 + 1);
            assert_eq!(series.last().unwrap().0, now_ms);
            for pair in series.windows(2) {
                assert_eq!(pair[1].0 - pair[0].0, HOUR_MS);
            }
            for (_, value) in &series {
                assert!(value.is_finite());
                assert!((1.0 - value).abs() <= PRICE_JITTER + 1e-9);
            }
        }
    }

    #[test]
    fn test_random_ticker_is_internally_consistent() {
        for _ in 0..200 {
            let t = Ticker24h::random();
            assert!(t.low <= t.open.min(t.last));
            assert!(t.high >= t.open.max(t.last));
            assert!(t.bid < t.ask);
        }
    }

    #[test]
    fn test_stable_ticker_is_pinned() {
        let t = Ticker24h::stable();
        assert_eq!(fmt8(t.last), STABLE_PRICE_STR);
        assert!(t.price_change_percent().abs() < 0.05);
    }
}
