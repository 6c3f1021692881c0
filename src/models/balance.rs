use serde::Serialize;

/// Pinned balance range for valid addresses.
pub const BALANCE_MIN: f64 = 1.0;
pub const BALANCE_MAX: f64 = 100.0;

/// Served for malformed addresses instead of an error (graceful degradation).
pub const FALLBACK_BALANCE: f64 = 10.0;

/// A deterministic, ledger-free balance. The same address always maps to the
/// same figure within a process; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticBalance {
    pub address: String,
    /// Integer string in smallest units (`formatted * 10^decimals`).
    pub raw_balance: String,
    /// Decimal string with exactly 2 places.
    pub formatted_balance: String,
    pub decimals: u8,
}

/// Shape check: `0x` prefix, 42 chars total, hex body.
pub fn is_valid_address(address: &str) -> bool {
    address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Rolling 32-bit signed hash of the address characters, normalized to [0, 1].
pub fn address_hash(address: &str) -> f64 {
    let mut hash: i32 = 0;
    for c in address.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }
    hash.unsigned_abs() as f64 / 2_147_483_648.0
}

impl SyntheticBalance {
    pub fn derive(address: &str, decimals: u8) -> Self {
        let value = if is_valid_address(address) {
            BALANCE_MIN + address_hash(address) * (BALANCE_MAX - BALANCE_MIN)
        } else {
            FALLBACK_BALANCE
        };
        Self::from_value(address, value, decimals)
    }

    fn from_value(address: &str, value: f64, decimals: u8) -> Self {
        let formatted = (value * 100.0).round() / 100.0;
        let raw = (formatted * 10f64.powi(decimals as i32)).round() as u128;
        Self {
            address: address.to_string(),
            raw_balance: raw.to_string(),
            formatted_balance: format!("{:.2}", formatted),
            decimals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ADDR: &str = "0x0000000000000000000000000000000000000000";

    #[test]
    fn test_address_shape_check() {
        assert!(is_valid_address(ZERO_ADDR));
        assert!(is_valid_address("0xdAC17F958D2ee523a2206206994597C13D831ec7"));
        assert!(!is_valid_address("0x1234")); // too short
        assert!(!is_valid_address("dac17f958d2ee523a2206206994597c13d831ec700")); // no prefix
        assert!(!is_valid_address("0xzz0000000000000000000000000000000000zzzz")); // not hex
    }

    #[test]
    fn test_balance_is_deterministic() {
        let a = SyntheticBalance::derive(ZERO_ADDR, 6);
        let b = SyntheticBalance::derive(ZERO_ADDR, 6);
        assert_eq!(a.formatted_balance, b.formatted_balance);
        assert_eq!(a.raw_balance, b.raw_balance);
    }

    #[test]
    fn test_balance_within_pinned_range() {
        for addr in [
            ZERO_ADDR,
            "0xdac17f958d2ee523a2206206994597c13d831ec7",
            "0xffffffffffffffffffffffffffffffffffffffff",
            "0x1234567890abcdef1234567890abcdef12345678",
        ] {
            let balance = SyntheticBalance::derive(addr, 6);
            let value: f64 = balance.formatted_balance.parse().unwrap();
            assert!(
                (BALANCE_MIN..=BALANCE_MAX).contains(&value),
                "{} out of range for {}",
                value,
                addr
            );
        }
    }

    #[test]
    fn test_raw_balance_matches_formatted() {
        let balance = SyntheticBalance::derive(ZERO_ADDR, 6);
        let formatted: f64 = balance.formatted_balance.parse().unwrap();
        let raw: u128 = balance.raw_balance.parse().unwrap();
        assert_eq!(raw, (formatted * 1_000_000.0).round() as u128);
    }

    #[test]
    fn test_malformed_address_gets_fallback() {
        let balance = SyntheticBalance::derive("not-an-address", 6);
        assert_eq!(balance.formatted_balance, "10.00");
        assert_eq!(balance.raw_balance, "10000000");
    }

    #[test]
    fn test_hash_is_normalized() {
        for addr in [ZERO_ADDR, "0xffffffffffffffffffffffffffffffffffffffff"] {
            let unit = address_hash(addr);
            assert!((0.0..=1.0).contains(&unit));
        }
    }
}
