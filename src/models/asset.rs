use serde::{Deserialize, Serialize};

/// Canonical identity of the asset this sandbox reports on. Loaded once at
/// startup from the environment and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    pub contract_address: String,
    pub display_symbol: String,
    pub display_name: String,
    pub decimals: u8,
    pub logo_url: String,
    pub network_id: String,
    pub coingecko_id: String,
    pub coinmarketcap_id: u32,
}

impl AssetDescriptor {
    /// CoinGecko-style id match: a requested id denotes this asset if it
    /// contains the configured coin id or ticker symbol (case-insensitive).
    pub fn matches_id(&self, id: &str) -> bool {
        let id = id.to_lowercase();
        id.contains(&self.coingecko_id.to_lowercase())
            || id.contains(&self.display_symbol.to_lowercase())
    }

    /// Case-insensitive contract address equality.
    pub fn matches_address(&self, address: &str) -> bool {
        address.eq_ignore_ascii_case(&self.contract_address)
    }

    /// Exchange-pair match: "USDTUSD", "USDTUSDT" or bare "USDT" all denote
    /// the stablecoin side of the pair.
    pub fn matches_pair(&self, symbol: &str) -> bool {
        symbol
            .to_uppercase()
            .starts_with(&self.display_symbol.to_uppercase())
    }

    /// Plain ticker equality, as CoinMarketCap keys quotes by symbol.
    pub fn matches_symbol(&self, symbol: &str) -> bool {
        symbol.eq_ignore_ascii_case(&self.display_symbol)
    }

    /// Trust-Wallet asset id, e.g. `c60_t0xdac1...` for an Ethereum ERC20.
    pub fn trustwallet_asset_id(&self) -> String {
        format!("c60_t{}", self.contract_address.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdt() -> AssetDescriptor {
        AssetDescriptor {
            contract_address: "0xdac17f958d2ee523a2206206994597c13d831ec7".to_string(),
            display_symbol: "USDT".to_string(),
            display_name: "Tether USD".to_string(),
            decimals: 6,
            logo_url: "https://example.com/usdt.png".to_string(),
            network_id: "ethereum".to_string(),
            coingecko_id: "tether".to_string(),
            coinmarketcap_id: 825,
        }
    }

    #[test]
    fn test_id_matching() {
        let asset = usdt();
        assert!(asset.matches_id("tether"));
        assert!(asset.matches_id("USDT"));
        assert!(asset.matches_id("tether-gold")); // substring semantics
        assert!(!asset.matches_id("bitcoin"));
    }

    #[test]
    fn test_address_matching_is_case_insensitive() {
        let asset = usdt();
        assert!(asset.matches_address("0xDAC17F958D2EE523A2206206994597C13D831EC7"));
        assert!(!asset.matches_address("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_pair_matching() {
        let asset = usdt();
        assert!(asset.matches_pair("USDTUSD"));
        assert!(asset.matches_pair("usdtusdt"));
        assert!(asset.matches_pair("USDT"));
        // USDT on the quote side is a different base asset
        assert!(!asset.matches_pair("BTCUSDT"));
    }
}
