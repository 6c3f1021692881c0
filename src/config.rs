use anyhow::Result;
use std::env;

use crate::models::asset::AssetDescriptor;

const DEFAULT_CONTRACT: &str = "0xdac17f958d2ee523a2206206994597c13d831ec7";
const DEFAULT_LOGO: &str =
    "https://assets.coingecko.com/coins/images/325/large/Tether.png";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub warm_interval_secs: u64,

    /// The canonical asset every provider-shaped endpoint reports on.
    pub asset: AssetDescriptor,
}

impl Config {
    pub fn load() -> Result<Self> {
        let asset = AssetDescriptor {
            contract_address: env::var("TOKEN_CONTRACT_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_CONTRACT.to_string()),
            display_symbol: env::var("TOKEN_SYMBOL").unwrap_or_else(|_| "USDT".to_string()),
            display_name: env::var("TOKEN_NAME").unwrap_or_else(|_| "Tether USD".to_string()),
            decimals: env::var("TOKEN_DECIMALS")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .unwrap_or(6),
            logo_url: env::var("TOKEN_LOGO_URL").unwrap_or_else(|_| DEFAULT_LOGO.to_string()),
            network_id: env::var("TOKEN_NETWORK").unwrap_or_else(|_| "ethereum".to_string()),
            coingecko_id: env::var("COINGECKO_ID").unwrap_or_else(|_| "tether".to_string()),
            coinmarketcap_id: env::var("COINMARKETCAP_ID")
                .unwrap_or_else(|_| "825".to_string())
                .parse()
                .unwrap_or(825),
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            warm_interval_secs: env::var("WARM_INTERVAL_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .unwrap_or(120),
            asset,
        })
    }
}
