//! Trust-Wallet-shaped asset metadata endpoints.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use super::models::{AssetInfoResponse, TokenListEntry, TokenListResponse, TokenListVersion};
use super::AppState;
use crate::error::FacadeError;

pub async fn asset_info(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<AssetInfoResponse>, FacadeError> {
    let asset = &state.config.asset;
    if !asset.matches_address(&address) {
        return Err(FacadeError::NotFound("asset not found".to_string()));
    }

    Ok(Json(AssetInfoResponse {
        asset: asset.trustwallet_asset_id(),
        address: asset.contract_address.to_lowercase(),
        name: asset.display_name.clone(),
        symbol: asset.display_symbol.clone(),
        decimals: asset.decimals,
        asset_type: "ERC20".to_string(),
        logo_uri: asset.logo_url.clone(),
    }))
}

pub async fn tokenlist(State(state): State<AppState>) -> Json<TokenListResponse> {
    let asset = &state.config.asset;
    Json(TokenListResponse {
        name: "Mockfeed Token List".to_string(),
        timestamp: Utc::now(),
        version: TokenListVersion {
            major: 1,
            minor: 0,
            patch: 0,
        },
        tokens: vec![TokenListEntry {
            chain_id: 1,
            address: asset.contract_address.to_lowercase(),
            name: asset.display_name.clone(),
            symbol: asset.display_symbol.clone(),
            decimals: asset.decimals,
            logo_uri: asset.logo_url.clone(),
        }],
    })
}
