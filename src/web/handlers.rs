//! Handlers for the façade's own endpoints (everything not shaped like a
//! third-party provider).

use axum::extract::{Path, Query, State};
use axum::Json;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use qrcode::render::svg;
use qrcode::QrCode;
use tracing::{info, warn};

use super::models::*;
use super::AppState;
use crate::error::FacadeError;
use crate::models::balance::{is_valid_address, SyntheticBalance};
use crate::models::AssetDescriptor;

// ============================================================================
// Health Check
// ============================================================================

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Token info
// ============================================================================

pub async fn token_info(State(state): State<AppState>) -> Json<AssetDescriptor> {
    Json(state.config.asset.clone())
}

// ============================================================================
// Cache warming
// ============================================================================

pub async fn cache_status(State(state): State<AppState>) -> Json<crate::warmer::WarmStatus> {
    Json(state.warmer.status().await)
}

pub async fn warm_cache(State(state): State<AppState>) -> Json<WarmTriggerResponse> {
    let started = state.warmer.trigger().await;
    if started {
        info!("Cache warm cycle triggered via API");
    }
    Json(WarmTriggerResponse {
        started,
        message: if started {
            "Warm cycle started".to_string()
        } else {
            "Warm cycle already in progress".to_string()
        },
    })
}

// ============================================================================
// Synthetic balance
// ============================================================================

pub async fn token_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Json<SyntheticBalance> {
    if !is_valid_address(&address) {
        // Graceful degradation: malformed addresses get the fallback figure.
        warn!("Malformed address '{}', serving fallback balance", address);
    }
    Json(SyntheticBalance::derive(&address, state.config.asset.decimals))
}

// ============================================================================
// QR generation
// ============================================================================

pub async fn generate_qr(Query(query): Query<QrQuery>) -> Result<Json<QrResponse>, FacadeError> {
    let url = match query.url {
        Some(url) if !url.trim().is_empty() => url,
        _ => {
            return Err(FacadeError::Validation(
                "url query parameter is required".to_string(),
            ))
        }
    };

    let code = QrCode::new(url.as_bytes())
        .map_err(|e| FacadeError::Validation(format!("url not encodable as QR: {}", e)))?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(256, 256)
        .build();

    Ok(Json(QrResponse {
        qr_code: format!("data:image/svg+xml;base64,{}", STANDARD.encode(image)),
        url,
    }))
}
