use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

// Only the error classes a client can actually see: everything else is
// absorbed by the fallback combinator in `web::or_fallback`.
#[derive(Debug, Error)]
pub enum FacadeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            FacadeError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            FacadeError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
