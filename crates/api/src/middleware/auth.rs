//! # Authentication Module
//!
//! Every `/api` route requires the shared key configured as `API_KEY` in the
//! `X-API-Key` header.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use lumen_core::errors::ReservationError;
use tracing::warn;

use crate::{middleware::error_handling::AppError, ApiState};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Compares without short-circuiting on the first differing byte.
fn keys_match(provided: &[u8], expected: &[u8]) -> bool {
    provided.len() == expected.len()
        && provided
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

pub fn check_api_key(headers: &HeaderMap, expected: &str) -> Result<(), ReservationError> {
    let provided = headers
        .get(API_KEY_HEADER)
        .ok_or_else(|| ReservationError::Authentication("Header X-API-Key es requerido".to_string()))?;

    if !keys_match(provided.as_bytes(), expected.as_bytes()) {
        return Err(ReservationError::Authentication("X-API-Key inválido".to_string()));
    }

    Ok(())
}

pub async fn require_api_key(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Response {
    match check_api_key(request.headers(), &state.api_key) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            warn!(
                "Rejected request to {} {}: {}",
                request.method(),
                request.uri().path(),
                err
            );
            AppError::from(err).into_response()
        }
    }
}
