use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use lumen_core::store::ReservationStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ServicesStatus {
    pub database: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub services: ServicesStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

/// Reports `degraded` with 503 when the store does not answer a ping.
async fn health_check(State(state): State<Arc<ApiState>>) -> (StatusCode, Json<HealthResponse>) {
    let healthy = match state.service.store().ping().await {
        Ok(()) => true,
        Err(err) => {
            warn!("Health check failed to reach the database: {}", err);
            false
        }
    };

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServicesStatus {
            database: if healthy { "connected" } else { "disconnected" }.to_string(),
        },
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
