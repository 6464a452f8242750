//! HTTP client for the Lumen API.

use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};
use lumen_core::models::{
    reservation::{CreateReservationRequest, CreateReservationResponse},
    time_slot::{CheckScheduleRequest, CheckScheduleResponse},
};
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::config::ToolsConfig;

/// The `{success, data}` envelope the API wraps results in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[automock]
#[async_trait]
pub trait ReservationApi: Send + Sync {
    async fn check_schedule(
        &self,
        request: CheckScheduleRequest,
    ) -> Result<ApiEnvelope<CheckScheduleResponse>>;

    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ApiEnvelope<CreateReservationResponse>>;
}

pub struct HttpApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &ToolsConfig) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("X-API-Key", &self.api_key)
            .json(body)
            .send()
            .await
            .wrap_err_with(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(eyre!(error_message(status, &text)));
        }

        response
            .json::<T>()
            .await
            .wrap_err_with(|| format!("Unexpected response body from {}", url))
    }
}

/// The API's `message` field when the body carries one, else the status line.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        })
}

#[async_trait]
impl ReservationApi for HttpApiClient {
    async fn check_schedule(
        &self,
        request: CheckScheduleRequest,
    ) -> Result<ApiEnvelope<CheckScheduleResponse>> {
        self.post("/api/check-schedule", &request).await
    }

    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ApiEnvelope<CreateReservationResponse>> {
        self.post("/api/create-reservation", &request).await
    }
}
