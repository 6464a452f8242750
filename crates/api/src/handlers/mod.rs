/// Reservation commits
pub mod reservation;
/// Availability queries
pub mod schedule;

use axum::{extract::FromRequest, Json};
use serde::Serialize;

use crate::middleware::error_handling::AppError;

/// Success envelope shared by the `/api` endpoints.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// `Json` whose rejections become [`AppError`] validation responses.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
