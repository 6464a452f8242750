//! # Error Handling Middleware
//!
//! Maps [`ReservationError`] kinds to HTTP status codes and a consistent JSON
//! body of the form `{"error": kind, "message": text, "details"?: ...}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lumen_core::errors::ReservationError;
use serde::Serialize;
use tracing::error;

const DATABASE_MESSAGE: &str = "Error al acceder a la base de datos";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Application error wrapper that provides HTTP status code mapping
///
/// Persistence failures are answered with a generic message; the underlying
/// report is only attached as `details` when `expose_details` is set, which
/// the handlers do outside production.
#[derive(Debug)]
pub struct AppError {
    pub error: ReservationError,
    pub expose_details: bool,
}

impl AppError {
    pub fn new(error: ReservationError, expose_details: bool) -> Self {
        Self {
            error,
            expose_details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            ReservationError::RestaurantNotFound { .. }
            | ReservationError::BusinessHoursNotFound { .. } => StatusCode::NOT_FOUND,
            ReservationError::InactiveRestaurant { .. } => StatusCode::FORBIDDEN,
            ReservationError::NoCapacity { .. } | ReservationError::NoAvailability { .. } => {
                StatusCode::CONFLICT
            }
            ReservationError::InvalidBusinessHours { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ReservationError::Validation(_) => StatusCode::BAD_REQUEST,
            ReservationError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ReservationError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (message, details) = match &self.error {
            ReservationError::Validation(message) | ReservationError::Authentication(message) => {
                (message.clone(), None)
            }
            ReservationError::Persistence(report) => (
                DATABASE_MESSAGE.to_string(),
                self.expose_details.then(|| format!("{:?}", report)),
            ),
            other => (other.to_string(), None),
        };

        ErrorBody {
            error: self.error.kind(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.error);
        }

        (status, Json(self.body())).into_response()
    }
}

/// Errors raised without access to the deployment environment never carry
/// details.
impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        AppError::new(err, false)
    }
}

/// Malformed bodies, bad UUIDs and timestamps surface as validation errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::from(ReservationError::Validation(rejection.body_text()))
    }
}
