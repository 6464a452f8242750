use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use lumen_core::models::reservation::{CreateReservationRequest, CreateReservationResponse};

use crate::{
    handlers::{ApiJson, ApiSuccess},
    middleware::error_handling::AppError,
    ApiState,
};

#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiSuccess<CreateReservationResponse>>), AppError> {
    payload.validate()?;

    let reservation = state
        .service
        .create_reservation(&payload)
        .await
        .map_err(|err| state.error(err))?;

    Ok((StatusCode::CREATED, ApiSuccess::new(reservation)))
}
