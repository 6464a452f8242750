use std::sync::Arc;

use axum::{extract::State, Json};
use lumen_core::models::time_slot::{CheckScheduleRequest, CheckScheduleResponse};
use tracing::debug;

use crate::{
    handlers::{ApiJson, ApiSuccess},
    middleware::error_handling::AppError,
    ApiState,
};

#[axum::debug_handler]
pub async fn check_schedule(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CheckScheduleRequest>,
) -> Result<Json<ApiSuccess<CheckScheduleResponse>>, AppError> {
    payload.validate()?;

    debug!(
        "Checking schedule for restaurant {} on {}",
        payload.restaurant_id, payload.date
    );

    let schedule = state
        .service
        .check_availability(payload.restaurant_id, payload.date)
        .await
        .map_err(|err| state.error(err))?;

    Ok(ApiSuccess::new(schedule))
}
