use chrono::{DateTime, NaiveTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Restaurant not found: {restaurant_id}")]
    RestaurantNotFound { restaurant_id: Uuid },

    #[error("Business hours not configured for restaurant {restaurant_id} on day {day_of_week}")]
    BusinessHoursNotFound { restaurant_id: Uuid, day_of_week: i16 },

    #[error("Restaurant {name} ({restaurant_id}) is not active")]
    InactiveRestaurant { restaurant_id: Uuid, name: String },

    #[error("No table in restaurant {restaurant_id} seats a party of {party_size}")]
    NoCapacity { restaurant_id: Uuid, party_size: i32 },

    #[error("No table available in restaurant {restaurant_id} for {party_size} at {start}")]
    NoAvailability {
        restaurant_id: Uuid,
        party_size: i32,
        start: DateTime<Utc>,
    },

    #[error(
        "Invalid business hours for restaurant {restaurant_id} on day {day_of_week}: {open_time}-{close_time}"
    )]
    InvalidBusinessHours {
        restaurant_id: Uuid,
        day_of_week: i16,
        open_time: NaiveTime,
        close_time: NaiveTime,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Database error: {0}")]
    Persistence(#[from] eyre::Report),
}

impl ReservationError {
    /// Stable machine-readable tag for the error kind, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ReservationError::RestaurantNotFound { .. }
            | ReservationError::BusinessHoursNotFound { .. } => "NotFound",
            ReservationError::InactiveRestaurant { .. } => "InactiveEntity",
            ReservationError::NoCapacity { .. } => "NoCapacity",
            ReservationError::NoAvailability { .. } => "NoAvailability",
            ReservationError::InvalidBusinessHours { .. } => "InvalidBusinessHours",
            ReservationError::Validation(_) => "ValidationError",
            ReservationError::Authentication(_) => "Unauthorized",
            ReservationError::Persistence(_) => "DatabaseError",
        }
    }
}

/// Store failures that are not a booking conflict pass through as persistence
/// errors. Conflicts need request context and are mapped by the caller.
impl From<StoreError> for ReservationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { table_id } => ReservationError::Persistence(eyre::eyre!(
                "reservation conflicts with an existing booking on table {}",
                table_id
            )),
            StoreError::Backend(report) => ReservationError::Persistence(report),
        }
    }
}

pub type ReservationResult<T> = Result<T, ReservationError>;
