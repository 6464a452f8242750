use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{ReservationError, ReservationResult},
    scheduling::interval::Interval,
};

pub const MIN_PARTY_SIZE: i32 = 1;
pub const MAX_PARTY_SIZE: i32 = 50;
pub const MIN_DURATION_MINUTES: i32 = 30;
pub const MAX_DURATION_MINUTES: i32 = 480;
pub const DEFAULT_DURATION_MINUTES: i32 = 120;
pub const MIN_DATE_YEAR: i32 = 1;
pub const MAX_DATE_YEAR: i32 = 9999;

/// Rejects instants outside the years `MIN_DATE_YEAR..=MAX_DATE_YEAR`.
pub fn validate_date(field: &str, instant: DateTime<Utc>) -> ReservationResult<()> {
    if !(MIN_DATE_YEAR..=MAX_DATE_YEAR).contains(&instant.year()) {
        return Err(ReservationError::Validation(format!(
            "{} must fall between the years {} and {}, got {}",
            field, MIN_DATE_YEAR, MAX_DATE_YEAR, instant
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub const OCCUPYING: [ReservationStatus; 2] =
        [ReservationStatus::Pending, ReservationStatus::Confirmed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "completed" => Ok(ReservationStatus::Completed),
            other => Err(ReservationError::Validation(format!(
                "unknown reservation status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub client_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub duration_minutes: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub restaurant_id: Uuid,
    pub client_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub duration_minutes: i32,
    pub status: ReservationStatus,
}

impl NewReservation {
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.reservation_date + Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// The part of a reservation that matters for conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub table_id: Uuid,
    pub start: DateTime<Utc>,
    pub duration_minutes: i32,
}

impl Occupancy {
    pub fn interval(&self) -> Interval {
        Interval::starting_at(self.start, self.duration_minutes)
    }
}

fn default_duration_minutes() -> i32 {
    DEFAULT_DURATION_MINUTES
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub restaurant_id: Uuid,
    pub client_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: i32,
}

impl CreateReservationRequest {
    pub fn validate(&self) -> ReservationResult<()> {
        if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&self.party_size) {
            return Err(ReservationError::Validation(format!(
                "party_size must be between {} and {}, got {}",
                MIN_PARTY_SIZE, MAX_PARTY_SIZE, self.party_size
            )));
        }
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&self.duration_minutes) {
            return Err(ReservationError::Validation(format!(
                "duration_minutes must be between {} and {}, got {}",
                MIN_DURATION_MINUTES, MAX_DURATION_MINUTES, self.duration_minutes
            )));
        }
        validate_date("reservation_date", self.reservation_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservationResponse {
    pub reservation_id: Uuid,
    pub table_number: i32,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub message: String,
}
