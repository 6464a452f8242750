use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ReservationResult;

use super::reservation::validate_date;

/// A candidate reservation start. Computed per query and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: DateTime<Utc>,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckScheduleRequest {
    pub restaurant_id: Uuid,
    pub date: DateTime<Utc>,
}

impl CheckScheduleRequest {
    pub fn validate(&self) -> ReservationResult<()> {
        validate_date("date", self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckScheduleResponse {
    pub available: bool,
    /// Set when business hours mark the day as closed.
    #[serde(default)]
    pub closed: bool,
    pub time_slots: Vec<TimeSlot>,
    pub message: String,
}
