use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    /// Zone in which business hours and customer-facing times are expressed.
    pub timezone: Tz,
}

/// Opening hours for one weekday. `day_of_week` runs 0 (Sunday) to 6 (Saturday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub restaurant_id: Uuid,
    pub day_of_week: i16,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub is_closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub table_number: i32,
    pub capacity: i32,
    pub is_active: bool,
}

impl Table {
    pub fn seats(&self, party_size: i32) -> bool {
        self.is_active && self.capacity >= party_size
    }
}
