use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use eyre::{eyre, Report};
use lumen_core::models::{
    reservation::{Occupancy, Reservation, ReservationStatus},
    restaurant::{BusinessHours, Restaurant, Table},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRestaurant {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBusinessHours {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub day_of_week: i16,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub is_closed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTable {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub table_number: i32,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub client_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub party_size: i32,
    pub duration_minutes: i32,
    pub ends_at: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbOccupancy {
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub duration_minutes: i32,
}

impl TryFrom<DbRestaurant> for Restaurant {
    type Error = Report;

    fn try_from(row: DbRestaurant) -> Result<Self, Self::Error> {
        let timezone: Tz = row
            .timezone
            .parse()
            .map_err(|e| eyre!("Restaurant {} has invalid timezone {:?}: {}", row.id, row.timezone, e))?;

        Ok(Restaurant {
            id: row.id,
            name: row.name,
            is_active: row.is_active,
            timezone,
        })
    }
}

impl From<DbBusinessHours> for BusinessHours {
    fn from(row: DbBusinessHours) -> Self {
        BusinessHours {
            restaurant_id: row.restaurant_id,
            day_of_week: row.day_of_week,
            open_time: row.open_time,
            close_time: row.close_time,
            is_closed: row.is_closed,
        }
    }
}

impl From<DbTable> for Table {
    fn from(row: DbTable) -> Self {
        Table {
            id: row.id,
            restaurant_id: row.restaurant_id,
            table_number: row.table_number,
            capacity: row.capacity,
            is_active: row.is_active,
        }
    }
}

impl TryFrom<DbReservation> for Reservation {
    type Error = Report;

    fn try_from(row: DbReservation) -> Result<Self, Self::Error> {
        let status: ReservationStatus = row
            .status
            .parse()
            .map_err(|e| eyre!("Reservation {}: {}", row.id, e))?;

        Ok(Reservation {
            id: row.id,
            restaurant_id: row.restaurant_id,
            client_id: row.client_id,
            table_id: row.table_id,
            reservation_date: row.reservation_date,
            party_size: row.party_size,
            duration_minutes: row.duration_minutes,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl From<DbOccupancy> for Occupancy {
    fn from(row: DbOccupancy) -> Self {
        Occupancy {
            table_id: row.table_id,
            start: row.reservation_date,
            duration_minutes: row.duration_minutes,
        }
    }
}
