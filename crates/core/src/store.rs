//! The persistence boundary consumed by the scheduling services.
//!
//! Implementations must enforce that no two occupying reservations on the same
//! table overlap (for example with an exclusion constraint) and report a
//! violation as [`StoreError::Conflict`]. The services select tables from a
//! snapshot read and cannot serialize concurrent commits on their own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    reservation::{NewReservation, Occupancy, Reservation},
    restaurant::{BusinessHours, Restaurant, Table},
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("reservation conflicts with an existing booking on table {table_id}")]
    Conflict { table_id: Uuid },

    #[error(transparent)]
    Backend(#[from] eyre::Report),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Bounds on reservation start instants, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn ping(&self) -> StoreResult<()>;

    async fn get_restaurant(&self, id: Uuid) -> StoreResult<Option<Restaurant>>;

    async fn get_business_hours(
        &self,
        restaurant_id: Uuid,
        day_of_week: i16,
    ) -> StoreResult<Option<BusinessHours>>;

    /// Active tables seating at least `min_capacity`, ordered by ascending capacity.
    async fn list_eligible_tables(
        &self,
        restaurant_id: Uuid,
        min_capacity: i32,
    ) -> StoreResult<Vec<Table>>;

    /// Pending and confirmed reservations starting inside `window`, optionally
    /// restricted to `table_ids`.
    async fn list_occupying_reservations(
        &self,
        restaurant_id: Uuid,
        table_ids: Option<Vec<Uuid>>,
        window: StartWindow,
    ) -> StoreResult<Vec<Occupancy>>;

    async fn insert_reservation(&self, reservation: NewReservation) -> StoreResult<Reservation>;
}
