//! PostgreSQL implementation of the scheduling store.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use eyre::{eyre, Report};
use lumen_core::{
    models::{
        reservation::{NewReservation, Occupancy, Reservation},
        restaurant::{BusinessHours, Restaurant, Table},
    },
    store::{ReservationStore, StartWindow, StoreError, StoreResult},
};
use tracing::debug;
use uuid::Uuid;

use crate::{repositories, schema::EXCLUSION_VIOLATION, DbPool};

/// Store backed by the repositories in this crate.
///
/// Double booking is prevented by the `reservations_no_overlap` exclusion
/// constraint; a violating insert comes back as [`StoreError::Conflict`].
/// Every call is bounded by `query_timeout`.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    query_timeout: Duration,
}

impl PgStore {
    pub fn new(pool: DbPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn timed<T, F>(&self, operation: &'static str, call: F) -> StoreResult<T>
    where
        F: Future<Output = eyre::Result<T>>,
    {
        match tokio::time::timeout(self.query_timeout, call).await {
            Ok(result) => result.map_err(StoreError::Backend),
            Err(_) => Err(StoreError::Backend(eyre!(
                "{} timed out after {:?}",
                operation,
                self.query_timeout
            ))),
        }
    }
}

/// Whether `report` wraps a PostgreSQL exclusion constraint violation.
pub fn is_exclusion_violation(report: &Report) -> bool {
    report
        .downcast_ref::<sqlx::Error>()
        .and_then(|err| err.as_database_error())
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == EXCLUSION_VIOLATION)
}

#[async_trait]
impl ReservationStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        self.timed("ping", async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok::<(), Report>(())
        })
        .await
    }

    async fn get_restaurant(&self, id: Uuid) -> StoreResult<Option<Restaurant>> {
        let row = self
            .timed(
                "get_restaurant",
                repositories::restaurant::get_restaurant_by_id(&self.pool, id),
            )
            .await?;

        row.map(Restaurant::try_from)
            .transpose()
            .map_err(StoreError::Backend)
    }

    async fn get_business_hours(
        &self,
        restaurant_id: Uuid,
        day_of_week: i16,
    ) -> StoreResult<Option<BusinessHours>> {
        let row = self
            .timed(
                "get_business_hours",
                repositories::business_hours::get_business_hours(&self.pool, restaurant_id, day_of_week),
            )
            .await?;

        Ok(row.map(BusinessHours::from))
    }

    async fn list_eligible_tables(
        &self,
        restaurant_id: Uuid,
        min_capacity: i32,
    ) -> StoreResult<Vec<Table>> {
        let rows = self
            .timed(
                "list_eligible_tables",
                repositories::table::list_eligible_tables(&self.pool, restaurant_id, min_capacity),
            )
            .await?;

        debug!(
            "Found {} eligible tables for restaurant {} (capacity >= {})",
            rows.len(),
            restaurant_id,
            min_capacity
        );
        Ok(rows.into_iter().map(Table::from).collect())
    }

    async fn list_occupying_reservations(
        &self,
        restaurant_id: Uuid,
        table_ids: Option<Vec<Uuid>>,
        window: StartWindow,
    ) -> StoreResult<Vec<Occupancy>> {
        let rows = self
            .timed(
                "list_occupying_reservations",
                repositories::reservation::list_occupying_reservations(
                    &self.pool,
                    restaurant_id,
                    table_ids.as_deref(),
                    window.from,
                    window.to,
                ),
            )
            .await?;

        Ok(rows.into_iter().map(Occupancy::from).collect())
    }

    async fn insert_reservation(&self, reservation: NewReservation) -> StoreResult<Reservation> {
        let table_id = reservation.table_id;
        let row = self
            .timed(
                "insert_reservation",
                repositories::reservation::insert_reservation(&self.pool, &reservation),
            )
            .await
            .map_err(|err| match err {
                StoreError::Backend(report) if is_exclusion_violation(&report) => {
                    StoreError::Conflict { table_id }
                }
                other => other,
            })?;

        Reservation::try_from(row).map_err(StoreError::Backend)
    }
}
