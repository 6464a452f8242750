use crate::models::{DbOccupancy, DbReservation};
use chrono::{DateTime, Utc};
use eyre::Result;
use lumen_core::models::reservation::{NewReservation, ReservationStatus};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

fn occupying_statuses() -> Vec<String> {
    ReservationStatus::OCCUPYING
        .iter()
        .map(|status| status.as_str().to_string())
        .collect()
}

/// Pending and confirmed reservations whose start lies in `[from, to]`.
/// `table_ids = None` means every table of the restaurant.
pub async fn list_occupying_reservations(
    pool: &Pool<Postgres>,
    restaurant_id: Uuid,
    table_ids: Option<&[Uuid]>,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<DbOccupancy>> {
    let reservations = sqlx::query_as::<_, DbOccupancy>(
        r#"
        SELECT table_id, reservation_date, duration_minutes
        FROM reservations
        WHERE restaurant_id = $1
          AND ($2::uuid[] IS NULL OR table_id = ANY($2))
          AND status = ANY($3)
          AND reservation_date >= $4
          AND reservation_date <= $5
        ORDER BY reservation_date ASC
        "#,
    )
    .bind(restaurant_id)
    .bind(table_ids.map(<[Uuid]>::to_vec))
    .bind(occupying_statuses())
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(reservations)
}

pub async fn insert_reservation(
    pool: &Pool<Postgres>,
    reservation: &NewReservation,
) -> Result<DbReservation> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        INSERT INTO reservations (
            id, restaurant_id, client_id, table_id, reservation_date,
            party_size, duration_minutes, ends_at, status, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
        RETURNING id, restaurant_id, client_id, table_id, reservation_date,
                  party_size, duration_minutes, ends_at, status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(reservation.restaurant_id)
    .bind(reservation.client_id)
    .bind(reservation.table_id)
    .bind(reservation.reservation_date)
    .bind(reservation.party_size)
    .bind(reservation.duration_minutes)
    .bind(reservation.ends_at())
    .bind(reservation.status.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(reservation)
}

pub async fn get_reservation_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbReservation>> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, restaurant_id, client_id, table_id, reservation_date,
               party_size, duration_minutes, ends_at, status, created_at, updated_at
        FROM reservations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(reservation)
}
