use crate::models::DbBusinessHours;
use chrono::NaiveTime;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_business_hours(
    pool: &Pool<Postgres>,
    restaurant_id: Uuid,
    day_of_week: i16,
) -> Result<Option<DbBusinessHours>> {
    let hours = sqlx::query_as::<_, DbBusinessHours>(
        r#"
        SELECT id, restaurant_id, day_of_week, open_time, close_time, is_closed
        FROM business_hours
        WHERE restaurant_id = $1 AND day_of_week = $2
        "#,
    )
    .bind(restaurant_id)
    .bind(day_of_week)
    .fetch_optional(pool)
    .await?;

    Ok(hours)
}

pub async fn upsert_business_hours(
    pool: &Pool<Postgres>,
    restaurant_id: Uuid,
    day_of_week: i16,
    open_time: NaiveTime,
    close_time: NaiveTime,
    is_closed: bool,
) -> Result<DbBusinessHours> {
    let hours = sqlx::query_as::<_, DbBusinessHours>(
        r#"
        INSERT INTO business_hours (id, restaurant_id, day_of_week, open_time, close_time, is_closed)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (restaurant_id, day_of_week)
        DO UPDATE SET open_time = $4, close_time = $5, is_closed = $6
        RETURNING id, restaurant_id, day_of_week, open_time, close_time, is_closed
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(restaurant_id)
    .bind(day_of_week)
    .bind(open_time)
    .bind(close_time)
    .bind(is_closed)
    .fetch_one(pool)
    .await?;

    Ok(hours)
}
