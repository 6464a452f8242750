use crate::models::DbRestaurant;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_restaurant(
    pool: &Pool<Postgres>,
    name: &str,
    timezone: &str,
) -> Result<DbRestaurant> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating restaurant: id={}, name={}, timezone={}", id, name, timezone);

    let restaurant = sqlx::query_as::<_, DbRestaurant>(
        r#"
        INSERT INTO restaurants (id, name, is_active, timezone, created_at)
        VALUES ($1, $2, TRUE, $3, $4)
        RETURNING id, name, is_active, timezone, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(timezone)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(restaurant)
}

pub async fn get_restaurant_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbRestaurant>> {
    let restaurant = sqlx::query_as::<_, DbRestaurant>(
        r#"
        SELECT id, name, is_active, timezone, created_at
        FROM restaurants
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if restaurant.is_none() {
        tracing::debug!("Restaurant not found: id={}", id);
    }

    Ok(restaurant)
}

pub async fn set_restaurant_active(
    pool: &Pool<Postgres>,
    id: Uuid,
    is_active: bool,
) -> Result<DbRestaurant> {
    let restaurant = sqlx::query_as::<_, DbRestaurant>(
        r#"
        UPDATE restaurants
        SET is_active = $2
        WHERE id = $1
        RETURNING id, name, is_active, timezone, created_at
        "#,
    )
    .bind(id)
    .bind(is_active)
    .fetch_one(pool)
    .await?;

    Ok(restaurant)
}
