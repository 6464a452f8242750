use crate::models::DbTable;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_table(
    pool: &Pool<Postgres>,
    restaurant_id: Uuid,
    table_number: i32,
    capacity: i32,
) -> Result<DbTable> {
    let table = sqlx::query_as::<_, DbTable>(
        r#"
        INSERT INTO tables (id, restaurant_id, table_number, capacity, is_active, created_at)
        VALUES ($1, $2, $3, $4, TRUE, $5)
        RETURNING id, restaurant_id, table_number, capacity, is_active, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(restaurant_id)
    .bind(table_number)
    .bind(capacity)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(table)
}

/// Active tables seating at least `min_capacity`, smallest first. Table number
/// breaks ties so the order is stable between calls.
pub async fn list_eligible_tables(
    pool: &Pool<Postgres>,
    restaurant_id: Uuid,
    min_capacity: i32,
) -> Result<Vec<DbTable>> {
    let tables = sqlx::query_as::<_, DbTable>(
        r#"
        SELECT id, restaurant_id, table_number, capacity, is_active, created_at
        FROM tables
        WHERE restaurant_id = $1 AND is_active = TRUE AND capacity >= $2
        ORDER BY capacity ASC, table_number ASC
        "#,
    )
    .bind(restaurant_id)
    .bind(min_capacity)
    .fetch_all(pool)
    .await?;

    Ok(tables)
}
