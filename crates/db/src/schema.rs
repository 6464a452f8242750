use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// SQLSTATE raised when an insert violates `reservations_no_overlap`.
pub const EXCLUSION_VIOLATION: &str = "23P01";

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Needed for the uuid equality operator inside a GiST exclusion constraint
    sqlx::query("CREATE EXTENSION IF NOT EXISTS btree_gist;")
        .execute(pool)
        .await?;

    // Create restaurants table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            timezone VARCHAR(64) NOT NULL DEFAULT 'UTC',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create business_hours table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS business_hours (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            restaurant_id UUID NOT NULL REFERENCES restaurants(id),
            day_of_week SMALLINT NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
            open_time TIME NOT NULL,
            close_time TIME NOT NULL,
            is_closed BOOLEAN NOT NULL DEFAULT FALSE,
            UNIQUE (restaurant_id, day_of_week)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create tables table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tables (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            restaurant_id UUID NOT NULL REFERENCES restaurants(id),
            table_number INTEGER NOT NULL,
            capacity INTEGER NOT NULL CHECK (capacity > 0),
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            UNIQUE (restaurant_id, table_number)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reservations table. The exclusion constraint is what actually
    // prevents double booking when two commits race past the availability check.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            restaurant_id UUID NOT NULL REFERENCES restaurants(id),
            client_id UUID NOT NULL,
            table_id UUID NOT NULL REFERENCES tables(id),
            reservation_date TIMESTAMP WITH TIME ZONE NOT NULL,
            party_size INTEGER NOT NULL CHECK (party_size BETWEEN 1 AND 50),
            duration_minutes INTEGER NOT NULL CHECK (duration_minutes BETWEEN 30 AND 480),
            ends_at TIMESTAMP WITH TIME ZONE NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'confirmed', 'cancelled', 'completed')),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_reservation_range CHECK (ends_at > reservation_date),
            CONSTRAINT reservations_no_overlap EXCLUDE USING gist (
                table_id WITH =,
                tstzrange(reservation_date, ends_at, '[)') WITH &&
            ) WHERE (status IN ('pending', 'confirmed'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tables_restaurant_capacity ON tables(restaurant_id, capacity);
        CREATE INDEX IF NOT EXISTS idx_reservations_restaurant_date ON reservations(restaurant_id, reservation_date);
        CREATE INDEX IF NOT EXISTS idx_reservations_table_id ON reservations(table_id);
        CREATE INDEX IF NOT EXISTS idx_reservations_client_id ON reservations(client_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
