use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create restaurants table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            operating_hours JSONB NOT NULL,
            total_capacity INTEGER NOT NULL DEFAULT 0,
            booking_fee_per_person DOUBLE PRECISION NOT NULL DEFAULT 0,
            total_bookings INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT non_negative_fee CHECK (booking_fee_per_person >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create tables table (physical dining tables)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tables (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            restaurant_id UUID NOT NULL REFERENCES restaurants(id),
            table_number VARCHAR(64) NOT NULL,
            capacity INTEGER NOT NULL,
            location VARCHAR(32) NOT NULL,
            CONSTRAINT positive_capacity CHECK (capacity > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id VARCHAR(255) PRIMARY KEY,
            total_bookings INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            restaurant_id UUID NOT NULL REFERENCES restaurants(id),
            user_id VARCHAR(255) NOT NULL REFERENCES users(id),
            booking_date DATE NOT NULL,
            time_slot VARCHAR(32) NOT NULL,
            number_of_guests INTEGER NOT NULL,
            special_requests TEXT NULL,
            occasion TEXT NULL,
            total_amount DOUBLE PRECISION NOT NULL DEFAULT 0,
            status VARCHAR(32) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_guests CHECK (number_of_guests > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create booking_tables join table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS booking_tables (
            booking_id UUID NOT NULL REFERENCES bookings(id),
            table_id UUID NOT NULL REFERENCES tables(id),
            PRIMARY KEY (booking_id, table_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tables_restaurant_id ON tables(restaurant_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_restaurant_id ON bookings(restaurant_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_user_id ON bookings(user_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_booking_date ON bookings(booking_date);
        CREATE INDEX IF NOT EXISTS idx_booking_tables_booking_id ON booking_tables(booking_id);
        CREATE INDEX IF NOT EXISTS idx_booking_tables_table_id ON booking_tables(table_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
