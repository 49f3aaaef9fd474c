use crate::models::{DbRestaurant, DbTable};
use chrono::Utc;
use eyre::Result;
use reserva_core::models::restaurant::OperatingHours;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_restaurant(
    pool: &Pool<Postgres>,
    name: &str,
    operating_hours: &OperatingHours,
    total_capacity: i32,
    booking_fee_per_person: f64,
) -> Result<DbRestaurant> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating restaurant: id={}, name={}, capacity={}, fee={}",
        id,
        name,
        total_capacity,
        booking_fee_per_person
    );

    let restaurant = sqlx::query_as::<_, DbRestaurant>(
        r#"
        INSERT INTO restaurants (id, name, operating_hours, total_capacity, booking_fee_per_person, total_bookings, created_at)
        VALUES ($1, $2, $3, $4, $5, 0, $6)
        RETURNING id, name, operating_hours, total_capacity, booking_fee_per_person, total_bookings, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(Json(operating_hours.clone()))
    .bind(total_capacity)
    .bind(booking_fee_per_person)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(restaurant)
}

pub async fn get_restaurant_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbRestaurant>> {
    tracing::debug!("Getting restaurant by id: {}", id);

    let restaurant = sqlx::query_as::<_, DbRestaurant>(
        r#"
        SELECT id, name, operating_hours, total_capacity, booking_fee_per_person, total_bookings, created_at
        FROM restaurants
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(r) = &restaurant {
        tracing::debug!("Restaurant found: id={}, name={}", r.id, r.name);
    } else {
        tracing::debug!("Restaurant not found: id={}", id);
    }

    Ok(restaurant)
}

pub async fn get_tables_by_restaurant_id(
    pool: &Pool<Postgres>,
    restaurant_id: Uuid,
) -> Result<Vec<DbTable>> {
    let tables = sqlx::query_as::<_, DbTable>(
        r#"
        SELECT id, restaurant_id, table_number, capacity, location
        FROM tables
        WHERE restaurant_id = $1
        ORDER BY table_number ASC
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;

    Ok(tables)
}

pub async fn create_table(
    pool: &Pool<Postgres>,
    restaurant_id: Uuid,
    table_number: &str,
    capacity: i32,
    location: &str,
) -> Result<DbTable> {
    let id = Uuid::new_v4();

    let table = sqlx::query_as::<_, DbTable>(
        r#"
        INSERT INTO tables (id, restaurant_id, table_number, capacity, location)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, restaurant_id, table_number, capacity, location
        "#,
    )
    .bind(id)
    .bind(restaurant_id)
    .bind(table_number)
    .bind(capacity)
    .bind(location)
    .fetch_one(pool)
    .await?;

    Ok(table)
}

/// Owner flow: replaces the weekly schedule. Consumers only ever read it.
pub async fn update_operating_hours(
    pool: &Pool<Postgres>,
    id: Uuid,
    operating_hours: &OperatingHours,
) -> Result<DbRestaurant> {
    tracing::debug!("Updating operating hours for restaurant: {}", id);

    let restaurant = sqlx::query_as::<_, DbRestaurant>(
        r#"
        UPDATE restaurants
        SET operating_hours = $2
        WHERE id = $1
        RETURNING id, name, operating_hours, total_capacity, booking_fee_per_person, total_bookings, created_at
        "#,
    )
    .bind(id)
    .bind(Json(operating_hours.clone()))
    .fetch_one(pool)
    .await?;

    Ok(restaurant)
}

pub async fn increment_total_bookings(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE restaurants
        SET total_bookings = total_bookings + 1
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
