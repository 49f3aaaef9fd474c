use crate::models::{DbBooking, DbBookingTable};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[allow(clippy::too_many_arguments)]
pub async fn create_booking(
    pool: &Pool<Postgres>,
    restaurant_id: Uuid,
    user_id: &str,
    booking_date: NaiveDate,
    time_slot: &str,
    number_of_guests: i32,
    table_ids: &[Uuid],
    special_requests: Option<&str>,
    occasion: Option<&str>,
    total_amount: f64,
    status: &str,
) -> Result<DbBooking> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, restaurant={}, user={}, date={}, slot={}, guests={}",
        id,
        restaurant_id,
        user_id,
        booking_date,
        time_slot,
        number_of_guests
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, restaurant_id, user_id, booking_date, time_slot, number_of_guests, special_requests, occasion, total_amount, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, restaurant_id, user_id, booking_date, time_slot, number_of_guests, special_requests, occasion, total_amount, status, created_at
        "#,
    )
    .bind(id)
    .bind(restaurant_id)
    .bind(user_id)
    .bind(booking_date)
    .bind(time_slot)
    .bind(number_of_guests)
    .bind(special_requests)
    .bind(occasion)
    .bind(total_amount)
    .bind(status)
    .bind(now)
    .fetch_one(pool)
    .await?;

    for table_id in table_ids {
        sqlx::query(
            r#"
            INSERT INTO booking_tables (booking_id, table_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(id)
        .bind(table_id)
        .execute(pool)
        .await?;
    }

    tracing::debug!("Booking created successfully: id={}", id);
    Ok(booking)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    tracing::debug!("Getting booking by id: {}", id);

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, restaurant_id, user_id, booking_date, time_slot, number_of_guests, special_requests, occasion, total_amount, status, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn get_booking_tables(
    pool: &Pool<Postgres>,
    booking_id: Uuid,
) -> Result<Vec<DbBookingTable>> {
    let rows = sqlx::query_as::<_, DbBookingTable>(
        r#"
        SELECT booking_id, table_id
        FROM booking_tables
        WHERE booking_id = $1
        "#,
    )
    .bind(booking_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
