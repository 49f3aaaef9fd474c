//! # Booking Handlers
//!
//! Confirmation of a completed booking draft and read-back of persisted
//! bookings. The draft is rebuilt server-side from the request through the
//! core components, so the capacity heuristic and completion gating are
//! enforced by the same code the selection UI runs.
//!
//! There is deliberately no check that the requested tables are free for
//! the requested slot: two clients confirming overlapping drafts both
//! succeed. The aggregate counter updates are likewise separate statements
//! rather than one transaction. Both gaps are documented in DESIGN.md.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use reserva_core::{
    booking::{draft::BookingDraft, selection::Toggle},
    errors::BookingError,
    models::booking::{CreateBookingRequest, CreateBookingResponse, GetBookingResponse},
};
use uuid::Uuid;

use crate::{
    handlers::{payment, restaurant::load_restaurant},
    middleware::error_handling::AppError,
    ApiState,
};

const STATUS_CONFIRMED: &str = "confirmed";

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let restaurant = load_restaurant(&state, payload.restaurant_id).await?;

    if payload.number_of_guests == 0 {
        return Err(AppError(BookingError::Validation(
            "Number of guests must be positive".to_string(),
        )));
    }
    if payload.number_of_guests > restaurant.total_capacity {
        return Err(AppError(BookingError::Validation(format!(
            "Party of {} exceeds restaurant capacity of {}",
            payload.number_of_guests, restaurant.total_capacity
        ))));
    }

    // Rebuild the draft through the core components so the same selection
    // rules apply as in the client flow.
    let mut draft = BookingDraft::new();
    draft.select_date(payload.date);
    draft.select_time_slot(payload.time_slot.clone());
    draft.set_guests(payload.number_of_guests);
    draft.set_special_requests(payload.special_requests.clone());
    draft.set_occasion(payload.occasion.clone());

    for table_id in &payload.table_ids {
        let table = restaurant
            .tables
            .iter()
            .find(|t| t.id == *table_id)
            .ok_or_else(|| {
                BookingError::NotFound(format!(
                    "Table {} does not belong to restaurant {}",
                    table_id, restaurant.id
                ))
            })?;

        if let Toggle::RejectedOverCapacity {
            selected,
            attempted,
        } = draft.toggle_table(table)
        {
            return Err(AppError(BookingError::Validation(format!(
                "Selected tables seat too many: {} seats for {} guests (had {})",
                attempted, payload.number_of_guests, selected
            ))));
        }
    }

    let summary = draft.summarize(&restaurant)?;

    // Free bookings skip payment entirely; paid ones need a method.
    if !summary.free {
        let method = payload.payment_method.ok_or_else(|| {
            BookingError::Validation("Payment method is required for paid bookings".to_string())
        })?;
        let outcome = payment::process_mock_payment(method, summary.total_amount)?;
        tracing::debug!("Payment reference: {}", outcome.reference);
    }

    reserva_db::repositories::user::ensure_user(&state.db_pool, &payload.user_id)
        .await
        .map_err(BookingError::Database)?;

    let db_booking = reserva_db::repositories::booking::create_booking(
        &state.db_pool,
        restaurant.id,
        &payload.user_id,
        payload.date,
        &payload.time_slot,
        i32::try_from(payload.number_of_guests).unwrap_or(i32::MAX),
        &payload.table_ids,
        payload.special_requests.as_deref(),
        payload.occasion.as_deref(),
        summary.total_amount,
        STATUS_CONFIRMED,
    )
    .await
    .map_err(BookingError::Database)?;

    // Aggregate counters; not transactional with the insert above.
    reserva_db::repositories::restaurant::increment_total_bookings(&state.db_pool, restaurant.id)
        .await
        .map_err(BookingError::Database)?;
    reserva_db::repositories::user::increment_total_bookings(&state.db_pool, &payload.user_id)
        .await
        .map_err(BookingError::Database)?;

    tracing::info!(
        "Booking confirmed: id={}, restaurant={}, {}",
        db_booking.id,
        restaurant.id,
        summary.display_line()
    );

    let response = CreateBookingResponse {
        id: db_booking.id,
        restaurant_name: summary.restaurant_name,
        total_amount: db_booking.total_amount,
        free: summary.free,
        status: db_booking.status,
        created_at: db_booking.created_at,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetBookingResponse>, AppError> {
    let db_booking = reserva_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    let table_rows = reserva_db::repositories::booking::get_booking_tables(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    let response = GetBookingResponse {
        id: db_booking.id,
        restaurant_id: db_booking.restaurant_id,
        user_id: db_booking.user_id,
        date: db_booking.booking_date,
        time_slot: db_booking.time_slot,
        number_of_guests: u32::try_from(db_booking.number_of_guests).unwrap_or(0),
        table_ids: table_rows.into_iter().map(|t| t.table_id).collect(),
        special_requests: db_booking.special_requests,
        occasion: db_booking.occasion,
        total_amount: db_booking.total_amount,
        status: db_booking.status,
        created_at: db_booking.created_at,
    };

    Ok(Json(response))
}
