//! # Availability Handlers
//!
//! Endpoints backing the booking flow's date and time selection screens.
//! Both delegate to the pure generators in `reserva-core` with the server's
//! local clock injected, so the logic stays unit-testable without HTTP.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use reserva_core::{
    booking::{dates, slots},
    models::booking::{AvailableDatesResponse, TimeSlotsResponse},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{handlers::restaurant::load_restaurant, middleware::error_handling::AppError, ApiState};

/// Query parameters for the time-slot endpoint.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Booking date, `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Returns the rolling 14-day booking window for a restaurant.
///
/// # Endpoint
///
/// ```text
/// GET /api/restaurants/:id/dates
/// ```
///
/// Each entry carries the calendar date and whether the restaurant is closed
/// on that weekday; closed dates are shown but not selectable.
#[axum::debug_handler]
pub async fn get_available_dates(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AvailableDatesResponse>, AppError> {
    let restaurant = load_restaurant(&state, id).await?;

    let today = Local::now().date_naive();
    let dates = dates::generate_dates(today, &restaurant.operating_hours);

    Ok(Json(AvailableDatesResponse {
        restaurant_id: restaurant.id,
        dates,
    }))
}

/// Returns the reservation time slots for a restaurant on a given date.
///
/// # Endpoint
///
/// ```text
/// GET /api/restaurants/:id/slots?date=2026-09-01
/// ```
///
/// Slots are `"HH:MM - HH:MM"` labels in ascending start order. When the
/// requested date is today, slots whose start time has already passed are
/// omitted; future dates are returned in full.
#[axum::debug_handler]
pub async fn get_time_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<TimeSlotsResponse>, AppError> {
    let restaurant = load_restaurant(&state, id).await?;

    let now = Local::now().naive_local();
    let labels = slots::generate_slot_labels(query.date, &restaurant.operating_hours, now)?;

    Ok(Json(TimeSlotsResponse {
        restaurant_id: restaurant.id,
        date: query.date,
        slots: labels,
    }))
}
