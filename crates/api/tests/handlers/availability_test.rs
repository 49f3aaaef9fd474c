use chrono::{NaiveDate, NaiveDateTime};
use mockall::predicate;
use pretty_assertions::assert_eq;
use reserva_core::booking::{dates, slots};
use reserva_core::errors::BookingError;
use reserva_core::models::booking::{AvailableDatesResponse, TimeSlotsResponse};
use uuid::Uuid;

use crate::test_utils::{sample_restaurant, TestContext};
use reserva_api::middleware::error_handling::AppError;

// Wrappers that run the handler logic against the repository mocks instead
// of a live database connection.
async fn test_available_dates_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    today: NaiveDate,
) -> Result<AvailableDatesResponse, AppError> {
    let restaurant = ctx
        .restaurant_repo
        .get_restaurant_by_id(id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Restaurant with ID {} not found",
                id
            )))
        })?;

    let window = dates::generate_dates(today, &restaurant.operating_hours.0);
    Ok(AvailableDatesResponse {
        restaurant_id: restaurant.id,
        dates: window,
    })
}

async fn test_time_slots_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    date: NaiveDate,
    now: NaiveDateTime,
) -> Result<TimeSlotsResponse, AppError> {
    let restaurant = ctx
        .restaurant_repo
        .get_restaurant_by_id(id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Restaurant with ID {} not found",
                id
            )))
        })?;

    let labels = slots::generate_slot_labels(date, &restaurant.operating_hours.0, now)?;
    Ok(TimeSlotsResponse {
        restaurant_id: restaurant.id,
        date,
        slots: labels,
    })
}

#[tokio::test]
async fn test_available_dates_success() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.restaurant_repo
        .expect_get_restaurant_by_id()
        .with(predicate::eq(id))
        .returning(move |id| Ok(Some(sample_restaurant(id, 5.0))));

    // 2026-08-24 is a Monday; sample hours close on Sundays
    let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let response = test_available_dates_wrapper(&mut ctx, id, today)
        .await
        .unwrap();

    assert_eq!(response.restaurant_id, id);
    assert_eq!(response.dates.len(), 14);
    assert_eq!(response.dates[0].date, today);
    assert!(!response.dates[0].closed);
    // Days 7 and 14 of the window are the two Sundays
    assert!(response.dates[6].closed);
    assert!(response.dates[13].closed);
}

#[tokio::test]
async fn test_available_dates_restaurant_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.restaurant_repo
        .expect_get_restaurant_by_id()
        .with(predicate::eq(id))
        .returning(|_| Ok(None));

    let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let result = test_available_dates_wrapper(&mut ctx, id, today).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_time_slots_for_future_date() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.restaurant_repo
        .expect_get_restaurant_by_id()
        .returning(move |id| Ok(Some(sample_restaurant(id, 5.0))));

    let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let tomorrow = today.succ_opt().unwrap();
    let now = today.and_hms_opt(20, 0, 0).unwrap();

    let response = test_time_slots_wrapper(&mut ctx, id, tomorrow, now)
        .await
        .unwrap();

    // Future dates are never past-filtered
    assert_eq!(response.slots.first().unwrap(), "09:00 - 11:00");
    assert_eq!(response.slots.last().unwrap(), "21:30 - 23:30");
    assert_eq!(response.slots.len(), 26);
}

#[tokio::test]
async fn test_time_slots_today_filters_past_starts() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.restaurant_repo
        .expect_get_restaurant_by_id()
        .returning(move |id| Ok(Some(sample_restaurant(id, 5.0))));

    let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let now = today.and_hms_opt(14, 5, 0).unwrap();

    let response = test_time_slots_wrapper(&mut ctx, id, today, now)
        .await
        .unwrap();

    assert_eq!(response.slots.first().unwrap(), "14:30 - 16:30");
}

#[tokio::test]
async fn test_time_slots_closed_day_is_empty() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.restaurant_repo
        .expect_get_restaurant_by_id()
        .returning(move |id| Ok(Some(sample_restaurant(id, 5.0))));

    // 2026-08-30 is a Sunday
    let sunday = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let now = NaiveDate::from_ymd_opt(2026, 8, 24)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let response = test_time_slots_wrapper(&mut ctx, id, sunday, now)
        .await
        .unwrap();

    assert!(response.slots.is_empty());
}
