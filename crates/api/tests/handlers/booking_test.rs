use chrono::{NaiveDate, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use reserva_core::booking::{draft::BookingDraft, selection::Toggle};
use reserva_core::errors::BookingError;
use reserva_core::models::booking::{
    CreateBookingRequest, CreateBookingResponse, PaymentMethod,
};
use reserva_core::models::restaurant::{Table, TableLocation};
use reserva_db::models::{DbBooking, DbTable};
use std::str::FromStr;
use uuid::Uuid;

use crate::test_utils::{sample_restaurant, sample_table, TestContext};
use reserva_api::middleware::error_handling::AppError;

// Runs the create_booking handler logic against the repository mocks
// instead of a live database connection.
async fn test_create_booking_wrapper(
    ctx: &mut TestContext,
    request: CreateBookingRequest,
) -> Result<CreateBookingResponse, AppError> {
    let db_restaurant = ctx
        .restaurant_repo
        .get_restaurant_by_id(request.restaurant_id)
        .await?
        .ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Restaurant with ID {} not found",
                request.restaurant_id
            )))
        })?;

    let db_tables = ctx
        .restaurant_repo
        .get_tables_by_restaurant_id(request.restaurant_id)
        .await?;

    let tables: Vec<Table> = db_tables
        .into_iter()
        .map(|t: DbTable| Table {
            id: t.id,
            table_number: t.table_number,
            capacity: u32::try_from(t.capacity).unwrap_or(0),
            location: TableLocation::from_str(&t.location).unwrap(),
        })
        .collect();

    if request.number_of_guests == 0
        || request.number_of_guests > u32::try_from(db_restaurant.total_capacity).unwrap_or(0)
    {
        return Err(AppError(BookingError::Validation(
            "Invalid number of guests".to_string(),
        )));
    }

    let mut draft = BookingDraft::new();
    draft.select_date(request.date);
    draft.select_time_slot(request.time_slot.clone());
    draft.set_guests(request.number_of_guests);

    for table_id in &request.table_ids {
        let table = tables.iter().find(|t| t.id == *table_id).ok_or_else(|| {
            AppError(BookingError::NotFound(format!(
                "Table {} does not belong to restaurant {}",
                table_id, request.restaurant_id
            )))
        })?;
        if let Toggle::RejectedOverCapacity { .. } = draft.toggle_table(table) {
            return Err(AppError(BookingError::Validation(
                "Selected tables seat too many".to_string(),
            )));
        }
    }

    if !draft.is_complete() {
        return Err(AppError(BookingError::Validation(
            "Booking draft is not complete".to_string(),
        )));
    }

    let total_amount = draft.total_amount(db_restaurant.booking_fee_per_person);
    let free = total_amount == 0.0;
    if !free && request.payment_method.is_none() {
        return Err(AppError(BookingError::Validation(
            "Payment method is required for paid bookings".to_string(),
        )));
    }

    // Static references for the mockall signatures
    let user_id: &'static str = Box::leak(request.user_id.clone().into_boxed_str());
    let time_slot: &'static str = Box::leak(request.time_slot.clone().into_boxed_str());

    ctx.user_repo.ensure_user(user_id).await?;

    let db_booking = ctx
        .booking_repo
        .create_booking(
            request.restaurant_id,
            user_id,
            request.date,
            time_slot,
            request.number_of_guests as i32,
            request.table_ids.clone(),
            total_amount,
            "confirmed",
        )
        .await?;

    ctx.restaurant_repo
        .increment_total_bookings(request.restaurant_id)
        .await?;
    ctx.user_repo.increment_total_bookings(user_id).await?;

    Ok(CreateBookingResponse {
        id: db_booking.id,
        restaurant_name: db_restaurant.name,
        total_amount: db_booking.total_amount,
        free,
        status: db_booking.status,
        created_at: db_booking.created_at,
    })
}

fn booking_request(
    restaurant_id: Uuid,
    table_ids: Vec<Uuid>,
    guests: u32,
    payment_method: Option<PaymentMethod>,
) -> CreateBookingRequest {
    CreateBookingRequest {
        restaurant_id,
        user_id: "user-1".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        time_slot: "18:00 - 20:00".to_string(),
        number_of_guests: guests,
        table_ids,
        special_requests: None,
        occasion: None,
        payment_method,
    }
}

fn expect_restaurant_with_tables(
    ctx: &mut TestContext,
    restaurant_id: Uuid,
    fee: f64,
    tables: Vec<DbTable>,
) {
    ctx.restaurant_repo
        .expect_get_restaurant_by_id()
        .with(predicate::eq(restaurant_id))
        .returning(move |id| Ok(Some(sample_restaurant(id, fee))));
    ctx.restaurant_repo
        .expect_get_tables_by_restaurant_id()
        .with(predicate::eq(restaurant_id))
        .returning(move |_| Ok(tables.clone()));
}

fn expect_successful_persistence(ctx: &mut TestContext, restaurant_id: Uuid) {
    let now = Utc::now();
    ctx.user_repo.expect_ensure_user().returning(move |id| {
        Ok(reserva_db::models::DbUser {
            id: id.to_string(),
            total_bookings: 0,
            created_at: now,
        })
    });
    ctx.booking_repo.expect_create_booking().times(1).returning(
        move |restaurant_id, user_id, date, slot, guests, _tables, total, status| {
            Ok(DbBooking {
                id: Uuid::new_v4(),
                restaurant_id,
                user_id: user_id.to_string(),
                booking_date: date,
                time_slot: slot.to_string(),
                number_of_guests: guests,
                special_requests: None,
                occasion: None,
                total_amount: total,
                status: status.to_string(),
                created_at: now,
            })
        },
    );
    ctx.restaurant_repo
        .expect_increment_total_bookings()
        .with(predicate::eq(restaurant_id))
        .times(1)
        .returning(|_| Ok(()));
    ctx.user_repo
        .expect_increment_total_bookings()
        .times(1)
        .returning(|_| Ok(()));
}

#[tokio::test]
async fn test_create_booking_success_paid() {
    let mut ctx = TestContext::new();
    let restaurant_id = Uuid::new_v4();
    let table = sample_table(restaurant_id, "T1", 4);
    let table_id = table.id;

    expect_restaurant_with_tables(&mut ctx, restaurant_id, 5.0, vec![table]);
    expect_successful_persistence(&mut ctx, restaurant_id);

    let request = booking_request(restaurant_id, vec![table_id], 4, Some(PaymentMethod::Card));
    let response = test_create_booking_wrapper(&mut ctx, request).await.unwrap();

    assert_eq!(response.total_amount, 20.0);
    assert!(!response.free);
    assert_eq!(response.status, "confirmed");
    assert_eq!(response.restaurant_name, "Trattoria Da Luca");
}

#[tokio::test]
async fn test_create_booking_free_skips_payment_method() {
    let mut ctx = TestContext::new();
    let restaurant_id = Uuid::new_v4();
    let table = sample_table(restaurant_id, "T1", 6);
    let table_id = table.id;

    expect_restaurant_with_tables(&mut ctx, restaurant_id, 0.0, vec![table]);
    expect_successful_persistence(&mut ctx, restaurant_id);

    // No payment method on a free booking is fine
    let request = booking_request(restaurant_id, vec![table_id], 5, None);
    let response = test_create_booking_wrapper(&mut ctx, request).await.unwrap();

    assert_eq!(response.total_amount, 0.0);
    assert!(response.free);
}

#[tokio::test]
async fn test_create_booking_paid_requires_payment_method() {
    let mut ctx = TestContext::new();
    let restaurant_id = Uuid::new_v4();
    let table = sample_table(restaurant_id, "T1", 4);
    let table_id = table.id;

    expect_restaurant_with_tables(&mut ctx, restaurant_id, 5.0, vec![table]);

    let request = booking_request(restaurant_id, vec![table_id], 4, None);
    let result = test_create_booking_wrapper(&mut ctx, request).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_booking_restaurant_not_found() {
    let mut ctx = TestContext::new();
    let restaurant_id = Uuid::new_v4();

    ctx.restaurant_repo
        .expect_get_restaurant_by_id()
        .returning(|_| Ok(None));

    let request = booking_request(restaurant_id, vec![], 4, Some(PaymentMethod::Card));
    let result = test_create_booking_wrapper(&mut ctx, request).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_booking_rejects_over_capacity_selection() {
    let mut ctx = TestContext::new();
    let restaurant_id = Uuid::new_v4();
    let t1 = sample_table(restaurant_id, "T1", 2);
    let t2 = sample_table(restaurant_id, "T2", 2);
    let t3 = sample_table(restaurant_id, "T3", 2);
    let ids = vec![t1.id, t2.id, t3.id];

    expect_restaurant_with_tables(&mut ctx, restaurant_id, 5.0, vec![t1, t2, t3]);

    // Three two-tops for four guests breaks the +2 heuristic
    let request = booking_request(restaurant_id, ids, 4, Some(PaymentMethod::Card));
    let result = test_create_booking_wrapper(&mut ctx, request).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_booking_requires_at_least_one_table() {
    let mut ctx = TestContext::new();
    let restaurant_id = Uuid::new_v4();
    let table = sample_table(restaurant_id, "T1", 4);

    expect_restaurant_with_tables(&mut ctx, restaurant_id, 5.0, vec![table]);

    let request = booking_request(restaurant_id, vec![], 4, Some(PaymentMethod::Card));
    let result = test_create_booking_wrapper(&mut ctx, request).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {} // Expected: incomplete draft
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_booking_unknown_table() {
    let mut ctx = TestContext::new();
    let restaurant_id = Uuid::new_v4();
    let table = sample_table(restaurant_id, "T1", 4);

    expect_restaurant_with_tables(&mut ctx, restaurant_id, 5.0, vec![table]);

    let request = booking_request(
        restaurant_id,
        vec![Uuid::new_v4()],
        4,
        Some(PaymentMethod::Card),
    );
    let result = test_create_booking_wrapper(&mut ctx, request).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}
