use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use reserva_core::{
    errors::BookingError,
    models::booking::GetRestaurantResponse,
    models::restaurant::{Restaurant, Table, TableLocation},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Loads a restaurant and its tables into the core domain model.
///
/// Shared by every handler that needs hours, tables, or the booking fee.
pub(crate) async fn load_restaurant(
    state: &ApiState,
    id: Uuid,
) -> Result<Restaurant, AppError> {
    let db_restaurant =
        reserva_db::repositories::restaurant::get_restaurant_by_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Restaurant with ID {} not found", id))
            })?;

    let db_tables =
        reserva_db::repositories::restaurant::get_tables_by_restaurant_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?;

    let tables = db_tables
        .into_iter()
        .map(|t| {
            Ok(Table {
                id: t.id,
                table_number: t.table_number,
                capacity: u32::try_from(t.capacity).unwrap_or(0),
                location: TableLocation::from_str(&t.location)?,
            })
        })
        .collect::<Result<Vec<_>, BookingError>>()?;

    Ok(Restaurant {
        id: db_restaurant.id,
        name: db_restaurant.name,
        operating_hours: db_restaurant.operating_hours.0,
        tables,
        total_capacity: u32::try_from(db_restaurant.total_capacity).unwrap_or(0),
        booking_fee_per_person: db_restaurant.booking_fee_per_person,
    })
}

#[axum::debug_handler]
pub async fn get_restaurant(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetRestaurantResponse>, AppError> {
    let restaurant = load_restaurant(&state, id).await?;

    let response = GetRestaurantResponse {
        id: restaurant.id,
        name: restaurant.name,
        operating_hours: restaurant.operating_hours,
        tables: restaurant.tables,
        total_capacity: restaurant.total_capacity,
        booking_fee_per_person: restaurant.booking_fee_per_person,
    };

    Ok(Json(response))
}
