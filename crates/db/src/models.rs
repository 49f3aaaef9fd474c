use chrono::{DateTime, NaiveDate, Utc};
use reserva_core::models::restaurant::OperatingHours;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRestaurant {
    pub id: Uuid,
    pub name: String,
    pub operating_hours: Json<OperatingHours>,
    pub total_capacity: i32,
    pub booking_fee_per_person: f64,
    pub total_bookings: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTable {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub table_number: String,
    pub capacity: i32,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: String,
    pub total_bookings: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub user_id: String,
    pub booking_date: NaiveDate,
    pub time_slot: String,
    pub number_of_guests: i32,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingTable {
    pub booking_id: Uuid,
    pub table_id: Uuid,
}
