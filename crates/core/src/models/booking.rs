use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::dates::DateAvailability;
use crate::models::restaurant::{OperatingHours, Table};

/// How a paid booking is settled. Free bookings skip this entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
    Wallet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub restaurant_id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub number_of_guests: u32,
    pub table_ids: Vec<Uuid>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub restaurant_name: String,
    pub total_amount: f64,
    pub free: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBookingResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub number_of_guests: u32,
    pub table_ids: Vec<Uuid>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRestaurantResponse {
    pub id: Uuid,
    pub name: String,
    pub operating_hours: OperatingHours,
    pub tables: Vec<Table>,
    pub total_capacity: u32,
    pub booking_fee_per_person: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableDatesResponse {
    pub restaurant_id: Uuid,
    pub dates: Vec<DateAvailability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotsResponse {
    pub restaurant_id: Uuid,
    pub date: NaiveDate,
    pub slots: Vec<String>,
}
