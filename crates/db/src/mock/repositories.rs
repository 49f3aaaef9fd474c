use chrono::NaiveDate;
use mockall::mock;
use reserva_core::models::restaurant::OperatingHours;
use uuid::Uuid;

use crate::models::{DbBooking, DbBookingTable, DbRestaurant, DbTable, DbUser};

// Mock repositories for testing
mock! {
    pub RestaurantRepo {
        pub async fn create_restaurant(
            &self,
            name: &'static str,
            operating_hours: OperatingHours,
            total_capacity: i32,
            booking_fee_per_person: f64,
        ) -> eyre::Result<DbRestaurant>;

        pub async fn get_restaurant_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbRestaurant>>;

        pub async fn get_tables_by_restaurant_id(
            &self,
            restaurant_id: Uuid,
        ) -> eyre::Result<Vec<DbTable>>;

        pub async fn update_operating_hours(
            &self,
            id: Uuid,
            operating_hours: OperatingHours,
        ) -> eyre::Result<DbRestaurant>;

        pub async fn increment_total_bookings(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            restaurant_id: Uuid,
            user_id: &'static str,
            booking_date: NaiveDate,
            time_slot: &'static str,
            number_of_guests: i32,
            table_ids: Vec<Uuid>,
            total_amount: f64,
            status: &'static str,
        ) -> eyre::Result<DbBooking>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_booking_tables(
            &self,
            booking_id: Uuid,
        ) -> eyre::Result<Vec<DbBookingTable>>;
    }
}

mock! {
    pub UserRepo {
        pub async fn ensure_user(
            &self,
            id: &'static str,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_id(
            &self,
            id: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn increment_total_bookings(
            &self,
            id: &'static str,
        ) -> eyre::Result<()>;
    }
}
