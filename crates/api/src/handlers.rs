pub mod availability;
pub mod booking;
pub mod payment;
pub mod restaurant;
