pub mod booking;
pub mod restaurant;
