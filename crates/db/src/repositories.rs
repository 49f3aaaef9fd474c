pub mod booking;
pub mod restaurant;
pub mod user;
