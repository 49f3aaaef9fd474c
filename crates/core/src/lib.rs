//! # Reserva Core
//!
//! Pure booking-support logic for the Reserva table-reservation service.
//! This crate has no I/O: it holds the shared domain models plus the four
//! components the booking flow is built from — the rolling date window,
//! the time-slot generator, the table allocation selector, and the booking
//! draft with its summary/total calculator.
//!
//! Everything here is synchronous and deterministic; callers inject the
//! clock where behavior depends on "now".

/// Booking-flow components: date window, slots, table selection, draft
pub mod booking;
/// Domain error types shared across the workspace
pub mod errors;
/// Domain models and HTTP-facing DTOs
pub mod models;
