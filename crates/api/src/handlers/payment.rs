//! Stubbed payment collaborator.
//!
//! Real gateway integration is out of scope; paid bookings get a mock
//! confirmation reference, and free bookings never reach this module.

use reserva_core::{
    errors::{BookingError, BookingResult},
    models::booking::PaymentMethod,
};
use uuid::Uuid;

/// Outcome of a (mock) payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOutcome {
    pub reference: String,
    pub method: PaymentMethod,
    pub amount: f64,
}

/// Charges `amount` against `method`. Always succeeds for positive amounts;
/// calling it with a non-positive amount is a caller bug surfaced as a
/// payment error.
pub fn process_mock_payment(method: PaymentMethod, amount: f64) -> BookingResult<PaymentOutcome> {
    if amount <= 0.0 {
        return Err(BookingError::Payment(
            "Payment requested for a free booking".to_string(),
        ));
    }

    tracing::debug!("Mock payment approved: method={:?}, amount={}", method, amount);

    Ok(PaymentOutcome {
        reference: format!("mock-{}", Uuid::new_v4()),
        method,
        amount,
    })
}
