//! Rolling window of candidate booking dates.
//!
//! The selector UI shows a fixed 14-day horizon starting today; each date is
//! annotated with whether the restaurant is closed on that weekday. Hours are
//! weekday-level, so single-date exceptions never appear here.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::restaurant::OperatingHours;

/// Number of days offered for booking, today inclusive.
pub const BOOKING_WINDOW_DAYS: usize = 14;

/// One candidate booking date. Closed dates are shown but not selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAvailability {
    pub date: NaiveDate,
    pub closed: bool,
}

impl DateAvailability {
    pub fn selectable(&self) -> bool {
        !self.closed
    }
}

/// Generates the booking-date window starting at `today`.
///
/// Always returns exactly [`BOOKING_WINDOW_DAYS`] consecutive dates; pure in
/// `today` and the hours map.
pub fn generate_dates(today: NaiveDate, hours: &OperatingHours) -> Vec<DateAvailability> {
    (0..BOOKING_WINDOW_DAYS)
        .map(|offset| {
            // Days::new never overflows for a 14-day horizon
            let date = today
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(today);
            DateAvailability {
                date,
                closed: hours.for_weekday(date.weekday()).closed,
            }
        })
        .collect()
}
