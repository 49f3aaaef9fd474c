//! Reservation time-slot generation.
//!
//! For an open day, slots are two-hour windows whose start times advance in
//! 30-minute steps from the opening time, continuing while the start time is
//! before closing. Only the start time is compared against `close`: the
//! displayed end time is never clamped, so the last slots of the day can end
//! after closing (last seating at closing time, dining runs over). Slots are
//! tracked as minutes since midnight so an end past midnight keeps a stable
//! label (`"23:30 - 25:30"`) instead of wrapping.
//!
//! When the requested date is today, slots whose start has already passed
//! (start at or before the current time) are dropped. Future dates are never
//! filtered.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::restaurant::{parse_hhmm, DayHours, OperatingHours};

/// Length of every reservation window, in minutes.
pub const SLOT_DURATION_MINUTES: u32 = 120;

/// Gap between consecutive slot start times, in minutes.
pub const SLOT_STEP_MINUTES: u32 = 30;

/// A single reservation window, identified by its start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Start time in minutes since midnight.
    pub start: u32,
}

impl Slot {
    pub fn end(&self) -> u32 {
        self.start + SLOT_DURATION_MINUTES
    }

    pub fn start_label(&self) -> String {
        format_minutes(self.start)
    }

    /// Display label of the form `"HH:MM - HH:MM"`.
    pub fn label(&self) -> String {
        format!("{} - {}", format_minutes(self.start), format_minutes(self.end()))
    }
}

fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Lazy, finite, restartable sequence of slots for one day's hours.
///
/// Cloning yields a fresh iterator positioned at the opening time.
#[derive(Debug, Clone)]
pub struct SlotIter {
    next_start: u32,
    close: u32,
}

impl SlotIter {
    /// Builds the slot sequence for `day`. Closed days yield an empty
    /// sequence; malformed hour strings are a validation error.
    pub fn new(day: &DayHours) -> BookingResult<Self> {
        if day.closed {
            return Ok(Self {
                next_start: 0,
                close: 0,
            });
        }
        let open = parse_hhmm(&day.open)
            .ok_or_else(|| BookingError::Validation(format!("Invalid open time: {:?}", day.open)))?;
        let close = parse_hhmm(&day.close).ok_or_else(|| {
            BookingError::Validation(format!("Invalid close time: {:?}", day.close))
        })?;
        Ok(Self {
            next_start: open,
            close,
        })
    }
}

impl Iterator for SlotIter {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        if self.next_start >= self.close {
            return None;
        }
        let slot = Slot {
            start: self.next_start,
        };
        self.next_start += SLOT_STEP_MINUTES;
        Some(slot)
    }
}

/// Generates the bookable slots for `date`, in ascending start order.
///
/// `now` is the caller's wall clock; it only matters when `date` is today,
/// where slots starting at or before the current time are excluded.
pub fn generate_time_slots(
    date: NaiveDate,
    hours: &OperatingHours,
    now: NaiveDateTime,
) -> BookingResult<Vec<Slot>> {
    let day = hours.for_weekday(chrono::Datelike::weekday(&date));
    let iter = SlotIter::new(day)?;

    if date != now.date() {
        return Ok(iter.collect());
    }

    let now_minutes = now.time().hour() * 60 + now.time().minute();
    Ok(iter.filter(|slot| slot.start > now_minutes).collect())
}

/// Convenience wrapper returning display labels instead of [`Slot`]s.
pub fn generate_slot_labels(
    date: NaiveDate,
    hours: &OperatingHours,
    now: NaiveDateTime,
) -> BookingResult<Vec<String>> {
    Ok(generate_time_slots(date, hours, now)?
        .iter()
        .map(Slot::label)
        .collect())
}
