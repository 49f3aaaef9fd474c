//! The in-progress booking draft and its summary calculator.
//!
//! A draft lives entirely client-side until confirmation and progresses
//! linearly with resets: picking a new date clears the time slot, changing
//! the guest count clears the table selection. Abandoning the flow simply
//! drops the value; nothing is persisted before confirmation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::selection::{TableSelection, Toggle};
use crate::errors::{BookingError, BookingResult};
use crate::models::restaurant::{Restaurant, Table};

/// Progression of a booking draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStage {
    NoDate,
    DateSelected,
    TimeSelected,
    GuestsSet,
    /// Tables chosen, but their combined capacity does not yet seat the party.
    TablesSelected,
    Complete,
}

/// Transient reservation-in-progress state.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    date: Option<NaiveDate>,
    time_slot: Option<String>,
    selection: TableSelection,
    special_requests: Option<String>,
    occasion: Option<String>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a booking date. Selecting a new date invalidates any previously
    /// chosen time slot.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.date != Some(date) {
            self.time_slot = None;
        }
        self.date = Some(date);
    }

    pub fn select_time_slot(&mut self, slot_label: impl Into<String>) {
        self.time_slot = Some(slot_label.into());
    }

    /// Sets the party size. Any existing table selection is cleared so a
    /// stale fit can't survive the edit.
    pub fn set_guests(&mut self, number_of_guests: u32) {
        self.selection.set_guests(number_of_guests);
    }

    pub fn toggle_table(&mut self, table: &Table) -> Toggle {
        self.selection.toggle(table)
    }

    pub fn set_special_requests(&mut self, requests: Option<String>) {
        self.special_requests = requests;
    }

    pub fn set_occasion(&mut self, occasion: Option<String>) {
        self.occasion = occasion;
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time_slot(&self) -> Option<&str> {
        self.time_slot.as_deref()
    }

    pub fn number_of_guests(&self) -> u32 {
        self.selection.number_of_guests()
    }

    pub fn selection(&self) -> &TableSelection {
        &self.selection
    }

    pub fn special_requests(&self) -> Option<&str> {
        self.special_requests.as_deref()
    }

    pub fn occasion(&self) -> Option<&str> {
        self.occasion.as_deref()
    }

    /// Derives the draft's stage from its fields.
    pub fn stage(&self) -> DraftStage {
        if self.date.is_none() {
            return DraftStage::NoDate;
        }
        if self.time_slot.is_none() {
            return DraftStage::DateSelected;
        }
        if self.selection.number_of_guests() == 0 {
            return DraftStage::TimeSelected;
        }
        if self.selection.is_empty() {
            return DraftStage::GuestsSet;
        }
        if !self.selection.covers_party() {
            return DraftStage::TablesSelected;
        }
        DraftStage::Complete
    }

    /// Whether the draft is ready to proceed to confirmation: date, time
    /// slot, a positive guest count, and a table allocation seating the
    /// whole party. Absence of any one blocks progression.
    pub fn is_complete(&self) -> bool {
        self.stage() == DraftStage::Complete
    }

    /// Total booking fee: per-person fee times guest count. Exactly zero is
    /// the free-booking state, which skips payment-method selection.
    pub fn total_amount(&self, fee_per_person: f64) -> f64 {
        fee_per_person * f64::from(self.selection.number_of_guests())
    }

    pub fn is_free(&self, fee_per_person: f64) -> bool {
        self.total_amount(fee_per_person) == 0.0
    }

    /// Assembles the confirmation summary for a complete draft.
    pub fn summarize(&self, restaurant: &Restaurant) -> BookingResult<BookingSummary> {
        if !self.is_complete() {
            return Err(BookingError::Validation(format!(
                "Booking draft is not complete (stage: {:?})",
                self.stage()
            )));
        }

        // is_complete guarantees date and time_slot are set
        let date = self.date.ok_or_else(|| {
            BookingError::Validation("Booking draft has no date".to_string())
        })?;
        let time_slot = self.time_slot.clone().ok_or_else(|| {
            BookingError::Validation("Booking draft has no time slot".to_string())
        })?;

        let total_amount = self.total_amount(restaurant.booking_fee_per_person);

        Ok(BookingSummary {
            restaurant_name: restaurant.name.clone(),
            date,
            time_slot,
            number_of_guests: self.selection.number_of_guests(),
            table_numbers: self
                .selection
                .tables()
                .iter()
                .map(|t| t.table_number.clone())
                .collect(),
            special_requests: self.special_requests.clone(),
            occasion: self.occasion.clone(),
            total_amount,
            free: total_amount == 0.0,
        })
    }
}

/// Human-readable confirmation summary for a completed draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub restaurant_name: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub number_of_guests: u32,
    pub table_numbers: Vec<String>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub total_amount: f64,
    pub free: bool,
}

impl BookingSummary {
    /// One-line display form, e.g.
    /// `"Luigi's — 2026-09-01, 18:00 - 20:00, 4 guests, tables T1, T2 — total 20.00"`.
    pub fn display_line(&self) -> String {
        let total = if self.free {
            "free".to_string()
        } else {
            format!("total {:.2}", self.total_amount)
        };
        format!(
            "{} — {}, {}, {} guests, tables {} — {}",
            self.restaurant_name,
            self.date,
            self.time_slot,
            self.number_of_guests,
            self.table_numbers.join(", "),
            total
        )
    }
}
