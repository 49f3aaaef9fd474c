use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

/// Open/close window for a single weekday.
///
/// Times are zero-padded 24-hour `"HH:MM"` strings. When `closed` is set the
/// open/close values are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: String,
    pub close: String,
    pub closed: bool,
}

impl DayHours {
    pub fn open_day(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            closed: false,
        }
    }

    pub fn closed_day() -> Self {
        Self {
            open: "00:00".to_string(),
            close: "00:00".to_string(),
            closed: true,
        }
    }
}

/// Per-weekday operating schedule for a restaurant.
///
/// Weekday granularity is deliberate: holiday or single-date exceptions are
/// not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl OperatingHours {
    pub fn for_weekday(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    fn days(&self) -> [(&'static str, &DayHours); 7] {
        [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
        ]
    }

    /// Checks every open day parses as `"HH:MM"` with `open < close`.
    ///
    /// Lexicographic comparison is chronological here because both values are
    /// zero-padded 24-hour strings.
    pub fn validate(&self) -> BookingResult<()> {
        for (name, day) in self.days() {
            if day.closed {
                continue;
            }
            parse_hhmm(&day.open).ok_or_else(|| {
                BookingError::Validation(format!("Invalid open time for {}: {:?}", name, day.open))
            })?;
            parse_hhmm(&day.close).ok_or_else(|| {
                BookingError::Validation(format!(
                    "Invalid close time for {}: {:?}",
                    name, day.close
                ))
            })?;
            if day.open >= day.close {
                return Err(BookingError::Validation(format!(
                    "Open time must precede close time for {} ({} >= {})",
                    name, day.open, day.close
                )));
            }
        }
        Ok(())
    }
}

/// Parses a zero-padded 24-hour `"HH:MM"` string into minutes since midnight.
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (h, m) = value.split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Seating area a table belongs to. Used for presentation grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLocation {
    Indoor,
    Outdoor,
    Private,
}

impl std::str::FromStr for TableLocation {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indoor" => Ok(TableLocation::Indoor),
            "outdoor" => Ok(TableLocation::Outdoor),
            "private" => Ok(TableLocation::Private),
            other => Err(BookingError::Validation(format!(
                "Unknown table location: {:?}",
                other
            ))),
        }
    }
}

impl TableLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableLocation::Indoor => "indoor",
            TableLocation::Outdoor => "outdoor",
            TableLocation::Private => "private",
        }
    }
}

/// A bookable table. Immutable for the duration of a booking session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: Uuid,
    pub table_number: String,
    pub capacity: u32,
    pub location: TableLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub operating_hours: OperatingHours,
    pub tables: Vec<Table>,
    pub total_capacity: u32,
    pub booking_fee_per_person: f64,
}
