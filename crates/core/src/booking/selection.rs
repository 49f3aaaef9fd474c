//! Table allocation for a party.
//!
//! Users pick tables one at a time against a party-size hint. A soft
//! heuristic keeps the combined capacity within [`CAPACITY_SLACK`] seats of
//! the requested guest count; exceeding it rejects the addition with an
//! advisory outcome rather than an error. Changing the guest count clears
//! the whole selection so a stale over/under-capacity pick can never survive
//! a party-size edit.

use std::collections::BTreeMap;

use crate::models::restaurant::{Table, TableLocation};

/// Seats the combined capacity may exceed the guest count by.
pub const CAPACITY_SLACK: u32 = 2;

/// Outcome of a toggle. Rejections leave the selection unchanged and are
/// surfaced to the user as a warning, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    RejectedOverCapacity { selected: u32, attempted: u32 },
}

/// In-memory selection of tables for one booking draft.
///
/// Tables are unique by id and kept in selection order.
#[derive(Debug, Clone, Default)]
pub struct TableSelection {
    number_of_guests: u32,
    tables: Vec<Table>,
}

impl TableSelection {
    pub fn new(number_of_guests: u32) -> Self {
        Self {
            number_of_guests,
            tables: Vec::new(),
        }
    }

    pub fn number_of_guests(&self) -> u32 {
        self.number_of_guests
    }

    /// Replaces the guest count and clears the selection.
    pub fn set_guests(&mut self, number_of_guests: u32) {
        self.number_of_guests = number_of_guests;
        self.tables.clear();
    }

    /// Adds `table` to the selection, or removes it if already selected.
    pub fn toggle(&mut self, table: &Table) -> Toggle {
        if let Some(pos) = self.tables.iter().position(|t| t.id == table.id) {
            self.tables.remove(pos);
            return Toggle::Removed;
        }

        let attempted = self.selected_capacity() + table.capacity;
        if attempted > self.number_of_guests + CAPACITY_SLACK {
            return Toggle::RejectedOverCapacity {
                selected: self.selected_capacity(),
                attempted,
            };
        }

        self.tables.push(table.clone());
        Toggle::Added
    }

    pub fn selected_capacity(&self) -> u32 {
        self.tables.iter().map(|t| t.capacity).sum()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the selected tables seat the whole party.
    pub fn covers_party(&self) -> bool {
        self.number_of_guests > 0 && self.selected_capacity() >= self.number_of_guests
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

/// Groups tables by seating area for presentation. Grouping has no effect
/// on selection logic.
pub fn group_by_location(tables: &[Table]) -> BTreeMap<TableLocation, Vec<&Table>> {
    let mut grouped: BTreeMap<TableLocation, Vec<&Table>> = BTreeMap::new();
    for table in tables {
        grouped.entry(table.location).or_default().push(table);
    }
    grouped
}
