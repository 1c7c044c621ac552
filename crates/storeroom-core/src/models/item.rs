//! Inventory item definition.

use serde::{Deserialize, Serialize};

use super::remarks::format_remarks;
use crate::clock::Clock;

/// One inventory record.
///
/// `id` is assigned by the store; `0` means the item has not been stored
/// yet. `remarks` holds newline-separated audit entries of the form
/// `[YYYY-MM-DD HH:MM] message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Store-assigned identifier, `0` before insertion
    #[serde(default)]
    pub id: u64,

    /// What the item is
    #[serde(default)]
    pub description: String,

    /// Where the item is kept
    #[serde(default)]
    pub location: String,

    /// Free-form condition, e.g. "Operational"
    #[serde(default)]
    pub status: String,

    /// Append-only audit log
    #[serde(default)]
    pub remarks: String,
}

impl Item {
    /// Creates an unsaved item.
    pub fn new(
        description: impl Into<String>,
        location: impl Into<String>,
        status: impl Into<String>,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            description: description.into(),
            location: location.into(),
            status: status.into(),
            remarks: remarks.into(),
        }
    }

    /// Sets the id, for insert-or-replace writes that target a known row.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// The remarks field as it would be stored: stamped unless it already
    /// starts with a stamp.
    pub fn format_remarks(&self, clock: &dyn Clock) -> String {
        format_remarks(&self.remarks, clock)
    }

    /// Iterates over the non-blank entries of the audit log, oldest first.
    pub fn remark_entries(&self) -> impl Iterator<Item = &str> {
        self.remarks
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
    }
}
