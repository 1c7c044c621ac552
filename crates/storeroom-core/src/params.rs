//! Parameter structures for inventory operations.
//!
//! These are the interface-agnostic inputs to the functions in
//! [`crate::handlers`]. Front ends define their own argument types (the CLI
//! uses clap derives) and convert into these with `From`, so the core never
//! depends on a particular argument parser.
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct ShowArgs {
//!     pub id: u64,
//! }
//!
//! impl From<ShowArgs> for Id {
//!     fn from(val: ShowArgs) -> Self {
//!         Id { id: val.id }
//!     }
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{interchange::Format, models::Item};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the item to operate on
    pub id: u64,
}

/// Parameters for adding an item with a store-assigned ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItem {
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    /// First audit entry; blank yields a bare timestamp
    #[serde(default)]
    pub remarks: String,
}

impl From<&CreateItem> for Item {
    fn from(params: &CreateItem) -> Self {
        Item::new(
            params.description.as_str(),
            params.location.as_str(),
            params.status.as_str(),
            params.remarks.as_str(),
        )
    }
}

/// Parameters for inserting or replacing an item under a known ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceItem {
    pub id: u64,
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub remarks: String,
}

impl From<&ReplaceItem> for Item {
    fn from(params: &ReplaceItem) -> Self {
        Item::new(
            params.description.as_str(),
            params.location.as_str(),
            params.status.as_str(),
            params.remarks.as_str(),
        )
        .with_id(params.id)
    }
}

/// Parameters for editing an existing item.
///
/// Fields left as `None` keep their stored value. `remarks`, when given, is
/// appended as a new audit entry rather than replacing the log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditItem {
    pub id: u64,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub remarks: Option<String>,
}

impl EditItem {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.location.is_none()
            && self.status.is_none()
            && self.remarks.as_deref().map_or(true, |r| r.trim().is_empty())
    }

    /// Merges the set fields over `current`, producing the item to pass to
    /// an edit.
    pub fn apply_to(&self, current: &Item) -> Item {
        Item {
            id: current.id,
            description: self.description.clone().unwrap_or_else(|| current.description.clone()),
            location: self.location.clone().unwrap_or_else(|| current.location.clone()),
            status: self.status.clone().unwrap_or_else(|| current.status.clone()),
            remarks: self.remarks.clone().unwrap_or_default(),
        }
    }

    /// Human-readable list of the requested changes.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(ref description) = self.description {
            changes.push(format!("Description set to '{description}'"));
        }
        if let Some(ref location) = self.location {
            changes.push(format!("Location set to '{location}'"));
        }
        if let Some(ref status) = self.status {
            changes.push(format!("Status set to '{status}'"));
        }
        if self.remarks.as_deref().is_some_and(|r| !r.trim().is_empty()) {
            changes.push("Remarks entry appended".to_string());
        }
        changes
    }
}

/// Parameters for appending one audit entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppendRemark {
    pub id: u64,
    pub message: String,
}

/// Parameters for deleting an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteItem {
    pub id: u64,
    /// Must be true for the deletion to go ahead
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing items.
///
/// With no limit every item is returned; otherwise up to `limit` items with
/// IDs above `after_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItems {
    #[serde(default)]
    pub after_id: u64,
    pub limit: Option<u32>,
}

/// Parameters for finding items by field values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindItems {
    /// Exact status
    pub status: Option<String>,
    /// Substring of the location
    pub location: Option<String>,
    /// Substring of the description
    pub description: Option<String>,
}

/// Parameters for exporting the whole store.
#[derive(Debug, Clone, Default)]
pub struct ExportItems {
    pub format: Format,
    /// Destination file; `None` writes to standard output
    pub path: Option<PathBuf>,
}

/// Parameters for importing a document into the store.
#[derive(Debug, Clone, Default)]
pub struct ImportItems {
    pub format: Format,
    /// Source file; `None` reads standard input
    pub path: Option<PathBuf>,
}
