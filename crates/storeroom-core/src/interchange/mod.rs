//! CSV and JSON interchange.
//!
//! Both formats carry the same five fields per item, in the order
//! `id, description, location, status, remarks`. Imports are all-or-nothing:
//! the input is parsed completely before anything is written, and every row
//! is then written inside one transaction. A row without an id gets a
//! store-assigned one; a row with an id inserts or replaces that id.

use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    clock::Clock,
    db::{items, Executor},
    error::{InventoryError, Result},
    models::Item,
};

pub mod csv;
pub mod json;

/// Column names of the CSV header, in order.
pub const CSV_HEADER: [&str; 5] = ["id", "description", "location", "status", "remarks"];

/// Supported interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Csv,
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(InventoryError::invalid_input("format")
                .with_reason(format!("unknown format '{other}', expected csv or json"))),
        }
    }
}

/// Writes `records` through `exec`: rows with id `0` are added, the rest are
/// inserted or replaced by id. Returns the number of rows written.
///
/// Run this inside a transaction to make the import all-or-nothing.
pub fn import_items<E: Executor + ?Sized>(
    exec: &E,
    clock: &dyn Clock,
    records: &[Item],
) -> Result<usize> {
    for (index, item) in records.iter().enumerate() {
        let written = if item.id == 0 {
            items::add_item(exec, clock, item).map(|_| ())
        } else {
            items::append_item(exec, clock, item)
        };
        if let Err(e) = written {
            debug!("import stopped at record {index}: {e}");
            return Err(e);
        }
    }
    Ok(records.len())
}
