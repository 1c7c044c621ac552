//! Handler functions shared by every front end.
//!
//! Each handler takes an [`Inventory`] and a parameter struct from
//! [`crate::params`], runs one complete workflow, and returns domain objects
//! or display wrappers. Front ends only parse arguments and render.
//!
//! ```text
//! CLI args → params → handler → Inventory → db
//! ```
//!
//! Query handlers return `Option` for a missing item; command handlers return
//! the stored item so the caller can confirm what was written.

use std::{
    io::{Read, Write},
    path::Path,
};

use log::info;
use rusqlite::types::Value;

use crate::{
    display::{Items, Transfer, TransferResult},
    error::{InventoryError, Result},
    interchange::{json, Format},
    models::{Item, ItemFilter},
    params::{
        AppendRemark, CreateItem, DeleteItem, EditItem, ExportItems, FindItems, Id, ImportItems,
        ListItems, ReplaceItem,
    },
    Inventory,
};

/// Adds an item with a store-assigned ID and returns it as stored.
///
/// # Examples
///
/// ```rust
/// # use storeroom_core::{handlers::handle_add_item, params::CreateItem, InventoryBuilder};
/// # fn main() -> storeroom_core::Result<()> {
/// let mut inventory = InventoryBuilder::new().in_memory().build()?;
/// let params = CreateItem {
///     description: "UPS".to_string(),
///     location: "Rack 1".to_string(),
///     status: "Operational".to_string(),
///     remarks: "installed".to_string(),
/// };
/// let item = handle_add_item(&mut inventory, &params)?;
/// assert_eq!(item.id, 1001);
/// assert!(item.remarks.ends_with("] installed"));
/// # Ok(())
/// # }
/// ```
pub fn handle_add_item(inventory: &mut Inventory, params: &CreateItem) -> Result<Item> {
    inventory.with_transaction(|session| {
        let id = session.add_item(&Item::from(params))?;
        session.get_item(id)
    })
}

/// Inserts or replaces the item under `params.id` and returns it as stored.
pub fn handle_append_item(inventory: &mut Inventory, params: &ReplaceItem) -> Result<Item> {
    inventory.with_transaction(|session| {
        session.append_item(&Item::from(params))?;
        session.get_item(params.id)
    })
}

/// Applies the set fields of `params` to an existing item.
///
/// Returns `None` if the item does not exist. The read, merge and write run
/// in one transaction.
pub fn handle_edit_item(inventory: &mut Inventory, params: &EditItem) -> Result<Option<Item>> {
    inventory.with_transaction(|session| {
        let current = match session.get_item(params.id) {
            Ok(item) => item,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };
        session.edit_item(&params.apply_to(&current))?;
        session.get_item(params.id).map(Some)
    })
}

/// Appends one audit entry and returns the updated item.
///
/// # Errors
///
/// Returns `InventoryError::ItemNotFound` if the item does not exist.
pub fn handle_append_remark(inventory: &mut Inventory, params: &AppendRemark) -> Result<Item> {
    inventory.with_transaction(|session| {
        session.append_remarks_entry(params.id, &params.message)?;
        session.get_item(params.id)
    })
}

/// Deletes an item and returns what was deleted, or `None` if it did not
/// exist.
///
/// # Errors
///
/// Returns `InventoryError::InvalidInput` unless `params.confirmed` is set.
pub fn handle_delete_item(inventory: &mut Inventory, params: &DeleteItem) -> Result<Option<Item>> {
    if !params.confirmed {
        return Err(InventoryError::invalid_input("confirmed")
            .with_reason(format!("deleting item {} must be confirmed", params.id)));
    }

    inventory.with_transaction(|session| match session.get_item(params.id) {
        Ok(item) => {
            session.delete_item(item.id)?;
            Ok(Some(item))
        }
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    })
}

/// Fetches one item, or `None` if it does not exist.
pub fn handle_show_item(inventory: &Inventory, params: &Id) -> Result<Option<Item>> {
    match inventory.get_item(params.id) {
        Ok(item) => Ok(Some(item)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Lists items in ID order, either all of them or one page.
pub fn handle_list_items(inventory: &Inventory, params: &ListItems) -> Result<Items> {
    let items = match params.limit {
        Some(limit) => inventory.list_paged(params.after_id, limit)?,
        None if params.after_id == 0 => inventory.list_all()?,
        None => inventory
            .iter("id > ?", vec![Value::Integer(i64::try_from(params.after_id).unwrap_or(i64::MAX))])?
            .collect::<Result<Vec<_>>>()?,
    };
    Ok(Items(items))
}

/// Streams the items matching every set field of `params`.
///
/// # Examples
///
/// ```rust
/// # use storeroom_core::{handlers::handle_find_items, params::FindItems, InventoryBuilder, Item};
/// # fn main() -> storeroom_core::Result<()> {
/// let mut inventory = InventoryBuilder::new().in_memory().build()?;
/// inventory.add_item(&Item::new("UPS", "Rack 1", "Operational", ""))?;
/// inventory.add_item(&Item::new("Inverter", "Warehouse 1", "Spare", ""))?;
///
/// let params = FindItems {
///     location: Some("rack".to_string()),
///     ..Default::default()
/// };
/// let found = handle_find_items(&inventory, &params)?;
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].description, "UPS");
/// # Ok(())
/// # }
/// ```
pub fn handle_find_items(inventory: &Inventory, params: &FindItems) -> Result<Items> {
    let (predicate, args) = ItemFilter::from(params).to_predicate();
    let mut iter = inventory.iter(&predicate, args)?;
    let items = iter.by_ref().collect::<Result<Vec<_>>>()?;
    iter.close()?;
    Ok(Items(items))
}

/// Resets the ID sequence to the configured floor and returns the floor.
pub fn handle_reset_sequence(inventory: &mut Inventory) -> Result<u64> {
    inventory.reset_sequence()?;
    let floor = inventory.database().index_start();
    info!("id sequence reset to {floor}");
    Ok(floor)
}

/// Exports every item to `params.path`, or to `stdout` when no path is set.
pub fn handle_export_items<W: Write>(
    inventory: &Inventory,
    params: &ExportItems,
    stdout: W,
) -> Result<TransferResult> {
    let count = match (&params.path, params.format) {
        (Some(path), Format::Csv) => inventory.export_csv_file(path)?,
        (Some(path), Format::Json) => inventory.export_json_file(path)?,
        (None, format) => inventory.export(format, stdout)?,
    };
    Ok(TransferResult {
        direction: Transfer::Export,
        format: params.format,
        count,
        target: params.path.as_deref().map(display_path),
    })
}

/// Imports every record from `params.path`, or from `stdin` when no path is
/// set. Nothing is written if any record fails.
pub fn handle_import_items<R: Read>(
    inventory: &mut Inventory,
    params: &ImportItems,
    stdin: R,
) -> Result<TransferResult> {
    let count = match (&params.path, params.format) {
        (Some(path), Format::Csv) => inventory.import_csv_file(path)?,
        (Some(path), Format::Json) => inventory.import_json_file(path)?,
        (None, format) => inventory.import(format, stdin)?,
    };
    Ok(TransferResult {
        direction: Transfer::Import,
        format: params.format,
        count,
        target: params.path.as_deref().map(display_path),
    })
}

/// Re-indents an arbitrary JSON document for reading.
pub fn handle_view_json(input: &str) -> Result<String> {
    json::pretty_print(input)
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
