//! Item CRUD operations and queries.
//!
//! Writes take any [`Executor`], so they can run standalone or inside
//! [`super::Database::execute`]. Reads take a [`Connection`]; an open
//! transaction derefs to one and sees its own uncommitted writes.
//!
//! Remarks are only ever extended by [`edit_item`] and
//! [`append_remarks_entry`]. Both append with a single `UPDATE` whose
//! expression reads the current column value, so two appends to the same row
//! can never lose a committed line.

use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::Executor;
use crate::{
    clock::Clock,
    error::{DatabaseResultExt, InventoryError, Result},
    models::{format_entry, Item},
};

pub(crate) const ITEM_COLUMNS: &str = "id, description, location, status, remarks";

const INSERT_ITEM_SQL: &str =
    "INSERT INTO inventory (description, location, status, remarks) VALUES (?1, ?2, ?3, ?4)";
const UPSERT_ITEM_SQL: &str = "INSERT OR REPLACE INTO inventory (id, description, location, status, remarks) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_FIELDS_SQL: &str =
    "UPDATE inventory SET description = ?2, location = ?3, status = ?4 WHERE id = ?1";
const UPDATE_FIELDS_APPEND_SQL: &str = "UPDATE inventory SET description = ?2, location = ?3, status = ?4, remarks = CASE WHEN remarks IS NULL OR remarks = '' THEN ?5 ELSE remarks || char(10) || ?5 END WHERE id = ?1";
const APPEND_REMARKS_SQL: &str = "UPDATE inventory SET remarks = CASE WHEN remarks IS NULL OR remarks = '' THEN ?2 ELSE remarks || char(10) || ?2 END WHERE id = ?1";
const DELETE_ITEM_SQL: &str = "DELETE FROM inventory WHERE id = ?1";
const RESET_SEQUENCE_SQL: &str = "UPDATE sqlite_sequence SET seq = ?1 WHERE name = 'inventory'";
const INSERT_SEQUENCE_SQL: &str = "INSERT INTO sqlite_sequence (name, seq) VALUES ('inventory', ?1)";
const SELECT_SEQUENCE_SQL: &str = "SELECT seq FROM sqlite_sequence WHERE name = 'inventory'";
const COUNT_ITEMS_SQL: &str = "SELECT COUNT(*) FROM inventory";

/// Builds an [`Item`] from a row selected with [`ITEM_COLUMNS`]. `NULL` text
/// columns come back as empty strings.
pub(crate) fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get::<_, u64>(0)?,
        description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        location: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        status: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        remarks: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

fn require_id(id: u64) -> Result<i64> {
    if id == 0 {
        return Err(InventoryError::invalid_input("id").with_reason("an explicit id above 0 is required"));
    }
    row_id(id)
}

/// Converts an item id to SQLite's signed row id.
pub(crate) fn row_id(id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|_| {
        InventoryError::invalid_input("id").with_reason(format!("{id} exceeds the largest row id {}", i64::MAX))
    })
}

/// Inserts `item` with a store-assigned id and returns that id. The item's
/// own id is ignored.
pub fn add_item<E: Executor + ?Sized>(exec: &E, clock: &dyn Clock, item: &Item) -> Result<u64> {
    exec.exec(
        INSERT_ITEM_SQL,
        params![
            item.description,
            item.location,
            item.status,
            item.format_remarks(clock)
        ],
    )
    .db_context("Failed to insert item")?;

    let id = exec.last_insert_rowid() as u64;
    debug!("inserted item {id}");
    Ok(id)
}

/// Inserts `item` under its own id, replacing any row with that id.
///
/// The stored remarks are `item.remarks` passed through
/// [`format_remarks`]; the history of a replaced row is not kept.
pub fn append_item<E: Executor + ?Sized>(exec: &E, clock: &dyn Clock, item: &Item) -> Result<()> {
    let id = require_id(item.id)?;
    exec.exec(
        UPSERT_ITEM_SQL,
        params![
            id,
            item.description,
            item.location,
            item.status,
            item.format_remarks(clock)
        ],
    )
    .db_context_lazy(|| format!("Failed to insert or replace item {}", item.id))?;

    debug!("stored item {}", item.id);
    Ok(())
}

/// Replaces description, location and status of the item with `item.id` and
/// appends `item.remarks` as a new stamped entry.
///
/// Blank remarks append nothing. Line breaks in the remarks are folded so
/// the edit adds exactly one entry. A missing id is not an error; the
/// returned row count is `0` in that case.
pub fn edit_item<E: Executor + ?Sized>(exec: &E, clock: &dyn Clock, item: &Item) -> Result<usize> {
    let id = row_id(item.id)?;
    let changed = if item.remarks.trim().is_empty() {
        exec.exec(
            UPDATE_FIELDS_SQL,
            params![id, item.description, item.location, item.status],
        )
    } else {
        exec.exec(
            UPDATE_FIELDS_APPEND_SQL,
            params![
                id,
                item.description,
                item.location,
                item.status,
                format_entry(&item.remarks, clock)
            ],
        )
    }
    .db_context_lazy(|| format!("Failed to update item {}", item.id))?;

    debug!("edited item {} ({changed} row(s))", item.id);
    Ok(changed)
}

/// Appends one stamped entry to the remarks of item `id`, leaving every other
/// field alone.
///
/// # Errors
///
/// Returns `InventoryError::ItemNotFound` when no item has that id. Unlike
/// [`edit_item`] and [`delete_item`], an audit entry must land on a real
/// record.
pub fn append_remarks_entry<E: Executor + ?Sized>(
    exec: &E,
    clock: &dyn Clock,
    id: u64,
    message: &str,
) -> Result<()> {
    let row = row_id(id)?;
    let entry = format_entry(message, clock);
    let changed = exec
        .exec(APPEND_REMARKS_SQL, params![row, entry])
        .db_context_lazy(|| format!("Failed to append remarks to item {id}"))?;

    if changed == 0 {
        return Err(InventoryError::ItemNotFound { id });
    }
    debug!("appended remarks entry to item {id}");
    Ok(())
}

/// Deletes item `id`. Deleting a missing id is a no-op; the returned row
/// count is `0` in that case.
pub fn delete_item<E: Executor + ?Sized>(exec: &E, id: u64) -> Result<usize> {
    let changed = exec
        .exec(DELETE_ITEM_SQL, params![row_id(id)?])
        .db_context_lazy(|| format!("Failed to delete item {id}"))?;
    debug!("deleted item {id} ({changed} row(s))");
    Ok(changed)
}

/// Sets the id sequence back to `floor`, recreating the counter if it has
/// gone missing. SQLite still never hands out an id at or below the highest
/// remaining one.
pub fn reset_sequence<E: Executor + ?Sized>(exec: &E, floor: u64) -> Result<()> {
    let floor = row_id(floor)?;
    let changed = exec
        .exec(RESET_SEQUENCE_SQL, params![floor])
        .db_context("Failed to reset id sequence")?;
    if changed == 0 {
        exec.exec(INSERT_SEQUENCE_SQL, params![floor])
            .db_context("Failed to recreate id sequence")?;
    }
    debug!("id sequence reset to {floor}");
    Ok(())
}

/// Fetches item `id`.
///
/// # Errors
///
/// Returns `InventoryError::ItemNotFound` when no item has that id and
/// `InventoryError::Database` when the query itself fails.
pub fn get_item(conn: &Connection, id: u64) -> Result<Item> {
    conn.query_row(
        &format!("SELECT {ITEM_COLUMNS} FROM inventory WHERE id = ?1"),
        params![row_id(id)?],
        item_from_row,
    )
    .optional()
    .db_context_lazy(|| format!("Failed to query item {id}"))?
    .ok_or(InventoryError::ItemNotFound { id })
}

/// All items ordered by id. An empty table gives an empty vector.
pub fn list_all(conn: &Connection) -> Result<Vec<Item>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {ITEM_COLUMNS} FROM inventory ORDER BY id"))
        .db_context("Failed to prepare item listing")?;

    let items = stmt
        .query_map([], item_from_row)
        .db_context("Failed to list items")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read item row")?;
    Ok(items)
}

/// Up to `limit` items with an id above `after_id`, ordered by id.
///
/// Pass the last id of one page as `after_id` to get the next. Running past
/// the end gives an empty vector. A `limit` of `0` is rejected.
pub fn list_paged(conn: &Connection, after_id: u64, limit: u32) -> Result<Vec<Item>> {
    if limit == 0 {
        return Err(InventoryError::invalid_input("limit").with_reason("page size must be at least 1"));
    }
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory WHERE id > ?1 ORDER BY id LIMIT ?2"
        ))
        .db_context("Failed to prepare paged listing")?;

    // Stored ids never exceed i64::MAX.
    let after = i64::try_from(after_id).unwrap_or(i64::MAX);
    let items = stmt
        .query_map(params![after, limit], item_from_row)
        .db_context_lazy(|| format!("Failed to list items after {after_id}"))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read item row")?;
    Ok(items)
}

/// Number of stored items.
pub fn count_items(conn: &Connection) -> Result<u64> {
    conn.query_row(COUNT_ITEMS_SQL, [], |row| row.get::<_, i64>(0))
        .map(|count| count as u64)
        .db_context("Failed to count items")
}

/// Current value of the id sequence, or `None` if no counter row exists.
pub fn current_sequence(conn: &Connection) -> Result<Option<u64>> {
    conn.query_row(SELECT_SEQUENCE_SQL, [], |row| row.get::<_, i64>(0))
        .optional()
        .map(|seq| seq.map(|value| value as u64))
        .db_context("Failed to read id sequence")
}
