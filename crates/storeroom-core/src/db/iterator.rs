//! Forward-only streaming over inventory rows.

use std::collections::VecDeque;

use rusqlite::{params_from_iter, types::Value, Connection, Statement};

use super::items::{item_from_row, ITEM_COLUMNS};
use crate::{
    error::{DatabaseResultExt, InventoryError, Result},
    models::Item,
};

/// Rows fetched per round trip unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: u32 = 256;

/// Streams items matching an optional filter, one at a time, in id order.
///
/// Rows are pulled from the store in batches keyed on the last id seen, so
/// memory use is bounded by the batch size rather than the table size. The
/// sequence is single-pass and cannot be restarted.
///
/// # Examples
///
/// ```rust
/// use rusqlite::types::Value;
/// use storeroom_core::db::{Database, ItemIterator};
///
/// # fn main() -> storeroom_core::Result<()> {
/// let db = Database::open_in_memory()?;
/// let mut iter = ItemIterator::new(
///     db.connection(),
///     "WHERE status = ?",
///     vec![Value::Text("Operational".into())],
/// )?;
/// while let Some(item) = iter.next_item()? {
///     println!("{} {}", item.id, item.description);
/// }
/// iter.close()?;
/// # Ok(())
/// # }
/// ```
pub struct ItemIterator<'conn> {
    statement: Option<Statement<'conn>>,
    args: Vec<Value>,
    buffered: VecDeque<Result<Item>>,
    last_id: Option<u64>,
    batch_size: u32,
    exhausted: bool,
}

impl<'conn> ItemIterator<'conn> {
    /// Prepares an iterator over the rows matching `filter`.
    ///
    /// `filter` is either empty, for every row, or a predicate such as
    /// `"status = ? AND location LIKE ?"` whose `?` placeholders are bound
    /// to `args` in order. A leading `WHERE` is accepted.
    ///
    /// # Errors
    ///
    /// The first batch is fetched here, so a malformed predicate or a wrong
    /// number of arguments fails immediately with `InventoryError::Database`.
    pub fn new(conn: &'conn Connection, filter: &str, args: Vec<Value>) -> Result<Self> {
        Self::with_batch_size(conn, filter, args, DEFAULT_BATCH_SIZE)
    }

    /// Like [`ItemIterator::new`] with a custom batch size.
    pub fn with_batch_size(
        conn: &'conn Connection,
        filter: &str,
        args: Vec<Value>,
        batch_size: u32,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(InventoryError::invalid_input("batch_size").with_reason("must be at least 1"));
        }

        let sql = build_query(filter);
        let statement = conn
            .prepare(&sql)
            .db_context_lazy(|| format!("Failed to prepare iterator query for filter '{filter}'"))?;

        let mut iter = Self {
            statement: Some(statement),
            args,
            buffered: VecDeque::new(),
            last_id: None,
            batch_size,
            exhausted: false,
        };
        iter.fill()?;
        Ok(iter)
    }

    /// Advances by one row.
    ///
    /// `Ok(None)` means the rows are exhausted (or the iterator was closed).
    /// A row that cannot be decoded is returned as an error and ends the
    /// stream.
    pub fn next_item(&mut self) -> Result<Option<Item>> {
        loop {
            if let Some(next) = self.buffered.pop_front() {
                return next.map(Some);
            }
            if self.exhausted || self.statement.is_none() {
                return Ok(None);
            }
            self.fill()?;
        }
    }

    /// Releases the prepared statement and any buffered rows. Safe to call
    /// more than once and before any row was read.
    pub fn close(&mut self) -> Result<()> {
        self.buffered.clear();
        self.exhausted = true;
        match self.statement.take() {
            Some(statement) => statement
                .finalize()
                .db_context("Failed to release iterator statement"),
            None => Ok(()),
        }
    }

    fn fill(&mut self) -> Result<()> {
        let Some(statement) = self.statement.as_mut() else {
            self.exhausted = true;
            return Ok(());
        };

        let after = self.last_id.map_or(i64::MIN, |id| i64::try_from(id).unwrap_or(i64::MAX));
        let tail = [Value::Integer(after), Value::Integer(i64::from(self.batch_size))];
        let mut rows = statement
            .query(params_from_iter(self.args.iter().chain(tail.iter())))
            .db_context("Failed to run iterator query")?;

        let mut fetched = 0;
        while let Some(row) = rows.next().db_context("Failed to step iterator cursor")? {
            fetched += 1;
            match item_from_row(row) {
                Ok(item) => {
                    self.last_id = Some(item.id);
                    self.buffered.push_back(Ok(item));
                }
                Err(e) => {
                    // The keyset cannot move past a row it failed to read.
                    self.buffered
                        .push_back(Err(InventoryError::database("Failed to decode iterator row").with_source(e)));
                    self.exhausted = true;
                    return Ok(());
                }
            }
        }

        if fetched < self.batch_size {
            self.exhausted = true;
        }
        Ok(())
    }
}

impl Iterator for ItemIterator<'_> {
    type Item = Result<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_item().transpose()
    }
}

/// Strips an optional leading `WHERE` keyword.
fn predicate(filter: &str) -> &str {
    let trimmed = filter.trim();
    match trimmed.get(..5) {
        Some(head)
            if head.eq_ignore_ascii_case("where") && trimmed[5..].starts_with(char::is_whitespace) =>
        {
            trimmed[5..].trim_start()
        }
        _ => trimmed,
    }
}

// Caller placeholders come first in the text, so they bind to `args` before
// the keyset and limit parameters appended here.
fn build_query(filter: &str) -> String {
    match predicate(filter) {
        "" => format!("SELECT {ITEM_COLUMNS} FROM inventory WHERE id > ? ORDER BY id LIMIT ?"),
        predicate => format!(
            "SELECT {ITEM_COLUMNS} FROM inventory WHERE ({predicate}) AND id > ? ORDER BY id LIMIT ?"
        ),
    }
}
