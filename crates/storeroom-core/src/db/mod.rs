//! SQLite store handle and record access.
//!
//! [`Database`] owns the single connection, guarantees the schema and the id
//! sequence exist, and provides the transaction boundary through
//! [`Database::execute`]. Record operations in [`items`] are free functions
//! over the [`Executor`] trait so they run the same way against the raw
//! connection or an open transaction.
//!
//! Concurrency is left to SQLite's own locking. The busy timeout is not
//! changed and failed writes are not retried.

use std::path::Path;

use log::{debug, warn};
use rusqlite::{Connection, Transaction};

use crate::error::{DatabaseResultExt, InventoryError, Result};

pub mod executor;
pub mod items;
pub mod iterator;
pub mod migrations;

pub use executor::Executor;
pub use iterator::ItemIterator;

/// Path marker that opens an ephemeral in-memory store.
pub const MEMORY_MARKER: &str = ":memory:";

/// Default floor of the id sequence; the first assigned id is one above it.
pub const DEFAULT_INDEX_START: u64 = 1000;

/// Database connection and transaction handler.
pub struct Database {
    connection: Connection,
    index_start: u64,
}

impl Database {
    /// Opens or creates the store at `path` with the default sequence floor.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Bootstrap` if the file cannot be opened or
    /// the schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_floor(path, DEFAULT_INDEX_START)
    }

    /// Opens or creates the store at `path`, seeding a new id sequence at
    /// `index_start`. An existing sequence is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidInput` if `index_start` does not fit a
    /// SQLite row id, and `InventoryError::Bootstrap` if the store cannot be
    /// opened.
    pub fn open_with_floor<P: AsRef<Path>>(path: P, index_start: u64) -> Result<Self> {
        if i64::try_from(index_start).is_err() {
            return Err(InventoryError::invalid_input("index_start")
                .with_reason(format!("must not exceed {}", i64::MAX)));
        }
        let path = path.as_ref();
        let connection = if path == Path::new(MEMORY_MARKER) {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
        .map_err(|e| {
            InventoryError::bootstrap(
                format!("failed to open database at '{}'", path.display()),
                e,
            )
        })?;

        debug!("opened store at {}", path.display());
        Self::from_connection(connection, index_start)
    }

    /// Opens an ephemeral in-memory store with the default sequence floor.
    pub fn open_in_memory() -> Result<Self> {
        Self::open_with_floor(MEMORY_MARKER, DEFAULT_INDEX_START)
    }

    fn from_connection(connection: Connection, index_start: u64) -> Result<Self> {
        let db = Self {
            connection,
            index_start,
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// The configured floor of the id sequence.
    pub fn index_start(&self) -> u64 {
        self.index_start
    }

    /// The underlying connection, for reads.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Runs `f` inside a transaction.
    ///
    /// The transaction is committed if `f` succeeds. If `f` fails it is
    /// rolled back and `f`'s error is returned, so none of its writes are
    /// visible afterwards.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::TransactionBegin` or
    /// `InventoryError::TransactionCommit` when the transaction itself
    /// fails, otherwise whatever `f` returns.
    pub fn execute<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let tx = self
            .connection
            .transaction()
            .map_err(|source| InventoryError::TransactionBegin { source })?;

        match f(&tx) {
            Ok(value) => {
                tx.commit()
                    .map_err(|source| InventoryError::TransactionCommit { source })?;
                debug!("transaction committed");
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!("rollback after '{err}' failed: {rollback_err}");
                } else {
                    debug!("transaction rolled back: {err}");
                }
                Err(err)
            }
        }
    }

    /// Closes the connection. Consuming `self` means it can only happen
    /// once; dropping the handle closes it as well.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| e)
            .db_context("Failed to close database")
    }
}
