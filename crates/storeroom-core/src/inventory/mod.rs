//! High-level inventory API bound to one owned connection.
//!
//! [`Inventory`] wraps a [`Database`] and a [`Clock`]. Every mutating method
//! runs in its own transaction; reads go straight to the connection. Use
//! [`Inventory::with_transaction`] to group several writes so they commit or
//! roll back together.
//!
//! # Examples
//!
//! ```rust
//! use storeroom_core::{InventoryBuilder, Item};
//!
//! # fn main() -> storeroom_core::Result<()> {
//! let mut inventory = InventoryBuilder::new().in_memory().build()?;
//!
//! let id = inventory.add_item(&Item::new("UPS", "Rack 1", "Operational", "installed"))?;
//! assert_eq!(id, 1001);
//!
//! inventory.append_remarks_entry(id, "replaced battery")?;
//! assert_eq!(inventory.get_item(id)?.remark_entries().count(), 2);
//!
//! inventory.with_transaction(|session| {
//!     session.add_item(&Item::new("Inverter", "Warehouse 1", "Spare", ""))?;
//!     session.delete_item(id)?;
//!     Ok(())
//! })?;
//! assert_eq!(inventory.count()?, 1);
//! # Ok(())
//! # }
//! ```

use rusqlite::{types::Value, Transaction};

pub mod builder;
pub mod interchange;


pub use builder::InventoryBuilder;

use crate::{
    clock::Clock,
    db::{items, Database, ItemIterator},
    error::Result,
    models::Item,
};

/// Inventory records bound to one store connection.
pub struct Inventory {
    db: Database,
    clock: Box<dyn Clock>,
}

impl Inventory {
    /// Creates an inventory over an open database.
    pub fn new(db: Database, clock: Box<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// The underlying store handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// The clock used to stamp remarks.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Runs `f` in one transaction. Every write made through the session
    /// commits together, or none of them does if `f` fails.
    pub fn with_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Session<'_>) -> Result<T>,
    {
        let clock = self.clock.as_ref();
        let index_start = self.db.index_start();
        self.db.execute(|tx| {
            f(&Session {
                tx,
                clock,
                index_start,
            })
        })
    }

    /// Adds an item with a store-assigned id and returns the id.
    pub fn add_item(&mut self, item: &Item) -> Result<u64> {
        self.with_transaction(|session| session.add_item(item))
    }

    /// Inserts or replaces the item under its own id.
    pub fn append_item(&mut self, item: &Item) -> Result<()> {
        self.with_transaction(|session| session.append_item(item))
    }

    /// Replaces the item's fields and appends its remarks as a new entry.
    /// Returns the number of rows changed; `0` means the id does not exist.
    pub fn edit_item(&mut self, item: &Item) -> Result<usize> {
        self.with_transaction(|session| session.edit_item(item))
    }

    /// Appends one stamped entry to the item's remarks.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::ItemNotFound` if the id does not exist.
    pub fn append_remarks_entry(&mut self, id: u64, message: &str) -> Result<()> {
        self.with_transaction(|session| session.append_remarks_entry(id, message))
    }

    /// Deletes the item. Returns the number of rows removed.
    pub fn delete_item(&mut self, id: u64) -> Result<usize> {
        self.with_transaction(|session| session.delete_item(id))
    }

    /// Resets the id sequence to the configured floor.
    pub fn reset_sequence(&mut self) -> Result<()> {
        self.with_transaction(|session| session.reset_sequence())
    }

    /// Fetches one item.
    pub fn get_item(&self, id: u64) -> Result<Item> {
        items::get_item(self.db.connection(), id)
    }

    /// All items ordered by id.
    pub fn list_all(&self) -> Result<Vec<Item>> {
        items::list_all(self.db.connection())
    }

    /// Up to `limit` items with ids above `after_id`.
    pub fn list_paged(&self, after_id: u64, limit: u32) -> Result<Vec<Item>> {
        items::list_paged(self.db.connection(), after_id, limit)
    }

    /// Number of stored items.
    pub fn count(&self) -> Result<u64> {
        items::count_items(self.db.connection())
    }

    /// Current value of the id sequence.
    pub fn current_sequence(&self) -> Result<Option<u64>> {
        items::current_sequence(self.db.connection())
    }

    /// Streams the items matching `filter`; see [`ItemIterator::new`].
    pub fn iter(&self, filter: &str, args: Vec<Value>) -> Result<ItemIterator<'_>> {
        ItemIterator::new(self.db.connection(), filter, args)
    }

    /// Closes the underlying connection.
    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}

/// Record operations bound to an open transaction.
pub struct Session<'a> {
    tx: &'a Transaction<'a>,
    clock: &'a dyn Clock,
    index_start: u64,
}

impl Session<'_> {
    /// The raw transaction, for statements not covered here.
    pub fn transaction(&self) -> &Transaction<'_> {
        self.tx
    }

    pub fn add_item(&self, item: &Item) -> Result<u64> {
        items::add_item(self.tx, self.clock, item)
    }

    pub fn append_item(&self, item: &Item) -> Result<()> {
        items::append_item(self.tx, self.clock, item)
    }

    pub fn edit_item(&self, item: &Item) -> Result<usize> {
        items::edit_item(self.tx, self.clock, item)
    }

    pub fn append_remarks_entry(&self, id: u64, message: &str) -> Result<()> {
        items::append_remarks_entry(self.tx, self.clock, id, message)
    }

    pub fn delete_item(&self, id: u64) -> Result<usize> {
        items::delete_item(self.tx, id)
    }

    pub fn reset_sequence(&self) -> Result<()> {
        items::reset_sequence(self.tx, self.index_start)
    }

    /// Reads see writes made earlier in the same transaction.
    pub fn get_item(&self, id: u64) -> Result<Item> {
        items::get_item(self.tx, id)
    }

    pub fn list_all(&self) -> Result<Vec<Item>> {
        items::list_all(self.tx)
    }
}
