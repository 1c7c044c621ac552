//! Core library for the Storeroom inventory tool.
//!
//! Inventory items live in a single SQLite table. Each item carries a
//! `remarks` field that works as an append-only audit log: every change adds
//! a line stamped `[YYYY-MM-DD HH:MM]`, and committed lines are never lost.
//!
//! The crate is layered:
//!
//! - [`db`]: the store handle, transactions, record operations and the
//!   streaming [`ItemIterator`]
//! - [`inventory`]: the [`Inventory`] facade that pairs a store with a
//!   [`Clock`](clock::Clock)
//! - [`interchange`]: CSV and JSON import/export
//! - [`params`], [`handlers`] and [`display`]: the front-end-neutral layer
//!   used by the `sr` binary
//!
//! # Quick Start
//!
//! ```rust
//! use storeroom_core::{display::Items, InventoryBuilder, Item};
//!
//! # fn main() -> storeroom_core::Result<()> {
//! let mut inventory = InventoryBuilder::new().in_memory().build()?;
//!
//! let id = inventory.add_item(&Item::new("UPS", "Rack 1", "Operational", "installed"))?;
//! inventory.append_remarks_entry(id, "replaced battery")?;
//!
//! let page = inventory.list_paged(0, 10)?;
//! println!("{}", Items(page));
//!
//! let mut csv = Vec::new();
//! inventory.export_csv(&mut csv)?;
//! assert!(String::from_utf8_lossy(&csv).starts_with("id,description,location,status,remarks"));
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod db;
pub mod display;
pub mod error;
pub mod handlers;
pub mod interchange;
pub mod inventory;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::{Database, Executor, ItemIterator};
pub use display::{CreateResult, DeleteResult, Items, OperationStatus, TransferResult, UpdateResult};
pub use error::{InventoryError, Result};
pub use interchange::Format;
pub use inventory::{Inventory, InventoryBuilder, Session};
pub use models::{Item, ItemFilter};
pub use params::{
    AppendRemark, CreateItem, DeleteItem, EditItem, ExportItems, FindItems, Id, ImportItems,
    ListItems, ReplaceItem,
};
