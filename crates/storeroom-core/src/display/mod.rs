//! Markdown formatting for items and operation results.
//!
//! [`Item`](crate::models::Item) implements [`std::fmt::Display`] directly
//! (see [`models`]). Lists and operation outcomes are wrapped in the newtypes
//! re-exported here so every front end prints the same text:
//!
//! ```rust
//! use storeroom_core::{display::{CreateResult, OperationStatus}, models::Item};
//!
//! let item = Item::new("UPS", "Rack 1", "Operational", "").with_id(1001);
//! assert!(CreateResult::new(item).to_string().contains("Added item with ID: 1001"));
//!
//! let status = OperationStatus::success("Sequence reset to 1000");
//! assert_eq!(status.to_string(), "Success: Sequence reset to 1000\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Items;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, Transfer, TransferResult};
