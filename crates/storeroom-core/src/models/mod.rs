//! Data models for inventory records.
//!
//! The crate has a single entity, [`Item`]. Its `remarks` field is an
//! append-only audit log whose entries are stamped by [`format_remarks`].
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use storeroom_core::{clock::FixedClock, models::Item};
//! use jiff::{civil::date, tz::TimeZone};
//!
//! let clock = FixedClock::new(
//!     date(2025, 6, 21).at(15, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap(),
//! );
//! let item = Item::new("UPS", "Rack 1", "Operational", "installed UPS");
//! assert_eq!(item.format_remarks(&clock), "[2025-06-21 15:00] installed UPS");
//! ```

pub mod filters;
pub mod item;
pub mod remarks;

#[cfg(test)]
mod tests;

pub use filters::ItemFilter;
pub use item::Item;
pub use remarks::{format_entry, format_remarks, has_timestamp_prefix, stamp_entry};
