#![allow(dead_code)]

use jiff::{civil::date, tz::TimeZone};
use storeroom_core::{FixedClock, Inventory, InventoryBuilder, Item};
use tempfile::TempDir;

/// Timestamp pattern of a single audit entry.
pub const ENTRY_PATTERN: &str = r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}\] ";

/// A clock pinned to 2025-06-21 14:30 UTC.
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(
        date(2025, 6, 21)
            .at(14, 30, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid test time"),
    )
}

/// Helper function to create an in-memory inventory with a fixed clock
pub fn memory_inventory() -> Inventory {
    InventoryBuilder::new()
        .in_memory()
        .with_clock(fixed_clock())
        .build()
        .expect("Failed to create in-memory inventory")
}

/// Helper function to create a file-backed inventory in a fresh directory
pub fn file_inventory() -> (TempDir, Inventory) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let inventory = open_file_inventory(&temp_dir);
    (temp_dir, inventory)
}

/// Opens (or reopens) the store inside `temp_dir`
pub fn open_file_inventory(temp_dir: &TempDir) -> Inventory {
    InventoryBuilder::new()
        .with_database_path(Some(temp_dir.path().join("storeroom.db")))
        .with_clock(fixed_clock())
        .build()
        .expect("Failed to open file inventory")
}

/// Five distinct unsaved items
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("UPS", "Rack 1", "Operational", "installed"),
        Item::new("Inverter", "Warehouse 1", "Spare", ""),
        Item::new("Patch panel", "Rack 2", "Operational", "24 ports, \"cat6\""),
        Item::new("Switch", "Rack 2", "Faulty", "port 7 dead\nsent for repair"),
        Item::new("Battery pack", "Warehouse 2", "Spare", "[2024-12-01 08:00] received"),
    ]
}

/// Adds every sample item and returns the assigned ids
pub fn seed(inventory: &mut Inventory) -> Vec<u64> {
    sample_items()
        .iter()
        .map(|item| inventory.add_item(item).expect("Failed to add sample item"))
        .collect()
}
