use regex::Regex;
use storeroom_core::{models::format_remarks, InventoryBuilder, InventoryError, Item};

mod common;
use common::{fixed_clock, memory_inventory, open_file_inventory, seed, ENTRY_PATTERN};

#[test]
fn test_add_then_list_scenario() {
    let mut inventory = memory_inventory();
    inventory
        .add_item(&Item::new("UPS", "Rack 1", "Operational", "installed"))
        .unwrap();

    let items = inventory.list_all().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1001);
    let pattern = Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}\] installed$").unwrap();
    assert!(pattern.is_match(&items[0].remarks), "{}", items[0].remarks);
}

#[test]
fn test_append_entry_scenario() {
    let mut inventory = memory_inventory();
    let id = inventory
        .add_item(&Item::new("UPS", "Rack 1", "Operational", "installed"))
        .unwrap();
    let original = inventory.get_item(id).unwrap().remarks;

    inventory.append_remarks_entry(id, "replaced battery").unwrap();

    let remarks = inventory.get_item(id).unwrap().remarks;
    let (first, second) = remarks.split_once('\n').expect("two entries");
    assert_eq!(first, original);
    let pattern = Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}\] replaced battery$").unwrap();
    assert!(pattern.is_match(second), "{second}");
}

#[test]
fn test_paged_scenario() {
    let mut inventory = memory_inventory();
    seed(&mut inventory);

    let page = inventory.list_paged(0, 3).unwrap();
    let ids: Vec<u64> = page.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1001, 1002, 1003]);

    assert!(inventory.list_paged(9999, 5).unwrap().is_empty());
}

#[test]
fn test_append_only_growth() {
    let mut inventory = memory_inventory();
    let id = inventory.add_item(&Item::new("Switch", "Rack 2", "Operational", "")).unwrap();

    // The first entry comes from the blank initial remarks.
    let messages: Vec<String> = (1..=6).map(|n| format!("check {n}")).collect();
    for message in &messages {
        inventory.append_remarks_entry(id, message).unwrap();
    }

    let item = inventory.get_item(id).unwrap();
    let entries: Vec<&str> = item.remarks.split('\n').collect();
    assert_eq!(entries.len(), messages.len() + 1);

    let stamp = Regex::new(ENTRY_PATTERN).unwrap();
    for (entry, message) in entries[1..].iter().zip(&messages) {
        assert!(stamp.is_match(entry), "{entry}");
        assert!(entry.ends_with(message.as_str()));
    }
}

#[test]
fn test_multi_line_messages_add_one_entry_each() {
    let mut inventory = memory_inventory();
    let id = inventory.add_item(&Item::new("UPS", "Rack 1", "Operational", "installed")).unwrap();

    inventory
        .append_remarks_entry(id, "checked\n[1999-01-01 00:00] backdated line")
        .unwrap();
    let mut item = inventory.get_item(id).unwrap();
    item.remarks = "moved\r\nunstamped tail".to_string();
    inventory.edit_item(&item).unwrap();

    let remarks = inventory.get_item(id).unwrap().remarks;
    let entries: Vec<&str> = remarks.split('\n').collect();
    assert_eq!(entries.len(), 3, "{remarks}");

    let stamp = Regex::new(ENTRY_PATTERN).unwrap();
    assert!(entries.iter().all(|entry| stamp.is_match(entry)), "{remarks}");
    assert!(entries.iter().all(|entry| entry.starts_with("[2025-06-21 14:30]")));
    assert!(entries[1].ends_with("checked [1999-01-01 00:00] backdated line"));
}

#[test]
fn test_edit_replaces_fields_and_appends_remarks() {
    let mut inventory = memory_inventory();
    let id = inventory
        .add_item(&Item::new("UPS", "Rack 1", "Operational", "installed"))
        .unwrap();

    let changed = inventory
        .edit_item(&Item::new("UPS 2kVA", "Rack 3", "Faulty", "fan noise").with_id(id))
        .unwrap();
    assert_eq!(changed, 1);

    let item = inventory.get_item(id).unwrap();
    assert_eq!(item.description, "UPS 2kVA");
    assert_eq!(item.location, "Rack 3");
    assert_eq!(item.status, "Faulty");
    assert_eq!(
        item.remarks,
        "[2025-06-21 14:30] installed\n[2025-06-21 14:30] fan noise"
    );
}

#[test]
fn test_append_item_replaces_history() {
    let mut inventory = memory_inventory();
    let id = inventory
        .add_item(&Item::new("UPS", "Rack 1", "Operational", "installed"))
        .unwrap();
    inventory.append_remarks_entry(id, "checked").unwrap();

    inventory
        .append_item(&Item::new("UPS", "Rack 1", "Retired", "decommissioned").with_id(id))
        .unwrap();

    let item = inventory.get_item(id).unwrap();
    assert_eq!(item.status, "Retired");
    assert_eq!(item.remarks, "[2025-06-21 14:30] decommissioned");
}

#[test]
fn test_append_item_keeps_stamped_remarks_verbatim() {
    let mut inventory = memory_inventory();
    let remarks = "[2020-01-01 00:00] bought\n[2021-01-01 00:00] moved";
    inventory
        .append_item(&Item::new("Rack", "Room 2", "Operational", remarks).with_id(42))
        .unwrap();
    assert_eq!(inventory.get_item(42).unwrap().remarks, remarks);
    assert_eq!(format_remarks(remarks, &fixed_clock()), remarks);
}

#[test]
fn test_not_found_asymmetry() {
    let mut inventory = memory_inventory();
    assert_eq!(inventory.delete_item(4242).unwrap(), 0);
    assert_eq!(inventory.edit_item(&Item::default().with_id(4242)).unwrap(), 0);

    let err = inventory.append_remarks_entry(4242, "hello").unwrap_err();
    assert!(matches!(err, InventoryError::ItemNotFound { id: 4242 }));
}

#[test]
fn test_reset_after_clearing_restarts_at_floor() {
    let mut inventory = memory_inventory();
    let ids = seed(&mut inventory);
    for id in ids {
        inventory.delete_item(id).unwrap();
    }

    inventory.reset_sequence().unwrap();
    inventory.reset_sequence().unwrap();
    assert_eq!(inventory.current_sequence().unwrap(), Some(1000));

    assert_eq!(inventory.add_item(&Item::new("UPS", "", "", "")).unwrap(), 1001);
}

#[test]
fn test_grouped_writes_roll_back_together() {
    let mut inventory = memory_inventory();
    seed(&mut inventory);

    let result = inventory.with_transaction(|session| {
        session.delete_item(1001)?;
        session.add_item(&Item::new("Replacement", "Rack 1", "Operational", ""))?;
        session.append_item(&Item::new("bad", "", "", ""))
    });

    assert!(matches!(result, Err(InventoryError::InvalidInput { .. })));
    assert_eq!(inventory.count().unwrap(), 5);
    assert!(inventory.get_item(1001).is_ok());
    assert!(inventory.get_item(1006).unwrap_err().is_not_found());
}

#[test]
fn test_file_store_survives_reopen() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let mut inventory = open_file_inventory(&temp_dir);
    let id = inventory.add_item(&Item::new("UPS", "Rack 1", "Operational", "installed")).unwrap();
    inventory.close().unwrap();

    let mut inventory = open_file_inventory(&temp_dir);
    assert_eq!(inventory.get_item(id).unwrap().description, "UPS");
    assert_eq!(inventory.add_item(&Item::new("Inverter", "", "", "")).unwrap(), 1002);
}

#[test]
fn test_builder_creates_missing_directories() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("deeper").join("inventory.db");

    let inventory = InventoryBuilder::new()
        .with_database_path(Some(&path))
        .with_clock(fixed_clock())
        .build()
        .unwrap();
    assert!(path.exists());
    assert_eq!(inventory.count().unwrap(), 0);
}

#[test]
fn test_builder_rejects_unknown_time_zone() {
    let err = InventoryBuilder::new()
        .in_memory()
        .with_time_zone(Some("Mars/Olympus_Mons"))
        .build()
        .err()
        .expect("unknown zone should fail");
    assert!(matches!(err, InventoryError::Configuration { .. }));
}

#[test]
fn test_find_through_iterator() {
    let mut inventory = memory_inventory();
    seed(&mut inventory);

    let spares: Vec<Item> = inventory
        .iter("status = ?", vec![rusqlite::types::Value::Text("Spare".into())])
        .unwrap()
        .collect::<storeroom_core::Result<_>>()
        .unwrap();
    let names: Vec<&str> = spares.iter().map(|item| item.description.as_str()).collect();
    assert_eq!(names, vec!["Inverter", "Battery pack"]);
}
