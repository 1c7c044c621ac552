use std::fs;

use storeroom_core::{interchange::json, Format, InventoryError, Item};

mod common;
use common::{memory_inventory, seed};

fn emptied_copy_target() -> storeroom_core::Inventory {
    let mut target = memory_inventory();
    // Advance and clear the target so it is "emptied" rather than pristine.
    let id = target.add_item(&Item::new("scratch", "", "", "")).unwrap();
    target.delete_item(id).unwrap();
    assert_eq!(target.count().unwrap(), 0);
    target
}

#[test]
fn test_csv_round_trip_into_emptied_store() {
    let mut source = memory_inventory();
    seed(&mut source);
    source.append_remarks_entry(1004, "back from repair").unwrap();

    let mut buffer = Vec::new();
    assert_eq!(source.export_csv(&mut buffer).unwrap(), 5);

    let mut target = emptied_copy_target();
    assert_eq!(target.import_csv(buffer.as_slice()).unwrap(), 5);
    assert_eq!(target.list_all().unwrap(), source.list_all().unwrap());
}

#[test]
fn test_json_round_trip_through_string() {
    let mut source = memory_inventory();
    seed(&mut source);

    let document = source.export_json_string().unwrap();
    assert!(document.starts_with("[\n  {"));

    let mut target = emptied_copy_target();
    assert_eq!(target.import_json_str(&document).unwrap(), 5);
    assert_eq!(target.list_all().unwrap(), source.list_all().unwrap());
}

#[test]
fn test_round_trip_through_files() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("items.csv");
    let json_path = temp_dir.path().join("items.json");

    let mut source = memory_inventory();
    seed(&mut source);
    assert_eq!(source.export_csv_file(&csv_path).unwrap(), 5);
    assert_eq!(source.export_json_file(&json_path).unwrap(), 5);

    let header = fs::read_to_string(&csv_path).unwrap();
    assert!(header.starts_with("id,description,location,status,remarks\n1001,UPS,Rack 1,"));

    let mut from_csv = memory_inventory();
    from_csv.import_csv_file(&csv_path).unwrap();
    let mut from_json = memory_inventory();
    from_json.import_json_file(&json_path).unwrap();

    let expected = source.list_all().unwrap();
    assert_eq!(from_csv.list_all().unwrap(), expected);
    assert_eq!(from_json.list_all().unwrap(), expected);
}

#[test]
fn test_import_without_ids_assigns_new_ones() {
    let mut inventory = memory_inventory();
    let input = "id,description,location,status,remarks\n,UPS,Rack 1,Operational,installed\n,Inverter,Warehouse 1,Spare,\n";
    assert_eq!(inventory.import(Format::Csv, input.as_bytes()).unwrap(), 2);

    let items = inventory.list_all().unwrap();
    assert_eq!(items[0].id, 1001);
    assert_eq!(items[0].remarks, "[2025-06-21 14:30] installed");
    assert_eq!(items[1].id, 1002);
    assert_eq!(items[1].remarks, "[2025-06-21 14:30] ");
}

#[test]
fn test_malformed_csv_aborts_whole_import() {
    let mut inventory = memory_inventory();
    seed(&mut inventory);
    let before = inventory.list_all().unwrap();

    let input = "id,description,location,status,remarks\n1001,Changed,Rack 9,Retired,gone\n,Extra,Rack 1\n";
    let err = inventory.import_csv(input.as_bytes()).unwrap_err();
    assert!(matches!(err, InventoryError::Csv { .. }));
    assert_eq!(inventory.list_all().unwrap(), before);
}

#[test]
fn test_failing_record_rolls_back_earlier_ones() {
    let mut inventory = memory_inventory();
    seed(&mut inventory);
    let before = inventory.list_all().unwrap();

    // A non-numeric id fails to parse, so nothing is written.
    let input = "id,description,location,status,remarks\n1001,Changed,Rack 9,Retired,gone\nabc,Bad,,,\n";
    assert!(inventory.import_csv(input.as_bytes()).is_err());
    assert_eq!(inventory.list_all().unwrap(), before);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let mut inventory = memory_inventory();
    let err = inventory.import_json_str("[{\"id\": 1, ").unwrap_err();
    assert!(matches!(err, InventoryError::Serialization { .. }));
    assert_eq!(inventory.count().unwrap(), 0);
}

#[test]
fn test_json_single_object_import() {
    let mut inventory = memory_inventory();
    let item = Item::new("UPS", "Rack 1", "Operational", "[2025-01-01 10:00] installed").with_id(77);
    let document = json::item_to_json(&item).unwrap();

    assert_eq!(inventory.import_json(document.as_bytes()).unwrap(), 1);
    assert_eq!(inventory.get_item(77).unwrap(), item);
}

#[test]
fn test_export_empty_store() {
    let inventory = memory_inventory();

    let mut csv = Vec::new();
    assert_eq!(inventory.export(Format::Csv, &mut csv).unwrap(), 0);
    assert_eq!(String::from_utf8(csv).unwrap(), "id,description,location,status,remarks\n");

    let mut json_out = Vec::new();
    assert_eq!(inventory.export(Format::Json, &mut json_out).unwrap(), 0);
    assert_eq!(String::from_utf8(json_out).unwrap(), "[]");
}

#[test]
fn test_import_missing_file_is_filesystem_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut inventory = memory_inventory();
    let err = inventory
        .import_csv_file(temp_dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(matches!(err, InventoryError::FileSystem { .. }));
}
