//! Checks that CLI output is exactly the core `Display` output.

use std::{path::Path, process::Command};

use storeroom_core::{display::Items, params::ListItems, handlers::handle_list_items, InventoryBuilder};
use tempfile::TempDir;

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &Path, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sr"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    assert!(output.status.success(), "sr {args:?} failed");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_item_display_consistency() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    run_cli_command(&db_path, &["add", "UPS", "-l", "Rack 1", "-s", "Operational", "-r", "installed"]);
    run_cli_command(&db_path, &["log", "1001", "replaced battery"]);
    run_cli_command(&db_path, &["add", "Inverter", "-l", "Warehouse 1", "-s", "Spare"]);

    let inventory = InventoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to open inventory");

    let show_output = run_cli_command(&db_path, &["show", "1001"]);
    assert_eq!(show_output, inventory.get_item(1001).unwrap().to_string());

    let list_output = run_cli_command(&db_path, &["list"]);
    let expected = Items(inventory.list_all().unwrap()).to_string();
    assert_eq!(list_output, expected);

    let handler_output = handle_list_items(&inventory, &ListItems::default()).unwrap();
    assert_eq!(list_output, handler_output.to_string());
}

#[test]
fn test_csv_export_matches_library_export() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    run_cli_command(&db_path, &["add", "Patch panel", "-l", "Rack 2", "-r", "24 ports, \"cat6\""]);
    run_cli_command(&db_path, &["add", "Switch", "-r", "port 7 dead"]);

    let cli_output = run_cli_command(&db_path, &["export"]);

    let inventory = InventoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .unwrap();
    let mut library_output = Vec::new();
    inventory.export_csv(&mut library_output).unwrap();

    assert_eq!(cli_output, String::from_utf8(library_output).unwrap());
}
