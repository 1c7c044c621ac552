use jiff::{civil::date, tz::TimeZone};

use super::*;
use crate::clock::FixedClock;

fn test_clock() -> FixedClock {
    FixedClock::new(
        date(2025, 6, 21)
            .at(14, 30, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap(),
    )
}

#[test]
fn test_format_remarks_blank_yields_bare_stamp() {
    let clock = test_clock();
    assert_eq!(format_remarks("", &clock), "[2025-06-21 14:30] ");
    assert_eq!(format_remarks("   \n\t", &clock), "[2025-06-21 14:30] ");
    assert!(format_remarks("", &clock).starts_with('['));
}

#[test]
fn test_format_remarks_stamps_plain_text() {
    let clock = test_clock();
    assert_eq!(
        format_remarks("  installed UPS  ", &clock),
        "[2025-06-21 14:30] installed UPS"
    );
}

#[test]
fn test_format_remarks_is_idempotent_for_stamped_text() {
    let clock = test_clock();
    let samples = [
        "[2020-01-01 00:00] first",
        "[1999-12-31 23:59] ",
        "[2025-06-21 14:30] installed\n[2025-06-22 09:00] replaced battery",
    ];
    for sample in samples {
        assert_eq!(format_remarks(sample, &clock), sample);
        let once = format_remarks(sample, &clock);
        assert_eq!(format_remarks(&once, &clock), once);
    }
}

#[test]
fn test_format_remarks_rejects_near_miss_stamps() {
    let clock = test_clock();
    // Seconds, single-digit fields and missing brackets are not stamps.
    for text in ["[2025-06-21 14:30:00] x", "[2025-6-21 14:30] x", "2025-06-21 14:30 x"] {
        assert!(!has_timestamp_prefix(text), "{text} should not match");
        assert_eq!(
            format_remarks(text, &clock),
            format!("[2025-06-21 14:30] {text}")
        );
    }
}

#[test]
fn test_has_timestamp_prefix_ignores_leading_whitespace() {
    assert!(has_timestamp_prefix("  [2025-06-21 14:30] installed"));
    assert!(!has_timestamp_prefix("installed [2025-06-21 14:30]"));
}

#[test]
fn test_item_format_remarks_delegates() {
    let clock = test_clock();
    let item = Item::new("UPS", "Rack 1", "Operational", "installed");
    assert_eq!(item.format_remarks(&clock), "[2025-06-21 14:30] installed");
}

#[test]
fn test_remark_entries_skip_blank_lines() {
    let item = Item {
        remarks: "[2025-06-21 14:30] installed\n\n[2025-06-22 09:00] replaced battery\n"
            .to_string(),
        ..Default::default()
    };
    let entries: Vec<&str> = item.remark_entries().collect();
    assert_eq!(
        entries,
        vec!["[2025-06-21 14:30] installed", "[2025-06-22 09:00] replaced battery"]
    );
}

#[test]
fn test_item_json_uses_lowercase_keys_and_defaults_id() {
    let item: Item =
        serde_json::from_str(r#"{"description":"UPS","location":"Rack 1","status":"Operational","remarks":""}"#)
            .unwrap();
    assert_eq!(item.id, 0);
    assert_eq!(item.description, "UPS");

    let value = serde_json::to_value(item.with_id(1001)).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 5);
    assert!(value.get("id").is_some());
    assert!(value.get("remarks").is_some());
}

#[test]
fn test_empty_filter_matches_everything() {
    let filter = ItemFilter::default();
    assert!(filter.is_empty());
    let (predicate, args) = filter.to_predicate();
    assert_eq!(predicate, "");
    assert!(args.is_empty());
}

#[test]
fn test_filter_from_find_params_drops_blank_fields() {
    let params = crate::params::FindItems {
        status: Some("Spare".to_string()),
        location: Some("  ".to_string()),
        description: Some("ups".to_string()),
    };
    let filter = ItemFilter::from(&params);
    assert_eq!(filter.location_contains, None);

    let (predicate, args) = filter.to_predicate();
    assert_eq!(predicate, "status = ? AND description LIKE ?");
    assert_eq!(
        args,
        vec![
            rusqlite::types::Value::Text("Spare".to_string()),
            rusqlite::types::Value::Text("%ups%".to_string()),
        ]
    );
}

#[test]
fn test_format_entry_folds_line_breaks() {
    let clock = test_clock();
    assert_eq!(
        format_entry("checked\r\n[1999-01-01 00:00] forged", &clock),
        "[2025-06-21 14:30] checked  [1999-01-01 00:00] forged"
    );
    assert_eq!(format_entry("replaced battery", &clock), "[2025-06-21 14:30] replaced battery");
    assert_eq!(format_entry("\n", &clock), "[2025-06-21 14:30] ");
}
