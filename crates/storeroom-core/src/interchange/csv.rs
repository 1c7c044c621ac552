//! CSV codec.

use std::io::{Read, Write};

use serde::Deserialize;

use super::CSV_HEADER;
use crate::{
    error::{InventoryError, Result},
    models::Item,
};

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: Option<u64>,
    description: String,
    location: String,
    status: String,
    remarks: String,
}

impl From<CsvRow> for Item {
    fn from(row: CsvRow) -> Self {
        Item {
            id: row.id.unwrap_or_default(),
            description: row.description,
            location: row.location,
            status: row.status,
            remarks: row.remarks,
        }
    }
}

/// Writes the header and one row per item. Accepts anything yielding
/// `Result<Item>`, including an [`crate::db::ItemIterator`], so rows are
/// streamed rather than collected. Returns the number of rows written.
pub fn write_items<W, I>(writer: W, items: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Result<Item>>,
{
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)
        .map_err(|e| InventoryError::csv("Failed to write CSV header", e))?;

    let mut count = 0;
    for item in items {
        let item = item?;
        let id = item.id.to_string();
        wtr.write_record([
            id.as_str(),
            item.description.as_str(),
            item.location.as_str(),
            item.status.as_str(),
            item.remarks.as_str(),
        ])
        .map_err(|e| InventoryError::csv(format!("Failed to write CSV row for item {}", item.id), e))?;
        count += 1;
    }

    wtr.flush()
        .map_err(|e| InventoryError::csv("Failed to flush CSV output", e.into()))?;
    Ok(count)
}

/// Parses every row of a CSV document with the standard header.
///
/// An empty `id` field means "assign one". Any row whose column count
/// differs from the header fails the whole parse.
pub fn read_items<R: Read>(reader: R) -> Result<Vec<Item>> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let header_len = rdr
        .headers()
        .map_err(|e| InventoryError::csv("Failed to read CSV header", e))?
        .len();
    if header_len != CSV_HEADER.len() {
        return Err(InventoryError::invalid_input("csv header").with_reason(format!(
            "expected {} columns ({}), found {header_len}",
            CSV_HEADER.len(),
            CSV_HEADER.join(",")
        )));
    }

    rdr.deserialize::<CsvRow>()
        .map(|row| {
            row.map(Item::from)
                .map_err(|e| InventoryError::csv("Failed to read CSV record", e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_items_always_emits_header() {
        let mut out = Vec::new();
        let count = write_items(&mut out, Vec::<Result<Item>>::new()).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "id,description,location,status,remarks\n");
    }

    #[test]
    fn test_multiline_remarks_are_quoted() {
        let item = Item {
            id: 1001,
            description: "UPS, 3kVA".to_string(),
            location: "Rack 1".to_string(),
            status: "Operational".to_string(),
            remarks: "[2025-06-21 14:30] installed\n[2025-06-22 09:00] replaced battery".to_string(),
        };
        let mut out = Vec::new();
        write_items(&mut out, vec![Ok(item.clone())]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"UPS, 3kVA\""));
        assert_eq!(read_items(text.as_bytes()).unwrap(), vec![item]);
    }

    #[test]
    fn test_empty_id_reads_as_unassigned() {
        let input = "id,description,location,status,remarks\n,Inverter,Warehouse 1,Spare,\n";
        let items = read_items(input.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 0);
        assert_eq!(items[0].description, "Inverter");
    }

    #[test]
    fn test_short_row_fails_parse() {
        let input = "id,description,location,status,remarks\n1001,UPS,Rack 1,Operational,ok\n1002,Broken\n";
        let err = read_items(input.as_bytes()).unwrap_err();
        assert!(matches!(err, InventoryError::Csv { .. }));
    }

    #[test]
    fn test_wrong_header_width_is_rejected() {
        let input = "id,description\n1,UPS\n";
        let err = read_items(input.as_bytes()).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidInput { .. }));
    }
}
