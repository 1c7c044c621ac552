//! JSON codec.
//!
//! Whole-table documents are arrays of item objects with lowercase keys,
//! pretty-printed with two-space indentation. A single object is accepted on
//! import as well.

use std::io::{Read, Write};

use serde::Deserialize;

use crate::{error::Result, models::Item};

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Item>),
    One(Item),
}

impl From<Document> for Vec<Item> {
    fn from(document: Document) -> Self {
        match document {
            Document::Many(items) => items,
            Document::One(item) => vec![item],
        }
    }
}

/// Writes `items` as a pretty-printed JSON array.
pub fn write_items<W: Write>(writer: W, items: &[Item]) -> Result<()> {
    serde_json::to_writer_pretty(writer, items)?;
    Ok(())
}

/// Renders `items` as a pretty-printed JSON array.
pub fn items_to_string(items: &[Item]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Parses an array of items, or a single item object.
pub fn read_items<R: Read>(reader: R) -> Result<Vec<Item>> {
    let document: Document = serde_json::from_reader(reader)?;
    Ok(document.into())
}

/// Parses an array of items, or a single item object, from a string.
pub fn items_from_str(input: &str) -> Result<Vec<Item>> {
    let document: Document = serde_json::from_str(input)?;
    Ok(document.into())
}

/// Renders one item as a pretty-printed JSON object.
pub fn item_to_json(item: &Item) -> Result<String> {
    Ok(serde_json::to_string_pretty(item)?)
}

/// Parses one item object. Missing fields default to empty, and a missing
/// id to `0`.
pub fn item_from_json(input: &str) -> Result<Item> {
    Ok(serde_json::from_str(input)?)
}

/// Re-indents any JSON document for display.
pub fn pretty_print(input: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
