//! Import and export on the inventory facade.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::info;

use super::{Inventory, Session};
use crate::{
    error::{InventoryError, Result},
    interchange::{self, csv, json, Format},
    models::Item,
};

fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| InventoryError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| InventoryError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })
}

impl Session<'_> {
    /// Writes imported records: rows without an id are added, the rest are
    /// inserted or replaced by id.
    pub fn import_items(&self, records: &[Item]) -> Result<usize> {
        interchange::import_items(self.tx, self.clock, records)
    }
}

impl Inventory {
    /// Writes `records` in one transaction; see [`Session::import_items`].
    pub fn import_items(&mut self, records: &[Item]) -> Result<usize> {
        self.with_transaction(|session| session.import_items(records))
    }

    /// Streams every item to `writer` in the given format.
    pub fn export<W: Write>(&self, format: Format, writer: W) -> Result<usize> {
        match format {
            Format::Csv => self.export_csv(writer),
            Format::Json => self.export_json(writer),
        }
    }

    /// Parses `reader` in the given format and imports every record, all or
    /// nothing.
    pub fn import<R: Read>(&mut self, format: Format, reader: R) -> Result<usize> {
        let records = match format {
            Format::Csv => csv::read_items(reader)?,
            Format::Json => json::read_items(reader)?,
        };
        self.import_items(&records)
    }

    /// Writes every item as CSV, streaming rows through an iterator.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut rows = self.iter("", Vec::new())?;
        let count = csv::write_items(writer, &mut rows)?;
        rows.close()?;
        Ok(count)
    }

    /// Writes every item as CSV to the file at `path`.
    pub fn export_csv_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let count = self.export_csv(create_file(path)?)?;
        info!("exported {count} items to {}", path.display());
        Ok(count)
    }

    /// Imports a CSV document. A malformed row aborts before anything is
    /// written.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        self.import(Format::Csv, reader)
    }

    /// Imports the CSV file at `path`.
    pub fn import_csv_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let count = self.import_csv(BufReader::new(open_file(path)?))?;
        info!("imported {count} items from {}", path.display());
        Ok(count)
    }

    /// Writes every item as a JSON array.
    pub fn export_json<W: Write>(&self, writer: W) -> Result<usize> {
        let records = self.list_all()?;
        json::write_items(writer, &records)?;
        Ok(records.len())
    }

    /// Writes every item as a JSON array to the file at `path`.
    pub fn export_json_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(create_file(path)?);
        let count = self.export_json(&mut writer)?;
        writer.flush().map_err(|e| InventoryError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!("exported {count} items to {}", path.display());
        Ok(count)
    }

    /// Every item as a pretty-printed JSON array.
    pub fn export_json_string(&self) -> Result<String> {
        json::items_to_string(&self.list_all()?)
    }

    /// Imports a JSON array (or single object).
    pub fn import_json<R: Read>(&mut self, reader: R) -> Result<usize> {
        self.import(Format::Json, reader)
    }

    /// Imports the JSON file at `path`.
    pub fn import_json_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let count = self.import_json(BufReader::new(open_file(path)?))?;
        info!("imported {count} items from {}", path.display());
        Ok(count)
    }

    /// Imports a JSON array (or single object) held in a string.
    pub fn import_json_str(&mut self, input: &str) -> Result<usize> {
        let records = json::items_from_str(input)?;
        self.import_items(&records)
    }
}
