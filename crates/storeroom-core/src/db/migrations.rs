//! Database schema initialization.

use log::warn;
use rusqlite::params;

use crate::error::{InventoryError, Result};

const CREATE_INVENTORY_SQL: &str = "CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT,
    location TEXT,
    status TEXT,
    remarks TEXT
)";

// Only seeds the counter when the table has none, so reopening a store never
// rewinds it.
const INIT_SEQUENCE_SQL: &str = "INSERT INTO sqlite_sequence (name, seq)
    SELECT 'inventory', ?1
    WHERE NOT EXISTS (SELECT 1 FROM sqlite_sequence WHERE name = 'inventory')";

impl super::Database {
    /// Creates the inventory table and seeds the id sequence.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute(CREATE_INVENTORY_SQL, [])
            .map_err(|e| InventoryError::bootstrap("failed to create inventory table", e))?;

        // A missing counter only changes where ids start, so the store stays
        // usable.
        if let Err(e) = self
            .connection
            .execute(INIT_SEQUENCE_SQL, params![self.index_start])
        {
            warn!("could not initialize id sequence: {e}");
        }

        Ok(())
    }
}
