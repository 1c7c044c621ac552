//! Builder for creating and configuring Inventory instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Inventory;
use crate::{
    clock::{Clock, SystemClock},
    db::{Database, DEFAULT_INDEX_START, MEMORY_MARKER},
    error::{InventoryError, Result},
};

/// Builder for creating and configuring Inventory instances.
pub struct InventoryBuilder {
    database_path: Option<PathBuf>,
    index_start: u64,
    time_zone: Option<String>,
    clock: Option<Box<dyn Clock>>,
}

impl InventoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            index_start: DEFAULT_INDEX_START,
            time_zone: None,
            clock: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/storeroom/storeroom.db` or
    /// `~/.local/share/storeroom/storeroom.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an ephemeral in-memory store.
    pub fn in_memory(mut self) -> Self {
        self.database_path = Some(PathBuf::from(MEMORY_MARKER));
        self
    }

    /// Sets the floor of the id sequence for a new store. The first
    /// auto-assigned id is `index_start + 1`.
    pub fn with_index_start(mut self, index_start: u64) -> Self {
        self.index_start = index_start;
        self
    }

    /// Stamps remarks in the named IANA time zone instead of the system one.
    pub fn with_time_zone(mut self, name: Option<impl Into<String>>) -> Self {
        self.time_zone = name.map(Into::into);
        self
    }

    /// Uses `clock` for remarks stamps. Takes precedence over
    /// [`InventoryBuilder::with_time_zone`].
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Builds the configured inventory.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::FileSystem` if the database directory cannot
    /// be created, `InventoryError::Configuration` for an unknown time zone
    /// and `InventoryError::Bootstrap` if the store cannot be opened.
    pub fn build(self) -> Result<Inventory> {
        let clock: Box<dyn Clock> = match (self.clock, self.time_zone) {
            (Some(clock), _) => clock,
            (None, Some(name)) => Box::new(SystemClock::with_time_zone_name(&name)?),
            (None, None) => Box::new(SystemClock::new()),
        };

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if db_path != Path::new(MEMORY_MARKER) {
            if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| InventoryError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        debug!("opening inventory at {}", db_path.display());
        let db = Database::open_with_floor(&db_path, self.index_start)?;
        Ok(Inventory::new(db, clock))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("storeroom")
            .place_data_file("storeroom.db")
            .map_err(|e| InventoryError::XdgDirectory(e.to_string()))
    }
}

impl Default for InventoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
