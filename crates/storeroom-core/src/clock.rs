//! Time sources for audit stamps.
//!
//! Every remarks entry is stamped with the wall time of a [`Clock`]. The
//! clock is injected rather than read directly so tests can pin the time.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp, Zoned};

use crate::error::{InventoryError, Result};

/// Format used for remarks stamps: `YYYY-MM-DD HH:MM`.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A source of the current wall time.
pub trait Clock: Send + Sync {
    /// Returns the current time in the clock's time zone.
    fn now(&self) -> Zoned;
}

/// Formats a zoned time the way remarks stamps are written.
pub fn format_timestamp(time: &Zoned) -> String {
    time.strftime(STAMP_FORMAT).to_string()
}

/// Wall clock in a fixed time zone.
#[derive(Clone)]
pub struct SystemClock {
    time_zone: TimeZone,
}

impl SystemClock {
    /// Wall clock in the system time zone.
    pub fn new() -> Self {
        Self {
            time_zone: TimeZone::system(),
        }
    }

    /// Wall clock in the given time zone.
    pub fn with_time_zone(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// Wall clock in the IANA time zone called `name`, e.g. `Asia/Kolkata`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Configuration` if the name is not known to the
    /// time zone database.
    pub fn with_time_zone_name(name: &str) -> Result<Self> {
        let time_zone = TimeZone::get(name).map_err(|e| InventoryError::Configuration {
            message: format!("Unknown time zone '{name}': {e}"),
        })?;
        Ok(Self::with_time_zone(time_zone))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SystemClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClock")
            .field("time_zone", &self.time_zone.iana_name().unwrap_or("<unnamed>"))
            .finish()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Timestamp::now().to_zoned(self.time_zone.clone())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: Zoned,
}

impl FixedClock {
    pub fn new(time: Zoned) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.time.clone()
    }
}
