//! Error types for the inventory library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all inventory operations.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The store could not be opened or its schema could not be created.
    /// Callers are expected to treat this as fatal.
    #[error("Failed to bootstrap store: {message}")]
    Bootstrap {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Database query or write errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Item not found for the given ID
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: u64 },
    /// A transaction could not be started
    #[error("Failed to begin transaction: {source}")]
    TransactionBegin { source: rusqlite::Error },
    /// A transaction could not be committed
    #[error("Failed to commit transaction: {source}")]
    TransactionCommit { source: rusqlite::Error },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// JSON serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// CSV reading or writing errors
    #[error("CSV error: {message}: {source}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> InventoryError {
        InventoryError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> InventoryError {
        InventoryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl InventoryError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a bootstrap error for a failed open or schema step.
    pub fn bootstrap(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Bootstrap {
            message: message.into(),
            source,
        }
    }

    /// Wraps a CSV error with the step that produced it.
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Returns true when the error means the requested item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;

    /// Map database errors with a lazily built message, for messages that
    /// carry an id or other runtime detail.
    fn db_context_lazy<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| InventoryError::database(message).with_source(e))
    }

    fn db_context_lazy<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| InventoryError::database(f()).with_source(e))
    }
}

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
