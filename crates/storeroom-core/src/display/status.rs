//! Status messages for operations that do not return an item.

use std::fmt;

use crate::interchange::Format;

/// A one-line success or failure message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

/// Direction of a bulk transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Import,
    Export,
}

/// Outcome of an import or export: how many items moved, in which format,
/// and from or to where.
pub struct TransferResult {
    pub direction: Transfer,
    pub format: Format,
    pub count: usize,
    /// File path, or `None` for standard input/output
    pub target: Option<String>,
}

impl fmt::Display for TransferResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, preposition) = match self.direction {
            Transfer::Import => ("Imported", "from"),
            Transfer::Export => ("Exported", "to"),
        };
        let noun = if self.count == 1 { "item" } else { "items" };
        write!(f, "{verb} {} {noun} as {}", self.count, self.format.as_str().to_uppercase())?;
        match &self.target {
            Some(target) => writeln!(f, " {preposition} {target}"),
            None => writeln!(f),
        }
    }
}
