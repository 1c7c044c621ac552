//! Display implementations for domain models.
//!
//! Items render as markdown: a header with the ID and description, a short
//! metadata list, then the audit log with one bullet per entry.

use std::fmt;

use crate::models::Item;

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.description)?;
        writeln!(f)?;
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f)?;

        let mut entries = self.remark_entries().peekable();
        if entries.peek().is_some() {
            writeln!(f, "#### Remarks")?;
            writeln!(f)?;
            for entry in entries {
                writeln!(f, "- {entry}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
