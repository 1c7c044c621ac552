//! Filter types for querying items.

use rusqlite::types::Value;

/// Filter options for streaming items through an
/// [`ItemIterator`](crate::db::ItemIterator).
///
/// All set fields must match. An empty filter matches every item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Exact status match
    pub status: Option<String>,

    /// Case-insensitive partial match on location
    pub location_contains: Option<String>,

    /// Case-insensitive partial match on description
    pub description_contains: Option<String>,
}

impl ItemFilter {
    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.location_contains.is_none() && self.description_contains.is_none()
    }

    /// Renders the filter as a predicate and its bound arguments, in the form
    /// accepted by [`ItemIterator::new`](crate::db::ItemIterator::new).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use storeroom_core::models::ItemFilter;
    ///
    /// let filter = ItemFilter {
    ///     status: Some("Spare".to_string()),
    ///     location_contains: Some("rack".to_string()),
    ///     ..Default::default()
    /// };
    /// let (predicate, args) = filter.to_predicate();
    /// assert_eq!(predicate, "status = ? AND location LIKE ?");
    /// assert_eq!(args.len(), 2);
    /// ```
    pub fn to_predicate(&self) -> (String, Vec<Value>) {
        let mut conditions = Vec::new();
        let mut args = Vec::new();

        if let Some(ref status) = self.status {
            conditions.push("status = ?");
            args.push(Value::Text(status.clone()));
        }

        if let Some(ref location) = self.location_contains {
            conditions.push("location LIKE ?");
            args.push(Value::Text(format!("%{location}%")));
        }

        if let Some(ref description) = self.description_contains {
            conditions.push("description LIKE ?");
            args.push(Value::Text(format!("%{description}%")));
        }

        (conditions.join(" AND "), args)
    }
}

impl From<&crate::params::FindItems> for ItemFilter {
    fn from(params: &crate::params::FindItems) -> Self {
        let non_blank = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());
        Self {
            status: non_blank(&params.status),
            location_contains: non_blank(&params.location),
            description_contains: non_blank(&params.description),
        }
    }
}
