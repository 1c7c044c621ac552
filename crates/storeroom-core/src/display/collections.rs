//! Collection wrapper types for displaying groups of items.

use std::{fmt, ops::Index};

use crate::models::Item;

/// Newtype wrapper for displaying a list of items.
///
/// # Examples
///
/// ```rust
/// use storeroom_core::{display::Items, models::Item};
///
/// let items = Items(vec![Item::new("UPS", "Rack 1", "Operational", "").with_id(1001)]);
/// assert!(items.to_string().contains("### 1001. UPS"));
/// assert_eq!(Items(vec![]).to_string(), "No items found.\n");
/// ```
pub struct Items(pub Vec<Item>);

impl Items {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Items {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Item>> for Items {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items found.")
        } else {
            for item in &self.0 {
                write!(f, "{item}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_display_in_order() {
        let items = Items(vec![
            Item::new("UPS", "Rack 1", "Operational", "").with_id(1001),
            Item::new("Inverter", "Warehouse 1", "Spare", "").with_id(1002),
        ]);
        let output = items.to_string();
        let first = output.find("### 1001. UPS").unwrap();
        let second = output.find("### 1002. Inverter").unwrap();
        assert!(first < second);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].description, "Inverter");
    }
}
