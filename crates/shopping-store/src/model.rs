//! Shopping Models
//!
//! Lists, items, and the identifiers that name them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a shopping list. Never reused within a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub u32);

/// Identifier of an item. Never reused within a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an item stands on the current trip.
///
/// Purchased and moved-to-next are mutually exclusive, so they share one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Pending,
    Purchased,
    MovedToNext,
}

/// A single entry on a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub notes: Option<String>,
    pub status: ItemStatus,
}

impl ShoppingItem {
    pub fn purchased(&self) -> bool {
        self.status == ItemStatus::Purchased
    }

    pub fn moved_to_next(&self) -> bool {
        self.status == ItemStatus::MovedToNext
    }

    /// Flip the purchased flag. Returns the new value.
    pub fn toggle_purchased(&mut self) -> bool {
        self.status = if self.purchased() { ItemStatus::Pending } else { ItemStatus::Purchased };
        self.purchased()
    }

    /// Flip the moved-to-next flag. Returns the new value.
    pub fn toggle_moved_to_next(&mut self) -> bool {
        self.status = if self.moved_to_next() { ItemStatus::Pending } else { ItemStatus::MovedToNext };
        self.moved_to_next()
    }
}

/// A named (by store) collection of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ListId,
    pub store_name: String,
    /// Insertion order
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn item(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut ShoppingItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn progress(&self) -> ListProgress {
        ListProgress {
            purchased: self.items.iter().filter(|item| item.purchased()).count(),
            total: self.items.len(),
        }
    }
}

/// Purchased vs. total item counts for a list header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListProgress {
    pub purchased: usize,
    pub total: usize,
}

impl ListProgress {
    /// Completion as a fraction of 100, unrounded. Zero for an empty list.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.purchased as f64 / self.total as f64 * 100.0
        }
    }

    /// Completion rounded to a whole percent
    pub fn percent(&self) -> u32 {
        self.fraction().round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, status: ItemStatus) -> ShoppingItem {
        ShoppingItem {
            id: ItemId(id),
            name: format!("Item {}", id),
            quantity: 1,
            notes: None,
            status,
        }
    }

    #[test]
    fn test_toggle_purchased_clears_moved() {
        let mut item = make_item(1, ItemStatus::MovedToNext);
        assert!(item.toggle_purchased());
        assert!(item.purchased());
        assert!(!item.moved_to_next());

        assert!(!item.toggle_purchased());
        assert_eq!(item.status, ItemStatus::Pending);
    }

    #[test]
    fn test_toggle_moved_clears_purchased() {
        let mut item = make_item(1, ItemStatus::Purchased);
        assert!(item.toggle_moved_to_next());
        assert!(item.moved_to_next());
        assert!(!item.purchased());

        assert!(!item.toggle_moved_to_next());
        assert_eq!(item.status, ItemStatus::Pending);
    }

    #[test]
    fn test_progress() {
        let list = ShoppingList {
            id: ListId(1),
            store_name: "Target".to_string(),
            items: vec![
                make_item(2, ItemStatus::Purchased),
                make_item(3, ItemStatus::MovedToNext),
                make_item(4, ItemStatus::Pending),
            ],
            created_at: Utc::now(),
        };

        let progress = list.progress();
        assert_eq!(progress.purchased, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percent(), 33);
    }

    #[test]
    fn test_progress_empty_list_is_zero() {
        let progress = ListProgress::default();
        assert_eq!(progress.percent(), 0);
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn test_progress_rounds_half_up() {
        let progress = ListProgress { purchased: 1, total: 8 };
        // 12.5 rounds away from zero
        assert_eq!(progress.percent(), 13);
        let progress = ListProgress { purchased: 2, total: 3 };
        assert_eq!(progress.percent(), 67);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ItemStatus::MovedToNext).unwrap();
        assert_eq!(json, "\"moved_to_next\"");
    }
}
