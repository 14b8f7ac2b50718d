//! Notices
//!
//! Transient toast messages describing what the last action did.

use shopping_store::{Change, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

/// Text of a notice before it is given an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeText {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl NoticeText {
    fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    /// Notice for a change, if the change deserves one.
    ///
    /// Purchases are visible in the row itself and get no notice.
    pub fn for_change(change: &Change) -> Option<Self> {
        let text = match change {
            Change::ListCreated { store_name, .. } => Self::info(
                "Shopping list created!",
                format!("Created shopping list for {}", store_name),
            ),
            Change::ItemAdded { name, .. } => {
                Self::info("Item added!", format!("Added {} to your shopping list", name))
            }
            Change::PurchasedToggled { .. } => return None,
            Change::MovedToNextToggled { moved: true, .. } => Self::info(
                "Item moved to next week",
                "Item has been scheduled for next week's shopping",
            ),
            Change::MovedToNextToggled { moved: false, .. } => Self::info(
                "Item back on this trip",
                "Item is no longer scheduled for next week",
            ),
            Change::ItemRemoved { .. } => {
                Self::info("Item removed", "Item has been removed from your shopping list")
            }
            Change::ListDeleted { .. } => {
                Self::info("Shopping list deleted", "Shopping list has been removed")
            }
        };
        Some(text)
    }

    /// Notice for a rejected action. Only user-facing errors get one.
    pub fn for_error(error: &StoreError) -> Option<Self> {
        match error {
            StoreError::EmptyStoreName => Some(Self {
                title: "Store name required".to_string(),
                description: "Please enter a store name to create a shopping list.".to_string(),
                variant: NoticeVariant::Destructive,
            }),
            _ => None,
        }
    }

    pub fn with_id(self, id: u32) -> Notice {
        Notice {
            id,
            title: self.title,
            description: self.description,
            variant: self.variant,
        }
    }
}
