use thiserror::Error;

use crate::model::{ItemId, ListId};

/// Reasons an operation left the book unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store name is required")]
    EmptyStoreName,

    #[error("item name is required")]
    EmptyItemName,

    #[error("shopping list {0} does not exist")]
    UnknownList(ListId),

    #[error("item {item} does not exist in shopping list {list}")]
    UnknownItem { list: ListId, item: ItemId },
}

impl StoreError {
    /// Whether the user should be told about this rejection.
    ///
    /// Only an empty store name is surfaced; everything else is
    /// silently ignored by the UI.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, StoreError::EmptyStoreName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_store_name_is_user_facing() {
        assert!(StoreError::EmptyStoreName.is_user_facing());
        assert!(!StoreError::EmptyItemName.is_user_facing());
        assert!(!StoreError::UnknownList(ListId(7)).is_user_facing());
        assert!(!StoreError::UnknownItem { list: ListId(1), item: ItemId(2) }.is_user_facing());
    }

    #[test]
    fn messages_name_the_ids() {
        let err = StoreError::UnknownItem { list: ListId(1), item: ItemId(2) };
        assert_eq!(err.to_string(), "item #2 does not exist in shopping list #1");
    }
}
