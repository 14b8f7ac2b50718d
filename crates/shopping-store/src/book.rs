//! Shopping Book
//!
//! The ordered collection of shopping lists and the operations on it.
//! Every operation either applies fully or leaves the book untouched.

use chrono::Utc;

use crate::error::StoreError;
use crate::input::{normalize_name, normalize_notes, DEFAULT_QUANTITY};
use crate::model::{ItemId, ItemStatus, ListId, ShoppingItem, ShoppingList};

/// All shopping lists for the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingBook {
    lists: Vec<ShoppingList>,
    /// Last id handed out, shared by lists and items
    last_id: u32,
}

impl ShoppingBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists in creation order
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn list(&self, id: ListId) -> Option<&ShoppingList> {
        self.lists.iter().find(|list| list.id == id)
    }

    fn list_mut(&mut self, id: ListId) -> Option<&mut ShoppingList> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    fn next_id(&mut self) -> u32 {
        self.last_id += 1;
        self.last_id
    }

    /// Append a new, empty list for `store_name`.
    pub fn create_list(&mut self, store_name: &str) -> Result<ListId, StoreError> {
        let store_name = normalize_name(store_name).ok_or(StoreError::EmptyStoreName)?;
        let id = ListId(self.next_id());
        tracing::debug!(list = %id, store = %store_name, "creating shopping list");
        self.lists.push(ShoppingList {
            id,
            store_name,
            items: Vec::new(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    /// Append a new pending item to a list.
    ///
    /// A zero quantity becomes 1. Blank notes are stored as `None`.
    pub fn add_item(
        &mut self,
        list_id: ListId,
        name: &str,
        quantity: u32,
        notes: &str,
    ) -> Result<ItemId, StoreError> {
        let name = normalize_name(name).ok_or(StoreError::EmptyItemName)?;
        if self.list(list_id).is_none() {
            return Err(StoreError::UnknownList(list_id));
        }
        let id = ItemId(self.next_id());
        let item = ShoppingItem {
            id,
            name,
            quantity: if quantity == 0 { DEFAULT_QUANTITY } else { quantity },
            notes: normalize_notes(notes),
            status: ItemStatus::Pending,
        };
        tracing::debug!(list = %list_id, item = %id, name = %item.name, qty = item.quantity, "adding item");
        // Presence checked above
        if let Some(list) = self.list_mut(list_id) {
            list.items.push(item);
        }
        Ok(id)
    }

    /// Flip an item's purchased flag, clearing moved-to-next when it becomes set.
    ///
    /// Returns the new purchased flag, or `None` if the item was not found.
    pub fn toggle_purchased(&mut self, list_id: ListId, item_id: ItemId) -> Option<bool> {
        let purchased = self.list_mut(list_id)?.item_mut(item_id)?.toggle_purchased();
        tracing::trace!(list = %list_id, item = %item_id, purchased, "toggled purchased");
        Some(purchased)
    }

    /// Flip an item's moved-to-next flag, clearing purchased when it becomes set.
    ///
    /// Returns the new flag, or `None` if the item was not found.
    pub fn toggle_moved_to_next(&mut self, list_id: ListId, item_id: ItemId) -> Option<bool> {
        let moved = self.list_mut(list_id)?.item_mut(item_id)?.toggle_moved_to_next();
        tracing::trace!(list = %list_id, item = %item_id, moved, "toggled moved to next");
        Some(moved)
    }

    /// Remove an item from its list, returning it.
    pub fn remove_item(&mut self, list_id: ListId, item_id: ItemId) -> Option<ShoppingItem> {
        let list = self.list_mut(list_id)?;
        let index = list.items.iter().position(|item| item.id == item_id)?;
        let removed = list.items.remove(index);
        tracing::debug!(list = %list_id, item = %item_id, "removed item");
        Some(removed)
    }

    /// Remove a list together with all of its items.
    pub fn delete_list(&mut self, list_id: ListId) -> Option<ShoppingList> {
        let index = self.lists.iter().position(|list| list.id == list_id)?;
        let removed = self.lists.remove(index);
        tracing::debug!(list = %list_id, items = removed.items.len(), "deleted shopping list");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_list(store: &str) -> (ShoppingBook, ListId) {
        let mut book = ShoppingBook::new();
        let id = book.create_list(store).unwrap();
        (book, id)
    }

    #[test]
    fn test_create_list_appends_in_order() {
        let mut book = ShoppingBook::new();
        let a = book.create_list("Walmart").unwrap();
        let b = book.create_list("Target").unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.lists()[0].id, a);
        assert_eq!(book.lists()[1].id, b);
        assert!(book.lists()[1].items.is_empty());
    }

    #[test]
    fn test_create_list_trims_store_name() {
        let (book, id) = book_with_list("  Costco  ");
        assert_eq!(book.list(id).unwrap().store_name, "Costco");
    }

    #[test]
    fn test_create_list_rejects_blank_name() {
        let mut book = ShoppingBook::new();
        let before = book.clone();

        assert_eq!(book.create_list(""), Err(StoreError::EmptyStoreName));
        assert_eq!(book.create_list("   "), Err(StoreError::EmptyStoreName));
        assert_eq!(book, before);
    }

    #[test]
    fn test_add_item_defaults() {
        let (mut book, list) = book_with_list("Costco");
        let item = book.add_item(list, "Eggs", 0, "  ").unwrap();

        let item = book.list(list).unwrap().item(item).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.notes, None);
        assert_eq!(item.status, ItemStatus::Pending);
    }

    #[test]
    fn test_add_item_to_unknown_list_is_rejected() {
        let (mut book, _) = book_with_list("Costco");
        let before = book.clone();

        assert_eq!(
            book.add_item(ListId(99), "Milk", 1, ""),
            Err(StoreError::UnknownList(ListId(99)))
        );
        assert_eq!(book.add_item(ListId(1), " ", 1, ""), Err(StoreError::EmptyItemName));
        assert_eq!(book, before);
    }

    #[test]
    fn test_toggle_unknown_item_is_noop() {
        let (mut book, list) = book_with_list("Costco");
        let before = book.clone();

        assert_eq!(book.toggle_purchased(list, ItemId(42)), None);
        assert_eq!(book.toggle_moved_to_next(ListId(42), ItemId(1)), None);
        assert_eq!(book, before);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (mut book, list) = book_with_list("Costco");
        let item = book.add_item(list, "Milk", 1, "").unwrap();
        book.remove_item(list, item).unwrap();
        book.delete_list(list).unwrap();

        let next_list = book.create_list("Aldi").unwrap();
        let next_item = book.add_item(next_list, "Bread", 1, "").unwrap();
        assert!(next_list.0 > item.0);
        assert!(next_item.0 > next_list.0);
    }
}
