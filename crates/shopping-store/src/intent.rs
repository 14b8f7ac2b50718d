//! Shopping Intents
//!
//! User actions as data. The UI sends every mutation through
//! [`ShoppingBook::dispatch`] and reacts to the returned [`Change`].

use crate::book::ShoppingBook;
use crate::error::StoreError;
use crate::model::{ItemId, ListId};

#[derive(Debug, Clone, PartialEq)]
pub enum ShoppingIntent {
    CreateList {
        store_name: String,
    },
    AddItem {
        list: ListId,
        name: String,
        quantity: u32,
        notes: String,
    },
    TogglePurchased {
        list: ListId,
        item: ItemId,
    },
    ToggleMovedToNext {
        list: ListId,
        item: ItemId,
    },
    RemoveItem {
        list: ListId,
        item: ItemId,
    },
    DeleteList {
        list: ListId,
    },
}

/// What a successfully applied intent did
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    ListCreated { list: ListId, store_name: String },
    ItemAdded { list: ListId, item: ItemId, name: String },
    PurchasedToggled { list: ListId, item: ItemId, purchased: bool },
    MovedToNextToggled { list: ListId, item: ItemId, moved: bool },
    ItemRemoved { list: ListId, item: ItemId, name: String },
    ListDeleted { list: ListId, store_name: String },
}

impl ShoppingBook {
    /// Apply an intent. On error the book is unchanged.
    pub fn dispatch(&mut self, intent: ShoppingIntent) -> Result<Change, StoreError> {
        let result = match intent {
            ShoppingIntent::CreateList { store_name } => {
                self.create_list(&store_name).map(|list| {
                    let store_name = self.list(list).map(|l| l.store_name.clone()).unwrap_or_default();
                    Change::ListCreated { list, store_name }
                })
            }
            ShoppingIntent::AddItem { list, name, quantity, notes } => {
                self.add_item(list, &name, quantity, &notes).map(|item| {
                    let name = self
                        .list(list)
                        .and_then(|l| l.item(item))
                        .map(|i| i.name.clone())
                        .unwrap_or_default();
                    Change::ItemAdded { list, item, name }
                })
            }
            ShoppingIntent::TogglePurchased { list, item } => self
                .toggle_purchased(list, item)
                .map(|purchased| Change::PurchasedToggled { list, item, purchased })
                .ok_or_else(|| self.missing(list, item)),
            ShoppingIntent::ToggleMovedToNext { list, item } => self
                .toggle_moved_to_next(list, item)
                .map(|moved| Change::MovedToNextToggled { list, item, moved })
                .ok_or_else(|| self.missing(list, item)),
            ShoppingIntent::RemoveItem { list, item } => self
                .remove_item(list, item)
                .map(|removed| Change::ItemRemoved { list, item, name: removed.name })
                .ok_or_else(|| self.missing(list, item)),
            ShoppingIntent::DeleteList { list } => self
                .delete_list(list)
                .map(|removed| Change::ListDeleted { list, store_name: removed.store_name })
                .ok_or(StoreError::UnknownList(list)),
        };

        if let Err(err) = &result {
            tracing::debug!(error = %err, "intent ignored");
        }
        result
    }

    /// Which half of a (list, item) lookup failed
    fn missing(&self, list: ListId, item: ItemId) -> StoreError {
        if self.list(list).is_some() {
            StoreError::UnknownItem { list, item }
        } else {
            StoreError::UnknownList(list)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log lines for assertions
    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogCapture {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_while(f: impl FnOnce()) -> String {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_every_rejection_is_logged() {
        let mut book = ShoppingBook::new();
        let list = book.create_list("Costco").unwrap();

        let logs = logged_while(|| {
            book.dispatch(ShoppingIntent::CreateList { store_name: "  ".to_string() })
                .unwrap_err();
            book.dispatch(ShoppingIntent::AddItem {
                list,
                name: "  ".to_string(),
                quantity: 1,
                notes: String::new(),
            })
            .unwrap_err();
            book.dispatch(ShoppingIntent::DeleteList { list: ListId(9) }).unwrap_err();
        });

        assert_eq!(logs.matches("intent ignored").count(), 3, "{}", logs);
        assert!(logs.contains("store name is required"));
        assert!(logs.contains("item name is required"));
    }

    #[test]
    fn test_dispatch_create_reports_trimmed_name() {
        let mut book = ShoppingBook::new();
        let change = book
            .dispatch(ShoppingIntent::CreateList { store_name: " Costco ".to_string() })
            .unwrap();

        assert_eq!(
            change,
            Change::ListCreated { list: ListId(1), store_name: "Costco".to_string() }
        );
    }

    #[test]
    fn test_dispatch_distinguishes_missing_list_and_item() {
        let mut book = ShoppingBook::new();
        let list = book.create_list("Costco").unwrap();

        assert_eq!(
            book.dispatch(ShoppingIntent::RemoveItem { list, item: ItemId(9) }),
            Err(StoreError::UnknownItem { list, item: ItemId(9) })
        );
        assert_eq!(
            book.dispatch(ShoppingIntent::TogglePurchased { list: ListId(9), item: ItemId(1) }),
            Err(StoreError::UnknownList(ListId(9)))
        );
        assert_eq!(
            book.dispatch(ShoppingIntent::DeleteList { list: ListId(9) }),
            Err(StoreError::UnknownList(ListId(9)))
        );
    }
}
