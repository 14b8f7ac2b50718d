//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_store::{Change, ShoppingBook, ShoppingIntent, StoreError};

use crate::notice::{Notice, NoticeText};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All shopping lists for this page session
    pub book: ShoppingBook,
    /// Notices currently on screen, oldest first
    pub notices: Vec<Notice>,
    /// Last notice id handed out
    pub last_notice_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Apply an intent to the book and queue the matching notice.
///
/// Returns the change together with the id of the notice it produced, if any.
pub fn store_dispatch(
    store: &AppStore,
    intent: ShoppingIntent,
) -> (Result<Change, StoreError>, Option<u32>) {
    let result = store.book().write().dispatch(intent);
    let text = match &result {
        Ok(change) => NoticeText::for_change(change),
        Err(err) => NoticeText::for_error(err),
    };
    let notice_id = text.map(|text| store_push_notice(store, text));
    (result, notice_id)
}

/// Add a notice to the store. Returns its id.
pub fn store_push_notice(store: &AppStore, text: NoticeText) -> u32 {
    let id = {
        let last_field = store.last_notice_id();
        let mut last = last_field.write();
        *last += 1;
        *last
    };
    store.notices().write().push(text.with_id(id));
    id
}

/// Remove a notice from the store by ID
pub fn store_dismiss_notice(store: &AppStore, notice_id: u32) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}
