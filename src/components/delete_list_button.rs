//! Delete List Button Component
//!
//! Trash button in a card header. An empty list goes at once; a list that
//! still holds items asks first, naming the store and how much goes with it.

use leptos::prelude::*;
use shopping_store::{ListId, ShoppingIntent};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Question shown before deleting a list that still has items
pub fn delete_prompt(store_name: &str, item_count: usize) -> String {
    let noun = if item_count == 1 { "item" } else { "items" };
    format!("Delete {} and its {} {}?", store_name, item_count, noun)
}

#[component]
pub fn DeleteListButton(list_id: ListId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (asking, set_asking) = signal(false);

    let summary = Memo::new(move |_| {
        store
            .book()
            .read()
            .list(list_id)
            .map(|list| (list.store_name.clone(), list.items.len()))
            .unwrap_or_default()
    });

    let delete = move || {
        ctx.dispatch(ShoppingIntent::DeleteList { list: list_id });
    };

    let on_trash = move |_: web_sys::MouseEvent| {
        if summary.with(|(_, count)| *count == 0) {
            delete();
        } else {
            set_asking.set(true);
        }
    };

    view! {
        {move || if asking.get() {
            view! {
                <div class="delete-prompt">
                    <span class="delete-prompt-text">
                        {move || summary.with(|(name, count)| delete_prompt(name, *count))}
                    </span>
                    <button class="confirm-btn" on:click=move |_| delete()>"Delete"</button>
                    <button class="cancel-btn" on:click=move |_| set_asking.set(false)>"Keep"</button>
                </div>
            }.into_any()
        } else {
            view! {
                <button class="ghost-btn" title="Delete shopping list" on:click=on_trash>
                    "🗑"
                </button>
            }.into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt_names_store_and_count() {
        assert_eq!(delete_prompt("Costco", 3), "Delete Costco and its 3 items?");
        assert_eq!(delete_prompt("Aldi", 1), "Delete Aldi and its 1 item?");
    }
}
