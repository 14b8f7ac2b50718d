//! Item Row Component
//!
//! One item on a shopping list card.

use leptos::prelude::*;
use shopping_store::{ItemId, ListId, ShoppingIntent};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// A single item row with purchased / next-week / remove buttons
#[component]
pub fn ItemRow(list_id: ListId, item_id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // None for the frame between removal and the row being dropped
    let item = Memo::new(move |_| {
        store
            .book()
            .read()
            .list(list_id)
            .and_then(|list| list.item(item_id))
            .cloned()
    });
    let purchased = move || item.with(|i| i.as_ref().is_some_and(|i| i.purchased()));
    let moved = move || item.with(|i| i.as_ref().is_some_and(|i| i.moved_to_next()));

    let row_class = move || {
        if purchased() {
            "item-row purchased"
        } else if moved() {
            "item-row next-week"
        } else {
            "item-row"
        }
    };

    view! {
        <div class=row_class>
            <div class="item-main">
                <div class="item-title">
                    <span class=move || if purchased() { "item-name struck" } else { "item-name" }>
                        {move || item.with(|i| i.as_ref().map(|i| i.name.clone()).unwrap_or_default())}
                    </span>
                    <span class="badge secondary">
                        {move || item.with(|i| i.as_ref().map(|i| format!("{}x", i.quantity)).unwrap_or_default())}
                    </span>
                    <Show when=purchased>
                        <span class="badge purchased">"Purchased"</span>
                    </Show>
                    <Show when=moved>
                        <span class="badge next-week">"Next Week"</span>
                    </Show>
                </div>
                {move || item.with(|i| i.as_ref().and_then(|i| i.notes.clone())).map(|notes| view! {
                    <p class="item-notes">{notes}</p>
                })}
            </div>

            <div class="item-actions">
                <button
                    class=move || if purchased() { "icon-btn check active" } else { "icon-btn check" }
                    title="Toggle purchased"
                    on:click=move |_| {
                        ctx.dispatch(ShoppingIntent::TogglePurchased { list: list_id, item: item_id });
                    }
                >
                    "✓"
                </button>
                <button
                    class=move || if moved() { "icon-btn calendar active" } else { "icon-btn calendar" }
                    title="Move to next week"
                    on:click=move |_| {
                        ctx.dispatch(ShoppingIntent::ToggleMovedToNext { list: list_id, item: item_id });
                    }
                >
                    "📅"
                </button>
                <button
                    class="icon-btn remove"
                    title="Remove item"
                    on:click=move |_| {
                        ctx.dispatch(ShoppingIntent::RemoveItem { list: list_id, item: item_id });
                    }
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
