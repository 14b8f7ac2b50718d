//! Shopping List Card Component
//!
//! One store's list: header with progress, add-item form, and item rows.

use leptos::prelude::*;
use shopping_store::{ItemId, ListId};

use crate::components::{DeleteListButton, ItemRow, NewItemForm};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ShoppingListCard(list_id: ListId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let store_name = Memo::new(move |_| {
        store
            .book()
            .read()
            .list(list_id)
            .map(|list| list.store_name.clone())
            .unwrap_or_default()
    });
    let progress = Memo::new(move |_| {
        store
            .book()
            .read()
            .list(list_id)
            .map(|list| list.progress())
            .unwrap_or_default()
    });
    let item_ids = Memo::new(move |_| {
        store
            .book()
            .read()
            .list(list_id)
            .map(|list| list.items.iter().map(|item| item.id).collect::<Vec<ItemId>>())
            .unwrap_or_default()
    });

    view! {
        <div class="card list-card">
            <div class="card-header">
                <div class="card-header-row">
                    <h2 class="card-title">"🏪 " {move || store_name.get()}</h2>
                    <DeleteListButton list_id=list_id />
                </div>
                <Show when=move || progress.get().total != 0>
                    <div class="progress">
                        <div class="progress-labels">
                            <span>
                                {move || {
                                    let p = progress.get();
                                    format!("{} of {} items", p.purchased, p.total)
                                }}
                            </span>
                            <span>{move || format!("{}% complete", progress.get().percent())}</span>
                        </div>
                        <div class="progress-track">
                            <div
                                class="progress-bar"
                                style=move || format!("width: {}%;", progress.get().fraction())
                            ></div>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="card-content">
                <NewItemForm list_id=list_id />

                <div class="item-list">
                    <For
                        each=move || item_ids.get()
                        key=|id| *id
                        children=move |item_id| view! { <ItemRow list_id=list_id item_id=item_id /> }
                    />

                    <Show when=move || item_ids.with(|ids| ids.is_empty())>
                        <div class="empty-items">
                            <div class="empty-icon">"🛒"</div>
                            <p>"No items yet. Add your first item!"</p>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
