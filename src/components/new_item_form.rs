//! New Item Form Component
//!
//! "Add Item" button and the name / quantity / notes form for one list.

use leptos::prelude::*;
use shopping_store::{parse_quantity, ListId, ShoppingIntent, DEFAULT_QUANTITY};

use crate::context::use_app_context;

/// Form for adding an item to a list
#[component]
pub fn NewItemForm(list_id: ListId) -> impl IntoView {
    let ctx = use_app_context();

    let (show_form, set_show_form) = signal(false);
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY);
    let (notes, set_notes) = signal(String::new());

    let reset = move || {
        set_name.set(String::new());
        set_quantity.set(DEFAULT_QUANTITY);
        set_notes.set(String::new());
        set_show_form.set(false);
    };

    // Blank names are dropped silently; the form resets either way
    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(ShoppingIntent::AddItem {
            list: list_id,
            name: name.get(),
            quantity: quantity.get(),
            notes: notes.get(),
        });
        reset();
    };

    view! {
        <button class="add-item-btn" on:click=move |_| set_show_form.set(true)>
            "+ Add Item"
        </button>

        <Show when=move || show_form.get()>
            <form class="new-item-form" on:submit=add_item>
                <input
                    type="text"
                    placeholder="Item name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <div class="new-item-row">
                    <input
                        type="number"
                        class="qty-input"
                        placeholder="Qty"
                        min="1"
                        prop:value=move || quantity.get().to_string()
                        on:input=move |ev| set_quantity.set(parse_quantity(&event_target_value(&ev)))
                    />
                    <input
                        type="text"
                        class="notes-input"
                        placeholder="Notes (optional)"
                        prop:value=move || notes.get()
                        on:input=move |ev| set_notes.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-actions">
                    <button type="submit" class="primary-btn small">"Add"</button>
                    <button type="button" class="outline-btn small" on:click=move |_| reset()>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
