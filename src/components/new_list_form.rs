//! New List Form Component
//!
//! "Create New Shopping List" button and the store-name form it reveals.

use leptos::prelude::*;
use shopping_store::ShoppingIntent;

use crate::context::use_app_context;

/// Button plus form for creating a shopping list
#[component]
pub fn NewListForm() -> impl IntoView {
    let ctx = use_app_context();
    let placeholder = ctx.ui.with_value(|ui| ui.store_name_placeholder.clone());

    let (show_form, set_show_form) = signal(false);
    let (store_name, set_store_name) = signal(String::new());

    // Rejections keep the form open with the text intact
    let create_list = move || {
        let intent = ShoppingIntent::CreateList { store_name: store_name.get() };
        if ctx.dispatch(intent) {
            set_store_name.set(String::new());
            set_show_form.set(false);
        }
    };

    let cancel = move |_| {
        set_show_form.set(false);
        set_store_name.set(String::new());
    };

    view! {
        <div class="new-list-row">
            <button class="new-list-btn" on:click=move |_| set_show_form.set(true)>
                "+ Create New Shopping List"
            </button>
        </div>

        <Show when=move || show_form.get()>
            <div class="card new-list-card">
                <div class="card-header">
                    <h2 class="card-title">"🏪 New Shopping List"</h2>
                </div>
                <div class="card-content">
                    <label for="storeName" class="field-label">"Store Name"</label>
                    <input
                        id="storeName"
                        type="text"
                        placeholder=placeholder.clone()
                        prop:value=move || store_name.get()
                        on:input=move |ev| set_store_name.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                create_list();
                            }
                        }
                    />
                    <div class="form-actions">
                        <button class="primary-btn" on:click=move |_| create_list()>"Create List"</button>
                        <button class="outline-btn" on:click=cancel>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
