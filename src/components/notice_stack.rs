//! Notice Stack Component
//!
//! Toasts in the corner of the screen. Each dismisses itself after the
//! configured timeout or on click.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::notice::NoticeVariant;
use crate::store::AppStateStoreFields;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || ctx.store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.variant {
                        NoticeVariant::Default => "notice",
                        NoticeVariant::Destructive => "notice destructive",
                    };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            <div class="notice-title">{notice.title}</div>
                            <div class="notice-description">{notice.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
