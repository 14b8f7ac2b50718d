//! Footer Component

use leptos::prelude::*;

use crate::context::use_app_context;

const FEATURES: &[&str] = &[
    "Store-based organization",
    "Item quantity & notes",
    "Purchase tracking",
    "Next week planning",
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let title = ctx.ui.with_value(|ui| ui.title.clone());

    view! {
        <footer class="app-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <h3>{title}</h3>
                    <p>
                        "Organize your shopping by store and never forget an item again. "
                        "Make your grocery shopping more efficient and enjoyable."
                    </p>
                </div>
                <div class="footer-features">
                    <h4>"Features"</h4>
                    <ul>
                        {FEATURES.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
            <p class="footer-note">"Made with ♥ for better shopping experiences"</p>
        </footer>
    }
}
