//! Shopping Lists App
//!
//! Root component: header, new-list form, the grid of list cards, and footer.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_store::ListId;

use crate::components::{Footer, NewListForm, NoticeStack, ShoppingListCard};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, config.ui.clone());

    // Provide context to all children
    provide_context(ctx);

    let list_ids = Memo::new(move |_| {
        store
            .book()
            .read()
            .lists()
            .iter()
            .map(|list| list.id)
            .collect::<Vec<ListId>>()
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="app-header">
                    <h1>"🛒 " {config.ui.title.clone()}</h1>
                    <p class="tagline">{config.ui.tagline.clone()}</p>
                </header>

                <NewListForm />

                <Show
                    when=move || !list_ids.with(|ids| ids.is_empty())
                    fallback=|| view! {
                        <div class="empty-lists">
                            <div class="empty-icon large">"🛒"</div>
                            <h3>"No shopping lists yet"</h3>
                            <p>"Create your first shopping list to get started!"</p>
                        </div>
                    }
                >
                    <div class="list-grid">
                        <For
                            each=move || list_ids.get()
                            key=|id| *id
                            children=move |list_id| view! { <ShoppingListCard list_id=list_id /> }
                        />
                    </div>
                </Show>
            </main>

            <Footer />
            <NoticeStack />
        </div>
    }
}
