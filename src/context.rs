//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shopping_store::ShoppingIntent;

use crate::config::UiConfig;
use crate::store::{store_dismiss_notice, store_dispatch, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// UI settings from the app config
    pub ui: StoredValue<UiConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, ui: UiConfig) -> Self {
        Self {
            store,
            ui: StoredValue::new(ui),
        }
    }

    /// Send an intent to the store. Returns whether it applied.
    ///
    /// Any notice it produces is dismissed after the configured timeout.
    pub fn dispatch(&self, intent: ShoppingIntent) -> bool {
        let (result, notice_id) = store_dispatch(&self.store, intent);
        if let Some(id) = notice_id {
            self.dismiss_later(id);
        }
        match result {
            Ok(change) => {
                tracing::info!(?change, "applied");
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected");
                false
            }
        }
    }

    pub fn dismiss(&self, notice_id: u32) {
        store_dismiss_notice(&self.store, notice_id);
    }

    fn dismiss_later(&self, notice_id: u32) {
        let store = self.store;
        let timeout = self.ui.with_value(|ui| ui.notice_timeout_ms);
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_dismiss_notice(&store, notice_id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
