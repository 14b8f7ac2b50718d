//! Smart Shopping Lists Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod notice;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.logging.max_level().ok())
        .unwrap_or(Level::INFO);
    if let Err(e) = logging::init(level) {
        web_sys::console::error_1(&format!("[APP] Logging unavailable: {}", e).into());
    }

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("{}; using defaults", e);
        AppConfig::default()
    });
    tracing::info!(title = %config.ui.title, "starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
