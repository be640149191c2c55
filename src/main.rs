//! Templar BPO Frontend Entry Point

mod app;
mod components;
mod context;
mod source;
mod storage;
mod store;

use app::App;
use bpo_core::{Catalog, CatalogConfig};
use leptos::prelude::*;
use log::{error, info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match source::load_config() {
        Ok(config) => (config, None),
        Err(e) => (CatalogConfig::default(), Some(e)),
    };
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::error_1(&format!("[App] Logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        warn!("[App] Ignoring malformed BPO_CONFIG, using defaults: {}", e);
    }

    let catalog = source::load_catalog().unwrap_or_else(|e| {
        error!("[App] Could not load catalog: {}", e);
        Catalog::default()
    });
    info!("[App] Loaded {} blueprints", catalog.len());

    mount_to_body(move || view! { <App catalog=catalog config=config /> });
}
