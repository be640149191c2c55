//! Page Globals
//!
//! The catalog and optional settings are put on `window` by scripts loaded
//! ahead of the WASM bundle (`data.js`, inline config).

use bpo_core::{Blueprint, Catalog, CatalogConfig};
use wasm_bindgen::JsValue;

use crate::storage::js_error;

const CATALOG_GLOBAL: &str = "BPO_DATA";
const CONFIG_GLOBAL: &str = "BPO_CONFIG";

fn read_global(name: &str) -> Result<Option<JsValue>, String> {
    let window = web_sys::window().ok_or("no window")?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).map_err(|e| js_error(&e))?;
    if value.is_undefined() || value.is_null() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Read `window.BPO_DATA`
pub fn load_catalog() -> Result<Catalog, String> {
    let value = read_global(CATALOG_GLOBAL)?.ok_or_else(|| format!("window.{} is not defined", CATALOG_GLOBAL))?;
    let blueprints: Vec<Blueprint> = serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())?;
    Ok(Catalog::new(blueprints))
}

/// Read `window.BPO_CONFIG`, defaults when absent
pub fn load_config() -> Result<CatalogConfig, String> {
    match read_global(CONFIG_GLOBAL)? {
        Some(value) => serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string()),
        None => Ok(CatalogConfig::default()),
    }
}

/// Open the external reference page in a new tab
pub fn open_reference(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("popup blocked".to_string()),
        Err(e) => Err(js_error(&e)),
    }
}
