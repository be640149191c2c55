//! Browser localStorage backend for the ownership ledger.

use bpo_core::{KeyValueStore, StoreError};
use wasm_bindgen::JsValue;

/// Handle to `window.localStorage`, resolved on every call so a page that
/// starts with storage blocked keeps working (as not-owned) and picks it up
/// if the browser later allows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::ReadFailed {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }
}

/// Best-effort message from a thrown JS value (DOMException, string, ...)
pub fn js_error(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
