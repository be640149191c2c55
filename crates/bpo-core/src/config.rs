//! Catalog Configuration
//!
//! Page-level settings. Every field has a default so a missing or partial
//! `window.BPO_CONFIG` still yields a working page.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REFERENCE_URL_TEMPLATE: &str = "https://everef.net/type/{type_id}";
pub const DEFAULT_STORAGE_KEY_PREFIX: &str = "owned_";
const TYPE_ID_PLACEHOLDER: &str = "{type_id}";

/// Characters that would end or restructure a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// External reference link, `{type_id}` is substituted
    pub reference_url_template: String,
    /// Ledger key prefix, keys are `<prefix><typeId>`
    pub storage_key_prefix: String,
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            reference_url_template: DEFAULT_REFERENCE_URL_TEMPLATE.to_string(),
            storage_key_prefix: DEFAULT_STORAGE_KEY_PREFIX.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn reference_url(&self, type_id: &crate::BlueprintId) -> String {
        let encoded = utf8_percent_encode(type_id.as_str(), PATH_SEGMENT).to_string();
        self.reference_url_template.replace(TYPE_ID_PLACEHOLDER, &encoded)
    }

    /// Parsed log level, `Info` when the configured value is unknown
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
