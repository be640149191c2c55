//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use bpo_core::SelectionState;
use reactive_stores::Store;

/// Transient page state, reset on reload
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Raw search box contents
    pub search_text: String,
    /// Selected category (single select)
    pub selection: SelectionState,
    /// "Show missing only" checkbox
    pub missing_only: bool,
    /// Bumped after every ledger write so views re-read ownership
    pub ledger_version: u32,
    /// Latest storage failure shown to the user
    pub notice: Option<String>,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

pub fn new_catalog_store() -> CatalogStore {
    Store::new(CatalogState::default())
}
