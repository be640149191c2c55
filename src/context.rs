//! Catalog Context
//!
//! The page controller, provided via the Leptos Context API. It owns the
//! selection state and is the only thing the event handlers mutate.

use bpo_core::{
    build_rows, category_entries, filter_catalog, BlueprintId, BlueprintRow, Catalog, CatalogConfig,
    CatalogQuery, CategoryEntry, KeyValueStore, OwnershipLedger,
};
use leptos::prelude::*;
use log::{debug, info};

use crate::storage::LocalStore;
use crate::store::{new_catalog_store, CatalogStateStoreFields, CatalogStore};

#[derive(Clone, Copy)]
pub struct CatalogContext<S = LocalStore> {
    state: CatalogStore,
    catalog: StoredValue<Catalog>,
    config: StoredValue<CatalogConfig>,
    ledger: StoredValue<OwnershipLedger<S>>,
}

impl CatalogContext<LocalStore> {
    pub fn new(catalog: Catalog, config: CatalogConfig) -> Self {
        Self::with_store(catalog, config, LocalStore)
    }
}

impl<S: KeyValueStore + Send + Sync + 'static> CatalogContext<S> {
    pub fn with_store(catalog: Catalog, config: CatalogConfig, store: S) -> Self {
        let ledger = OwnershipLedger::with_prefix(store, &config.storage_key_prefix);
        Self {
            state: new_catalog_store(),
            catalog: StoredValue::new(catalog),
            config: StoredValue::new(config),
            ledger: StoredValue::new(ledger),
        }
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.with_value(|c| c.len())
    }

    // ========================
    // Event handlers
    // ========================

    pub fn set_search_text(&self, text: String) {
        self.state.search_text().set(text);
    }

    pub fn set_missing_only(&self, missing_only: bool) {
        self.state.missing_only().set(missing_only);
    }

    /// `None` is the "All" entry
    pub fn select_category(&self, category: Option<String>) {
        self.state.selection().update(|s| s.select(category.as_deref()));
        debug!("[Catalog] Category now {:?}", self.state.selection().get_untracked().selected_category());
    }

    /// Returns the owned flag as persisted after the attempt
    pub fn toggle_owned(&self, id: &BlueprintId) -> bool {
        let name = self
            .catalog
            .with_value(|c| c.get(id).map(|bp| bp.name.clone()))
            .unwrap_or_else(|_| id.to_string());
        let outcome = self.ledger.with_value(|ledger| ledger.toggle_with_notice(id, &name));
        match outcome.notice {
            Some(notice) => self.state.notice().set(Some(notice)),
            None => info!("[Ledger] {} marked {}", id, if outcome.owned { "owned" } else { "missing" }),
        }
        self.state.ledger_version().update(|v| *v += 1);
        outcome.owned
    }

    pub fn dismiss_notice(&self) {
        self.state.notice().set(None);
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn search_text(&self) -> String {
        self.state.search_text().get()
    }

    pub fn missing_only(&self) -> bool {
        self.state.missing_only().get()
    }

    pub fn notice(&self) -> Option<String> {
        self.state.notice().get()
    }

    pub fn is_active(&self, entry: &CategoryEntry) -> bool {
        self.state.selection().with(|s| entry.is_active(s))
    }

    /// Categories come from the full catalog, so they never change after load
    pub fn category_entries(&self) -> Vec<CategoryEntry> {
        self.catalog.with_value(|c| category_entries(c.blueprints()))
    }

    pub fn query(&self) -> CatalogQuery {
        let selection = self.state.selection().get();
        CatalogQuery::new(&self.search_text(), &selection, self.missing_only())
    }

    /// Full filter/sort pass against a fresh ownership snapshot
    pub fn visible_rows(&self) -> Vec<BlueprintRow> {
        let _ = self.state.ledger_version().get();
        let query = self.query();
        self.catalog.with_value(|catalog| {
            let snapshot = self.ledger.with_value(|ledger| ledger.snapshot(catalog.blueprints()));
            let filtered = filter_catalog(catalog.blueprints(), &query, |id| snapshot.is_owned(id));
            self.config
                .with_value(|config| build_rows(&filtered, |id| snapshot.is_owned(id), config))
        })
    }
}

/// Get the catalog context
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}
