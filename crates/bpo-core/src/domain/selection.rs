//! Selection State
//!
//! Transient UI inputs to the filter pipeline. Reset on every page load.

use serde::{Deserialize, Serialize};

/// Single-select category state. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_category: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Apply a click on a category entry.
    ///
    /// `None` is the "All" entry. Clicking All or the active category clears
    /// the selection; any other category replaces it.
    pub fn select(&mut self, category: Option<&str>) {
        self.selected_category = match category {
            Some(cat) if self.selected_category.as_deref() != Some(cat) => Some(cat.to_string()),
            _ => None,
        };
    }
}

/// Everything the engine needs besides the catalog and ownership lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search_text: String,
    pub selected_category: Option<String>,
    pub missing_only: bool,
}

impl CatalogQuery {
    pub fn new(search_text: &str, selection: &SelectionState, missing_only: bool) -> Self {
        Self {
            search_text: search_text.to_string(),
            selected_category: selection.selected_category().map(str::to_string),
            missing_only,
        }
    }

    /// Trimmed, lower-cased search text. Empty disables the text filter.
    pub fn normalized_search(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}
