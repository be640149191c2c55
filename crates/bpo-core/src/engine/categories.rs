//! Category list derivation

use std::collections::BTreeSet;

use crate::domain::{Blueprint, SelectionState};

pub const ALL_LABEL: &str = "All";

/// One entry of the category sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub label: String,
    /// `None` for the synthetic "All" entry
    pub value: Option<String>,
}

impl CategoryEntry {
    pub fn all() -> Self {
        Self {
            label: ALL_LABEL.to_string(),
            value: None,
        }
    }

    pub fn category(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: Some(name.to_string()),
        }
    }

    pub fn is_active(&self, selection: &SelectionState) -> bool {
        self.value.as_deref() == selection.selected_category()
    }
}

/// "All" followed by the distinct categories of the full catalog in ordinary
/// (case-sensitive) string order.
pub fn category_entries(blueprints: &[Blueprint]) -> Vec<CategoryEntry> {
    let distinct: BTreeSet<&str> = blueprints.iter().map(|bp| bp.category.as_str()).collect();

    std::iter::once(CategoryEntry::all())
        .chain(distinct.into_iter().map(CategoryEntry::category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_has_only_all() {
        assert_eq!(category_entries(&[]), vec![CategoryEntry::all()]);
    }

    #[test]
    fn test_distinct_and_case_sensitive_order() {
        let blueprints = vec![
            Blueprint::new("1", "a", "ammo", ""),
            Blueprint::new("2", "b", "Tools", ""),
            Blueprint::new("3", "c", "Ammo", ""),
            Blueprint::new("4", "d", "Tools", ""),
        ];
        let labels: Vec<String> = category_entries(&blueprints).into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["All", "Ammo", "Tools", "ammo"]);
    }

    #[test]
    fn test_active_entry_follows_selection() {
        let blueprints = vec![Blueprint::new("1", "a", "Ammo", ""), Blueprint::new("2", "b", "Tools", "")];
        let entries = category_entries(&blueprints);
        let mut selection = SelectionState::new();

        let active: Vec<&str> = entries.iter().filter(|e| e.is_active(&selection)).map(|e| e.label.as_str()).collect();
        assert_eq!(active, vec!["All"]);

        selection.select(Some("Tools"));
        let active: Vec<&str> = entries.iter().filter(|e| e.is_active(&selection)).map(|e| e.label.as_str()).collect();
        assert_eq!(active, vec!["Tools"]);
    }
}
