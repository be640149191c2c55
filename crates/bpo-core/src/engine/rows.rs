//! Item table row projection

use crate::config::CatalogConfig;
use crate::domain::{Blueprint, BlueprintId};

pub const OWNED_ROW_CLASS: &str = "owned";

/// Display model for one table row
#[derive(Debug, Clone, PartialEq)]
pub struct BlueprintRow {
    pub blueprint: Blueprint,
    pub owned: bool,
    pub reference_url: String,
}

impl BlueprintRow {
    pub fn row_class(&self) -> &'static str {
        if self.owned {
            OWNED_ROW_CLASS
        } else {
            ""
        }
    }

    /// Render key; includes the owned flag so a toggle rebuilds the row
    pub fn key(&self) -> (BlueprintId, bool) {
        (self.blueprint.type_id.clone(), self.owned)
    }
}

pub fn build_rows<F>(filtered: &[&Blueprint], is_owned: F, config: &CatalogConfig) -> Vec<BlueprintRow>
where
    F: Fn(&BlueprintId) -> bool,
{
    filtered
        .iter()
        .map(|bp| BlueprintRow {
            blueprint: (*bp).clone(),
            owned: is_owned(&bp.type_id),
            reference_url: config.reference_url(&bp.type_id),
        })
        .collect()
}
