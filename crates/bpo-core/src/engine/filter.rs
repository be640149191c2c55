//! Filter/Sort Engine

use log::debug;

use crate::domain::{Blueprint, BlueprintId, CatalogQuery};

/// Filter `blueprints` by category, search text and missing-only, then sort
/// by case-folded name with `typeId` text as tie-break.
///
/// `is_owned` should be a resolved lookup (e.g. an `OwnershipSnapshot`),
/// it is only consulted when `missing_only` is set.
pub fn filter_catalog<'a, F>(blueprints: &'a [Blueprint], query: &CatalogQuery, is_owned: F) -> Vec<&'a Blueprint>
where
    F: Fn(&BlueprintId) -> bool,
{
    let search = query.normalized_search();
    let category = query.selected_category.as_deref();

    let mut result: Vec<&Blueprint> = blueprints
        .iter()
        .filter(|bp| category.map_or(true, |cat| bp.category == cat))
        .filter(|bp| search.is_empty() || matches_search(bp, &search))
        .filter(|bp| !query.missing_only || !is_owned(&bp.type_id))
        .collect();

    // Stable, so exact duplicates keep catalog order
    result.sort_by_cached_key(|bp| (bp.folded_name(), bp.type_id.clone()));

    debug!(
        "[Catalog] {} of {} blueprints match (search={:?}, category={:?}, missing_only={})",
        result.len(),
        blueprints.len(),
        search,
        category,
        query.missing_only
    );
    result
}

/// `search` must already be normalized. The id is matched as-is.
fn matches_search(bp: &Blueprint, search: &str) -> bool {
    bp.folded_name().contains(search) || bp.type_id.as_str().contains(search)
}
