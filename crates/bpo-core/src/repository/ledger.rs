//! Ownership Ledger
//!
//! Maps a blueprint id to an "owned" flag persisted as `<prefix><typeId>`.
//! The ledger is only ever probed per id, never enumerated.

use std::collections::HashSet;

use log::{debug, warn};

use super::traits::{KeyValueStore, StoreError};
use crate::config::DEFAULT_STORAGE_KEY_PREFIX;
use crate::domain::{Blueprint, BlueprintId};

const OWNED: &str = "true";
const NOT_OWNED: &str = "false";

#[derive(Debug, Clone)]
pub struct OwnershipLedger<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> OwnershipLedger<S> {
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, DEFAULT_STORAGE_KEY_PREFIX)
    }

    pub fn with_prefix(store: S, prefix: &str) -> Self {
        Self {
            store,
            prefix: prefix.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key_for(&self, id: &BlueprintId) -> String {
        format!("{}{}", self.prefix, id)
    }

    /// True only when the stored value is exactly `"true"`.
    ///
    /// Absent keys, foreign values and read failures all count as not owned.
    pub fn is_owned(&self, id: &BlueprintId) -> bool {
        let key = self.key_for(id);
        match self.store.get(&key) {
            Ok(Some(value)) if value == OWNED => true,
            Ok(Some(value)) => {
                if value != NOT_OWNED {
                    debug!("[Ledger] Ignoring unexpected value {:?} for {}", value, key);
                }
                false
            }
            Ok(None) => false,
            Err(e) => {
                warn!("[Ledger] Read of {} failed, treating as not owned: {}", key, e);
                false
            }
        }
    }

    /// Overwrite the stored flag for `id`.
    pub fn set_owned(&self, id: &BlueprintId, owned: bool) -> Result<(), StoreError> {
        let key = self.key_for(id);
        let value = if owned { OWNED } else { NOT_OWNED };
        self.store.set(&key, value).inspect_err(|e| {
            warn!("[Ledger] Could not persist {}={}: {}", key, value, e);
        })
    }

    /// Flip the flag for `id` and return the new value.
    pub fn toggle_owned(&self, id: &BlueprintId) -> Result<bool, StoreError> {
        let owned = !self.is_owned(id);
        self.set_owned(id, owned)?;
        debug!("[Ledger] {} owned={}", id, owned);
        Ok(owned)
    }

    /// Toggle on behalf of the user. A failed write is logged and turned into
    /// a notice; `owned` is always the flag as it is now persisted.
    pub fn toggle_with_notice(&self, id: &BlueprintId, name: &str) -> ToggleOutcome {
        match self.toggle_owned(id) {
            Ok(owned) => ToggleOutcome { owned, notice: None },
            Err(e) => {
                warn!("[Ledger] Toggle of {} failed: {}", id, e);
                ToggleOutcome {
                    owned: self.is_owned(id),
                    notice: Some(format!("Could not save owned state for {}: {}", name, e)),
                }
            }
        }
    }

    /// Resolve the flag of every blueprint in `blueprints` up front.
    pub fn snapshot(&self, blueprints: &[Blueprint]) -> OwnershipSnapshot {
        blueprints
            .iter()
            .filter(|bp| self.is_owned(&bp.type_id))
            .map(|bp| bp.type_id.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub owned: bool,
    pub notice: Option<String>,
}

/// Already-resolved ownership flags handed to the filter engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipSnapshot {
    owned: HashSet<BlueprintId>,
}

impl OwnershipSnapshot {
    pub fn is_owned(&self, id: &BlueprintId) -> bool {
        self.owned.contains(id)
    }
}

impl FromIterator<BlueprintId> for OwnershipSnapshot {
    fn from_iter<I: IntoIterator<Item = BlueprintId>>(iter: I) -> Self {
        Self {
            owned: iter.into_iter().collect(),
        }
    }
}
