//! Ledger Integration Tests
//!
//! Tests for OwnershipLedger against in-memory and failing stores.

#[cfg(test)]
mod tests {
    use crate::domain::{Blueprint, BlueprintId};
    use crate::repository::{KeyValueStore, MemoryStore, OwnershipLedger, StoreError, ToggleOutcome};

    /// Store with storage disabled: every call fails
    struct DisabledStore;

    impl KeyValueStore for DisabledStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("localStorage is disabled".to_string()))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::WriteFailed {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    fn setup_ledger() -> OwnershipLedger<MemoryStore> {
        OwnershipLedger::new(MemoryStore::new())
    }

    #[test]
    fn test_default_not_owned() {
        let ledger = setup_ledger();
        assert!(!ledger.is_owned(&BlueprintId::from("1")));
        assert!(ledger.store().is_empty());
    }

    #[test]
    fn test_set_owned_writes_canonical_key() {
        let ledger = setup_ledger();
        let id = BlueprintId::from("23919");

        ledger.set_owned(&id, true).expect("Failed to set");
        assert_eq!(ledger.store().get("owned_23919").unwrap(), Some("true".to_string()));
        assert!(ledger.is_owned(&id));

        ledger.set_owned(&id, false).expect("Failed to set");
        assert_eq!(ledger.store().get("owned_23919").unwrap(), Some("false".to_string()));
        assert!(!ledger.is_owned(&id));
    }

    #[test]
    fn test_toggle_round_trip() {
        let ledger = setup_ledger();
        let id = BlueprintId::from("1");

        let before = ledger.is_owned(&id);
        let after = ledger.toggle_owned(&id).expect("Toggle failed");
        assert_eq!(after, !before);
        assert_eq!(ledger.is_owned(&id), !before);

        let again = ledger.toggle_owned(&id).expect("Toggle failed");
        assert_eq!(again, before);
        assert_eq!(ledger.is_owned(&id), before);
    }

    #[test]
    fn test_corrupted_values_are_not_owned() {
        let ledger = setup_ledger();
        let id = BlueprintId::from("5");

        for value in ["TRUE", "1", "yes", "", "\"true\"", " true"] {
            ledger.store().set("owned_5", value).unwrap();
            assert!(!ledger.is_owned(&id), "value {:?} should not count as owned", value);
        }

        // Toggling from a corrupted value repairs it to the canonical form
        assert!(ledger.toggle_owned(&id).unwrap());
        assert_eq!(ledger.store().get("owned_5").unwrap(), Some("true".to_string()));
    }

    #[test]
    fn test_custom_prefix() {
        let ledger = OwnershipLedger::with_prefix(MemoryStore::new(), "bpo:");
        let id = BlueprintId::from("7");
        ledger.set_owned(&id, true).unwrap();
        assert_eq!(ledger.store().get("bpo:7").unwrap(), Some("true".to_string()));
        assert_eq!(ledger.store().get("owned_7").unwrap(), None);
    }

    #[test]
    fn test_disabled_store_degrades() {
        let ledger = OwnershipLedger::new(DisabledStore);
        let id = BlueprintId::from("1");

        assert!(!ledger.is_owned(&id));
        assert!(matches!(ledger.set_owned(&id, true), Err(StoreError::WriteFailed { .. })));

        let err = ledger.toggle_owned(&id).unwrap_err();
        assert_eq!(err.to_string(), "failed to write owned_1: QuotaExceededError");
    }

    #[test]
    fn test_toggle_with_notice_on_failed_write() {
        let ledger = OwnershipLedger::new(DisabledStore);
        let id = BlueprintId::from("1");

        let outcome = ledger.toggle_with_notice(&id, "Widget");
        assert!(!outcome.owned);
        assert!(!ledger.is_owned(&id));
        assert_eq!(
            outcome.notice.as_deref(),
            Some("Could not save owned state for Widget: failed to write owned_1: QuotaExceededError")
        );
    }

    #[test]
    fn test_toggle_with_notice_on_success() {
        let ledger = setup_ledger();
        let id = BlueprintId::from("1");

        let outcome = ledger.toggle_with_notice(&id, "Widget");
        assert_eq!(outcome, ToggleOutcome { owned: true, notice: None });
        assert!(ledger.is_owned(&id));
    }

    #[test]
    fn test_snapshot_probes_catalog_ids() {
        let ledger = setup_ledger();
        let blueprints = vec![
            Blueprint::new("1", "Widget", "Tools", "G1"),
            Blueprint::new("2", "apple", "Tools", "G2"),
        ];
        ledger.set_owned(&BlueprintId::from("2"), true).unwrap();
        // Owned id outside the catalog is never picked up
        ledger.set_owned(&BlueprintId::from("99"), true).unwrap();

        let snapshot = ledger.snapshot(&blueprints);
        assert!(!snapshot.is_owned(&BlueprintId::from("1")));
        assert!(snapshot.is_owned(&BlueprintId::from("2")));
        assert!(!snapshot.is_owned(&BlueprintId::from("99")));
    }

    #[test]
    fn test_ledger_over_borrowed_store() {
        let store = MemoryStore::new();
        {
            let ledger = OwnershipLedger::new(&store);
            ledger.toggle_owned(&BlueprintId::from("3")).unwrap();
        }
        // A fresh ledger over the same store sees the persisted value
        let reopened = OwnershipLedger::new(&store);
        assert!(reopened.is_owned(&BlueprintId::from("3")));
        assert_eq!(store.len(), 1);
    }
}
