//! Repository Layer - Core Traits
//!
//! Defines the storage interface the ownership ledger is written against.
//! Implementations can use browser localStorage, in-memory maps, etc.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Storage is disabled, blocked, or missing entirely
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend refused a write (quota, permissions)
    #[error("failed to write {key}: {reason}")]
    WriteFailed { key: String, reason: String },
    #[error("failed to read {key}: {reason}")]
    ReadFailed { key: String, reason: String },
}

/// String-keyed, string-valued durable store.
///
/// Calls are synchronous; the ledger resolves values before the engine runs,
/// so an async backend only has to change the ledger, not the engine.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
