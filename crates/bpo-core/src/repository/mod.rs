//! Repository Layer
//!
//! Durable ownership state behind a string key-value store abstraction.

mod ledger;
mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use ledger::{OwnershipLedger, OwnershipSnapshot, ToggleOutcome};
pub use memory::MemoryStore;
pub use traits::{KeyValueStore, StoreError};
