//! Templar BPO Core
//!
//! Layered architecture:
//! - domain: Blueprint records, catalog and selection state
//! - repository: Ownership ledger over a string key-value store
//! - engine: Filter/sort pipeline and view projections
//!
//! Nothing in this crate touches the browser, so every rule is testable natively.

pub mod config;
pub mod domain;
pub mod engine;
pub mod repository;

pub use config::CatalogConfig;
pub use domain::{Blueprint, BlueprintId, Catalog, CatalogQuery, DomainError, DomainResult, SelectionState};
pub use engine::{build_rows, category_entries, filter_catalog, BlueprintRow, CategoryEntry};
pub use repository::{KeyValueStore, MemoryStore, OwnershipLedger, OwnershipSnapshot, StoreError, ToggleOutcome};
