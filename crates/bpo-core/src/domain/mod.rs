//! Domain Layer
//!
//! Blueprint records and the transient selection state.
//! This layer has NO external dependencies (except serde for serialization).

mod blueprint;
mod catalog;
mod error;
mod selection;

pub use blueprint::{Blueprint, BlueprintId};
pub use catalog::Catalog;
pub use error::{DomainError, DomainResult};
pub use selection::{CatalogQuery, SelectionState};
