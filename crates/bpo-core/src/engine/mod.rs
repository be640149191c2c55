//! Engine Layer
//!
//! Pure functions from catalog + query + ownership lookup to what the views
//! display. Identical inputs always produce identical output.

mod categories;
mod filter;
mod rows;


pub use categories::{category_entries, CategoryEntry, ALL_LABEL};
pub use filter::filter_catalog;
pub use rows::{build_rows, BlueprintRow, OWNED_ROW_CLASS};
