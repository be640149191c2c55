//! UI Components
//!
//! Leptos components for the catalog page.

mod blueprint_table;
mod category_list;
mod notice_banner;
mod search_bar;

pub use blueprint_table::BlueprintTable;
pub use category_list::CategoryList;
pub use notice_banner::NoticeBanner;
pub use search_bar::SearchBar;
