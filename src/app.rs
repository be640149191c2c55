//! Templar BPO Frontend App
//!
//! Two-column layout: category sidebar and blueprint table.

use bpo_core::{Catalog, CatalogConfig};
use leptos::prelude::*;

use crate::components::{BlueprintTable, CategoryList, NoticeBanner, SearchBar};
use crate::context::CatalogContext;

#[component]
pub fn App(catalog: Catalog, config: CatalogConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(CatalogContext::new(catalog, config));

    view! {
        <div class="app-layout">
            // Left: categories
            <aside class="sidebar">
                <h2>"Categories"</h2>
                <CategoryList />
            </aside>

            // Center: search and table
            <main class="main-content">
                <h1>"Templar BPO Tracker"</h1>
                <NoticeBanner />
                <SearchBar />
                <BlueprintTable />
            </main>
        </div>
    }
}
