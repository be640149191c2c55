//! Search Bar Component
//!
//! Free-text search plus the "missing only" toggle.

use leptos::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_catalog();

    view! {
        <div class="search-bar">
            <input
                id="searchInput"
                type="text"
                placeholder="Search by name or type ID..."
                prop:value=move || ctx.search_text()
                on:input=move |ev| ctx.set_search_text(event_target_value(&ev))
            />
            <label class="missing-toggle">
                <input
                    id="showMissing"
                    type="checkbox"
                    prop:checked=move || ctx.missing_only()
                    on:change=move |ev| ctx.set_missing_only(event_target_checked(&ev))
                />
                " Show missing only"
            </label>
        </div>
    }
}
