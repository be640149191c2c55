//! Blueprint Table Component
//!
//! One row per filtered blueprint with an owned checkbox and a link cell.

use bpo_core::BlueprintRow;
use leptos::prelude::*;
use log::warn;

use crate::context::use_catalog;
use crate::source;

const CELL_CLASS: &str = "p-2 border-b";
const LINK_CELL_CLASS: &str = "p-2 border-b text-blue-600 underline cursor-pointer";

/// A single blueprint row
#[component]
fn BlueprintRowView(row: BlueprintRow) -> impl IntoView {
    let ctx = use_catalog();

    let id = row.blueprint.type_id.clone();
    let url = row.reference_url.clone();
    let row_class = row.row_class();
    let owned = row.owned;
    let bp = row.blueprint;

    view! {
        <tr class=row_class>
            <td class=CELL_CLASS>
                <input
                    type="checkbox"
                    prop:checked=owned
                    on:change=move |ev| {
                        let owned = ctx.toggle_owned(&id);
                        // The browser already flipped the box; pin it to what was persisted
                        event_target::<web_sys::HtmlInputElement>(&ev).set_checked(owned);
                    }
                />
            </td>
            <td
                class=LINK_CELL_CLASS
                title="Open external reference"
                on:click=move |_| {
                    if let Err(e) = source::open_reference(&url) {
                        warn!("[Catalog] Could not open {}: {}", url, e);
                    }
                }
            >
                {bp.type_id.to_string()}
            </td>
            <td class=CELL_CLASS>{bp.name}</td>
            <td class=CELL_CLASS>{bp.category}</td>
            <td class=CELL_CLASS>{bp.group}</td>
        </tr>
    }
}

#[component]
pub fn BlueprintTable() -> impl IntoView {
    let ctx = use_catalog();

    // Recomputed on search, category, missing-only and ownership changes
    let rows = Memo::new(move |_| ctx.visible_rows());

    view! {
        <table class="bpo-table">
            <thead>
                <tr>
                    <th>"Owned"</th>
                    <th>"Type ID"</th>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Group"</th>
                </tr>
            </thead>
            <tbody id="bpoList">
                <For
                    each=move || rows.get()
                    key=|row| row.key()
                    children=move |row| view! { <BlueprintRowView row=row /> }
                />
            </tbody>
        </table>
        <p class="item-count">
            {move || format!("{} of {} blueprints", rows.with(|r| r.len()), ctx.catalog_len())}
        </p>
    }
}
