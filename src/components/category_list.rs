//! Category List Component
//!
//! Sidebar of categories. "All" first, active entry highlighted.

use leptos::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_catalog();

    view! {
        <ul id="categoryList" class="category-list">
            {ctx.category_entries().into_iter().map(|entry| {
                let value = entry.value.clone();
                let label = entry.label.clone();
                let is_active = move || ctx.is_active(&entry);
                view! {
                    <li
                        class=move || if is_active() { "active" } else { "" }
                        on:click=move |_| ctx.select_category(value.clone())
                    >
                        {label}
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
