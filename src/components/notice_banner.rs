use leptos::prelude::*;

use crate::context::use_catalog;

/// Non-blocking banner for storage failures
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_catalog();

    move || {
        ctx.notice().map(|message| {
            view! {
                <div class="notice" role="status">
                    <span>{message}</span>
                    <button class="notice-dismiss" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            }
        })
    }
}
