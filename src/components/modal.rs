//! Modal Component
//!
//! Dialog wrapper for the create/edit forms. Closing is always explicit so
//! entered values survive a stray backdrop click only where pages allow it.

use leptos::prelude::*;

/// Modal dialog with a title bar and close button
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop"></div>
        <div class="modal" role="dialog">
            <div class="modal-header">
                <h3 class="modal-title">{title}</h3>
                <button class="modal-close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
            </div>
            <div class="modal-body">{children()}</div>
        </div>
    }
}
