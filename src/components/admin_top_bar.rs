//! Admin Top Bar Component
//!
//! Header strip with the menu toggle, the signed-in identity, and logout.

use leptos::prelude::*;

use crate::context::use_app;
use crate::pages::Page;
use crate::store::{session_logout, use_session, SessionStoreFields};

#[component]
pub fn AdminTopBar(set_open: WriteSignal<bool>) -> impl IntoView {
    let session = use_session();
    let ctx = use_app();

    let username = move || {
        session
            .user()
            .with(|user| user.as_ref().map(|u| u.username.clone()))
            .unwrap_or_else(|| "Admin".to_string())
    };
    let role_label = move || {
        session
            .user()
            .with(|user| user.as_ref().map(|u| u.role.label()))
            .unwrap_or("Administrator")
    };
    let initial = move || {
        username()
            .chars()
            .next()
            .map(|ch| ch.to_uppercase().to_string())
            .unwrap_or_else(|| "A".to_string())
    };

    let logout = move |_| {
        session_logout(&session);
        ctx.navigate(Page::Home);
    };

    view! {
        <header class="admin-top-bar">
            <div class="top-bar-left">
                <button
                    class="menu-btn"
                    aria-label="Open menu"
                    on:click=move |_| set_open.set(true)
                >
                    "☰"
                </button>
                <span class="brand">"UCC CLINIC"</span>
            </div>

            <div class="top-bar-right">
                <div class="user-chip">
                    <span class="user-avatar">{initial}</span>
                    <div class="user-meta">
                        <p class="user-name">{username}</p>
                        <p class="user-role">{role_label}</p>
                    </div>
                </div>
                <button class="logout-btn" aria-label="Logout" on:click=logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
