//! Admin Sidebar Component
//!
//! Navigation rail for the admin shell. Carries the pending-request badge,
//! refreshed every 30 seconds; a refresh that fails keeps the last count and
//! only logs. Feature-gated entries are filtered out entirely.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::context::use_app;
use crate::pages::Page;
use crate::poll::{self, PollGate};
use crate::store::{store_pending_count, use_session, SessionStoreFields};

const BADGE_POLL_MS: u32 = 30_000;

struct NavItem {
    label: &'static str,
    page: Page,
    badged: bool,
}

#[component]
pub fn AdminSidebar(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app();
    let session = use_session();
    let config = expect_context::<AppConfig>();
    let features = config.features;

    // Pending-count badge poll. Ticks that land while a fetch is still in
    // flight are skipped.
    let gate = RwSignal::new(PollGate::default());
    let fetch_pending = {
        let config = config.clone();
        move || {
            if !gate.try_update(|g| g.try_start()).unwrap_or(false) {
                return;
            }
            let config = config.clone();
            spawn_local(async move {
                match api::list_requests(&config).await {
                    Ok(forms) => store_pending_count(&session, api::pending_count(&forms)),
                    Err(err) => {
                        log::warn!("pending badge refresh failed: {}", err.user_message())
                    }
                }
                let _ = gate.try_update(|g| g.finish());
            });
        }
    };
    fetch_pending();
    poll::on_interval(BADGE_POLL_MS, fetch_pending);

    let nav_items: Vec<NavItem> = [
        NavItem { label: "Dashboard", page: Page::Home, badged: false },
        NavItem { label: "Enhanced Inventory", page: Page::Inventory, badged: false },
        NavItem { label: "Notifications", page: Page::Notifications, badged: true },
        NavItem { label: "User Management", page: Page::Users, badged: false },
        NavItem { label: "Announcements", page: Page::Announcements, badged: false },
        NavItem { label: "Reporting Dashboard", page: Page::Reporting, badged: false },
        NavItem { label: "Comprehensive Reports", page: Page::Comprehensive, badged: false },
        NavItem { label: "Email Test", page: Page::EmailTest, badged: false },
    ]
    .into_iter()
    .filter(|item| match item.page {
        Page::Users => features.user_management,
        Page::EmailTest => features.email_testing,
        _ => true,
    })
    .collect();

    view! {
        <Show when=move || open.get()>
            <div class="sidebar-overlay" on:click=move |_| set_open.set(false)></div>
        </Show>

        <aside class=move || if open.get() { "admin-sidebar open" } else { "admin-sidebar" }>
            <div class="sidebar-header">
                <h2 class="sidebar-title">"UCC Clinic"</h2>
                <p class="sidebar-subtitle">"Admin Panel"</p>
                <button
                    class="sidebar-close"
                    aria-label="Close menu"
                    on:click=move |_| set_open.set(false)
                >
                    "×"
                </button>
            </div>

            <nav class="sidebar-nav">
                {nav_items
                    .into_iter()
                    .map(|item| {
                        let page = item.page;
                        let badged = item.badged;
                        view! {
                            <button
                                class=move || {
                                    if ctx.page.get() == page { "nav-item active" } else { "nav-item" }
                                }
                                on:click=move |_| {
                                    ctx.navigate(page);
                                    set_open.set(false);
                                }
                            >
                                <span class="nav-label">{item.label}</span>
                                {badged
                                    .then(|| {
                                        view! {
                                            <Show when=move || {
                                                session.pending_requests().get() > 0
                                            }>
                                                <span class="nav-badge">
                                                    {move || {
                                                        let count = session.pending_requests().get();
                                                        if count > 99 {
                                                            "99+".to_string()
                                                        } else {
                                                            count.to_string()
                                                        }
                                                    }}
                                                </span>
                                            </Show>
                                        }
                                    })}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <p>"© 2024 UCC Clinic"</p>
                <p>"Admin Dashboard v1.0"</p>
            </div>
        </aside>
    }
}
