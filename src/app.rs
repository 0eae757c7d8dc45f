//! Clinic Console App
//!
//! Root component: login gate, then the admin shell (sidebar + top bar +
//! active page). Page switching is an enum signal, not a URL router.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AdminSidebar, AdminTopBar};
use crate::config::AppConfig;
use crate::context::{use_app, AppContext};
use crate::pages::{
    AnnouncementsPage, ComprehensiveReportsPage, EmailTestPage, HomePage, InventoryPage, Page,
    NotificationsPage, ReportingDashboardPage, StudentLogin, UserManagementPage,
};
use crate::store::{Session, SessionStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();
    provide_context(config);

    let session = Store::new(Session::default());
    provide_context(session);

    let (page, set_page) = signal(Page::Home);
    provide_context(AppContext::new((page, set_page)));

    view! {
        <Show
            when=move || session.user().with(|user| user.is_some())
            fallback=|| view! { <StudentLogin /> }
        >
            <AdminShell />
        </Show>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    let ctx = use_app();
    let (sidebar_open, set_sidebar_open) = signal(false);

    view! {
        <div class="admin-layout">
            <AdminSidebar open=sidebar_open set_open=set_sidebar_open />

            <div class="admin-main">
                <AdminTopBar set_open=set_sidebar_open />

                <main class="admin-content">
                    {move || match ctx.page.get() {
                        Page::Home => view! { <HomePage /> }.into_any(),
                        Page::Notifications => view! { <NotificationsPage /> }.into_any(),
                        Page::Announcements => view! { <AnnouncementsPage /> }.into_any(),
                        Page::Inventory => view! { <InventoryPage /> }.into_any(),
                        Page::Users => view! { <UserManagementPage /> }.into_any(),
                        Page::Reporting => view! { <ReportingDashboardPage /> }.into_any(),
                        Page::Comprehensive => view! { <ComprehensiveReportsPage /> }.into_any(),
                        Page::EmailTest => view! { <EmailTestPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
