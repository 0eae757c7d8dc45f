//! Notifications Page
//!
//! Pending medical requests awaiting review. The collection is fetched in
//! full and filtered to pending client-side.

use leptos::prelude::*;

use crate::api;
use crate::components::StatCard;
use crate::config::AppConfig;
use crate::derived;
use crate::poll::{self, PollGate};
use crate::remote::{RemoteState, RemoteStore};

const REFRESH_MS: u32 = 30_000;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = RemoteStore::new();

    {
        let config = config.clone();
        store.load(async move { api::list_requests(&config).await });
    }

    // Keep the list live at the same cadence as the sidebar badge. A tick
    // that lands while the previous refresh is in flight is skipped; a
    // failed refresh keeps the last good list.
    let gate = RwSignal::new(PollGate::default());
    {
        let config = config.clone();
        poll::on_interval(REFRESH_MS, move || {
            if !gate.try_update(|g| g.try_start()).unwrap_or(false) {
                return;
            }
            let config = config.clone();
            store.refresh(async move {
                let result = api::list_requests(&config).await;
                let _ = gate.try_update(|g| g.finish());
                result
            });
        });
    }

    view! {
        <div class="page notifications-page">
            <div class="page-header">
                <h1>"Notifications"</h1>
                <p class="page-subtitle">"View and manage all pending requests and notifications"</p>
            </div>

            {move || match store.state().get() {
                RemoteState::Idle | RemoteState::Loading => {
                    view! { <p class="page-loading">"Loading notifications..."</p> }.into_any()
                }
                RemoteState::Failed(message) => {
                    view! { <div class="page-error">{message}</div> }.into_any()
                }
                RemoteState::Ready(forms) => {
                    let pending = api::pending_requests(&forms);
                    let total = forms.len();
                    let pending_share = derived::percentage_of_total(
                        pending.len() as u64,
                        total as u64,
                    );
                    let by_status = derived::count_by(&forms, |form| form.status.label());
                    let resolved = by_status.get("Approved").copied().unwrap_or(0)
                        + by_status.get("Rejected").copied().unwrap_or(0);
                    view! {
                        <div class="stat-grid">
                            <StatCard
                                label="Pending Requests"
                                value=pending.len().to_string()
                                hint=format!("{pending_share}% of all requests")
                            />
                            <StatCard
                                label="Total Requests"
                                value=total.to_string()
                                hint=format!("{resolved} resolved")
                            />
                            <StatCard label="Last Updated" value="Just now" />
                        </div>

                        <div class="panel">
                            <div class="panel-header">
                                <h2>"Pending Requests"</h2>
                                <p>"Requests awaiting your review and action"</p>
                            </div>

                            {if pending.is_empty() {
                                view! {
                                    <div class="panel-empty">
                                        <h3>"No pending requests"</h3>
                                        <p>"All caught up! No requests need your attention right now."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                pending
                                    .into_iter()
                                    .map(|request| {
                                        view! {
                                            <div class="request-row">
                                                <div class="request-head">
                                                    <h3>{request.fullname.clone()}</h3>
                                                    <span class="badge badge-pending">"Pending"</span>
                                                </div>
                                                <div class="request-detail">
                                                    <p>
                                                        <strong>"Assessment: "</strong>
                                                        {request.assessment.clone()}
                                                    </p>
                                                    <p>
                                                        <strong>"Year & Section: "</strong>
                                                        {request.year_section.clone()}
                                                    </p>
                                                    <p>
                                                        <strong>"Course: "</strong>
                                                        {request.department_course.clone()}
                                                    </p>
                                                    <p>
                                                        <strong>"ID Number: "</strong>
                                                        {request.school_id_number.clone()}
                                                    </p>
                                                </div>
                                                <p class="request-submitted">
                                                    "Submitted: "
                                                    {derived::format_date_time(Some(&request.created_at))}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
