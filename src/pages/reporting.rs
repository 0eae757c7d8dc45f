//! Reporting Dashboard Page
//!
//! Monthly activity report plus the chronological timeline, both re-fetched
//! whenever the month, year, or timeline resolution changes. Every figure is
//! server-computed; this page only arranges them.

use leptos::prelude::*;

use crate::api;
use crate::components::StatCard;
use crate::config::AppConfig;
use crate::derived;
use crate::models::{DiseaseStats, InventoryStats, MonthlyReport, Timeline};
use crate::remote::{RemoteState, RemoteStore};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub(crate) fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get((month as usize).saturating_sub(1))
        .copied()
        .unwrap_or("Unknown")
}

/// Number of days in a month, leap years included
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let first = chrono::NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        chrono::NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        chrono::NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 31,
    }
}

/// Inclusive date range covering one month, as query-ready strings
pub(crate) fn month_range(year: i32, month: u32) -> (String, String) {
    let last_day = days_in_month(year, month);
    (
        format!("{year}-{month:02}-01"),
        format!("{year}-{month:02}-{last_day:02}"),
    )
}

fn current_month_year() -> (u32, i32) {
    let now = js_sys::Date::new_0();
    ((now.get_month() + 1), now.get_full_year() as i32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReportTab {
    Overview,
    Medical,
    Inventory,
    Registrations,
    Chronological,
}

const TABS: [(ReportTab, &str); 5] = [
    (ReportTab::Overview, "Overview"),
    (ReportTab::Medical, "Medical"),
    (ReportTab::Inventory, "Inventory"),
    (ReportTab::Registrations, "Registrations"),
    (ReportTab::Chronological, "Chronological"),
];

#[component]
pub fn ReportingDashboardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (initial_month, initial_year) = current_month_year();

    let (month, set_month) = signal(initial_month);
    let (year, set_year) = signal(initial_year);
    let (resolution, set_resolution) = signal("day".to_string());
    let (tab, set_tab) = signal(ReportTab::Overview);

    let report: RemoteStore<MonthlyReport> = RemoteStore::new();
    let timeline: RemoteStore<Timeline> = RemoteStore::new();

    // All-time aggregates are not month-scoped; fetched once per mount.
    let all_time: RemoteStore<DiseaseStats> = RemoteStore::new();
    let stock: RemoteStore<InventoryStats> = RemoteStore::new();

    {
        let config = config.clone();
        all_time.load(async move { api::disease_stats(&config).await });
    }
    {
        let config = config.clone();
        stock.load(async move { api::inventory_stats(&config).await });
    }

    {
        let config = config.clone();
        Effect::new(move |_| {
            let month = month.get();
            let year = year.get();
            let resolution = resolution.get();
            let (start, end) = month_range(year, month);
            {
                let config = config.clone();
                report.load(async move { api::monthly_report(&config, month, year).await });
            }
            let config = config.clone();
            timeline.load(async move {
                api::chronological_timeline(&config, &resolution, &start, &end).await
            });
        });
    }

    let selectors = move || {
        view! {
            <div class="filter-bar">
                <label class="filter-field">
                    "Month"
                    <select
                        prop:value=move || month.get().to_string()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse() {
                                set_month.set(value);
                            }
                        }
                    >
                        {(1u32..=12)
                            .map(|m| {
                                view! {
                                    <option value=m.to_string()>{month_name(m)}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="filter-field">
                    "Year"
                    <select
                        prop:value=move || year.get().to_string()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse() {
                                set_year.set(value);
                            }
                        }
                    >
                        {(initial_year - 4..=initial_year)
                            .rev()
                            .map(|y| view! { <option value=y.to_string()>{y}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="filter-field">
                    "Group By"
                    <select
                        prop:value=move || resolution.get()
                        on:change=move |ev| set_resolution.set(event_target_value(&ev))
                    >
                        <option value="day">"Day"</option>
                        <option value="week">"Week"</option>
                        <option value="month">"Month"</option>
                    </select>
                </label>
            </div>
        }
    };

    let tab_bar = move || {
        TABS.into_iter()
            .map(|(value, label)| {
                view! {
                    <button
                        class=move || if tab.get() == value { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(value)
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let overview_tab = |data: &MonthlyReport| {
        let summary = &data.summary;
        let net = summary.total_inventory_added as i64 - summary.total_inventory_consumed as i64;
        view! {
            <div class="stat-grid">
                <StatCard
                    label="Total Cases"
                    value=summary.total_medical_cases.to_string()
                    hint=format!("Avg: {:.1} per day", data.medical.average_per_day)
                />
                <StatCard
                    label="Units Consumed"
                    value=summary.total_inventory_consumed.to_string()
                    hint=format!("Net: {net}")
                />
                <StatCard
                    label="Units Added"
                    value=summary.total_inventory_added.to_string()
                    hint=format!(
                        "Value: {}",
                        derived::format_currency(summary.total_inventory_value),
                    )
                />
                <StatCard
                    label="Registrations"
                    value=summary.total_registrations.to_string()
                    hint=format!(
                        "New: {} | Returning: {}",
                        data.registrations.new_vs_returning.new,
                        data.registrations.new_vs_returning.returning,
                    )
                />
            </div>
        }
        .into_any()
    };

    let medical_tab = move |data: &MonthlyReport| {
        let medical = &data.medical;
        let top: Vec<_> = medical.top_diseases.iter().take(5).cloned().collect();
        let statuses: Vec<_> = medical
            .status_breakdown
            .iter()
            .map(|(status, count)| (status.clone(), *count))
            .collect();
        let severity = medical.severity_breakdown.clone();
        view! {
            <div class="panel">
                <h3>"Top Diseases"</h3>
                {if top.is_empty() {
                    view! { <p class="panel-empty">"No cases recorded this month."</p> }.into_any()
                } else {
                    top.into_iter()
                        .map(|disease| {
                            view! {
                                <div class="breakdown-row">
                                    <span class="breakdown-label">{disease.disease.clone()}</span>
                                    <span class="breakdown-count">{disease.count}</span>
                                    <div class="breakdown-bar">
                                        <div
                                            class="breakdown-fill"
                                            style:width=format!("{}%", disease.percentage)
                                        ></div>
                                    </div>
                                    <span class="breakdown-pct">
                                        {format!("{:.0}%", disease.percentage)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <div class="panel">
                <h3>"Status Breakdown"</h3>
                {statuses
                    .into_iter()
                    .map(|(status, count)| {
                        view! {
                            <div class="breakdown-row">
                                <span class="breakdown-label">{status}</span>
                                <span class="breakdown-count">{count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="panel">
                <h3>"Severity"</h3>
                <div class="stat-grid">
                    <StatCard label="Mild" value=severity.mild.to_string() />
                    <StatCard label="Moderate" value=severity.moderate.to_string() />
                    <StatCard label="Severe" value=severity.severe.to_string() />
                    <StatCard label="Critical" value=severity.critical.to_string() />
                </div>
            </div>
            <div class="panel">
                <h3>"All-Time Disease Statistics"</h3>
                {move || match all_time.state().get() {
                    RemoteState::Idle | RemoteState::Loading => {
                        view! { <p class="page-loading">"Loading statistics..."</p> }.into_any()
                    }
                    RemoteState::Failed(message) => {
                        view! { <div class="page-error">{message}</div> }.into_any()
                    }
                    RemoteState::Ready(stats) => view! {
                        <div class="stat-grid">
                            <StatCard
                                label="Total Cases"
                                value=stats.total_cases.to_string()
                                hint=format!("Avg {:.1} per day", stats.daily_average)
                            />
                            <StatCard
                                label="Distinct Diseases"
                                value=stats.diseases.len().to_string()
                            />
                            <StatCard
                                label="Departments Affected"
                                value=stats.department.len().to_string()
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        }
        .into_any()
    };

    let inventory_tab = move |data: &MonthlyReport| {
        let consumption = data.inventory.consumption.clone();
        let additions = data.inventory.additions.clone();
        view! {
            <div class="panel">
                <h3>"Top Consumed Items"</h3>
                {if consumption.top_consumed_items.is_empty() {
                    view! { <p class="panel-empty">"No consumption recorded this month."</p> }
                        .into_any()
                } else {
                    consumption
                        .top_consumed_items
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="breakdown-row">
                                    <span class="breakdown-label">{item.item_name.clone()}</span>
                                    <span class="breakdown-count">
                                        {format!("{} {}", item.total_quantity, item.unit)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <div class="panel">
                <h3>"Additions"</h3>
                <div class="stat-grid">
                    <StatCard label="Units Added" value=additions.total_added.to_string() />
                    <StatCard
                        label="Total Value"
                        value=derived::format_currency(additions.total_value)
                    />
                    <StatCard
                        label="Categories"
                        value=additions.categories_added.len().to_string()
                    />
                </div>
            </div>
            <div class="panel">
                <h3>"Current Stock"</h3>
                {move || match stock.state().get() {
                    RemoteState::Idle | RemoteState::Loading => {
                        view! { <p class="page-loading">"Loading stock overview..."</p> }.into_any()
                    }
                    RemoteState::Failed(message) => {
                        view! { <div class="page-error">{message}</div> }.into_any()
                    }
                    RemoteState::Ready(stats) => view! {
                        <div class="stat-grid">
                            <StatCard
                                label="Items On Hand"
                                value=stats.total_items.to_string()
                                hint=format!(
                                    "Value: {}",
                                    derived::format_currency(stats.total_value),
                                )
                            />
                            <StatCard
                                label="Low Stock"
                                value=stats.low_stock_items.len().to_string()
                            />
                            <StatCard
                                label="Expiring Soon"
                                value=stats.expiring_items.len().to_string()
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        }
        .into_any()
    };

    let registrations_tab = |data: &MonthlyReport| {
        let registrations = data.registrations.clone();
        let grades: Vec<_> = registrations
            .grade_level_breakdown
            .iter()
            .map(|(grade, count)| (grade.clone(), *count))
            .collect();
        view! {
            <div class="panel">
                <h3>"Registrations"</h3>
                <div class="stat-grid">
                    <StatCard
                        label="Total"
                        value=registrations.total_registrations.to_string()
                    />
                    <StatCard
                        label="New"
                        value=registrations.new_vs_returning.new.to_string()
                    />
                    <StatCard
                        label="Returning"
                        value=registrations.new_vs_returning.returning.to_string()
                    />
                </div>
                <div class="stat-grid">
                    <StatCard
                        label="Male"
                        value=registrations.gender_breakdown.male.to_string()
                    />
                    <StatCard
                        label="Female"
                        value=registrations.gender_breakdown.female.to_string()
                    />
                    <StatCard
                        label="Other"
                        value=registrations.gender_breakdown.other.to_string()
                    />
                </div>
                <h3>"By Grade Level"</h3>
                {grades
                    .into_iter()
                    .map(|(grade, count)| {
                        view! {
                            <div class="breakdown-row">
                                <span class="breakdown-label">{grade}</span>
                                <span class="breakdown-count">{count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let chronological_tab = move || match timeline.state().get() {
        RemoteState::Idle | RemoteState::Loading => {
            view! { <p class="page-loading">"Loading timeline..."</p> }.into_any()
        }
        RemoteState::Failed(message) => {
            view! { <div class="page-error">{message}</div> }.into_any()
        }
        RemoteState::Ready(data) if data.timeline.is_empty() => {
            view! { <p class="panel-empty">"No activity in this period."</p> }.into_any()
        }
        RemoteState::Ready(data) => view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Cases"</th>
                        <th>"Consumed"</th>
                        <th>"Added"</th>
                        <th>"Net"</th>
                        <th>"New Students"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .timeline
                        .into_iter()
                        .map(|point| {
                            let cases =
                                point.medical.as_ref().map(|m| m.cases).unwrap_or(0);
                            let (consumed, added, net) = point
                                .inventory
                                .as_ref()
                                .map(|inv| (inv.consumed, inv.added, inv.net_change))
                                .unwrap_or((0, 0, 0));
                            let new_students = point
                                .registrations
                                .as_ref()
                                .map(|r| r.new)
                                .unwrap_or(0);
                            view! {
                                <tr>
                                    <td>{point.date.clone()}</td>
                                    <td>{cases}</td>
                                    <td>{consumed}</td>
                                    <td>{added}</td>
                                    <td>{net}</td>
                                    <td>{new_students}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    let content = move || {
        if tab.get() == ReportTab::Chronological {
            return chronological_tab();
        }
        match report.state().get() {
            RemoteState::Idle | RemoteState::Loading => {
                view! { <p class="page-loading">"Loading report..."</p> }.into_any()
            }
            RemoteState::Failed(message) => {
                view! { <div class="page-error">{message}</div> }.into_any()
            }
            RemoteState::Ready(data) => match tab.get() {
                ReportTab::Medical => medical_tab(&data),
                ReportTab::Inventory => inventory_tab(&data),
                ReportTab::Registrations => registrations_tab(&data),
                _ => overview_tab(&data),
            },
        }
    };

    view! {
        <div class="page reporting-page">
            <div class="page-header">
                <h1>"Reporting Dashboard"</h1>
                <p class="page-subtitle">
                    {move || format!("Activity for {} {}", month_name(month.get()), year.get())}
                </p>
            </div>

            {selectors}
            <div class="tab-bar">{tab_bar}</div>
            {content}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
    }

    #[test]
    fn test_month_range_is_query_ready() {
        assert_eq!(
            month_range(2025, 3),
            ("2025-03-01".to_string(), "2025-03-31".to_string())
        );
        assert_eq!(
            month_range(2024, 2),
            ("2024-02-01".to_string(), "2024-02-29".to_string())
        );
    }
}
