//! Comprehensive Reports Page
//!
//! One server-computed aggregate combining disease statistics and inventory
//! health for a selected month.

use leptos::prelude::*;

use crate::api;
use crate::components::StatCard;
use crate::config::AppConfig;
use crate::derived;
use crate::models::ComprehensiveReport;
use crate::pages::reporting::{days_in_month, month_name};
use crate::remote::{RemoteState, RemoteStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReportTab {
    Overview,
    Diseases,
    Inventory,
}

const TABS: [(ReportTab, &str); 3] = [
    (ReportTab::Overview, "Overview"),
    (ReportTab::Diseases, "Diseases"),
    (ReportTab::Inventory, "Inventory"),
];

#[component]
pub fn ComprehensiveReportsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let now = js_sys::Date::new_0();
    let initial_month = now.get_month() + 1;
    let initial_year = now.get_full_year() as i32;

    let (month, set_month) = signal(initial_month);
    let (year, set_year) = signal(initial_year);
    let (tab, set_tab) = signal(ReportTab::Overview);

    let report: RemoteStore<ComprehensiveReport> = RemoteStore::new();

    {
        let config = config.clone();
        Effect::new(move |_| {
            let month = month.get();
            let year = year.get();
            let config = config.clone();
            report.load(async move { api::comprehensive_report(&config, month, year).await });
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
                                view! { <option value=m.to_string()>{month_name(m)}</option> }
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
            </div>
        }
    };

    let overview_tab = |data: &ComprehensiveReport| {
        let summary = data.summary.clone();
        let period = data.period.clone();
        let top_disease = if summary.top_disease.is_empty() {
            "None".to_string()
        } else {
            summary.top_disease.clone()
        };
        view! {
            <div class="stat-grid">
                <StatCard
                    label="Medical Cases"
                    value=summary.total_medical_cases.to_string()
                    hint=format!("Avg {:.1} per day", summary.average_daily_cases)
                />
                <StatCard
                    label="Top Disease"
                    value=top_disease
                    hint=format!(
                        "{} cases ({:.0}%)",
                        summary.top_disease_count,
                        summary.top_disease_percentage,
                    )
                />
                <StatCard
                    label="Inventory Items"
                    value=summary.total_inventory_items.to_string()
                    hint=format!(
                        "Value: {}",
                        derived::format_currency(summary.total_inventory_value),
                    )
                />
                <StatCard
                    label="Attention Needed"
                    value=(summary.low_stock_count + summary.expiring_items_count).to_string()
                    hint=format!(
                        "{} low stock, {} expiring",
                        summary.low_stock_count,
                        summary.expiring_items_count,
                    )
                />
            </div>
            <p class="period-note">
                {format!(
                    "Covering {} to {} ({} days)",
                    period.start_date,
                    period.end_date,
                    period.days_in_month,
                )}
            </p>
        }
        .into_any()
    };

    let diseases_tab = |data: &ComprehensiveReport| {
        let stats = data.disease_statistics.clone();
        view! {
            <div class="panel">
                <h3>"Top Diseases"</h3>
                {if stats.top_diseases.is_empty() {
                    view! { <p class="panel-empty">"No cases recorded this month."</p> }.into_any()
                } else {
                    stats
                        .top_diseases
                        .iter()
                        .map(|disease| {
                            let students = stats
                                .disease_details
                                .get(&disease.disease)
                                .map(|detail| detail.students.len())
                                .unwrap_or(0);
                            view! {
                                <div class="breakdown-row">
                                    <span class="breakdown-label">{disease.disease.clone()}</span>
                                    <span class="breakdown-count">{disease.count}</span>
                                    <span class="breakdown-pct">
                                        {format!("{:.0}%", disease.percentage)}
                                    </span>
                                    <span class="breakdown-note">
                                        {format!("{students} student(s)")}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <div class="panel">
                <h3>"By Department"</h3>
                {stats
                    .department
                    .iter()
                    .map(|(department, count)| {
                        let count = *count;
                        view! {
                            <div class="breakdown-row">
                                <span class="breakdown-label">{department.clone()}</span>
                                <span class="breakdown-count">{count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let inventory_tab = |data: &ComprehensiveReport| {
        let stats = data.inventory_statistics.clone();
        view! {
            <div class="panel">
                <h3>"Low Stock"</h3>
                {if stats.low_stock_items.is_empty() {
                    view! { <p class="panel-empty">"No items below minimum stock."</p> }.into_any()
                } else {
                    stats
                        .low_stock_items
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="breakdown-row">
                                    <span class="breakdown-label">{item.name.clone()}</span>
                                    <span class="breakdown-count">
                                        {format!("{} (min {})", item.quantity, item.min_stock)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <div class="panel">
                <h3>"Expiring Soon"</h3>
                {if stats.expiring_items.is_empty() {
                    view! { <p class="panel-empty">"Nothing expiring soon."</p> }.into_any()
                } else {
                    stats
                        .expiring_items
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="breakdown-row">
                                    <span class="breakdown-label">{item.name.clone()}</span>
                                    <span class="breakdown-count">
                                        {derived::format_day(item.expiration_date.as_ref())}
                                    </span>
                                    <span class="breakdown-note">
                                        {format!("{} day(s) left", item.days_until_expiration)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <div class="panel">
                <h3>"Newly Added"</h3>
                {stats
                    .newly_added
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="breakdown-row">
                                <span class="breakdown-label">{item.name.clone()}</span>
                                <span class="breakdown-count">{item.quantity}</span>
                                <span class="breakdown-note">{item.category.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let content = move || match report.state().get() {
        RemoteState::Idle | RemoteState::Loading => {
            view! { <p class="page-loading">"Loading report..."</p> }.into_any()
        }
        RemoteState::Failed(message) => {
            view! { <div class="page-error">{message}</div> }.into_any()
        }
        RemoteState::Ready(data) => match tab.get() {
            ReportTab::Diseases => diseases_tab(&data),
            ReportTab::Inventory => inventory_tab(&data),
            ReportTab::Overview => overview_tab(&data),
        },
    };

    view! {
        <div class="page comprehensive-page">
            <div class="page-header">
                <h1>"Comprehensive Reports"</h1>
                <p class="page-subtitle">
                    {move || {
                        format!(
                            "Disease and inventory statistics for {} {} ({} days)",
                            month_name(month.get()),
                            year.get(),
                            days_in_month(year.get(), month.get()),
                        )
                    }}
                </p>
            </div>

            {selectors}
            <div class="tab-bar">
                {TABS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == value { "tab active" } else { "tab" }
                                }
                                on:click=move |_| set_tab.set(value)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {content}
        </div>
    }
}
