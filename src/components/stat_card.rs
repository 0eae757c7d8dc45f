//! Stat Card Component

use leptos::prelude::*;

/// Single headline figure with a label and optional footnote
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into, optional)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
            {hint.map(|text| view! { <p class="stat-hint">{text}</p> })}
        </div>
    }
}
