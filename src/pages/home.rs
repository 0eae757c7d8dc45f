//! Admin Home Page

use leptos::prelude::*;

use crate::components::AnnouncementSlideshow;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p class="page-subtitle">"Welcome to the UCC Clinic admin console."</p>
            </div>
            <AnnouncementSlideshow />
        </div>
    }
}
