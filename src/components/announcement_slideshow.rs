//! Announcement Slideshow Component
//!
//! Rotating carousel of the five newest announcements. Advances every five
//! seconds unless the pointer is over it; arrows and dots navigate manually
//! and wrap around at both ends.

use leptos::prelude::*;

use crate::api;
use crate::config::AppConfig;
use crate::derived;
use crate::poll;
use crate::remote::{RemoteState, RemoteStore};

const SLIDE_COUNT: usize = 5;
const SLIDE_INTERVAL_MS: u32 = 5_000;

#[component]
pub fn AnnouncementSlideshow() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = RemoteStore::new();
    let (current, set_current) = signal(0usize);
    let (paused, set_paused) = signal(false);

    {
        let config = config.clone();
        store.load(async move {
            api::list_announcements(&config)
                .await
                .map(|items| derived::top_n(&items, SLIDE_COUNT))
        });
    }

    // Auto-advance; skipped while hovered or with nothing to rotate through
    poll::on_interval(SLIDE_INTERVAL_MS, move || {
        if paused.get_untracked() {
            return;
        }
        let len = store
            .state()
            .with_untracked(|state| state.data().map(|items| items.len()).unwrap_or(0));
        if len > 1 {
            let _ = set_current.try_update(|index| *index = derived::next_index(*index, len));
        }
    });

    view! {
        <section
            class="announcement-slideshow"
            on:mouseenter=move |_| set_paused.set(true)
            on:mouseleave=move |_| set_paused.set(false)
        >
            <h2 class="slideshow-heading">"Latest Announcements"</h2>
            <p class="slideshow-subtitle">
                "Stay updated with the latest news and important information from the clinic."
            </p>

            {move || match store.state().get() {
                RemoteState::Idle | RemoteState::Loading => {
                    view! { <p class="slideshow-loading">"Loading announcements..."</p> }.into_any()
                }
                RemoteState::Failed(message) => {
                    view! { <div class="slideshow-error">{message}</div> }.into_any()
                }
                RemoteState::Ready(items) if items.is_empty() => {
                    view! {
                        <div class="slideshow-empty">
                            <p>"No announcements available at the moment."</p>
                            <p class="slideshow-empty-hint">"Please check back later for updates."</p>
                        </div>
                    }
                    .into_any()
                }
                RemoteState::Ready(items) => {
                    let len = items.len();
                    let index = current.get().min(len - 1);
                    let slide = items[index].clone();
                    view! {
                        <div class="slideshow-frame">
                            <div class="slide">
                                <span class="slide-tag">"Announcement"</span>
                                <span class="slide-date">
                                    {derived::format_date_time(Some(&slide.created_at))}
                                </span>
                                <h3 class="slide-title">{slide.title}</h3>
                                <p class="slide-body">{slide.description}</p>
                            </div>

                            <div class="slide-controls">
                                <button
                                    class="slide-prev"
                                    aria-label="Previous announcement"
                                    on:click=move |_| {
                                        set_current.update(|i| *i = derived::prev_index(*i, len))
                                    }
                                >
                                    "‹"
                                </button>
                                <button
                                    class="slide-next"
                                    aria-label="Next announcement"
                                    on:click=move |_| {
                                        set_current.update(|i| *i = derived::next_index(*i, len))
                                    }
                                >
                                    "›"
                                </button>
                            </div>

                            <div class="slide-dots">
                                {(0..len)
                                    .map(|i| {
                                        let class = if i == index { "dot active" } else { "dot" };
                                        view! {
                                            <button
                                                class=class
                                                aria-label=format!("Go to slide {}", i + 1)
                                                on:click=move |_| set_current.set(i)
                                            ></button>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <p class="slide-counter">
                                {format!("{} of {} announcements", index + 1, len)}
                            </p>
                            <p class="slide-pause-state">
                                {if paused.get() { "Paused" } else { "Auto-playing" }}
                            </p>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
