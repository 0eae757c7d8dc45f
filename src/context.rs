//! Application Context
//!
//! Shared navigation state provided via Leptos Context API. The config and
//! session store are provided separately; this carries the active page.

use leptos::prelude::*;

use crate::pages::Page;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed admin page - read
    pub page: ReadSignal<Page>,
    /// Currently displayed admin page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch the main content area to another page
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

/// Get the app context from context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
