//! Global Session State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only the
//! state the shell shares across pages: the signed-in user and the pending
//! request count backing the sidebar badge. Everything else is page-local.

use crate::models::User;
use leptos::prelude::*;
use reactive_stores::Store;

/// Cross-page session state
#[derive(Clone, Debug, Default, Store)]
pub struct Session {
    /// Signed-in account, None while on the login screen
    pub user: Option<User>,
    /// Pending medical requests, refreshed by the sidebar poll
    pub pending_requests: usize,
}

/// Type alias for the store
pub type SessionStore = Store<Session>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a successful login
pub fn session_login(store: &SessionStore, user: User) {
    store.user().set(Some(user));
}

/// Clear the session on logout
pub fn session_logout(store: &SessionStore) {
    store.user().set(None);
    store.pending_requests().set(0);
}

/// Update the sidebar badge count
pub fn store_pending_count(store: &SessionStore, count: usize) {
    store.pending_requests().set(count);
}
