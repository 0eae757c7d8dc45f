//! Remote Data Stores
//!
//! Per-page holder for one fetched collection: the `idle → loading →
//! {ready, failed}` lifecycle, plus a monotonic request-sequence gate so
//! that only the most recently issued request may commit its result. A slow
//! response from a superseded request is discarded no matter when it lands.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::api::ApiError;

/// Lifecycle of one remotely fetched value
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RemoteState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Token identifying one issued request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic sequence of issued requests. Only the token handed out by the
/// latest `begin` passes `is_current`; everything older is stale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestGate {
    issued: u64,
}

impl RequestGate {
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}

/// Apply a foreground result: both outcomes replace the visible state.
pub fn commit<T>(state: &mut RemoteState<T>, outcome: Result<T, String>) {
    *state = match outcome {
        Ok(data) => RemoteState::Ready(data),
        Err(message) => RemoteState::Failed(message),
    };
}

/// Apply a background-refresh result: failures keep the last good value and
/// are only logged, never shown.
pub fn commit_background<T>(state: &mut RemoteState<T>, outcome: Result<T, String>) {
    match outcome {
        Ok(data) => *state = RemoteState::Ready(data),
        Err(message) => log::warn!("background refresh failed: {message}"),
    }
}

/// Reactive wrapper owned by a single mounted view
#[derive(Debug)]
pub struct RemoteStore<T: Clone + Send + Sync + 'static> {
    state: RwSignal<RemoteState<T>>,
    gate: RwSignal<RequestGate>,
}

impl<T: Clone + Send + Sync + 'static> Clone for RemoteStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for RemoteStore<T> {}

impl<T: Clone + Send + Sync + 'static> Default for RemoteStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> RemoteStore<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(RemoteState::Idle),
            gate: RwSignal::new(RequestGate::default()),
        }
    }

    /// Reactive read access for views
    pub fn state(&self) -> RwSignal<RemoteState<T>> {
        self.state
    }

    /// Foreground fetch: enters `Loading` (clearing any prior error), then
    /// commits whichever outcome still holds the latest token.
    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let token = match self.gate.try_update(|gate| gate.begin()) {
            Some(token) => token,
            None => return,
        };
        self.state.set(RemoteState::Loading);
        let state = self.state;
        let gate = self.gate;
        spawn_local(async move {
            let outcome = fut.await.map_err(|err| err.user_message());
            let current = gate
                .try_get_untracked()
                .map(|g| g.is_current(token))
                .unwrap_or(false);
            if current {
                state.try_update(|s| commit(s, outcome));
            }
        });
    }

    /// Background refresh: no `Loading` transition, failures retained as the
    /// last good value per the poll contract.
    pub fn refresh<F>(&self, fut: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let token = match self.gate.try_update(|gate| gate.begin()) {
            Some(token) => token,
            None => return,
        };
        let state = self.state;
        let gate = self.gate;
        spawn_local(async move {
            let outcome = fut.await.map_err(|err| err.user_message());
            let current = gate
                .try_get_untracked()
                .map(|g| g.is_current(token))
                .unwrap_or(false);
            if current {
                state.try_update(|s| commit_background(s, outcome));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_latest_token_wins_regardless_of_resolution_order() {
        let mut gate = RequestGate::default();
        let mut state: RemoteState<&str> = RemoteState::Loading;

        let first = gate.begin();
        let second = gate.begin();

        // Request B resolves first and commits.
        assert!(gate.is_current(second));
        commit(&mut state, Ok("from B"));

        // Request A resolves late; its token is stale, so it must not commit.
        assert!(!gate.is_current(first));
        assert_eq!(state, RemoteState::Ready("from B"));
    }

    #[test]
    fn test_gate_discards_early_result_when_reissued() {
        let mut gate = RequestGate::default();
        let first = gate.begin();
        // A finishes before B is even issued; once B exists, A is stale.
        assert!(gate.is_current(first));
        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_commit_replaces_error_with_data_and_back() {
        let mut state: RemoteState<u32> = RemoteState::Idle;
        commit(&mut state, Err("Failed to fetch announcements".to_string()));
        assert_eq!(
            state,
            RemoteState::Failed("Failed to fetch announcements".to_string())
        );

        // Re-fetch enters Loading, which clears the prior error.
        state = RemoteState::Loading;
        assert_eq!(state, RemoteState::Loading);

        commit(&mut state, Ok(7));
        assert_eq!(state.data(), Some(&7));
    }

    #[test]
    fn test_background_failure_keeps_last_good_value() {
        let mut state = RemoteState::Ready(42);
        commit_background(&mut state, Err("network error".to_string()));
        assert_eq!(state.data(), Some(&42));

        commit_background(&mut state, Ok(43));
        assert_eq!(state.data(), Some(&43));
    }
}
