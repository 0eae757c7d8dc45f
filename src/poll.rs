//! Polling Controller
//!
//! Fixed-interval re-fetch for live indicators (the sidebar's pending-count
//! badge, the announcement slideshow's auto-advance). The schedule is a value
//! held by the owning view; teardown cancels it, so no tick can fire after
//! unmount.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::on_cleanup;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle to a running schedule; cancellation is idempotent
#[derive(Clone, Debug)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Run `tick` every `period_ms` until the returned handle is cancelled.
/// The cancellation flag is checked before each tick, so a cancel during the
/// sleep suppresses the tick that would have followed it.
pub fn start(period_ms: u32, mut tick: impl FnMut() + 'static) -> PollHandle {
    let handle = PollHandle {
        cancelled: Arc::new(AtomicBool::new(false)),
    };
    let watcher = handle.clone();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(period_ms).await;
            if watcher.is_cancelled() {
                break;
            }
            tick();
        }
    });
    handle
}

/// [`start`], with cancellation registered on the current reactive owner so
/// the schedule dies with the view that created it
pub fn on_interval(period_ms: u32, tick: impl FnMut() + 'static) -> PollHandle {
    let handle = start(period_ms, tick);
    let cleanup = handle.clone();
    on_cleanup(move || cleanup.cancel());
    handle
}

/// Overlap bookkeeping for one polled fetch. A tick that fires while the
/// previous fetch is still in flight is skipped, not stacked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PollGate {
    in_flight: bool,
}

impl PollGate {
    /// Returns true when the caller should start a fetch for this tick
    pub fn try_start(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Host-side stand-in for the spawned loop: one iteration per simulated
    /// interval, same flag check as `start`.
    fn drive(ticks: u32, handle: &PollHandle, gate: &mut PollGate, fetches: &mut u32) {
        for _ in 0..ticks {
            if handle.is_cancelled() {
                break;
            }
            if gate.try_start() {
                *fetches += 1;
                gate.finish();
            }
        }
    }

    #[test]
    fn test_n_intervals_produce_n_fetches_then_none_after_cancel() {
        let handle = PollHandle {
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        let mut gate = PollGate::default();
        let mut fetches = 0;

        drive(3, &handle, &mut gate, &mut fetches);
        assert_eq!(fetches, 3);

        handle.cancel();
        drive(5, &handle, &mut gate, &mut fetches);
        assert_eq!(fetches, 3);
    }

    #[test]
    fn test_overlapping_tick_is_skipped_not_stacked() {
        let mut gate = PollGate::default();

        assert!(gate.try_start());
        // Second and third ticks fire while the first fetch is in flight.
        assert!(!gate.try_start());
        assert!(!gate.try_start());

        gate.finish();
        assert!(gate.try_start());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let handle = PollHandle {
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
    }
}
