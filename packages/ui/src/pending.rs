//! Simulated latency for the stand-in calls.

use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;
use tracing::debug;

#[cfg(target_arch = "wasm32")]
pub async fn simulate_latency(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn simulate_latency(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Busy flag of one triggering control.
///
/// While a task started through [`InFlight::run`] is outstanding, further
/// submissions are dropped.
#[derive(Clone, Copy, PartialEq)]
pub struct InFlight {
    busy: Signal<bool>,
}

impl InFlight {
    pub fn is_busy(&self) -> bool {
        (self.busy)()
    }

    /// Spawn `task` unless one is already running. Returns whether it started.
    pub fn run<F>(&self, label: &'static str, task: F) -> bool
    where
        F: Future<Output = ()> + 'static,
    {
        let mut busy = self.busy;
        if *busy.peek() {
            debug!("pending.run: {} already in flight, ignoring", label);
            return false;
        }
        busy.set(true);
        spawn(async move {
            task.await;
            busy.set(false);
        });
        true
    }
}

pub fn use_in_flight() -> InFlight {
    InFlight {
        busy: use_signal(|| false),
    }
}
