//! Simulated network latency.
//!
//! In the browser (hydrate) this yields to the event loop through
//! `gloo-timers`. Native builds (SSR and tests) sleep on the tokio timer, so
//! the mocks keep their latency wherever they run.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(feature = "hydrate"))]
    tokio::time::sleep(duration).await;
}
