#![cfg(not(feature = "hydrate"))]

use std::time::Instant;

use super::*;

#[tokio::test]
async fn sleep_waits_requested_duration() {
    let started = Instant::now();
    sleep(Duration::from_millis(40)).await;
    assert!(started.elapsed() >= Duration::from_millis(40));
}

#[tokio::test]
async fn sleep_zero_returns() {
    sleep(Duration::ZERO).await;
}
