//! Lesson 02: two timers, one thread.
//!
//! Awaiting two sleeps concurrently takes as long as the longest one, not
//! the sum of both: while one task is parked on its deadline, the event loop
//! is free to make progress on the other.
//!
//! Run with `cargo run --example lesson_02_concurrent_sleeps`.

use futures_concurrency::future::Join;
use tutor::task::sleep;
use tutor::time::{Duration, Instant};

#[tutor::main]
async fn main() {
    let started = Instant::now();

    (
        sleep(Duration::from_millis(20)),
        sleep(Duration::from_millis(30)),
    )
        .join()
        .await;

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(30));
    println!(
        "both timers resolved after {}",
        humantime::format_duration(elapsed.into())
    );
}
