//! Lesson 01: your first suspension point.
//!
//! A task that needs to wait does not block the thread. It parks itself on
//! the event loop and hands control back; the event loop sleeps until the
//! deadline and wakes the task, which resumes right where it left off.
//!
//! Run with `cargo run --example lesson_01_hello_await`.

use tutor::task::sleep;
use tutor::time::{Duration, Instant};

#[tutor::main]
async fn main() {
    let started = Instant::now();

    println!("suspending for ten milliseconds...");
    sleep(Duration::from_millis(10)).await;

    let elapsed: std::time::Duration = started.elapsed().into();
    println!("resumed after {}", humantime::format_duration(elapsed));
}
