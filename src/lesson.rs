//! A worked lesson on cooperative scheduling.
//!
//! This module is the companion to the runnable programs under `lessons/`.
//! The idea: a task that needs to wait does not block the thread, it parks
//! itself on the event loop and hands control back. The event loop sleeps
//! until the earliest deadline, wakes the task, and execution resumes right
//! where it left off.
//!
//! [`demonstrate_concept`] is the smallest complete example of that cycle -
//! one suspension point, one deterministic result. [`run`] drives it the way
//! a program would, printing the value it produces. Nothing here requires a
//! real resource to wait on, which keeps both the lesson and its tests fast
//! and deterministic.

use crate::task::sleep;
use crate::time::Duration;

/// Simulates a short async operation and returns a predetermined result.
///
/// The suspension stands in for an external wait - a read from disk, a
/// response from a peer - without needing a real resource: the task parks
/// itself on a one millisecond timer, yields to the event loop, and produces
/// its value once the timer wakes it. There are no side effects besides the
/// suspension itself, and no shared state: awaiting this function twice,
/// sequentially or concurrently, yields two independent, equal results.
///
/// # Examples
///
/// ```
/// use tutor::lesson::demonstrate_concept;
///
/// tutor::runtime::block_on(async {
///     assert_eq!(demonstrate_concept().await, "Expected Result");
/// });
/// ```
pub async fn demonstrate_concept() -> String {
    // Simulate a brief async operation.
    sleep(Duration::from_millis(1)).await;
    String::from("Expected Result")
}

/// Entrypoint for this lesson.
///
/// Orchestrates the demonstration by awaiting [`demonstrate_concept`] and
/// printing the result, followed by a newline. There is deliberately no
/// error handling here: nothing in the lesson can fail, and a panic
/// propagating out of the event loop is exactly what we would want while
/// learning.
///
/// # Examples
///
/// ```
/// tutor::runtime::block_on(tutor::lesson::run());
/// ```
pub async fn run() {
    let result = demonstrate_concept().await;
    println!("{result}");
}
