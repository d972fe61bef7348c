//! Types and Traits for working with asynchronous tasks.

mod sleep;
mod sleep_until;

pub use sleep::{sleep, Sleep};
pub use sleep_until::{sleep_until, SleepUntil};
