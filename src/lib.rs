#![warn(future_incompatible, unreachable_pub)]

//! A tiny single-threaded async runtime for teaching cooperative concurrency
//!
//! This is a minimal, self-contained async runtime written to accompany a
//! series of lessons on cooperative scheduling. Production code should reach
//! for async-std, smol, or tokio instead; those runtimes are faster, fairer,
//! and far more capable. This crate exists so that every moving part of an
//! event loop - the reactor, the wakers, the timer futures - fits in a single
//! afternoon of reading.
//!
//! # Examples
//!
//! **The first lesson**
//!
//! ```rust,no_run
#![doc = include_str!("../lessons/01_hello_await.rs")]
//! ```
//!
//! # Design Decisions
//!
//! This library is entirely self-contained. It does not share traits or types
//! with any other async runtime, trading compatibility for the ability to
//! read the whole thing top to bottom.
//!
//! The runtime is strictly single-threaded: one logical task runs at a time,
//! suspension points are explicit `.await`s, and the only wake-up source is a
//! timer deadline expiring. Because no `Send` bounds are ever required, the
//! implementation can stay close to the textbook definition of a cooperative
//! scheduler, which is the point.

pub mod future;
pub mod lesson;
pub mod runtime;
pub mod task;
pub mod time;

pub use tutor_macro::attr_macro_main as main;
pub use tutor_macro::attr_macro_test as test;

pub mod prelude {
    pub use crate::future::FutureExt as _;
}
