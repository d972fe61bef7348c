//! Async event loop support.
//!
//! The way to use this is to call [`block_on()`] with the future you want to
//! drive. For the duration of that call a [`Reactor`] is installed as a
//! thread-local singleton; timer futures obtain it through
//! [`Reactor::current()`] and register their deadlines with it. Between polls
//! the reactor puts the thread to sleep until the earliest registered
//! deadline, then calls the necessary wakers to resume the suspended tasks.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

use core::cell::RefCell;

mod block_on;
mod reactor;

pub use block_on::block_on;
pub use reactor::{AsyncDeadline, Reactor, WaitFor};

thread_local! {
    pub(crate) static REACTOR: RefCell<Option<Reactor>> = const { RefCell::new(None) };
}
