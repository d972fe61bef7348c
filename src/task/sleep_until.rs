use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::runtime::{AsyncDeadline, Reactor, WaitFor};
use crate::time::Instant;

/// Sleeps until the specified instant.
pub fn sleep_until(deadline: Instant) -> SleepUntil {
    SleepUntil {
        deadline,
        timer: None,
        completed: false,
    }
}

/// Future returned by [`sleep_until()`].
///
/// The deadline is registered with the reactor on first poll, not on
/// construction, so the future may be created outside a runtime as long as it
/// is awaited inside one. Dropping it deregisters the timer again.
#[must_use = "futures do nothing unless polled or .awaited"]
#[derive(Debug)]
pub struct SleepUntil {
    deadline: Instant,
    timer: Option<(AsyncDeadline, WaitFor)>,
    completed: bool,
}

impl Future for SleepUntil {
    type Output = Instant;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        assert!(!self.completed, "future polled after completing");
        let this = &mut *self;
        let deadline = this.deadline;
        let (_, wait) = this.timer.get_or_insert_with(|| {
            let timer = Reactor::current().schedule(deadline);
            let wait = timer.wait_for();
            (timer, wait)
        });
        match Pin::new(wait).poll(cx) {
            Poll::Ready(()) => {
                this.completed = true;
                // Free the registration now that the deadline has passed.
                this.timer = None;
                Poll::Ready(Instant::now())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
