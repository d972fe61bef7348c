use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::{sleep_until, SleepUntil};
use crate::time::{Duration, Instant};

/// Sleeps for the specified amount of time.
///
/// Resolves to the [`Instant`] at which the task resumed. The suspension is
/// cooperative: the task yields to the event loop, which sleeps the thread
/// until the deadline and then wakes the task.
///
/// # Examples
///
/// ```
/// use tutor::task::sleep;
/// use tutor::time::{Duration, Instant};
///
/// tutor::runtime::block_on(async {
///     let start = Instant::now();
///     sleep(Duration::from_millis(10)).await;
///     assert!(start.elapsed() >= Duration::from_millis(10));
/// });
/// ```
pub fn sleep(dur: Duration) -> Sleep {
    Sleep {
        timer: sleep_until(Instant::now() + dur),
    }
}

pin_project! {
    /// Sleeps for the specified amount of time.
    #[must_use = "futures do nothing unless polled or .awaited"]
    #[derive(Debug)]
    pub struct Sleep {
        #[pin]
        timer: SleepUntil,
    }
}

impl Future for Sleep {
    type Output = Instant;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        this.timer.poll(cx)
    }
}
