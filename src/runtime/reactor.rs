use super::REACTOR;
use crate::time::Instant;

use core::cell::RefCell;
use core::future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use std::collections::HashMap;
use std::rc::Rc;

use slab::Slab;

/// Index of one timer registration in the reactor's slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TimerKey(usize);

#[derive(Debug)]
struct Registration {
    key: TimerKey,
}

impl Drop for Registration {
    fn drop(&mut self) {
        Reactor::current().deregister_timer(self.key)
    }
}

/// Handle to a deadline registered with the running [`Reactor`].
///
/// Obtained from [`Reactor::schedule()`]. The registration is freed once the
/// last clone of the handle drops.
#[derive(Debug, Clone)]
pub struct AsyncDeadline(Rc<Registration>);

impl AsyncDeadline {
    /// Wait for the deadline to pass.
    pub fn wait_for(&self) -> WaitFor {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
        let key = self.0.key;
        WaitFor {
            waitee: Waitee { key, unique },
            needs_deregistration: false,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
struct Waitee {
    key: TimerKey,
    unique: usize,
}

/// Future returned by [`AsyncDeadline::wait_for()`].
#[must_use = "futures do nothing unless polled or .awaited"]
#[derive(Debug)]
pub struct WaitFor {
    waitee: Waitee,
    needs_deregistration: bool,
}

impl future::Future for WaitFor {
    type Output = ();
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let reactor = Reactor::current();
        if reactor.ready(&self.as_ref().waitee, cx.waker()) {
            Poll::Ready(())
        } else {
            self.as_mut().needs_deregistration = true;
            Poll::Pending
        }
    }
}

impl Drop for WaitFor {
    fn drop(&mut self) {
        if self.needs_deregistration {
            Reactor::current().deregister_waitee(&self.waitee)
        }
    }
}

/// Manages the timer deadlines that suspended tasks are waiting on.
#[derive(Debug, Clone)]
pub struct Reactor {
    inner: Rc<RefCell<InnerReactor>>,
}

/// The private, internal `Reactor` implementation - factored out so we can
/// take a lock of the whole.
#[derive(Debug)]
struct InnerReactor {
    timers: Slab<Instant>,
    wakers: HashMap<Waitee, Waker>,
}

impl Reactor {
    /// Return the `Reactor` for the currently running `tutor::runtime::block_on`.
    ///
    /// # Panic
    /// This will panic if called outside of `tutor::runtime::block_on`.
    pub fn current() -> Self {
        REACTOR.with(|r| {
            r.borrow()
                .as_ref()
                .expect("Reactor::current must be called within a tutor runtime")
                .clone()
        })
    }

    /// Create a new instance of `Reactor`
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(InnerReactor {
                timers: Slab::new(),
                wakers: HashMap::new(),
            })),
        }
    }

    /// Sleep until the earliest deadline someone is waiting on has passed,
    /// then call the wakers of every waiter whose deadline is behind us.
    ///
    /// # On Wakers and single-threaded runtimes
    ///
    /// At first glance it might seem silly that this goes through the motions
    /// of calling the wakers: on a single-threaded runtime, who else could
    /// make progress? However, it is common and encouraged to use wakers to
    /// distinguish between events. Concurrency primitives may construct their
    /// own wakers to keep track of identity and wake more precisely. We do
    /// not control the wakers constructed by other libraries, and it is for
    /// this reason that we have to call all the wakers - they are the only
    /// reliable signal for which sub-future should be polled next.
    pub(crate) fn block_until(&self) {
        let deadline = {
            let inner = self.inner.borrow();
            let timers = &inner.timers;
            inner
                .wakers
                .keys()
                .filter_map(|waitee| timers.get(waitee.key.0).copied())
                .min()
        };
        // Only timers can wake a pending task, so a poll that registered no
        // waiter has suspended the program for good. Say so instead of
        // sleeping forever.
        let deadline =
            deadline.expect("a pending future has no registered timers and can never be woken");

        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline.duration_since(now).into());
        }

        let now = Instant::now();
        // Clone the expired wakers out before calling them, so a waker that
        // re-enters the reactor does not observe it mid-iteration.
        let expired: Vec<Waker> = {
            let inner = self.inner.borrow();
            let timers = &inner.timers;
            inner
                .wakers
                .iter()
                .filter(|(waitee, _)| {
                    matches!(timers.get(waitee.key.0), Some(deadline) if *deadline <= now)
                })
                .map(|(_, waker)| waker.clone())
                .collect()
        };
        for waker in expired {
            waker.wake()
        }
    }

    /// Register a deadline with the reactor, so the event loop knows to sleep
    /// no longer than until that point in time.
    pub fn schedule(&self, deadline: Instant) -> AsyncDeadline {
        let mut reactor = self.inner.borrow_mut();
        let key = TimerKey(reactor.timers.insert(deadline));
        AsyncDeadline(Rc::new(Registration { key }))
    }

    fn deregister_timer(&self, key: TimerKey) {
        let mut reactor = self.inner.borrow_mut();
        reactor.timers.remove(key.0);
    }

    fn deregister_waitee(&self, waitee: &Waitee) {
        let mut reactor = self.inner.borrow_mut();
        reactor.wakers.remove(waitee);
    }

    fn ready(&self, waitee: &Waitee, waker: &Waker) -> bool {
        let mut reactor = self.inner.borrow_mut();
        let deadline = *reactor
            .timers
            .get(waitee.key.0)
            .expect("only live timer registrations can be checked for readiness");
        let ready = deadline <= Instant::now();
        if !ready {
            reactor.wakers.insert(waitee.clone(), waker.clone());
        }
        ready
    }

    /// Wait for the deadline to pass.
    pub async fn wait_until(&self, deadline: Instant) {
        let timer = self.schedule(deadline);
        timer.wait_for().await
    }
}
