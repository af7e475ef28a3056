//! One-shot cancellable timers.
//!
//! Both the reveal delays and the contact form's success reset go through a
//! [`Scheduler`], so tests can drive them with a simulated clock.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "hydrate")]
use std::collections::HashMap;
#[cfg(feature = "hydrate")]
use std::sync::Mutex;

#[cfg(feature = "hydrate")]
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler: Send + Sync {
    /// Runs `task` once after `after` has elapsed, unless cancelled first.
    fn schedule(&self, after: Duration, task: Task) -> TimerId;

    /// Cancels a pending timer. Unknown or already fired timers are ignored.
    fn cancel(&self, timer: TimerId);
}

/// Scheduler backed by `window.setTimeout`.
///
/// Outside the browser (server rendering) nothing is ever scheduled, since no
/// viewport or form events reach the page there; tasks are dropped unrun.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    inner: Arc<BrowserTimers>,
}

#[derive(Default)]
struct BrowserTimers {
    next: AtomicU64,
    #[cfg(feature = "hydrate")]
    pending: Mutex<HashMap<TimerId, TimeoutHandle>>,
}

impl BrowserScheduler {
    fn next_id(&self) -> TimerId {
        TimerId(self.inner.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for BrowserScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserScheduler").finish_non_exhaustive()
    }
}

impl Scheduler for BrowserScheduler {
    #[cfg(feature = "hydrate")]
    fn schedule(&self, after: Duration, task: Task) -> TimerId {
        use crate::sync::lock;

        let id = self.next_id();
        let timers = Arc::clone(&self.inner);
        let fire = move || {
            lock(&timers.pending).remove(&id);
            task();
        };
        match set_timeout_with_handle(fire, after) {
            Ok(handle) => {
                lock(&self.inner.pending).insert(id, handle);
            }
            Err(err) => tracing::warn!(?err, %id, "setTimeout failed"),
        }
        id
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule(&self, after: Duration, _task: Task) -> TimerId {
        let id = self.next_id();
        tracing::debug!(%id, ?after, "timer dropped outside the browser");
        id
    }

    fn cancel(&self, timer: TimerId) {
        #[cfg(feature = "hydrate")]
        if let Some(handle) = crate::sync::lock(&self.inner.pending).remove(&timer) {
            handle.clear();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = timer;
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::{Scheduler, Task, TimerId};
    use crate::sync::lock;

    /// Simulated clock for tests. Tasks run only when the clock is advanced.
    #[derive(Default)]
    pub(crate) struct ManualScheduler {
        state: Mutex<ManualState>,
    }

    #[derive(Default)]
    struct ManualState {
        now: Duration,
        next: u64,
        queue: Vec<(Duration, TimerId, Task)>,
    }

    impl ManualScheduler {
        pub(crate) fn now(&self) -> Duration {
            lock(&self.state).now
        }

        pub(crate) fn pending(&self) -> usize {
            lock(&self.state).queue.len()
        }

        /// Moves the clock forward, firing due tasks in deadline order.
        pub(crate) fn advance(&self, by: Duration) {
            let target = lock(&self.state).now + by;
            loop {
                let task = {
                    let mut state = lock(&self.state);
                    let due = state
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _, _))| *at <= target)
                        .min_by_key(|(_, (at, id, _))| (*at, *id))
                        .map(|(index, _)| index);
                    match due {
                        Some(index) => {
                            let (at, _, task) = state.queue.remove(index);
                            state.now = at;
                            task
                        }
                        None => {
                            state.now = target;
                            return;
                        }
                    }
                };
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, after: Duration, task: Task) -> TimerId {
            let mut state = lock(&self.state);
            let id = TimerId::new(state.next);
            state.next += 1;
            let at = state.now + after;
            state.queue.push((at, id, task));
            id
        }

        fn cancel(&self, timer: TimerId) {
            lock(&self.state).queue.retain(|(_, id, _)| *id != timer);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::manual::ManualScheduler;
    use super::*;

    fn counter() -> (Arc<AtomicUsize>, Task) {
        let hits = Arc::new(AtomicUsize::new(0));
        let task_hits = Arc::clone(&hits);
        let task: Task = Box::new(move || {
            task_hits.fetch_add(1, Ordering::SeqCst);
        });
        (hits, task)
    }

    #[test]
    fn manual_scheduler_fires_only_when_due() {
        let scheduler = ManualScheduler::default();
        let (hits, task) = counter();
        scheduler.schedule(Duration::from_millis(300), task);

        scheduler.advance(Duration::from_millis(299));
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(300));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let scheduler = ManualScheduler::default();
        let (hits, task) = counter();
        let id = scheduler.schedule(Duration::from_millis(10), task);
        scheduler.cancel(id);
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn browser_scheduler_ids_are_distinct() {
        let scheduler = BrowserScheduler::default();
        let a = scheduler.schedule(Duration::ZERO, Box::new(|| {}));
        let b = scheduler.schedule(Duration::ZERO, Box::new(|| {}));
        assert_ne!(a, b);
        scheduler.cancel(a);
    }
}
