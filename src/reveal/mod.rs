//! Scroll-triggered reveal of page elements.
//!
//! A [`RevealController`] moves each registered element from
//! [`RevealState::Hidden`] to [`RevealState::Revealed`] exactly once, the first
//! time the viewport reports it as intersecting. Visibility comes from an
//! injected [`ViewportObserver`]; staggering delays go through a
//! [`Scheduler`](crate::scheduler::Scheduler).

#[cfg(feature = "hydrate")]
mod dom;
mod hook;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::scheduler::{Scheduler, TimerId};
use crate::sync::lock;

#[cfg(feature = "hydrate")]
pub use dom::DomViewport;
pub use hook::{provide_reveal_controller, use_reveal, Reveal};

/// Fraction of an element that must be on screen before it is revealed.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Opaque handle to a revealable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(u64);

static NEXT_TARGET: AtomicU64 = AtomicU64::new(1);

impl TargetId {
    /// Allocates a process-unique id.
    pub fn next() -> Self {
        Self(NEXT_TARGET.fetch_add(1, Ordering::Relaxed))
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TargetId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction that counts as "in view", in `(0, 1]`.
    pub threshold: f64,
    /// Wait between entering the viewport and starting the transition.
    pub delay: Duration,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            delay: Duration::ZERO,
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_delay_ms(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }

    pub fn validate(&self) -> Result<(), RevealError> {
        if self.threshold > 0.0 && self.threshold <= 1.0 {
            Ok(())
        } else {
            Err(RevealError::InvalidThreshold(self.threshold))
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevealError {
    #[error("threshold ratio {0} is outside (0, 1]")]
    InvalidThreshold(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("viewport observation is unavailable")]
pub struct ObservationUnavailable;

/// Host capability reporting when elements cross into the viewport.
///
/// Implementations deliver crossings back through
/// [`RevealController::on_visibility_change`].
pub trait ViewportObserver: Send + Sync {
    fn observe(&self, target: TargetId, threshold: f64) -> Result<(), ObservationUnavailable>;
    fn unobserve(&self, target: TargetId);
}

/// Observer for hosts without intersection support; every target is shown as
/// soon as it registers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unobservable;

impl ViewportObserver for Unobservable {
    fn observe(&self, _target: TargetId, _threshold: f64) -> Result<(), ObservationUnavailable> {
        Err(ObservationUnavailable)
    }

    fn unobserve(&self, _target: TargetId) {}
}

type RevealSink = Box<dyn FnOnce() + Send + 'static>;

enum Phase {
    Observing,
    /// Seen; waiting out the delay. `None` only while the timer is being armed.
    Pending(Option<TimerId>),
    Revealed,
}

struct Entry {
    options: RevealOptions,
    phase: Phase,
    sink: Option<RevealSink>,
}

struct Shared {
    entries: Mutex<HashMap<TargetId, Entry>>,
    observer: Arc<dyn ViewportObserver>,
    scheduler: Arc<dyn Scheduler>,
}

/// Cheaply cloneable handle; clones share one registry.
#[derive(Clone)]
pub struct RevealController {
    shared: Arc<Shared>,
}

#[derive(Clone)]
pub struct WeakRevealController(Weak<Shared>);

impl WeakRevealController {
    pub fn upgrade(&self) -> Option<RevealController> {
        self.0.upgrade().map(|shared| RevealController { shared })
    }
}

impl fmt::Debug for RevealController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealController")
            .field("targets", &lock(&self.shared.entries).len())
            .finish()
    }
}

impl RevealController {
    pub fn new(observer: Arc<dyn ViewportObserver>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            shared: Arc::new(Shared {
                entries: Mutex::new(HashMap::new()),
                observer,
                scheduler,
            }),
        }
    }

    pub fn downgrade(&self) -> WeakRevealController {
        WeakRevealController(Arc::downgrade(&self.shared))
    }

    /// Starts watching `target`. `on_reveal` runs once, when it is revealed.
    ///
    /// Registering an already known target does nothing. If the viewport
    /// cannot be observed the target is revealed right away.
    pub fn register(
        &self,
        target: TargetId,
        options: RevealOptions,
        on_reveal: impl FnOnce() + Send + 'static,
    ) -> Result<(), RevealError> {
        options.validate()?;
        {
            let mut entries = lock(&self.shared.entries);
            if entries.contains_key(&target) {
                return Ok(());
            }
            entries.insert(
                target,
                Entry {
                    options,
                    phase: Phase::Observing,
                    sink: Some(Box::new(on_reveal)),
                },
            );
        }

        match self.shared.observer.observe(target, options.threshold) {
            Ok(()) => debug!(%target, ?options, "observing reveal target"),
            Err(err) => {
                debug!(%target, %err, "revealing without observation");
                self.finish(target);
            }
        }
        Ok(())
    }

    /// Feeds a viewport crossing for `target`.
    ///
    /// Only the first intersecting report of an observed target has an
    /// effect; leaving the viewport never hides anything again.
    pub fn on_visibility_change(&self, target: TargetId, is_intersecting: bool) {
        if !is_intersecting {
            return;
        }
        let delay = {
            let mut entries = lock(&self.shared.entries);
            let Some(entry) = entries.get_mut(&target) else {
                return;
            };
            if !matches!(entry.phase, Phase::Observing) {
                return;
            }
            entry.phase = Phase::Pending(None);
            entry.options.delay
        };

        self.shared.observer.unobserve(target);

        if delay.is_zero() {
            self.finish(target);
            return;
        }

        let weak = self.downgrade();
        let timer = self.shared.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(controller) = weak.upgrade() {
                    controller.finish(target);
                }
            }),
        );
        let armed = match lock(&self.shared.entries).get_mut(&target) {
            Some(entry) if matches!(entry.phase, Phase::Pending(None)) => {
                entry.phase = Phase::Pending(Some(timer));
                true
            }
            _ => false,
        };
        if !armed {
            self.shared.scheduler.cancel(timer);
        }
        debug!(%target, ?delay, "reveal scheduled");
    }

    /// Stops watching `target` without revealing it.
    ///
    /// Already revealed targets stay revealed; a reveal still waiting on its
    /// delay is cancelled.
    pub fn unregister(&self, target: TargetId) {
        let removed = {
            let mut entries = lock(&self.shared.entries);
            let revealed = match entries.get_mut(&target) {
                None => return,
                Some(entry) if matches!(entry.phase, Phase::Revealed) => {
                    entry.sink = None;
                    true
                }
                Some(_) => false,
            };
            if revealed {
                None
            } else {
                entries.remove(&target)
            }
        };
        if let Some(entry) = removed {
            self.release(target, entry);
        }
    }

    /// Unregisters every target and drops all revealed bookkeeping.
    pub fn teardown(&self) {
        let drained: Vec<_> = lock(&self.shared.entries).drain().collect();
        for (target, entry) in drained {
            self.release(target, entry);
        }
    }

    /// Targets that were never registered, or were unregistered before being
    /// revealed, report [`RevealState::Hidden`].
    pub fn state(&self, target: TargetId) -> RevealState {
        match lock(&self.shared.entries).get(&target) {
            Some(Entry {
                phase: Phase::Revealed,
                ..
            }) => RevealState::Revealed,
            _ => RevealState::Hidden,
        }
    }

    pub fn is_registered(&self, target: TargetId) -> bool {
        lock(&self.shared.entries).contains_key(&target)
    }

    fn release(&self, target: TargetId, entry: Entry) {
        match entry.phase {
            Phase::Observing => self.shared.observer.unobserve(target),
            Phase::Pending(Some(timer)) => self.shared.scheduler.cancel(timer),
            Phase::Pending(None) | Phase::Revealed => {}
        }
        debug!(%target, "reveal target released");
    }

    fn finish(&self, target: TargetId) {
        let sink = {
            let mut entries = lock(&self.shared.entries);
            let Some(entry) = entries.get_mut(&target) else {
                return;
            };
            if matches!(entry.phase, Phase::Revealed) {
                return;
            }
            entry.phase = Phase::Revealed;
            entry.sink.take()
        };
        debug!(%target, "revealed");
        match sink {
            Some(sink) => sink(),
            None => warn!(%target, "revealed target had no sink"),
        }
    }
}
