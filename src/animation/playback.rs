//! Tick-driven playback of a [`Timeline`] on one visual surface.
//!
//! A [`TickSource`] owns a clock and a set of listeners. A [`Playback`] holds at most one
//! subscription; starting a new timeline cancels the previous subscription before the new one is
//! registered, so the old listener never observes another tick.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use crate::{
    animation::timeline::{FrameSample, Timeline},
    foundation::error::{TourlineError, TourlineResult},
};

/// Per-tick callback receiving the source's current time in seconds.
pub type TickListener = Box<dyn FnMut(f64)>;

/// Handle returned by [`TickSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Clock plus listener registry.
pub trait TickSource {
    /// Current time in seconds. Monotonic.
    fn now(&self) -> f64;
    /// Register a listener invoked on every subsequent tick.
    fn subscribe(&mut self, listener: TickListener) -> SubscriptionId;
    /// Remove a listener. Returns `false` if `id` was not subscribed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Tick source driven by an externally supplied clock (tests, CLI, host event loops).
pub struct ManualTickSource {
    now: f64,
    next_id: u64,
    listeners: BTreeMap<SubscriptionId, TickListener>,
    deliveries: BTreeMap<SubscriptionId, u64>,
}

impl fmt::Debug for ManualTickSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualTickSource")
            .field("now", &self.now)
            .field("active", &self.listeners.keys().collect::<Vec<_>>())
            .field("deliveries", &self.deliveries)
            .finish()
    }
}

impl Default for ManualTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTickSource {
    /// Clock at zero with no listeners.
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    /// Clock at `now` with no listeners.
    pub fn starting_at(now: f64) -> Self {
        Self {
            now,
            next_id: 1,
            listeners: BTreeMap::new(),
            deliveries: BTreeMap::new(),
        }
    }

    /// Move the clock to `now` and deliver one tick to every listener.
    ///
    /// Returns the number of listeners invoked.
    pub fn advance_to(&mut self, now: f64) -> TourlineResult<usize> {
        if !now.is_finite() {
            return Err(TourlineError::validation(format!(
                "tick time must be finite (got {now})"
            )));
        }
        if now < self.now {
            return Err(TourlineError::validation(format!(
                "tick time went backwards ({} -> {now})",
                self.now
            )));
        }
        self.now = now;
        for (id, listener) in &mut self.listeners {
            listener(now);
            *self.deliveries.entry(*id).or_default() += 1;
        }
        Ok(self.listeners.len())
    }

    /// Move the clock forward by `dt` seconds and deliver one tick.
    pub fn advance_by(&mut self, dt: f64) -> TourlineResult<usize> {
        self.advance_to(self.now + dt)
    }

    /// Ticks delivered to `id`; frozen once `id` is unsubscribed.
    pub fn deliveries(&self, id: SubscriptionId) -> u64 {
        self.deliveries.get(&id).copied().unwrap_or(0)
    }

    /// Number of live subscriptions.
    pub fn active(&self) -> usize {
        self.listeners.len()
    }

    /// Whether `id` is still subscribed.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.listeners.contains_key(&id)
    }
}

impl TickSource for ManualTickSource {
    fn now(&self) -> f64 {
        self.now
    }

    fn subscribe(&mut self, listener: TickListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }
}

#[derive(Debug)]
struct Slot {
    timeline: Timeline,
    origin: f64,
    latest: FrameSample,
}

#[derive(Debug)]
struct Active {
    subscription: SubscriptionId,
    slot: Rc<RefCell<Slot>>,
}

/// At most one running timeline bound to a tick subscription.
#[derive(Debug, Default)]
pub struct Playback {
    active: Option<Active>,
}

impl Playback {
    /// Idle playback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any running timeline, then start `timeline` at elapsed zero.
    #[tracing::instrument(skip_all, fields(cycle = timeline.cycle_duration(), layers = timeline.layers().len()))]
    pub fn play(&mut self, timeline: Timeline, source: &mut dyn TickSource) -> SubscriptionId {
        self.stop(source);

        let origin = source.now();
        let latest = timeline.sample(0.0);
        let slot = Rc::new(RefCell::new(Slot {
            timeline,
            origin,
            latest,
        }));

        let listener_slot = Rc::clone(&slot);
        let subscription = source.subscribe(Box::new(move |now| {
            let mut s = listener_slot.borrow_mut();
            s.latest = s.timeline.sample(now - s.origin);
        }));
        tracing::debug!(?subscription, origin, "playback started");

        self.active = Some(Active { subscription, slot });
        subscription
    }

    /// Cancel the running timeline. Returns `false` when nothing was playing.
    pub fn stop(&mut self, source: &mut dyn TickSource) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        let removed = source.unsubscribe(active.subscription);
        tracing::debug!(subscription = ?active.subscription, removed, "playback stopped");
        true
    }

    /// Whether a timeline is bound.
    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Live subscription handle, if playing.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.active.as_ref().map(|a| a.subscription)
    }

    /// Frame computed on the most recent tick (or at start).
    pub fn latest(&self) -> Option<FrameSample> {
        self.active.as_ref().map(|a| a.slot.borrow().latest.clone())
    }

    /// Seconds since the running timeline started, measured at `now`.
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.active.as_ref().map(|a| now - a.slot.borrow().origin)
    }

    /// Evaluate the running timeline at `now` without waiting for a tick.
    pub fn sample_now(&self, now: f64) -> Option<FrameSample> {
        self.active.as_ref().map(|a| {
            let s = a.slot.borrow();
            s.timeline.sample(now - s.origin)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;
