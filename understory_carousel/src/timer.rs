// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-advance timer plumbing.
//!
//! The carousel never owns a clock. It owns a *handle* ([`TimerId`]) to at most one
//! recurring timer and asks a host-provided [`Scheduler`] to start and cancel it.
//! When the host's timer fires it hands the id back through
//! [`Carousel::on_timer`](crate::Carousel::on_timer); ids that are no longer live
//! are ignored, so a fire that races a reset or a teardown cannot move the carousel.
//!
//! Two schedulers ship with the crate:
//!
//! - [`PolledScheduler`]: deadline bookkeeping for hosts that own a frame or event
//!   loop and a monotonic millisecond clock. Call [`PolledScheduler::poll`] (or
//!   [`Carousel::tick`](crate::Carousel::tick)) from the loop.
//! - [`NoTimer`]: never fires; pair it with `auto_advance = false`.
//!
//! ## Polling example
//!
//! ```
//! use understory_carousel::{PolledScheduler, Scheduler, TimerId};
//!
//! let mut scheduler = PolledScheduler::new();
//! let id = TimerId::from_raw(1);
//! scheduler.start(id, 100);
//!
//! assert_eq!(scheduler.poll(50), None);
//! assert_eq!(scheduler.poll(100), Some(id));
//! assert_eq!(scheduler.next_deadline(), Some(200));
//!
//! scheduler.cancel(id);
//! assert_eq!(scheduler.poll(1_000), None);
//! ```

use smallvec::SmallVec;

/// Handle for one scheduled recurring timer.
///
/// Ids are allocated by the carousel and increase monotonically, so an id is never
/// reused for a later timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a raw id. Mostly useful for hosts that round-trip ids through an FFI
    /// boundary and for tests.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Host facility for recurring timers.
///
/// Implementations arrange for `id` to be delivered to
/// [`Carousel::on_timer`](crate::Carousel::on_timer) every `interval_ms`
/// milliseconds until `cancel(id)` is called. The carousel is the only caller and
/// always cancels its previous timer before starting a new one.
pub trait Scheduler {
    /// Starts a recurring timer identified by `id`.
    fn start(&mut self, id: TimerId, interval_ms: u64);

    /// Cancels the timer identified by `id`. Cancelling an unknown id is a no-op.
    fn cancel(&mut self, id: TimerId);
}

/// A scheduler that never fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoTimer;

impl Scheduler for NoTimer {
    fn start(&mut self, _id: TimerId, _interval_ms: u64) {}

    fn cancel(&mut self, _id: TimerId) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    id: TimerId,
    interval_ms: u64,
    deadline_ms: u64,
}

/// Deadline-based [`Scheduler`] driven by an external monotonic clock.
///
/// Timers are armed relative to the last time observed by [`poll`](Self::poll)
/// (or [`set_now`](Self::set_now)). When a timer is overdue by more than one period
/// the missed periods are skipped: a carousel that was not polled for a minute
/// advances once, not a dozen times.
///
/// The scheduler keeps every started timer until it is cancelled, so it doubles
/// as a checker for hosts and tests that want to observe how many timers are live.
#[derive(Clone, Debug, Default)]
pub struct PolledScheduler {
    now_ms: u64,
    slots: SmallVec<[Slot; 1]>,
}

impl PolledScheduler {
    /// Creates an empty scheduler whose clock reads `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scheduler whose clock reads `now_ms`.
    #[must_use]
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms,
            slots: SmallVec::new(),
        }
    }

    /// Returns the last observed time.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Records the current time without firing anything.
    ///
    /// The clock never moves backwards; earlier values are ignored.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Advances the clock to `now_ms` and returns the earliest timer that is due, if any.
    ///
    /// The returned timer is re-armed for its next period. At most one timer fires
    /// per call; hosts with several live timers should poll until `None`.
    pub fn poll(&mut self, now_ms: u64) -> Option<TimerId> {
        self.set_now(now_ms);
        let now_ms = self.now_ms;
        let slot = self
            .slots
            .iter_mut()
            .filter(|slot| slot.deadline_ms <= now_ms)
            .min_by_key(|slot| slot.deadline_ms)?;

        let next = slot.deadline_ms.saturating_add(slot.interval_ms);
        slot.deadline_ms = if next <= now_ms {
            now_ms.saturating_add(slot.interval_ms)
        } else {
            next
        };
        Some(slot.id)
    }

    /// Returns the earliest pending deadline, or `None` when no timer is live.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots.iter().map(|slot| slot.deadline_ms).min()
    }

    /// Returns the interval of a live timer.
    #[must_use]
    pub fn interval_of(&self, id: TimerId) -> Option<u64> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| slot.interval_ms)
    }

    /// Returns the number of live timers.
    #[must_use]
    pub fn live_timers(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if `id` is live.
    #[must_use]
    pub fn is_live(&self, id: TimerId) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }
}

impl Scheduler for PolledScheduler {
    fn start(&mut self, id: TimerId, interval_ms: u64) {
        debug_assert!(interval_ms > 0, "timer intervals must be non-zero");
        let slot = Slot {
            id,
            interval_ms,
            deadline_ms: self.now_ms.saturating_add(interval_ms),
        };
        match self.slots.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = slot,
            None => self.slots.push(slot),
        }
    }

    fn cancel(&mut self, id: TimerId) {
        self.slots.retain(|slot| slot.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut scheduler = PolledScheduler::new();
        let id = TimerId::from_raw(7);
        scheduler.start(id, 100);

        assert_eq!(scheduler.poll(99), None);
        assert_eq!(scheduler.poll(100), Some(id));
        assert_eq!(scheduler.poll(150), None);
        assert_eq!(scheduler.poll(200), Some(id));
        assert_eq!(scheduler.next_deadline(), Some(300));
    }

    #[test]
    fn missed_periods_are_skipped() {
        let mut scheduler = PolledScheduler::new();
        let id = TimerId::from_raw(1);
        scheduler.start(id, 100);

        // Ten periods late: fire once, then re-arm relative to now.
        assert_eq!(scheduler.poll(1_050), Some(id));
        assert_eq!(scheduler.poll(1_050), None);
        assert_eq!(scheduler.next_deadline(), Some(1_150));
    }

    #[test]
    fn timers_arm_relative_to_last_observed_time() {
        let mut scheduler = PolledScheduler::starting_at(500);
        let id = TimerId::from_raw(1);
        scheduler.start(id, 100);
        assert_eq!(scheduler.next_deadline(), Some(600));

        scheduler.set_now(550);
        scheduler.cancel(id);
        scheduler.start(id.next(), 100);
        assert_eq!(scheduler.next_deadline(), Some(650));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut scheduler = PolledScheduler::starting_at(1_000);
        scheduler.set_now(10);
        assert_eq!(scheduler.now_ms(), 1_000);
    }

    #[test]
    fn cancel_removes_only_the_named_timer() {
        let mut scheduler = PolledScheduler::new();
        let a = TimerId::from_raw(1);
        let b = TimerId::from_raw(2);
        scheduler.start(a, 100);
        scheduler.start(b, 300);
        assert_eq!(scheduler.live_timers(), 2);

        scheduler.cancel(a);
        assert!(!scheduler.is_live(a));
        assert!(scheduler.is_live(b));
        assert_eq!(scheduler.interval_of(b), Some(300));
        assert_eq!(scheduler.poll(250), None);
        assert_eq!(scheduler.poll(300), Some(b));

        // Unknown ids are ignored.
        scheduler.cancel(TimerId::from_raw(99));
        assert_eq!(scheduler.live_timers(), 1);
    }

    #[test]
    fn restarting_an_id_replaces_its_slot() {
        let mut scheduler = PolledScheduler::new();
        let id = TimerId::from_raw(3);
        scheduler.start(id, 100);
        scheduler.start(id, 400);
        assert_eq!(scheduler.live_timers(), 1);
        assert_eq!(scheduler.interval_of(id), Some(400));
    }

    #[test]
    fn earliest_due_timer_fires_first() {
        let mut scheduler = PolledScheduler::new();
        let slow = TimerId::from_raw(1);
        let fast = TimerId::from_raw(2);
        scheduler.start(slow, 200);
        scheduler.start(fast, 100);

        assert_eq!(scheduler.poll(250), Some(fast));
        assert_eq!(scheduler.poll(250), Some(slow));
        assert_eq!(scheduler.poll(250), None);
    }

    #[test]
    fn no_timer_accepts_everything() {
        let mut scheduler = NoTimer;
        scheduler.start(TimerId::from_raw(1), 10);
        scheduler.cancel(TimerId::from_raw(1));
    }
}
