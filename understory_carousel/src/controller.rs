// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: active-index state plus ownership of the auto-advance timer.

use log::{debug, trace};

use crate::{
    CarouselConfig, CarouselError, CarouselInput, OverridePolicy, PolledScheduler, Render,
    Scheduler, TimerId,
    swipe::{Direction, classify_swipe},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LiveTimer {
    id: TimerId,
    interval_ms: u64,
}

/// Builder for [`Carousel`].
///
/// Collaborators are optional at this stage so that hosts which discover their
/// render surface at runtime can hand over whatever they found;
/// [`build`](Self::build) rejects incomplete wiring instead of producing a
/// carousel that fails on its first transition.
#[derive(Debug)]
pub struct CarouselBuilder<R, S> {
    item_count: usize,
    config: CarouselConfig,
    render: Option<R>,
    scheduler: Option<S>,
}

impl<R: Render, S: Scheduler> CarouselBuilder<R, S> {
    /// Starts a builder for a carousel of `item_count` panels.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            config: CarouselConfig::new(),
            render: None,
            scheduler: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the render surface.
    #[must_use]
    pub fn render(mut self, render: R) -> Self {
        self.render = Some(render);
        self
    }

    /// Sets the render surface if one is available.
    #[must_use]
    pub fn render_opt(mut self, render: Option<R>) -> Self {
        self.render = render;
        self
    }

    /// Sets the scheduler for the auto-advance timer.
    #[must_use]
    pub fn scheduler(mut self, scheduler: S) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Validates the wiring and initializes the carousel.
    ///
    /// On success panel `0` has been rendered (unless there are no panels) and, for
    /// carousels with more than one panel and auto-advance enabled, the first
    /// auto-advance timer has been started.
    ///
    /// # Errors
    ///
    /// - [`CarouselError::MissingRenderer`] if no render surface was set.
    /// - [`CarouselError::MissingScheduler`] if the timer would be needed but no
    ///   scheduler was set.
    /// - Any error from [`CarouselConfig::validate`].
    pub fn build(self) -> Result<Carousel<R, S>, CarouselError> {
        let render = self.render.ok_or(CarouselError::MissingRenderer)?;
        self.config.validate()?;

        let navigable = self.item_count > 1;
        let scheduler = match self.scheduler {
            Some(scheduler) => Some(scheduler),
            None if navigable && self.config.auto_advance => {
                return Err(CarouselError::MissingScheduler);
            }
            None => None,
        };

        let mut carousel = Carousel {
            item_count: self.item_count,
            active: 0,
            config: self.config,
            interval_ms: self.config.base_interval_ms,
            render,
            scheduler,
            timer: None,
            last_timer_id: TimerId::from_raw(0),
            torn_down: false,
        };
        carousel.initialize();
        Ok(carousel)
    }
}

/// A carousel controller over `item_count` panels.
///
/// The controller is the sole owner of the active index and of the auto-advance
/// timer handle. Every input, whether a button, an indicator, a swipe, or the
/// timer itself, lands in [`next`](Self::next), [`previous`](Self::previous), or
/// [`go_to`](Self::go_to).
///
/// Transition methods return `Some(new_index)` when they were applied (and
/// rendered) and `None` when they were a no-op. A carousel with fewer than two
/// panels is permanently inert, as is one that has been torn down.
///
/// Dropping the controller tears it down, cancelling its timer.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use understory_carousel::{Carousel, PolledScheduler};
///
/// let shown = Rc::new(RefCell::new(Vec::new()));
/// let sink = shown.clone();
/// let mut carousel =
///     Carousel::new(3, move |i| sink.borrow_mut().push(i), PolledScheduler::new()).unwrap();
///
/// carousel.next();
/// carousel.previous();
/// carousel.previous();
/// assert_eq!(carousel.active_index(), 2);
///
/// // 4.5s of inactivity later the timer wraps back to the first panel.
/// assert_eq!(carousel.tick(4_500), Some(0));
/// assert_eq!(*shown.borrow(), [0, 1, 0, 2, 0]);
/// ```
#[derive(Debug)]
pub struct Carousel<R: Render, S: Scheduler> {
    item_count: usize,
    active: usize,
    config: CarouselConfig,
    /// Interval the next (re)started timer will use.
    interval_ms: u64,
    render: R,
    scheduler: Option<S>,
    timer: Option<LiveTimer>,
    last_timer_id: TimerId,
    torn_down: bool,
}

impl<R: Render, S: Scheduler> Carousel<R, S> {
    /// Returns a builder for a carousel of `item_count` panels.
    #[must_use]
    pub fn builder(item_count: usize) -> CarouselBuilder<R, S> {
        CarouselBuilder::new(item_count)
    }

    /// Creates and initializes a carousel with the default [`CarouselConfig`].
    ///
    /// # Errors
    ///
    /// Only configuration errors; with a render surface and a scheduler supplied
    /// the default configuration always builds.
    pub fn new(item_count: usize, render: R, scheduler: S) -> Result<Self, CarouselError> {
        CarouselBuilder::new(item_count)
            .render(render)
            .scheduler(scheduler)
            .build()
    }

    fn initialize(&mut self) {
        debug!(
            "carousel: initialize item_count={} auto_advance={} base_interval_ms={}",
            self.item_count, self.config.auto_advance, self.config.base_interval_ms
        );
        if self.item_count == 0 {
            return;
        }
        self.render.render(0);
        if self.is_navigable() {
            self.reset_timer();
        }
    }

    /// Number of panels.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Zero-based index of the showing panel. Always `0` for an empty carousel.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// The configuration this carousel was built with.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Interval the next started auto-advance timer will use.
    ///
    /// With [`OverridePolicy::NextCycle`] an override stays in effect, across any
    /// further user input, until the first auto-advance fires.
    #[must_use]
    pub const fn auto_advance_interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// The live auto-advance timer and its interval, if one is running.
    #[must_use]
    pub fn live_timer(&self) -> Option<(TimerId, u64)> {
        self.timer.map(|timer| (timer.id, timer.interval_ms))
    }

    /// Returns `true` if transitions can move the carousel.
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.item_count > 1 && !self.torn_down
    }

    /// Returns `true` once [`teardown`](Self::teardown) has run.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Shared access to the render surface.
    #[must_use]
    pub const fn render_surface(&self) -> &R {
        &self.render
    }

    /// Shared access to the scheduler, if one was supplied.
    #[must_use]
    pub const fn scheduler(&self) -> Option<&S> {
        self.scheduler.as_ref()
    }

    /// Advances one panel, wrapping from the last panel to the first.
    ///
    /// The auto-advance cadence restarts at the current interval.
    pub fn next(&mut self) -> Option<usize> {
        self.step(Direction::Next, None)
    }

    /// Goes back one panel, wrapping from the first panel to the last.
    pub fn previous(&mut self) -> Option<usize> {
        self.step(Direction::Previous, None)
    }

    /// Advances one panel and waits `interval_ms` before the next auto-advance.
    ///
    /// How long the override lasts is governed by [`OverridePolicy`]. A zero
    /// interval is ignored.
    pub fn next_with_interval(&mut self, interval_ms: u64) -> Option<usize> {
        self.step(Direction::Next, Some(interval_ms))
    }

    /// Goes back one panel and waits `interval_ms` before the next auto-advance.
    pub fn previous_with_interval(&mut self, interval_ms: u64) -> Option<usize> {
        self.step(Direction::Previous, Some(interval_ms))
    }

    /// The "next" button: [`next_with_interval`](Self::next_with_interval) with
    /// [`CarouselConfig::manual_interval_ms`].
    pub fn next_manual(&mut self) -> Option<usize> {
        self.next_with_interval(self.config.manual_interval_ms)
    }

    /// The "previous" button: [`previous_with_interval`](Self::previous_with_interval)
    /// with [`CarouselConfig::manual_interval_ms`].
    pub fn previous_manual(&mut self) -> Option<usize> {
        self.previous_with_interval(self.config.manual_interval_ms)
    }

    /// Jumps directly to `index`.
    ///
    /// Out-of-range indices are ignored; see [`try_go_to`](Self::try_go_to) for a
    /// checked variant. The interval is left alone but the cadence restarts.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        match self.try_go_to(index) {
            Ok(applied) => applied,
            Err(err) => {
                debug!("carousel: ignoring jump, {err}");
                None
            }
        }
    }

    /// Jumps directly to `index`, reporting out-of-range targets.
    ///
    /// Returns `Ok(None)` when the carousel is inert.
    ///
    /// # Errors
    ///
    /// [`CarouselError::InvalidIndex`] if `index >= item_count`.
    pub fn try_go_to(&mut self, index: usize) -> Result<Option<usize>, CarouselError> {
        if index >= self.item_count {
            return Err(CarouselError::InvalidIndex {
                index,
                item_count: self.item_count,
            });
        }
        if !self.is_navigable() {
            return Ok(None);
        }
        self.active = index;
        trace!("carousel: jump to {}/{}", index, self.item_count);
        self.render.render(index);
        self.reset_timer();
        Ok(Some(index))
    }

    /// Interprets a horizontal gesture displacement using the configured threshold.
    ///
    /// Positive displacements beyond the threshold act as [`next`](Self::next),
    /// negative ones as [`previous`](Self::previous); anything within the
    /// threshold is ignored.
    pub fn handle_swipe(&mut self, delta: f64) -> Option<usize> {
        self.handle_swipe_with_threshold(delta, self.config.swipe_threshold)
    }

    /// Like [`handle_swipe`](Self::handle_swipe) with an explicit threshold.
    pub fn handle_swipe_with_threshold(&mut self, delta: f64, threshold: f64) -> Option<usize> {
        let direction = classify_swipe(delta, threshold)?;
        self.step(direction, None)
    }

    /// Delivers a fire of the recurring timer `id`.
    ///
    /// Fires from any timer other than the live one are stale and ignored. The live
    /// timer keeps running; it is only restarted when its interval no longer
    /// matches the cadence. Under [`OverridePolicy::NextCycle`] the first fire
    /// after an override is where the override expires.
    pub fn on_timer(&mut self, id: TimerId) -> Option<usize> {
        let Some(live) = self.timer.filter(|timer| timer.id == id) else {
            trace!("carousel: ignoring stale timer {}", id.get());
            return None;
        };
        if !self.is_navigable() {
            return None;
        }
        let index = self.advance(Direction::Next);
        if self.config.override_policy == OverridePolicy::NextCycle {
            self.interval_ms = self.config.base_interval_ms;
        }
        if live.interval_ms != self.interval_ms {
            self.reset_timer();
        }
        Some(index)
    }

    /// Routes a decoded input to the matching transition.
    pub fn handle(&mut self, input: CarouselInput) -> Option<usize> {
        match input {
            CarouselInput::Next => self.next(),
            CarouselInput::Previous => self.previous(),
            CarouselInput::NextManual => self.next_manual(),
            CarouselInput::PreviousManual => self.previous_manual(),
            CarouselInput::Indicator(index) => self.go_to(index),
            CarouselInput::Swipe(delta) => self.handle_swipe(delta),
            CarouselInput::Timer(id) => self.on_timer(id),
        }
    }

    /// Cancels the auto-advance timer and makes every later transition a no-op.
    ///
    /// Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        debug!("carousel: teardown at {}/{}", self.active, self.item_count);
        self.cancel_timer();
        self.torn_down = true;
    }

    fn step(&mut self, direction: Direction, interval_override: Option<u64>) -> Option<usize> {
        if !self.is_navigable() {
            trace!("carousel: ignoring {direction:?}, carousel is inert");
            return None;
        }
        if let Some(interval_ms) = interval_override.filter(|&ms| ms > 0) {
            self.interval_ms = interval_ms;
        }
        let index = self.advance(direction);
        self.reset_timer();
        Some(index)
    }

    /// Moves one panel in `direction` and renders. Callers guarantee `item_count > 1`.
    fn advance(&mut self, direction: Direction) -> usize {
        let count = self.item_count;
        self.active = match direction {
            Direction::Next => (self.active + 1) % count,
            Direction::Previous => (self.active + count - 1) % count,
        };
        trace!("carousel: {direction:?} -> {}/{}", self.active, count);
        self.render.render(self.active);
        self.active
    }

    /// Cancels the live timer, if any, and starts a fresh one at the current interval.
    fn reset_timer(&mut self) {
        self.cancel_timer();
        if !self.config.auto_advance {
            return;
        }
        let Some(scheduler) = self.scheduler.as_mut() else {
            return;
        };
        let id = self.last_timer_id.next();
        self.last_timer_id = id;
        let interval_ms = self.interval_ms;
        scheduler.start(id, interval_ms);
        self.timer = Some(LiveTimer { id, interval_ms });
        trace!("carousel: timer {} armed for {interval_ms}ms", id.get());
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            if let Some(scheduler) = self.scheduler.as_mut() {
                scheduler.cancel(timer.id);
            }
        }
    }
}

impl<R: Render> Carousel<R, PolledScheduler> {
    /// Advances the scheduler's clock to `now_ms` and delivers a due timer fire.
    ///
    /// Returns the new index if the carousel auto-advanced.
    pub fn tick(&mut self, now_ms: u64) -> Option<usize> {
        let id = self.scheduler.as_mut()?.poll(now_ms)?;
        self.on_timer(id)
    }

    /// Moves the scheduler's clock to `now_ms` without delivering any fire.
    ///
    /// Hosts call this before routing user input so that the restarted cadence is
    /// measured from the moment of the input.
    pub fn set_now(&mut self, now_ms: u64) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.set_now(now_ms);
        }
    }
}

impl<R: Render, S: Scheduler> Drop for Carousel<R, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
