// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a renderer-agnostic carousel (slideshow) controller.
//!
//! A carousel cycles a fixed set of panels inside a viewport. It moves on its own
//! on a timer and in response to the user: next/previous buttons, indicator dots,
//! and swipe gestures. This crate owns the part of that widget with real
//! invariants and leaves drawing to the host:
//!
//! - [`Carousel`]: the controller. It owns the active index, which always stays in
//!   `0..item_count`, and the handle to at most one auto-advance timer. All inputs
//!   funnel into three transitions, [`Carousel::next`], [`Carousel::previous`], and
//!   [`Carousel::go_to`].
//! - [`Render`]: the host's render surface, called once per applied transition
//!   with the new index. Any `FnMut(usize)` closure qualifies.
//! - [`Scheduler`]: the host's recurring-timer facility. The carousel allocates a
//!   [`TimerId`] per timer and cancels the previous one before starting another;
//!   fires for ids that are no longer live are ignored.
//!   [`PolledScheduler`] covers hosts that run their own loop with a millisecond
//!   clock.
//! - [`swipe::SwipeState`]: per-pointer gesture tracking that turns pointer down/up
//!   positions into the horizontal displacement [`Carousel::handle_swipe`] expects.
//! - [`CarouselConfig`]: cadence, swipe threshold, and how long interval overrides
//!   last ([`OverridePolicy`]).
//!
//! The controller is single-threaded and event-driven: every method runs to
//! completion, and transitions apply in the order the host delivers them, each
//! with its own render.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::{cell::Cell, rc::Rc};
//! use understory_carousel::{Carousel, CarouselInput, PolledScheduler};
//!
//! let showing = Rc::new(Cell::new(usize::MAX));
//! let surface = showing.clone();
//! let mut carousel =
//!     Carousel::new(3, move |index| surface.set(index), PolledScheduler::new()).unwrap();
//! assert_eq!(showing.get(), 0);
//!
//! // The "next" button waits 9s before auto-advancing again.
//! carousel.handle(CarouselInput::NextManual);
//! assert_eq!(showing.get(), 1);
//! assert_eq!(carousel.tick(4_500), None);
//! assert_eq!(carousel.tick(9_000), Some(2));
//!
//! // A dot click jumps straight to a panel.
//! carousel.handle(CarouselInput::Indicator(0));
//! assert_eq!(showing.get(), 0);
//!
//! // Small drags are not swipes.
//! assert_eq!(carousel.handle(CarouselInput::Swipe(12.0)), None);
//! assert_eq!(carousel.handle(CarouselInput::Swipe(-80.0)), Some(2));
//!
//! carousel.teardown();
//! assert_eq!(carousel.tick(60_000), None);
//! ```
//!
//! ## Degenerate carousels
//!
//! With zero or one panel there is nowhere to go: no timer is started and every
//! transition returns `None`. An empty carousel renders nothing at all.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math;
//!   typically used when integrating into embedded or `no_std` environments.
//!
//! ## Logging
//!
//! Decisions are reported through the [`log`] facade: `debug` for lifecycle events
//! and rejected input, `trace` for every transition and timer restart. The crate
//! never installs a logger.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod error;
mod input;
pub mod render;
pub mod swipe;
pub mod timer;

pub use config::{
    CarouselConfig, DEFAULT_BASE_INTERVAL_MS, DEFAULT_MANUAL_INTERVAL_MS,
    DEFAULT_SWIPE_THRESHOLD, OverridePolicy,
};
pub use controller::{Carousel, CarouselBuilder};
pub use error::CarouselError;
pub use input::CarouselInput;
pub use render::Render;
pub use timer::{NoTimer, PolledScheduler, Scheduler, TimerId};
