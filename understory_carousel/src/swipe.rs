// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe gesture tracking for touch and pointer input.
//!
//! [`SwipeState`] remembers where each pointer went down and, when it lifts,
//! reports the horizontal displacement of the gesture. The displacement is
//! measured as `start.x - end.x`, so dragging content to the left (revealing the
//! panel on the right) yields a positive value that
//! [`Carousel::handle_swipe`](crate::Carousel::handle_swipe) treats as "next".
//!
//! Whether a displacement is a deliberate swipe is decided by [`classify_swipe`],
//! the single rule the carousel applies: the distance must *strictly* exceed the
//! threshold.
//!
//! ## Usage
//!
//! ```
//! use understory_carousel::swipe::{Direction, SwipeState, classify_swipe};
//! use kurbo::Point;
//!
//! let mut swipe = SwipeState::new();
//!
//! // Finger lands at x = 300 and lifts at x = 180: a leftward drag of 120px.
//! swipe.on_start(None, Point::new(300.0, 40.0), 1_000);
//! let delta = swipe.on_end(None, Point::new(180.0, 44.0), 1_150);
//! assert_eq!(delta, Some(120.0));
//! assert_eq!(classify_swipe(120.0, 50.0), Some(Direction::Next));
//! ```
//!
//! ## Multi-Pointer Support
//!
//! Each pointer is tracked independently, keyed by [`PointerId`]. Passing `None`
//! uses pointer `1`, which is what single-touch hosts want.

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;

use kurbo::Point;

/// Pointer identifier for tracking concurrent gestures.
pub type PointerId = NonZeroU64;

const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;

/// Direction of a one-panel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Advance to the following panel.
    Next,
    /// Go back to the preceding panel.
    Previous,
}

/// Classifies a horizontal displacement against `threshold`.
///
/// Returns `None` when `|delta| <= threshold`; otherwise the sign of `delta`
/// picks the direction. NaN never classifies.
#[must_use]
pub fn classify_swipe(delta: f64, threshold: f64) -> Option<Direction> {
    if delta > threshold {
        Some(Direction::Next)
    } else if delta < -threshold {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// State for an in-progress gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    /// Position where the pointer went down.
    pub start_position: Point,
    /// Most recent position seen by [`SwipeState::on_move`].
    pub last_position: Point,
    /// Timestamp when the pointer went down, in milliseconds.
    pub start_time: u64,
}

/// Per-pointer swipe tracker.
#[derive(Clone, Debug, Default)]
pub struct SwipeState {
    /// Active gestures per pointer
    gestures: BTreeMap<PointerId, Gesture>,
    /// Gestures that take longer than this many milliseconds report no displacement
    pub max_duration_ms: Option<u64>,
}

impl SwipeState {
    /// Creates a tracker with no duration limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker that ignores gestures slower than `max_duration_ms`.
    #[must_use]
    pub fn with_max_duration(max_duration_ms: u64) -> Self {
        Self {
            gestures: BTreeMap::new(),
            max_duration_ms: Some(max_duration_ms),
        }
    }

    /// Records a pointer going down, replacing any gesture already tracked for it.
    ///
    /// # Arguments
    /// * `pointer_id` - Unique pointer identifier, defaults to 1 if None
    /// * `position` - Pointer position at gesture start
    /// * `timestamp` - Event timestamp in milliseconds
    pub fn on_start(&mut self, pointer_id: Option<PointerId>, position: Point, timestamp: u64) {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        self.gestures.insert(
            pointer_id,
            Gesture {
                start_position: position,
                last_position: position,
                start_time: timestamp,
            },
        );
    }

    /// Records pointer movement during a gesture.
    ///
    /// Returns the displacement so far (`start.x - position.x`), or `None` if the
    /// pointer has no active gesture. Hosts can use it to drag the track along
    /// with the finger.
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<f64> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        let gesture = self.gestures.get_mut(&pointer_id)?;
        gesture.last_position = position;
        Some(gesture.start_position.x - position.x)
    }

    /// Ends a gesture and returns its horizontal displacement.
    ///
    /// # Arguments
    /// * `pointer_id` - Pointer identifier, defaults to 1 if None
    /// * `position` - Pointer position at release
    /// * `timestamp` - Event timestamp in milliseconds
    ///
    /// # Returns
    /// `Some(start.x - position.x)`, or `None` if there was no active gesture or the
    /// gesture exceeded [`max_duration_ms`](Self::max_duration_ms).
    pub fn on_end(
        &mut self,
        pointer_id: Option<PointerId>,
        position: Point,
        timestamp: u64,
    ) -> Option<f64> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        let gesture = self.gestures.remove(&pointer_id)?;

        let elapsed = timestamp.saturating_sub(gesture.start_time);
        if self.max_duration_ms.is_some_and(|limit| elapsed > limit) {
            return None;
        }
        Some(gesture.start_position.x - position.x)
    }

    /// Drops the gesture for a pointer (for example on `touchcancel`).
    ///
    /// Returns `true` if a gesture was dropped.
    pub fn cancel(&mut self, pointer_id: Option<PointerId>) -> bool {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        self.gestures.remove(&pointer_id).is_some()
    }

    /// Drops all gestures.
    pub fn clear(&mut self) {
        self.gestures.clear();
    }

    /// Checks if a pointer has an active gesture.
    #[must_use]
    pub fn is_tracking(&self, pointer_id: Option<PointerId>) -> bool {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        self.gestures.contains_key(&pointer_id)
    }

    /// Returns the active gesture for a pointer.
    #[must_use]
    pub fn gesture(&self, pointer_id: PointerId) -> Option<&Gesture> {
        self.gestures.get(&pointer_id)
    }
}
