// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical inputs consumed by [`Carousel::handle`](crate::Carousel::handle).

use crate::TimerId;

/// One input event, already decoded from whatever the host's event system delivers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselInput {
    /// Advance one panel, keeping the current cadence.
    Next,
    /// Go back one panel, keeping the current cadence.
    Previous,
    /// The "next" button: advance and wait the manual interval before auto-advancing.
    NextManual,
    /// The "previous" button: go back and wait the manual interval before auto-advancing.
    PreviousManual,
    /// An indicator was activated; jump to its zero-based position.
    Indicator(usize),
    /// A gesture ended with this horizontal displacement, see [`crate::swipe`].
    Swipe(f64),
    /// The host's recurring timer fired.
    Timer(TimerId),
}
