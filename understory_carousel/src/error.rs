// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while wiring or driving a carousel.

/// Configuration and navigation errors.
///
/// Construction errors ([`MissingRenderer`](Self::MissingRenderer),
/// [`MissingScheduler`](Self::MissingScheduler), [`ZeroInterval`](Self::ZeroInterval),
/// [`InvalidSwipeThreshold`](Self::InvalidSwipeThreshold)) are returned from
/// [`CarouselBuilder::build`](crate::CarouselBuilder::build) so a misconfigured
/// widget is rejected before its first render.
///
/// [`InvalidIndex`](Self::InvalidIndex) is only surfaced by
/// [`Carousel::try_go_to`](crate::Carousel::try_go_to); the plain
/// [`Carousel::go_to`](crate::Carousel::go_to) treats it as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CarouselError {
    /// No render collaborator was supplied.
    #[error("carousel has no render target")]
    MissingRenderer,
    /// Auto-advance is enabled for a multi-panel carousel but no scheduler was supplied.
    #[error("auto-advance is enabled but no scheduler was supplied")]
    MissingScheduler,
    /// A configured auto-advance interval was zero.
    #[error("auto-advance intervals must be non-zero")]
    ZeroInterval,
    /// The swipe threshold was not a finite, positive distance.
    #[error("swipe threshold must be finite and positive, got {0}")]
    InvalidSwipeThreshold(f64),
    /// A direct jump targeted a panel that does not exist.
    #[error("panel index {index} is out of range for {item_count} panels")]
    InvalidIndex {
        /// The requested panel.
        index: usize,
        /// Number of panels in the carousel.
        item_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_values() {
        let err = CarouselError::InvalidIndex {
            index: 7,
            item_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "panel index 7 is out of range for 3 panels"
        );
        assert_eq!(
            CarouselError::InvalidSwipeThreshold(-1.0).to_string(),
            "swipe threshold must be finite and positive, got -1"
        );
    }
}
