// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning knobs for auto-advance cadence and swipe recognition.

use crate::CarouselError;

/// Default delay between auto-advance ticks, in milliseconds.
pub const DEFAULT_BASE_INTERVAL_MS: u64 = 4_500;

/// Default delay applied after a deliberate next/previous button press, in milliseconds.
pub const DEFAULT_MANUAL_INTERVAL_MS: u64 = 9_000;

/// Default horizontal distance a gesture must exceed to count as a swipe, in pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// How long an interval override passed to [`Carousel::next`](crate::Carousel::next)
/// or [`Carousel::previous`](crate::Carousel::previous) stays in effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverridePolicy {
    /// The override covers exactly one auto-advance cycle; once that cycle fires the
    /// timer reverts to [`CarouselConfig::base_interval_ms`].
    #[default]
    NextCycle,
    /// The override becomes the cadence for every later cycle until another override
    /// replaces it.
    Persist,
}

/// Carousel configuration.
///
/// All fields are public; the `with_*` setters exist for call-chaining at the
/// construction site. Values are checked by [`CarouselConfig::validate`], which
/// [`CarouselBuilder::build`](crate::CarouselBuilder::build) runs before the
/// first render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Delay between auto-advance ticks when no override is in effect.
    pub base_interval_ms: u64,
    /// Delay used by the button adapters ([`Carousel::next_manual`](crate::Carousel::next_manual)
    /// and [`Carousel::previous_manual`](crate::Carousel::previous_manual)).
    pub manual_interval_ms: u64,
    /// Horizontal displacement a swipe must strictly exceed.
    pub swipe_threshold: f64,
    /// Scope of interval overrides.
    pub override_policy: OverridePolicy,
    /// Whether the auto-advance timer runs at all.
    ///
    /// With `false` the carousel only moves in response to user input and never
    /// touches its scheduler.
    pub auto_advance: bool,
}

impl CarouselConfig {
    /// Creates a configuration with the default cadence and swipe threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base_interval_ms: DEFAULT_BASE_INTERVAL_MS,
            manual_interval_ms: DEFAULT_MANUAL_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            override_policy: OverridePolicy::NextCycle,
            auto_advance: true,
        }
    }

    /// Sets the base auto-advance interval.
    #[must_use]
    pub const fn with_base_interval_ms(mut self, interval_ms: u64) -> Self {
        self.base_interval_ms = interval_ms;
        self
    }

    /// Sets the interval used after button presses.
    #[must_use]
    pub const fn with_manual_interval_ms(mut self, interval_ms: u64) -> Self {
        self.manual_interval_ms = interval_ms;
        self
    }

    /// Sets the swipe threshold.
    #[must_use]
    pub const fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Sets the override policy.
    #[must_use]
    pub const fn with_override_policy(mut self, policy: OverridePolicy) -> Self {
        self.override_policy = policy;
        self
    }

    /// Enables or disables auto-advance.
    #[must_use]
    pub const fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = enabled;
        self
    }

    /// Checks that intervals are non-zero and the swipe threshold is a finite,
    /// positive distance.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.base_interval_ms == 0 || self.manual_interval_ms == 0 {
            return Err(CarouselError::ZeroInterval);
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(CarouselError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_cadence() {
        let config = CarouselConfig::default();
        assert_eq!(config.base_interval_ms, 4_500);
        assert_eq!(config.manual_interval_ms, 9_000);
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(config.override_policy, OverridePolicy::NextCycle);
        assert!(config.auto_advance);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_intervals_are_rejected() {
        let config = CarouselConfig::new().with_base_interval_ms(0);
        assert_eq!(config.validate(), Err(CarouselError::ZeroInterval));

        let config = CarouselConfig::new().with_manual_interval_ms(0);
        assert_eq!(config.validate(), Err(CarouselError::ZeroInterval));
    }

    #[test]
    fn degenerate_thresholds_are_rejected() {
        for threshold in [0.0, -10.0, f64::INFINITY] {
            let config = CarouselConfig::new().with_swipe_threshold(threshold);
            assert_eq!(
                config.validate(),
                Err(CarouselError::InvalidSwipeThreshold(threshold))
            );
        }

        let config = CarouselConfig::new().with_swipe_threshold(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidSwipeThreshold(t)) if t.is_nan()
        ));
    }
}
