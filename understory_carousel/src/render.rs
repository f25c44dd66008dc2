// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render collaborator and small view helpers.
//!
//! The carousel does not know how panels are drawn. After every applied
//! transition it calls [`Render::render`] with the new active index; the host is
//! expected to shift the panel track and restyle its indicators. The helpers in
//! this module compute the two things every host ends up deriving from that index.
//!
//! ```
//! use understory_carousel::render::{indicator_marks, track_offset};
//!
//! // Panel 2 of 4 is showing: shift the track left by two viewport widths…
//! assert_eq!(track_offset(2), 2.0);
//!
//! // …and light the third dot.
//! let lit: Vec<usize> = indicator_marks(2, 4)
//!     .filter(|mark| mark.active)
//!     .map(|mark| mark.index)
//!     .collect();
//! assert_eq!(lit, [2]);
//! ```

/// Render surface for a carousel.
///
/// Implementations must not fail; drawing errors are the surface's own concern.
/// Any `FnMut(usize)` closure is a render surface.
pub trait Render {
    /// Shows the panel at `active`.
    fn render(&mut self, active: usize);
}

impl<F: FnMut(usize)> Render for F {
    fn render(&mut self, active: usize) {
        self(active);
    }
}

/// Returns how far the panel track is shifted, in viewport widths.
///
/// Panels are laid out edge to edge, so showing panel `active` means translating
/// the track by `-active` viewport widths.
#[must_use]
pub fn track_offset(active: usize) -> f64 {
    active as f64
}

/// Visual state of one indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndicatorMark {
    /// Zero-based panel position this indicator stands for.
    pub index: usize,
    /// Whether this indicator represents the showing panel.
    pub active: bool,
}

/// Iterates over one [`IndicatorMark`] per panel.
///
/// Exactly one mark is active when `active < item_count`.
pub fn indicator_marks(active: usize, item_count: usize) -> impl Iterator<Item = IndicatorMark> {
    (0..item_count).map(move |index| IndicatorMark {
        index,
        active: index == active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn closures_are_render_surfaces() {
        let mut seen = Vec::new();
        {
            let mut surface = |index: usize| seen.push(index);
            surface.render(3);
            surface.render(0);
        }
        assert_eq!(seen, [3, 0]);
    }

    #[test]
    fn one_mark_per_panel_with_single_active() {
        let marks: Vec<_> = indicator_marks(1, 3).collect();
        assert_eq!(
            marks,
            [
                IndicatorMark {
                    index: 0,
                    active: false
                },
                IndicatorMark {
                    index: 1,
                    active: true
                },
                IndicatorMark {
                    index: 2,
                    active: false
                },
            ]
        );
    }

    #[test]
    fn empty_carousel_has_no_marks() {
        assert_eq!(indicator_marks(0, 0).count(), 0);
    }

    #[test]
    fn track_offset_is_whole_viewports() {
        assert_eq!(track_offset(0), 0.0);
        assert_eq!(track_offset(4), 4.0);
    }
}
