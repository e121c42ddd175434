// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard scroll jumps: a single discrete scroll by an exact distance, with
//! no speed ramp.

use canopy_geometry::Scroll;
use kurbo::Vec2;

/// The portion of a requested jump a scrollable can absorb.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JumpResult {
    /// The scroll delta the scrollable can actually perform.
    pub scrolled: Vec2,
    /// The portion of the request beyond the scrollable's range, to be passed
    /// on to an outer scrollable (typically the window).
    pub remainder: Option<Vec2>,
}

fn clamp_axis(current: f64, max: f64, change: f64) -> f64 {
    let target = (current + change).max(0.0).min(max);
    target - current
}

/// Split a requested jump against a scrollable's range.
///
/// Each axis clamps independently against `[0, max]`. A scrollable already at
/// an edge absorbs nothing on that axis and the whole axis request becomes
/// remainder.
#[must_use]
pub fn clamp_jump(scroll: Scroll, change: Vec2) -> JumpResult {
    let scrolled = Vec2::new(
        clamp_axis(scroll.current.x, scroll.max.x, change.x),
        clamp_axis(scroll.current.y, scroll.max.y, change.y),
    );
    let rest = change - scrolled;
    JumpResult {
        scrolled,
        remainder: (rest != Vec2::ZERO).then_some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(current: f64, max: f64) -> Scroll {
        Scroll::at(Vec2::ZERO, Vec2::new(0.0, max)).with_current(Vec2::new(0.0, current))
    }

    #[test]
    fn a_jump_within_range_is_fully_absorbed() {
        let result = clamp_jump(scroll(100.0, 300.0), Vec2::new(0.0, 50.0));
        assert_eq!(result.scrolled, Vec2::new(0.0, 50.0));
        assert_eq!(result.remainder, None);
    }

    #[test]
    fn a_jump_past_the_end_splits_into_a_remainder() {
        let result = clamp_jump(scroll(250.0, 300.0), Vec2::new(0.0, 120.0));
        assert_eq!(result.scrolled, Vec2::new(0.0, 50.0));
        assert_eq!(result.remainder, Some(Vec2::new(0.0, 70.0)));
    }

    #[test]
    fn a_jump_from_an_edge_is_all_remainder() {
        let result = clamp_jump(scroll(0.0, 300.0), Vec2::new(0.0, -40.0));
        assert_eq!(result.scrolled, Vec2::ZERO);
        assert_eq!(result.remainder, Some(Vec2::new(0.0, -40.0)));
    }

    #[test]
    fn axes_clamp_independently() {
        let s = Scroll::at(Vec2::ZERO, Vec2::new(100.0, 300.0))
            .with_current(Vec2::new(90.0, 100.0));
        let result = clamp_jump(s, Vec2::new(30.0, 30.0));
        assert_eq!(result.scrolled, Vec2::new(10.0, 30.0));
        assert_eq!(result.remainder, Some(Vec2::new(20.0, 0.0)));
    }
}
