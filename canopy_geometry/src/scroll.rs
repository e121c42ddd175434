// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable scroll positions and the window viewport.

use kurbo::{Rect, Vec2};

/// A scroll position captured when a drag starts, plus where it is now.
///
/// `Scroll` is a value: updates go through [`Scroll::with_current`], which
/// returns a new value. The difference between `initial` and `current` is what
/// page-space geometry captured at drag start must be corrected by.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scroll {
    /// Scroll offset when the drag started.
    pub initial: Vec2,
    /// Scroll offset now.
    pub current: Vec2,
    /// Maximum scroll offset (content size minus frame size, per axis).
    pub max: Vec2,
}

impl Scroll {
    /// A scroll that has not moved from `initial`.
    #[must_use]
    pub const fn at(initial: Vec2, max: Vec2) -> Self {
        Self {
            initial,
            current: initial,
            max,
        }
    }

    /// How far the scroll has moved since the drag started.
    #[inline]
    #[must_use]
    pub fn diff(&self) -> Vec2 {
        self.current - self.initial
    }

    /// The correction to apply to drag-start page geometry: the negation of
    /// [`Scroll::diff`].
    #[inline]
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.initial - self.current
    }

    /// This scroll with a new current offset. Returns a new value.
    #[must_use]
    pub const fn with_current(self, current: Vec2) -> Self {
        Self { current, ..self }
    }
}

/// The window's visible frame and scroll position, in page space.
///
/// Like [`Scroll`], a `Viewport` is never mutated in place: scrolling produces
/// a new viewport whose frame has been translated by the scroll delta, so a
/// consumer holding a `Viewport` always sees a consistent frame/scroll pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// The visible window rect in page coordinates.
    pub frame: Rect,
    /// Window scroll state.
    pub scroll: Scroll,
}

impl Viewport {
    /// Build a viewport from its visible frame and scroll state.
    #[must_use]
    pub const fn new(frame: Rect, scroll: Scroll) -> Self {
        Self { frame, scroll }
    }

    /// This viewport scrolled to `current`. The frame translates by the delta
    /// from the previous position.
    #[must_use]
    pub fn scroll_to(&self, current: Vec2) -> Self {
        let delta = current - self.scroll.current;
        Self {
            frame: self.frame + delta,
            scroll: self.scroll.with_current(current),
        }
    }
}
