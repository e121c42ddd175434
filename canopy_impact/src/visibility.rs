// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility tests against a destination's clipped frame and the viewport.

use canopy_geometry::{Viewport, overlaps};
use kurbo::Rect;

use crate::dimensions::DroppableDimension;

/// `target` corrected by the destination's internal scroll, so page rects
/// captured at drag start line up with where content sits now.
fn with_droppable_displacement(target: Rect, destination: &DroppableDimension) -> Rect {
    match &destination.frame {
        Some(f) => target + f.scroll.displacement(),
        None => target,
    }
}

/// Whether any part of `target` (a page rect) is visible inside both the
/// destination's active frame and the viewport.
#[must_use]
pub fn is_partially_visible(
    target: Rect,
    destination: &DroppableDimension,
    viewport: &Viewport,
) -> bool {
    let Some(active) = destination.active_frame() else {
        return false;
    };
    let shifted = with_droppable_displacement(target, destination);
    overlaps(shifted, active) && overlaps(shifted, viewport.frame)
}

/// Whether the whole of `target` is visible inside both the destination's
/// active frame and the viewport. Keyboard movement uses this stricter test so
/// it never moves the visual center to a partially clipped slot.
#[must_use]
pub fn is_totally_visible(
    target: Rect,
    destination: &DroppableDimension,
    viewport: &Viewport,
) -> bool {
    let Some(active) = destination.active_frame() else {
        return false;
    };
    let shifted = with_droppable_displacement(target, destination);
    contains_rect(active, shifted) && contains_rect(viewport.frame, shifted)
}

fn contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && inner.x1 <= outer.x1 && outer.y0 <= inner.y0 && inner.y1 <= outer.y1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::ScrollFrame;
    use crate::ids::{DroppableId, Kind};
    use canopy_geometry::{Axis, BoxModel, Scroll};
    use kurbo::Vec2;

    fn viewport() -> Viewport {
        Viewport::new(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Scroll::at(Vec2::ZERO, Vec2::ZERO),
        )
    }

    fn list() -> DroppableDimension {
        DroppableDimension::new(
            DroppableId(1),
            Kind(0),
            Axis::Vertical,
            BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 300.0)),
        )
    }

    #[test]
    fn inside_everything_is_visible_both_ways() {
        let target = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert!(is_partially_visible(target, &list(), &viewport()));
        assert!(is_totally_visible(target, &list(), &viewport()));
    }

    #[test]
    fn partially_clipped_is_partially_but_not_totally_visible() {
        // Half below the container's bottom edge.
        let target = Rect::new(0.0, 290.0, 100.0, 310.0);
        assert!(is_partially_visible(target, &list(), &viewport()));
        assert!(!is_totally_visible(target, &list(), &viewport()));
    }

    #[test]
    fn outside_the_container_is_invisible() {
        let target = Rect::new(0.0, 301.0, 100.0, 320.0);
        assert!(!is_partially_visible(target, &list(), &viewport()));
    }

    #[test]
    fn outside_the_viewport_is_invisible() {
        let mut d = list();
        d.page = BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 2000.0));
        let target = Rect::new(0.0, 700.0, 100.0, 720.0);
        assert!(!is_partially_visible(target, &d, &viewport()));
    }

    #[test]
    fn droppable_scroll_shifts_the_target() {
        let mut d = list();
        d.frame = Some(ScrollFrame {
            frame: Rect::new(0.0, 0.0, 100.0, 100.0),
            scroll: Scroll::at(Vec2::ZERO, Vec2::new(0.0, 200.0)),
        });
        // At rest, an item at 150..170 is below the 100px frame.
        let target = Rect::new(0.0, 150.0, 100.0, 170.0);
        assert!(!is_partially_visible(target, &d, &viewport()));
        // Scrolling the container down 100px brings it into the frame.
        let scrolled = d.with_frame_scroll(Vec2::new(0.0, 100.0));
        assert!(is_partially_visible(target, &scrolled, &viewport()));
        assert!(is_totally_visible(target, &scrolled, &viewport()));
    }
}
