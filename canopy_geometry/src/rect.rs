// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rect helpers with inclusive-edge semantics.

use kurbo::{Point, Rect, Vec2};

/// Whether two rects overlap in any way.
///
/// The edge of a rect is considered part of itself, so two rects that share an
/// edge overlap. Visibility testing wants this: an item sitting exactly on the
/// clip boundary is still (partially) visible.
#[inline]
#[must_use]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Whether `r` contains `p`, edges included.
#[inline]
#[must_use]
pub fn contains_point(r: Rect, p: Point) -> bool {
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

/// Grow a rect on the side a displacement points away from.
///
/// A positive component extends the max edge, a negative component extends the
/// min edge. Used to widen a container's hit area by the amount its inner
/// content has scrolled.
#[must_use]
pub fn grow_by_displacement(r: Rect, d: Vec2) -> Rect {
    let mut out = r;
    if d.x > 0.0 {
        out.x1 += d.x;
    } else {
        out.x0 += d.x;
    }
    if d.y > 0.0 {
        out.y1 += d.y;
    } else {
        out.y0 += d.y;
    }
    out
}
