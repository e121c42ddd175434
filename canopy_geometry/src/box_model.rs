// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border-box / margin-box pairs for draggable items and containers.

use kurbo::{Point, Rect, Vec2};

/// Per-edge spacing (margins), in logical pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Spacing {
    /// Zero spacing on all edges.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// The same spacing on all edges.
    #[must_use]
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

/// Grow a rect outward by per-edge spacing.
///
/// Negative spacing shrinks the corresponding edge, which is how over-scan
/// expansion and inner-band shrinking are both expressed.
#[must_use]
pub fn expand(r: Rect, s: Spacing) -> Rect {
    Rect::new(r.x0 - s.left, r.y0 - s.top, r.x1 + s.right, r.y1 + s.bottom)
}

/// An item's border box together with its margin box.
///
/// The border box is what the user sees; the margin box is what layout
/// reserves, and is what displacement distances are measured from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxModel {
    /// The painted box.
    pub border_box: Rect,
    /// The border box grown by `margin`.
    pub margin_box: Rect,
    /// Margins around the border box.
    pub margin: Spacing,
}

impl BoxModel {
    /// Build a box model from a border box and its margins.
    #[must_use]
    pub fn new(border_box: Rect, margin: Spacing) -> Self {
        Self {
            border_box,
            margin_box: expand(border_box, margin),
            margin,
        }
    }

    /// A box model with no margins.
    #[must_use]
    pub fn from_border_box(border_box: Rect) -> Self {
        Self::new(border_box, Spacing::ZERO)
    }

    /// Center of the border box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.border_box.center()
    }

    /// This box model translated by `by`. Returns a new value.
    #[must_use]
    pub fn shift(&self, by: Vec2) -> Self {
        Self {
            border_box: self.border_box + by,
            margin_box: self.margin_box + by,
            margin: self.margin,
        }
    }
}
