// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The main/cross axis abstraction.

use kurbo::{Point, Rect, Size, Vec2};

/// The direction a list lays its items out in.
///
/// Every displacement and impact formula in Canopy is parameterized by an
/// `Axis` so the same code serves vertical and horizontal lists. The *main*
/// axis is the flow direction; the *cross* axis is the other one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items flow top-to-bottom; the main axis is `y`.
    Vertical,
    /// Items flow left-to-right; the main axis is `x`.
    Horizontal,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn cross_axis(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// The main-axis component of a point.
    #[inline]
    #[must_use]
    pub const fn main_of(self, p: Point) -> f64 {
        match self {
            Self::Vertical => p.y,
            Self::Horizontal => p.x,
        }
    }

    /// The cross-axis component of a point.
    #[inline]
    #[must_use]
    pub const fn cross_of(self, p: Point) -> f64 {
        self.cross_axis().main_of(p)
    }

    /// The main-axis component of a vector.
    #[inline]
    #[must_use]
    pub const fn main_of_vec(self, v: Vec2) -> f64 {
        match self {
            Self::Vertical => v.y,
            Self::Horizontal => v.x,
        }
    }

    /// Start edge of a rect on the main axis (top for vertical, left for
    /// horizontal).
    #[inline]
    #[must_use]
    pub const fn start(self, r: Rect) -> f64 {
        match self {
            Self::Vertical => r.y0,
            Self::Horizontal => r.x0,
        }
    }

    /// End edge of a rect on the main axis.
    #[inline]
    #[must_use]
    pub const fn end(self, r: Rect) -> f64 {
        match self {
            Self::Vertical => r.y1,
            Self::Horizontal => r.x1,
        }
    }

    /// Extent of a rect on the main axis.
    #[inline]
    #[must_use]
    pub const fn size(self, r: Rect) -> f64 {
        self.end(r) - self.start(r)
    }

    /// Midpoint of a rect on the main axis.
    #[inline]
    #[must_use]
    pub const fn center(self, r: Rect) -> f64 {
        (self.start(r) + self.end(r)) / 2.0
    }

    /// Extent of a size on the main axis.
    #[inline]
    #[must_use]
    pub const fn size_of(self, s: Size) -> f64 {
        match self {
            Self::Vertical => s.height,
            Self::Horizontal => s.width,
        }
    }

    /// A vector with `main` on the main axis and zero on the cross axis.
    #[inline]
    #[must_use]
    pub const fn vec(self, main: f64) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(0.0, main),
            Self::Horizontal => Vec2::new(main, 0.0),
        }
    }

    /// A point assembled from main- and cross-axis components.
    #[inline]
    #[must_use]
    pub const fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Vertical => Point::new(cross, main),
            Self::Horizontal => Point::new(main, cross),
        }
    }

    /// `p` with its main-axis component replaced by `main`.
    #[inline]
    #[must_use]
    pub const fn with_main(self, p: Point, main: f64) -> Point {
        self.point(main, self.cross_of(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Rect = Rect::new(10.0, 20.0, 110.0, 60.0);

    #[test]
    fn vertical_reads_y() {
        let a = Axis::Vertical;
        assert_eq!(a.start(R), 20.0);
        assert_eq!(a.end(R), 60.0);
        assert_eq!(a.size(R), 40.0);
        assert_eq!(a.center(R), 40.0);
        assert_eq!(a.main_of(Point::new(1.0, 2.0)), 2.0);
        assert_eq!(a.cross_of(Point::new(1.0, 2.0)), 1.0);
    }

    #[test]
    fn horizontal_reads_x() {
        let a = Axis::Horizontal;
        assert_eq!(a.start(R), 10.0);
        assert_eq!(a.end(R), 110.0);
        assert_eq!(a.size(R), 100.0);
        assert_eq!(a.center(R), 60.0);
        assert_eq!(a.main_of(Point::new(1.0, 2.0)), 1.0);
    }

    #[test]
    fn cross_axis_is_involutive() {
        assert_eq!(Axis::Vertical.cross_axis(), Axis::Horizontal);
        assert_eq!(Axis::Vertical.cross_axis().cross_axis(), Axis::Vertical);
    }

    #[test]
    fn vec_and_point_round_trip() {
        let a = Axis::Vertical;
        assert_eq!(a.vec(5.0), Vec2::new(0.0, 5.0));
        assert_eq!(a.point(5.0, 7.0), Point::new(7.0, 5.0));
        assert_eq!(a.main_of(a.point(5.0, 7.0)), 5.0);
        assert_eq!(a.cross_of(a.point(5.0, 7.0)), 7.0);

        let h = Axis::Horizontal;
        assert_eq!(h.vec(5.0), Vec2::new(5.0, 0.0));
        assert_eq!(h.point(5.0, 7.0), Point::new(5.0, 7.0));
    }

    #[test]
    fn with_main_replaces_only_main() {
        let p = Point::new(3.0, 9.0);
        assert_eq!(Axis::Vertical.with_main(p, 1.0), Point::new(3.0, 1.0));
        assert_eq!(Axis::Horizontal.with_main(p, 1.0), Point::new(1.0, 9.0));
    }

    #[test]
    fn size_of_reads_the_right_dimension() {
        let s = Size::new(100.0, 40.0);
        assert_eq!(Axis::Vertical.size_of(s), 40.0);
        assert_eq!(Axis::Horizontal.size_of(s), 100.0);
    }
}
