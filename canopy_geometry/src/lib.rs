// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Geometry: axis-parameterized geometry primitives for list reordering.
//!
//! Drag-and-drop math is the same for vertical and horizontal lists once every
//! formula is expressed against an abstract *main axis* (the direction items
//! flow in) and its *cross axis*. This crate provides that abstraction plus the
//! small set of value types the rest of Canopy computes with:
//!
//! - [`Axis`]: direction-agnostic accessors for points, vectors, and rects.
//! - [`Spacing`] / [`BoxModel`]: border-box + margin-box pairs for items.
//! - [`Scroll`] / [`Viewport`]: immutable scroll positions and the window
//!   frame. Updates always produce new values; nothing is mutated in place, so
//!   downstream consumers only ever observe fully-formed snapshots.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_geometry::Axis;
//! use kurbo::{Point, Rect};
//!
//! let item = Rect::new(0.0, 40.0, 100.0, 60.0);
//!
//! // The same code serves both orientations.
//! assert_eq!(Axis::Vertical.start(item), 40.0);
//! assert_eq!(Axis::Vertical.size(item), 20.0);
//! assert_eq!(Axis::Horizontal.size(item), 100.0);
//!
//! // Project a pointer onto the main axis of a vertical list.
//! let pointer = Point::new(30.0, 55.0);
//! assert_eq!(Axis::Vertical.main_of(pointer), 55.0);
//! ```
//!
//! Geometry is expressed in terms of [`kurbo`] types ([`kurbo::Rect`],
//! [`kurbo::Point`], [`kurbo::Vec2`]), which the rest of the Canopy crates
//! share. All coordinates are page-space logical pixels unless a function says
//! otherwise.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod axis;
mod box_model;
mod rect;
mod scroll;

pub use axis::Axis;
pub use box_model::{BoxModel, Spacing, expand};
pub use rect::{contains_point, grow_by_displacement, overlaps};
pub use scroll::{Scroll, Viewport};
