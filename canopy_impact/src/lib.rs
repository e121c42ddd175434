// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Impact: pure drag-impact computation for list reordering.
//!
//! Given a snapshot of item and container geometry, a pointer position (or a
//! keyboard step), and the previous impact, this crate computes the next
//! [`DragImpact`]: where the dragged item would land, which other items must
//! shift out of its way, whether each shift is visible and should animate, and
//! whether a keyboard move needs the host to scroll first.
//!
//! Everything here is a pure function over value types. Calling the same
//! function twice with identical inputs yields identical output: there are no
//! clocks, no randomness, and every candidate walk is explicitly ordered. That
//! determinism is what makes golden/snapshot testing of drag behavior
//! possible.
//!
//! The main entry points are:
//!
//! - [`get_drag_impact`]: pointer-driven impact (reorder or combine).
//! - [`move_to_next_place`]: keyboard stepping along the list axis.
//! - [`move_cross_axis`]: keyboard stepping between lists.
//! - [`compute_displacement`]: the visibility/animation subset shared by all
//!   of the above.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_geometry::{BoxModel, Scroll, Viewport};
//! use canopy_impact::{
//!     DimensionSnapshot, DragImpact, DraggableDimension, DraggableId, DroppableDimension,
//!     DroppableId, ImpactArgs, ImpactTarget, Kind, UserDirection, get_drag_impact,
//! };
//! use kurbo::{Point, Rect, Vec2};
//!
//! let list = DroppableId(1);
//! let mut snapshot = DimensionSnapshot::new();
//! snapshot.insert_droppable(DroppableDimension::new(
//!     list,
//!     Kind(0),
//!     canopy_geometry::Axis::Vertical,
//!     BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 300.0)),
//! ));
//! for i in 0..3 {
//!     let top = i as f64 * 100.0;
//!     snapshot.insert_draggable(DraggableDimension::new(
//!         DraggableId(i),
//!         list,
//!         i as usize,
//!         Kind(0),
//!         BoxModel::from_border_box(Rect::new(0.0, top, 100.0, top + 100.0)),
//!     ));
//! }
//!
//! let viewport = Viewport::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Scroll::at(Vec2::ZERO, Vec2::ZERO),
//! );
//! let dragged = snapshot.draggable(DraggableId(0)).unwrap().clone();
//!
//! // Drag item 0 down to the middle of item 1.
//! let impact = get_drag_impact(&ImpactArgs {
//!     page_center: Point::new(50.0, 150.0),
//!     dragged: &dragged,
//!     snapshot: &snapshot,
//!     previous: &DragImpact::no_impact(),
//!     viewport: &viewport,
//!     direction: UserDirection::default(),
//! });
//! assert_eq!(
//!     impact.at,
//!     Some(ImpactTarget::Reorder { droppable_id: list, index: 1 })
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dimensions;
mod displacement;
mod drag_impact;
mod ids;
mod impact;
mod movement;
mod visibility;

pub use dimensions::{DimensionSnapshot, DraggableDimension, DroppableDimension, ScrollFrame};
pub use displacement::{
    DisplacedBy, DisplacedIds, Displacement, DisplacementGroups, compute_displacement,
    displaced_by, visual_offset,
};
pub use drag_impact::{COMBINE_INSET_RATIO, ImpactArgs, get_drag_impact};
pub use ids::{DraggableId, DroppableId, Kind};
pub use impact::{Direction, DragImpact, ImpactTarget, UserDirection};
pub use movement::{
    CrossMoveArgs, MoveArgs, MoveResult, NextSlot, move_cross_axis, move_to_next_place, next_slot,
};
pub use visibility::{is_partially_visible, is_totally_visible};
