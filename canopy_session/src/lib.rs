// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Session: the drag lifecycle state machine.
//!
//! A [`DragSession`] is the single context object a host owns per drag
//! surface. It sequences the phases of a drag (`Idle`, `Collecting`,
//! `Dragging`, `DropPending`, `DropAnimating`), guards which operations are
//! legal in which phase, holds the published geometry snapshot and viewport,
//! and routes inputs through the pure computation crates:
//! [`canopy_impact`] for pointer and keyboard impacts and
//! [`canopy_autoscroll`] for scroll vectors.
//!
//! The session is strictly inert from the host's point of view:
//!
//! - it never reads a clock; timestamps arrive as `u64` milliseconds,
//! - it never scrolls; it hands out vectors the host applies and reports
//!   back,
//! - it never calls host code; lifecycle notifications accumulate as
//!   [`SessionEvent`]s drained with [`DragSession::take_events`],
//! - frame-deferred work (geometry collection batching) lives in a
//!   [`FrameQueue`] the host flushes from its own frame callback, with
//!   [`CancelToken`]s for abandonment.
//!
//! ```rust
//! use canopy_geometry::{BoxModel, Scroll, Viewport};
//! use canopy_impact::{
//!     DimensionSnapshot, DraggableDimension, DraggableId, DroppableDimension, DroppableId, Kind,
//! };
//! use canopy_session::{DragSession, Phase};
//! use kurbo::{Point, Rect, Vec2};
//!
//! let mut snapshot = DimensionSnapshot::new();
//! snapshot.insert_droppable(DroppableDimension::new(
//!     DroppableId(1),
//!     Kind(0),
//!     canopy_geometry::Axis::Vertical,
//!     BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 200.0)),
//! ));
//! for i in 0..2 {
//!     let top = i as f64 * 100.0;
//!     snapshot.insert_draggable(DraggableDimension::new(
//!         DraggableId(i),
//!         DroppableId(1),
//!         i as usize,
//!         Kind(0),
//!         BoxModel::from_border_box(Rect::new(0.0, top, 100.0, top + 100.0)),
//!     ));
//! }
//! let viewport = Viewport::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Scroll::at(Vec2::ZERO, Vec2::ZERO),
//! );
//!
//! let mut session = DragSession::default();
//! assert!(session.try_lift(DraggableId(0), Point::new(50.0, 50.0), 0).unwrap());
//! session.publish(snapshot, viewport, 16).unwrap();
//! assert_eq!(session.phase(), Phase::Dragging { dragging: DraggableId(0) });
//!
//! session.move_to(Point::new(50.0, 150.0)).unwrap();
//! let impact = &session.state().unwrap().impact;
//! assert_eq!(impact.destination(), Some((DroppableId(1), 1)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod error;
mod machine;
mod phase;
mod queue;
mod state;

pub use error::SessionError;
pub use machine::{DragSession, MovementAxis, PendingLift};
pub use phase::{DropReason, Phase, can_start_drag};
pub use queue::{CancelToken, FrameQueue};
pub use state::{DragState, SessionEvent};
