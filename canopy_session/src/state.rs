// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag state and the session event buffer.

use canopy_impact::{DragImpact, DraggableId, DroppableId, UserDirection};
use kurbo::{Point, Vec2};

use crate::phase::{DropReason, Phase};

/// Everything a live drag carries between inputs.
///
/// The state is swapped wholesale on every input: consumers either see the
/// previous state or the next one, never a partially updated mix.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    /// The item being dragged.
    pub dragging: DraggableId,
    /// The container and index the item was lifted from.
    pub home: (DroppableId, usize),
    /// The item's center when the drag started.
    pub start_center: Point,
    /// The item's current visual center.
    pub current_center: Point,
    /// Most recent pointer direction per axis, for center-line tie breaks.
    pub direction: UserDirection,
    /// The current impact.
    pub impact: DragImpact,
    /// When the drag started, in the host's millisecond clock.
    pub started_at_ms: u64,
    /// Whether fluid scrolling dampens speed early in the drag. Set when the
    /// drag began with the item already inside a scroll-trigger band.
    pub should_use_time_dampening: bool,
    /// A keyboard-requested discrete scroll the host has not yet performed.
    pub scroll_jump_request: Option<Vec2>,
    /// Hosts clear this while a drop animation must not be interrupted.
    pub can_cancel: bool,
}

/// A lifecycle notification for the host.
///
/// Events are buffered and drained by the host; the session never calls back
/// into host code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session moved between phases.
    PhaseChanged {
        /// The phase left.
        from: Phase,
        /// The phase entered.
        to: Phase,
    },
    /// Geometry was published and a drag became live.
    DragStarted {
        /// The dragged item.
        id: DraggableId,
    },
    /// A drag finished (including its drop animation, if any).
    DragEnded {
        /// The item that was dragged.
        id: DraggableId,
        /// How the drag ended.
        reason: DropReason,
    },
}
