// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Captured geometry for draggables and droppables, and the snapshot registry.
//!
//! Dimensions are captured fresh at the start of each drag and patched
//! mid-drag for scroll updates. All rects are page-space; the client-space
//! box, where a host needs it, is derived by the host from the window scroll.

use alloc::vec::Vec;

use canopy_geometry::{Axis, BoxModel, Scroll, grow_by_displacement, overlaps};
use hashbrown::HashMap;
use kurbo::{Rect, Vec2};

use crate::ids::{DraggableId, DroppableId, Kind};

/// Captured geometry for one draggable item.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableDimension {
    /// Stable id.
    pub id: DraggableId,
    /// The container this item belongs to.
    pub droppable_id: DroppableId,
    /// Logical index within the owning container.
    pub index: usize,
    /// Type tag; only matching kinds reorder/combine together.
    pub kind: Kind,
    /// Page-space boxes.
    pub page: BoxModel,
    /// How far other items must move to make room for this one: its own
    /// margin-box size as a vector.
    pub displace_by: Vec2,
}

impl DraggableDimension {
    /// Build a draggable dimension; `displace_by` is derived from the
    /// margin-box size.
    #[must_use]
    pub fn new(
        id: DraggableId,
        droppable_id: DroppableId,
        index: usize,
        kind: Kind,
        page: BoxModel,
    ) -> Self {
        let size = page.margin_box.size();
        Self {
            id,
            droppable_id,
            index,
            kind,
            page,
            displace_by: Vec2::new(size.width, size.height),
        }
    }
}

/// The scroll frame of a droppable that scrolls internally.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Page-space bounds of the visible frame of the scroll container.
    pub frame: Rect,
    /// The container's scroll state.
    pub scroll: Scroll,
}

impl ScrollFrame {
    /// Clip `subject` (a page rect captured at drag start) against this frame
    /// at the current scroll position. `None` when it is scrolled entirely out
    /// of view.
    #[must_use]
    pub fn clipped(&self, subject: Rect) -> Option<Rect> {
        let shifted = subject + self.scroll.displacement();
        if !overlaps(shifted, self.frame) {
            return None;
        }
        Some(shifted.intersect(self.frame))
    }
}

/// Captured geometry for one droppable container.
#[derive(Clone, Debug, PartialEq)]
pub struct DroppableDimension {
    /// Stable id.
    pub id: DroppableId,
    /// Type tag.
    pub kind: Kind,
    /// Direction this container lays items out in.
    pub axis: Axis,
    /// Disabled containers never accept a drag.
    pub is_enabled: bool,
    /// Whether dropping onto an item merges instead of reordering.
    pub is_combine_enabled: bool,
    /// Page-space boxes of the container itself.
    pub page: BoxModel,
    /// Present when the container scrolls internally.
    pub frame: Option<ScrollFrame>,
}

impl DroppableDimension {
    /// Build an enabled, non-combining, non-scrolling droppable.
    #[must_use]
    pub fn new(id: DroppableId, kind: Kind, axis: Axis, page: BoxModel) -> Self {
        Self {
            id,
            kind,
            axis,
            is_enabled: true,
            is_combine_enabled: false,
            page,
            frame: None,
        }
    }

    /// The currently visible portion of this container: the scroll frame's
    /// clip of the margin box, or the margin box itself when the container
    /// does not scroll. `None` when scrolled entirely out of view.
    #[must_use]
    pub fn active_frame(&self) -> Option<Rect> {
        match &self.frame {
            Some(f) => f.clipped(self.page.margin_box),
            None => Some(self.page.margin_box),
        }
    }

    /// The area a pointer must be inside to target this container: the active
    /// frame grown by how far the container has scrolled, so a container whose
    /// content has shifted under the pointer keeps matching.
    #[must_use]
    pub fn hit_frame(&self) -> Option<Rect> {
        let active = self.active_frame()?;
        match &self.frame {
            Some(f) => Some(grow_by_displacement(active, f.scroll.diff())),
            None => Some(active),
        }
    }

    /// This droppable with its scroll frame moved to `current`. Returns a new
    /// value; droppables without a scroll frame are returned unchanged.
    #[must_use]
    pub fn with_frame_scroll(&self, current: Vec2) -> Self {
        let mut out = self.clone();
        if let Some(f) = &mut out.frame {
            f.scroll = f.scroll.with_current(current);
        }
        out
    }
}

/// The id-keyed registry of all dimensions captured for a drag.
///
/// Lookups are map-based; every ordered view is explicitly sorted so callers
/// observe deterministic order regardless of hash-map iteration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DimensionSnapshot {
    draggables: HashMap<DraggableId, DraggableDimension>,
    droppables: HashMap<DroppableId, DroppableDimension>,
}

impl DimensionSnapshot {
    /// An empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a draggable, replacing any previous dimension with the same id.
    pub fn insert_draggable(&mut self, d: DraggableDimension) {
        self.draggables.insert(d.id, d);
    }

    /// Register a droppable, replacing any previous dimension with the same id.
    pub fn insert_droppable(&mut self, d: DroppableDimension) {
        self.droppables.insert(d.id, d);
    }

    /// Unregister a draggable. Returns `true` if it was present.
    pub fn remove_draggable(&mut self, id: DraggableId) -> bool {
        self.draggables.remove(&id).is_some()
    }

    /// Unregister a droppable. Returns `true` if it was present.
    pub fn remove_droppable(&mut self, id: DroppableId) -> bool {
        self.droppables.remove(&id).is_some()
    }

    /// Look up a draggable.
    #[must_use]
    pub fn draggable(&self, id: DraggableId) -> Option<&DraggableDimension> {
        self.draggables.get(&id)
    }

    /// Look up a droppable.
    #[must_use]
    pub fn droppable(&self, id: DroppableId) -> Option<&DroppableDimension> {
        self.droppables.get(&id)
    }

    /// All droppables, sorted by id.
    #[must_use]
    pub fn droppables_sorted(&self) -> Vec<&DroppableDimension> {
        let mut out: Vec<&DroppableDimension> = self.droppables.values().collect();
        out.sort_by_key(|d| d.id);
        out
    }

    /// The draggables inside a container, ordered by logical index.
    #[must_use]
    pub fn in_list(&self, droppable_id: DroppableId) -> Vec<&DraggableDimension> {
        let mut out: Vec<&DraggableDimension> = self
            .draggables
            .values()
            .filter(|d| d.droppable_id == droppable_id)
            .collect();
        out.sort_by_key(|d| d.index);
        out
    }

    /// [`DimensionSnapshot::in_list`] minus one item (the one being dragged).
    #[must_use]
    pub fn in_list_without(
        &self,
        droppable_id: DroppableId,
        exclude: DraggableId,
    ) -> Vec<&DraggableDimension> {
        let mut out = self.in_list(droppable_id);
        out.retain(|d| d.id != exclude);
        out
    }

    /// Patch a droppable's internal scroll. Returns `false` when the id is
    /// unknown or the droppable has no scroll frame.
    pub fn update_droppable_scroll(&mut self, id: DroppableId, current: Vec2) -> bool {
        match self.droppables.get_mut(&id) {
            Some(d) if d.frame.is_some() => {
                *d = d.with_frame_scroll(current);
                true
            }
            _ => false,
        }
    }

    /// Verify that every droppable's items carry indices `0..n` with no gaps
    /// or duplicates. Returns the first offending droppable.
    pub fn check_list_integrity(&self) -> Result<(), DroppableId> {
        let mut ids: Vec<DroppableId> = self.droppables.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            let items = self.in_list(id);
            for (expected, item) in items.iter().enumerate() {
                if item.index != expected {
                    return Err(id);
                }
            }
        }
        Ok(())
    }
}
