// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`DragImpact`] value: the computed outcome of a drag at a point in
//! time.

use kurbo::Vec2;

use canopy_geometry::Axis;

use crate::dimensions::DraggableDimension;
use crate::displacement::{DisplacedBy, DisplacementGroups, visual_offset};
use crate::ids::{DraggableId, DroppableId};

/// Where the dragged item would land: a reorder slot or a combine target.
///
/// These are mutually exclusive by construction; "no impact" is the absence of
/// a target ([`DragImpact::at`] being `None`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImpactTarget {
    /// Insert at `index` within the destination container.
    Reorder {
        /// The destination container.
        droppable_id: DroppableId,
        /// The insertion index, in the list with the dragged item removed.
        index: usize,
    },
    /// Merge with another item instead of reordering.
    Combine {
        /// The container holding the combine target.
        droppable_id: DroppableId,
        /// The item being combined with.
        with: DraggableId,
    },
}

impl ImpactTarget {
    /// The container this target lives in.
    #[must_use]
    pub const fn droppable_id(&self) -> DroppableId {
        match self {
            Self::Reorder { droppable_id, .. } | Self::Combine { droppable_id, .. } => {
                *droppable_id
            }
        }
    }
}

/// Pointer travel direction on each window axis, used to break center-line
/// ties when the pointer sits exactly between two slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the axis (down / right).
    Forward,
    /// Toward the start of the axis (up / left).
    Backward,
}

/// The most recent pointer direction per axis.
///
/// An axis keeps its previous direction when a move does not change that
/// coordinate, so ties always resolve against real user intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UserDirection {
    /// Direction on the vertical axis.
    pub vertical: Direction,
    /// Direction on the horizontal axis.
    pub horizontal: Direction,
}

impl Default for UserDirection {
    fn default() -> Self {
        Self {
            vertical: Direction::Forward,
            horizontal: Direction::Forward,
        }
    }
}

impl UserDirection {
    /// The direction component for a list's main axis.
    #[must_use]
    pub const fn on(&self, axis: Axis) -> Direction {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        }
    }

    /// Update from a movement delta, keeping the previous direction on axes
    /// with no movement.
    #[must_use]
    pub fn updated_by(self, delta: Vec2) -> Self {
        let vertical = if delta.y > 0.0 {
            Direction::Forward
        } else if delta.y < 0.0 {
            Direction::Backward
        } else {
            self.vertical
        };
        let horizontal = if delta.x > 0.0 {
            Direction::Forward
        } else if delta.x < 0.0 {
            Direction::Backward
        } else {
            self.horizontal
        };
        Self {
            vertical,
            horizontal,
        }
    }
}

/// The computed effect of a drag at a point in time.
///
/// An impact is an immutable value: every input event replaces it wholesale
/// with a new one derived from the previous impact plus the new input.
///
/// Renderers derive each item's visual transform from
/// [`DragImpact::offset_of`], which combines membership in the displaced set
/// with whether the item started after the dragged item's home slot (items
/// that did begin the drag conceptually displaced but visually unmoved).
#[derive(Clone, Debug, PartialEq)]
pub struct DragImpact {
    /// The displaced items and their visibility/animation state.
    pub displaced: DisplacementGroups,
    /// How far displaced items shift.
    pub displaced_by: DisplacedBy,
    /// Displacement direction: `true` when the proposed slot is before the
    /// home slot in the same list, and always `true` in a foreign list.
    pub forward: bool,
    /// The target slot, or `None` for "no impact".
    pub at: Option<ImpactTarget>,
}

impl DragImpact {
    /// The impact of a drag with no valid target.
    #[must_use]
    pub fn no_impact() -> Self {
        Self {
            displaced: DisplacementGroups::empty(),
            displaced_by: DisplacedBy::ZERO,
            forward: false,
            at: None,
        }
    }

    /// Whether this impact has no target.
    #[must_use]
    pub fn is_no_impact(&self) -> bool {
        self.at.is_none()
    }

    /// The reorder destination, if any.
    #[must_use]
    pub fn destination(&self) -> Option<(DroppableId, usize)> {
        match self.at {
            Some(ImpactTarget::Reorder {
                droppable_id,
                index,
            }) => Some((droppable_id, index)),
            _ => None,
        }
    }

    /// The combine target, if any.
    #[must_use]
    pub fn combine_with(&self) -> Option<DraggableId> {
        match self.at {
            Some(ImpactTarget::Combine { with, .. }) => Some(with),
            _ => None,
        }
    }

    /// The visual offset this impact implies for `item`, given the dragged
    /// item's home container and index.
    #[must_use]
    pub fn offset_of(&self, item: &DraggableDimension, home: (DroppableId, usize)) -> Vec2 {
        let displaced = self.displaced.contains(item.id);
        let did_start_after = item.droppable_id == home.0 && item.index > home.1;
        visual_offset(displaced, did_start_after, self.displaced_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_impact_has_no_target() {
        let impact = DragImpact::no_impact();
        assert!(impact.is_no_impact());
        assert_eq!(impact.destination(), None);
        assert_eq!(impact.combine_with(), None);
        assert!(impact.displaced.all.is_empty());
    }

    #[test]
    fn target_accessors_are_exclusive() {
        let reorder = ImpactTarget::Reorder {
            droppable_id: DroppableId(1),
            index: 2,
        };
        let combine = ImpactTarget::Combine {
            droppable_id: DroppableId(1),
            with: DraggableId(9),
        };
        assert_eq!(reorder.droppable_id(), DroppableId(1));
        assert_eq!(combine.droppable_id(), DroppableId(1));

        let impact = DragImpact {
            at: Some(reorder),
            ..DragImpact::no_impact()
        };
        assert_eq!(impact.destination(), Some((DroppableId(1), 2)));
        assert_eq!(impact.combine_with(), None);

        let impact = DragImpact {
            at: Some(combine),
            ..DragImpact::no_impact()
        };
        assert_eq!(impact.destination(), None);
        assert_eq!(impact.combine_with(), Some(DraggableId(9)));
    }

    #[test]
    fn direction_updates_only_on_movement() {
        let d = UserDirection::default();
        let d = d.updated_by(Vec2::new(0.0, -3.0));
        assert_eq!(d.vertical, Direction::Backward);
        assert_eq!(d.horizontal, Direction::Forward);
        // No vertical movement: direction is retained.
        let d = d.updated_by(Vec2::new(2.0, 0.0));
        assert_eq!(d.vertical, Direction::Backward);
        assert_eq!(d.horizontal, Direction::Forward);
    }
}
