// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The displacement model: which items shift, whether the shift is visible,
//! and whether it should animate.

use canopy_geometry::{Axis, Spacing, Viewport, expand};
use hashbrown::{HashMap, HashSet};
use kurbo::Vec2;
use smallvec::SmallVec;

use crate::dimensions::{DraggableDimension, DroppableDimension};
use crate::ids::DraggableId;
use crate::visibility::is_partially_visible;

/// The offset displaced items shift by: the dragged item's margin-box size on
/// the destination's main axis, as both a scalar and a vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplacedBy {
    /// Main-axis amount.
    pub value: f64,
    /// The same amount as a main-axis vector.
    pub point: Vec2,
}

impl DisplacedBy {
    /// A zero offset (the "no impact" value).
    pub const ZERO: Self = Self {
        value: 0.0,
        point: Vec2::ZERO,
    };
}

/// Build the [`DisplacedBy`] for a destination axis from a dragged item's
/// `displace_by` vector.
#[must_use]
pub fn displaced_by(axis: Axis, displace_by: Vec2) -> DisplacedBy {
    let value = axis.main_of_vec(displace_by);
    DisplacedBy {
        value,
        point: axis.vec(value),
    }
}

/// One visible displaced item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Displacement {
    /// The displaced item.
    pub id: DraggableId,
    /// Whether the shift should animate or snap.
    pub should_animate: bool,
}

/// Ordered ids of displaced items, closest to the target slot first.
pub type DisplacedIds = SmallVec<[DraggableId; 8]>;

/// The displacement outcome: every candidate, partitioned into visible
/// entries (with their animation flag) and invisible ids.
///
/// Invariant: each id in `all` appears in exactly one of `visible` and
/// `invisible`, and `all` preserves the candidate input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplacementGroups {
    /// All displaced ids, ordered closest-to-target first.
    pub all: DisplacedIds,
    /// Visible displaced items keyed by id.
    pub visible: HashMap<DraggableId, Displacement>,
    /// Items displaced while outside the clipped frame or viewport.
    pub invisible: HashSet<DraggableId>,
}

impl DisplacementGroups {
    /// No displacement at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `id` is displaced (visibly or not).
    #[must_use]
    pub fn contains(&self, id: DraggableId) -> bool {
        self.all.contains(&id)
    }

    /// The animation flag for a visible displaced item.
    #[must_use]
    pub fn should_animate(&self, id: DraggableId) -> Option<bool> {
        self.visible.get(&id).map(|d| d.should_animate)
    }
}

/// The visual offset an item carries under an impact.
///
/// `displaced` is whether the impact currently displaces the item;
/// `did_start_after` is whether the item sat after the dragged item's home
/// slot in the home list when the drag began. Items that started after the
/// home slot begin the drag conceptually displaced but visually unmoved, so
/// the two flags combine:
///
/// - displaced and started-after: still in its starting spot (zero).
/// - displaced only: pushed toward the list end by the displacement offset.
/// - started-after only: collapsed toward the list start into the vacated
///   slot (negative offset).
/// - neither: unmoved.
#[must_use]
pub fn visual_offset(displaced: bool, did_start_after: bool, displaced_by: DisplacedBy) -> Vec2 {
    match (displaced, did_start_after) {
        (true, true) | (false, false) => Vec2::ZERO,
        (true, false) => displaced_by.point,
        (false, true) => -displaced_by.point,
    }
}

/// Compute displacement for the candidates after the dragged item's target
/// slot.
///
/// `afters` must be in container order (closest to the target slot first).
/// Each candidate's visibility is tested with its margin box expanded
/// *backward* by the displacement offset: the over-scan keeps an item that is
/// about to shift into view from being misclassified at the boundary.
///
/// Animation policy:
/// - `force_should_animate` overrides everything when set;
/// - an item that was invisible and is now visible snaps (no animation);
/// - an item visible in both states keeps its previous flag;
/// - a fresh visible item animates.
pub fn compute_displacement(
    afters: &[&DraggableDimension],
    destination: &DroppableDimension,
    displaced_by: DisplacedBy,
    previous: Option<&DisplacementGroups>,
    viewport: &Viewport,
    force_should_animate: Option<bool>,
) -> DisplacementGroups {
    let mut groups = DisplacementGroups::empty();

    for candidate in afters {
        let id = candidate.id;
        groups.all.push(id);

        // Over-scan backward: grow the top/left edge by the displacement.
        let target = expand(
            candidate.page.margin_box,
            Spacing {
                top: displaced_by.point.y,
                left: displaced_by.point.x,
                right: 0.0,
                bottom: 0.0,
            },
        );

        if !is_partially_visible(target, destination, viewport) {
            groups.invisible.insert(id);
            continue;
        }

        let should_animate = match force_should_animate {
            Some(forced) => forced,
            None => match previous {
                Some(prev) if prev.invisible.contains(&id) => false,
                Some(prev) => prev.should_animate(id).unwrap_or(true),
                None => true,
            },
        };

        groups.visible.insert(id, Displacement { id, should_animate });
    }

    groups
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::dimensions::{DimensionSnapshot, ScrollFrame};
    use crate::ids::{DroppableId, Kind};
    use canopy_geometry::{BoxModel, Scroll};
    use kurbo::Rect;

    fn viewport() -> Viewport {
        Viewport::new(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Scroll::at(Vec2::ZERO, Vec2::ZERO),
        )
    }

    fn list(frame_height: Option<f64>) -> DroppableDimension {
        let mut d = DroppableDimension::new(
            DroppableId(1),
            Kind(0),
            Axis::Vertical,
            BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 400.0)),
        );
        if let Some(h) = frame_height {
            d.frame = Some(ScrollFrame {
                frame: Rect::new(0.0, 0.0, 100.0, h),
                scroll: Scroll::at(Vec2::ZERO, Vec2::new(0.0, 400.0 - h)),
            });
        }
        d
    }

    fn items(tops: &[f64]) -> DimensionSnapshot {
        let mut snap = DimensionSnapshot::new();
        for (i, top) in tops.iter().enumerate() {
            snap.insert_draggable(DraggableDimension::new(
                DraggableId(i as u64 + 1),
                DroppableId(1),
                i,
                Kind(0),
                BoxModel::from_border_box(Rect::new(0.0, *top, 100.0, top + 100.0)),
            ));
        }
        snap
    }

    fn by(value: f64) -> DisplacedBy {
        displaced_by(Axis::Vertical, Vec2::new(100.0, value))
    }

    #[test]
    fn displaced_by_projects_the_axis() {
        let d = displaced_by(Axis::Vertical, Vec2::new(100.0, 30.0));
        assert_eq!(d.value, 30.0);
        assert_eq!(d.point, Vec2::new(0.0, 30.0));

        let h = displaced_by(Axis::Horizontal, Vec2::new(100.0, 30.0));
        assert_eq!(h.value, 100.0);
        assert_eq!(h.point, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn partition_covers_every_candidate_exactly_once() {
        let snap = items(&[0.0, 100.0, 200.0, 300.0]);
        let dest = list(Some(150.0));
        let afters = snap.in_list(DroppableId(1));

        let groups = compute_displacement(&afters, &dest, by(100.0), None, &viewport(), None);

        assert_eq!(groups.all.len(), 4);
        assert_eq!(groups.visible.len() + groups.invisible.len(), 4);
        for id in &groups.all {
            assert_ne!(
                groups.visible.contains_key(id),
                groups.invisible.contains(id),
                "id must be in exactly one group"
            );
        }
        // Order preserved from input.
        let ids: Vec<u64> = groups.all.iter().map(|id| id.0).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn clipped_items_are_invisible() {
        // 150px frame over 400px of content: items at 200.. and 300.. are out,
        // but the over-scan rescues the one within one displacement of view.
        let snap = items(&[0.0, 100.0, 200.0, 300.0]);
        let dest = list(Some(150.0));
        let afters = snap.in_list(DroppableId(1));

        let groups = compute_displacement(&afters, &dest, by(100.0), None, &viewport(), None);

        assert!(groups.visible.contains_key(&DraggableId(1)));
        assert!(groups.visible.contains_key(&DraggableId(2)));
        // Item 3 at 200..300 is outside the 150px frame, but its over-scanned
        // rect (100..300) overlaps it.
        assert!(groups.visible.contains_key(&DraggableId(3)));
        assert!(groups.invisible.contains(&DraggableId(4)));
    }

    #[test]
    fn newly_revealed_items_do_not_animate() {
        let snap = items(&[0.0, 100.0]);
        let afters = snap.in_list(DroppableId(1));

        // Previous state: item 2 was invisible.
        let mut previous = DisplacementGroups::empty();
        previous.all.push(DraggableId(1));
        previous.all.push(DraggableId(2));
        previous.visible.insert(
            DraggableId(1),
            Displacement {
                id: DraggableId(1),
                should_animate: true,
            },
        );
        previous.invisible.insert(DraggableId(2));

        let dest = list(None);
        let groups =
            compute_displacement(&afters, &dest, by(100.0), Some(&previous), &viewport(), None);

        assert_eq!(groups.should_animate(DraggableId(1)), Some(true));
        // Invisible -> visible must snap.
        assert_eq!(groups.should_animate(DraggableId(2)), Some(false));
    }

    #[test]
    fn fresh_items_animate_and_force_overrides() {
        let snap = items(&[0.0]);
        let afters = snap.in_list(DroppableId(1));
        let dest = list(None);

        let fresh = compute_displacement(&afters, &dest, by(100.0), None, &viewport(), None);
        assert_eq!(fresh.should_animate(DraggableId(1)), Some(true));

        let forced =
            compute_displacement(&afters, &dest, by(100.0), None, &viewport(), Some(false));
        assert_eq!(forced.should_animate(DraggableId(1)), Some(false));
    }

    #[test]
    fn previous_flag_is_preserved_for_still_visible_items() {
        let snap = items(&[0.0]);
        let afters = snap.in_list(DroppableId(1));
        let dest = list(None);

        let mut previous = DisplacementGroups::empty();
        previous.all.push(DraggableId(1));
        previous.visible.insert(
            DraggableId(1),
            Displacement {
                id: DraggableId(1),
                should_animate: false,
            },
        );

        let groups =
            compute_displacement(&afters, &dest, by(100.0), Some(&previous), &viewport(), None);
        assert_eq!(groups.should_animate(DraggableId(1)), Some(false));
    }

    #[test]
    fn visual_offset_combines_both_flags() {
        let by = by(100.0);
        assert_eq!(visual_offset(true, true, by), Vec2::ZERO);
        assert_eq!(visual_offset(false, false, by), Vec2::ZERO);
        assert_eq!(visual_offset(true, false, by), Vec2::new(0.0, 100.0));
        assert_eq!(visual_offset(false, true, by), Vec2::new(0.0, -100.0));
    }
}
