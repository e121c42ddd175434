// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The central pure function: pointer position in, [`DragImpact`] out.

use canopy_geometry::{Viewport, contains_point};
use kurbo::Point;

use crate::dimensions::{DimensionSnapshot, DraggableDimension, DroppableDimension};
use crate::displacement::{compute_displacement, displaced_by, visual_offset};
use crate::ids::{DraggableId, DroppableId, Kind};
use crate::impact::{Direction, DragImpact, ImpactTarget, UserDirection};

/// Fraction of an item's main-axis size trimmed from each end to form the
/// combine band: landing in the middle band combines, landing outside it
/// reorders.
pub const COMBINE_INSET_RATIO: f64 = 1.0 / 6.0;

/// Inputs to [`get_drag_impact`].
#[derive(Debug)]
pub struct ImpactArgs<'a> {
    /// Current page-space center of the dragged item.
    pub page_center: Point,
    /// The item being dragged.
    pub dragged: &'a DraggableDimension,
    /// All captured geometry.
    pub snapshot: &'a DimensionSnapshot,
    /// The impact from the previous input event.
    pub previous: &'a DragImpact,
    /// The window viewport.
    pub viewport: &'a Viewport,
    /// Most recent pointer direction per axis.
    pub direction: UserDirection,
}

/// Compute the next impact for a pointer-driven drag.
///
/// Deterministic: identical inputs produce identical output. Candidate
/// containers are walked in id order and list items in index order, so there
/// is no hidden iteration-order dependence.
pub fn get_drag_impact(args: &ImpactArgs<'_>) -> DragImpact {
    let Some(destination) = destination_over(
        args.page_center,
        args.dragged.kind,
        args.snapshot,
        args.previous.at.as_ref().map(ImpactTarget::droppable_id),
    ) else {
        return DragImpact::no_impact();
    };

    let axis = destination.axis;
    let displaced_by = displaced_by(axis, args.dragged.displace_by);
    let others = args
        .snapshot
        .in_list_without(destination.id, args.dragged.id);
    let in_home = destination.id == args.dragged.droppable_id;

    if destination.is_combine_enabled {
        if let Some(with) = combine_target(args, destination, &others, in_home) {
            // Combining leaves the current displacement alone: nothing should
            // shift while hovering over a merge target.
            return DragImpact {
                displaced: args.previous.displaced.clone(),
                displaced_by,
                forward: args.previous.forward,
                at: Some(ImpactTarget::Combine {
                    droppable_id: destination.id,
                    with,
                }),
            };
        }
    }

    let main = axis.main_of(args.page_center);
    let moving_forward = args.direction.on(axis) == Direction::Forward;

    // The target index is the position of the first item whose center line the
    // pointer has not crossed; everything from there on is displaced. A tie on
    // the center line counts as crossed only when moving forward.
    let index = others
        .iter()
        .position(|child| {
            let center = axis.center(child.page.border_box);
            if moving_forward {
                main < center
            } else {
                main <= center
            }
        })
        .unwrap_or(others.len());

    let forward = if in_home {
        index < args.dragged.index
    } else {
        true
    };

    let displaced = compute_displacement(
        &others[index..],
        destination,
        displaced_by,
        Some(&args.previous.displaced),
        args.viewport,
        None,
    );

    DragImpact {
        displaced,
        displaced_by,
        forward,
        at: Some(ImpactTarget::Reorder {
            droppable_id: destination.id,
            index,
        }),
    }
}

/// The droppable the pointer targets: enabled, matching kind, hit frame
/// containing the point. Overlapping candidates resolve to the smallest id.
/// Falls back to the previous destination while the pointer stays within its
/// cross-axis band (sticky behavior past a list's main-axis ends).
fn destination_over<'a>(
    point: Point,
    kind: Kind,
    snapshot: &'a DimensionSnapshot,
    previous: Option<DroppableId>,
) -> Option<&'a DroppableDimension> {
    for candidate in snapshot.droppables_sorted() {
        if !candidate.is_enabled || candidate.kind != kind {
            continue;
        }
        if let Some(hit) = candidate.hit_frame() {
            if contains_point(hit, point) {
                return Some(candidate);
            }
        }
    }

    let prev = snapshot.droppable(previous?)?;
    if !prev.is_enabled || prev.kind != kind {
        return None;
    }
    let hit = prev.hit_frame()?;
    let cross = prev.axis.cross_axis();
    let c = cross.main_of(point);
    (cross.start(hit) <= c && c <= cross.end(hit)).then_some(prev)
}

/// The combine target under the pointer, if any: the single item whose
/// main-axis middle band contains the pointer's projection. Items are tested
/// at their *visual* position under the previous impact, so the band tracks
/// what the user sees.
fn combine_target(
    args: &ImpactArgs<'_>,
    destination: &DroppableDimension,
    others: &[&DraggableDimension],
    in_home: bool,
) -> Option<DraggableId> {
    let axis = destination.axis;
    let main = axis.main_of(args.page_center);
    let displaced_by = displaced_by(axis, args.dragged.displace_by);

    // The previous displaced set only describes this container when the
    // previous impact targeted it. On the first event of a drag, or after
    // re-entering from outside, nothing has collapsed yet: started-after
    // items still sit in their home position.
    let tracked =
        args.previous.at.as_ref().map(ImpactTarget::droppable_id) == Some(destination.id);

    for child in others {
        let did_start_after = in_home && child.index > args.dragged.index;
        let displaced = if tracked {
            args.previous.displaced.contains(child.id)
        } else {
            did_start_after
        };
        let shift = visual_offset(displaced, did_start_after, displaced_by);
        let visual = child.page.border_box + shift;

        let inset = axis.size(visual) * COMBINE_INSET_RATIO;
        let start = axis.start(visual) + inset;
        let end = axis.end(visual) - inset;
        if start <= main && main <= end {
            return Some(child.id);
        }
    }
    None
}
