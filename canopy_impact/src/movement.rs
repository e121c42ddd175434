// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard stepping: moving the dragged item one slot at a time along the
//! list axis, or sideways into an adjacent list.
//!
//! Unlike pointer dragging, keyboard movement is discrete: each step produces
//! a new logical slot first and derives the visual center from it. When the
//! derived center is not fully visible the result carries a scroll request
//! instead of moving the center, so the host can scroll and recompute rather
//! than snap the item to an off-screen position.

use canopy_geometry::{Axis, Viewport};
use kurbo::{Point, Vec2};

use crate::dimensions::{DimensionSnapshot, DraggableDimension, DroppableDimension};
use crate::displacement::{DisplacedBy, compute_displacement, displaced_by, visual_offset};
use crate::ids::DraggableId;
use crate::impact::{DragImpact, ImpactTarget};
use crate::visibility::is_totally_visible;

/// Where one keyboard step lands, before any geometry is derived.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextSlot {
    /// Step to a reorder slot.
    Reorder {
        /// The insertion index, in the list with the dragged item removed.
        index: usize,
    },
    /// Step onto an item as a combine target.
    Combine {
        /// The item to combine with.
        with: DraggableId,
    },
    /// The step would leave the container; nothing moves.
    NoMove,
}

/// The decision table for one keyboard step along the list axis.
///
/// `current` is the slot the previous impact occupies in this container and
/// `others` is the container's items with the dragged item removed, in index
/// order. When combining is enabled the step sequence interleaves slots and
/// items: `Reorder(i)` steps forward onto item `i` as a combine target, and
/// stepping forward off a combine target lands at the slot *after* it. The
/// asymmetry is deliberate: leaving a combine target never toggles any item's
/// displacement, which keeps the target visually adjacent to the dragged item
/// in both directions.
#[must_use]
pub fn next_slot(
    current: ImpactTarget,
    is_moving_forward: bool,
    is_combine_enabled: bool,
    others: &[&DraggableDimension],
) -> NextSlot {
    match current {
        ImpactTarget::Reorder { index, .. } => {
            if is_moving_forward {
                if index >= others.len() {
                    NextSlot::NoMove
                } else if is_combine_enabled {
                    NextSlot::Combine {
                        with: others[index].id,
                    }
                } else {
                    NextSlot::Reorder { index: index + 1 }
                }
            } else if index == 0 {
                NextSlot::NoMove
            } else if is_combine_enabled {
                NextSlot::Combine {
                    with: others[index - 1].id,
                }
            } else {
                NextSlot::Reorder { index: index - 1 }
            }
        }
        ImpactTarget::Combine { with, .. } => {
            let Some(position) = others.iter().position(|d| d.id == with) else {
                return NextSlot::NoMove;
            };
            if is_moving_forward {
                NextSlot::Reorder {
                    index: position + 1,
                }
            } else {
                NextSlot::Reorder { index: position }
            }
        }
    }
}

/// Inputs to [`move_to_next_place`].
#[derive(Debug)]
pub struct MoveArgs<'a> {
    /// `true` to step toward the list end, `false` toward the start.
    pub is_moving_forward: bool,
    /// The item being dragged.
    pub dragged: &'a DraggableDimension,
    /// The container being stepped within.
    pub destination: &'a DroppableDimension,
    /// All captured geometry.
    pub snapshot: &'a DimensionSnapshot,
    /// The window viewport.
    pub viewport: &'a Viewport,
    /// The impact from the previous step or pointer move.
    pub previous_impact: &'a DragImpact,
    /// The dragged item's current visual center.
    pub previous_center: Point,
}

/// The outcome of a keyboard step.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveResult {
    /// The dragged item's new visual center. Equal to the previous center when
    /// `scroll_jump` is set.
    pub next_center: Point,
    /// The new impact.
    pub impact: DragImpact,
    /// Set when the target slot is off screen: the host should scroll by this
    /// vector and recompute instead of moving the item.
    pub scroll_jump: Option<Vec2>,
}

/// Step the dragged item one slot forward or backward within `destination`.
///
/// Returns `None` when the step would leave the container (the boundary
/// clamp). Displacement changes from keyboard steps always animate.
#[must_use]
pub fn move_to_next_place(args: &MoveArgs<'_>) -> Option<MoveResult> {
    let destination = args.destination;
    let others = args
        .snapshot
        .in_list_without(destination.id, args.dragged.id);
    let in_home = destination.id == args.dragged.droppable_id;

    let current = match args.previous_impact.at {
        Some(at) if at.droppable_id() == destination.id => at,
        _ => ImpactTarget::Reorder {
            droppable_id: destination.id,
            index: if in_home { args.dragged.index } else { 0 },
        },
    };

    let slot = next_slot(
        current,
        args.is_moving_forward,
        destination.is_combine_enabled,
        &others,
    );

    let by = displaced_by(destination.axis, args.dragged.displace_by);
    let (next_center, impact) = match slot {
        NextSlot::NoMove => return None,
        NextSlot::Combine { with } => {
            let target = others.iter().find(|d| d.id == with)?;
            // Combining moves the dragged item onto the target without
            // touching the current displacement. The previous displaced set
            // only describes this container when the previous impact targeted
            // it; otherwise started-after items still sit in place.
            let tracked = args.previous_impact.at.as_ref().map(ImpactTarget::droppable_id)
                == Some(destination.id);
            let did_start_after = in_home && target.index > args.dragged.index;
            let displaced = if tracked {
                args.previous_impact.displaced.contains(with)
            } else {
                did_start_after
            };
            let shift = visual_offset(displaced, did_start_after, by);
            let center = (target.page.border_box + shift).center();
            let impact = DragImpact {
                displaced: args.previous_impact.displaced.clone(),
                displaced_by: by,
                forward: args.previous_impact.forward,
                at: Some(ImpactTarget::Combine {
                    droppable_id: destination.id,
                    with,
                }),
            };
            (center, impact)
        }
        NextSlot::Reorder { index } => {
            let displaced = compute_displacement(
                &others[index..],
                destination,
                by,
                Some(&args.previous_impact.displaced),
                args.viewport,
                Some(true),
            );
            let forward = if in_home {
                index < args.dragged.index
            } else {
                true
            };
            let center = slot_center(
                destination.axis,
                args.dragged,
                destination,
                &others,
                index,
                in_home.then_some(args.dragged.index),
                by,
            );
            let impact = DragImpact {
                displaced,
                displaced_by: by,
                forward,
                at: Some(ImpactTarget::Reorder {
                    droppable_id: destination.id,
                    index,
                }),
            };
            (center, impact)
        }
    };

    Some(resolve_visibility(
        next_center,
        impact,
        args.dragged,
        destination,
        args.viewport,
        args.previous_center,
    ))
}

/// Inputs to [`move_cross_axis`].
#[derive(Debug)]
pub struct CrossMoveArgs<'a> {
    /// `true` to step toward the cross-axis end (right of a vertical list,
    /// below a horizontal one), `false` toward the start.
    pub is_moving_forward: bool,
    /// The item being dragged.
    pub dragged: &'a DraggableDimension,
    /// The container being stepped out of.
    pub from: &'a DroppableDimension,
    /// All captured geometry.
    pub snapshot: &'a DimensionSnapshot,
    /// The window viewport.
    pub viewport: &'a Viewport,
    /// The impact from the previous step or pointer move.
    pub previous_impact: &'a DragImpact,
    /// The dragged item's current visual center.
    pub previous_center: Point,
}

/// Step the dragged item sideways into the nearest eligible container in the
/// chosen cross-axis direction.
///
/// The main-axis coordinate is preserved (clamped into the target's bounds)
/// and the insertion index is derived from it with the same center-line rule
/// pointer dragging uses. Returns `None` when no enabled container of the
/// same kind lies in that direction.
#[must_use]
pub fn move_cross_axis(args: &CrossMoveArgs<'_>) -> Option<MoveResult> {
    let axis = args.from.axis;
    let cross = axis.cross_axis();
    let from_cross = cross.center(args.from.page.border_box);

    // Nearest candidate strictly in the requested direction; ties resolve to
    // the smallest id because candidates are walked in id order.
    let mut best: Option<(&DroppableDimension, f64)> = None;
    for candidate in args.snapshot.droppables_sorted() {
        if candidate.id == args.from.id
            || !candidate.is_enabled
            || candidate.kind != args.dragged.kind
            || candidate.axis != axis
        {
            continue;
        }
        let c = cross.center(candidate.page.border_box);
        let ahead = if args.is_moving_forward {
            c > from_cross
        } else {
            c < from_cross
        };
        if !ahead {
            continue;
        }
        let distance = (c - from_cross).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    let (destination, _) = best?;

    let others = args
        .snapshot
        .in_list_without(destination.id, args.dragged.id);
    let in_home = destination.id == args.dragged.droppable_id;

    let bounds = destination.page.border_box;
    let main = axis
        .main_of(args.previous_center)
        .max(axis.start(bounds))
        .min(axis.end(bounds));
    let index = others
        .iter()
        .position(|child| main < axis.center(child.page.border_box))
        .unwrap_or(others.len());

    let by = displaced_by(axis, args.dragged.displace_by);
    let displaced = compute_displacement(
        &others[index..],
        destination,
        by,
        Some(&args.previous_impact.displaced),
        args.viewport,
        Some(true),
    );
    let forward = if in_home {
        index < args.dragged.index
    } else {
        true
    };

    let next_center = slot_center(
        axis,
        args.dragged,
        destination,
        &others,
        index,
        in_home.then_some(args.dragged.index),
        by,
    );
    let impact = DragImpact {
        displaced,
        displaced_by: by,
        forward,
        at: Some(ImpactTarget::Reorder {
            droppable_id: destination.id,
            index,
        }),
    };

    Some(resolve_visibility(
        next_center,
        impact,
        args.dragged,
        destination,
        args.viewport,
        args.previous_center,
    ))
}

/// The visual center the dragged item takes when occupying slot `index`.
///
/// Neighbors are placed at their post-move visual position: the item at
/// `index` is displaced by the move while the item before the slot is not,
/// so the dragged item always ends up flush against a neighbor as the user
/// will see it. An empty container places the item at the container's start.
fn slot_center(
    axis: Axis,
    dragged: &DraggableDimension,
    destination: &DroppableDimension,
    others: &[&DraggableDimension],
    index: usize,
    home_index: Option<usize>,
    by: DisplacedBy,
) -> Point {
    let half = axis.size_of(dragged.page.margin_box.size()) / 2.0;

    if others.is_empty() {
        let bounds = destination.page.border_box;
        let main = axis.start(bounds) + half;
        return axis.point(main, axis.cross_of(bounds.center()));
    }

    let before = index < others.len();
    let (neighbor, displaced) = if before {
        (others[index], true)
    } else {
        (others[index - 1], false)
    };
    let did_start_after = home_index.is_some_and(|home| neighbor.index > home);
    let visual = neighbor.page.margin_box + visual_offset(displaced, did_start_after, by);

    let main = if before {
        axis.start(visual) - half
    } else {
        axis.end(visual) + half
    };
    axis.point(main, axis.cross_of(visual.center()))
}

/// Finalize a step: keep the new center when the dragged item would be fully
/// visible there, otherwise hold position and ask the host to scroll.
fn resolve_visibility(
    next_center: Point,
    impact: DragImpact,
    dragged: &DraggableDimension,
    destination: &DroppableDimension,
    viewport: &Viewport,
    previous_center: Point,
) -> MoveResult {
    let at_next = dragged.page.margin_box + (next_center - dragged.page.margin_box.center());
    if is_totally_visible(at_next, destination, viewport) {
        MoveResult {
            next_center,
            impact,
            scroll_jump: None,
        }
    } else {
        MoveResult {
            next_center: previous_center,
            impact,
            scroll_jump: Some(next_center - previous_center),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::dimensions::ScrollFrame;
    use crate::drag_impact::{ImpactArgs, get_drag_impact};
    use crate::ids::{DroppableId, Kind};
    use crate::impact::UserDirection;
    use canopy_geometry::{BoxModel, Scroll};
    use kurbo::Rect;

    fn viewport() -> Viewport {
        Viewport::new(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Scroll::at(Vec2::ZERO, Vec2::ZERO),
        )
    }

    /// Three 100px items in a vertical list at x 0..100.
    fn snapshot() -> DimensionSnapshot {
        let mut snap = DimensionSnapshot::new();
        snap.insert_droppable(DroppableDimension::new(
            DroppableId(1),
            Kind(0),
            canopy_geometry::Axis::Vertical,
            BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 300.0)),
        ));
        for i in 0..3_u64 {
            let top = i as f64 * 100.0;
            snap.insert_draggable(DraggableDimension::new(
                DraggableId(i),
                DroppableId(1),
                i as usize,
                Kind(0),
                BoxModel::from_border_box(Rect::new(0.0, top, 100.0, top + 100.0)),
            ));
        }
        snap
    }

    fn lift(snap: &DimensionSnapshot) -> DragImpact {
        let dragged = snap.draggable(DraggableId(0)).unwrap().clone();
        get_drag_impact(&ImpactArgs {
            page_center: Point::new(50.0, 50.0),
            dragged: &dragged,
            snapshot: snap,
            previous: &DragImpact::no_impact(),
            viewport: &viewport(),
            direction: UserDirection::default(),
        })
    }

    fn step(
        snap: &DimensionSnapshot,
        forward: bool,
        previous: &DragImpact,
        previous_center: Point,
    ) -> Option<MoveResult> {
        let dragged = snap.draggable(DraggableId(0)).unwrap().clone();
        let destination = snap.droppable(DroppableId(1)).unwrap().clone();
        move_to_next_place(&MoveArgs {
            is_moving_forward: forward,
            dragged: &dragged,
            destination: &destination,
            snapshot: snap,
            viewport: &viewport(),
            previous_impact: previous,
            previous_center,
        })
    }

    #[test]
    fn decision_table_without_combine() {
        let snap = snapshot();
        let others = snap.in_list_without(DroppableId(1), DraggableId(0));
        let at = |index| ImpactTarget::Reorder {
            droppable_id: DroppableId(1),
            index,
        };

        assert_eq!(next_slot(at(0), true, false, &others), NextSlot::Reorder { index: 1 });
        assert_eq!(next_slot(at(1), false, false, &others), NextSlot::Reorder { index: 0 });
        // Boundary clamps.
        assert_eq!(next_slot(at(0), false, false, &others), NextSlot::NoMove);
        assert_eq!(next_slot(at(2), true, false, &others), NextSlot::NoMove);
    }

    #[test]
    fn decision_table_interleaves_combine_targets() {
        let snap = snapshot();
        let others = snap.in_list_without(DroppableId(1), DraggableId(0));
        let slot = |index| ImpactTarget::Reorder {
            droppable_id: DroppableId(1),
            index,
        };
        let on = |with| ImpactTarget::Combine {
            droppable_id: DroppableId(1),
            with: DraggableId(with),
        };

        // Forward: slot 0 -> onto item 1 -> slot 1 -> onto item 2 -> slot 2.
        assert_eq!(next_slot(slot(0), true, true, &others), NextSlot::Combine { with: DraggableId(1) });
        assert_eq!(next_slot(on(1), true, true, &others), NextSlot::Reorder { index: 1 });
        assert_eq!(next_slot(slot(1), true, true, &others), NextSlot::Combine { with: DraggableId(2) });
        assert_eq!(next_slot(on(2), true, true, &others), NextSlot::Reorder { index: 2 });
        assert_eq!(next_slot(slot(2), true, true, &others), NextSlot::NoMove);

        // Backward retraces the same sequence.
        assert_eq!(next_slot(slot(2), false, true, &others), NextSlot::Combine { with: DraggableId(2) });
        assert_eq!(next_slot(on(2), false, true, &others), NextSlot::Reorder { index: 1 });
        assert_eq!(next_slot(slot(1), false, true, &others), NextSlot::Combine { with: DraggableId(1) });
        assert_eq!(next_slot(on(1), false, true, &others), NextSlot::Reorder { index: 0 });
        assert_eq!(next_slot(slot(0), false, true, &others), NextSlot::NoMove);

        // A combine target that left the list cannot be stepped off of.
        assert_eq!(next_slot(on(9), true, true, &others), NextSlot::NoMove);
    }

    #[test]
    fn forward_step_lands_flush_after_the_collapsed_neighbor() {
        let snap = snapshot();
        let previous = lift(&snap);

        let result = step(&snap, true, &previous, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(result.impact.destination(), Some((DroppableId(1), 1)));
        let ids: Vec<u64> = result.impact.displaced.all.iter().map(|id| id.0).collect();
        assert_eq!(ids, [2]);
        // Item 1 collapses into the vacated slot (0..100); the dragged item
        // takes 100..200, so its center is 150.
        assert_eq!(result.next_center, Point::new(50.0, 150.0));
        assert_eq!(result.scroll_jump, None);
        // Keyboard displacement always animates.
        assert_eq!(result.impact.displaced.should_animate(DraggableId(2)), Some(true));
    }

    #[test]
    fn backward_step_at_the_start_is_clamped() {
        let snap = snapshot();
        let previous = lift(&snap);
        assert_eq!(step(&snap, false, &previous, Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn forward_step_at_the_end_is_clamped() {
        let snap = snapshot();
        let mut previous = lift(&snap);
        let mut center = Point::new(50.0, 50.0);
        for _ in 0..2 {
            let result = step(&snap, true, &previous, center).unwrap();
            previous = result.impact;
            center = result.next_center;
        }
        assert_eq!(previous.destination(), Some((DroppableId(1), 2)));
        assert_eq!(center, Point::new(50.0, 250.0));
        assert_eq!(step(&snap, true, &previous, center), None);
    }

    #[test]
    fn stepping_onto_a_combine_target_keeps_displacement() {
        let mut snap = snapshot();
        let mut d = snap.droppable(DroppableId(1)).unwrap().clone();
        d.is_combine_enabled = true;
        snap.insert_droppable(d);
        let previous = lift(&snap);

        let onto = step(&snap, true, &previous, Point::new(50.0, 50.0)).unwrap();
        assert_eq!(onto.impact.combine_with(), Some(DraggableId(1)));
        assert_eq!(onto.impact.displaced.all, previous.displaced.all);
        // Item 1 is displaced but started after home, so it sits at 100..200.
        assert_eq!(onto.next_center, Point::new(50.0, 150.0));

        // Stepping off forward skips straight to the slot after the target:
        // no displacement toggles on the way through.
        let past = step(&snap, true, &onto.impact, onto.next_center).unwrap();
        assert_eq!(past.impact.destination(), Some((DroppableId(1), 1)));
        let ids: Vec<u64> = past.impact.displaced.all.iter().map(|id| id.0).collect();
        assert_eq!(ids, [2]);

        // Stepping off backward returns to the slot before the target.
        let back = step(&snap, false, &onto.impact, onto.next_center).unwrap();
        assert_eq!(back.impact.destination(), Some((DroppableId(1), 0)));
    }

    #[test]
    fn combine_step_from_a_fresh_impact_lands_on_the_unmoved_neighbor() {
        let mut snap = snapshot();
        let mut d = snap.droppable(DroppableId(1)).unwrap().clone();
        d.is_combine_enabled = true;
        snap.insert_droppable(d);

        // No previous impact in this container: item 1 has not collapsed, so
        // the combine step centers on its home box.
        let result =
            step(&snap, true, &DragImpact::no_impact(), Point::new(50.0, 50.0)).unwrap();
        assert_eq!(result.impact.combine_with(), Some(DraggableId(1)));
        assert_eq!(result.next_center, Point::new(50.0, 150.0));
    }

    #[test]
    fn off_screen_target_requests_a_scroll_jump() {
        let mut snap = snapshot();
        let mut d = snap.droppable(DroppableId(1)).unwrap().clone();
        d.frame = Some(ScrollFrame {
            frame: Rect::new(0.0, 0.0, 100.0, 100.0),
            scroll: Scroll::at(Vec2::ZERO, Vec2::new(0.0, 200.0)),
        });
        snap.insert_droppable(d);
        let previous = lift(&snap);

        let result = step(&snap, true, &previous, Point::new(50.0, 50.0)).unwrap();
        // The logical slot still advances.
        assert_eq!(result.impact.destination(), Some((DroppableId(1), 1)));
        // The visual center holds and the host is asked to scroll the gap.
        assert_eq!(result.next_center, Point::new(50.0, 50.0));
        assert_eq!(result.scroll_jump, Some(Vec2::new(0.0, 100.0)));
    }

    #[test]
    fn cross_move_enters_the_nearest_list_in_direction() {
        let mut snap = snapshot();
        snap.insert_droppable(DroppableDimension::new(
            DroppableId(2),
            Kind(0),
            canopy_geometry::Axis::Vertical,
            BoxModel::from_border_box(Rect::new(200.0, 0.0, 300.0, 300.0)),
        ));
        for i in 0..2_u64 {
            let top = i as f64 * 100.0;
            snap.insert_draggable(DraggableDimension::new(
                DraggableId(10 + i),
                DroppableId(2),
                i as usize,
                Kind(0),
                BoxModel::from_border_box(Rect::new(200.0, top, 300.0, top + 100.0)),
            ));
        }
        let previous = lift(&snap);
        let dragged = snap.draggable(DraggableId(0)).unwrap().clone();
        let from = snap.droppable(DroppableId(1)).unwrap().clone();

        let result = move_cross_axis(&CrossMoveArgs {
            is_moving_forward: true,
            dragged: &dragged,
            from: &from,
            snapshot: &snap,
            viewport: &viewport(),
            previous_impact: &previous,
            previous_center: Point::new(50.0, 150.0),
        })
        .unwrap();

        // Main coordinate 150 is not before item 11's center (150), so the
        // item lands after it, flush against its end.
        assert_eq!(result.impact.destination(), Some((DroppableId(2), 2)));
        assert!(result.impact.forward);
        assert!(result.impact.displaced.all.is_empty());
        assert_eq!(result.next_center, Point::new(250.0, 250.0));
        assert_eq!(result.scroll_jump, None);

        // No list to the left.
        let none = move_cross_axis(&CrossMoveArgs {
            is_moving_forward: false,
            dragged: &dragged,
            from: &from,
            snapshot: &snap,
            viewport: &viewport(),
            previous_impact: &previous,
            previous_center: Point::new(50.0, 150.0),
        });
        assert!(none.is_none());
    }

    #[test]
    fn cross_move_into_an_empty_list_starts_at_the_top() {
        let mut snap = snapshot();
        snap.insert_droppable(DroppableDimension::new(
            DroppableId(2),
            Kind(0),
            canopy_geometry::Axis::Vertical,
            BoxModel::from_border_box(Rect::new(200.0, 0.0, 300.0, 300.0)),
        ));
        let previous = lift(&snap);
        let dragged = snap.draggable(DraggableId(0)).unwrap().clone();
        let from = snap.droppable(DroppableId(1)).unwrap().clone();

        let result = move_cross_axis(&CrossMoveArgs {
            is_moving_forward: true,
            dragged: &dragged,
            from: &from,
            snapshot: &snap,
            viewport: &viewport(),
            previous_impact: &previous,
            previous_center: Point::new(50.0, 150.0),
        })
        .unwrap();

        assert_eq!(result.impact.destination(), Some((DroppableId(2), 0)));
        assert_eq!(result.next_center, Point::new(250.0, 50.0));
    }
}
