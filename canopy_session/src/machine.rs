// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag session: the single context object a host drives.

use alloc::vec::Vec;

use canopy_autoscroll::{AutoScrollConfig, FluidScrollArgs};
use canopy_geometry::Viewport;
use canopy_impact::{
    CrossMoveArgs, DimensionSnapshot, DragImpact, DraggableId, DroppableId, ImpactArgs, MoveArgs,
    UserDirection, compute_displacement, displaced_by, get_drag_impact, move_cross_axis,
    move_to_next_place,
};
use kurbo::{Point, Rect, Vec2};

use crate::error::SessionError;
use crate::phase::{DropReason, Phase, can_start_drag};
use crate::queue::FrameQueue;
use crate::state::{DragState, SessionEvent};

/// Which axis a keyboard step moves along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovementAxis {
    /// Along the destination list's flow direction.
    Main,
    /// Sideways, into an adjacent list.
    Cross,
}

/// A lift waiting for its geometry collection frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingLift {
    /// The item to lift.
    pub id: DraggableId,
    /// Pointer position at lift time, in page space.
    pub at: Point,
    /// When the lift happened, in the host's millisecond clock.
    pub lifted_at_ms: u64,
}

/// One drag session: phase, geometry, live drag state, and the event buffer.
///
/// The session is the explicit replacement for global registries: a host owns
/// one and routes every input through it. All computation is synchronous and
/// pure; the session never calls back into the host, never scrolls, and never
/// reads a clock. Timestamps come in as `u64` milliseconds, scroll vectors go
/// out as values, and lifecycle notifications accumulate in a buffer drained
/// by [`DragSession::take_events`].
#[derive(Debug, Default)]
pub struct DragSession {
    phase: Phase,
    snapshot: DimensionSnapshot,
    viewport: Option<Viewport>,
    state: Option<DragState>,
    collection: FrameQueue<PendingLift>,
    events: Vec<SessionEvent>,
    autoscroll: AutoScrollConfig,
}

impl DragSession {
    /// A fresh idle session.
    #[must_use]
    pub fn new(autoscroll: AutoScrollConfig) -> Self {
        Self {
            autoscroll,
            ..Self::default()
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The live drag state, present from publish until the drag fully ends.
    #[must_use]
    pub fn state(&self) -> Option<&DragState> {
        self.state.as_ref()
    }

    /// The published geometry snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &DimensionSnapshot {
        &self.snapshot
    }

    /// The published viewport.
    #[must_use]
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// The lift waiting for its collection frame, if any.
    #[must_use]
    pub fn pending_lift(&self) -> Option<&PendingLift> {
        self.collection.peek()
    }

    /// Whether a new drag of `target` may begin right now.
    #[must_use]
    pub fn can_start_drag(&self, target: DraggableId) -> bool {
        can_start_drag(self.phase, target)
    }

    /// Drain the buffered lifecycle events.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        core::mem::take(&mut self.events)
    }

    /// Take a keyboard-requested scroll jump, if one is waiting.
    pub fn take_scroll_jump(&mut self) -> Option<Vec2> {
        self.state.as_mut().and_then(|s| s.scroll_jump_request.take())
    }

    /// Begin a drag of `id` with the pointer at `at`.
    ///
    /// Returns `Ok(false)` when the lift is ignored: a lift while another
    /// drag is collecting or live is a no-op (the first lift wins), and a
    /// cancelled item cannot be re-lifted until it finishes animating home.
    /// An accepted lift schedules a geometry collection batch and moves the
    /// session to `Collecting`; the host resolves it with
    /// [`DragSession::publish`].
    pub fn try_lift(&mut self, id: DraggableId, at: Point, now_ms: u64) -> Result<bool, SessionError> {
        if !can_start_drag(self.phase, id) {
            ctrace!("lift of {} ignored while {}", id.0, self.phase.name());
            return Ok(false);
        }
        if let Phase::DropAnimating { dropping, reason } = self.phase {
            // The interrupted animation never reaches its finish callback, so
            // the old drag ends here.
            self.state = None;
            self.events.push(SessionEvent::DragEnded {
                id: dropping,
                reason,
            });
        }
        self.collection.clear();
        self.collection.schedule(PendingLift {
            id,
            at,
            lifted_at_ms: now_ms,
        });
        self.set_phase(Phase::Collecting { dragging: id });
        Ok(true)
    }

    /// Resolve a pending lift with freshly collected geometry.
    ///
    /// Validates the snapshot, builds the initial home impact (everything
    /// after the home slot displaced, without animation), and moves to
    /// `Dragging`. A drop requested while collecting resolves here too,
    /// going straight to `DropAnimating`.
    pub fn publish(
        &mut self,
        snapshot: DimensionSnapshot,
        viewport: Viewport,
        now_ms: u64,
    ) -> Result<(), SessionError> {
        let (dragging, pending_drop) = match self.phase {
            Phase::Collecting { dragging } => (dragging, None),
            Phase::DropPending { dropping, reason } => (dropping, Some(reason)),
            _ => return Err(self.wrong_phase("publish dimensions")),
        };
        let lift = self.collection.flush();

        if let Err(droppable) = snapshot.check_list_integrity() {
            cwarn!("aborting lift: droppable {} has corrupt indices", droppable.0);
            self.state = None;
            self.set_phase(Phase::Idle);
            return Err(SessionError::CorruptSnapshot { droppable });
        }
        let dragged = snapshot
            .draggable(dragging)
            .ok_or(SessionError::UnknownDraggable { id: dragging })?
            .clone();
        let destination = snapshot
            .droppable(dragged.droppable_id)
            .ok_or(SessionError::UnknownDroppable {
                id: dragged.droppable_id,
            })?
            .clone();

        let by = displaced_by(destination.axis, dragged.displace_by);
        let others = snapshot.in_list_without(destination.id, dragged.id);
        // At lift, everything after the home slot is conceptually displaced
        // but visually unmoved, so the initial displacement must not animate.
        let displaced = compute_displacement(
            &others[dragged.index..],
            &destination,
            by,
            None,
            &viewport,
            Some(false),
        );
        let impact = DragImpact {
            displaced,
            displaced_by: by,
            forward: false,
            at: Some(canopy_impact::ImpactTarget::Reorder {
                droppable_id: destination.id,
                index: dragged.index,
            }),
        };

        let center = dragged.page.border_box.center();
        let subject_size = dragged.page.margin_box.size();
        let probe = |container: Rect| {
            canopy_autoscroll::fluid_scroll(&FluidScrollArgs {
                container,
                subject_size,
                center,
                config: &self.autoscroll,
                elapsed_ms: None,
            })
            .is_some()
        };
        // Time dampening only matters when the drag starts with the item
        // already inside a scroll-trigger band.
        let in_band =
            probe(viewport.frame) || destination.frame.as_ref().is_some_and(|f| probe(f.frame));

        self.state = Some(DragState {
            dragging,
            home: (destination.id, dragged.index),
            start_center: center,
            current_center: center,
            direction: UserDirection::default(),
            impact,
            started_at_ms: lift.map_or(now_ms, |l| l.lifted_at_ms),
            should_use_time_dampening: in_band,
            scroll_jump_request: None,
            can_cancel: true,
        });
        self.snapshot = snapshot;
        self.viewport = Some(viewport);
        self.events.push(SessionEvent::DragStarted { id: dragging });
        match pending_drop {
            None => self.set_phase(Phase::Dragging { dragging }),
            Some(reason) => self.set_phase(Phase::DropAnimating {
                dropping: dragging,
                reason,
            }),
        }
        Ok(())
    }

    /// Move the dragged item's center to `page_center` and recompute the
    /// impact. Legal only while `Dragging`.
    pub fn move_to(&mut self, page_center: Point) -> Result<(), SessionError> {
        let Phase::Dragging { .. } = self.phase else {
            return Err(self.wrong_phase("move the drag"));
        };
        let (impact, direction) = {
            let state = self
                .state
                .as_ref()
                .ok_or_else(|| self.wrong_phase("move the drag"))?;
            let viewport = self
                .viewport
                .as_ref()
                .ok_or_else(|| self.wrong_phase("move the drag"))?;
            let dragged = self
                .snapshot
                .draggable(state.dragging)
                .ok_or(SessionError::UnknownDraggable { id: state.dragging })?;
            let direction = state.direction.updated_by(page_center - state.current_center);
            let impact = get_drag_impact(&ImpactArgs {
                page_center,
                dragged,
                snapshot: &self.snapshot,
                previous: &state.impact,
                viewport,
                direction,
            });
            (impact, direction)
        };
        if let Some(state) = self.state.as_mut() {
            state.current_center = page_center;
            state.direction = direction;
            // The impact is replaced wholesale; consumers never observe a
            // partially updated one.
            state.impact = impact;
        }
        Ok(())
    }

    /// Step the dragged item one slot in a direction.
    ///
    /// Returns `Ok(false)` when the step is clamped at a boundary or there is
    /// no adjacent list in the requested direction. When the target slot is
    /// off screen the step records a scroll jump request instead of moving
    /// the visual center; the host retrieves it with
    /// [`DragSession::take_scroll_jump`].
    pub fn move_in_direction(
        &mut self,
        is_moving_forward: bool,
        axis: MovementAxis,
    ) -> Result<bool, SessionError> {
        let Phase::Dragging { .. } = self.phase else {
            return Err(self.wrong_phase("step the drag"));
        };
        let (result, step_axis) = {
            let state = self
                .state
                .as_ref()
                .ok_or_else(|| self.wrong_phase("step the drag"))?;
            let viewport = self
                .viewport
                .as_ref()
                .ok_or_else(|| self.wrong_phase("step the drag"))?;
            let dragged = self
                .snapshot
                .draggable(state.dragging)
                .ok_or(SessionError::UnknownDraggable { id: state.dragging })?;
            let at = state.impact.at.ok_or(SessionError::NoDestination)?;
            let droppable = self
                .snapshot
                .droppable(at.droppable_id())
                .ok_or(SessionError::UnknownDroppable {
                    id: at.droppable_id(),
                })?;
            let result = match axis {
                MovementAxis::Main => move_to_next_place(&MoveArgs {
                    is_moving_forward,
                    dragged,
                    destination: droppable,
                    snapshot: &self.snapshot,
                    viewport,
                    previous_impact: &state.impact,
                    previous_center: state.current_center,
                }),
                MovementAxis::Cross => move_cross_axis(&CrossMoveArgs {
                    is_moving_forward,
                    dragged,
                    from: droppable,
                    snapshot: &self.snapshot,
                    viewport,
                    previous_impact: &state.impact,
                    previous_center: state.current_center,
                }),
            };
            let step_axis = match axis {
                MovementAxis::Main => droppable.axis,
                MovementAxis::Cross => droppable.axis.cross_axis(),
            };
            (result, step_axis)
        };
        let Some(result) = result else {
            ctrace!("step clamped while {}", self.phase.name());
            return Ok(false);
        };
        if let Some(state) = self.state.as_mut() {
            let delta = step_axis.vec(if is_moving_forward { 1.0 } else { -1.0 });
            state.direction = state.direction.updated_by(delta);
            state.current_center = result.next_center;
            state.scroll_jump_request = result.scroll_jump;
            state.impact = result.impact;
        }
        Ok(true)
    }

    /// Record a window scroll. Recomputes the impact while `Dragging`; while
    /// `DropPending` the geometry is patched without recomputation.
    pub fn update_viewport_scroll(&mut self, current: Vec2) -> Result<(), SessionError> {
        match self.phase {
            Phase::Dragging { .. } => {
                if let Some(vp) = self.viewport {
                    self.viewport = Some(vp.scroll_to(current));
                }
                let center = self.state.as_ref().map(|s| s.current_center);
                match center {
                    Some(center) => self.move_to(center),
                    None => Ok(()),
                }
            }
            Phase::DropPending { .. } => {
                if let Some(vp) = self.viewport {
                    self.viewport = Some(vp.scroll_to(current));
                }
                Ok(())
            }
            _ => Err(self.wrong_phase("scroll the window")),
        }
    }

    /// Record an internal scroll of a droppable container. Same phase rules
    /// as [`DragSession::update_viewport_scroll`].
    pub fn update_droppable_scroll(
        &mut self,
        id: DroppableId,
        current: Vec2,
    ) -> Result<(), SessionError> {
        match self.phase {
            Phase::Dragging { .. } => {
                if !self.snapshot.update_droppable_scroll(id, current) {
                    return Err(SessionError::UnknownDroppable { id });
                }
                let center = self.state.as_ref().map(|s| s.current_center);
                match center {
                    Some(center) => self.move_to(center),
                    None => Ok(()),
                }
            }
            Phase::DropPending { .. } => {
                // Nothing is published yet. The snapshot handed to publish
                // carries the container's current scroll, so there is nothing
                // to patch here.
                Ok(())
            }
            _ => Err(self.wrong_phase("scroll a container")),
        }
    }

    /// End the drag.
    ///
    /// While `Dragging` the item starts its drop animation. While
    /// `Collecting`, a successful drop parks in `DropPending` until the
    /// collection publishes; a cancel abandons the lift outright.
    pub fn request_drop(&mut self, reason: DropReason) -> Result<(), SessionError> {
        match self.phase {
            Phase::Collecting { dragging } => {
                match reason {
                    DropReason::Cancel => {
                        self.collection.clear();
                        self.state = None;
                        self.set_phase(Phase::Idle);
                        self.events.push(SessionEvent::DragEnded { id: dragging, reason });
                    }
                    DropReason::Drop => {
                        self.set_phase(Phase::DropPending {
                            dropping: dragging,
                            reason,
                        });
                    }
                }
                Ok(())
            }
            Phase::Dragging { dragging } => {
                self.set_phase(Phase::DropAnimating {
                    dropping: dragging,
                    reason,
                });
                Ok(())
            }
            _ => Err(self.wrong_phase("request a drop")),
        }
    }

    /// The drop animation reached its resting place; the session returns to
    /// idle and the drag's end event is emitted.
    pub fn drop_animation_finished(&mut self) -> Result<(), SessionError> {
        let Phase::DropAnimating { dropping, reason } = self.phase else {
            return Err(self.wrong_phase("finish the drop animation"));
        };
        self.state = None;
        self.set_phase(Phase::Idle);
        self.events.push(SessionEvent::DragEnded {
            id: dropping,
            reason,
        });
        Ok(())
    }

    /// Cancel whatever is in flight. Returns whether anything was cancelled.
    ///
    /// A collecting or drop-pending session aborts its pending batch and goes
    /// straight to idle; a live drag animates home first. Respects
    /// [`DragState::can_cancel`].
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::DropAnimating { .. } => false,
            Phase::Collecting { dragging } => {
                self.collection.clear();
                self.state = None;
                self.set_phase(Phase::Idle);
                self.events.push(SessionEvent::DragEnded {
                    id: dragging,
                    reason: DropReason::Cancel,
                });
                true
            }
            Phase::DropPending { dropping, .. } => {
                self.collection.clear();
                self.state = None;
                self.set_phase(Phase::Idle);
                self.events.push(SessionEvent::DragEnded {
                    id: dropping,
                    reason: DropReason::Cancel,
                });
                true
            }
            Phase::Dragging { dragging } => {
                if !self.state.as_ref().is_some_and(|s| s.can_cancel) {
                    return false;
                }
                self.set_phase(Phase::DropAnimating {
                    dropping: dragging,
                    reason: DropReason::Cancel,
                });
                true
            }
        }
    }

    /// The fluid scroll vector for the window this tick, or `Ok(None)` when
    /// nothing should scroll. The session computes the vector; the host
    /// performs the scroll and reports it back through
    /// [`DragSession::update_viewport_scroll`].
    pub fn fluid_scroll(&self, now_ms: u64) -> Result<Option<Vec2>, SessionError> {
        let Phase::Dragging { .. } = self.phase else {
            return Err(self.wrong_phase("compute fluid scroll"));
        };
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| self.wrong_phase("compute fluid scroll"))?;
        let viewport = self
            .viewport
            .as_ref()
            .ok_or_else(|| self.wrong_phase("compute fluid scroll"))?;
        let dragged = self
            .snapshot
            .draggable(state.dragging)
            .ok_or(SessionError::UnknownDraggable { id: state.dragging })?;
        let elapsed_ms = state
            .should_use_time_dampening
            .then(|| now_ms.saturating_sub(state.started_at_ms));
        Ok(canopy_autoscroll::fluid_scroll(&FluidScrollArgs {
            container: viewport.frame,
            subject_size: dragged.page.margin_box.size(),
            center: state.current_center,
            config: &self.autoscroll,
            elapsed_ms,
        }))
    }

    fn wrong_phase(&self, operation: &'static str) -> SessionError {
        SessionError::WrongPhase {
            operation,
            phase: self.phase.name(),
        }
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        cdebug!("phase {} -> {}", from.name(), to.name());
        self.phase = to;
        self.events.push(SessionEvent::PhaseChanged { from, to });
    }
}
