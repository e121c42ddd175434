// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag phase lifecycle and its guards.

use canopy_impact::DraggableId;

/// Why a drag ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// The user released the item where it was.
    Drop,
    /// The drag was cancelled; the item animates back home.
    Cancel,
}

/// Where a drag session is in its lifecycle.
///
/// Phases advance `Idle -> Collecting -> Dragging -> DropAnimating -> Idle`.
/// A drop requested before geometry collection has published parks in
/// `DropPending` until the collection lands. Cancellation jumps to `Idle`
/// directly from `Collecting` or `DropPending`, and through `DropAnimating`
/// from `Dragging` so the item can animate home.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A lift was accepted; geometry collection is pending.
    Collecting {
        /// The item being lifted.
        dragging: DraggableId,
    },
    /// A drag is live: impact recomputation is legal only here.
    Dragging {
        /// The item being dragged.
        dragging: DraggableId,
    },
    /// A drop was requested while geometry collection was still pending.
    DropPending {
        /// The item being dropped.
        dropping: DraggableId,
        /// Why the drag is ending.
        reason: DropReason,
    },
    /// The dropped item is animating to its resting place.
    DropAnimating {
        /// The item animating.
        dropping: DraggableId,
        /// Why the drag ended.
        reason: DropReason,
    },
}

impl Phase {
    /// A short name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Collecting { .. } => "collecting",
            Self::Dragging { .. } => "dragging",
            Self::DropPending { .. } => "drop-pending",
            Self::DropAnimating { .. } => "drop-animating",
        }
    }
}

/// Whether a new drag of `target` may begin in `phase`.
///
/// Only `Idle` is unconditionally open. During a drop animation a *different*
/// item may be lifted, and the just-dropped item itself may be re-lifted when
/// the drop was a successful one. A cancelled item must finish animating home
/// first; grabbing it mid-flight would lift it from a stale position.
#[must_use]
pub fn can_start_drag(phase: Phase, target: DraggableId) -> bool {
    match phase {
        Phase::Idle => true,
        Phase::DropAnimating { dropping, reason } => {
            target != dropping || reason == DropReason::Drop
        }
        Phase::Collecting { .. } | Phase::Dragging { .. } | Phase::DropPending { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: DraggableId = DraggableId(1);
    const B: DraggableId = DraggableId(2);

    #[test]
    fn idle_is_always_open() {
        assert!(can_start_drag(Phase::Idle, A));
        assert!(can_start_drag(Phase::Idle, B));
    }

    #[test]
    fn active_phases_are_always_closed() {
        for phase in [
            Phase::Collecting { dragging: A },
            Phase::Dragging { dragging: A },
            Phase::DropPending {
                dropping: A,
                reason: DropReason::Drop,
            },
        ] {
            assert!(!can_start_drag(phase, A), "{} must refuse", phase.name());
            assert!(!can_start_drag(phase, B), "{} must refuse", phase.name());
        }
    }

    #[test]
    fn drop_animation_blocks_only_the_cancelled_item() {
        let dropped = Phase::DropAnimating {
            dropping: A,
            reason: DropReason::Drop,
        };
        assert!(can_start_drag(dropped, A));
        assert!(can_start_drag(dropped, B));

        let cancelled = Phase::DropAnimating {
            dropping: A,
            reason: DropReason::Cancel,
        };
        assert!(!can_start_drag(cancelled, A));
        assert!(can_start_drag(cancelled, B));
    }
}
