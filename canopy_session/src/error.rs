// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller contract violations.
//!
//! These are the fail-fast cases: an operation invoked in a phase that does
//! not permit it, or a snapshot that breaks a structural invariant. Expected
//! "no result" conditions (no valid destination under the pointer, a step
//! past a list boundary, nothing to scroll) are plain `Option`/`bool` values,
//! never errors.

use core::fmt;

use canopy_impact::{DraggableId, DroppableId};

/// An error from a [`DragSession`](crate::DragSession) operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The operation is not legal in the current phase.
    WrongPhase {
        /// The operation that was attempted.
        operation: &'static str,
        /// The phase it was attempted in.
        phase: &'static str,
    },
    /// A published snapshot has a droppable whose item indices are not
    /// `0..n` with no gaps or duplicates.
    CorruptSnapshot {
        /// The first offending droppable.
        droppable: DroppableId,
    },
    /// The session refers to a draggable the snapshot does not contain.
    UnknownDraggable {
        /// The missing id.
        id: DraggableId,
    },
    /// The session refers to a droppable the snapshot does not contain, or a
    /// scroll update targeted a droppable that does not scroll.
    UnknownDroppable {
        /// The missing id.
        id: DroppableId,
    },
    /// A keyboard step was requested while the previous impact has no
    /// destination to step from.
    NoDestination,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongPhase { operation, phase } => {
                write!(f, "cannot {operation} while {phase}")
            }
            Self::CorruptSnapshot { droppable } => {
                write!(
                    f,
                    "droppable {} has non-contiguous item indices",
                    droppable.0
                )
            }
            Self::UnknownDraggable { id } => {
                write!(f, "draggable {} is not in the snapshot", id.0)
            }
            Self::UnknownDroppable { id } => {
                write!(f, "droppable {} is not in the snapshot or cannot scroll", id.0)
            }
            Self::NoDestination => {
                write!(f, "no destination to step from")
            }
        }
    }
}

impl core::error::Error for SessionError {}
