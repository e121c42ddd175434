// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifier newtypes for draggables, droppables, and item kinds.

/// Stable identifier for a draggable item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DraggableId(pub u64);

/// Stable identifier for a droppable container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DroppableId(pub u64);

/// Type tag: only draggables and droppables of the same kind interact.
///
/// A small, copyable handle in the spirit of other Canopy ids; hosts assign
/// whatever meaning they like to the values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Kind(pub u32);
