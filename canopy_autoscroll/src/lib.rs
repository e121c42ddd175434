// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Autoscroll: the scroll speed model for drags near container edges.
//!
//! Two modes, matching the two input styles:
//!
//! - **Fluid** ([`fluid_scroll`]): called once per animation tick during a
//!   pointer drag. The pointer's distance to each container edge maps to a
//!   signed per-tick scroll delta through an eased ramp between two
//!   size-relative thresholds, optionally dampened during the opening moments
//!   of a drag.
//! - **Jump** ([`clamp_jump`]): a single discrete scroll for an exact
//!   keyboard-requested distance, split against the scrollable's range so the
//!   unabsorbed remainder can be handed to an outer scrollable.
//!
//! Everything here is pure computation over values: this crate decides how
//! far to scroll, never performs the scroll.
//!
//! ```rust
//! use canopy_autoscroll::{AutoScrollConfig, FluidScrollArgs, fluid_scroll};
//! use kurbo::{Point, Rect, Size, Vec2};
//!
//! let config = AutoScrollConfig::default();
//! let scroll = fluid_scroll(&FluidScrollArgs {
//!     container: Rect::new(0.0, 0.0, 100.0, 400.0),
//!     subject_size: Size::new(50.0, 50.0),
//!     // 20px from the bottom edge of a 400px container: maximum speed.
//!     center: Point::new(50.0, 380.0),
//!     config: &config,
//!     elapsed_ms: None,
//! });
//! assert_eq!(scroll, Some(Vec2::new(0.0, 28.0)));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod config;
mod fluid;
mod jump;

pub use config::{AutoScrollConfig, DurationDampening};
pub use fluid::{
    AxisThresholds, FluidScrollArgs, MIN_PIXEL_SCROLL, ScrollOnAxisArgs, axis_thresholds,
    fluid_scroll, scroll_on_axis,
};
pub use jump::{JumpResult, clamp_jump};
