// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-scroll tuning knobs.

/// Scales scroll speed down during the opening moments of a drag.
///
/// A drag that starts with the pointer already inside a scroll band would
/// otherwise jump at full speed on the first tick. Speed is held at the
/// minimum until `accelerate_at_ms`, then eased up to full speed at
/// `stop_dampening_at_ms`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DurationDampening {
    /// Elapsed time after which speed is no longer dampened.
    pub stop_dampening_at_ms: u64,
    /// Elapsed time at which speed starts ramping up from the minimum.
    pub accelerate_at_ms: u64,
}

/// Configuration for the fluid auto-scroll speed model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AutoScrollConfig {
    /// Turns fluid auto-scrolling off entirely.
    pub disabled: bool,
    /// Fraction of the container size from an edge at which scrolling begins.
    pub start_from_percentage: f64,
    /// Fraction of the container size from an edge at which scrolling reaches
    /// its maximum speed.
    pub max_scroll_at_percentage: f64,
    /// Maximum scroll speed in pixels per tick.
    pub max_pixel_scroll: f64,
    /// Exponent of the easing curve between the two thresholds. `1` would be
    /// linear; higher values keep speed low until close to the edge.
    pub ease_power: u32,
    /// Time-based dampening at the start of a drag.
    pub duration_dampening: DurationDampening,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            start_from_percentage: 0.25,
            max_scroll_at_percentage: 0.05,
            max_pixel_scroll: 28.0,
            ease_power: 2,
            duration_dampening: DurationDampening {
                stop_dampening_at_ms: 1200,
                accelerate_at_ms: 360,
            },
        }
    }
}
