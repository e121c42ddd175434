// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fluid scroll speed model: pointer distance to a container edge in,
//! signed per-tick scroll delta out.

use canopy_geometry::Axis;
use kurbo::{Point, Rect, Size, Vec2};

use crate::config::AutoScrollConfig;

/// Speeds below one pixel per tick are clamped to zero. Sub-pixel scroll
/// events still cost a frame without any visible effect.
pub const MIN_PIXEL_SCROLL: f64 = 1.0;

/// Pixel thresholds for one axis of one container, derived from the
/// container's size and the configured percentages.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisThresholds {
    /// Distance-to-edge at which scrolling begins.
    pub start_scrolling_from: f64,
    /// Distance-to-edge at which speed reaches the configured maximum.
    pub max_scroll_value_at: f64,
}

/// Derive the pixel thresholds for `axis` of `container`.
#[must_use]
pub fn axis_thresholds(axis: Axis, container: Rect, config: &AutoScrollConfig) -> AxisThresholds {
    let size = axis.size(container);
    AxisThresholds {
        start_scrolling_from: size * config.start_from_percentage,
        max_scroll_value_at: size * config.max_scroll_at_percentage,
    }
}

/// `fraction.powi(power)` without a float `powi`, which is unavailable in
/// core.
fn ease(fraction: f64, power: u32) -> f64 {
    let mut out = 1.0;
    for _ in 0..power {
        out *= fraction;
    }
    out
}

/// Unsigned speed for a distance-to-edge: zero outside the scroll band, the
/// configured maximum at or inside the max threshold, eased in between.
fn value_from_distance(
    distance: f64,
    thresholds: AxisThresholds,
    config: &AutoScrollConfig,
) -> f64 {
    if distance > thresholds.start_scrolling_from {
        return 0.0;
    }
    if distance <= thresholds.max_scroll_value_at {
        return config.max_pixel_scroll;
    }
    let band = thresholds.start_scrolling_from - thresholds.max_scroll_value_at;
    let fraction = (thresholds.start_scrolling_from - distance) / band;
    config.max_pixel_scroll * ease(fraction, config.ease_power)
}

/// Scale a speed by how long the drag has been running. Held at the minimum
/// until the accelerate threshold, then eased up to full speed.
fn dampen_by_duration(value: f64, elapsed_ms: u64, config: &AutoScrollConfig) -> f64 {
    let d = config.duration_dampening;
    if elapsed_ms >= d.stop_dampening_at_ms {
        return value;
    }
    if elapsed_ms < d.accelerate_at_ms {
        return MIN_PIXEL_SCROLL;
    }
    let band = (d.stop_dampening_at_ms - d.accelerate_at_ms) as f64;
    let fraction = (elapsed_ms - d.accelerate_at_ms) as f64 / band;
    (value * ease(fraction, config.ease_power)).max(MIN_PIXEL_SCROLL)
}

/// Inputs to [`scroll_on_axis`].
#[derive(Copy, Clone, Debug)]
pub struct ScrollOnAxisArgs<'a> {
    /// Pointer distance to the container's start edge on this axis.
    pub distance_to_start: f64,
    /// Pointer distance to the container's end edge on this axis.
    pub distance_to_end: f64,
    /// Pixel thresholds for this axis.
    pub thresholds: AxisThresholds,
    /// Tuning.
    pub config: &'a AutoScrollConfig,
    /// Milliseconds since the drag started, when time dampening applies.
    pub elapsed_ms: Option<u64>,
}

/// The signed scroll delta for one axis: negative toward the start edge,
/// positive toward the end edge. The nearer edge wins; a tie scrolls toward
/// the start.
#[must_use]
pub fn scroll_on_axis(args: &ScrollOnAxisArgs<'_>) -> f64 {
    let toward_end = args.distance_to_end < args.distance_to_start;
    let (distance, sign) = if toward_end {
        (args.distance_to_end, 1.0)
    } else {
        (args.distance_to_start, -1.0)
    };

    let mut value = value_from_distance(distance, args.thresholds, args.config);
    if value > 0.0 {
        if let Some(elapsed) = args.elapsed_ms {
            value = dampen_by_duration(value, elapsed, args.config);
        }
    }
    if value < MIN_PIXEL_SCROLL {
        return 0.0;
    }
    sign * value
}

/// Inputs to [`fluid_scroll`].
#[derive(Copy, Clone, Debug)]
pub struct FluidScrollArgs<'a> {
    /// The scroll container's visible frame (or the window viewport frame).
    pub container: Rect,
    /// The dragged item's size.
    pub subject_size: Size,
    /// The dragged item's current center.
    pub center: Point,
    /// Tuning.
    pub config: &'a AutoScrollConfig,
    /// Milliseconds since the drag started, when time dampening applies.
    pub elapsed_ms: Option<u64>,
}

/// The per-tick scroll vector for a container, or `None` when nothing should
/// scroll this tick.
///
/// An axis where the dragged item is at least as large as the container
/// contributes nothing: there is no meaningful scroll target for it.
#[must_use]
pub fn fluid_scroll(args: &FluidScrollArgs<'_>) -> Option<Vec2> {
    if args.config.disabled {
        return None;
    }

    let on = |axis: Axis| -> f64 {
        if axis.size_of(args.subject_size) >= axis.size(args.container) {
            return 0.0;
        }
        let main = axis.main_of(args.center);
        scroll_on_axis(&ScrollOnAxisArgs {
            distance_to_start: main - axis.start(args.container),
            distance_to_end: axis.end(args.container) - main,
            thresholds: axis_thresholds(axis, args.container, args.config),
            config: args.config,
            elapsed_ms: args.elapsed_ms,
        })
    };

    let scroll = Vec2::new(on(Axis::Horizontal), on(Axis::Vertical));
    (scroll != Vec2::ZERO).then_some(scroll)
}
