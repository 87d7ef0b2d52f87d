// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler tick layout for the timeline.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use stagekeep_view2d::{LogarithmicValue, TimelineCamera};

use crate::TimelineConfig;

/// Minor ticks per major tick, including the major one.
pub const TICK_SUBDIVISIONS: usize = 5;

/// Upper bound on major ticks per call. Spacing never drops below 200 pixels
/// at the default reference zoom, so real surfaces stay far below it.
const MAX_MAJOR_TICKS: f64 = 4_096.0;

/// One ruler tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerTick {
    /// Horizontal position on the drawing surface, in pixels.
    pub x: f64,
    /// Time the tick marks, in milliseconds.
    pub time: f64,
    /// Major ticks carry a [`format_timestamp`] label and span the full ruler
    /// height.
    pub major: bool,
}

fn wrap(x: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    (x - lo).rem_euclid(hi - lo) + lo
}

/// Distance between major ticks, in pixels.
///
/// The zoom is wrapped into one tripling of the reference zoom, so spacing
/// cycles between 200 and 600 pixels (at the default reference) instead of
/// growing or shrinking without bound.
#[must_use]
pub fn tick_spacing_px(camera: &TimelineCamera, config: &TimelineConfig) -> f64 {
    let reference = config.pixels_per_ms;
    let lo = LogarithmicValue::from_linear(reference).logarithmic();
    let hi = LogarithmicValue::from_linear(reference * 3.0).logarithmic();
    let wrapped = LogarithmicValue::from_logarithmic(wrap(camera.zoom().logarithmic(), lo, hi));
    5_000.0 * wrapped.linear()
}

/// Ticks covering a surface `width` pixels wide, left to right.
///
/// Non-finite or absurdly wide surfaces are cut off after a fixed number of
/// major ticks.
#[must_use]
pub fn ruler_ticks(camera: &TimelineCamera, width: f64, config: &TimelineConfig) -> Vec<RulerTick> {
    let spacing = tick_spacing_px(camera, config);
    let zoom = camera.zoom().linear();
    let offset = camera.position().rem_euclid(spacing);
    let first = (camera.position() / spacing).floor();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the tick count is clamped to MAX_MAJOR_TICKS"
    )]
    let majors = (width.max(0.0) / spacing).ceil().min(MAX_MAJOR_TICKS) as usize + 1;

    let mut ticks = Vec::with_capacity(majors * TICK_SUBDIVISIONS);
    for i in 0..majors {
        for j in 0..TICK_SUBDIVISIONS {
            let step = i as f64 + j as f64 / TICK_SUBDIVISIONS as f64;
            ticks.push(RulerTick {
                x: step * spacing - offset,
                time: (first + step) * spacing / zoom,
                major: j == 0,
            });
        }
    }
    ticks
}

/// Formats milliseconds as `mm:ss`, rounding to the nearest second.
///
/// Negative input is treated as zero.
#[must_use]
pub fn format_timestamp(ms: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "performance lengths are far below u64::MAX seconds"
    )]
    let seconds = (ms.max(0.0) / 1_000.0).round() as u64;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
