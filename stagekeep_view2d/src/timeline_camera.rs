// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{LogarithmicValue, WheelInput};

/// Pan + zoom camera over the timeline's time axis.
///
/// `zoom` is pixels per world unit (per millisecond on the timeline) and
/// `position` is the pan offset in pixels. A world time `t` is drawn at
/// `t * zoom - position`; the pan offset is clamped at zero so the start of
/// the performance never scrolls to the right of the left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineCamera {
    position: f64,
    zoom: LogarithmicValue,
}

impl Default for TimelineCamera {
    /// Unpanned, one pixel per world unit.
    fn default() -> Self {
        Self::new(0.0, LogarithmicValue::default())
    }
}

impl TimelineCamera {
    /// Creates a camera; negative offsets are clamped to zero.
    #[must_use]
    pub fn new(position: f64, zoom: LogarithmicValue) -> Self {
        Self {
            position: position.max(0.0),
            zoom,
        }
    }

    /// Returns the pan offset in pixels.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the zoom (pixels per world unit).
    #[must_use]
    pub fn zoom(&self) -> LogarithmicValue {
        self.zoom
    }

    /// Sets the pan offset, clamping it at zero.
    pub fn set_position(&mut self, position: f64) {
        self.position = position.max(0.0);
    }

    /// Sets the zoom without moving the pan offset.
    pub fn set_zoom(&mut self, zoom: LogarithmicValue) {
        self.zoom = zoom;
    }

    /// Converts a pixel X on the timeline surface into a world time.
    #[must_use]
    pub fn view_to_world_x(&self, x: f64) -> f64 {
        (x + self.position) / self.zoom.linear()
    }

    /// Converts a world time into a pixel X on the timeline surface.
    #[must_use]
    pub fn world_to_view_x(&self, t: f64) -> f64 {
        t * self.zoom.linear() - self.position
    }

    /// Converts a pixel span into a world-time span.
    #[must_use]
    pub fn view_delta_to_world(&self, dx: f64) -> f64 {
        dx / self.zoom.linear()
    }

    /// Returns the world-units-per-pixel ratio.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.zoom.linear()
    }

    /// Returns the world-time range visible in a surface `width` pixels wide.
    #[must_use]
    pub fn visible_world_range(&self, width: f64) -> Range<f64> {
        self.view_to_world_x(0.0)..self.view_to_world_x(width.max(0.0))
    }

    /// Pans by a delta in pixels.
    pub fn pan_by_view(&mut self, delta: f64) {
        self.set_position(self.position + delta);
    }

    /// Zooms by `delta` in log space about the pixel X `anchor`.
    ///
    /// The world time under the anchor stays put unless the new offset would
    /// be negative, in which case the offset is clamped to zero.
    pub fn zoom_about_view_point(&mut self, anchor: f64, delta: f64) {
        let z1 = self.zoom.linear();
        let zoom = self.zoom.add_logarithmic(delta);
        let z2 = zoom.linear();
        self.zoom = zoom;
        self.set_position((anchor + self.position) / z1 * z2 - anchor);
    }

    /// Applies a wheel event: zoom about `anchor` with the modifier, otherwise
    /// pan by the mean of the horizontal and vertical deltas.
    pub fn apply_wheel(&mut self, wheel: WheelInput, anchor: f64, sensitivity: f64) {
        if wheel.ctrl {
            self.zoom_about_view_point(anchor, -wheel.delta.y * sensitivity);
        } else {
            self.pan_by_view((wheel.delta.x + wheel.delta.y) / 2.0);
        }
    }
}
