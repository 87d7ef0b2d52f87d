// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use stagekeep_view2d::{LogarithmicValue, TimelineCamera};

/// Tunables for the timeline scrubber.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineConfig {
    /// Reference zoom, in pixels per millisecond. New cameras start here and
    /// boundary windows and ruler spacing are scaled relative to it.
    pub pixels_per_ms: f64,
    /// Width of the grab window around a resize boundary, in milliseconds at
    /// the reference zoom. The window narrows in time as the user zooms in.
    pub boundary_ms: f64,
    /// Width of the seek handle, in pixels.
    pub handle_px: f64,
    /// Pointer presses above this Y, in pixels, can grab the seek handle.
    pub handle_height_px: f64,
    /// Log-space zoom change per wheel delta unit.
    pub wheel_zoom_sensitivity: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            pixels_per_ms: 0.04,
            boundary_ms: 200.0,
            handle_px: 18.0,
            handle_height_px: 20.0,
            wheel_zoom_sensitivity: 0.01,
        }
    }
}

impl TimelineConfig {
    /// A camera at time zero showing the reference zoom.
    #[must_use]
    pub fn default_camera(&self) -> TimelineCamera {
        TimelineCamera::new(0.0, LogarithmicValue::from_linear(self.pixels_per_ms))
    }

    /// Boundary window width in milliseconds for the given camera.
    #[must_use]
    pub fn scaled_boundary(&self, camera: &TimelineCamera) -> f64 {
        self.boundary_ms / (camera.zoom().linear() / self.pixels_per_ms)
    }
}
