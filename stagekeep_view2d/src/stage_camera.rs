// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::vector::{FLIP_Y, hadamard};
use crate::{LogarithmicValue, WheelInput};

/// Pan + zoom camera over the 2D stage.
///
/// The view origin is the center of the drawing surface, view Y grows
/// downward and world Y grows upward. `position` is the camera offset in
/// *zoomed* units: a world point `p` lands at
/// `center + (p * zoom - position) ⊙ [1, -1]` on screen.
///
/// The viewport size is not stored; it is passed to each conversion so the
/// camera stays valid while the host surface is resized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageCamera {
    position: Vec2,
    zoom: LogarithmicValue,
}

impl Default for StageCamera {
    /// Centered on the world origin with a log zoom of `0.5` (about 1.65x).
    fn default() -> Self {
        Self::new(Vec2::ZERO, LogarithmicValue::from_logarithmic(0.5))
    }
}

impl StageCamera {
    /// Creates a camera from an offset and a zoom.
    #[must_use]
    pub const fn new(position: Vec2, zoom: LogarithmicValue) -> Self {
        Self { position, zoom }
    }

    /// Returns the camera offset.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the zoom.
    #[must_use]
    pub fn zoom(&self) -> LogarithmicValue {
        self.zoom
    }

    /// Sets the camera offset.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Sets the zoom without moving the offset.
    pub fn set_zoom(&mut self, zoom: LogarithmicValue) {
        self.zoom = zoom;
    }

    /// Returns the world → view transform for a surface of the given size.
    ///
    /// Renderers can apply this directly to world-space geometry.
    #[must_use]
    pub fn world_to_view_transform(&self, viewport: Size) -> Affine {
        Affine::translate(viewport.to_vec2() * 0.5)
            * Affine::scale_non_uniform(1.0, -1.0)
            * Affine::translate(-self.position)
            * Affine::scale(self.zoom.linear())
    }

    /// Converts a pixel position on the drawing surface into world space.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point, viewport: Size) -> Point {
        let centered = hadamard(pt.to_vec2() - viewport.to_vec2() * 0.5, FLIP_Y);
        ((centered + self.position) / self.zoom.linear()).to_point()
    }

    /// Converts a world-space point into a pixel position on the drawing surface.
    ///
    /// This is the exact inverse of [`StageCamera::view_to_world_point`].
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point, viewport: Size) -> Point {
        let zoomed = pt.to_vec2() * self.zoom.linear() - self.position;
        (hadamard(zoomed, FLIP_Y) + viewport.to_vec2() * 0.5).to_point()
    }

    /// Converts a pointer movement in pixels into a world-space movement.
    #[must_use]
    pub fn view_delta_to_world(&self, delta: Vec2) -> Vec2 {
        hadamard(delta, FLIP_Y) / self.zoom.linear()
    }

    /// Converts a view-space rectangle (two arbitrary corners) into world space.
    ///
    /// The result is normalized, so `y0` is the bottom edge in world terms.
    #[must_use]
    pub fn view_to_world_rect(&self, a: Point, b: Point, viewport: Size) -> Rect {
        Rect::from_points(
            self.view_to_world_point(a, viewport),
            self.view_to_world_point(b, viewport),
        )
    }

    /// Pans by a delta expressed in view pixels (screen-down positive).
    pub fn pan_by_view(&mut self, delta: Vec2) {
        self.position += hadamard(delta, FLIP_Y);
    }

    /// Zooms by `delta` in log space, keeping the world point under `anchor`
    /// fixed on screen.
    pub fn zoom_about_view_point(&mut self, anchor: Point, viewport: Size, delta: f64) {
        let old = self.zoom.linear();
        let zoom = self.zoom.add_logarithmic(delta);
        let cursor = hadamard(anchor.to_vec2() - viewport.to_vec2() * 0.5, FLIP_Y);
        self.position = (cursor + self.position) * (zoom.linear() / old) - cursor;
        self.zoom = zoom;
    }

    /// Applies a wheel event: zoom about `anchor` with the modifier, pan without.
    ///
    /// `sensitivity` scales the vertical wheel delta into a log-space zoom step.
    pub fn apply_wheel(&mut self, wheel: WheelInput, anchor: Point, viewport: Size, sensitivity: f64) {
        if wheel.ctrl {
            self.zoom_about_view_point(anchor, viewport, -wheel.delta.y * sensitivity);
        } else {
            self.pan_by_view(wheel.delta);
        }
    }

    /// Returns the world-space extents currently visible.
    #[must_use]
    pub fn viewport_bounds(&self, viewport: Size) -> ViewportBounds {
        let zoom = self.zoom.linear();
        let width = viewport.width / zoom;
        let height = viewport.height / zoom;
        let center = self.position / zoom;
        ViewportBounds {
            width,
            height,
            left: center.x - width / 2.0,
            right: center.x + width / 2.0,
            top: center.y + height / 2.0,
            bottom: center.y - height / 2.0,
        }
    }

    /// Returns the world-units-per-pixel ratio.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.zoom.linear()
    }
}

/// World-space extents of the stage viewport.
///
/// World Y grows upward, so `top > bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    /// Visible width in world units.
    pub width: f64,
    /// Visible height in world units.
    pub height: f64,
    /// Smallest visible X.
    pub left: f64,
    /// Largest visible Y.
    pub top: f64,
    /// Largest visible X.
    pub right: f64,
    /// Smallest visible Y.
    pub bottom: f64,
}

impl ViewportBounds {
    /// Returns the bounds as a normalized rectangle.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(self.left, self.bottom, self.right, self.top)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::StageCamera;
    use crate::{LogarithmicValue, WheelInput};

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn center_maps_to_camera_target() {
        let camera = StageCamera::new(Vec2::new(20.0, -10.0), LogarithmicValue::from_linear(2.0));
        let world = camera.view_to_world_point(Point::new(400.0, 300.0), VIEWPORT);
        assert!(close(world, Point::new(10.0, -5.0)));
    }

    #[test]
    fn affine_agrees_with_direct_conversion() {
        let camera = StageCamera::new(Vec2::new(-35.0, 12.0), LogarithmicValue::from_logarithmic(0.3));
        let world = Point::new(17.0, -42.0);
        let direct = camera.world_to_view_point(world, VIEWPORT);
        let affine = camera.world_to_view_transform(VIEWPORT) * world;
        assert!(close(direct, affine));
    }

    #[test]
    fn zoom_keeps_world_point_under_cursor() {
        let mut camera = StageCamera::default();
        let anchor = Point::new(123.0, 456.0);
        let before = camera.view_to_world_point(anchor, VIEWPORT);
        camera.zoom_about_view_point(anchor, VIEWPORT, 0.7);
        let after = camera.view_to_world_point(anchor, VIEWPORT);
        assert!(close(before, after));
    }

    #[test]
    fn plain_wheel_pans_with_flipped_y() {
        let mut camera = StageCamera::default();
        camera.apply_wheel(WheelInput::new(Vec2::new(5.0, 8.0), false), Point::ZERO, VIEWPORT, 0.01);
        assert_eq!(camera.position(), Vec2::new(5.0, -8.0));
    }

    #[test]
    fn ctrl_wheel_up_zooms_in() {
        let mut camera = StageCamera::default();
        let before = camera.zoom().linear();
        camera.apply_wheel(
            WheelInput::new(Vec2::new(0.0, -100.0), true),
            Point::new(400.0, 300.0),
            VIEWPORT,
            0.01,
        );
        assert!(camera.zoom().linear() > before);
    }

    #[test]
    fn viewport_bounds_are_centered_on_camera() {
        let camera = StageCamera::new(Vec2::new(100.0, 50.0), LogarithmicValue::from_linear(2.0));
        let b = camera.viewport_bounds(VIEWPORT);
        assert!((b.width - 400.0).abs() < 1e-9);
        assert!((b.height - 300.0).abs() < 1e-9);
        assert!((b.left - (50.0 - 200.0)).abs() < 1e-9);
        assert!((b.right - (50.0 + 200.0)).abs() < 1e-9);
        assert!((b.top - (25.0 + 150.0)).abs() < 1e-9);
        assert!((b.bottom - (25.0 - 150.0)).abs() < 1e-9);
        assert!(b.to_rect().height() > 0.0);
    }

    #[test]
    fn view_rect_is_normalized_in_world_space() {
        let camera = StageCamera::new(Vec2::ZERO, LogarithmicValue::default());
        let rect = camera.view_to_world_rect(Point::new(500.0, 200.0), Point::new(300.0, 400.0), VIEWPORT);
        assert!((rect.x0 + 100.0).abs() < 1e-9);
        assert!((rect.x1 - 100.0).abs() < 1e-9);
        assert!((rect.y0 + 100.0).abs() < 1e-9);
        assert!((rect.y1 - 100.0).abs() < 1e-9);
    }
}
