// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagekeep View 2D: cameras for the stage editor and the timeline scrubber.
//!
//! This crate provides small, headless models of the two views used by the
//! formation editor:
//! - [`StageCamera`]: a pan + zoom camera over the 2D stage plane, where world
//!   Y grows upward and the view origin sits at the center of the drawing
//!   surface.
//! - [`TimelineCamera`]: a pan + zoom camera over the 1D time axis, where the
//!   pan offset is expressed in pixels and never goes negative.
//!
//! Both cameras store their zoom as a [`LogarithmicValue`], so a fixed wheel
//! delta always produces the same *relative* zoom change no matter how far in
//! or out the user already is.
//!
//! The crate does **not** draw anything. Callers are expected to:
//! - Feed pointer positions (pixels relative to the drawing surface) and wheel
//!   input into the cameras.
//! - Use the world/view conversions for hit testing and for placing rendered
//!   items.
//!
//! ## Stage example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use stagekeep_view2d::StageCamera;
//!
//! let viewport = Size::new(800.0, 600.0);
//! let camera = StageCamera::default();
//!
//! // The center of the drawing surface is the world origin.
//! let world = camera.view_to_world_point(Point::new(400.0, 300.0), viewport);
//! assert!(world.x.abs() < 1e-9 && world.y.abs() < 1e-9);
//!
//! // Moving the pointer up the screen moves up in world space.
//! let above = camera.view_to_world_point(Point::new(400.0, 200.0), viewport);
//! assert!(above.y > 0.0);
//! ```
//!
//! ## Timeline example
//!
//! ```rust
//! use stagekeep_view2d::{LogarithmicValue, TimelineCamera};
//!
//! // 0.04 pixels per millisecond: one second is 40 pixels wide.
//! let camera = TimelineCamera::new(0.0, LogarithmicValue::from_linear(0.04));
//! let time = camera.view_to_world_x(40.0);
//! assert!((time - 1000.0).abs() < 1e-6);
//! ```
//!
//! This crate is `no_std`. Enable either the `std` (default) or the `libm`
//! feature so Kurbo has a float math backend.
//!
//! The minimum supported Rust version is 1.88.

#![no_std]

mod logarithmic;
mod stage_camera;
mod timeline_camera;
pub mod vector;

pub use logarithmic::LogarithmicValue;
pub use stage_camera::{StageCamera, ViewportBounds};
pub use timeline_camera::TimelineCamera;

use kurbo::Vec2;

/// A wheel event as delivered by the host UI.
///
/// `delta` is the raw scroll amount in pixels; `ctrl` reports whether the zoom
/// modifier was held. Both cameras interpret the modifier the same way:
/// with it the wheel zooms about the pointer, without it the wheel pans.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WheelInput {
    /// Scroll delta in pixels (`x` horizontal, `y` vertical, screen-down positive).
    pub delta: Vec2,
    /// `true` when the zoom modifier key was held.
    pub ctrl: bool,
}

impl WheelInput {
    /// Creates a wheel input from a delta and the modifier state.
    #[must_use]
    pub const fn new(delta: Vec2, ctrl: bool) -> Self {
        Self { delta, ctrl }
    }
}
