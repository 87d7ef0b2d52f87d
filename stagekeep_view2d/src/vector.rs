// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small 2D vector helpers that `kurbo` does not provide.
//!
//! Addition, subtraction, scaling, distance and equality come straight from
//! [`kurbo::Point`] and [`kurbo::Vec2`]. What is left is the component-wise
//! (Hadamard) product, which the cameras use to flip between screen space
//! (Y down) and world space (Y up).

use kurbo::Vec2;

/// Multiplier that converts between screen-space and world-space Y.
pub const FLIP_Y: Vec2 = Vec2::new(1.0, -1.0);

/// Component-wise product of two vectors.
#[must_use]
pub fn hadamard(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}
