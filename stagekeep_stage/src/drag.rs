// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Pointer positions of a press-move-release sequence, in view pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct DragState {
    start: Option<Point>,
    last: Option<Point>,
}

impl DragState {
    pub(crate) fn start(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
    }

    /// Movement since the previous call, or `None` outside a drag.
    pub(crate) fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start?;
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    pub(crate) fn end(&mut self) {
        *self = Self::default();
    }
}
