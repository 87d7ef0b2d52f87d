// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize boundaries between formations and what lies under the cursor.

use alloc::vec::Vec;

use stagekeep_project::FormationTime;

use crate::formation_spans;

/// Which edge of a formation a resize drag grabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeSide {
    /// The end of the hold. Moves time between the hold and the transition.
    End,
    /// The end of the transition. Moves time between the transition and the
    /// next formation's hold.
    Transition,
}

/// A grabbed boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundarySelection {
    /// Edge being dragged.
    pub side: ResizeSide,
    /// Formation owning the edge.
    pub formation_index: usize,
}

/// Classification of a time under the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorRegion {
    /// On a draggable boundary.
    Boundary(BoundarySelection),
    /// Inside the hold of a formation.
    Formation(usize),
    /// Inside the transition that follows a formation.
    Transition(usize),
    /// Before the start or past the end of the performance.
    Outside,
}

fn near(time: f64, edge: f64, window: f64) -> bool {
    time > edge - window / 2.0 && time < edge + window / 2.0
}

/// Returns `true` if `time` is within `window` milliseconds (centered) of a
/// formation start, a hold end or a transition end.
///
/// The leading edge of the first formation has nothing before it to resize
/// against and never counts.
#[must_use]
pub fn is_in_boundary(times: &[FormationTime], time: f64, window: f64) -> bool {
    for (index, span) in formation_spans(times).iter().enumerate() {
        if near(time, span.start, window) {
            return index != 0;
        }
        if near(time, span.end, window) || near(time, span.transition_end, window) {
            return true;
        }
    }
    false
}

/// Returns the edge a resize drag at `time` would grab.
///
/// Edges are checked in time order and the first match wins.
#[must_use]
pub fn boundary_selection(times: &[FormationTime], time: f64, window: f64) -> Option<BoundarySelection> {
    formation_spans(times)
        .iter()
        .enumerate()
        .find_map(|(formation_index, span)| {
            let side = if near(time, span.end, window) {
                ResizeSide::End
            } else if near(time, span.transition_end, window) {
                ResizeSide::Transition
            } else {
                return None;
            };
            Some(BoundarySelection {
                side,
                formation_index,
            })
        })
}

/// Classifies `time` for cursor feedback and pointer-down handling.
#[must_use]
pub fn classify(times: &[FormationTime], time: f64, window: f64) -> CursorRegion {
    if is_in_boundary(times, time, window)
        && let Some(selection) = boundary_selection(times, time, window)
    {
        return CursorRegion::Boundary(selection);
    }
    for (index, span) in formation_spans(times).iter().enumerate() {
        if span.start <= time && time < span.end {
            return CursorRegion::Formation(index);
        }
        if span.end <= time && time < span.transition_end {
            return CursorRegion::Transition(index);
        }
    }
    CursorRegion::Outside
}

/// Moves the grabbed edge by `delta` milliseconds.
///
/// Time is exchanged between neighboring segments so that every later
/// formation keeps its start time, except when the hold end of the last
/// formation is dragged: its transition is not part of the performance and
/// stays as it is. Values are not clamped here; the project clamps them when
/// the times are committed.
#[must_use]
pub fn apply_resize(
    times: &[FormationTime],
    selection: BoundarySelection,
    delta: f64,
) -> Vec<FormationTime> {
    let mut out = times.to_vec();
    let index = selection.formation_index;
    let last = index + 1 == out.len();
    match selection.side {
        ResizeSide::End => {
            if let Some(t) = out.get_mut(index) {
                t.duration += delta;
                if !last {
                    t.transition_duration -= delta;
                }
            }
        }
        ResizeSide::Transition => {
            if let Some(t) = out.get_mut(index) {
                t.transition_duration += delta;
            }
            if let Some(next) = out.get_mut(index + 1) {
                next.duration -= delta;
            }
        }
    }
    out
}
