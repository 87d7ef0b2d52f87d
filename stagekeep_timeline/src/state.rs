// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use stagekeep_project::{Formation, FormationTime, PerformanceProject};

use crate::TimelineEvent;

/// What the timeline is pointing at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelineState {
    /// Viewing a formation, `position` of the way through its hold.
    CurrentFormation {
        /// Formation index.
        index: usize,
        /// Fraction of the hold, in `[0, 1]`.
        position: f64,
    },
    /// Viewing an arbitrary instant, possibly mid-transition.
    Seeker {
        /// Milliseconds from the start of the performance.
        time: f64,
    },
}

impl TimelineState {
    /// The start of formation `index`.
    #[must_use]
    pub const fn at_formation(index: usize) -> Self {
        Self::CurrentFormation {
            index,
            position: 0.0,
        }
    }

    /// Seeker state for a playhead dragged to `time`.
    ///
    /// Returns `None` when no formation strictly contains `time`: exact
    /// formation boundaries, time zero and times past the end are not seekable.
    #[must_use]
    pub fn seek(project: &PerformanceProject, time: f64) -> Option<Self> {
        project
            .formation_at_time(time)
            .map(|_| Self::Seeker { time })
    }

    /// State after the playhead is released at `time`: the start of the
    /// formation containing it, or `None` under the same rule as [`Self::seek`].
    #[must_use]
    pub fn release(project: &PerformanceProject, time: f64) -> Option<Self> {
        project
            .formation_at_time(time)
            .map(|(index, _)| Self::at_formation(index))
    }

    /// Follows one timeline notification.
    ///
    /// Selecting a formation jumps to its start. Seeks and releases move as
    /// described by [`Self::seek`] and [`Self::release`], keeping the current
    /// state when those return `None`. Resizes do not move the playhead.
    #[must_use]
    pub fn apply_event(self, project: &PerformanceProject, event: &TimelineEvent) -> Self {
        let next = match *event {
            TimelineEvent::FormationSelected(index) => Some(Self::at_formation(index)),
            TimelineEvent::Seeked(time) => Self::seek(project, time),
            TimelineEvent::StoppedSeeking(time) => Self::release(project, time),
            TimelineEvent::FormationTimesChanged(_) => None,
        };
        if next.is_none() {
            tracing::trace!(?event, "timeline: state unchanged");
        }
        next.unwrap_or(self)
    }
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::at_formation(0)
    }
}

/// Absolute time addressed by `state`.
///
/// A formation index past the end addresses time zero.
#[must_use]
pub fn time_of(project: &PerformanceProject, state: &TimelineState) -> f64 {
    match *state {
        TimelineState::CurrentFormation { index, position } => {
            match (project.start_time(index), project.formation(index)) {
                (Some(start), Some(formation)) => {
                    start + position.clamp(0.0, 1.0) * formation.duration()
                }
                _ => 0.0,
            }
        }
        TimelineState::Seeker { time } => time,
    }
}

/// Formation the editor shows for `state`.
///
/// A seeker time maps to the last formation starting at or before it, so
/// transitions belong to the formation they leave and times past the end to
/// the last formation. An empty project reports index 0.
#[must_use]
pub fn current_formation_index(project: &PerformanceProject, state: &TimelineState) -> usize {
    match *state {
        TimelineState::CurrentFormation { index, .. } => index,
        TimelineState::Seeker { time } => {
            if let Some((index, _)) = project.formation_at_time(time) {
                return index;
            }
            let times = formation_times(project);
            formation_spans(&times)
                .iter()
                .rposition(|span| span.start <= time)
                .unwrap_or(0)
        }
    }
}

/// Where one formation sits on the time axis, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormationSpan {
    /// Start of the hold.
    pub start: f64,
    /// End of the hold and start of the transition.
    pub end: f64,
    /// End of the transition and start of the next formation.
    pub transition_end: f64,
}

/// Lays formations out end to end.
#[must_use]
pub fn formation_spans(times: &[FormationTime]) -> Vec<FormationSpan> {
    let mut start = 0.0;
    times
        .iter()
        .map(|t| {
            let end = start + t.duration;
            let span = FormationSpan {
                start,
                end,
                transition_end: end + t.transition_duration,
            };
            start = span.transition_end;
            span
        })
        .collect()
}

/// Timing of every formation, in order.
#[must_use]
pub fn formation_times(project: &PerformanceProject) -> Vec<FormationTime> {
    project.formations().map(Formation::time).collect()
}
