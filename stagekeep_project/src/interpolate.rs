// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based interpolation between consecutive formations.

use alloc::sync::Arc;

use crate::resolve::placement_at;
use crate::{EntityId, EntityPlacement, Formation};

/// Where performers head during the transition that trails the last formation.
///
/// There is no formation after the last one, so its transition has no natural
/// destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingTransition {
    /// Interpolate towards the origin, as an out-of-range formation resolves
    /// to [`EntityPlacement::ORIGIN`].
    #[default]
    TowardOrigin,
    /// Stay at the last formation's placement.
    Hold,
}

/// Knobs for [`crate::PerformanceProject::placement_at_time_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpolationOptions {
    /// Behavior of the transition after the last formation.
    pub trailing: TrailingTransition,
}

impl InterpolationOptions {
    /// Options that hold the last placement instead of drifting to the origin.
    pub const HOLD: Self = Self {
        trailing: TrailingTransition::Hold,
    };
}

pub(crate) fn placement_at_time(
    formations: &[Arc<Formation>],
    time: f64,
    id: &EntityId,
    options: InterpolationOptions,
) -> EntityPlacement {
    let mut start = 0.0;
    for (index, formation) in formations.iter().enumerate() {
        let hold_end = start + formation.duration();
        if time <= hold_end {
            return placement_at(formations, index, id);
        }
        let transition_end = hold_end + formation.transition_duration();
        if time <= transition_end {
            let from = placement_at(formations, index, id);
            let to = if index + 1 < formations.len() {
                placement_at(formations, index + 1, id)
            } else {
                match options.trailing {
                    TrailingTransition::TowardOrigin => EntityPlacement::ORIGIN,
                    TrailingTransition::Hold => from,
                }
            };
            let progress = ((time - hold_end) / formation.transition_duration()).clamp(0.0, 1.0);
            return from.lerp(to, progress);
        }
        start = transition_end;
    }

    match formations.len().checked_sub(1) {
        Some(last) => placement_at(formations, last, id),
        None => EntityPlacement::ORIGIN,
    }
}
