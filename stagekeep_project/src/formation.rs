// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::String;

use kurbo::Point;

use crate::{EntityId, FormationId};

/// Shortest transition accepted, in milliseconds.
pub const MIN_TRANSITION_DURATION: f64 = 10.0;

/// A performer's position within one formation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityPlacement {
    /// World-space position; Y grows upward.
    pub position: Point,
}

impl EntityPlacement {
    /// The placement used whenever nothing better can be resolved.
    pub const ORIGIN: Self = Self {
        position: Point::ORIGIN,
    };

    /// Creates a placement at `position`.
    #[must_use]
    pub const fn new(position: Point) -> Self {
        Self { position }
    }

    /// Linear interpolation towards `to`; `t = 0` is `self`, `t = 1` is `to`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(self.position.lerp(to.position, t))
    }
}

impl Default for EntityPlacement {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<Point> for EntityPlacement {
    fn from(position: Point) -> Self {
        Self::new(position)
    }
}

/// New timing for one formation, as produced by dragging timeline boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct FormationTime {
    /// Formation to update.
    pub id: FormationId,
    /// Hold duration in milliseconds.
    pub duration: f64,
    /// Duration of the transition into the next formation, in milliseconds.
    pub transition_duration: f64,
}

/// A named, timed snapshot assigning positions to a subset of performers.
///
/// Performers without an explicit placement are resolved from neighboring
/// formations (see [`crate::PerformanceProject::placement_at`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    id: FormationId,
    name: String,
    placements: BTreeMap<EntityId, EntityPlacement>,
    duration: f64,
    transition_duration: f64,
}

impl Formation {
    /// Creates an empty formation.
    ///
    /// `duration` is clamped to be non-negative and `transition_duration` to
    /// at least [`MIN_TRANSITION_DURATION`].
    #[must_use]
    pub fn new(
        id: impl Into<FormationId>,
        name: impl Into<String>,
        duration: f64,
        transition_duration: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            placements: BTreeMap::new(),
            duration: normalize_duration(duration),
            transition_duration: normalize_transition(transition_duration),
        }
    }

    /// Builder-style helper adding an explicit placement.
    #[must_use]
    pub fn with_placement(mut self, id: impl Into<EntityId>, position: Point) -> Self {
        self.placements.insert(id.into(), EntityPlacement::new(position));
        self
    }

    /// Returns the formation id.
    #[must_use]
    pub fn id(&self) -> &FormationId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hold duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Duration of the transition that follows the hold, in milliseconds.
    #[must_use]
    pub fn transition_duration(&self) -> f64 {
        self.transition_duration
    }

    /// Hold plus transition.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.duration + self.transition_duration
    }

    /// Returns the explicit placement of `id`, without any fallback.
    #[must_use]
    pub fn placement(&self, id: &EntityId) -> Option<&EntityPlacement> {
        self.placements.get(id)
    }

    /// Returns `true` if `id` is explicitly placed here.
    #[must_use]
    pub fn has_placement(&self, id: &EntityId) -> bool {
        self.placements.contains_key(id)
    }

    /// Iterates over explicit placements in id order.
    pub fn placements(&self) -> impl ExactSizeIterator<Item = (&EntityId, &EntityPlacement)> + '_ {
        self.placements.iter()
    }

    /// Returns this formation's timing as a [`FormationTime`].
    #[must_use]
    pub fn time(&self) -> FormationTime {
        FormationTime {
            id: self.id.clone(),
            duration: self.duration,
            transition_duration: self.transition_duration,
        }
    }

    pub(crate) fn set_placement(&mut self, id: EntityId, placement: EntityPlacement) {
        self.placements.insert(id, placement);
    }

    pub(crate) fn replace_placements(&mut self, placements: BTreeMap<EntityId, EntityPlacement>) {
        self.placements = placements;
    }

    pub(crate) fn set_times(&mut self, duration: f64, transition_duration: f64) {
        self.duration = normalize_duration(duration);
        self.transition_duration = normalize_transition(transition_duration);
    }
}

fn normalize_duration(duration: f64) -> f64 {
    if duration < 0.0 {
        tracing::debug!(duration, "clamping negative formation duration to 0");
        0.0
    } else {
        duration
    }
}

fn normalize_transition(transition_duration: f64) -> f64 {
    if transition_duration < MIN_TRANSITION_DURATION {
        tracing::debug!(
            transition_duration,
            min = MIN_TRANSITION_DURATION,
            "raising transition duration to the minimum"
        );
        MIN_TRANSITION_DURATION
    } else {
        transition_duration
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{EntityPlacement, Formation, MIN_TRANSITION_DURATION};

    #[test]
    fn constructor_clamps_times() {
        let f = Formation::new("0", "F", -5.0, 3.0);
        assert_eq!(f.duration(), 0.0);
        assert_eq!(f.transition_duration(), MIN_TRANSITION_DURATION);

        let f = Formation::new("0", "F", 2_000.0, 10.0);
        assert_eq!(f.duration(), 2_000.0);
        assert_eq!(f.transition_duration(), 10.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = EntityPlacement::new(Point::new(0.0, 10.0));
        let b = EntityPlacement::new(Point::new(100.0, -10.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5).position, Point::new(50.0, 0.0));
    }

    #[test]
    fn explicit_placements_are_keyed_by_id() {
        let f = Formation::new("0", "F", 1.0, 10.0)
            .with_placement("a", Point::new(1.0, 2.0))
            .with_placement("a", Point::new(3.0, 4.0));
        assert_eq!(f.placements().len(), 1);
        assert_eq!(f.placement(&"a".into()).map(|p| p.position), Some(Point::new(3.0, 4.0)));
        assert!(!f.has_placement(&"b".into()));
    }
}
