// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Vec2};

use crate::interpolate::{self, InterpolationOptions};
use crate::naming::{fresh_performer_id, next_numbered_name, performer_color};
use crate::resolve;
use crate::{
    Entity, EntityId, EntityPatch, EntityPlacement, EntityRegistry, Formation, FormationId,
    FormationTime, Performer, ProjectError, ProjectResult,
};

/// Hold duration of the formation created when a performer is added to an
/// empty project, in milliseconds.
pub const BASIS_FORMATION_DURATION: f64 = 5_000.0;

/// Transition duration of that basis formation, in milliseconds.
pub const BASIS_TRANSITION_DURATION: f64 = 1_000.0;

/// Offset from the last performer at which [`PerformanceProject::add_performer`]
/// places a new one.
pub const NEW_PERFORMER_OFFSET: Vec2 = Vec2::new(10.0, -10.0);

/// The aggregate root: an ordered list of formations plus the performer registry.
///
/// A project is an immutable value. Every update takes `&self` and returns a
/// new project; formations and the registry are shared between snapshots and
/// copied only when an update touches them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerformanceProject {
    entities: Arc<EntityRegistry>,
    formations: Vec<Arc<Formation>>,
}

impl PerformanceProject {
    /// Creates an empty project.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a project from performers and formations, in order.
    ///
    /// Fails if a performer id or formation id appears twice.
    pub fn from_parts(
        entities: impl IntoIterator<Item = (EntityId, Entity)>,
        formations: impl IntoIterator<Item = Formation>,
    ) -> ProjectResult<Self> {
        let mut registry = EntityRegistry::default();
        for (id, entity) in entities {
            if registry.contains(&id) {
                return Err(ProjectError::DuplicateEntity(id));
            }
            registry.insert(id, entity);
        }

        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for formation in formations {
            if !seen.insert(formation.id().clone()) {
                return Err(ProjectError::DuplicateFormation(formation.id().clone()));
            }
            list.push(Arc::new(formation));
        }

        Ok(Self {
            entities: Arc::new(registry),
            formations: list,
        })
    }

    /// Returns the performer registry.
    #[must_use]
    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    /// Returns the attributes of a performer.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Returns `true` if `id` is a registered performer.
    #[must_use]
    pub fn contains_entity(&self, id: &EntityId) -> bool {
        self.entities.contains(id)
    }

    /// Number of formations.
    #[must_use]
    pub fn formation_count(&self) -> usize {
        self.formations.len()
    }

    /// Iterates over formations in performance order.
    pub fn formations(&self) -> impl ExactSizeIterator<Item = &Formation> + '_ {
        self.formations.iter().map(|f| &**f)
    }

    /// Returns the formation at `index`.
    #[must_use]
    pub fn formation(&self, index: usize) -> Option<&Formation> {
        self.formations.get(index).map(|f| &**f)
    }

    /// Returns the index of the formation with the given id.
    #[must_use]
    pub fn formation_index_by_id(&self, id: &FormationId) -> Option<usize> {
        self.formations.iter().position(|f| f.id() == id)
    }

    /// Returns the formation with the given id.
    #[must_use]
    pub fn formation_by_id(&self, id: &FormationId) -> Option<&Formation> {
        self.formation_index_by_id(id).and_then(|i| self.formation(i))
    }

    /// Returns the formation whose hold or trailing transition strictly
    /// contains `time`.
    ///
    /// Exact boundaries between formations, and time zero, belong to none.
    #[must_use]
    pub fn formation_at_time(&self, time: f64) -> Option<(usize, &Formation)> {
        let mut elapsed = 0.0;
        for (index, formation) in self.formations().enumerate() {
            let end = elapsed + formation.total_duration();
            if elapsed < time && time < end {
                return Some((index, formation));
            }
            elapsed = end;
        }
        None
    }

    /// Time at which the hold of formation `index` starts.
    #[must_use]
    pub fn start_time(&self, index: usize) -> Option<f64> {
        if index >= self.formations.len() {
            return None;
        }
        Some(self.formations[..index].iter().map(|f| f.total_duration()).sum())
    }

    /// Time at which the hold of formation `index` ends and its transition starts.
    #[must_use]
    pub fn end_time(&self, index: usize) -> Option<f64> {
        let start = self.start_time(index)?;
        Some(start + self.formations[index].duration())
    }

    /// Length of the performance: every hold and every transition except the
    /// one trailing the last formation.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        let last = self.formations.len().saturating_sub(1);
        self.formations
            .iter()
            .enumerate()
            .map(|(i, f)| {
                if i < last {
                    f.total_duration()
                } else {
                    f.duration()
                }
            })
            .sum()
    }

    /// Suggested name for the next formation: `"Formation N"`.
    #[must_use]
    pub fn next_formation_name(&self) -> String {
        next_numbered_name("Formation", self.formations().map(Formation::name))
    }

    /// Suggested name for the next performer: `"Performer N"`.
    #[must_use]
    pub fn next_performer_name(&self) -> String {
        next_numbered_name(
            "Performer",
            self.entities.iter().map(|(_, e)| e.name.as_str()),
        )
    }

    /// Resolves where `id` stands in formation `index`.
    ///
    /// A performer without an explicit placement there keeps its position from
    /// the nearest earlier formation that places it, or failing that takes
    /// its position from the nearest later one. Unplaced performers and
    /// out-of-range indices resolve to the origin.
    #[must_use]
    pub fn placement_at(&self, index: usize, id: &EntityId) -> EntityPlacement {
        resolve::placement_at(&self.formations, index, id)
    }

    /// Resolves where `id` stands at `time` milliseconds into the performance.
    ///
    /// Equivalent to [`Self::placement_at_time_with`] with default options.
    #[must_use]
    pub fn placement_at_time(&self, time: f64, id: &EntityId) -> EntityPlacement {
        self.placement_at_time_with(time, id, InterpolationOptions::default())
    }

    /// Resolves where `id` stands at `time`, interpolating linearly during
    /// transitions.
    ///
    /// During a hold the formation's resolved placement is returned as is.
    /// Beyond the last formation's trailing transition the last formation's
    /// placement is returned; an empty project always yields the origin.
    #[must_use]
    pub fn placement_at_time_with(
        &self,
        time: f64,
        id: &EntityId,
        options: InterpolationOptions,
    ) -> EntityPlacement {
        interpolate::placement_at_time(&self.formations, time, id, options)
    }

    /// Resolved placement of every registered performer in formation `index`,
    /// in registry order.
    #[must_use]
    pub fn placements(&self, index: usize) -> Vec<(EntityId, EntityPlacement)> {
        self.entities
            .ids()
            .map(|id| (id.clone(), self.placement_at(index, id)))
            .collect()
    }

    /// Resolved placement of every registered performer at `time`, in
    /// registry order.
    #[must_use]
    pub fn placements_at_time(&self, time: f64) -> Vec<(EntityId, EntityPlacement)> {
        self.entities
            .ids()
            .map(|id| (id.clone(), self.placement_at_time(time, id)))
            .collect()
    }

    /// Render snapshot of formation `index`.
    #[must_use]
    pub fn performers(&self, index: usize) -> Vec<Performer> {
        self.snapshot(|id| self.placement_at(index, id))
    }

    /// Render snapshot at `time`.
    #[must_use]
    pub fn performers_at_time(&self, time: f64) -> Vec<Performer> {
        self.snapshot(|id| self.placement_at_time(time, id))
    }

    fn snapshot(&self, resolve: impl Fn(&EntityId) -> EntityPlacement) -> Vec<Performer> {
        self.entities
            .iter()
            .map(|(id, entity)| Performer {
                id: id.clone(),
                position: resolve(id).position,
                color: entity.color.clone(),
                name: entity.name.clone(),
            })
            .collect()
    }

    /// Registers a new performer at the end of the registry.
    ///
    /// The performer starts without placements, so it resolves to the origin
    /// until placed.
    pub fn add_entity(&self, id: impl Into<EntityId>, entity: Entity) -> ProjectResult<Self> {
        let id = id.into();
        if self.entities.contains(&id) {
            return Err(ProjectError::DuplicateEntity(id));
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.entities).insert(id, entity);
        Ok(next)
    }

    /// Appends an empty formation.
    ///
    /// The new id is the smallest number, starting at the current formation
    /// count, whose decimal form is not taken. Durations are clamped as in
    /// [`Formation::new`].
    #[must_use]
    pub fn push_formation(
        &self,
        name: impl Into<String>,
        duration: f64,
        transition_duration: f64,
    ) -> Self {
        let taken: HashSet<&str> = self.formations.iter().map(|f| f.id().as_str()).collect();
        let mut n = self.formations.len();
        while taken.contains(n.to_string().as_str()) {
            n += 1;
        }
        let formation = Formation::new(n.to_string(), name, duration, transition_duration);
        tracing::debug!(id = %formation.id(), "pushing formation");

        let mut next = self.clone();
        next.formations.push(Arc::new(formation));
        next
    }

    /// Removes the formation at `index`. Out-of-range indices are ignored.
    #[must_use]
    pub fn remove_formation(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.formations.len() {
            let removed = next.formations.remove(index);
            tracing::debug!(id = %removed.id(), index, "removed formation");
        } else {
            tracing::debug!(index, "ignoring removal of out-of-range formation");
        }
        next
    }

    /// Sets the explicit placement of one performer in formation `index`.
    #[must_use]
    pub fn set_placement(&self, index: usize, id: &EntityId, placement: EntityPlacement) -> Self {
        self.update_formation(index, |formation| {
            formation.set_placement(id.clone(), placement);
        })
    }

    /// Adds or overwrites explicit placements in formation `index`, keeping
    /// the ones not mentioned.
    #[must_use]
    pub fn set_placements(
        &self,
        index: usize,
        placements: impl IntoIterator<Item = (EntityId, EntityPlacement)>,
    ) -> Self {
        self.update_formation(index, |formation| {
            for (id, placement) in placements {
                formation.set_placement(id, placement);
            }
        })
    }

    /// Rewrites formation `index` from the current resolved placements of all
    /// performers, then applies `positions` on top.
    ///
    /// Freezing first keeps performers that only inherited their position from
    /// a neighboring formation where they are when another subset is moved.
    #[must_use]
    pub fn set_positions(
        &self,
        index: usize,
        positions: impl IntoIterator<Item = (EntityId, Point)>,
    ) -> Self {
        if index >= self.formations.len() {
            tracing::debug!(index, "ignoring positions for out-of-range formation");
            return self.clone();
        }
        let mut frozen: BTreeMap<EntityId, EntityPlacement> =
            self.placements(index).into_iter().collect();
        for (id, position) in positions {
            frozen.insert(id, EntityPlacement::new(position));
        }
        self.update_formation(index, |formation| formation.replace_placements(frozen))
    }

    /// Replaces durations of the formations named in `times`.
    ///
    /// Formations not mentioned keep their timing and unknown ids are
    /// ignored. New values are clamped as in [`Formation::new`].
    #[must_use]
    pub fn update_formation_times(&self, times: impl IntoIterator<Item = FormationTime>) -> Self {
        let times: Vec<FormationTime> = times.into_iter().collect();
        let by_id: HashMap<&FormationId, &FormationTime> =
            times.iter().map(|t| (&t.id, t)).collect();

        let mut next = self.clone();
        let mut matched = 0;
        for formation in &mut next.formations {
            if let Some(time) = by_id.get(formation.id()) {
                Arc::make_mut(formation).set_times(time.duration, time.transition_duration);
                matched += 1;
            }
        }
        if matched < by_id.len() {
            tracing::debug!(
                ignored = by_id.len() - matched,
                "ignoring times for unknown formations"
            );
        }
        next
    }

    /// Merges `patch` into the attributes of performer `id`.
    ///
    /// An unknown id is registered with default attributes before the patch
    /// is applied.
    #[must_use]
    pub fn set_attributes(&self, id: &EntityId, patch: &EntityPatch) -> Self {
        let base = self.entities.get(id).cloned().unwrap_or_else(|| {
            tracing::debug!(%id, "setting attributes of an unregistered performer");
            Entity::default()
        });
        let mut next = self.clone();
        Arc::make_mut(&mut next.entities).upsert(id.clone(), base.merged(patch));
        next
    }

    /// Adds a performer the way the editor's "add performer" button does.
    ///
    /// An empty project first gets a basis formation. The new performer gets a
    /// fresh id, a generated color and a `"Performer N"` name, and is placed in
    /// the first formation next to the last performer of formation
    /// `current_index`. Returns the new project and the new id.
    #[must_use]
    pub fn add_performer(&self, current_index: usize) -> (Self, EntityId) {
        let mut next = if self.formations.is_empty() {
            self.push_formation(
                self.next_formation_name(),
                BASIS_FORMATION_DURATION,
                BASIS_TRANSITION_DURATION,
            )
        } else {
            self.clone()
        };

        let position = next
            .placements(current_index)
            .last()
            .map_or(Point::ORIGIN, |(_, p)| p.position + NEW_PERFORMER_OFFSET);

        let ordinal = next.entities.len();
        let id = EntityId::from(fresh_performer_id(ordinal + 1, |candidate| {
            next.entities.contains(&EntityId::from(candidate))
        }));
        let entity = Entity::new(performer_color(ordinal), next.next_performer_name());
        tracing::debug!(%id, name = %entity.name, "adding performer");

        Arc::make_mut(&mut next.entities).insert(id.clone(), entity);
        let next = next.set_placement(0, &id, EntityPlacement::new(position));
        (next, id)
    }

    fn update_formation(&self, index: usize, f: impl FnOnce(&mut Formation)) -> Self {
        let mut next = self.clone();
        match next.formations.get_mut(index) {
            Some(formation) => f(Arc::make_mut(formation)),
            None => tracing::debug!(index, "ignoring update of out-of-range formation"),
        }
        next
    }
}
