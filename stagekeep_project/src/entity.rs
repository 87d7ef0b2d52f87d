// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::EntityId;

/// Display attributes of a performer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    /// Any CSS-style color string understood by the renderer.
    pub color: String,
    /// Human readable name; the renderer shows its first letter.
    pub name: String,
}

impl Entity {
    /// Creates a performer with the given color and name.
    #[must_use]
    pub fn new(color: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            name: name.into(),
        }
    }

    /// Returns a copy with every field present in `patch` replaced.
    #[must_use]
    pub fn merged(&self, patch: &EntityPatch) -> Self {
        Self {
            color: patch.color.clone().unwrap_or_else(|| self.color.clone()),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
        }
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new("black", "")
    }
}

/// A partial update of [`Entity`] attributes; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityPatch {
    /// New color, if any.
    pub color: Option<String>,
    /// New name, if any.
    pub name: Option<String>,
}

impl EntityPatch {
    /// Sets the color field of the patch.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the name field of the patch.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Insertion-ordered registry of performers.
///
/// Order matters: it is the order placements are listed in, the order the
/// stage hit-tests in, and (reversed) the order the renderer paints in. The
/// registry is small (tens of performers), so lookups scan linearly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    entries: Vec<(EntityId, Entity)>,
}

impl EntityRegistry {
    /// Returns the number of registered performers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no performers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns the attributes of `id`, if registered.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.position_of(id).map(|idx| &self.entries[idx].1)
    }

    /// Iterates over `(id, entity)` pairs in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&EntityId, &Entity)> + '_ {
        self.entries.iter().map(|(id, entity)| (id, entity))
    }

    /// Iterates over ids in registration order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &EntityId> + '_ {
        self.entries.iter().map(|(id, _)| id)
    }

    /// Appends a performer. Returns `false` and leaves the registry untouched
    /// when the id is taken.
    pub(crate) fn insert(&mut self, id: EntityId, entity: Entity) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.entries.push((id, entity));
        true
    }

    /// Replaces the attributes of `id`, appending it when missing.
    pub(crate) fn upsert(&mut self, id: EntityId, entity: Entity) {
        match self.position_of(&id) {
            Some(idx) => self.entries[idx].1 = entity,
            None => self.entries.push((id, entity)),
        }
    }

    fn position_of(&self, id: &EntityId) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == id)
    }
}

/// A performer as the renderer sees it at one instant: resolved position plus
/// display attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Performer {
    /// Performer id.
    pub id: EntityId,
    /// Resolved world-space position.
    pub position: Point,
    /// Display color.
    pub color: String,
    /// Display name.
    pub name: String,
}
