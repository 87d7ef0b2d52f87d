// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of selected performers.

use alloc::vec::Vec;
use core::slice;

use stagekeep_project::EntityId;

/// Selected performers, in the order they were selected.
///
/// Every change bumps [`revision`](Self::revision), so a renderer can tell
/// whether its cached highlight state is stale with a single comparison.
/// Operations that leave the contents unchanged do not bump it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerformerSelection {
    ids: Vec<EntityId>,
    revision: u64,
}

impl PerformerSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of selected performers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    /// Iterates over selected ids.
    pub fn iter(&self) -> slice::Iter<'_, EntityId> {
        self.ids.iter()
    }

    /// Change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    /// Adds `id`, keeping the rest of the selection.
    pub fn add(&mut self, id: EntityId) {
        if !self.contains(&id) {
            self.ids.push(id);
            self.bump();
        }
    }

    /// Removes `id`. Returns `true` if it was selected.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let Some(index) = self.ids.iter().position(|k| k == id) else {
            return false;
        };
        self.ids.remove(index);
        self.bump();
        true
    }

    /// Adds `id` if absent, removes it otherwise.
    pub fn toggle(&mut self, id: EntityId) {
        if !self.remove(&id) {
            self.add(id);
        }
    }

    /// Replaces the selection with just `id`.
    pub fn select_only(&mut self, id: EntityId) {
        if self.ids.len() == 1 && self.ids[0] == id {
            return;
        }
        self.ids.clear();
        self.ids.push(id);
        self.bump();
    }

    /// Replaces the selection with `ids`, dropping duplicates.
    pub fn replace_with(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        let mut next: Vec<EntityId> = Vec::new();
        for id in ids {
            if !next.contains(&id) {
                next.push(id);
            }
        }
        if next != self.ids {
            self.ids = next;
            self.bump();
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if !self.ids.is_empty() {
            self.ids.clear();
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a> IntoIterator for &'a PerformerSelection {
    type Item = &'a EntityId;
    type IntoIter = slice::Iter<'a, EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
