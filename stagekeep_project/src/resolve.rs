// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution across neighboring formations.

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{EntityId, EntityPlacement, Formation};

/// Resolves the placement of `id` at `index`.
///
/// Lookup order: the formation itself, then earlier formations nearest first,
/// then later formations nearest first. Anything unresolved, including an
/// out-of-range `index`, is [`EntityPlacement::ORIGIN`].
pub(crate) fn placement_at(
    formations: &[Arc<Formation>],
    index: usize,
    id: &EntityId,
) -> EntityPlacement {
    let Some(formation) = formations.get(index) else {
        return EntityPlacement::ORIGIN;
    };
    if let Some(placement) = formation.placement(id) {
        return *placement;
    }
    let before = formations[..index].iter().rev();
    let after = formations[index + 1..].iter();
    before
        .chain(after)
        .find_map(|f| f.placement(id).copied())
        .unwrap_or(EntityPlacement::ORIGIN)
}

/// A performer's movement between two resolved placement lists.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionPath {
    /// Performer being moved.
    pub id: EntityId,
    /// Where the performer starts.
    pub from: EntityPlacement,
    /// Where the performer ends up.
    pub to: EntityPlacement,
}

/// Pairs up placements present in both `from` and `to`.
///
/// Output follows the order of `from`; ids missing from `to` are skipped.
/// The renderer uses this to draw the path each performer travels into the
/// next formation.
pub fn join_placements<'a, A, B>(from: A, to: B) -> Vec<TransitionPath>
where
    A: IntoIterator<Item = (&'a EntityId, &'a EntityPlacement)>,
    B: IntoIterator<Item = (&'a EntityId, &'a EntityPlacement)>,
{
    let destination: HashMap<&EntityId, &EntityPlacement> = to.into_iter().collect();
    from.into_iter()
        .filter_map(|(id, start)| {
            destination.get(id).map(|end| TransitionPath {
                id: id.clone(),
                from: *start,
                to: **end,
            })
        })
        .collect()
}
