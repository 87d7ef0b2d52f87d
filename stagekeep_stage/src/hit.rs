// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and rectangle queries against resolved placements.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use stagekeep_project::{EntityId, EntityPlacement, PerformanceProject};

/// A performer found under the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageHit {
    /// The performer.
    pub id: EntityId,
    /// Formation the performer was found in.
    pub formation_index: usize,
}

/// Returns the first performer in `placements` closer than `radius` to `point`.
///
/// Ties go to list order, which is registry order for resolved placements.
#[must_use]
pub fn hit_test<'a>(
    placements: &'a [(EntityId, EntityPlacement)],
    point: Point,
    radius: f64,
) -> Option<&'a EntityId> {
    placements
        .iter()
        .find(|(_, placement)| placement.position.distance(point) < radius)
        .map(|(id, _)| id)
}

/// Hit-tests `current` (the placements shown for formation `index`), then the
/// previous formation, then the next one.
///
/// Clicking a performer ghosted in from a neighboring formation reports that
/// formation's index so the editor can switch to it.
#[must_use]
pub fn hit_test_with_neighbors(
    project: &PerformanceProject,
    index: usize,
    current: &[(EntityId, EntityPlacement)],
    point: Point,
    radius: f64,
) -> Option<StageHit> {
    if let Some(id) = hit_test(current, point, radius) {
        return Some(StageHit {
            id: id.clone(),
            formation_index: index,
        });
    }
    let neighbors = [index.checked_sub(1), index.checked_add(1)];
    neighbors
        .into_iter()
        .flatten()
        .filter(|&i| i < project.formation_count())
        .find_map(|i| {
            let placements = project.placements(i);
            hit_test(&placements, point, radius).map(|id| StageHit {
                id: id.clone(),
                formation_index: i,
            })
        })
}

/// Performers strictly inside `rect`, in list order.
///
/// Performers exactly on an edge are not selected.
#[must_use]
pub fn marquee_select(placements: &[(EntityId, EntityPlacement)], rect: Rect) -> Vec<EntityId> {
    let rect = rect.abs();
    placements
        .iter()
        .filter(|(_, placement)| {
            let p = placement.position;
            rect.x0 < p.x && p.x < rect.x1 && rect.y0 < p.y && p.y < rect.y1
        })
        .map(|(id, _)| id.clone())
        .collect()
}
