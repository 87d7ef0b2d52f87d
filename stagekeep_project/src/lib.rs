// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagekeep Project: the performance model behind the formation editor.
//!
//! A [`PerformanceProject`] is an ordered list of [`Formation`]s plus a
//! registry of performers. Each formation holds for its `duration` and then
//! transitions into the next one over its `transition_duration`, both in
//! milliseconds. A formation only needs to place the performers that moved:
//! everybody else is resolved from neighboring formations.
//!
//! Projects are immutable values. Every update returns a new project and
//! leaves the receiver untouched, which makes snapshots cheap to hand to a
//! renderer while the user keeps editing.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use stagekeep_project::{Entity, EntityId, EntityPlacement, PerformanceProject};
//!
//! let dancer = EntityId::from("1");
//! let project = PerformanceProject::new()
//!     .push_formation("Opening", 2_000.0, 1_000.0)
//!     .push_formation("Finale", 2_000.0, 1_000.0)
//!     .add_entity(dancer.clone(), Entity::new("red", "Dancer"))?
//!     .set_placement(0, &dancer, EntityPlacement::new(Point::new(0.0, 0.0)))
//!     .set_placement(1, &dancer, EntityPlacement::new(Point::new(100.0, 0.0)));
//!
//! // Holding still during the first formation.
//! assert_eq!(project.placement_at_time(1_000.0, &dancer).position, Point::new(0.0, 0.0));
//! // Halfway through the transition.
//! assert_eq!(project.placement_at_time(2_500.0, &dancer).position, Point::new(50.0, 0.0));
//! // The last transition is not part of the performance length.
//! assert_eq!(project.total_time(), 5_000.0);
//! # Ok::<(), stagekeep_project::ProjectError>(())
//! ```
//!
//! ## Placement resolution
//!
//! [`PerformanceProject::placement_at`] returns a performer's explicit
//! placement in a formation if there is one. Otherwise the performer stays
//! where the nearest earlier formation put it, or, if no earlier formation
//! places it, waits at the position the nearest later formation gives it.
//! Performers that are never placed stand at the origin.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! The minimum supported Rust version is 1.88.

#![no_std]

extern crate alloc;

mod entity;
mod error;
mod formation;
mod ids;
mod interpolate;
mod naming;
mod project;
mod resolve;

pub use entity::{Entity, EntityPatch, EntityRegistry, Performer};
pub use error::{ProjectError, ProjectResult};
pub use formation::{EntityPlacement, Formation, FormationTime, MIN_TRANSITION_DURATION};
pub use ids::{EntityId, FormationId};
pub use interpolate::{InterpolationOptions, TrailingTransition};
pub use project::{
    BASIS_FORMATION_DURATION, BASIS_TRANSITION_DURATION, NEW_PERFORMER_OFFSET, PerformanceProject,
};
pub use resolve::{TransitionPath, join_placements};
