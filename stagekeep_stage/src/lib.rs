// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagekeep Stage: selecting and moving performers on the stage.
//!
//! [`StageInteraction`] turns pointer events, given in pixels relative to the
//! drawing surface, into selection changes and committed project updates:
//! - Pressing a performer adds it to the selection. Dragging it moves the
//!   whole selection if it was already selected, or just that performer
//!   otherwise. Pressing and releasing an already-selected performer without
//!   moving deselects it.
//! - Pressing empty stage clears the selection; dragging then selects every
//!   performer strictly inside the marquee.
//! - Performers of the neighboring formations can be grabbed too, which
//!   switches the editor to that formation.
//!
//! Drags only edit a preview of the current formation. The release returns
//! the new project, built with [`PerformanceProject::set_positions`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use stagekeep_project::{Entity, EntityId, EntityPlacement, PerformanceProject};
//! use stagekeep_stage::StageInteraction;
//!
//! let dancer = EntityId::from("1");
//! let project = PerformanceProject::new()
//!     .push_formation("A", 2_000.0, 1_000.0)
//!     .add_entity(dancer.clone(), Entity::new("red", "D"))?
//!     .set_placement(0, &dancer, EntityPlacement::ORIGIN);
//!
//! let mut stage = StageInteraction::default();
//! stage.set_viewport(Size::new(800.0, 600.0));
//! stage.sync(&project, 0);
//!
//! // The world origin is at the center of the surface.
//! stage.pointer_down(Point::new(400.0, 300.0), &project);
//! assert!(stage.selection().contains(&dancer));
//!
//! stage.pointer_move(Point::new(420.0, 300.0));
//! let project = stage.pointer_up(&project).expect("dragged");
//! assert!(project.placement_at(0, &dancer).position.x > 0.0);
//! # Ok::<(), stagekeep_project::ProjectError>(())
//! ```
//!
//! [`PerformanceProject::set_positions`]: stagekeep_project::PerformanceProject::set_positions
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! The minimum supported Rust version is 1.88.

#![no_std]

extern crate alloc;

mod config;
mod drag;
mod hit;
mod interaction;
mod selection;

pub use config::StageConfig;
pub use hit::{StageHit, hit_test, hit_test_with_neighbors, marquee_select};
pub use interaction::{MouseState, PressTarget, StageInteraction};
pub use selection::PerformerSelection;
