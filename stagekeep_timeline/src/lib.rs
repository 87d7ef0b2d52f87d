// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagekeep Timeline: addressing and interaction for the formation timeline.
//!
//! The timeline shows formations end to end along a time axis, each as a hold
//! followed by a transition. This crate provides:
//! - [`TimelineState`] with [`time_of`] and [`current_formation_index`] to move
//!   between "formation N, some way through" and absolute time, and
//!   [`TimelineState::apply_event`] to follow what the user does on the
//!   timeline.
//! - [`is_in_boundary`], [`boundary_selection`], [`classify`] and
//!   [`apply_resize`] for dragging formation edges.
//! - [`ruler_ticks`] and [`format_timestamp`] for the ruler.
//! - [`TimelineInteraction`], the pointer state machine tying these together
//!   with a [`stagekeep_view2d::TimelineCamera`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use stagekeep_project::PerformanceProject;
//! use stagekeep_timeline::{TimelineEvent, TimelineInteraction};
//!
//! let project = PerformanceProject::new()
//!     .push_formation("A", 2_000.0, 1_000.0)
//!     .push_formation("B", 2_000.0, 1_000.0);
//!
//! let mut timeline = TimelineInteraction::default();
//! timeline.sync(&project);
//!
//! // Grab the end of formation A's hold (2 000 ms is 80 px at the default
//! // zoom) and drag it 20 px to the right.
//! timeline.pointer_down(Point::new(80.0, 60.0), &project, 0.0);
//! timeline.pointer_move(Point::new(100.0, 60.0), 0.0);
//! let events = timeline.pointer_up();
//!
//! let Some(TimelineEvent::FormationTimesChanged(times)) = events.first() else {
//!     panic!("expected a resize");
//! };
//! let project = project.update_formation_times(times.iter().cloned());
//! let a = project.formation(0).unwrap();
//! assert!((a.duration() - 2_500.0).abs() < 1e-6);
//! assert!((a.transition_duration() - 500.0).abs() < 1e-6);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! The minimum supported Rust version is 1.88.

#![no_std]

extern crate alloc;

mod boundary;
mod config;
mod interaction;
mod ruler;
mod state;

pub use boundary::{
    BoundarySelection, CursorRegion, ResizeSide, apply_resize, boundary_selection, classify,
    is_in_boundary,
};
pub use config::TimelineConfig;
pub use interaction::{SeekerState, TimelineEvent, TimelineEvents, TimelineInteraction};
pub use ruler::{RulerTick, TICK_SUBDIVISIONS, format_timestamp, ruler_ticks, tick_spacing_px};
pub use state::{
    FormationSpan, TimelineState, current_formation_index, formation_spans, formation_times,
    time_of,
};
