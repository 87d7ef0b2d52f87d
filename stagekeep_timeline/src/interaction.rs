// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer handling for the timeline: seeking with the playhead handle and
//! resizing formations by dragging their edges.

use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;
use stagekeep_project::{FormationTime, PerformanceProject};
use stagekeep_view2d::{TimelineCamera, WheelInput};

use crate::{
    BoundarySelection, CursorRegion, TimelineConfig, apply_resize, boundary_selection, classify,
    formation_times, is_in_boundary,
};

/// Where a pointer drag on the timeline currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SeekerState {
    /// No drag in progress.
    #[default]
    Inactive,
    /// Dragging the playhead.
    Seeking {
        /// Absolute pixel offset (view X plus camera position) of the last
        /// processed pointer position.
        start: f64,
    },
    /// Dragging a formation edge.
    Resizing {
        /// Grabbed edge.
        selection: BoundarySelection,
        /// Absolute pixel offset of the last processed pointer position.
        start: f64,
    },
}

/// Notifications for the owner of the timeline.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineEvent {
    /// The user clicked inside a formation.
    FormationSelected(usize),
    /// The playhead was dragged to a new time, in milliseconds.
    Seeked(f64),
    /// The pointer was released; carries the time under the cursor.
    StoppedSeeking(f64),
    /// A resize drag finished; commit these with
    /// [`PerformanceProject::update_formation_times`].
    FormationTimesChanged(Vec<FormationTime>),
}

/// Events produced by one pointer event; rarely more than two.
pub type TimelineEvents = SmallVec<[TimelineEvent; 2]>;

/// The timeline scrubber: camera, drag state and a working copy of formation
/// times that resize drags edit before they are committed.
#[derive(Clone, Debug)]
pub struct TimelineInteraction {
    config: TimelineConfig,
    camera: TimelineCamera,
    state: SeekerState,
    times: Vec<FormationTime>,
    cursor: Option<Point>,
}

impl Default for TimelineInteraction {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl TimelineInteraction {
    /// Creates a scrubber showing the start of the performance.
    #[must_use]
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            camera: config.default_camera(),
            config,
            state: SeekerState::Inactive,
            times: Vec::new(),
            cursor: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &TimelineCamera {
        &self.camera
    }

    /// Returns the camera for direct manipulation.
    pub fn camera_mut(&mut self) -> &mut TimelineCamera {
        &mut self.camera
    }

    /// Returns the drag state.
    #[must_use]
    pub fn state(&self) -> SeekerState {
        self.state
    }

    /// Formation times to draw: the project's, or the in-progress resize.
    #[must_use]
    pub fn formation_times(&self) -> &[FormationTime] {
        &self.times
    }

    /// Replaces the working copy of formation times with the project's.
    ///
    /// Call whenever a new project snapshot arrives.
    pub fn sync(&mut self, project: &PerformanceProject) {
        self.times = formation_times(project);
    }

    /// Time under the last known pointer position.
    #[must_use]
    pub fn cursor_time(&self) -> Option<f64> {
        self.cursor.map(|p| self.camera.view_to_world_x(p.x))
    }

    /// What lies under the last known pointer position.
    #[must_use]
    pub fn cursor_region(&self) -> Option<CursorRegion> {
        let time = self.cursor_time()?;
        Some(classify(&self.times, time, self.window()))
    }

    /// Pixel X of the playhead on the drawing surface.
    #[must_use]
    pub fn playhead_x(&self, playhead: f64) -> f64 {
        self.camera.world_to_view_x(playhead)
    }

    /// Handles a pointer press at `pos`, in pixels relative to the drawing
    /// surface. `playhead` is the current playback time.
    pub fn pointer_down(
        &mut self,
        pos: Point,
        project: &PerformanceProject,
        playhead: f64,
    ) -> TimelineEvents {
        let mut events = TimelineEvents::new();
        self.cursor = Some(pos);
        let absolute = self.absolute_x(pos.x);
        let handle = playhead * self.camera.zoom().linear();

        if (absolute - handle).abs() < self.config.handle_px / 2.0
            && pos.y < self.config.handle_height_px
        {
            tracing::trace!(absolute, "timeline: seeking");
            self.state = SeekerState::Seeking { start: absolute };
            return events;
        }

        let time = self.camera.view_to_world_x(pos.x);
        if let Some((index, _)) = project.formation_at_time(time) {
            events.push(TimelineEvent::FormationSelected(index));
        }

        let window = self.window();
        if is_in_boundary(&self.times, time, window)
            && let Some(selection) = boundary_selection(&self.times, time, window)
        {
            tracing::trace!(?selection, "timeline: resizing");
            self.state = SeekerState::Resizing {
                selection,
                start: absolute,
            };
        }
        events
    }

    /// Handles pointer movement. Repeated positions are ignored.
    pub fn pointer_move(&mut self, pos: Point, playhead: f64) -> TimelineEvents {
        let mut events = TimelineEvents::new();
        if self.cursor == Some(pos) {
            return events;
        }
        self.cursor = Some(pos);
        let absolute = self.absolute_x(pos.x);
        let zoom = self.camera.zoom().linear();

        match &mut self.state {
            SeekerState::Inactive => {}
            SeekerState::Seeking { start } => {
                events.push(TimelineEvent::Seeked((absolute - *start) / zoom + playhead));
                *start = absolute;
            }
            SeekerState::Resizing { selection, start } => {
                self.times = apply_resize(&self.times, *selection, (absolute - *start) / zoom);
                *start = absolute;
            }
        }
        events
    }

    /// Handles a pointer release anywhere, ending any drag.
    ///
    /// A finished resize reports the edited times. The time under the cursor
    /// is reported whenever the pointer position is known.
    pub fn pointer_up(&mut self) -> TimelineEvents {
        let mut events = TimelineEvents::new();
        if matches!(self.state, SeekerState::Resizing { .. }) {
            events.push(TimelineEvent::FormationTimesChanged(self.times.clone()));
        }
        self.state = SeekerState::Inactive;
        if let Some(time) = self.cursor_time() {
            events.push(TimelineEvent::StoppedSeeking(time));
        }
        tracing::trace!("timeline: inactive");
        events
    }

    /// Zooms about the pointer with the modifier held, otherwise pans.
    pub fn wheel(&mut self, wheel: WheelInput) {
        let anchor = self.cursor.map_or(0.0, |p| p.x);
        self.camera
            .apply_wheel(wheel, anchor, self.config.wheel_zoom_sensitivity);
    }

    fn absolute_x(&self, x: f64) -> f64 {
        x + self.camera.position()
    }

    fn window(&self) -> f64 {
        self.config.scaled_boundary(&self.camera)
    }
}
