// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer handling for the stage: click to select, drag to move, drag on
//! blank space to marquee-select.

use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect, Size};
use stagekeep_project::{EntityId, EntityPlacement, PerformanceProject, Performer};
use stagekeep_view2d::{StageCamera, WheelInput};

use crate::drag::DragState;
use crate::{PerformerSelection, StageConfig, hit_test_with_neighbors, marquee_select};

/// What a pointer press landed on.
#[derive(Clone, Debug, PartialEq)]
pub enum PressTarget {
    /// A performer.
    Item {
        /// The pressed performer.
        id: EntityId,
        /// Whether it was selected before the press. Releasing without moving
        /// deselects a performer that already was selected.
        was_previously_selected: bool,
    },
    /// Empty stage; dragging draws a marquee from `start`.
    BlankSpace {
        /// Press position in view pixels.
        start: Point,
    },
}

/// Pointer state of the stage editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MouseState {
    /// No button held.
    #[default]
    Nothing,
    /// Button held since a press on `target`.
    MouseDown {
        /// What the press landed on.
        target: PressTarget,
        /// Whether the pointer moved since the press.
        has_moved: bool,
    },
}

/// The stage editor: camera, selection, pointer state and a preview of the
/// current formation's placements that drags edit before they are committed.
#[derive(Clone, Debug)]
pub struct StageInteraction {
    config: StageConfig,
    camera: StageCamera,
    viewport: Size,
    state: MouseState,
    selection: PerformerSelection,
    formation_index: usize,
    placements: Vec<(EntityId, EntityPlacement)>,
    drag: DragState,
    cursor: Option<Point>,
}

impl Default for StageInteraction {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}

impl StageInteraction {
    /// Creates an editor with the default camera and an empty preview.
    #[must_use]
    pub fn new(config: StageConfig) -> Self {
        Self {
            config,
            camera: StageCamera::default(),
            viewport: Size::new(1.0, 1.0),
            state: MouseState::Nothing,
            selection: PerformerSelection::new(),
            formation_index: 0,
            placements: Vec::new(),
            drag: DragState::default(),
            cursor: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &StageCamera {
        &self.camera
    }

    /// Returns the camera for direct manipulation.
    pub fn camera_mut(&mut self) -> &mut StageCamera {
        &mut self.camera
    }

    /// Size of the drawing surface in pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the size of the drawing surface in pixels.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns the pointer state.
    #[must_use]
    pub fn state(&self) -> &MouseState {
        &self.state
    }

    /// Returns the selection.
    #[must_use]
    pub fn selection(&self) -> &PerformerSelection {
        &self.selection
    }

    /// Returns the selection for direct manipulation.
    pub fn selection_mut(&mut self) -> &mut PerformerSelection {
        &mut self.selection
    }

    /// Formation being edited.
    #[must_use]
    pub fn formation_index(&self) -> usize {
        self.formation_index
    }

    /// Placements to draw, including any uncommitted drag.
    #[must_use]
    pub fn placements(&self) -> &[(EntityId, EntityPlacement)] {
        &self.placements
    }

    /// Shows formation `index` of `project`, discarding any uncommitted drag.
    pub fn sync(&mut self, project: &PerformanceProject, index: usize) {
        self.formation_index = index;
        self.placements = project.placements(index);
    }

    /// Render snapshot combining the preview positions with the attributes
    /// stored in `project`.
    #[must_use]
    pub fn performers(&self, project: &PerformanceProject) -> Vec<Performer> {
        self.placements
            .iter()
            .map(|(id, placement)| {
                let entity = project.entity(id).cloned().unwrap_or_default();
                Performer {
                    id: id.clone(),
                    position: placement.position,
                    color: entity.color,
                    name: entity.name,
                }
            })
            .collect()
    }

    /// World position under the last known pointer position.
    #[must_use]
    pub fn cursor_world(&self) -> Option<Point> {
        self.cursor
            .map(|p| self.camera.view_to_world_point(p, self.viewport))
    }

    /// Marquee to draw, in view pixels, while a blank-space drag is active.
    #[must_use]
    pub fn marquee_rect(&self) -> Option<Rect> {
        match (&self.state, self.cursor) {
            (
                MouseState::MouseDown {
                    target: PressTarget::BlankSpace { start },
                    has_moved: true,
                },
                Some(cursor),
            ) => Some(Rect::from_points(*start, cursor)),
            _ => None,
        }
    }

    /// Handles a pointer press at `pos`, in pixels relative to the drawing
    /// surface.
    ///
    /// Returns the new formation index when the press grabbed a performer
    /// shown from a neighboring formation; the editor has then switched to it.
    pub fn pointer_down(&mut self, pos: Point, project: &PerformanceProject) -> Option<usize> {
        self.cursor = Some(pos);
        self.drag.start(pos);
        let world = self.camera.view_to_world_point(pos, self.viewport);

        let Some(hit) = hit_test_with_neighbors(
            project,
            self.formation_index,
            &self.placements,
            world,
            self.config.entity_radius,
        ) else {
            self.selection.clear();
            self.state = MouseState::MouseDown {
                target: PressTarget::BlankSpace { start: pos },
                has_moved: false,
            };
            tracing::trace!("stage: pressed blank space");
            return None;
        };

        let was_previously_selected = self.selection.contains(&hit.id);
        self.selection.add(hit.id.clone());
        tracing::trace!(id = %hit.id, was_previously_selected, "stage: pressed performer");
        self.state = MouseState::MouseDown {
            target: PressTarget::Item {
                id: hit.id,
                was_previously_selected,
            },
            has_moved: false,
        };

        if hit.formation_index == self.formation_index {
            return None;
        }
        self.sync(project, hit.formation_index);
        Some(hit.formation_index)
    }

    /// Handles pointer movement. Repeated positions are ignored.
    pub fn pointer_move(&mut self, pos: Point) {
        if self.cursor == Some(pos) {
            return;
        }
        self.cursor = Some(pos);
        let delta = self.drag.update(pos).unwrap_or_default();

        let MouseState::MouseDown { target, has_moved } = &mut self.state else {
            return;
        };
        *has_moved = true;

        match target {
            PressTarget::BlankSpace { start } => {
                let rect = self.camera.view_to_world_rect(*start, pos, self.viewport);
                self.selection
                    .replace_with(marquee_select(&self.placements, rect));
            }
            PressTarget::Item {
                id,
                was_previously_selected,
            } => {
                let world_delta = self.camera.view_delta_to_world(delta);
                if *was_previously_selected {
                    for (key, placement) in &mut self.placements {
                        if self.selection.contains(key) {
                            placement.position += world_delta;
                        }
                    }
                } else {
                    self.selection.select_only(id.clone());
                    for (key, placement) in &mut self.placements {
                        if key == id {
                            placement.position += world_delta;
                        }
                    }
                }
            }
        }
    }

    /// Handles a pointer release anywhere, ending any drag.
    ///
    /// Returns the updated project when performers were dragged. A release
    /// without movement on a performer that was already selected deselects
    /// it. A release without a press does nothing.
    pub fn pointer_up(&mut self, project: &PerformanceProject) -> Option<PerformanceProject> {
        self.drag.end();
        let MouseState::MouseDown { target, has_moved } = mem::take(&mut self.state) else {
            return None;
        };
        tracing::trace!(has_moved, "stage: released");

        match (target, has_moved) {
            (PressTarget::Item { .. }, true) => {
                let positions = self
                    .placements
                    .iter()
                    .map(|(id, placement)| (id.clone(), placement.position));
                let committed = project.set_positions(self.formation_index, positions);
                self.sync(&committed, self.formation_index);
                Some(committed)
            }
            (
                PressTarget::Item {
                    id,
                    was_previously_selected: true,
                },
                false,
            ) => {
                self.selection.remove(&id);
                None
            }
            _ => None,
        }
    }

    /// Zooms about the pointer with the modifier held, otherwise pans.
    pub fn wheel(&mut self, wheel: WheelInput) {
        let anchor = self
            .cursor
            .unwrap_or_else(|| (self.viewport.to_vec2() / 2.0).to_point());
        self.camera.apply_wheel(
            wheel,
            anchor,
            self.viewport,
            self.config.wheel_zoom_sensitivity,
        );
    }
}
