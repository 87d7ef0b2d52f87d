// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for the stage editor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageConfig {
    /// Radius of a performer's marker in world units; pointer presses closer
    /// than this to a performer grab it.
    pub entity_radius: f64,
    /// Log-space zoom change per wheel delta unit.
    pub wheel_zoom_sensitivity: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            entity_radius: 10.0,
            wheel_zoom_sensitivity: 0.01,
        }
    }
}
