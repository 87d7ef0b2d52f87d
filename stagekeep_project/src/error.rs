// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{EntityId, FormationId};

/// Convenience result type for the few fallible project operations.
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Errors raised when building or extending a [`crate::PerformanceProject`].
///
/// Most operations are total: out-of-range indices and degenerate durations
/// are normalized instead of reported. Only identity conflicts are errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    /// A performer with this id is already registered.
    #[error("entity `{0}` is already registered")]
    DuplicateEntity(EntityId),

    /// Two formations were given the same id.
    #[error("formation id `{0}` is used more than once")]
    DuplicateFormation(FormationId),
}
