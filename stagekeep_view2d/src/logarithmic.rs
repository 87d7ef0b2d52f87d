// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A positive scalar stored in the log domain.
///
/// Zoom factors are kept as `L` with `linear = e^L`. Adding a constant in log
/// space multiplies the linear value by a constant, so repeated wheel steps
/// feel uniform at every zoom level.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LogarithmicValue {
    logarithmic: f64,
}

impl LogarithmicValue {
    /// Creates a value from its log-domain representation.
    #[must_use]
    pub const fn from_logarithmic(logarithmic: f64) -> Self {
        Self { logarithmic }
    }

    /// Creates a value from a linear multiplier.
    ///
    /// Non-positive inputs have no logarithm; they are raised to
    /// [`f64::MIN_POSITIVE`] so the result stays finite.
    #[must_use]
    pub fn from_linear(linear: f64) -> Self {
        Self {
            logarithmic: linear.max(f64::MIN_POSITIVE).ln(),
        }
    }

    /// Returns the log-domain scalar.
    #[must_use]
    pub const fn logarithmic(self) -> f64 {
        self.logarithmic
    }

    /// Returns the linear multiplier, `e^L`.
    #[must_use]
    pub fn linear(self) -> f64 {
        exp(self.logarithmic)
    }

    /// Returns a new value offset by `delta` in log space.
    #[must_use]
    pub fn add_logarithmic(self, delta: f64) -> Self {
        Self::from_logarithmic(self.logarithmic + delta)
    }
}

impl Default for LogarithmicValue {
    /// A linear multiplier of `1.0`.
    fn default() -> Self {
        Self::from_logarithmic(0.0)
    }
}

#[cfg(feature = "std")]
fn exp(x: f64) -> f64 {
    x.exp()
}

// `FloatFuncs` has no `exp`.
#[cfg(not(feature = "std"))]
fn exp(x: f64) -> f64 {
    core::f64::consts::E.powf(x)
}
