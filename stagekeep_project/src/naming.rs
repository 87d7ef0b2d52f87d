// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generated names, ids and colors for newly created items.

use alloc::format;
use alloc::string::String;

/// Returns `"{prefix} N"` where `N` is one more than the largest number used
/// by any name of exactly that shape.
///
/// Names such as `"Formation 2b"` or `"formation 3"` do not count.
pub(crate) fn next_numbered_name<'a>(prefix: &str, names: impl IntoIterator<Item = &'a str>) -> String {
    let latest = names
        .into_iter()
        .filter_map(|name| numbered_suffix(prefix, name))
        .max()
        .unwrap_or(0);
    format!("{prefix} {}", latest.saturating_add(1))
}

fn numbered_suffix(prefix: &str, name: &str) -> Option<u64> {
    let digits = name.strip_prefix(prefix)?.strip_prefix(' ')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Spreads hues around the color wheel with the golden angle so that
/// consecutive performers get clearly different colors.
pub(crate) fn performer_color(ordinal: usize) -> String {
    const GOLDEN_ANGLE: f64 = 137.507_764_050_037_85;
    let hue = (ordinal as f64 * GOLDEN_ANGLE) % 360.0;
    format!("hsl({hue:.0}, 50%, 50%)")
}

/// First `"performer-N"` id, counting from `start`, for which `taken` is false.
pub(crate) fn fresh_performer_id(start: usize, taken: impl Fn(&str) -> bool) -> String {
    let mut n = start;
    loop {
        let candidate = format!("performer-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
