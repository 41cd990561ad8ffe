// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Grid cell size for snapped placement, in logical units.
pub const GRID_SIZE: f64 = 20.0;

/// How interactive placement rounds coordinates.
///
/// Snapping applies to the result of `anchor + delta`, never to the raw
/// pointer position, so the grab offset between cursor and position stays
/// stable across a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SnapMode {
    /// Round to the nearest multiple of [`GRID_SIZE`].
    #[default]
    Grid,
    /// Round to the nearest whole logical unit.
    Free,
}

impl SnapMode {
    /// Rounds `value` according to the mode.
    #[must_use]
    pub fn snap(self, value: f64) -> f64 {
        match self {
            Self::Grid => round(value / GRID_SIZE) * GRID_SIZE,
            Self::Free => round(value),
        }
    }
}

// `f64::round` is std-only; no_std builds route through libm, mirroring how
// Kurbo gates its own float functions.
#[cfg(feature = "std")]
#[inline]
fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(not(feature = "std"))]
#[inline]
fn round(value: f64) -> f64 {
    libm::round(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mode_rounds_to_the_nearest_cell() {
        assert_eq!(SnapMode::Grid.snap(0.0), 0.0);
        assert_eq!(SnapMode::Grid.snap(9.9), 0.0);
        assert_eq!(SnapMode::Grid.snap(10.0), 20.0);
        assert_eq!(SnapMode::Grid.snap(47.0), 40.0);
        assert_eq!(SnapMode::Grid.snap(-13.0), -20.0);
    }

    #[test]
    fn free_mode_rounds_to_whole_units() {
        assert_eq!(SnapMode::Free.snap(47.4), 47.0);
        assert_eq!(SnapMode::Free.snap(47.5), 48.0);
        assert_eq!(SnapMode::Free.snap(-3.6), -4.0);
    }

    #[test]
    fn snapping_is_idempotent() {
        for mode in [SnapMode::Grid, SnapMode::Free] {
            for value in [-250.0, -13.0, 0.0, 9.9, 10.0, 33.3, 47.5, 812.7] {
                let once = mode.snap(value);
                assert_eq!(mode.snap(once), once);
            }
        }
    }
}
