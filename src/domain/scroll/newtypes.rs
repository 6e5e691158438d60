// SPDX-License-Identifier: MPL-2.0
//! Scroll newtypes.
//!
//! Type-safe wrappers for scroll tuning values, always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Wheel sensitivity bounds.
pub mod sensitivity_bounds {
    /// Multiplier applied to wheel deltas when remapping to horizontal scroll.
    pub const DEFAULT: f32 = 6.5;
}

/// Tween duration bounds in milliseconds.
pub mod duration_bounds {
    /// Minimum duration.
    pub const MIN_MS: u64 = 1;
    /// Maximum duration.
    pub const MAX_MS: u64 = 5_000;
    /// Duration of a wheel-driven scroll tween.
    pub const DEFAULT_MS: u64 = 800;
}

// =============================================================================
// ScrollSensitivity
// =============================================================================

/// Multiplier from wheel delta to scroll distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSensitivity(f32);

impl ScrollSensitivity {
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ScrollSensitivity {
    fn default() -> Self {
        Self(sensitivity_bounds::DEFAULT)
    }
}

// =============================================================================
// TweenDuration
// =============================================================================

/// Length of a scroll tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenDuration(Duration);

impl TweenDuration {
    /// Creates a duration from milliseconds, clamped to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(
            ms.clamp(duration_bounds::MIN_MS, duration_bounds::MAX_MS),
        ))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for TweenDuration {
    fn default() -> Self {
        Self::from_millis(duration_bounds::DEFAULT_MS)
    }
}
