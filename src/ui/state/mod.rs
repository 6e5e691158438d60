// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the UI state logic kept out of the gallery screen:
//! the wheel remapper and the tweens it drives.

pub mod scroll;
pub mod tween;

// Re-export commonly used types for convenience
pub use scroll::{ScrollRemapper, WheelOutcome};
pub use tween::{fade_in_opacity, is_fading, ScrollTween, FADE_IN};
