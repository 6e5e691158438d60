// SPDX-License-Identifier: MPL-2.0
//! Easing curves for time-based tweens.
//!
//! `Power2Out` follows the common "power" naming, where `Power2` is cubic.

/// Maps linear progress `t` in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed; used for image fade-in.
    Linear,
    /// Cubic ease-out; the curve used for wheel scrolling.
    #[default]
    Power2Out,
}

impl Easing {
    /// Applies the curve. Input outside `[0, 1]` is clamped.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}
