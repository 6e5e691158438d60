// SPDX-License-Identifier: MPL-2.0
//! Wheel input normalized to pixels.

/// Pixels scrolled per wheel "line", matching Iced's scrollable.
pub const PIXELS_PER_LINE: f32 = 60.0;

/// A wheel event in pixels.
///
/// Positive values point towards the end of the content (down / right),
/// which is the opposite of Iced's `ScrollDelta` sign.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub delta_x: f32,
    pub delta_y: f32,
}

impl WheelDelta {
    #[must_use]
    pub fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y }
    }

    /// Builds a delta from a pixel-precise device (touchpad).
    #[must_use]
    pub fn from_pixels(x: f32, y: f32) -> Self {
        Self::new(-x, -y)
    }

    /// Builds a delta from a line-based device (mouse wheel notches).
    #[must_use]
    pub fn from_lines(x: f32, y: f32) -> Self {
        Self::new(-x * PIXELS_PER_LINE, -y * PIXELS_PER_LINE)
    }

    /// The driving delta: vertical if non-zero, otherwise horizontal.
    #[must_use]
    pub fn primary(self) -> f32 {
        if self.delta_y != 0.0 {
            self.delta_y
        } else {
            self.delta_x
        }
    }
}
