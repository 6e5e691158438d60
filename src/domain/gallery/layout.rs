// SPDX-License-Identifier: MPL-2.0
//! Layout mode classification.

/// Widths at or below this value use the stacked mobile layout.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// How the strip is laid out for the current window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Horizontal strip; the wheel drives eased horizontal scrolling.
    #[default]
    Desktop,
    /// Vertically stacked blocks with native wheel scrolling.
    Mobile,
}

impl LayoutMode {
    /// Classifies a viewport width. The breakpoint itself counts as mobile.
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width <= MOBILE_BREAKPOINT_PX {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    #[must_use]
    pub fn is_desktop(self) -> bool {
        matches!(self, LayoutMode::Desktop)
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }
}
