// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Content**: Contentful environment and content type

pub use crate::application::query::DEFAULT_CONTENT_TYPE;
pub use crate::infrastructure::contentful::{DEFAULT_ENVIRONMENT, DEFAULT_HOST};

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width. Wider than the mobile breakpoint, so the strip
/// starts horizontal.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Initial window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest window width accepted from the config file.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Smallest window height accepted from the config file.
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

// ==========================================================================
// Environment Variables
// ==========================================================================

/// Space id override.
pub const ENV_SPACE_ID: &str = "CONTENTFUL_SPACE_ID";

/// Access token override.
pub const ENV_ACCESS_TOKEN: &str = "CONTENTFUL_ACCESS_TOKEN";

/// Names used by the web deployment of the same gallery; read as fallbacks.
pub const ENV_SPACE_ID_FALLBACK: &str = "NEXT_PUBLIC_CONTENTFUL_SPACE_ID";
pub const ENV_ACCESS_TOKEN_FALLBACK: &str = "NEXT_PUBLIC_CONTENTFUL_ACCESS_TOKEN";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::MOBILE_BREAKPOINT_PX;

    #[test]
    fn default_window_opens_in_desktop_mode() {
        assert!(DEFAULT_WINDOW_WIDTH > MOBILE_BREAKPOINT_PX);
    }

    #[test]
    fn minimum_window_fits_inside_default() {
        assert!(MIN_WINDOW_WIDTH < DEFAULT_WINDOW_WIDTH);
        assert!(MIN_WINDOW_HEIGHT < DEFAULT_WINDOW_HEIGHT);
    }
}
