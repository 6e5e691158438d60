// SPDX-License-Identifier: MPL-2.0
//! Theme selection.
//!
//! The app uses Iced's built-in light and dark palettes with the brand color
//! as primary, so accents match the image placeholder.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detection errors fall back to dark
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Builds the Iced theme for this mode.
    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::custom(
                "Journal Strip Dark".to_string(),
                Palette {
                    primary: palette::BRAND_500,
                    ..Palette::DARK
                },
            )
        } else {
            Theme::custom(
                "Journal Strip Light".to_string(),
                Palette {
                    primary: palette::BRAND_700,
                    ..Palette::LIGHT
                },
            )
        }
    }
}
