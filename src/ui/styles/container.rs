// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Top navigation bar. Follows the theme background with a hairline
/// separator tone.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Frame around one strip image while it has no pixels of its own.
pub fn image_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_500)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast card with a severity accent border.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Muted text color for captions and empty state hints.
#[must_use]
pub fn muted_text(theme: &Theme) -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..theme.palette().text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_uses_accent_for_border() {
        let style = toast(&Theme::Dark, palette::WARNING_500);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn image_frame_is_brand_colored() {
        let style = image_frame(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::BRAND_500))
        );
    }

    #[test]
    fn muted_text_keeps_theme_hue() {
        let theme = Theme::Light;
        let muted = muted_text(&theme);
        assert_eq!(muted.r, theme.palette().text.r);
        assert!(muted.a < 1.0);
    }
}
