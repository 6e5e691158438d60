// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above the strip.
//!
//! The labels are static: there is a single screen, so none of them
//! navigate anywhere.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Row, Text},
    Element, Length,
};

/// Fluent keys of the navigation labels, in display order.
pub const NAV_KEYS: [&str; 3] = ["nav-home", "nav-gallery", "nav-about"];

/// Render the navigation bar.
pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let labels = NAV_KEYS.iter().fold(
        Row::new().spacing(spacing::LG).align_y(Vertical::Center),
        |row, key| row.push(Text::new(i18n.tr(key)).size(typography::BODY)),
    );

    let row = Row::new()
        .spacing(spacing::XL)
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("app-name")).size(typography::TITLE_MD))
        .push(labels);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}
