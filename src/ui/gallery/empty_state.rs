// SPDX-License-Identifier: MPL-2.0
//! Shown in place of the strip when there is nothing to render.

use super::component::{LoadStatus, Message};
use crate::application::port::ContentError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Fluent keys for the headline and hint of each status.
fn message_keys(status: &LoadStatus) -> (&'static str, Option<&'static str>) {
    match status {
        LoadStatus::Loading => ("gallery-loading", None),
        LoadStatus::Loaded => ("gallery-empty", None),
        LoadStatus::Failed(error) => ("gallery-failed", Some(error.i18n_key())),
    }
}

pub fn view<'a>(status: &LoadStatus, i18n: &'a I18n) -> Element<'a, Message> {
    let (headline_key, hint_key) = message_keys(status);

    let mut content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr(headline_key)).size(typography::TITLE_SM));

    if let Some(key) = hint_key {
        let hint = match status {
            LoadStatus::Failed(ContentError::Http { status }) => {
                i18n.tr_with_args(key, &[("status", status.to_string().as_str())])
            }
            _ => i18n.tr(key),
        };
        content = content.push(Text::new(hint).size(typography::BODY).style(
            |theme: &Theme| text::Style {
                color: Some(styles::container::muted_text(theme)),
            },
        ));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_its_own_headline() {
        assert_eq!(message_keys(&LoadStatus::Loading).0, "gallery-loading");
        assert_eq!(message_keys(&LoadStatus::Loaded).0, "gallery-empty");
        assert_eq!(
            message_keys(&LoadStatus::Failed(ContentError::MissingCredentials)).0,
            "gallery-failed"
        );
    }

    #[test]
    fn failure_hint_names_the_cause() {
        let (_, hint) = message_keys(&LoadStatus::Failed(ContentError::Http { status: 500 }));
        assert_eq!(hint, Some("notification-content-http-error"));
        assert_eq!(message_keys(&LoadStatus::Loading).1, None);
    }
}
