// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

/// Navigation bar over the strip, with toasts floating on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar::view(ctx.i18n))
        .push(
            Container::new(ctx.gallery.view(ctx.i18n).map(Message::Gallery))
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}
