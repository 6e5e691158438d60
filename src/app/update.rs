// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::ui::gallery;
use crate::ui::notifications;
use iced::{Size, Task};

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
    pub window_size: &'a mut Size,
}

/// Entry point for every top-level message.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
    }
}

/// Forwards a message to the gallery and carries out its effect.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    if let gallery::Message::WindowResized(size) = &message {
        *ctx.window_size = *size;
    }

    let (effect, task) = ctx.gallery.handle_message(message);

    match effect {
        gallery::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
        }
        gallery::Effect::None => {}
    }

    task.map(Message::Gallery)
}
