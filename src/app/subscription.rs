// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Wheel input does not go through here: the desktop strip captures it with
//! its own widget. Subscriptions only cover window size changes and the
//! frame and timer ticks, each present only while something needs it.

use super::Message;
use crate::ui::gallery;
use crate::ui::notifications::NotificationMessage;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval while the strip tween or an image fade runs.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval for notification auto-dismiss.
pub const NOTIFICATION_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window open and resize events to the gallery's layout detector.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::Gallery(gallery::Message::WindowResized(size)))
        }
        _ => None,
    })
}

/// Creates the frame tick subscription while the gallery animates.
pub fn create_frame_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(|now| Message::Gallery(gallery::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}

/// Creates the notification timer while a toast can still expire on its own.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(NOTIFICATION_INTERVAL)
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
