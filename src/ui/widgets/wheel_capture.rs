// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that takes wheel input away from the scrollable it wraps.
//!
//! Wheel events over the wrapped content never reach it; they are captured and
//! reported through `on_wheel` instead, so the gallery can drive the offset
//! itself. All other events pass through untouched.

use crate::domain::scroll::WheelDelta;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Wraps content and turns wheel events over it into messages.
pub struct WheelCapture<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_wheel: Box<dyn Fn(WheelDelta) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> WheelCapture<'a, Message, Theme, Renderer> {
    /// Creates a new `WheelCapture` around `content`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_wheel: impl Fn(WheelDelta) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_wheel: Box::new(on_wheel),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for WheelCapture<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(delta) = wheel_delta(event) {
            // Wheel never reaches the content, even outside the bounds.
            if cursor.is_over(layout.bounds()) {
                shell.publish((self.on_wheel)(delta));
                shell.capture_event();
            }
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<WheelCapture<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: WheelCapture<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a wheel-capturing wrapper.
pub fn wheel_capture<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_wheel: impl Fn(WheelDelta) -> Message + 'a,
) -> WheelCapture<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    WheelCapture::new(content, on_wheel)
}

/// Converts an Iced wheel event into a browser-convention [`WheelDelta`].
pub fn wheel_delta(event: &Event) -> Option<WheelDelta> {
    match event {
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => Some(match *delta {
            mouse::ScrollDelta::Lines { x, y } => WheelDelta::from_lines(x, y),
            mouse::ScrollDelta::Pixels { x, y } => WheelDelta::from_pixels(x, y),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::advanced::clipboard;
    use iced::widget::Space;
    use iced::Point;

    const BOUNDS: Size = Size::new(200.0, 100.0);

    fn wheel_down() -> Event {
        Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        })
    }

    /// Feeds `event` to a wrapped strip and returns whether it was captured
    /// plus the published messages.
    fn dispatch(event: &Event, cursor_at: Point) -> (bool, Vec<WheelDelta>) {
        let mut element: Element<'_, WheelDelta, iced::Theme, ()> =
            wheel_capture(Space::new().width(BOUNDS.width).height(BOUNDS.height), |delta| delta)
                .into();
        let mut tree = widget::Tree::new(&element);
        let node = layout::Node::new(BOUNDS);
        let mut messages = Vec::new();

        let captured = {
            let mut shell = Shell::new(&mut messages);
            element.as_widget_mut().update(
                &mut tree,
                event,
                Layout::new(&node),
                mouse::Cursor::Available(cursor_at),
                &(),
                &mut clipboard::Null,
                &mut shell,
                &Rectangle::with_size(BOUNDS),
            );
            shell.is_event_captured()
        };

        (captured, messages)
    }

    #[test]
    fn wheel_over_strip_is_captured_and_published_once() {
        let (captured, messages) = dispatch(&wheel_down(), Point::new(50.0, 40.0));

        assert!(captured);
        assert_eq!(messages.len(), 1);
        assert_abs_diff_eq!(messages[0].delta_y, 60.0);
    }

    #[test]
    fn wheel_outside_strip_is_left_alone() {
        let (captured, messages) = dispatch(&wheel_down(), Point::new(500.0, 400.0));

        assert!(!captured);
        assert!(messages.is_empty());
    }

    #[test]
    fn other_events_pass_through_uncaptured() {
        let click = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let (captured, messages) = dispatch(&click, Point::new(50.0, 40.0));

        assert!(!captured);
        assert!(messages.is_empty());
    }

    #[test]
    fn wheel_lines_become_pixels_pointing_forward() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });
        let delta = wheel_delta(&event).expect("wheel event");
        assert_abs_diff_eq!(delta.delta_y, 60.0);
        assert_abs_diff_eq!(delta.primary(), 60.0);
    }

    #[test]
    fn wheel_pixels_are_flipped() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Pixels { x: 12.0, y: 0.0 },
        });
        let delta = wheel_delta(&event).expect("wheel event");
        assert_abs_diff_eq!(delta.primary(), -12.0);
    }

    #[test]
    fn other_mouse_events_are_not_detected() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(wheel_delta(&event).is_none());
    }

    #[test]
    fn window_events_are_not_detected() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(wheel_delta(&event).is_none());
    }
}
