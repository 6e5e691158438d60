// SPDX-License-Identifier: MPL-2.0
//! Strip views: one horizontal row for desktop, one column for mobile.
//!
//! Every block is sized from the entry's declared dimensions, so the layout
//! is stable before any pixels arrive. The placeholder fills the block until
//! the image is loaded, then the image fades in on top of it.

use super::component::{GalleryItem, ImageSlot, Message, State, STRIP_ID};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::fade_in_opacity;
use crate::ui::styles;
use crate::ui::widgets::wheel_capture;
use iced::widget::image::{self, Image};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{responsive, text, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Size, Theme};
use std::time::Instant;

/// Desktop strip: images fill the available height and scroll sideways.
///
/// The native wheel scroll is taken over by [`wheel_capture`]; the strip
/// only moves through the remapper's tween (or a scrollbar drag).
pub fn horizontal(state: &State) -> Element<'_, Message> {
    responsive(move |available: Size| {
        let now = Instant::now();
        let image_height = strip_image_height(available.height);

        let row = state.items().iter().fold(
            Row::new()
                .spacing(spacing::MD)
                .padding(spacing::MD)
                .align_y(alignment::Vertical::Top),
            |row, item| {
                let width = item
                    .entry
                    .width_for_height(image_height)
                    .max(sizing::MIN_IMAGE_EXTENT);
                row.push(block(
                    item,
                    state.placeholder(),
                    Size::new(width, image_height),
                    now,
                ))
            },
        );

        let strip = Scrollable::new(row)
            .id(Id::new(STRIP_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Horizontal(Scrollbar::hidden()))
            .on_scroll(|viewport: Viewport| Message::Scrolled {
                offset: viewport.absolute_offset().x,
                max_offset: max_horizontal_offset(&viewport),
            });

        wheel_capture(strip, Message::Wheel).into()
    })
    .into()
}

/// Mobile strip: full-width blocks stacked vertically with native wheel
/// scrolling.
pub fn vertical(state: &State) -> Element<'_, Message> {
    responsive(move |available: Size| {
        let now = Instant::now();
        let image_width = (available.width - 2.0 * spacing::MD).max(sizing::MIN_IMAGE_EXTENT);

        let column = state.items().iter().fold(
            Column::new()
                .spacing(spacing::LG)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center),
            |column, item| {
                let height = item
                    .entry
                    .height_for_width(image_width)
                    .max(sizing::MIN_IMAGE_EXTENT);
                column.push(block(
                    item,
                    state.placeholder(),
                    Size::new(image_width, height),
                    now,
                ))
            },
        );

        Scrollable::new(column)
            .id(Id::new(STRIP_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    })
    .into()
}

/// Height left for images once padding and the caption band are taken out.
fn strip_image_height(available_height: f32) -> f32 {
    (available_height - 2.0 * spacing::MD - sizing::CAPTION_BAND).max(sizing::MIN_IMAGE_EXTENT)
}

fn max_horizontal_offset(viewport: &Viewport) -> f32 {
    (viewport.content_bounds().width - viewport.bounds().width).max(0.0)
}

/// One image with its caption underneath.
fn block<'a>(
    item: &'a GalleryItem,
    placeholder: &'a image::Handle,
    size: Size,
    now: Instant,
) -> Element<'a, Message> {
    let frame = Stack::new()
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .push(
            Image::new(placeholder.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Fill),
        );

    let frame = match &item.slot {
        ImageSlot::Pending => frame,
        ImageSlot::Loaded { handle, loaded_at } => frame.push(
            Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .opacity(fade_in_opacity(*loaded_at, now)),
        ),
        ImageSlot::Failed => frame.push(
            Container::new(Text::new(item.entry.image_alt()).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        ),
    };

    let caption = Container::new(
        Text::new(item.entry.title())
            .size(typography::CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(styles::container::muted_text(theme)),
            }),
    )
    .height(Length::Fixed(sizing::CAPTION_BAND))
    .align_y(alignment::Vertical::Center);

    Column::new()
        .width(Length::Fixed(size.width))
        .push(Container::new(frame).style(styles::container::image_frame))
        .push(caption)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn image_height_leaves_room_for_caption() {
        let height = strip_image_height(600.0);
        assert_abs_diff_eq!(height, 600.0 - 2.0 * spacing::MD - sizing::CAPTION_BAND);
    }

    #[test]
    fn image_height_never_collapses() {
        assert_abs_diff_eq!(strip_image_height(10.0), sizing::MIN_IMAGE_EXTENT);
    }
}
