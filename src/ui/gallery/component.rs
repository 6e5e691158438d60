// SPDX-License-Identifier: MPL-2.0
//! Gallery component: owns the render list, the layout mode and the
//! wheel remapper.
//!
//! Each piece of state has a single writer: the entry list is replaced by
//! fetch completions, the layout mode by window size events, and the strip
//! offset by the remapper's tween (plus `on_scroll` reports).

use crate::application::port::ContentError;
use crate::application::query::{GalleryLoad, GalleryQuery};
use crate::domain::gallery::{GalleryEntry, LayoutMode};
use crate::domain::scroll::WheelDelta;
use crate::i18n::fluent::I18n;
use crate::media::placeholder_handle;
use crate::ui::notifications::Notification;
use crate::ui::state::{is_fading, ScrollRemapper, WheelOutcome};
use iced::widget::image;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{Element, Size, Task};
use std::future::Future;
use std::time::Instant;

/// Widget id of the strip scrollable.
pub const STRIP_ID: &str = "gallery-strip";

/// Where the entry request stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(ContentError),
}

/// Image bytes for one entry.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Download in flight; the placeholder is shown.
    Pending,
    /// Decodable bytes arrived at `loaded_at`; the image fades in from there.
    Loaded {
        handle: image::Handle,
        loaded_at: Instant,
    },
    /// Download failed; the placeholder stays.
    Failed,
}

/// One block of the strip.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub entry: GalleryEntry,
    pub slot: ImageSlot,
}

#[derive(Debug, Clone)]
pub enum Message {
    EntriesLoaded(Result<GalleryLoad, ContentError>),
    ImageLoaded {
        index: usize,
        url: String,
        result: Result<image::Handle, ContentError>,
    },
    /// Wheel input captured over the desktop strip.
    Wheel(WheelDelta),
    /// Frame tick while a tween or fade runs.
    Tick(Instant),
    WindowResized(Size),
    /// The strip scrollable moved.
    Scrolled { offset: f32, max_offset: f32 },
}

/// Side effects for the parent to carry out.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    Notify(Notification),
}

/// Gallery screen state.
#[derive(Debug)]
pub struct State {
    query: GalleryQuery,
    items: Vec<GalleryItem>,
    status: LoadStatus,
    layout: LayoutMode,
    remapper: ScrollRemapper,
    placeholder: image::Handle,
}

impl State {
    /// Creates the screen for a window of `initial_width`. The remapper is
    /// attached right away when that width is a desktop width.
    pub fn new(query: GalleryQuery, initial_width: f32) -> Self {
        let layout = LayoutMode::from_width(initial_width);
        let mut remapper = ScrollRemapper::default();
        if layout.is_desktop() {
            remapper.attach();
        }

        Self {
            query,
            items: Vec::new(),
            status: LoadStatus::Loading,
            layout,
            remapper,
            placeholder: placeholder_handle(),
        }
    }

    /// Issues the single entry request.
    pub fn load(&self) -> Task<Message> {
        Task::perform(self.query.load(), Message::EntriesLoaded)
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    #[must_use]
    pub fn is_wheel_attached(&self) -> bool {
        self.remapper.is_attached()
    }

    #[must_use]
    pub fn placeholder(&self) -> &image::Handle {
        &self.placeholder
    }

    /// Whether frame ticks are needed at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.remapper.is_animating(now)
            || self.items.iter().any(|item| match item.slot {
                ImageSlot::Loaded { loaded_at, .. } => is_fading(loaded_at, now),
                ImageSlot::Pending | ImageSlot::Failed => false,
            })
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        self.handle_message_at(message, Instant::now())
    }

    /// Same as [`handle_message`](Self::handle_message) with an explicit clock.
    pub fn handle_message_at(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        match message {
            Message::EntriesLoaded(Ok(load)) => {
                self.status = LoadStatus::Loaded;
                self.items = load
                    .entries
                    .into_iter()
                    .map(|entry| GalleryItem {
                        entry,
                        slot: ImageSlot::Pending,
                    })
                    .collect();
                self.remapper.reset(now);

                (Effect::None, self.fetch_images())
            }
            Message::EntriesLoaded(Err(error)) => {
                tracing::warn!(
                    content_type = self.query.content_type(),
                    %error,
                    "gallery fetch failed"
                );
                self.items.clear();
                let notification = notification_for(&error);
                self.status = LoadStatus::Failed(error);

                (Effect::Notify(notification), Task::none())
            }
            Message::ImageLoaded { index, url, result } => {
                let Some(item) = self
                    .items
                    .get_mut(index)
                    .filter(|item| item.entry.image_url() == url)
                else {
                    tracing::debug!(index, url, "image result for a stale entry");
                    return (Effect::None, Task::none());
                };

                item.slot = match result {
                    Ok(handle) => ImageSlot::Loaded {
                        handle,
                        loaded_at: now,
                    },
                    Err(error) => {
                        tracing::warn!(url, %error, "image download failed");
                        ImageSlot::Failed
                    }
                };
                (Effect::None, Task::none())
            }
            Message::Wheel(delta) => {
                let outcome = self.remapper.handle_wheel(delta, now);
                if let WheelOutcome::Retargeted { from, target } = outcome {
                    tracing::trace!(from, target, "strip scroll retargeted");
                }
                (Effect::None, Task::none())
            }
            Message::Tick(now) => {
                let task = match self.remapper.tick(now) {
                    Some(x) => {
                        operation::scroll_to(Id::new(STRIP_ID), AbsoluteOffset { x, y: 0.0 })
                    }
                    None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::WindowResized(size) => (Effect::None, self.apply_width(size.width, now)),
            Message::Scrolled { offset, max_offset } => {
                if self.layout.is_desktop() {
                    self.remapper.observe(offset, Some(max_offset));
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// Reclassifies the layout. A flip moves the wheel listener and sends the
    /// strip back to its start.
    fn apply_width(&mut self, width: f32, now: Instant) -> Task<Message> {
        let layout = LayoutMode::from_width(width);
        if layout == self.layout {
            return Task::none();
        }

        tracing::info!(?layout, width, "layout mode changed");
        self.layout = layout;
        self.remapper.reset(now);
        match layout {
            LayoutMode::Desktop => self.remapper.attach(),
            LayoutMode::Mobile => self.remapper.detach(now),
        }

        operation::snap_to(Id::new(STRIP_ID), RelativeOffset { x: 0.0, y: 0.0 })
    }

    fn fetch_images(&self) -> Task<Message> {
        Task::batch(self.image_requests().into_iter().map(Task::future))
    }

    /// One download per item, each resolving to its `ImageLoaded` message.
    fn image_requests(&self) -> Vec<impl Future<Output = Message> + Send + 'static> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let url = item.entry.image_url().to_string();
                let request = self.query.fetch_image(&url);
                async move {
                    let result = request.await.map(image::Handle::from_bytes);
                    Message::ImageLoaded { index, url, result }
                }
            })
            .collect()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.items.is_empty() {
            return super::empty_state::view(&self.status, i18n);
        }

        match self.layout {
            LayoutMode::Desktop => super::strip::horizontal(self),
            LayoutMode::Mobile => super::strip::vertical(self),
        }
    }
}

/// Toast for a failed entry request. Auth problems need the user's attention
/// and stay until dismissed.
fn notification_for(error: &ContentError) -> Notification {
    let notification = if error.is_auth() {
        Notification::error(error.i18n_key())
    } else {
        Notification::warning(error.i18n_key())
    };

    match error {
        ContentError::Http { status } => notification.with_arg("status", status.to_string()),
        _ => notification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ContentSource;
    use crate::application::query::DEFAULT_CONTENT_TYPE;
    use crate::test_utils::{raw_entry, StubContentSource};
    use crate::ui::notifications::Severity;
    use std::sync::Arc;
    use std::time::Duration;

    fn state_with(source: StubContentSource, width: f32) -> State {
        let source: Arc<dyn ContentSource> = Arc::new(source);
        State::new(GalleryQuery::new(source, DEFAULT_CONTENT_TYPE), width)
    }

    fn loaded(titles: &[&str]) -> Message {
        let raw = titles
            .iter()
            .map(|t| raw_entry(t, &format!("//cdn.test/{t}.jpg")))
            .collect();
        Message::EntriesLoaded(Ok(crate::application::query::map_entries(raw)))
    }

    #[test]
    fn starts_loading_with_wheel_attached_on_desktop() {
        let state = state_with(StubContentSource::default(), 1280.0);
        assert_eq!(state.status(), &LoadStatus::Loading);
        assert!(state.layout().is_desktop());
        assert!(state.is_wheel_attached());
    }

    #[test]
    fn narrow_window_starts_mobile_without_wheel() {
        let state = state_with(StubContentSource::default(), 768.0);
        assert!(state.layout().is_mobile());
        assert!(!state.is_wheel_attached());
    }

    #[test]
    fn entries_replace_render_list_in_order() {
        let mut state = state_with(StubContentSource::default(), 1280.0);

        let _ = state.handle_message(loaded(&["a", "b", "c"]));

        let urls: Vec<_> = state.items().iter().map(|i| i.entry.image_url()).collect();
        assert_eq!(
            urls,
            ["https://cdn.test/a.jpg", "https://cdn.test/b.jpg", "https://cdn.test/c.jpg"]
        );
        assert!(state.items().iter().all(|i| matches!(i.slot, ImageSlot::Pending)));
        assert_eq!(state.status(), &LoadStatus::Loaded);
    }

    #[test]
    fn failed_fetch_leaves_list_empty_and_warns() {
        let mut state = state_with(StubContentSource::default(), 1280.0);

        let (effect, _) = state.handle_message(Message::EntriesLoaded(Err(
            ContentError::Network("offline".into()),
        )));

        assert!(state.items().is_empty());
        assert!(matches!(state.status(), LoadStatus::Failed(_)));
        match effect {
            Effect::Notify(n) => {
                assert_eq!(n.severity(), Severity::Warning);
                assert_eq!(n.message_key(), "notification-content-network-error");
            }
            Effect::None => panic!("expected a notification"),
        }
    }

    #[test]
    fn auth_failures_raise_errors() {
        let notification = notification_for(&ContentError::Http { status: 401 });
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_args()[0].1, "401");

        let missing = notification_for(&ContentError::MissingCredentials);
        assert_eq!(missing.severity(), Severity::Error);
    }

    #[test]
    fn image_results_fill_matching_slot_only() {
        let mut state = state_with(StubContentSource::default(), 1280.0);
        let _ = state.handle_message(loaded(&["a", "b"]));
        let now = Instant::now();

        let _ = state.handle_message_at(
            Message::ImageLoaded {
                index: 1,
                url: "https://cdn.test/b.jpg".into(),
                result: Ok(image::Handle::from_bytes(vec![0u8; 4])),
            },
            now,
        );
        let _ = state.handle_message_at(
            Message::ImageLoaded {
                index: 0,
                url: "https://cdn.test/other.jpg".into(),
                result: Ok(image::Handle::from_bytes(vec![0u8; 4])),
            },
            now,
        );

        assert!(matches!(state.items()[0].slot, ImageSlot::Pending));
        assert!(matches!(state.items()[1].slot, ImageSlot::Loaded { .. }));
        assert!(state.is_animating(now));
        assert!(!state.is_animating(now + Duration::from_secs(1)));
    }

    #[tokio::test]
    async fn downloaded_bytes_fill_their_slots() {
        let source = StubContentSource::with_entries(Vec::new())
            .with_image("https://cdn.test/a.jpg", vec![0x47, 0x49, 0x46]);
        let mut state = state_with(source, 1280.0);
        let _ = state.handle_message(loaded(&["a", "b"]));

        for request in state.image_requests() {
            let message = request.await;
            let _ = state.handle_message(message);
        }

        assert!(matches!(state.items()[0].slot, ImageSlot::Loaded { .. }));
        assert!(matches!(state.items()[1].slot, ImageSlot::Failed));
    }

    #[test]
    fn failed_image_keeps_placeholder() {
        let mut state = state_with(StubContentSource::default(), 1280.0);
        let _ = state.handle_message(loaded(&["a"]));

        let _ = state.handle_message(Message::ImageLoaded {
            index: 0,
            url: "https://cdn.test/a.jpg".into(),
            result: Err(ContentError::Http { status: 404 }),
        });

        assert!(matches!(state.items()[0].slot, ImageSlot::Failed));
    }

    fn overflowing_strip() -> Message {
        Message::Scrolled {
            offset: 0.0,
            max_offset: 3_000.0,
        }
    }

    #[test]
    fn wheel_on_desktop_starts_animation() {
        let mut state = state_with(StubContentSource::default(), 1280.0);
        let now = Instant::now();

        let _ = state.handle_message_at(overflowing_strip(), now);
        let _ = state.handle_message_at(Message::Wheel(WheelDelta::new(0.0, 40.0)), now);

        assert!(state.is_animating(now));
    }

    #[test]
    fn wheel_over_fitting_strip_stays_idle() {
        let mut state = state_with(StubContentSource::default(), 1280.0);
        let _ = state.handle_message(loaded(&["a"]));
        let now = Instant::now();

        let _ = state.handle_message_at(Message::Wheel(WheelDelta::new(0.0, 40.0)), now);

        assert!(!state.is_animating(now));
    }

    #[test]
    fn wheel_on_mobile_is_ignored() {
        let mut state = state_with(StubContentSource::default(), 600.0);
        let now = Instant::now();

        let _ = state.handle_message_at(Message::Wheel(WheelDelta::new(0.0, 40.0)), now);

        assert!(!state.is_animating(now));
    }

    #[test]
    fn resize_flips_layout_and_wheel_listener() {
        let mut state = state_with(StubContentSource::default(), 1280.0);
        let now = Instant::now();
        let _ = state.handle_message_at(overflowing_strip(), now);
        let _ = state.handle_message_at(Message::Wheel(WheelDelta::new(0.0, 40.0)), now);
        assert!(state.is_animating(now));

        let _ = state.handle_message_at(Message::WindowResized(Size::new(768.0, 900.0)), now);
        assert!(state.layout().is_mobile());
        assert!(!state.is_wheel_attached());
        assert!(!state.is_animating(now));

        let _ = state.handle_message_at(Message::WindowResized(Size::new(769.0, 900.0)), now);
        assert!(state.layout().is_desktop());
        assert!(state.is_wheel_attached());
    }
}
