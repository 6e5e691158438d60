// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::config::Config;
use crate::application::port::ContentSource;
use crate::ui::gallery;
use crate::ui::notifications;
use std::fmt;
use std::sync::Arc;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the launcher.
///
/// The content source is built by the caller and injected here; the app
/// never constructs a client of its own.
#[derive(Clone)]
pub struct Flags {
    /// Optional locale override provided on the command line.
    pub lang: Option<String>,
    /// Loaded configuration, env overrides already applied.
    pub config: Config,
    /// Fluent key of a warning raised while loading the configuration.
    pub config_warning: Option<String>,
    pub content_source: Arc<dyn ContentSource>,
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("lang", &self.lang)
            .field("content_type", &self.config.content_type())
            .field("config_warning", &self.config_warning)
            .finish_non_exhaustive()
    }
}
