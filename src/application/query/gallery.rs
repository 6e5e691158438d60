// SPDX-License-Identifier: MPL-2.0
//! Gallery loading query.
//!
//! Issues one request for entries of a content type and maps the response
//! into the render list. Malformed entries are skipped; they never fail
//! the whole load. There is no pagination, retry or caching.

use crate::application::port::{ContentResult, ContentSource, RawEntry};
use crate::domain::gallery::GalleryEntry;
use std::future::Future;
use std::sync::Arc;

/// Content type holding the journal entries.
pub const DEFAULT_CONTENT_TYPE: &str = "journal";

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryLoad {
    /// Valid entries, in response order.
    pub entries: Vec<GalleryEntry>,
    /// Number of entries dropped because of missing image metadata.
    pub skipped: usize,
}

/// Loads gallery entries from an injected content source.
#[derive(Debug, Clone)]
pub struct GalleryQuery {
    source: Arc<dyn ContentSource>,
    content_type: String,
}

impl GalleryQuery {
    pub fn new(source: Arc<dyn ContentSource>, content_type: impl Into<String>) -> Self {
        Self {
            source,
            content_type: content_type.into(),
        }
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns a future performing the single entry request.
    ///
    /// The future owns everything it needs, so it can outlive `self` and be
    /// handed to `Task::perform` directly.
    pub fn load(&self) -> impl Future<Output = ContentResult<GalleryLoad>> + Send + 'static {
        let request = self.source.fetch_entries(&self.content_type);
        let content_type = self.content_type.clone();

        async move {
            tracing::debug!(content_type = %content_type, "fetching gallery entries");
            let raw = request.await?;
            let load = map_entries(raw);
            tracing::info!(
                content_type = %content_type,
                entries = load.entries.len(),
                skipped = load.skipped,
                "gallery entries loaded"
            );
            Ok(load)
        }
    }

    /// Returns a future downloading the encoded bytes of one image.
    pub fn fetch_image(
        &self,
        url: &str,
    ) -> impl Future<Output = ContentResult<Vec<u8>>> + Send + 'static {
        self.source.fetch_image(url)
    }
}

/// Maps raw entries to gallery entries, keeping order and skipping the
/// ones whose image metadata is incomplete.
#[must_use]
pub fn map_entries(raw: Vec<RawEntry>) -> GalleryLoad {
    let mut load = GalleryLoad {
        entries: Vec::with_capacity(raw.len()),
        skipped: 0,
    };

    for (index, entry) in raw.iter().enumerate() {
        match entry.to_gallery_entry() {
            Ok(valid) => load.entries.push(valid),
            Err(reason) => {
                tracing::warn!(
                    index,
                    title = entry.title.as_deref().unwrap_or(""),
                    %reason,
                    "skipping gallery entry"
                );
                load.skipped += 1;
            }
        }
    }

    load
}
