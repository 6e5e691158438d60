// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and content-source doubles.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

use crate::application::port::{
    ContentError, ContentResult, ContentSource, RawEntry, RawFile, RawImage,
};
use futures_util::future::{self, BoxFuture, FutureExt};
use std::collections::HashMap;
use std::sync::Mutex;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-4;

/// Builds a complete raw entry with a 1600x900 image.
pub fn raw_entry(title: &str, url: &str) -> RawEntry {
    RawEntry {
        title: Some(title.to_string()),
        images: Some(RawImage {
            title: Some(format!("{title} image")),
            file: Some(RawFile {
                url: Some(url.to_string()),
                width: Some(1600),
                height: Some(900),
            }),
        }),
    }
}

/// In-memory content source returning canned responses.
#[derive(Debug, Default)]
pub struct StubContentSource {
    entries: Option<ContentResult<Vec<RawEntry>>>,
    images: HashMap<String, Vec<u8>>,
    requested: Mutex<Vec<String>>,
}

impl StubContentSource {
    pub fn with_entries(entries: Vec<RawEntry>) -> Self {
        Self {
            entries: Some(Ok(entries)),
            ..Self::default()
        }
    }

    pub fn failing(error: ContentError) -> Self {
        Self {
            entries: Some(Err(error)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_image(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.images.insert(url.to_string(), bytes);
        self
    }

    /// Content types passed to `fetch_entries`, in call order.
    pub fn requested_content_types(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl ContentSource for StubContentSource {
    fn fetch_entries(&self, content_type: &str) -> BoxFuture<'static, ContentResult<Vec<RawEntry>>> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(content_type.to_string());
        }
        let response = self.entries.clone().unwrap_or_else(|| Ok(Vec::new()));
        future::ready(response).boxed()
    }

    fn fetch_image(&self, url: &str) -> BoxFuture<'static, ContentResult<Vec<u8>>> {
        let response = self
            .images
            .get(url)
            .cloned()
            .ok_or(ContentError::Http { status: 404 });
        future::ready(response).boxed()
    }
}
