// SPDX-License-Identifier: MPL-2.0
//! Gallery entry value object.
//!
//! A [`GalleryEntry`] is what the strip renders: one image with its title.
//! Entries are built once from a content-source response and never mutated;
//! the whole list is replaced when a new response arrives.

use std::fmt;

/// Scheme used when the content source hands back scheme-relative URLs.
const DEFAULT_SCHEME: &str = "https";

/// Errors raised when building a [`GalleryEntry`] from untrusted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The image URL was empty.
    EmptyUrl,
    /// One of the declared image dimensions was zero.
    InvalidDimensions {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::EmptyUrl => write!(f, "Image URL is empty"),
            EntryError::InvalidDimensions { width, height } => {
                write!(f, "Invalid image dimensions: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for EntryError {}

/// One image of the journal strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    title: String,
    image_url: String,
    image_alt: String,
    image_width: u32,
    image_height: u32,
}

impl GalleryEntry {
    /// Creates an entry, qualifying the URL with a scheme if needed.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError`] when the URL is empty or a dimension is zero.
    pub fn new(
        title: impl Into<String>,
        image_url: &str,
        image_alt: impl Into<String>,
        image_width: u32,
        image_height: u32,
    ) -> Result<Self, EntryError> {
        if image_url.trim().is_empty() {
            return Err(EntryError::EmptyUrl);
        }
        if image_width == 0 || image_height == 0 {
            return Err(EntryError::InvalidDimensions {
                width: image_width,
                height: image_height,
            });
        }

        Ok(Self {
            title: title.into(),
            image_url: qualify_url(image_url),
            image_alt: image_alt.into(),
            image_width,
            image_height,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Absolute, scheme-qualified image URL.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn image_alt(&self) -> &str {
        &self.image_alt
    }

    #[must_use]
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    #[must_use]
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Width divided by height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Width the image takes when scaled to the given height.
    #[must_use]
    pub fn width_for_height(&self, height: f32) -> f32 {
        height * self.aspect_ratio()
    }

    /// Height the image takes when scaled to the given width.
    #[must_use]
    pub fn height_for_width(&self, width: f32) -> f32 {
        width / self.aspect_ratio()
    }
}

/// Turns a possibly scheme-relative URL into an absolute one.
///
/// - `//host/path` becomes `https://host/path`
/// - `http://...` and `https://...` are returned unchanged
/// - `host/path` becomes `https://host/path`
#[must_use]
pub fn qualify_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else if let Some(rest) = trimmed.strip_prefix("//") {
        format!("{DEFAULT_SCHEME}://{rest}")
    } else {
        format!("{DEFAULT_SCHEME}://{trimmed}")
    }
}
