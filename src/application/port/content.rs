// SPDX-License-Identifier: MPL-2.0
//! Content source port definition.
//!
//! A content source is a remote repository that, given a content-type id,
//! returns an ordered list of entries, and that can fetch the image bytes an
//! entry points to. It does not retry, cache or paginate.

use crate::domain::gallery::{EntryError, GalleryEntry};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// ContentError
// =============================================================================

/// Result type for content source operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur while talking to the content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Space identifier or access token was not configured.
    MissingCredentials,
    /// The service answered with a non-success status.
    Http {
        /// HTTP status code.
        status: u16,
    },
    /// The request never got a response (DNS, TLS, connection reset...).
    Network(String),
    /// The response body could not be decoded.
    Decode(String),
    /// An image URL outside the trusted asset host.
    UntrustedUrl(String),
}

impl ContentError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::MissingCredentials => "notification-content-missing-credentials",
            ContentError::Http { status } if *status == 401 || *status == 403 => {
                "notification-content-unauthorized"
            }
            ContentError::Http { .. } => "notification-content-http-error",
            ContentError::Network(_) => "notification-content-network-error",
            ContentError::Decode(_) => "notification-content-decode-error",
            ContentError::UntrustedUrl(_) => "notification-content-untrusted-url",
        }
    }

    /// Returns `true` when the failure comes from authentication.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        match self {
            ContentError::MissingCredentials => true,
            ContentError::Http { status } => *status == 401 || *status == 403,
            ContentError::Network(_) | ContentError::Decode(_) | ContentError::UntrustedUrl(_) => {
                false
            }
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingCredentials => {
                write!(f, "Content space id or access token is not configured")
            }
            ContentError::Http { status } => write!(f, "Content service returned HTTP {status}"),
            ContentError::Network(msg) => write!(f, "Network error: {msg}"),
            ContentError::Decode(msg) => write!(f, "Could not decode response: {msg}"),
            ContentError::UntrustedUrl(url) => write!(f, "Refusing to download from {url}"),
        }
    }
}

impl std::error::Error for ContentError {}

// =============================================================================
// Raw entries
// =============================================================================

/// An entry as the content source returns it, before validation.
///
/// Every nested piece is optional: content editors can publish entries with
/// no image attached, and linked assets may be missing from the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub images: Option<RawImage>,
}

/// The image asset attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawImage {
    pub title: Option<String>,
    pub file: Option<RawFile>,
}

/// File metadata of an image asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFile {
    /// Usually scheme-relative (`//images.example/...`).
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Why a raw entry could not become a [`GalleryEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedEntry {
    MissingImage,
    MissingFile,
    MissingUrl,
    MissingDimensions,
    Invalid(EntryError),
}

impl fmt::Display for MalformedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedEntry::MissingImage => write!(f, "entry has no image"),
            MalformedEntry::MissingFile => write!(f, "image has no file"),
            MalformedEntry::MissingUrl => write!(f, "image file has no url"),
            MalformedEntry::MissingDimensions => write!(f, "image file has no dimensions"),
            MalformedEntry::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl RawEntry {
    /// Validates the raw entry. A missing title becomes an empty string;
    /// missing image metadata is an error.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedEntry`] describing the first missing piece.
    pub fn to_gallery_entry(&self) -> Result<GalleryEntry, MalformedEntry> {
        let image = self.images.as_ref().ok_or(MalformedEntry::MissingImage)?;
        let file = image.file.as_ref().ok_or(MalformedEntry::MissingFile)?;
        let url = file.url.as_deref().ok_or(MalformedEntry::MissingUrl)?;
        let (Some(width), Some(height)) = (file.width, file.height) else {
            return Err(MalformedEntry::MissingDimensions);
        };

        GalleryEntry::new(
            self.title.clone().unwrap_or_default(),
            url,
            image.title.clone().unwrap_or_default(),
            width,
            height,
        )
        .map_err(MalformedEntry::Invalid)
    }
}

// =============================================================================
// ContentSource Trait
// =============================================================================

/// Port for a remote content repository.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the app shares one instance
/// between the entry query and the image fetches.
///
/// # Example
///
/// ```ignore
/// use journal_strip::application::port::ContentSource;
///
/// async fn count(source: &dyn ContentSource) -> usize {
///     source.fetch_entries("journal").await.map(|e| e.len()).unwrap_or(0)
/// }
/// ```
pub trait ContentSource: Send + Sync + fmt::Debug {
    /// Fetches all entries of a content type, in the order the service returns them.
    fn fetch_entries(&self, content_type: &str) -> BoxFuture<'static, ContentResult<Vec<RawEntry>>>;

    /// Downloads the bytes behind an absolute image URL.
    fn fetch_image(&self, url: &str) -> BoxFuture<'static, ContentResult<Vec<u8>>>;
}
