// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the Contentful delivery API.

use super::response::{resolve_entries, EntriesResponse};
use crate::application::port::{ContentError, ContentResult, ContentSource, RawEntry};
use futures_util::future::{BoxFuture, FutureExt};

/// Delivery API host.
pub const DEFAULT_HOST: &str = "https://cdn.contentful.com";

/// Environment used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "master";

/// Host serving image assets.
pub const ASSET_HOST: &str = "images.ctfassets.net";

const USER_AGENT: &str = concat!("JournalStrip/", env!("CARGO_PKG_VERSION"));

/// Connection settings for a Contentful space.
///
/// Space id and access token are optional here so a missing secret turns
/// into a failed fetch rather than a failed start-up.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentfulSettings {
    pub space_id: Option<String>,
    pub access_token: Option<String>,
    pub environment: String,
    pub host: String,
    /// Images are only downloaded over https from this host.
    pub asset_host: String,
}

impl Default for ContentfulSettings {
    fn default() -> Self {
        Self {
            space_id: None,
            access_token: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            host: DEFAULT_HOST.to_string(),
            asset_host: ASSET_HOST.to_string(),
        }
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for ContentfulSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentfulSettings")
            .field("space_id", &self.space_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("environment", &self.environment)
            .field("host", &self.host)
            .field("asset_host", &self.asset_host)
            .finish()
    }
}

impl ContentfulSettings {
    /// Returns `(space_id, access_token)` when both are present and non-blank.
    fn credentials(&self) -> Option<(&str, &str)> {
        let space = self.space_id.as_deref().filter(|s| !s.trim().is_empty())?;
        let token = self.access_token.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((space, token))
    }

    /// Whether `url` is an https link to the asset host, inside this space
    /// when one is configured.
    #[must_use]
    pub fn is_trusted_image_url(&self, url: &str) -> bool {
        let Ok(parsed) = reqwest::Url::parse(url) else {
            return false;
        };
        if parsed.scheme() != "https" || parsed.host_str() != Some(self.asset_host.as_str()) {
            return false;
        }

        match self.space_id.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(space) => parsed
                .path()
                .strip_prefix('/')
                .and_then(|path| path.strip_prefix(space))
                .is_some_and(|rest| rest.starts_with('/')),
            None => true,
        }
    }

    /// Builds the entries endpoint for this space and environment.
    #[must_use]
    pub fn entries_url(&self, space_id: &str) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.host.trim_end_matches('/'),
            space_id,
            self.environment
        )
    }
}

/// [`ContentSource`] backed by the Contentful delivery API.
#[derive(Debug, Clone)]
pub struct ContentfulSource {
    client: reqwest::Client,
    settings: ContentfulSettings,
}

impl ContentfulSource {
    /// Creates the adapter and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Network`] if the TLS backend cannot be initialized.
    pub fn new(settings: ContentfulSettings) -> ContentResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ContentError::Network(e.to_string()))?;

        Ok(Self { client, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &ContentfulSettings {
        &self.settings
    }
}

impl ContentSource for ContentfulSource {
    fn fetch_entries(&self, content_type: &str) -> BoxFuture<'static, ContentResult<Vec<RawEntry>>> {
        let client = self.client.clone();
        let content_type = content_type.to_string();
        let request = self
            .settings
            .credentials()
            .map(|(space, token)| (self.settings.entries_url(space), token.to_string()));

        async move {
            let Some((url, token)) = request else {
                return Err(ContentError::MissingCredentials);
            };

            let response = client
                .get(&url)
                .bearer_auth(token)
                .query(&[("content_type", content_type.as_str()), ("include", "1")])
                .send()
                .await
                .map_err(|e| ContentError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ContentError::Http {
                    status: status.as_u16(),
                });
            }

            let body: EntriesResponse = response
                .json()
                .await
                .map_err(|e| ContentError::Decode(e.to_string()))?;

            Ok(resolve_entries(body))
        }
        .boxed()
    }

    fn fetch_image(&self, url: &str) -> BoxFuture<'static, ContentResult<Vec<u8>>> {
        let client = self.client.clone();
        let url = url.to_string();
        let trusted = self.settings.is_trusted_image_url(&url);

        async move {
            if !trusted {
                return Err(ContentError::UntrustedUrl(url));
            }

            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| ContentError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ContentError::Http {
                    status: status.as_u16(),
                });
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| ContentError::Network(e.to_string()))?;
            Ok(bytes.to_vec())
        }
        .boxed()
    }
}
