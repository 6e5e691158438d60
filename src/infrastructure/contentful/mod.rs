// SPDX-License-Identifier: MPL-2.0
//! Contentful delivery API adapter.
//!
//! - [`client`]: HTTP client implementing [`ContentSource`]
//! - [`response`]: Response DTOs and asset link resolution
//!
//! [`ContentSource`]: crate::application::port::ContentSource

pub mod client;
pub mod response;

pub use client::{
    ContentfulSettings, ContentfulSource, ASSET_HOST, DEFAULT_ENVIRONMENT, DEFAULT_HOST,
};
pub use response::{resolve_entries, EntriesResponse};
