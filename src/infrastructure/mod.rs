// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP client.
//!
//! # Available Adapters
//!
//! - [`contentful`]: Contentful delivery API over `reqwest` (implements [`ContentSource`])
//!
//! [`ContentSource`]: crate::application::port::ContentSource

pub mod contentful;

// Re-export main types for convenience
pub use contentful::{ContentfulSettings, ContentfulSource};
