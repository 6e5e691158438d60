// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side use cases).
//!
//! - [`gallery`]: one-shot load of the journal entries

pub mod gallery;

pub use gallery::{map_entries, GalleryLoad, GalleryQuery, DEFAULT_CONTENT_TYPE};
