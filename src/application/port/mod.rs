// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the application layer does not
//! depend on a particular HTTP client or animation backend.
//!
//! # Available Ports
//!
//! - [`animation`]: Time-based tweening of a scalar value
//! - [`content`]: Remote content repository (entries and image bytes)
//!
//! # Design Notes
//!
//! - Content sources are `Send + Sync` and shared as `Arc<dyn ContentSource>`
//! - Network methods return boxed `'static` futures so callers can hand them
//!   straight to Iced's `Task::perform`
//! - The animator is synchronous and sampled on frame ticks

pub mod animation;
pub mod content;

// Re-export main types for convenience
pub use animation::Animator;
pub use content::{
    ContentError, ContentResult, ContentSource, MalformedEntry, RawEntry, RawFile, RawImage,
};
