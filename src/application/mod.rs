// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (read-side use cases)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use journal_strip::application::port::ContentSource;
//! use journal_strip::application::query::GalleryQuery;
//! use std::sync::Arc;
//!
//! // Infrastructure implements the port trait
//! let source: Arc<dyn ContentSource> = Arc::new(ContentfulSource::new(settings)?);
//!
//! // The query maps raw entries into domain entries
//! let query = GalleryQuery::new(source, "journal");
//! let loaded = query.load().await?;
//! ```

pub mod port;
pub mod query;
