// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

pub mod entry;
pub mod layout;

pub use entry::{qualify_url, EntryError, GalleryEntry};
pub use layout::{LayoutMode, MOBILE_BREAKPOINT_PX};
