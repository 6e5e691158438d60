// SPDX-License-Identifier: MPL-2.0
//! `journal_strip` shows journal entries from a Contentful space as a strip
//! of images, built with the Iced GUI framework.
//!
//! On wide windows the strip runs horizontally and the mouse wheel drives an
//! eased horizontal scroll; on narrow windows it stacks vertically and
//! scrolls natively. Images show a brand-colored placeholder until their
//! bytes arrive.

#![doc(html_root_url = "https://docs.rs/journal_strip/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
