// SPDX-License-Identifier: MPL-2.0
//! `rateboard` is a trilingual storefront display for a currency exchange and
//! hawala office, built with the Iced GUI framework.
//!
//! It renders the office's rates, services, and contact information in
//! Arabic, English, and Turkish, with right-to-left layout for Arabic, a
//! persisted language preference, and scroll-based section navigation.

#![doc(html_root_url = "https://docs.rs/rateboard/0.2.0")]

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod ui;
