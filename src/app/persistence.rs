// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic.
//!
//! The language preference is written through here on every change. A failed
//! write degrades to in-memory state for the session: the selection still
//! applies, it just will not survive a restart.

use crate::app::config;
use crate::locale::Locale;

/// Persists the selected locale under the `language` key of `settings.toml`.
///
/// Guarded during tests to keep isolation: unit tests exercise persistence by
/// calling `config::save_to_path` against a temp directory instead.
pub fn persist_locale(locale: Locale) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, _) = config::load();
    cfg.set_locale(locale);

    if let Err(error) = config::save(&cfg) {
        log::warn!("failed to persist language preference: {}", error);
    }
}
