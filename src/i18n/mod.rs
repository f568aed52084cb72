// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles translation file loading, string formatting, and runtime language
//! switching between the three supported locales.
//!
//! # Features
//!
//! - Locale resolution from CLI or persisted config
//! - Embedded `.ftl` translation resources, one per locale
//! - Runtime language switching
//! - Fallback to the default locale when a bundle is missing

pub mod fluent;
