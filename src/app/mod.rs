// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, the persisted language
//! preference, and the scroll-driven navbar state, and translates messages
//! into side effects like preference persistence or anchor scrolling. This
//! file intentionally keeps policy decisions (window sizing, locale
//! resolution, direction application) close to the main update loop so it is
//! easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod persistence;
pub mod scroll;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::page_scroll_id;

use crate::i18n::fluent::I18n;
use crate::locale::{Direction, Locale};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state bridging UI components, localization, and the
/// persisted preference.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    scheme: ColorScheme,
    /// Layout direction derived from the active locale; reapplied on every
    /// language change.
    direction: Direction,
    navbar_visible: bool,
    last_scroll_offset: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale())
            .field("navbar_visible", &self.navbar_visible)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let direction = i18n.current_locale().direction();
        let theme_mode = ThemeMode::System;
        Self {
            i18n,
            theme_mode,
            scheme: theme_mode.scheme(),
            direction,
            navbar_visible: true,
            last_scroll_offset: 0.0,
        }
    }
}

impl App {
    /// Initializes application state from the persisted preference and any
    /// CLI overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, _load_failed) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let direction = i18n.current_locale().direction();
        let theme_mode = config.general.theme_mode;

        let app = App {
            i18n,
            theme_mode,
            scheme: theme_mode.scheme(),
            direction,
            navbar_visible: true,
            last_scroll_offset: 0.0,
        };

        (app, Task::none())
    }

    /// Localized window title, following the active locale.
    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn locale(&self) -> Locale {
        self.i18n.current_locale()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn navbar_visible(&self) -> bool {
        self.navbar_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_in_arabic_rtl() {
        let app = App::default();
        assert_eq!(app.locale(), Locale::Ar);
        assert_eq!(app.direction(), Direction::RightToLeft);
        assert!(app.navbar_visible());
    }

    #[test]
    fn title_follows_active_locale() {
        let mut app = App::default();
        let arabic_title = app.title();
        app.i18n.set_locale(Locale::En);
        assert_ne!(app.title(), arabic_title);
    }

    #[test]
    fn window_is_at_least_minimum_size() {
        assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    }
}
