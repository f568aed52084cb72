// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! All state mutation happens here, on the UI thread, in response to discrete
//! events. The language change is the only mutation with a side effect beyond
//! the struct itself: it persists the preference and reapplies the derived
//! layout direction.

use super::{persistence, scroll, view, App, Message};
use crate::content::{ContactChannel, Section};
use crate::locale::Locale;
use crate::ui::sections;
use crate::ui::{footer, navbar};
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message) {
                navbar::Event::NavigateTo(section) => scroll_to(section),
                navbar::Event::SelectLanguage(locale) => self.apply_language(locale),
            },
            Message::Footer(message) => match footer::update(message) {
                footer::Event::NavigateTo(section) => scroll_to(section),
                footer::Event::SelectLanguage(locale) => self.apply_language(locale),
            },
            Message::Page(message) => match message {
                sections::Message::LearnMore => scroll_to(Section::Contact),
                sections::Message::OpenChannel(channel) => {
                    open_channel(channel);
                    Task::none()
                }
            },
            Message::PageScrolled(viewport) => {
                self.track_scroll(viewport.absolute_offset().y);
                Task::none()
            }
        }
    }

    /// Applies the newly selected locale: in-memory state, persisted
    /// preference, and the derived layout direction, all synchronously.
    /// Re-selecting the active locale is a no-op in every observable respect.
    pub(crate) fn apply_language(&mut self, locale: Locale) -> Task<Message> {
        self.i18n.set_locale(locale);
        self.direction = self.i18n.current_locale().direction();
        persistence::persist_locale(locale);
        Task::none()
    }

    /// Feeds a new scroll offset into the navbar hide-on-scroll rule.
    pub(crate) fn track_scroll(&mut self, offset: f32) {
        self.navbar_visible = scroll::navbar_visible_after(self.last_scroll_offset, offset);
        self.last_scroll_offset = offset;
    }
}

/// Anchor scroll to a section's fixed target offset.
fn scroll_to(section: Section) -> Task<Message> {
    operation::scroll_to(
        view::page_scroll_id(),
        AbsoluteOffset {
            x: 0.0,
            y: scroll::scroll_target(section),
        },
    )
}

/// Hands a contact URI to the OS. Failures are logged and otherwise ignored;
/// there is nothing to surface to the user.
fn open_channel(channel: ContactChannel) {
    if cfg!(test) {
        return;
    }
    if let Err(error) = open::that(channel.uri()) {
        log::warn!("failed to open {}: {}", channel.uri(), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Direction;

    #[test]
    fn selecting_a_locale_makes_only_it_active() {
        let mut app = App::default();
        for selected in Locale::ALL {
            let _ = app.apply_language(selected);
            for other in Locale::ALL {
                assert_eq!(app.i18n.is_active(other), other == selected);
            }
        }
    }

    #[test]
    fn arabic_selection_applies_rtl_direction() {
        let mut app = App::default();
        let _ = app.apply_language(Locale::En);
        assert_eq!(app.direction(), Direction::LeftToRight);
        let _ = app.apply_language(Locale::Ar);
        assert_eq!(app.direction(), Direction::RightToLeft);
    }

    #[test]
    fn latin_selection_applies_ltr_direction() {
        let mut app = App::default();
        let _ = app.apply_language(Locale::Tr);
        assert_eq!(app.direction(), Direction::LeftToRight);
    }

    #[test]
    fn repeated_selection_is_idempotent() {
        let mut app = App::default();
        let _ = app.apply_language(Locale::En);
        let locale_once = app.locale();
        let direction_once = app.direction();
        let title_once = app.title();

        let _ = app.apply_language(Locale::En);
        assert_eq!(app.locale(), locale_once);
        assert_eq!(app.direction(), direction_once);
        assert_eq!(app.title(), title_once);
    }

    #[test]
    fn language_change_flows_through_component_events() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::LanguageSelected(
            Locale::Tr,
        )));
        assert_eq!(app.locale(), Locale::Tr);

        let _ = app.update(Message::Footer(footer::Message::LanguageSelected(
            Locale::Ar,
        )));
        assert_eq!(app.locale(), Locale::Ar);
        assert_eq!(app.direction(), Direction::RightToLeft);
    }

    #[test]
    fn scrolling_down_past_threshold_hides_navbar() {
        let mut app = App::default();
        app.track_scroll(150.0);
        app.track_scroll(260.0);
        assert!(!app.navbar_visible());
    }

    #[test]
    fn scrolling_back_up_shows_navbar() {
        let mut app = App::default();
        app.track_scroll(150.0);
        app.track_scroll(260.0);
        app.track_scroll(200.0);
        assert!(app.navbar_visible());
    }

    #[test]
    fn shallow_scrolling_keeps_navbar() {
        let mut app = App::default();
        app.track_scroll(40.0);
        app.track_scroll(80.0);
        assert!(app.navbar_visible());
    }
}
