// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections with the footer at the
//! bottom; the navbar sits above it and is omitted entirely while hidden.

use super::{App, Message};
use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::sections::{self, contact, hero, rates, trust};
use iced::widget::{Column, Id, Scrollable};
use iced::{Element, Length};

/// Identifier of the page scrollable, shared with the anchor-scroll tasks.
pub fn page_scroll_id() -> Id {
    Id::new("page")
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let section_ctx = || sections::ViewContext {
            i18n: &self.i18n,
            direction: self.direction(),
            scheme: &self.scheme,
        };

        let page = Column::new()
            .push(hero::view(section_ctx()).map(Message::Page))
            .push(rates::view(section_ctx()).map(Message::Page))
            .push(trust::view(section_ctx()).map(Message::Page))
            .push(contact::view(section_ctx()).map(Message::Page))
            .push(
                footer::view(footer::ViewContext {
                    i18n: &self.i18n,
                    direction: self.direction(),
                    scheme: &self.scheme,
                })
                .map(Message::Footer),
            )
            .width(Length::Fill);

        let scroll = Scrollable::new(page)
            .id(page_scroll_id())
            .on_scroll(Message::PageScrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut root = Column::new().width(Length::Fill).height(Length::Fill);
        if self.navbar_visible() {
            root = root.push(
                navbar::view(navbar::ViewContext {
                    i18n: &self.i18n,
                    direction: self.direction(),
                    scheme: &self.scheme,
                })
                .map(Message::Navbar),
            );
        }
        root.push(scroll).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn view_renders_for_every_locale() {
        let mut app = App::default();
        for locale in Locale::ALL {
            let _ = app.apply_language(locale);
            let _element = app.view();
        }
    }

    #[test]
    fn view_renders_with_hidden_navbar() {
        let mut app = App::default();
        app.track_scroll(150.0);
        app.track_scroll(300.0);
        assert!(!app.navbar_visible());
        let _element = app.view();
    }
}
