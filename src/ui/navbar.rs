// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for in-page navigation.
//!
//! The bar shows the office brand, one link per page section, and the
//! language picker. It sits above the scrollable page and is hidden by the
//! application while the user scrolls downward.

use crate::content::Section;
use crate::i18n::fluent::I18n;
use crate::locale::{Direction, Locale};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::language_picker;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::directed_row;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub direction: Direction,
    pub scheme: &'a ColorScheme,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Section),
    LanguageSelected(Locale),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    NavigateTo(Section),
    SelectLanguage(Locale),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::NavigateTo(section) => Event::NavigateTo(section),
        Message::LanguageSelected(locale) => Event::SelectLanguage(locale),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-name"))
        .size(typography::TITLE_MD)
        .color(ctx.scheme.brand_primary);

    let mut links: Vec<Element<'a, Message>> = Vec::new();
    for section in Section::ALL {
        let label = Text::new(ctx.i18n.tr(section.nav_key())).size(typography::BODY);
        links.push(
            button(label)
                .on_press(Message::NavigateTo(section))
                .style(styles::button::link(ctx.scheme.text_secondary))
                .padding([spacing::XXS, spacing::XS])
                .into(),
        );
    }
    let link_row = directed_row(ctx.direction, links).spacing(spacing::MD);

    let picker = language_picker::view(language_picker::ViewContext {
        i18n: ctx.i18n,
        direction: ctx.direction,
        show_label: false,
    })
    .map(Message::LanguageSelected);

    let row = directed_row(
        ctx.direction,
        vec![
            brand.into(),
            Space::new().width(Length::Fill).into(),
            link_row.into(),
            Space::new().width(Length::Fixed(spacing::XL)).into(),
            picker,
        ],
    )
    .padding([0.0, spacing::LG])
    .align_y(Vertical::Center)
    .width(Length::Fill);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar(ctx.scheme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_in_both_directions() {
        let i18n = I18n::default();
        let scheme = ColorScheme::light();
        for direction in [Direction::RightToLeft, Direction::LeftToRight] {
            let _element = view(ViewContext {
                i18n: &i18n,
                direction,
                scheme: &scheme,
            });
        }
    }

    #[test]
    fn nav_link_message_maps_to_navigate_event() {
        let event = update(Message::NavigateTo(Section::Rates));
        assert!(matches!(event, Event::NavigateTo(Section::Rates)));
    }

    #[test]
    fn language_message_maps_to_select_event() {
        let event = update(Message::LanguageSelected(Locale::Tr));
        assert!(matches!(event, Event::SelectLanguage(Locale::Tr)));
    }
}
