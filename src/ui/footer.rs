// SPDX-License-Identifier: MPL-2.0
//! Page footer: brand blurb, quick links, contact info, copyright, and the
//! second language picker. Scrolls with the page, unlike the navbar.

use crate::content::{self, Section};
use crate::i18n::fluent::I18n;
use crate::locale::{Direction, Locale};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::language_picker;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{directed_row, start_alignment};
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub direction: Direction,
    pub scheme: &'a ColorScheme,
}

/// Messages emitted by the footer.
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

/// Process a footer message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::NavigateTo(section) => Event::NavigateTo(section),
        Message::LanguageSelected(locale) => Event::SelectLanguage(locale),
    }
}

/// Render the footer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let align = start_alignment(ctx.direction);

    let blurb = Column::new()
        .push(
            Text::new(ctx.i18n.tr("brand-name"))
                .size(typography::TITLE_MD)
                .align_x(align),
        )
        .push(
            Text::new(ctx.i18n.tr("footer-blurb"))
                .size(typography::BODY)
                .color(ctx.scheme.band_text_muted)
                .align_x(align),
        )
        .spacing(spacing::SM)
        .width(Length::FillPortion(2));

    let mut quick_links = Column::new()
        .push(Text::new(ctx.i18n.tr("footer-links-title")).size(typography::TITLE_SM))
        .spacing(spacing::XS)
        .width(Length::FillPortion(1));
    for section in Section::ALL {
        let label = Text::new(ctx.i18n.tr(section.footer_key()))
            .size(typography::BODY)
            .color(ctx.scheme.band_text_muted);
        quick_links = quick_links.push(
            button(label)
                .on_press(Message::NavigateTo(section))
                .style(styles::button::link(ctx.scheme.band_text_muted))
                .padding(0),
        );
    }

    let contact_info = Column::new()
        .push(Text::new(ctx.i18n.tr("footer-contact-title")).size(typography::TITLE_SM))
        .push(
            Text::new(content::PHONE_DISPLAY)
                .size(typography::BODY)
                .color(ctx.scheme.band_text_muted),
        )
        .push(
            Text::new(content::TELEGRAM_HANDLE)
                .size(typography::BODY)
                .color(ctx.scheme.band_text_muted),
        )
        .push(
            Text::new(ctx.i18n.tr("contact-address-line1"))
                .size(typography::BODY)
                .color(ctx.scheme.band_text_muted)
                .align_x(align),
        )
        .spacing(spacing::XS)
        .width(Length::FillPortion(1));

    let columns = directed_row(
        ctx.direction,
        vec![blurb.into(), quick_links.into(), contact_info.into()],
    )
    .spacing(spacing::XL)
    .width(Length::Fill);

    let copyright = Text::new(ctx.i18n.tr("footer-copyright"))
        .size(typography::CAPTION)
        .color(ctx.scheme.band_text_muted);

    let picker = language_picker::view(language_picker::ViewContext {
        i18n: ctx.i18n,
        direction: ctx.direction,
        show_label: true,
    })
    .map(Message::LanguageSelected);

    let bottom_row = directed_row(
        ctx.direction,
        vec![
            copyright.into(),
            Space::new().width(Length::Fill).into(),
            picker,
        ],
    )
    .align_y(Vertical::Center)
    .width(Length::Fill);

    let inner = Column::new()
        .push(columns)
        .push(bottom_row)
        .spacing(spacing::XL)
        .padding(spacing::XXL);

    Container::new(inner)
        .width(Length::Fill)
        .style(styles::container::band(ctx.scheme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_view_renders_in_both_directions() {
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
    fn footer_messages_map_to_events() {
        assert!(matches!(
            update(Message::NavigateTo(Section::Contact)),
            Event::NavigateTo(Section::Contact)
        ));
        assert!(matches!(
            update(Message::LanguageSelected(Locale::En)),
            Event::SelectLanguage(Locale::En)
        ));
    }
}
