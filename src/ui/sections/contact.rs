// SPDX-License-Identifier: MPL-2.0
//! Contact section: address and working-hours panels, the three contact
//! channel cards, and the map placeholder with its external map link.

use super::{section_header, Message, ViewContext};
use crate::content::ContactChannel;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::{directed_row, start_alignment};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = section_header(ctx.i18n, "contact-heading", "contact-lead", ctx.scheme);

    let info_column = Column::new()
        .push(info_panel(
            &ctx,
            "contact-address-title",
            &["contact-address-line1", "contact-address-line2"],
        ))
        .push(info_panel(
            &ctx,
            "contact-hours-title",
            &["contact-hours-weekdays", "contact-hours-friday"],
        ))
        .push(channel_cards(&ctx))
        .spacing(spacing::LG)
        .width(Length::FillPortion(1));

    let map_column = Container::new(map_panel(&ctx)).width(Length::FillPortion(1));

    let body = directed_row(ctx.direction, vec![info_column.into(), map_column.into()])
        .spacing(spacing::XL)
        .width(Length::Fixed(sizing::CONTENT_MAX_WIDTH));

    let inner = Column::new()
        .push(header)
        .push(body)
        .spacing(spacing::XL)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(inner)
        .width(Length::Fill)
        .style(styles::container::section_secondary(ctx.scheme))
        .into()
}

fn info_panel<'a>(
    ctx: &ViewContext<'a>,
    title_key: &str,
    line_keys: &[&str],
) -> Element<'a, Message> {
    let align = start_alignment(ctx.direction);

    let mut column = Column::new()
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_SM).align_x(align))
        .spacing(spacing::XS);
    for key in line_keys {
        column = column.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY)
                .color(ctx.scheme.text_secondary)
                .align_x(align),
        );
    }

    Container::new(column.padding(spacing::LG).width(Length::Fill).align_x(align))
        .width(Length::Fill)
        .style(styles::container::card(ctx.scheme))
        .into()
}

fn channel_cards<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = ContactChannel::CARDS
        .iter()
        .map(|&channel| {
            let mut column = Column::new()
                .push(
                    Text::new(ctx.i18n.tr(channel.title_key()))
                        .size(typography::BODY_LG)
                        .align_x(Horizontal::Center)
                        .width(Length::Fill),
                )
                .spacing(spacing::XXS)
                .align_x(Horizontal::Center);
            if let Some(detail) = channel.detail() {
                column = column.push(
                    Text::new(detail)
                        .size(typography::CAPTION)
                        .color(ctx.scheme.text_secondary)
                        .align_x(Horizontal::Center)
                        .width(Length::Fill),
                );
            }

            let card = Container::new(column.padding(spacing::MD))
                .width(Length::Fill)
                .style(styles::container::card(ctx.scheme));

            button(card)
                .on_press(Message::OpenChannel(channel))
                .style(styles::button::link(ctx.scheme.text_primary))
                .padding(0)
                .width(Length::Fill)
                .into()
        })
        .collect();

    directed_row(ctx.direction, cards)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .into()
}

fn map_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("contact-map-title"))
        .size(typography::TITLE_SM)
        .align_x(start_alignment(ctx.direction));

    let placeholder_inner = Column::new()
        .push(
            Text::new(ctx.i18n.tr("contact-map-locality"))
                .size(typography::TITLE_SM)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
        )
        .push(
            Text::new(ctx.i18n.tr("contact-map-city"))
                .size(typography::BODY)
                .color(ctx.scheme.text_secondary)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
        )
        .spacing(spacing::XS)
        .width(Length::Fill);

    let placeholder = Container::new(placeholder_inner)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MAP_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::map_placeholder(ctx.scheme));

    let open_link = button(
        Text::new(ctx.i18n.tr(ContactChannel::Map.title_key())).size(typography::BODY),
    )
    .on_press(Message::OpenChannel(ContactChannel::Map))
    .style(styles::button::link(ctx.scheme.brand_primary))
    .padding(0);

    let column = Column::new()
        .push(title)
        .push(placeholder)
        .push(open_link)
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill);

    Container::new(column)
        .width(Length::Fill)
        .style(styles::container::card(ctx.scheme))
        .into()
}
