// SPDX-License-Identifier: MPL-2.0
//! Rates & services section: one card per posted currency pair, then one card
//! per service offering.

use super::{section_header, Message, ViewContext};
use crate::content::{self, RateCard, ServiceCard, Trend};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::{directed_row, start_alignment};
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Space, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = section_header(ctx.i18n, "rates-heading", "rates-lead", ctx.scheme);

    let rate_cards: Vec<Element<'a, Message>> = content::RATES
        .iter()
        .map(|card| rate_card(&ctx, card))
        .collect();
    let rates_row = directed_row(ctx.direction, rate_cards).spacing(spacing::LG);

    let service_cards: Vec<Element<'a, Message>> = content::SERVICES
        .iter()
        .map(|card| service_card(&ctx, card))
        .collect();
    let services_row = directed_row(ctx.direction, service_cards).spacing(spacing::LG);

    let inner = Column::new()
        .push(header)
        .push(rates_row)
        .push(services_row)
        .spacing(spacing::XL)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(inner)
        .width(Length::Fill)
        .style(styles::container::section_secondary(ctx.scheme))
        .into()
}

fn rate_card<'a>(ctx: &ViewContext<'a>, card: &RateCard) -> Element<'a, Message> {
    let align = start_alignment(ctx.direction);

    let trend_arrow = match card.trend {
        Trend::Up => Text::new("▲").color(palette::TREND_UP),
        Trend::Down => Text::new("▼").color(palette::TREND_DOWN),
    };

    let pair_column = Column::new()
        .push(Text::new(card.pair).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr(card.name_key))
                .size(typography::CAPTION)
                .color(ctx.scheme.text_secondary),
        )
        .spacing(spacing::XXS);

    let head = directed_row(
        ctx.direction,
        vec![
            pair_column.into(),
            Space::new().width(Length::Fill).into(),
            trend_arrow.into(),
        ],
    )
    .width(Length::Fill);

    let buy_row = quote_row(ctx, "rate-buy", card.buy);
    let sell_row = quote_row(ctx, "rate-sell", card.sell);

    let inner = Column::new()
        .push(head)
        .push(buy_row)
        .push(sell_row)
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .align_x(align);

    Container::new(inner)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card(ctx.scheme))
        .into()
}

fn quote_row<'a>(ctx: &ViewContext<'a>, label_key: &str, figure: &'static str) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(label_key))
        .size(typography::BODY)
        .color(ctx.scheme.text_secondary);
    let value = Text::new(figure).size(typography::TITLE_SM);

    directed_row(
        ctx.direction,
        vec![
            label.into(),
            Space::new().width(Length::Fill).into(),
            value.into(),
        ],
    )
    .width(Length::Fill)
    .into()
}

fn service_card<'a>(ctx: &ViewContext<'a>, card: &ServiceCard) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr(card.title_key))
        .size(typography::TITLE_SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill);
    let body = Text::new(ctx.i18n.tr(card.body_key))
        .size(typography::BODY)
        .color(ctx.scheme.text_secondary)
        .align_x(Horizontal::Center)
        .width(Length::Fill);
    let learn_more = button(
        Text::new(ctx.i18n.tr("service-learn-more")).size(typography::BODY),
    )
    .on_press(Message::LearnMore)
    .style(styles::button::link(ctx.scheme.brand_primary))
    .padding(0);

    let inner = Column::new()
        .push(title)
        .push(body)
        .push(learn_more)
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    Container::new(inner)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card(ctx.scheme))
        .into()
}
