// SPDX-License-Identifier: MPL-2.0
//! Trust section: the three reasons-to-trust cards and the statistics strip.

use super::{section_header, Message, ViewContext};
use crate::content::{self, Stat, TrustFeature};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::directed_row;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = section_header(ctx.i18n, "trust-heading", "trust-lead", ctx.scheme);

    let feature_cards: Vec<Element<'a, Message>> = content::TRUST_FEATURES
        .iter()
        .map(|feature| feature_card(&ctx, feature))
        .collect();
    let features_row = directed_row(ctx.direction, feature_cards).spacing(spacing::XL);

    let stat_cells: Vec<Element<'a, Message>> = content::STATS
        .iter()
        .map(|stat| stat_cell(&ctx, stat))
        .collect();
    let stats_row = directed_row(ctx.direction, stat_cells)
        .spacing(spacing::XL)
        .width(Length::Fill);
    let stats_strip = Container::new(stats_row)
        .padding(spacing::XL)
        .width(Length::Fixed(sizing::CONTENT_MAX_WIDTH))
        .style(styles::container::card(ctx.scheme));

    let inner = Column::new()
        .push(header)
        .push(features_row)
        .push(stats_strip)
        .spacing(spacing::XL)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(inner).width(Length::Fill).into()
}

fn feature_card<'a>(ctx: &ViewContext<'a>, feature: &TrustFeature) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr(feature.title_key))
        .size(typography::TITLE_SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill);
    let body = Text::new(ctx.i18n.tr(feature.body_key))
        .size(typography::BODY)
        .color(ctx.scheme.text_secondary)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    Column::new()
        .push(title)
        .push(body)
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .into()
}

fn stat_cell<'a>(ctx: &ViewContext<'a>, stat: &Stat) -> Element<'a, Message> {
    let value = Text::new(stat.value)
        .size(typography::TITLE_LG)
        .color(ctx.scheme.brand_primary)
        .align_x(Horizontal::Center)
        .width(Length::Fill);
    let label = Text::new(ctx.i18n.tr(stat.label_key))
        .size(typography::BODY)
        .color(ctx.scheme.text_secondary)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    Column::new()
        .push(value)
        .push(label)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .into()
}
