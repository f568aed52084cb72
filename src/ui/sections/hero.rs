// SPDX-License-Identifier: MPL-2.0
//! Hero section: the office name, tagline, locality, lead paragraph, and the
//! two calls to action (WhatsApp transfer, phone call).

use super::{Message, ViewContext};
use crate::content::ContactChannel;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::{directed_row, start_alignment};
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let align = start_alignment(ctx.direction);

    let title = Column::new()
        .push(
            Text::new(ctx.i18n.tr("hero-title-name"))
                .size(typography::DISPLAY)
                .align_x(align),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-title-tagline"))
                .size(typography::DISPLAY)
                .color(ctx.scheme.brand_accent)
                .align_x(align),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-title-place"))
                .size(typography::DISPLAY)
                .align_x(align),
        )
        .spacing(spacing::XXS);

    let lead = Text::new(ctx.i18n.tr("hero-lead"))
        .size(typography::BODY_LG)
        .color(ctx.scheme.band_text_muted)
        .align_x(align);

    let transfer_cta = button(
        Text::new(ctx.i18n.tr("hero-cta-transfer")).size(typography::BODY_LG),
    )
    .on_press(Message::OpenChannel(ContactChannel::WhatsApp))
    .style(styles::button::cta)
    .padding([spacing::MD, spacing::XL]);

    let call_cta = button(Text::new(ctx.i18n.tr("hero-cta-call")).size(typography::BODY_LG))
        .on_press(Message::OpenChannel(ContactChannel::Phone))
        .style(styles::button::band_outline)
        .padding([spacing::MD, spacing::XL]);

    let cta_row = directed_row(ctx.direction, vec![transfer_cta.into(), call_cta.into()])
        .spacing(spacing::MD);

    let inner = Column::new()
        .push(title)
        .push(lead)
        .push(cta_row)
        .spacing(spacing::LG)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill);

    Container::new(inner)
        .width(Length::Fill)
        .style(styles::container::band(ctx.scheme))
        .into()
}
