// SPDX-License-Identifier: MPL-2.0
//! The four page sections, in page order: hero, rates & services, trust, and
//! contact. Each renders from the active locale's Fluent bundle plus the
//! structured literals in [`crate::content`]; none of them branch on the
//! locale itself.

pub mod contact;
pub mod hero;
pub mod rates;
pub mod trust;

use crate::content::ContactChannel;
use crate::i18n::fluent::I18n;
use crate::locale::Direction;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{Column, Text};
use iced::Length;

/// Messages emitted by the page sections.
#[derive(Debug, Clone)]
pub enum Message {
    /// A contact channel card or CTA was activated; hand its URI to the OS.
    OpenChannel(ContactChannel),
    /// A service card's learn-more link was pressed; scroll to the contact
    /// section.
    LearnMore,
}

/// Contextual data shared by every section view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub direction: Direction,
    pub scheme: &'a ColorScheme,
}

/// Centered heading + lead paragraph that opens each section after the hero.
pub(crate) fn section_header<'a, M: 'a>(
    i18n: &I18n,
    heading_key: &str,
    lead_key: &str,
    scheme: &ColorScheme,
) -> Column<'a, M> {
    Column::new()
        .push(
            Text::new(i18n.tr(heading_key))
                .size(typography::TITLE_LG)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
        )
        .push(
            Text::new(i18n.tr(lead_key))
                .size(typography::BODY_LG)
                .color(scheme.text_secondary)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
        )
        .spacing(spacing::SM)
        .width(Length::Fill)
}
