// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Elevated card on a section surface (rate cards, service cards, contact
/// panels).
pub fn card(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Full-bleed brand band (hero and footer backgrounds).
pub fn band(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.band_background;
    let text = scheme.band_text;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..container::Style::default()
    }
}

/// The fixed navigation bar strip.
pub fn navbar(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Alternating section background (rates, contact).
pub fn section_secondary(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.surface_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

/// Map placeholder panel inside the contact section.
pub fn map_placeholder(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.surface_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color {
                a: 0.5,
                ..palette::PRIMARY_400
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}
