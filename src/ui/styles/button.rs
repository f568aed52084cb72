// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gold call-to-action button (hero transfer CTA).
pub fn cta(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GOLD_300)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::GOLD_600,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            ..button::Style::default()
        },
        _ => button::Style {
            background: Some(Background::Color(palette::GOLD_500)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::GOLD_600,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::SM,
            ..button::Style::default()
        },
    }
}

/// Outlined button on a dark band (hero call CTA).
pub fn band_outline(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.3,
        _ => 0.15,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: Border {
            color: Color {
                a: 0.4,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Borderless text button used for nav links and learn-more links.
pub fn link(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
            _ => text_color,
        };
        button::Style {
            background: None,
            text_color: color,
            border: Border::default(),
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}

/// The active entry in the language picker.
pub fn locale_selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// An inactive entry in the language picker.
pub fn locale_option(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(palette::GRAY_200)),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::GRAY_700,
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_uses_gold_background() {
        let style = cta(&Theme::Light, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color, palette::GOLD_500),
            other => panic!("expected gold background, got {:?}", other),
        }
    }

    #[test]
    fn selected_locale_uses_brand_background() {
        let style = locale_selected(&Theme::Light, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color, palette::PRIMARY_500),
            other => panic!("expected brand background, got {:?}", other),
        }
    }
}
