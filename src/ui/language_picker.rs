//! The three-option language picker, rendered identically in the navbar and
//! the footer. Emits the chosen [`Locale`] directly; callers `.map` it into
//! their own message type.

use crate::i18n::fluent::I18n;
use crate::locale::{Direction, Locale};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::{directed_row, start_alignment};
use iced::alignment::Vertical;
use iced::widget::{Button, Text};
use iced::Element;

/// Contextual data needed to render the picker.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub direction: Direction,
    /// Show the localized "Language:" caption (footer only).
    pub show_label: bool,
}

/// Render the picker. The emitted message is the selected locale.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Locale> {
    let mut children: Vec<Element<'a, Locale>> = Vec::new();

    if ctx.show_label {
        children.push(
            Text::new(ctx.i18n.tr("language-label"))
                .size(typography::BODY)
                .align_x(start_alignment(ctx.direction))
                .into(),
        );
    }

    for locale in Locale::ALL {
        let label = Text::new(ctx.i18n.tr(locale.name_key())).size(typography::BODY);
        let mut button = Button::new(label).on_press(locale);

        if ctx.i18n.is_active(locale) {
            button = button.style(styles::button::locale_selected);
        } else {
            button = button.style(styles::button::locale_option);
        }

        children.push(button.into());
    }

    directed_row(ctx.direction, children)
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_renders_for_every_locale() {
        let mut i18n = I18n::default();
        for locale in Locale::ALL {
            i18n.set_locale(locale);
            let _element = view(ViewContext {
                i18n: &i18n,
                direction: locale.direction(),
                show_label: false,
            });
        }
    }

    #[test]
    fn picker_renders_with_label() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            direction: Direction::RightToLeft,
            show_label: true,
        });
    }
}
