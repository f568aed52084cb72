// SPDX-License-Identifier: MPL-2.0
//! UI components and visual building blocks.
//!
//! Layout direction is applied here, at the rendering boundary: components
//! receive the [`Direction`](crate::locale::Direction) derived from the active
//! locale and order their rows (and anchor their text) accordingly. Locale
//! state itself stays pure and never touches layout.

pub mod design_tokens;
pub mod footer;
pub mod language_picker;
pub mod navbar;
pub mod sections;
pub mod styles;
pub mod theming;

use crate::locale::Direction;
use iced::alignment::Horizontal;
use iced::widget::Row;
use iced::Element;

/// Builds a row whose children follow the layout direction: given in reading
/// order, they are reversed for right-to-left locales.
pub fn directed_row<'a, M: 'a>(
    direction: Direction,
    children: Vec<Element<'a, M>>,
) -> Row<'a, M> {
    let mut row = Row::new();
    match direction {
        Direction::LeftToRight => {
            for child in children {
                row = row.push(child);
            }
        }
        Direction::RightToLeft => {
            for child in children.into_iter().rev() {
                row = row.push(child);
            }
        }
    }
    row
}

/// Horizontal anchor for the start of a line in the given direction.
pub fn start_alignment(direction: Direction) -> Horizontal {
    match direction {
        Direction::RightToLeft => Horizontal::Right,
        Direction::LeftToRight => Horizontal::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_alignment_follows_direction() {
        assert_eq!(start_alignment(Direction::RightToLeft), Horizontal::Right);
        assert_eq!(start_alignment(Direction::LeftToRight), Horizontal::Left);
    }
}
