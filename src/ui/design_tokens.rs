// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use rateboard::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a hero overlay color
let overlay = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::WHITE
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.93, 0.94);

    // Brand colors (deep teal scale, the office's primary)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.95, 0.94);
    pub const PRIMARY_400: Color = Color::from_rgb(0.16, 0.55, 0.52);
    pub const PRIMARY_500: Color = Color::from_rgb(0.09, 0.45, 0.43);
    pub const PRIMARY_600: Color = Color::from_rgb(0.06, 0.37, 0.35);
    pub const PRIMARY_800: Color = Color::from_rgb(0.03, 0.24, 0.23);

    // Accent colors (gold scale, used for CTAs and highlights)
    pub const GOLD_300: Color = Color::from_rgb(0.96, 0.82, 0.45);
    pub const GOLD_500: Color = Color::from_rgb(0.85, 0.65, 0.13);
    pub const GOLD_600: Color = Color::from_rgb(0.72, 0.53, 0.04);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    // Rate trend colors
    pub const TREND_UP: Color = SUCCESS_500;
    pub const TREND_DOWN: Color = ERROR_500;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Muted foreground text on a dark hero/footer background.
    pub const TEXT_MUTED: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed navigation bar height. Anchor scroll targets subtract this so a
    /// section's heading lands below the bar, not under it.
    pub const NAVBAR_HEIGHT: f32 = 80.0;

    /// Maximum content column width on wide displays.
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

    /// Width of one card in the rates / services / trust grids.
    pub const CARD_WIDTH: f32 = 340.0;

    /// Height of the map placeholder panel.
    pub const MAP_HEIGHT: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand name, card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Sub-headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Leads, stat figures
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Footer copyright, rate pair subtitles
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Sizing validation
    assert!(sizing::NAVBAR_HEIGHT > 0.0);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::CARD_WIDTH);

    // Color validation
    assert!(palette::PRIMARY_500.g >= 0.0 && palette::PRIMARY_500.g <= 1.0);
};
