// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the console.

## Organization

- **Palette**: Base colors, including the status and severity colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use qa_console::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

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
    pub const SLATE_900: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);
    pub const SLATE_600: Color = Color::from_rgb8(0x47, 0x55, 0x69);
    pub const SLATE_400: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);
    pub const SLATE_300: Color = Color::from_rgb8(0xcb, 0xd5, 0xe1);
    pub const SLATE_100: Color = Color::from_rgb8(0xf1, 0xf5, 0xf9);

    // Brand colors
    pub const PRIMARY_500: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
    pub const PRIMARY_600: Color = Color::from_rgb8(0x25, 0x63, 0xeb);

    // Semantic colors (snackbar backgrounds)
    pub const SUCCESS_600: Color = Color::from_rgb8(0x16, 0xa3, 0x4a);
    pub const ERROR_600: Color = Color::from_rgb8(0xdc, 0x26, 0x26);
    pub const WARNING_600: Color = Color::from_rgb8(0xd9, 0x77, 0x06);
    pub const INFO_600: Color = Color::from_rgb8(0x25, 0x63, 0xeb);

    // Defect severity
    pub const SEVERITY_CRITICAL: Color = Color::from_rgb8(0xb9, 0x1c, 0x1c);
    pub const SEVERITY_HIGH: Color = Color::from_rgb8(0xef, 0x44, 0x44);
    pub const SEVERITY_MEDIUM: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);
    pub const SEVERITY_LOW: Color = Color::from_rgb8(0x10, 0xb9, 0x81);

    // Badges (background, foreground)
    pub const BADGE_RED_BG: Color = Color::from_rgb8(0xfe, 0xe2, 0xe2);
    pub const BADGE_RED_FG: Color = Color::from_rgb8(0xb9, 0x1c, 0x1c);
    pub const BADGE_GREEN_BG: Color = Color::from_rgb8(0xd1, 0xfa, 0xe5);
    pub const BADGE_GREEN_FG: Color = Color::from_rgb8(0x06, 0x5f, 0x46);
    pub const BADGE_BLUE_BG: Color = Color::from_rgb8(0xef, 0xf6, 0xff);
    pub const BADGE_BLUE_FG: Color = Color::from_rgb8(0x1e, 0x40, 0xaf);
    pub const BADGE_INDIGO_BG: Color = Color::from_rgb8(0xee, 0xf2, 0xff);
    pub const BADGE_INDIGO_FG: Color = Color::from_rgb8(0x37, 0x30, 0xa3);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_WIDTH: f32 = 260.0;

    /// Snackbar card bounds and offset from the window corner.
    pub const SNACKBAR_MIN_WIDTH: f32 = 280.0;
    pub const SNACKBAR_MAX_WIDTH: f32 = 360.0;
    pub const SNACKBAR_TOP: f32 = 70.0;
    pub const SNACKBAR_RIGHT: f32 = 24.0;
    pub const SNACKBAR_PADDING_V: f32 = 14.0;
    pub const SNACKBAR_PADDING_H: f32 = 18.0;

    pub const ALERT_WIDTH: f32 = 420.0;
    pub const GALLERY_IMAGE_WIDTH: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 24.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Badges, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.15,
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::SNACKBAR_MAX_WIDTH > sizing::SNACKBAR_MIN_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn snackbar_colors_match_hex_values() {
        assert_eq!(palette::SUCCESS_600, Color::from_rgb8(22, 163, 74));
        assert_eq!(palette::ERROR_600, Color::from_rgb8(220, 38, 38));
        assert_eq!(palette::WARNING_600, Color::from_rgb8(217, 119, 6));
        assert_eq!(palette::INFO_600, Color::from_rgb8(37, 99, 235));
    }
}
