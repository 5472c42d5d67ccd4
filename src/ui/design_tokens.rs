// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by all UI components.
//!
//! - **Palette**: base colors
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions
//!
//! Tokens are meant to stay consistent with each other; keep the ratios when
//! adjusting them.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod sizing {
    /// Width of the slide list panel.
    pub const SIDEBAR_WIDTH: f32 = 260.0;

    /// Width reserved for the slide number in a sidebar entry.
    pub const ENTRY_NUMBER_WIDTH: f32 = 28.0;
}

pub mod typography {
    /// Medium title - tour title, empty state heading
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - most UI text, labels
    pub const BODY: f32 = 14.0;

    /// Small body - hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - slide numbers, dimensions, small info
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

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

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
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
    fn sidebar_fits_number_column() {
        assert!(sizing::SIDEBAR_WIDTH > sizing::ENTRY_NUMBER_WIDTH * 2.0);
    }
}
