// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary action button (e.g. "Open tour…").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style for the selected entry in the sidebar.
///
/// Uses the brand colors so the highlighted slide reads the same in light
/// and dark themes.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for unselected sidebar entries.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette_ext.background.strong.color)),
            text_color: palette_ext.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette_ext.primary.strong.color)),
            text_color: palette_ext.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn selected_entry_is_highlighted_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = selected(&theme, button::Status::Active);
            assert_eq!(
                style.background,
                Some(Background::Color(palette::PRIMARY_500))
            );
            assert_eq!(style.text_color, Color::WHITE);
        }
    }

    #[test]
    fn unselected_entry_has_no_background_when_idle() {
        let theme = Theme::Dark;
        let style = unselected(&theme, button::Status::Active);
        assert_eq!(style.background, None);
    }
}
