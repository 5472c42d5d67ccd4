// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::config::SurfaceBackground;
use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Theme};

/// Panel surface used for the sidebar.
///
/// Derived from the active Iced `Theme` background so the panel stays
/// readable in both light and dark modes without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        ..Default::default()
    }
}

/// Backdrop behind slides that do not fill the display pane.
pub fn viewer_surface(
    background: SurfaceBackground,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let color = match background {
            SurfaceBackground::Light => palette::GRAY_100,
            SurfaceBackground::Dark => palette::GRAY_900,
        };

        container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_surface_matches_configured_background() {
        let theme = Theme::Dark;

        let dark = viewer_surface(SurfaceBackground::Dark)(&theme);
        assert_eq!(dark.background, Some(Background::Color(palette::GRAY_900)));

        let light = viewer_surface(SurfaceBackground::Light)(&theme);
        assert_eq!(light.background, Some(Background::Color(palette::GRAY_100)));
    }
}
