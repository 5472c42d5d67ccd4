// SPDX-License-Identifier: MPL-2.0
//! Window icon produced from the project's branding SVG.
//!
//! The SVG is embedded and rasterized at startup, so packaging never has to
//! locate icon files on disk and the repository carries no binary assets.

use iced::window::{icon, Icon};
use resvg::usvg;

const BRANDING_SVG: &str = include_str!("../assets/branding/iced_tour.svg");
const ICON_SIZE: u32 = 64;

/// Rasterizes the branding SVG into an RGBA window icon.
///
/// Returns `None` if parsing or rendering fails; the window then keeps the
/// platform default icon.
pub fn window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(BRANDING_SVG.as_bytes(), &usvg::Options::default()).ok()?;

    let source_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / source_size.width(),
        ICON_SIZE as f32 / source_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branding_svg_rasterizes_to_an_icon() {
        assert!(window_icon().is_some());
    }
}
