// SPDX-License-Identifier: MPL-2.0
//! Slide image loading and decoding (PNG, JPEG, GIF, WebP, BMP, SVG).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// A decoded slide image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Loads an image from the given path and returns its decoded data.
///
/// Supports common raster formats as well as SVG; SVG files are rasterized
/// at their intrinsic size using resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Io`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
    } else {
        let img_bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
        let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Io(e.to_string()))?;

        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();

        Ok(ImageData::from_rgba(width, height, pixels))
    }
}
