// SPDX-License-Identifier: MPL-2.0
//! Tour manifest loading.
//!
//! A tour is described by a small TOML file:
//!
//! ```toml
//! title = "RISC-V simulator tour"
//! overview = { label = "Overview", image = "demo/overview.svg" }
//!
//! [[slides]]
//! label = "Code area"
//! image = "demo/code-area.svg"
//! ```
//!
//! Relative image paths resolve against the manifest file's parent
//! directory, so a tour directory can be moved as a unit. Unlike the
//! settings file, a broken manifest is reported instead of replaced with
//! defaults; the manifest is the primary input of the application.

use crate::error::{Error, Result};
use crate::tour::{Slide, Tour};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct ManifestFile {
    title: String,
    overview: ManifestSlide,
    #[serde(default)]
    slides: Vec<ManifestSlide>,
}

#[derive(Debug, Deserialize)]
struct ManifestSlide {
    label: String,
    image: PathBuf,
}

/// Loads a tour from a manifest file on disk.
///
/// Relative image paths are resolved against the manifest's parent
/// directory.
pub fn load_tour(path: &Path) -> Result<Tour> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Manifest(format!("cannot read {}: {}", path.display(), e)))?;
    parse_tour(&content, path.parent())
}

/// Parses a tour from manifest text.
///
/// `base_dir` is joined onto relative image paths; with `None` they are
/// kept as written.
pub fn parse_tour(manifest: &str, base_dir: Option<&Path>) -> Result<Tour> {
    let parsed: ManifestFile =
        toml::from_str(manifest).map_err(|e| Error::Manifest(e.to_string()))?;

    let overview = resolve_slide(parsed.overview, base_dir)?;
    let slides = parsed
        .slides
        .into_iter()
        .map(|slide| resolve_slide(slide, base_dir))
        .collect::<Result<Vec<_>>>()?;

    Tour::new(parsed.title, overview, slides)
}

fn resolve_slide(slide: ManifestSlide, base_dir: Option<&Path>) -> Result<Slide> {
    if slide.label.trim().is_empty() {
        return Err(Error::Manifest("slide label is empty".to_string()));
    }
    if slide.image.as_os_str().is_empty() {
        return Err(Error::Manifest(format!(
            "slide '{}' has an empty image path",
            slide.label
        )));
    }
    let image = match base_dir {
        Some(base) if slide.image.is_relative() => base.join(&slide.image),
        _ => slide.image,
    };
    Ok(Slide::new(slide.label, image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
title = "Letters"
overview = { label = "Main", image = "main.png" }

[[slides]]
label = "A"
image = "a.png"

[[slides]]
label = "B"
image = "b.png"
"#;

    #[test]
    fn parse_builds_tour_in_manifest_order() {
        let tour = parse_tour(MANIFEST, None).expect("failed to parse manifest");
        assert_eq!(tour.title(), "Letters");
        assert_eq!(tour.len(), 2);
        assert_eq!(tour.slides()[0].label(), "A");
        assert_eq!(tour.slides()[1].label(), "B");
        assert_eq!(tour.overview().label(), "Main");
    }

    #[test]
    fn parse_without_base_dir_keeps_paths_as_written() {
        let tour = parse_tour(MANIFEST, None).expect("failed to parse manifest");
        assert_eq!(tour.slides()[0].image(), Path::new("a.png"));
    }

    #[test]
    fn parse_joins_relative_paths_onto_base_dir() {
        let tour =
            parse_tour(MANIFEST, Some(Path::new("/tours/letters"))).expect("failed to parse");
        assert_eq!(
            tour.slides()[0].image(),
            Path::new("/tours/letters/a.png")
        );
        assert_eq!(
            tour.overview().image(),
            Path::new("/tours/letters/main.png")
        );
    }

    #[test]
    fn parse_keeps_absolute_paths_despite_base_dir() {
        let manifest = r#"
title = "Absolute"
overview = { label = "Main", image = "/elsewhere/main.png" }

[[slides]]
label = "A"
image = "/elsewhere/a.png"
"#;
        let tour = parse_tour(manifest, Some(Path::new("/tours"))).expect("failed to parse");
        assert_eq!(tour.slides()[0].image(), Path::new("/elsewhere/a.png"));
    }

    #[test]
    fn parse_rejects_manifest_without_slides() {
        let manifest = r#"
title = "Empty"
overview = { label = "Main", image = "main.png" }
"#;
        let err = parse_tour(manifest, None).expect_err("manifest without slides");
        match err {
            Error::Manifest(message) => assert!(message.contains("no slides")),
            other => panic!("expected Manifest error, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_blank_label() {
        let manifest = r#"
title = "Blank"
overview = { label = "Main", image = "main.png" }

[[slides]]
label = "  "
image = "a.png"
"#;
        let err = parse_tour(manifest, None).expect_err("blank label");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn parse_rejects_empty_image_path() {
        let manifest = r#"
title = "NoImage"
overview = { label = "Main", image = "main.png" }

[[slides]]
label = "A"
image = ""
"#;
        let err = parse_tour(manifest, None).expect_err("empty image path");
        match err {
            Error::Manifest(message) => assert!(message.contains("'A'")),
            other => panic!("expected Manifest error, got {:?}", other),
        }
    }

    #[test]
    fn parse_reports_invalid_toml() {
        let err = parse_tour("title = = nope", None).expect_err("invalid toml");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn load_resolves_images_relative_to_manifest_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("tour.toml");
        fs::write(&manifest_path, MANIFEST).expect("failed to write manifest");

        let tour = load_tour(&manifest_path).expect("failed to load tour");
        assert_eq!(tour.slides()[0].image(), temp_dir.path().join("a.png"));
        assert_eq!(tour.overview().image(), temp_dir.path().join("main.png"));
    }

    #[test]
    fn load_reports_missing_file_with_its_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("absent.toml");

        let err = load_tour(&missing).expect_err("missing manifest");
        match err {
            Error::Manifest(message) => assert!(message.contains("absent.toml")),
            other => panic!("expected Manifest error, got {:?}", other),
        }
    }
}
