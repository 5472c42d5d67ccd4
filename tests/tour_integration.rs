// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests for tour loading and slide selection.
//!
//! These exercise the full chain: a manifest on disk, real image files, the
//! selector writing to a display surface, and the image loader decoding the
//! selected source.

use iced_tour::media;
use iced_tour::tour::{load_tour, DisplaySurface, SlideIndex, TourSelector};
use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
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

[[slides]]
label = "C"
image = "c.png"
"#;

/// Minimal display surface recording the assigned source.
#[derive(Debug, Default)]
struct Surface {
    source: Option<PathBuf>,
}

impl DisplaySurface for Surface {
    fn set_image_source(&mut self, source: &Path) {
        self.source = Some(source.to_path_buf());
    }
}

fn write_png(path: &Path, color: [u8; 4]) {
    RgbaImage::from_pixel(2, 2, Rgba(color))
        .save(path)
        .expect("failed to write test png");
}

fn write_tour(dir: &Path) -> PathBuf {
    let manifest_path = dir.join("tour.toml");
    fs::write(&manifest_path, MANIFEST).expect("failed to write manifest");
    write_png(&dir.join("main.png"), [255, 255, 255, 255]);
    write_png(&dir.join("a.png"), [255, 0, 0, 255]);
    write_png(&dir.join("b.png"), [0, 255, 0, 255]);
    write_png(&dir.join("c.png"), [0, 0, 255, 255]);
    manifest_path
}

fn index(n: u32) -> SlideIndex {
    SlideIndex::new(n).expect("nonzero index")
}

#[test]
fn switch_reset_switch_against_a_tour_on_disk() {
    let dir = tempdir().expect("failed to create temp dir");
    let manifest_path = write_tour(dir.path());

    let tour = load_tour(&manifest_path).expect("failed to load tour");
    let selector = TourSelector::new(tour);
    let mut surface = Surface::default();

    selector
        .switch_to(index(2), &mut surface)
        .expect("valid index");
    assert_eq!(surface.source.as_deref(), Some(dir.path().join("b.png").as_path()));

    selector.reset(&mut surface);
    assert_eq!(
        surface.source.as_deref(),
        Some(dir.path().join("main.png").as_path())
    );

    selector
        .switch_to(index(3), &mut surface)
        .expect("valid index");
    assert_eq!(surface.source.as_deref(), Some(dir.path().join("c.png").as_path()));
}

#[test]
fn every_selected_source_is_loadable() {
    let dir = tempdir().expect("failed to create temp dir");
    let manifest_path = write_tour(dir.path());

    let tour = load_tour(&manifest_path).expect("failed to load tour");
    let selector = TourSelector::new(tour.clone());

    let mut surface = Surface::default();
    selector.reset(&mut surface);
    for n in 1..=tour.len() as u32 {
        selector
            .switch_to(index(n), &mut surface)
            .expect("valid index");
        let source = surface.source.as_deref().expect("source assigned");
        let data = media::load_image(source).expect("selected image should decode");
        assert_eq!((data.width, data.height), (2, 2));
    }
}

#[test]
fn out_of_range_selection_is_rejected_after_loading_from_disk() {
    let dir = tempdir().expect("failed to create temp dir");
    let manifest_path = write_tour(dir.path());

    let tour = load_tour(&manifest_path).expect("failed to load tour");
    let total = tour.len();
    let selector = TourSelector::new(tour);
    let mut surface = Surface::default();

    let err = selector
        .switch_to(index(total as u32 + 1), &mut surface)
        .expect_err("out of range");
    assert!(err.to_string().contains("out of range"));
    assert_eq!(surface.source, None);
}

#[test]
fn catalog_walk_matches_manifest_order() {
    let dir = tempdir().expect("failed to create temp dir");
    let manifest_path = write_tour(dir.path());

    let tour = load_tour(&manifest_path).expect("failed to load tour");

    // The same walk `--list` prints: overview first, then 1-based slides.
    let mut listing = vec![format!("0. {}", tour.overview().label())];
    for n in 1..=tour.len() as u32 {
        let slide = tour.slide(index(n)).expect("valid index");
        listing.push(format!("{}. {}", n, slide.label()));
    }

    assert_eq!(listing, ["0. Main", "1. A", "2. B", "3. C"]);
}

#[test]
fn bundled_demo_tour_loads() {
    let manifest_path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/tours/demo.toml");

    let tour = load_tour(&manifest_path).expect("demo tour should load");
    assert_eq!(tour.len(), 13);
    assert_eq!(tour.overview().label(), "Overview");
    assert!(tour.overview().image().exists());
    for slide in tour.slides() {
        assert!(slide.image().exists(), "missing {}", slide.image().display());
    }
}
