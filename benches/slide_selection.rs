// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for tour manifest parsing and slide selection.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_tour::tour::{parse_tour, DisplaySurface, SlideIndex, TourSelector};
use std::hint::black_box;
use std::path::{Path, PathBuf};

/// Builds a manifest with the given number of slides.
fn manifest(slides: usize) -> String {
    let mut text = String::from(
        "title = \"Bench tour\"\noverview = { label = \"Overview\", image = \"overview.png\" }\n",
    );
    for n in 1..=slides {
        text.push_str(&format!(
            "\n[[slides]]\nlabel = \"Slide {n}\"\nimage = \"slide-{n}.png\"\n"
        ));
    }
    text
}

#[derive(Debug, Default)]
struct Surface {
    source: Option<PathBuf>,
}

impl DisplaySurface for Surface {
    fn set_image_source(&mut self, source: &Path) {
        self.source = Some(source.to_path_buf());
    }
}

fn bench_parse_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_selection");

    let small = manifest(13);
    group.bench_function("parse_manifest_13", |b| {
        b.iter(|| black_box(parse_tour(&small, None).unwrap()));
    });

    let large = manifest(500);
    group.bench_function("parse_manifest_500", |b| {
        b.iter(|| black_box(parse_tour(&large, None).unwrap()));
    });

    group.finish();
}

fn bench_switch_and_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_selection");

    let tour = parse_tour(&manifest(13), None).unwrap();
    let selector = TourSelector::new(tour);
    let indices: Vec<SlideIndex> = (1..=13).filter_map(SlideIndex::new).collect();

    group.bench_function("switch_to_cycle_13", |b| {
        let mut surface = Surface::default();
        b.iter(|| {
            for &index in &indices {
                selector.switch_to(index, &mut surface).unwrap();
            }
            black_box(&surface);
        });
    });

    group.bench_function("reset", |b| {
        let mut surface = Surface::default();
        b.iter(|| {
            selector.reset(&mut surface);
            black_box(&surface);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_manifest, bench_switch_and_reset);
criterion_main!(benches);
