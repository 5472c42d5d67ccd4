// SPDX-License-Identifier: MPL-2.0
//! Slide selection applied to a display surface.
//!
//! `TourSelector` is the only writer of a surface's image source. It owns
//! the immutable tour it selects from and nothing else; which image is
//! currently shown is entirely the surface's own state, so the selector is
//! stateless between calls and selections are independent of call order.

use super::{SlideIndex, Tour, TourError};
use std::path::Path;

/// A presentation element whose image source can be replaced.
///
/// The selector never owns the surface; it receives one mutably per call.
/// In the application this is implemented by the viewer pane's state.
pub trait DisplaySurface {
    /// Replaces the image source shown by the surface.
    fn set_image_source(&mut self, source: &Path);
}

/// Applies slide selection and reset to a display surface.
#[derive(Debug, Clone)]
pub struct TourSelector {
    tour: Tour,
}

impl TourSelector {
    /// Creates a selector over the given tour.
    pub fn new(tour: Tour) -> Self {
        Self { tour }
    }

    /// Returns the tour the selector was built with.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Shows the slide at `index` on the surface.
    ///
    /// Indices outside `[1, len]` are rejected and the surface is left
    /// untouched.
    pub fn switch_to(
        &self,
        index: SlideIndex,
        surface: &mut impl DisplaySurface,
    ) -> Result<(), TourError> {
        let slide = self.tour.slide(index)?;
        surface.set_image_source(slide.image());
        Ok(())
    }

    /// Shows the overview image on the surface.
    ///
    /// Cannot fail and is idempotent under repeated calls.
    pub fn reset(&self, surface: &mut impl DisplaySurface) {
        surface.set_image_source(self.tour.overview().image());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::Slide;
    use std::path::PathBuf;

    /// Records every source assignment for assertions.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        source: Option<PathBuf>,
        assignments: usize,
    }

    impl DisplaySurface for RecordingSurface {
        fn set_image_source(&mut self, source: &Path) {
            self.source = Some(source.to_path_buf());
            self.assignments += 1;
        }
    }

    fn selector_abc() -> TourSelector {
        let tour = Tour::new(
            "Letters",
            Slide::new("Main", "main.png"),
            vec![
                Slide::new("A", "a.png"),
                Slide::new("B", "b.png"),
                Slide::new("C", "c.png"),
            ],
        )
        .expect("failed to build tour");
        TourSelector::new(tour)
    }

    fn index(n: u32) -> SlideIndex {
        SlideIndex::new(n).expect("nonzero index")
    }

    #[test]
    fn switch_to_sets_the_selected_slide() {
        let selector = selector_abc();
        let mut surface = RecordingSurface::default();

        selector
            .switch_to(index(1), &mut surface)
            .expect("valid index");
        assert_eq!(surface.source.as_deref(), Some(Path::new("a.png")));
    }

    #[test]
    fn every_valid_index_maps_to_its_catalog_entry() {
        let selector = selector_abc();
        let expected = ["a.png", "b.png", "c.png"];

        for (offset, path) in expected.iter().enumerate() {
            let mut surface = RecordingSurface::default();
            selector
                .switch_to(index(offset as u32 + 1), &mut surface)
                .expect("valid index");
            assert_eq!(surface.source.as_deref(), Some(Path::new(path)));
        }
    }

    #[test]
    fn switch_to_last_index_shows_last_slide() {
        let selector = selector_abc();
        let mut surface = RecordingSurface::default();

        selector
            .switch_to(index(3), &mut surface)
            .expect("valid index");
        assert_eq!(surface.source.as_deref(), Some(Path::new("c.png")));
    }

    #[test]
    fn switch_to_past_end_is_rejected_and_surface_untouched() {
        let selector = selector_abc();
        let mut surface = RecordingSurface::default();

        let err = selector
            .switch_to(index(4), &mut surface)
            .expect_err("out of range");
        assert_eq!(
            err,
            TourError::SlideOutOfRange {
                index: index(4),
                total: 3
            }
        );
        assert_eq!(surface.source, None);
        assert_eq!(surface.assignments, 0);
    }

    #[test]
    fn rejected_selection_keeps_previous_source() {
        let selector = selector_abc();
        let mut surface = RecordingSurface::default();

        selector
            .switch_to(index(2), &mut surface)
            .expect("valid index");
        let err = selector.switch_to(index(7), &mut surface);
        assert!(err.is_err());
        assert_eq!(surface.source.as_deref(), Some(Path::new("b.png")));
        assert_eq!(surface.assignments, 1);
    }

    #[test]
    fn reset_shows_the_overview() {
        let selector = selector_abc();
        let mut surface = RecordingSurface::default();

        selector
            .switch_to(index(3), &mut surface)
            .expect("valid index");
        selector.reset(&mut surface);
        assert_eq!(surface.source.as_deref(), Some(Path::new("main.png")));
    }

    #[test]
    fn reset_is_idempotent() {
        let selector = selector_abc();

        let mut once = RecordingSurface::default();
        selector.reset(&mut once);

        let mut twice = RecordingSurface::default();
        selector.reset(&mut twice);
        selector.reset(&mut twice);

        assert_eq!(once.source, twice.source);
    }

    #[test]
    fn selections_are_independent_of_call_order() {
        let selector = selector_abc();

        let mut surface = RecordingSurface::default();
        selector
            .switch_to(index(3), &mut surface)
            .expect("valid index");
        selector
            .switch_to(index(1), &mut surface)
            .expect("valid index");
        assert_eq!(surface.source.as_deref(), Some(Path::new("a.png")));

        let mut fresh = RecordingSurface::default();
        selector
            .switch_to(index(1), &mut fresh)
            .expect("valid index");
        assert_eq!(fresh.source, surface.source);
    }

    #[test]
    fn switch_then_reset_then_switch_scenario() {
        let selector = selector_abc();
        let mut surface = RecordingSurface::default();

        selector
            .switch_to(index(2), &mut surface)
            .expect("valid index");
        assert_eq!(surface.source.as_deref(), Some(Path::new("b.png")));

        selector.reset(&mut surface);
        assert_eq!(surface.source.as_deref(), Some(Path::new("main.png")));

        selector
            .switch_to(index(3), &mut surface)
            .expect("valid index");
        assert_eq!(surface.source.as_deref(), Some(Path::new("c.png")));
    }
}
