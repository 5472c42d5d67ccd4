// SPDX-License-Identifier: MPL-2.0
//! Tour catalog types: labeled slides, 1-based slide indices and the
//! immutable tour built from them.
//!
//! A tour is an ordered list of slide images plus one overview image shown
//! by the reset action. Slides are addressed through [`SlideIndex`], which
//! counts from 1 to match the numbered entries in the sidebar and the digit
//! shortcuts; conversion to 0-based storage access happens in exactly one
//! place, inside [`Tour::slide`].

mod manifest;
mod selector;

pub use manifest::{load_tour, parse_tour};
pub use selector::{DisplaySurface, TourSelector};

use crate::error::{Error, Result};
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// 1-based position of a slide within a tour.
///
/// Every surface that shows slide numbers (sidebar entries, digit shortcuts,
/// the `--slide` flag) counts from 1, so the public contract does too. Zero
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideIndex(NonZeroU32);

impl SlideIndex {
    /// The first slide of any tour.
    pub const FIRST: SlideIndex = SlideIndex(NonZeroU32::MIN);

    /// Creates a slide index from a 1-based number.
    ///
    /// Returns `None` for zero.
    pub fn new(index: u32) -> Option<Self> {
        NonZeroU32::new(index).map(Self)
    }

    /// Returns the 1-based number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the 0-based storage offset.
    fn offset(self) -> usize {
        self.0.get() as usize - 1
    }

    /// Returns the following index in a tour of `total` slides.
    ///
    /// Wraps around to the first slide after the last one. Indices beyond
    /// `total` are treated as the last slide. Returns the first slide when
    /// `total` is zero.
    pub fn next_wrapping(self, total: usize) -> SlideIndex {
        let Some(total) = u32::try_from(total).ok().and_then(NonZeroU32::new) else {
            return SlideIndex::FIRST;
        };
        let current = self.0.get().min(total.get());
        let next = current % total.get() + 1;
        NonZeroU32::new(next).map(Self).unwrap_or(SlideIndex::FIRST)
    }

    /// Returns the preceding index in a tour of `total` slides.
    ///
    /// Wraps around to the last slide before the first one. Indices beyond
    /// `total` are treated as the last slide. Returns the first slide when
    /// `total` is zero.
    pub fn previous_wrapping(self, total: usize) -> SlideIndex {
        let Some(total) = u32::try_from(total).ok().and_then(NonZeroU32::new) else {
            return SlideIndex::FIRST;
        };
        let current = self.0.get().min(total.get());
        let previous = if current == 1 { total.get() } else { current - 1 };
        NonZeroU32::new(previous)
            .map(Self)
            .unwrap_or(SlideIndex::FIRST)
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tour entry: one image path and the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    label: String,
    image: PathBuf,
}

impl Slide {
    pub fn new(label: impl Into<String>, image: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            image: image.into(),
        }
    }

    /// Returns the label shown in the sidebar and above the image.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the path of the slide's image file.
    pub fn image(&self) -> &Path {
        &self.image
    }
}

/// Errors raised by slide selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourError {
    /// The requested index lies outside `[1, total]`.
    ///
    /// Selection rejects such indices instead of clamping them; showing a
    /// different slide than the one asked for would hide the caller's bug.
    SlideOutOfRange { index: SlideIndex, total: usize },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourError::SlideOutOfRange { index, total } => {
                write!(f, "slide {} is out of range (tour has {} slides)", index, total)
            }
        }
    }
}

/// An immutable, ordered catalog of slides plus one overview image.
///
/// Built once from a manifest (or directly in tests) and never mutated
/// afterwards; all fields are private and no mutating method exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    title: String,
    overview: Slide,
    slides: Vec<Slide>,
}

impl Tour {
    /// Creates a tour from its parts.
    ///
    /// Returns `Error::Manifest` when `slides` is empty; a tour without
    /// slides has nothing to select.
    pub fn new(title: impl Into<String>, overview: Slide, slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::Manifest("tour has no slides".to_string()));
        }
        Ok(Self {
            title: title.into(),
            overview,
            slides,
        })
    }

    /// Returns the slide at the given 1-based index.
    ///
    /// This is the single point where the public 1-based contract meets the
    /// 0-based storage.
    pub fn slide(&self, index: SlideIndex) -> std::result::Result<&Slide, TourError> {
        self.slides
            .get(index.offset())
            .ok_or(TourError::SlideOutOfRange {
                index,
                total: self.slides.len(),
            })
    }

    /// Returns the overview slide shown by the reset action.
    pub fn overview(&self) -> &Slide {
        &self.overview
    }

    /// Returns all slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Returns the tour's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the number of slides, not counting the overview.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed tour; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
