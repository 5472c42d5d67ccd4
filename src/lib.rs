// SPDX-License-Identifier: MPL-2.0
//! `iced_tour` is a desktop viewer for screenshot tours built with the Iced
//! GUI framework.
//!
//! A tour is an ordered set of labeled slide images plus one overview image,
//! described by a TOML manifest. Slides are addressed with a 1-based index
//! matching the numbered sidebar entries and the digit shortcuts; the
//! overview is shown by the reset action.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod tour;
pub mod ui;
