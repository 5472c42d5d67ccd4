// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! module exposes a `ViewContext` struct, a `Message` enum and a free `view`
//! function, with the application mapping component messages into its own.
//!
//! - [`sidebar`] - Numbered slide list with the overview entry on top
//! - [`viewer`] - Display pane showing the current slide image
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod viewer;
