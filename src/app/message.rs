// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::tour::SlideIndex;
use crate::ui::sidebar;
use crate::ui::viewer;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Viewer(viewer::Message),
    /// A keyboard shortcut resolved to an action.
    Key {
        action: KeyAction,
        window: window::Id,
    },
    /// Result of the asynchronous image load for the given source path.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Trigger the open manifest dialog.
    OpenTourDialog,
    /// Result from the open manifest dialog.
    OpenTourDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Actions bound to keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Digits 1-9 select the matching slide.
    Slide(SlideIndex),
    /// `0`, Home and Escape reset to the overview image.
    Overview,
    NextSlide,
    PreviousSlide,
    ToggleFullscreen,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional tour manifest to open on startup.
    pub tour_path: Option<String>,
    /// Optional 1-based slide to show after the tour opens.
    pub slide: Option<u32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOUR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ICED_TOUR_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
