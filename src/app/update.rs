// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every display change flows through the slide selector into the viewer's
//! display surface; the handlers here only decide which selection to apply
//! and schedule the follow-up image load. Selection is confirmed
//! pessimistically: the sidebar highlight and position indicator move once
//! the load for the new source completes, not when it is requested.

use super::{App, KeyAction, Message, Selection};
use crate::error::Error;
use crate::media::{self, ImageData};
use crate::tour::{self, SlideIndex, TourSelector};
use crate::ui::{sidebar, viewer};
use iced::{window, Task};
use std::path::{Path, PathBuf};

pub(super) fn handle_sidebar_message(
    app: &mut App,
    message: sidebar::Message,
) -> Task<Message> {
    match message {
        sidebar::Message::OverviewPressed => apply_selection(app, Selection::Overview),
        sidebar::Message::SlidePressed(index) => apply_selection(app, Selection::Slide(index)),
    }
}

pub(super) fn handle_viewer_message(
    app: &mut App,
    message: viewer::Message,
) -> Task<Message> {
    match message {
        viewer::Message::OpenTourRequested => open_tour_dialog(app),
    }
}

pub(super) fn handle_key_action(
    app: &mut App,
    action: KeyAction,
    window_id: window::Id,
) -> Task<Message> {
    // Keyboard events are the one place the window id surfaces; remember it
    // for fullscreen toggling and window close.
    app.window_id = Some(window_id);

    match action {
        KeyAction::Slide(index) => apply_selection(app, Selection::Slide(index)),
        KeyAction::Overview => apply_selection(app, Selection::Overview),
        KeyAction::NextSlide => step_next(app),
        KeyAction::PreviousSlide => step_previous(app),
        KeyAction::ToggleFullscreen => update_fullscreen_mode(app, !app.fullscreen),
    }
}

/// Applies a selection, reporting rejected indices on stderr.
///
/// A rejected selection leaves the display surface and the confirmed
/// selection untouched.
pub(super) fn apply_selection(app: &mut App, selection: Selection) -> Task<Message> {
    match try_select(app, selection) {
        Ok(task) => task,
        Err(e) => {
            eprintln!("{}", Error::from(e));
            Task::none()
        }
    }
}

fn try_select(
    app: &mut App,
    selection: Selection,
) -> Result<Task<Message>, tour::TourError> {
    let Some(selector) = app.selector.as_ref() else {
        return Ok(Task::none());
    };

    match selection {
        Selection::Slide(index) => selector.switch_to(index, &mut app.viewer)?,
        Selection::Overview => selector.reset(&mut app.viewer),
    }

    app.pending = Some(selection);
    Ok(load_current_image(&app.viewer))
}

/// Advances to the slide after the confirmed one, wrapping around.
///
/// From the overview, stepping forward enters the cycle at the first slide.
fn step_next(app: &mut App) -> Task<Message> {
    let Some(selector) = app.selector.as_ref() else {
        return Task::none();
    };
    let total = selector.tour().len();

    let target = match app.current {
        Some(index) => index.next_wrapping(total),
        None => SlideIndex::FIRST,
    };
    apply_selection(app, Selection::Slide(target))
}

/// Steps back to the slide before the confirmed one, wrapping around.
///
/// From the overview, stepping back enters the cycle at the last slide.
fn step_previous(app: &mut App) -> Task<Message> {
    let Some(selector) = app.selector.as_ref() else {
        return Task::none();
    };
    let total = selector.tour().len();

    let target = match app.current {
        Some(index) => index.previous_wrapping(total),
        None => last_slide(total),
    };
    apply_selection(app, Selection::Slide(target))
}

fn last_slide(total: usize) -> SlideIndex {
    u32::try_from(total)
        .ok()
        .and_then(SlideIndex::new)
        .unwrap_or(SlideIndex::FIRST)
}

/// Spawns the asynchronous load of the surface's current image source.
fn load_current_image(viewer: &viewer::State) -> Task<Message> {
    let Some(path) = viewer.image_source().map(Path::to_path_buf) else {
        return Task::none();
    };

    Task::perform(
        async move {
            let result = media::load_image(&path);
            (path, result)
        },
        |(path, result)| Message::ImageLoaded { path, result },
    )
}

pub(super) fn handle_image_loaded(
    app: &mut App,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    let is_current = app.viewer.image_source() == Some(path.as_path());

    match result {
        Ok(data) => {
            app.viewer.show(&path, data);
            if is_current {
                if let Some(selection) = app.pending.take() {
                    app.current = match selection {
                        Selection::Overview => None,
                        Selection::Slide(index) => Some(index),
                    };
                }
            }
        }
        Err(e) => {
            eprintln!("failed to load {}: {}", path.display(), e);
            app.viewer.fail(&path, e.to_string());
            if is_current {
                app.pending = None;
            }
        }
    }

    Task::none()
}

/// Opens a tour manifest and shows its overview (or the requested initial
/// slide).
///
/// An out-of-range initial slide is reported on stderr and the overview is
/// shown instead; a broken manifest leaves the current tour in place.
pub(super) fn open_tour(
    app: &mut App,
    manifest_path: &Path,
    initial_slide: Option<u32>,
) -> Task<Message> {
    let tour = match tour::load_tour(manifest_path) {
        Ok(tour) => tour,
        Err(e) => {
            eprintln!("cannot open tour {}: {}", manifest_path.display(), e);
            return Task::none();
        }
    };

    app.selector = Some(TourSelector::new(tour));
    app.current = None;
    app.pending = None;
    app.app_state.remember_tour(manifest_path);
    if let Some(warning) = app.app_state.save() {
        eprintln!("{}", warning);
    }

    let selection = match initial_slide {
        Some(n) => match SlideIndex::new(n) {
            Some(index) => Selection::Slide(index),
            None => {
                eprintln!("slide 0 is out of range; showing the overview");
                Selection::Overview
            }
        },
        None => Selection::Overview,
    };

    match try_select(app, selection) {
        Ok(task) => task,
        Err(e) => {
            eprintln!("{}; showing the overview", Error::from(e));
            apply_selection(app, Selection::Overview)
        }
    }
}

/// Opens the manifest picker dialog.
pub(super) fn open_tour_dialog(app: &App) -> Task<Message> {
    let title = app.i18n.tr("open-dialog-title");
    let filter = app.i18n.tr("open-dialog-filter");
    let last_directory = app.app_state.last_open_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter, &["toml"]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenTourDialogResult,
    )
}

pub(super) fn handle_file_dropped(app: &mut App, path: PathBuf) -> Task<Message> {
    let is_manifest = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_manifest {
        open_tour(app, &path, None)
    } else {
        eprintln!(
            "ignoring dropped file {}: not a .toml tour manifest",
            path.display()
        );
        Task::none()
    }
}

pub(super) fn handle_window_close(app: &mut App, id: window::Id) -> Task<Message> {
    if let Some(warning) = app.app_state.save() {
        eprintln!("{}", warning);
    }
    window::close(id)
}

fn update_fullscreen_mode(app: &mut App, desired: bool) -> Task<Message> {
    if app.fullscreen == desired {
        return Task::none();
    }
    let Some(window_id) = app.window_id else {
        return Task::none();
    };

    app.fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode)
}
