// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the slide selector, the viewer's display surface,
//! localization and persisted state together, and translates top-level
//! messages into side effects like manifest loading or asynchronous image
//! loading. Policy decisions (startup tour resolution, pessimistic selection
//! confirmation, fullscreen handling) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, KeyAction, Message};

use crate::config::{self, SurfaceBackground};
use crate::i18n::I18n;
use crate::tour::{SlideIndex, TourSelector};
use crate::ui::theming::ThemeMode;
use crate::ui::viewer;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// A selection applied to the display surface.
///
/// `Overview` corresponds to the reset action; `Slide` to a 1-based pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Overview,
    Slide(SlideIndex),
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    background: SurfaceBackground,
    /// Selector over the open tour; `None` shows the empty state.
    selector: Option<TourSelector>,
    /// The display surface the selector writes to.
    viewer: viewer::State,
    /// Confirmed selection; `None` means the overview (or no tour).
    current: Option<SlideIndex>,
    /// Selection applied to the surface but not yet confirmed by a load.
    pending: Option<Selection>,
    fullscreen: bool,
    window_id: Option<window::Id>,
    /// Persisted application state (last tour, last open directory).
    app_state: persisted_state::AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_tour", &self.selector.is_some())
            .field("current", &self.current)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            background: SurfaceBackground::default(),
            selector: None,
            viewer: viewer::State::new(),
            current: None,
            pending: None,
            fullscreen: false,
            window_id: None,
            app_state: persisted_state::AppState::default(),
        }
    }
}

impl App {
    /// Initializes application state and optionally opens the startup tour:
    /// the manifest given on the command line, falling back to the tour from
    /// the previous session.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("{}", warning);
        }
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (app_state, state_warning) = persisted_state::AppState::load();
        if let Some(warning) = state_warning {
            eprintln!("{}", warning);
        }

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            background: config.display.background,
            app_state,
            ..Self::default()
        };

        let manifest = flags
            .tour_path
            .map(PathBuf::from)
            .or_else(|| app.app_state.last_tour.clone());

        let task = match manifest {
            Some(path) => update::open_tour(&mut app, &path, flags.slide),
            None => Task::none(),
        };

        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sidebar(sidebar_message) => {
                update::handle_sidebar_message(self, sidebar_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(self, viewer_message)
            }
            Message::Key { action, window } => update::handle_key_action(self, action, window),
            Message::ImageLoaded { path, result } => {
                update::handle_image_loaded(self, path, result)
            }
            Message::OpenTourDialog => update::open_tour_dialog(self),
            Message::OpenTourDialogResult(path) => match path {
                Some(path) => update::open_tour(self, &path, None),
                None => Task::none(),
            },
            Message::FileDropped(path) => update::handle_file_dropped(self, path),
            Message::WindowCloseRequested(id) => update::handle_window_close(self, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            selector: self.selector.as_ref(),
            viewer: &self.viewer,
            current: self.current,
            fullscreen: self.fullscreen,
            background: self.background,
        })
    }

    fn title(&self) -> String {
        match &self.selector {
            Some(selector) => format!(
                "{} - {}",
                selector.tour().title(),
                self.i18n.tr("app-title")
            ),
            None => self.i18n.tr("app-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }
}
