// SPDX-License-Identifier: MPL-2.0
//! Display pane showing the current slide image.
//!
//! [`State`] is the concrete display surface the slide selector writes to:
//! its image-source attribute is the single piece of display state, and the
//! selector is its only writer. Setting the source puts the pane into the
//! loading stage; the application then loads the image asynchronously and
//! confirms or fails the stage once the result is in. A result for a path
//! that is no longer the current source is ignored, so a quick second
//! selection cannot be overwritten by a slow first load.

use crate::config::SurfaceBackground;
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::tour::{DisplaySurface, SlideIndex, Tour};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{alignment, Color, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// Messages emitted by the display pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The "Open tour…" button of the empty state was pressed.
    OpenTourRequested,
}

#[derive(Debug, Default)]
enum Stage {
    /// No tour is open.
    #[default]
    Empty,
    /// The source was just replaced; the image is being loaded.
    Loading,
    /// The image behind the current source is on screen.
    Ready(ImageData),
    Failed {
        reason: String,
    },
}

/// State of the display pane.
#[derive(Debug, Default)]
pub struct State {
    source: Option<PathBuf>,
    stage: Stage,
}

impl DisplaySurface for State {
    fn set_image_source(&mut self, source: &Path) {
        self.source = Some(source.to_path_buf());
        self.stage = Stage::Loading;
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the image source the pane currently points at.
    pub fn image_source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns true while a replaced source has not finished loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.stage, Stage::Loading)
    }

    /// Returns true once the current source's image is on screen.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.stage, Stage::Ready(_))
    }

    /// Puts the loaded image on screen.
    ///
    /// Ignored when `path` is no longer the current source.
    pub fn show(&mut self, path: &Path, data: ImageData) {
        if self.source.as_deref() == Some(path) {
            self.stage = Stage::Ready(data);
        }
    }

    /// Switches to the failure stage for the current source.
    ///
    /// Ignored when `path` is no longer the current source.
    pub fn fail(&mut self, path: &Path, reason: String) {
        if self.source.as_deref() == Some(path) {
            self.stage = Stage::Failed { reason };
        }
    }
}

/// Contextual data needed to render the display pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub tour: Option<&'a Tour>,
    /// Confirmed selection; `None` means the overview is shown.
    pub current: Option<SlideIndex>,
    pub background: SurfaceBackground,
}

/// Renders the display pane.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let Some(tour) = ctx.tour else {
        return empty_state(ctx.i18n);
    };

    let content: Element<'_, Message> = match &ctx.state.stage {
        Stage::Empty | Stage::Loading => centered_caption(ctx.i18n.tr("viewer-loading")),
        Stage::Ready(data) => Image::new(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Stage::Failed { reason } => failed_state(ctx.i18n, ctx.state.image_source(), reason),
    };

    let pane = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::viewer_surface(ctx.background));

    Column::new()
        .push(pane)
        .push(position_indicator(ctx.i18n, tour, ctx.current))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Footer naming the shown entry and its 1-based position.
fn position_indicator<'a>(
    i18n: &'a I18n,
    tour: &'a Tour,
    current: Option<SlideIndex>,
) -> Element<'a, Message> {
    let (label, position) = match current {
        Some(index) => {
            let label = tour
                .slide(index)
                .map(|slide| slide.label().to_owned())
                .unwrap_or_default();
            (label, format!("{} / {}", index, tour.len()))
        }
        None => (
            tour.overview().label().to_owned(),
            i18n.tr("viewer-overview-position"),
        ),
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(Text::new(position).size(typography::CAPTION));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn centered_caption<'a>(message: String) -> Element<'a, Message> {
    Container::new(
        Text::new(message)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn failed_state<'a>(
    i18n: &'a I18n,
    source: Option<&Path>,
    reason: &str,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("viewer-load-failed"))
        .size(typography::TITLE_SM)
        .color(palette::ERROR_500);

    let path_line = Text::new(
        source
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
    )
    .size(typography::BODY_SM)
    .color(palette::GRAY_400);

    let reason_line = Text::new(reason.to_owned())
        .size(typography::BODY_SM)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(path_line)
        .push(reason_line);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Welcome view shown when no tour is open.
fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("empty-state-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenTourRequested);

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
