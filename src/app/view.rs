// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::config::SurfaceBackground;
use crate::i18n::I18n;
use crate::tour::{SlideIndex, TourSelector};
use crate::ui::sidebar::{self, ViewContext as SidebarViewContext};
use crate::ui::viewer::{self, ViewContext as ViewerViewContext};
use iced::widget::Row;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selector: Option<&'a TourSelector>,
    pub viewer: &'a viewer::State,
    pub current: Option<SlideIndex>,
    pub fullscreen: bool,
    pub background: SurfaceBackground,
}

/// Renders the application: the sidebar next to the display pane, the pane
/// alone in fullscreen, or the empty state when no tour is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tour = ctx.selector.map(TourSelector::tour);

    let viewer_view = viewer::view(ViewerViewContext {
        i18n: ctx.i18n,
        state: ctx.viewer,
        tour,
        current: ctx.current,
        background: ctx.background,
    })
    .map(Message::Viewer);

    let Some(tour) = tour else {
        return viewer_view;
    };
    if ctx.fullscreen {
        return viewer_view;
    }

    let sidebar_view = sidebar::view(SidebarViewContext {
        i18n: ctx.i18n,
        tour,
        current: ctx.current,
    })
    .map(Message::Sidebar);

    Row::new()
        .push(sidebar_view)
        .push(viewer_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
