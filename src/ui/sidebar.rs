// SPDX-License-Identifier: MPL-2.0
//! Sidebar listing the tour's slides as numbered entries.
//!
//! The overview entry sits on top, outside the numbered list, matching its
//! role as the "home" state reached by the reset action. The entry for the
//! slide currently shown is highlighted; while a selection is still loading
//! the previous entry stays highlighted (pessimistic confirmation).

use crate::i18n::I18n;
use crate::tour::{SlideIndex, Tour};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tour: &'a Tour,
    /// Confirmed selection; `None` highlights the overview entry.
    pub current: Option<SlideIndex>,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OverviewPressed,
    SlidePressed(SlideIndex),
}

/// Renders the sidebar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.tour.title())
        .size(typography::TITLE_SM)
        .width(Length::Fill);

    let overview_label = ctx.i18n.tr("sidebar-overview");
    let overview_entry = entry(
        Text::new(overview_label).size(typography::BODY).into(),
        Message::OverviewPressed,
        ctx.current.is_none(),
    );

    let section_label = Text::new(ctx.i18n.tr("sidebar-slides"))
        .size(typography::CAPTION)
        .width(Length::Fill);

    let mut slide_list = Column::new().spacing(spacing::XXS);
    for (offset, slide) in ctx.tour.slides().iter().enumerate() {
        // Indices derived from enumerate() are always in `[1, len]`.
        let Some(index) = SlideIndex::new(offset as u32 + 1) else {
            continue;
        };

        let number = Text::new(index.to_string())
            .size(typography::CAPTION)
            .width(Length::Fixed(sizing::ENTRY_NUMBER_WIDTH))
            .align_x(alignment::Horizontal::Right);
        let label = Text::new(slide.label().to_owned()).size(typography::BODY);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(number)
            .push(label);

        slide_list = slide_list.push(entry(
            content.into(),
            Message::SlidePressed(index),
            ctx.current == Some(index),
        ));
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(title)
        .push(overview_entry)
        .push(section_label)
        .push(scrollable(slide_list).height(Length::Fill));

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn entry(content: Element<'_, Message>, message: Message, is_current: bool) -> Element<'_, Message> {
    let styled = if is_current {
        button(content).style(styles::button::selected)
    } else {
        button(content).style(styles::button::unselected)
    };

    styled
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::Slide;

    fn demo_tour() -> Tour {
        Tour::new(
            "Demo",
            Slide::new("Overview", "overview.png"),
            vec![
                Slide::new("First", "first.png"),
                Slide::new("Second", "second.png"),
            ],
        )
        .expect("failed to build tour")
    }

    #[test]
    fn sidebar_view_renders_with_overview_current() {
        let i18n = I18n::default();
        let tour = demo_tour();
        let ctx = ViewContext {
            i18n: &i18n,
            tour: &tour,
            current: None,
        };
        let _element = view(ctx);
    }

    #[test]
    fn sidebar_view_renders_with_slide_current() {
        let i18n = I18n::default();
        let tour = demo_tour();
        let ctx = ViewContext {
            i18n: &i18n,
            tour: &tour,
            current: SlideIndex::new(2),
        };
        let _element = view(ctx);
    }
}
