//! UI rendering module for Folio
//!
//! One sticky header over a single vertical scrollable that stacks the four
//! sections, plus modal layers for project details and send failures.

// Widget IDs for state preservation
pub const PAGE_SCROLLABLE_ID: &str = "page";

mod about;
mod contact;
mod header;
mod hero;
mod modals;
mod projects;

use crate::app::helpers::Section;
use crate::app::ui_components::{
    bar_fill, bar_track, main_container, modal_backdrop, themed_scrollable,
};
use crate::app::{Message, State};
use crate::theme::AppTheme;
use iced::widget::{
    Id, Space, center, column, container, mouse_area, opaque, row, scrollable, stack,
};
use iced::{Color, Element, Length};

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let layout = state.viewport.layout();

    let page = column![
        section_frame(layout.height(Section::Home), hero::view_hero(state)),
        section_frame(layout.height(Section::About), about::view_about(state)),
        section_frame(
            layout.height(Section::Projects),
            projects::view_projects(state)
        ),
        section_frame(
            layout.height(Section::Contact),
            contact::view_contact(state)
        ),
    ];

    let body = scrollable(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_, status| themed_scrollable(theme, status));

    let base = container(column![header::view_header(state), body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme));

    // Detail modal: clicking the backdrop closes it, clicks on the card do not
    // IMPORTANT: Always use stack! to keep widget tree structure consistent (preserves scroll state)
    let with_detail: Element<'_, Message> = if let Some(project) = state.gallery.inspected() {
        stack![
            base,
            opaque(
                mouse_area(
                    center(opaque(modals::view_project_detail(
                        project,
                        state.gallery.active_tag(),
                        theme
                    )))
                    .style(move |_| modal_backdrop(theme))
                )
                .on_press(Message::DetailClosed)
            )
        ]
        .into()
    } else {
        stack![base, Space::new()].into()
    };

    // Send failure alert blocks everything until acknowledged
    if let Some(failure) = &state.send_failure {
        stack![
            with_detail,
            opaque(
                center(modals::view_send_failure(failure, theme))
                    .style(move |_| modal_backdrop(theme))
            )
        ]
        .into()
    } else {
        stack![with_detail, Space::new()].into()
    }
}

/// Pins a section to the height the layout model assumes for it
fn section_frame(height: f32, content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}

/// Horizontal bar filled to `percent` (0..=100)
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn fill_bar<'a>(
    percent: f32,
    height: f32,
    color: Option<Color>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let filled = percent.clamp(0.0, 100.0).round() as u16;

    let fill: Element<'a, Message> = if filled == 0 {
        Space::new().width(Length::Fixed(0.0)).into()
    } else {
        container(Space::new())
            .width(Length::FillPortion(filled))
            .height(Length::Fill)
            .style(move |_| bar_fill(theme, color))
            .into()
    };

    let rest: Element<'a, Message> = if filled >= 100 {
        Space::new().width(Length::Fixed(0.0)).into()
    } else {
        Space::new().width(Length::FillPortion(100 - filled)).into()
    };

    container(row![fill, rest])
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(move |_| bar_track(theme))
        .into()
}
