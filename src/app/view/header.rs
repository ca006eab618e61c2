//! Sticky header with scroll-spy navigation, theme toggle and progress bar

use crate::app::helpers::Section;
use crate::app::helpers::visibility::HEADER_HEIGHT;
use crate::app::ui_components::{
    card_banner_container, header_container, nav_button, primary_button, secondary_button,
};
use crate::app::view::fill_bar;
use crate::app::{Message, State};
use crate::theme::ThemeMode;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use strum::IntoEnumIterator;

const PROGRESS_HEIGHT: f32 = 3.0;

pub fn view_header(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let scrolled = state.viewport.is_scrolled();

    let brand = row![
        container(text("DJ").size(16).color(theme.fg_on_accent))
            .padding([6, 10])
            .style(move |_| card_banner_container(theme)),
        column![
            text("Deepak Joshi").size(16).color(theme.fg_primary),
            text("Full-Stack Developer").size(11).color(theme.fg_muted),
        ]
        .spacing(2),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let nav = row(Section::iter().map(|section| {
        let active = state.active_section == section;
        button(
            row![
                text(section.nav_icon()).size(13),
                text(section.to_string()).size(14)
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        )
        .on_press(Message::NavigateTo(section))
        .padding([8, 14])
        .style(move |_, status| nav_button(theme, status, active))
        .into()
    }))
    .spacing(4);

    let theme_icon = match state.theme_mode {
        ThemeMode::Dark => "☀️",
        ThemeMode::Light => "🌙",
    };

    let actions = row![
        button(text(theme_icon).size(16))
            .on_press(Message::ThemeToggled)
            .padding([8, 12])
            .style(move |_, status| secondary_button(theme, status)),
        button(text("Hire Me").size(14))
            .on_press(Message::NavigateTo(Section::Contact))
            .padding([9, 18])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let bar = row![
        brand,
        Space::new().width(Length::Fill),
        nav,
        Space::new().width(Length::Fill),
        actions,
    ]
    .align_y(Alignment::Center)
    .padding([0, 24])
    .height(Length::Fixed(HEADER_HEIGHT - PROGRESS_HEIGHT));

    container(column![
        bar,
        fill_bar(
            state.viewport.scroll_progress(),
            PROGRESS_HEIGHT,
            None,
            theme
        ),
    ])
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .style(move |_| header_container(theme, scrolled))
    .into()
}
