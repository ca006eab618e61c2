//! Landing section

use crate::app::helpers::{PointerTracker, Section};
use crate::app::ui_components::{
    badge_container, card_container, outline_button, primary_button, section_background,
};
use crate::app::{CURRENTLY_LEARNING, Message, State};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

const QUICK_STATS: [(&str, &str); 3] = [
    ("15+", "Projects"),
    ("3+", "Years Learning"),
    ("100%", "Dedication"),
];

pub fn view_hero(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let pointer = state.viewport.position(Section::Home);

    let availability = container(
        row![
            text("●").size(10).color(theme.success),
            text("Available for opportunities").size(13)
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([6, 14])
    .style(move |_| badge_container(theme.accent, theme));

    let name = column![
        text("Hello, I'm").size(18).color(theme.fg_secondary),
        row![
            text("Deepak").size(64).color(theme.fg_primary),
            text("Joshi").size(64).color(theme.accent),
        ]
        .spacing(16),
    ]
    .spacing(6);

    let description = text(
        "College student and full-stack developer focused on building responsive, \
         accessible, high-performance applications. Open to internships and junior roles.",
    )
    .size(19)
    .color(theme.fg_secondary)
    .width(Length::Fixed(620.0));

    let ctas = row![
        button(text("Let's Work Together  →").size(16))
            .on_press(Message::NavigateTo(Section::Contact))
            .padding([14, 28])
            .style(move |_, status| primary_button(theme, status)),
        button(text("View Projects  📁").size(16))
            .on_press(Message::NavigateTo(Section::Projects))
            .padding([14, 28])
            .style(move |_, status| outline_button(theme, status)),
    ]
    .spacing(16);

    let learning = row![
        text("Currently mastering").size(15).color(theme.fg_muted),
        container(text(CURRENTLY_LEARNING[state.learning_index]).size(15))
            .padding([4, 12])
            .style(move |_| badge_container(theme.accent_alt, theme)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let stats = row(QUICK_STATS.iter().map(|(number, label)| {
        container(
            column![
                text(*number).size(28).color(theme.accent_hover),
                text(*label).size(13).color(theme.fg_muted),
            ]
            .spacing(4)
            .align_x(Alignment::Center),
        )
        .padding([14, 22])
        .style(move |_| card_container(theme))
        .into()
    }))
    .spacing(16);

    let content = column![availability, name, description, ctas, learning, stats]
        .spacing(28)
        .max_width(980);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(40)
        .style(move |_| section_background(theme, pointer, false))
        .into()
}
