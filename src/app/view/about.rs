//! About section: tabbed bio, skills and education plus animated counters

use crate::app::helpers::counters::ease_out_cubic;
use crate::app::helpers::formatting::counter_value;
use crate::app::helpers::{ABOUT_COUNTERS, PointerTracker, Section};
use crate::app::ui_components::{
    badge_container, card_container, nav_button, outline_button, primary_button,
    section_background,
};
use crate::app::view::fill_bar;
use crate::app::{AboutTab, Message, State};
use crate::theme::AppTheme;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};
use strum::IntoEnumIterator;

const INTERESTS: [&str; 4] = [
    "🎨 UI/UX Design",
    "⚡ Performance",
    "♿ Accessibility",
    "📱 Responsive Design",
];

const SKILLS: [(&str, &str, u8); 8] = [
    ("🏗️", "HTML5", 95),
    ("🎨", "CSS3", 90),
    ("⚡", "JavaScript", 85),
    ("⚛️", "React", 80),
    ("🚀", "Node.js", 75),
    ("📘", "TypeScript", 70),
    ("🌿", "Git", 85),
    ("🍃", "MongoDB", 65),
];

#[derive(Clone, Copy)]
enum Milestone {
    Current,
    Ongoing,
    Available,
}

struct TimelineEntry {
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    period: &'static str,
    description: &'static str,
    milestone: Milestone,
}

const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        icon: "🎓",
        title: "Bachelor's in Computer Science",
        subtitle: "College of Technology and Engineering, Udaipur",
        period: "2022 – Present",
        description: "Focusing on software development, algorithms, and system design",
        milestone: Milestone::Current,
    },
    TimelineEntry {
        icon: "💻",
        title: "Full-Stack Development",
        subtitle: "Self-learning & Projects",
        period: "2022 – Present",
        description: "Building modern web applications with React, Node.js, and cloud technologies",
        milestone: Milestone::Ongoing,
    },
    TimelineEntry {
        icon: "🚀",
        title: "Open for Opportunities",
        subtitle: "Internship & Junior Roles",
        period: "Available Now",
        description: "Looking for hands-on experience in a collaborative development environment",
        milestone: Milestone::Available,
    },
];

fn milestone_color(theme: &AppTheme, milestone: Milestone) -> Color {
    match milestone {
        Milestone::Current => theme.success,
        Milestone::Ongoing => theme.info,
        Milestone::Available => theme.accent,
    }
}

pub fn view_about(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let heading = column![
        row![
            text("About").size(40).color(theme.fg_primary),
            text("Me").size(40).color(theme.accent)
        ]
        .spacing(12),
        text("Passionate developer crafting digital experiences with modern technologies")
            .size(16)
            .color(theme.fg_muted),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let tabs = row(AboutTab::iter().map(|tab| {
        let active = state.about_tab == tab;
        button(text(tab.to_string()).size(15))
            .on_press(Message::AboutTabSelected(tab))
            .padding([10, 20])
            .style(move |_, status| nav_button(theme, status, active))
            .into()
    }))
    .spacing(8);

    let tab_body = match state.about_tab {
        AboutTab::Bio => view_bio(theme),
        AboutTab::Skills => view_skills(state),
        AboutTab::Education => view_timeline(theme),
    };

    let left = container(column![tabs, tab_body].spacing(24))
        .padding(28)
        .width(Length::FillPortion(3))
        .style(move |_| card_container(theme));

    let right = column![view_counters(state), view_about_actions(theme)]
        .spacing(20)
        .width(Length::FillPortion(2));

    container(
        column![heading, row![left, right].spacing(28)]
            .spacing(40)
            .max_width(1100)
            .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding([64, 40])
    .style(move |_| {
        section_background(theme, state.viewport.position(Section::About), true)
    })
    .into()
}

fn view_bio(theme: &AppTheme) -> Element<'_, Message> {
    column![
        text("👨‍💻").size(40),
        text(
            "I'm a passionate college student and full-stack developer who loves \
             transforming innovative ideas into fast, responsive, and accessible web \
             applications."
        )
        .size(16)
        .color(theme.fg_secondary),
        text(
            "My focus is on clean UI design, modern development practices, and creating \
             meaningful user experiences. I believe in learning by building: every project \
             teaches me something new."
        )
        .size(16)
        .color(theme.fg_secondary),
        row(INTERESTS.iter().map(|interest| {
            container(text(*interest).size(13))
                .padding([6, 12])
                .style(move |_| badge_container(theme.accent, theme))
                .into()
        }))
        .spacing(8)
        .wrap(),
    ]
    .spacing(18)
    .into()
}

fn view_skills(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    // Bars stay empty until the section has been seen, then grow with the counters
    let growth = ease_out_cubic(state.counters.progress());

    column(SKILLS.iter().map(|(icon, name, level)| {
        column![
            row![
                text(*icon).size(16),
                text(*name).size(15).color(theme.fg_primary),
                Space::new().width(Length::Fill),
                text(format!("{level}%")).size(14).color(theme.accent_hover),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
            fill_bar(f32::from(*level) * growth, 8.0, None, theme),
        ]
        .spacing(6)
        .into()
    }))
    .spacing(14)
    .into()
}

fn view_timeline(theme: &AppTheme) -> Element<'_, Message> {
    column(TIMELINE.iter().map(|entry| {
        let color = milestone_color(theme, entry.milestone);
        row![
            container(text(entry.icon).size(22))
                .padding(10)
                .style(move |_| badge_container(color, theme)),
            column![
                row![
                    text(entry.title).size(17).color(theme.fg_primary),
                    container(text(entry.period).size(12))
                        .padding([3, 10])
                        .style(move |_| badge_container(color, theme)),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
                text(entry.subtitle).size(14).color(theme.accent_hover),
                text(entry.description).size(14).color(theme.fg_secondary),
            ]
            .spacing(6),
        ]
        .spacing(16)
        .into()
    }))
    .spacing(22)
    .into()
}

fn view_counters(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let tiles = column(ABOUT_COUNTERS.iter().map(|counter| {
        container(
            row![
                container(text(counter.icon).size(22))
                    .padding(10)
                    .style(move |_| badge_container(theme.accent_alt, theme)),
                column![
                    text(counter_value(
                        state.counters.value(counter.target),
                        counter.suffix
                    ))
                    .size(30)
                    .color(theme.fg_primary),
                    text(counter.label).size(13).color(theme.fg_muted),
                ]
                .spacing(2),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        )
        .padding(18)
        .width(Length::Fill)
        .style(move |_| card_container(theme))
        .into()
    }))
    .spacing(14);

    column![
        row![
            text("By the").size(22).color(theme.fg_primary),
            text("Numbers").size(22).color(theme.accent)
        ]
        .spacing(8),
        tiles
    ]
    .spacing(16)
    .into()
}

fn view_about_actions(theme: &AppTheme) -> Element<'_, Message> {
    column![
        button(text("See My Work").size(15))
            .on_press(Message::NavigateTo(Section::Projects))
            .padding([12, 24])
            .width(Length::Fill)
            .style(move |_, status| primary_button(theme, status)),
        button(text("Get In Touch").size(15))
            .on_press(Message::NavigateTo(Section::Contact))
            .padding([12, 24])
            .width(Length::Fill)
            .style(move |_, status| outline_button(theme, status)),
    ]
    .spacing(12)
    .into()
}
