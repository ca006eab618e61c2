//! Project gallery: category filters, tag banner, card grid and statistics

use crate::app::helpers::formatting::filter_label;
use crate::app::helpers::visibility::{CARDS_PER_ROW, PROJECT_ROW_HEIGHT};
use crate::app::helpers::{PointerTracker, Section};
use crate::app::ui_components::{
    badge_container, banner_container, card_banner_container, card_container,
    featured_card_container, filter_button, outline_button, secondary_button,
    section_background, status_color, tag_button,
};
use crate::app::{Message, State};
use crate::core::catalog::Project;
use crate::theme::AppTheme;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

const CARD_GAP: f32 = 24.0;

pub fn view_projects(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let gallery = &state.gallery;
    let visible = gallery.visible();

    let heading = column![
        row![
            text("Featured").size(40).color(theme.fg_primary),
            text("Projects").size(40).color(theme.accent)
        ]
        .spacing(12),
        text("A selection of things I've built while learning by doing")
            .size(16)
            .color(theme.fg_muted),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let filters = row(gallery.counts().iter().map(|&(filter, count)| {
        let active = gallery.active_category() == filter;
        button(text(filter_label(filter, count)).size(14))
            .on_press(Message::CategorySelected(filter))
            .padding([9, 18])
            .style(move |_, status| filter_button(theme, status, active))
            .into()
    }))
    .spacing(10)
    .wrap();

    let tag_banner: Element<'_, Message> = match gallery.active_tag() {
        Some(tag) => container(
            row![
                text(format!("Filtering by technology: {tag}"))
                    .size(14)
                    .color(theme.fg_primary),
                Space::new().width(Length::Fill),
                button(text("Clear ✕").size(13))
                    .on_press(Message::TagCleared)
                    .padding([5, 12])
                    .style(move |_, status| secondary_button(theme, status)),
            ]
            .align_y(Alignment::Center),
        )
        .padding([10, 16])
        .width(Length::Fill)
        .style(move |_| banner_container(theme, theme.info))
        .into(),
        None => Space::new().height(Length::Fixed(0.0)).into(),
    };

    let grid: Element<'_, Message> = if visible.is_empty() {
        view_empty(theme)
    } else {
        column(visible.chunks(CARDS_PER_ROW).map(|chunk| {
            let mut cards: Vec<Element<'_, Message>> = chunk
                .iter()
                .map(|&project| view_card(project, gallery.active_tag(), theme))
                .collect();
            // Keep a lone card at half width
            while cards.len() < CARDS_PER_ROW {
                cards.push(Space::new().width(Length::Fill).into());
            }
            row(cards)
                .spacing(CARD_GAP)
                .height(Length::Fixed(PROJECT_ROW_HEIGHT - CARD_GAP))
                .into()
        }))
        .spacing(CARD_GAP)
        .into()
    };

    container(
        column![heading, filters, tag_banner, grid, view_stats(state)]
            .spacing(28)
            .max_width(1100)
            .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding([64, 40])
    .style(move |_| {
        section_background(theme, state.viewport.position(Section::Projects), false)
    })
    .into()
}

fn view_card<'a>(
    project: &'a Project,
    active_tag: Option<&str>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let status = status_color(theme, project.status);

    let mut banner_row = row![
        container(text(project.status.to_string()).size(12))
            .padding([4, 10])
            .style(move |_| badge_container(status, theme)),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::Center);
    if project.featured {
        banner_row = banner_row.push(
            container(text("⭐ Featured").size(12))
                .padding([4, 10])
                .style(move |_| badge_container(theme.warning, theme)),
        );
    }

    let banner = container(
        column![
            banner_row,
            Space::new().height(Length::Fill),
            text(project.category.to_string())
                .size(13)
                .color(theme.fg_on_accent),
        ]
        .padding(14),
    )
    .width(Length::Fill)
    .height(Length::Fixed(120.0))
    .style(move |_| card_banner_container(theme));

    let chips = row(project.tech.iter().map(|&tag| {
        let active = active_tag == Some(tag);
        button(text(tag).size(12))
            .on_press(Message::TagSelected(tag))
            .padding([4, 10])
            .style(move |_, status| tag_button(theme, status, active))
            .into()
    }))
    .spacing(6)
    .wrap();

    let mut links = row![
        button(text("Details").size(13))
            .on_press(Message::ProjectInspected(project.title))
            .padding([7, 14])
            .style(move |_, status| secondary_button(theme, status)),
    ]
    .spacing(8);
    if let Some(url) = project.links.github {
        links = links.push(
            button(text("Code").size(13))
                .on_press(Message::OpenLink(url))
                .padding([7, 14])
                .style(move |_, status| outline_button(theme, status)),
        );
    }
    if let Some(url) = project.links.demo {
        links = links.push(
            button(text("Live Demo ↗").size(13))
                .on_press(Message::OpenLink(url))
                .padding([7, 14])
                .style(move |_, status| outline_button(theme, status)),
        );
    }

    let body = column![
        text(project.title).size(20).color(theme.fg_primary),
        text(project.about).size(14).color(theme.fg_secondary),
        Space::new().height(Length::Fill),
        chips,
        links,
    ]
    .spacing(12)
    .padding(18);

    let featured = project.featured;
    container(column![banner, body])
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(move |_| {
            if featured {
                featured_card_container(theme)
            } else {
                card_container(theme)
            }
        })
        .into()
}

fn view_empty(theme: &AppTheme) -> Element<'_, Message> {
    container(
        column![
            text("🔍").size(40),
            text("No projects found").size(20).color(theme.fg_primary),
            text("Try another category or clear the technology filter")
                .size(14)
                .color(theme.fg_muted),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding(32)
    .into()
}

fn view_stats(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let stats = state.gallery.stats();
    let tiles = [
        (stats.total, "Total Projects"),
        (stats.live, "Live Projects"),
        (stats.technologies, "Technologies"),
        (stats.featured, "Featured"),
    ];

    row(tiles.into_iter().map(|(value, label)| {
        container(
            column![
                text(value.to_string()).size(30).color(theme.accent_hover),
                text(label).size(13).color(theme.fg_muted),
            ]
            .spacing(4)
            .align_x(Alignment::Center),
        )
        .padding([16, 12])
        .width(Length::Fill)
        .style(move |_| card_container(theme))
        .into()
    }))
    .spacing(16)
    .into()
}
