//! Modal dialogs (project details and send failure)

use crate::app::ui_components::{
    badge_container, card_container, outline_button, primary_button, secondary_button,
    status_color, tag_button, themed_horizontal_rule,
};
use crate::app::Message;
use crate::core::catalog::Project;
use crate::theme::AppTheme;
use iced::widget::{Space, button, column, container, row, rule, text};
use iced::{Alignment, Border, Element, Length};

pub fn view_project_detail<'a>(
    project: &'a Project,
    active_tag: Option<&str>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let status = status_color(theme, project.status);

    let header = row![
        column![
            text(project.title).size(24).color(theme.fg_primary),
            text(format!("{} · {}", project.category, project.status))
                .size(13)
                .color(theme.fg_muted),
        ]
        .spacing(4),
        Space::new().width(Length::Fill),
        button(text("✕").size(16))
            .on_press(Message::DetailClosed)
            .padding([6, 12])
            .style(move |_, status| secondary_button(theme, status)),
    ]
    .align_y(Alignment::Center);

    let mut badges = row![
        container(text(project.status.to_string()).size(12))
            .padding([4, 10])
            .style(move |_| badge_container(status, theme)),
    ]
    .spacing(8);
    if project.featured {
        badges = badges.push(
            container(text("⭐ Featured").size(12))
                .padding([4, 10])
                .style(move |_| badge_container(theme.warning, theme)),
        );
    }

    // Picking a tag here filters the gallery behind the dialog
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

    let mut links = row![].spacing(10);
    if let Some(url) = project.links.github {
        links = links.push(
            button(text("View Code").size(14))
                .on_press(Message::OpenLink(url))
                .padding([9, 18])
                .style(move |_, status| outline_button(theme, status)),
        );
    }
    if let Some(url) = project.links.demo {
        links = links.push(
            button(text("Live Demo ↗").size(14))
                .on_press(Message::OpenLink(url))
                .padding([9, 18])
                .style(move |_, status| primary_button(theme, status)),
        );
    }

    container(
        column![
            header,
            rule::horizontal(1).style(move |_| themed_horizontal_rule(theme)),
            badges,
            text(project.about).size(15).color(theme.fg_secondary),
            text("Built with").size(13).color(theme.fg_muted),
            chips,
            links,
        ]
        .spacing(18)
        .padding(28)
        .max_width(640),
    )
    .style(move |_| card_container(theme))
    .into()
}

pub fn view_send_failure<'a>(failure: &'a str, theme: &'a AppTheme) -> Element<'a, Message> {
    container(
        column![
            text("Message not sent").size(20).color(theme.danger),
            text(failure).size(14).color(theme.fg_primary),
            text("Your message is still in the form, so nothing was lost.")
                .size(13)
                .color(theme.fg_muted),
            row![
                Space::new().width(Length::Fill),
                button(text("OK").size(14))
                    .on_press(Message::DismissSendFailure)
                    .padding([10, 24])
                    .style(move |_, status| primary_button(theme, status)),
            ],
        ]
        .spacing(18)
        .padding(28)
        .max_width(480),
    )
    .style(move |_| {
        let mut style = card_container(theme);
        style.border = Border {
            color: theme.danger,
            width: 2.0,
            radius: 8.0.into(),
        };
        style
    })
    .into()
}

