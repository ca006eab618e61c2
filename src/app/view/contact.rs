//! Contact section: validated form, send status and contact channels

use crate::app::helpers::formatting::{char_budget_ratio, char_counter};
use crate::app::helpers::{PointerTracker, Section};
use crate::app::ui_components::{
    badge_container, banner_container, card_container, outline_button, primary_button,
    section_background, themed_pick_list, themed_pick_list_menu, themed_text_editor,
    themed_text_input,
};
use crate::app::view::fill_bar;
use crate::app::{Message, State};
use crate::core::contact::{Field, MESSAGE_LIMIT, ProjectType};
use crate::core::submission::SubmissionStatus;
use crate::theme::AppTheme;
use iced::widget::{
    Space, button, column, container, mouse_area, pick_list, row, text, text_editor,
    text_input,
};
use iced::{Alignment, Element, Length};

const CHANNELS: [(&str, &str, &str); 3] = [
    ("📧", "joshideepak5455@gmail.com", "mailto:joshideepak5455@gmail.com"),
    ("🐙", "github.com/deepakjoshi9239", "https://github.com/deepakjoshi9239"),
    (
        "💼",
        "linkedin.com/in/deepak-joshi",
        "https://www.linkedin.com/in/deepak-joshi-50466b265/",
    ),
];

pub fn view_contact(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let heading = column![
        row![
            text("Let's").size(40).color(theme.fg_primary),
            text("Connect").size(40).color(theme.accent)
        ]
        .spacing(12),
        text("Have a project in mind or just want to say hi? My inbox is open.")
            .size(16)
            .color(theme.fg_muted),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let form = container(view_form(state))
        .padding(28)
        .width(Length::FillPortion(3))
        .style(move |_| card_container(theme));

    let side = column![view_channels(theme), view_availability(theme)]
        .spacing(20)
        .width(Length::FillPortion(2));

    container(
        column![heading, row![form, side].spacing(28)]
            .spacing(40)
            .max_width(1100)
            .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .padding([64, 40])
    .style(move |_| {
        section_background(theme, state.viewport.position(Section::Contact), true)
    })
    .into()
}

/// Wraps a form control so hovering it is known when the pointer is pressed
fn hover_zone<'a>(field: Field, content: Element<'a, Message>) -> Element<'a, Message> {
    mouse_area(content)
        .on_enter(Message::FieldHovered(field))
        .on_exit(Message::FieldUnhovered(field))
        .into()
}

fn labeled<'a>(
    label: &'a str,
    control: Element<'a, Message>,
    error: Option<&'static str>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let mut field = column![text(label).size(13).color(theme.fg_secondary), control].spacing(6);
    if let Some(error) = error {
        field = field.push(text(error).size(12).color(theme.danger));
    }
    field.into()
}

fn input_field<'a>(state: &'a State, field: Field, placeholder: &'a str) -> Element<'a, Message> {
    let theme = &state.theme;
    let form = &state.contact.form;
    let error = form.visible_error(field);
    let invalid = error.is_some();

    let input = text_input(placeholder, form.value(field))
        .on_input(move |value| Message::ContactFieldChanged(field, value))
        .on_submit(Message::SubmitContact)
        .padding(12)
        .size(15)
        .style(move |_, status| themed_text_input(theme, status, invalid));

    labeled(
        match field {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        },
        hover_zone(field, input.into()),
        error,
        theme,
    )
}

fn view_form(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let session = &state.contact;
    let form = &session.form;
    let status = session.status();

    let project_type = column![
        text("Project Type").size(13).color(theme.fg_secondary),
        pick_list(
            ProjectType::ALL,
            Some(form.project_type),
            Message::ProjectTypeSelected
        )
        .on_open(Message::ProjectTypeOpened)
        .on_close(Message::ProjectTypeClosed)
        .padding(12)
        .width(Length::Fill)
        .style(move |_, status| themed_pick_list(theme, status))
        .menu_style(move |_| themed_pick_list_menu(theme)),
    ]
    .spacing(6);

    let message_error = form.visible_error(Field::Message);
    let message_invalid = message_error.is_some();
    let editor = text_editor(&state.message_editor)
        .placeholder("Tell me about your project, timeline, and goals...")
        .on_action(Message::MessageEdited)
        .height(Length::Fixed(160.0))
        .padding(12)
        .size(15)
        .style(move |iced_theme, status| {
            themed_text_editor(theme, iced_theme, status, message_invalid)
        });

    let budget = char_budget_ratio(&form.message);
    let near_limit = form.message.chars().count() + 50 >= MESSAGE_LIMIT;
    let counter = row![
        container(fill_bar(
            budget * 100.0,
            4.0,
            near_limit.then_some(theme.warning),
            theme
        ))
        .width(Length::Fill),
        text(char_counter(&form.message))
            .size(12)
            .color(if near_limit { theme.warning } else { theme.fg_muted }),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let message = labeled(
        "Message",
        hover_zone(Field::Message, column![editor, counter].spacing(6).into()),
        message_error,
        theme,
    );

    let submit_label = match status {
        SubmissionStatus::Submitting => "Sending...",
        SubmissionStatus::Idle | SubmissionStatus::Success => "Send Message  ✈️",
    };
    let submit = button(container(text(submit_label).size(16)).center_x(Length::Fill))
        .on_press_maybe(session.can_submit().then_some(Message::SubmitContact))
        .padding([14, 24])
        .width(Length::Fill)
        .style(move |_, status| primary_button(theme, status));

    let notice: Element<'_, Message> = if status == SubmissionStatus::Success {
        container(
            text("✅ Message sent! I'll get back to you within 24 hours.")
                .size(14)
                .color(theme.fg_primary),
        )
        .padding([12, 16])
        .width(Length::Fill)
        .style(move |_| banner_container(theme, theme.success))
        .into()
    } else {
        Space::new().height(Length::Fixed(0.0)).into()
    };

    column![
        row![
            container(input_field(state, Field::Name, "John Doe")).width(Length::Fill),
            container(input_field(state, Field::Email, "john@example.com")).width(Length::Fill),
        ]
        .spacing(16),
        row![
            container(project_type).width(Length::Fill),
            container(input_field(state, Field::Subject, "Project inquiry")).width(Length::Fill),
        ]
        .spacing(16),
        message,
        submit,
        notice,
    ]
    .spacing(20)
    .into()
}

fn view_channels(theme: &AppTheme) -> Element<'_, Message> {
    let links = column(CHANNELS.iter().map(|&(icon, label, url)| {
        button(
            row![text(icon).size(18), text(label).size(14)]
                .spacing(12)
                .align_y(Alignment::Center),
        )
        .on_press(Message::OpenLink(url))
        .padding([12, 16])
        .width(Length::Fill)
        .style(move |_, status| outline_button(theme, status))
        .into()
    }))
    .spacing(10);

    container(
        column![
            text("Contact Info").size(20).color(theme.fg_primary),
            text("Prefer another channel? Reach out directly.")
                .size(14)
                .color(theme.fg_muted),
            links,
        ]
        .spacing(14),
    )
    .padding(24)
    .style(move |_| card_container(theme))
    .into()
}

fn view_availability(theme: &AppTheme) -> Element<'_, Message> {
    container(
        column![
            row![
                container(text("●").size(10).color(theme.success))
                    .padding([2, 6])
                    .style(move |_| badge_container(theme.success, theme)),
                text("Currently available").size(16).color(theme.fg_primary),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            text(
                "Open to internships, freelance work and junior developer roles. \
                 Typical response time is within a day."
            )
                .size(14)
                .color(theme.fg_secondary),
        ]
        .spacing(10),
    )
    .padding(24)
    .style(move |_| card_container(theme))
    .into()
}
