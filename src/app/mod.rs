pub mod handlers;
pub mod helpers;
pub mod ui_components;
pub mod view;

use crate::config::AppConfig;
use crate::core::catalog::{CATALOG, validate_catalog};
use crate::core::contact::{Field, ProjectType};
use crate::core::error::SendError;
use crate::core::filter::{CategoryFilter, GalleryState};
use crate::core::submission::{ContactSession, SuccessTicket};
use crate::mailer::{EmailJsMailer, Mailer};
use crate::theme::{AppTheme, ThemeMode};
use helpers::visibility::{COUNTER_THRESHOLD, NAV_THRESHOLD};
use helpers::{CounterAnimation, Section, SectionLayout, ViewportTracker};
use iced::widget::{scrollable, text_editor};
use iced::{Element, Size, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const WINDOW_SIZE: Size = Size::new(1200.0, 820.0);

/// Technologies cycled through by the hero's "Currently mastering" line
pub const CURRENTLY_LEARNING: [&str; 8] = [
    "React",
    "Node.js",
    "TypeScript",
    "MongoDB",
    "Git",
    "Python",
    "Express.js",
    "Tailwind CSS",
];

const LEARNING_INTERVAL: Duration = Duration::from_secs(2);
const COUNTER_FRAME: Duration = Duration::from_millis(16);

pub struct State {
    pub gallery: GalleryState<'static>,
    pub contact: ContactSession,
    /// Mirrors `contact.form.message` for the multi-line editor widget
    pub message_editor: text_editor::Content,
    /// Field that last received input; blurring it marks it touched
    pub focused_field: Option<Field>,
    pub hovered_field: Option<Field>,
    pub project_type_open: bool,
    /// Blocking alert shown after a failed send
    pub send_failure: Option<String>,
    pub success_timer: Option<iced::task::Handle>,
    pub mailer: Arc<dyn Mailer>,
    pub theme_mode: ThemeMode,
    pub theme: AppTheme,
    pub active_section: Section,
    pub viewport: ViewportTracker,
    pub learning_index: usize,
    pub about_tab: AboutTab,
    pub counters: CounterAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum AboutTab {
    #[default]
    Bio,
    Skills,
    Education,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Page chrome
    NavigateTo(Section),
    PageScrolled(scrollable::Viewport),
    ThemeToggled,
    LearningTick,
    AboutTabSelected(AboutTab),
    CounterTick(Instant),
    OpenLink(&'static str),
    EventOccurred(iced::Event),

    // Gallery
    CategorySelected(CategoryFilter),
    TagSelected(&'static str),
    TagCleared,
    ProjectInspected(&'static str),
    DetailClosed,

    // Contact form
    ContactFieldChanged(Field, String),
    MessageEdited(text_editor::Action),
    FieldHovered(Field),
    FieldUnhovered(Field),
    ProjectTypeOpened,
    ProjectTypeClosed,
    ProjectTypeSelected(ProjectType),
    SubmitContact,
    SendCompleted(Result<(), SendError>),
    SuccessExpired(SuccessTicket),
    DismissSendFailure,
}

impl State {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        let mailer: Arc<dyn Mailer> = Arc::new(EmailJsMailer::from_config(&config.emailjs));
        (Self::with_mailer(config.theme, mailer), Task::none())
    }

    /// Builds the initial state around an arbitrary send backend
    pub fn with_mailer(theme_mode: ThemeMode, mailer: Arc<dyn Mailer>) -> Self {
        if let Err(e) = validate_catalog(CATALOG) {
            tracing::error!("Project catalog is inconsistent: {e}");
        }

        let gallery = GalleryState::new(CATALOG);
        let mut viewport = ViewportTracker::new(SectionLayout::for_gallery(&gallery), WINDOW_SIZE);
        for section in <Section as strum::IntoEnumIterator>::iter() {
            viewport.watch(section, NAV_THRESHOLD);
        }
        viewport.watch(Section::About, COUNTER_THRESHOLD);

        let mut state = Self {
            gallery,
            contact: ContactSession::default(),
            message_editor: text_editor::Content::new(),
            focused_field: None,
            hovered_field: None,
            project_type_open: false,
            send_failure: None,
            success_timer: None,
            mailer,
            theme_mode,
            theme: theme_mode.to_theme(),
            active_section: Section::Home,
            viewport,
            learning_index: 0,
            about_tab: AboutTab::default(),
            counters: CounterAnimation::default(),
        };
        handlers::apply_visibility_changes(&mut state);
        state
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(section) => return handlers::handle_navigate(self, section),
            Message::PageScrolled(viewport) => handlers::handle_page_scrolled(self, &viewport),
            Message::ThemeToggled => handlers::handle_theme_toggled(self),
            Message::LearningTick => handlers::handle_learning_tick(self),
            Message::AboutTabSelected(tab) => self.about_tab = tab,
            Message::CounterTick(now) => self.counters.tick(now),
            Message::OpenLink(url) => handlers::handle_open_link(url),
            Message::EventOccurred(event) => return self.handle_event(event),
            Message::CategorySelected(filter) => handlers::handle_category_selected(self, filter),
            Message::TagSelected(tag) => handlers::handle_tag_selected(self, tag),
            Message::TagCleared => handlers::handle_tag_cleared(self),
            Message::ProjectInspected(title) => handlers::handle_project_inspected(self, title),
            Message::DetailClosed => handlers::handle_detail_closed(self),
            Message::ContactFieldChanged(field, value) => {
                handlers::handle_field_changed(self, field, value);
            }
            Message::MessageEdited(action) => handlers::handle_message_edited(self, action),
            Message::FieldHovered(field) => self.hovered_field = Some(field),
            Message::FieldUnhovered(field) => {
                if self.hovered_field == Some(field) {
                    self.hovered_field = None;
                }
            }
            Message::ProjectTypeOpened => handlers::handle_project_type_opened(self),
            Message::ProjectTypeClosed => self.project_type_open = false,
            Message::ProjectTypeSelected(kind) => {
                handlers::handle_project_type_selected(self, kind);
            }
            Message::SubmitContact => return handlers::handle_submit(self),
            Message::SendCompleted(result) => return handlers::handle_send_completed(self, result),
            Message::SuccessExpired(ticket) => handlers::handle_success_expired(self, ticket),
            Message::DismissSendFailure => self.send_failure = None,
        }
        Task::none()
    }

    fn handle_event(&mut self, event: iced::Event) -> Task<Message> {
        use iced::keyboard::key::Named;
        use iced::keyboard::{Event as KeyEvent, Key};

        match event {
            iced::Event::Keyboard(KeyEvent::KeyPressed { key, modifiers, .. }) => {
                match key.as_ref() {
                    Key::Named(Named::Escape) => {
                        if self.send_failure.is_some() {
                            return Task::done(Message::DismissSendFailure);
                        }
                        if self.gallery.inspected().is_some() {
                            return Task::done(Message::DetailClosed);
                        }
                    }
                    Key::Named(Named::Tab) => {
                        handlers::handle_tab_pressed(self, modifiers.shift());
                    }
                    _ => {}
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                handlers::handle_pointer_pressed(self);
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                self.viewport.set_cursor(Some(position));
            }
            iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                self.viewport.set_cursor(None);
            }
            iced::Event::Window(
                iced::window::Event::Resized(size) | iced::window::Event::Opened { size, .. },
            ) => {
                handlers::handle_window_resized(self, size);
            }
            _ => {}
        }
        Task::none()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        let mut subscriptions = vec![
            iced::event::listen_with(|event, _status, _window| match event {
                iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. })
                | iced::Event::Mouse(
                    iced::mouse::Event::ButtonPressed(_)
                    | iced::mouse::Event::CursorMoved { .. }
                    | iced::mouse::Event::CursorLeft,
                )
                | iced::Event::Window(
                    iced::window::Event::Resized(_) | iced::window::Event::Opened { .. },
                ) => Some(Message::EventOccurred(event)),
                _ => None,
            }),
            iced::time::every(LEARNING_INTERVAL).map(|_| Message::LearningTick),
        ];

        if self.counters.is_running() {
            subscriptions.push(iced::time::every(COUNTER_FRAME).map(Message::CounterTick));
        }

        iced::Subscription::batch(subscriptions)
    }
}
