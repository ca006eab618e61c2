//! Contact form input and submission
//!
//! Handles:
//! - Field edits, with the message clamped to its character budget
//! - Blur emulation (focus moves, Tab, pointer presses, dropdown opening)
//! - The send round-trip and the timed return from the success state

use crate::app::{Message, State};
use crate::core::contact::{ContactPayload, Field, MESSAGE_LIMIT, ProjectType, clamp_message};
use crate::core::error::SendError;
use crate::core::submission::{Completion, SUCCESS_RESET_DELAY, SubmitDecision, SuccessTicket};
use crate::mailer::Mailer;
use iced::Task;
use iced::widget::text_editor;
use std::sync::Arc;

/// Marks the previously focused field touched when focus moves elsewhere
fn move_focus(state: &mut State, next: Option<Field>) {
    if state.focused_field == next {
        return;
    }
    if let Some(previous) = state.focused_field {
        state.contact.form.touch(previous);
    }
    state.focused_field = next;
}

/// Keyboard focus order of the form; the dropdown and submit button are not
/// text fields and map to `None`.
fn tab_target(from: Field, backwards: bool) -> Option<Field> {
    match (from, backwards) {
        (Field::Name, false) | (Field::Subject, true) => Some(Field::Email),
        (Field::Subject, false) => Some(Field::Message),
        (Field::Email, true) => Some(Field::Name),
        (Field::Message, true) => Some(Field::Subject),
        (Field::Email | Field::Message, false) | (Field::Name, true) => None,
    }
}

pub(crate) fn handle_field_changed(state: &mut State, field: Field, value: String) {
    move_focus(state, Some(field));
    state.contact.form.set(field, value);
}

/// Shrinks an edit to the characters still left in the message budget.
///
/// Returns `None` when nothing of the edit fits, so the editor (and its
/// cursor) stays exactly as it was.
fn fit_edit(edit: text_editor::Edit, remaining: usize) -> Option<text_editor::Edit> {
    use text_editor::Edit;

    match edit {
        Edit::Insert(_) | Edit::Enter | Edit::Indent if remaining == 0 => None,
        Edit::Paste(text) if text.chars().count() > remaining => (remaining > 0)
            .then(|| Edit::Paste(Arc::new(text.chars().take(remaining).collect()))),
        other => Some(other),
    }
}

pub(crate) fn handle_message_edited(state: &mut State, action: text_editor::Action) {
    move_focus(state, Some(Field::Message));
    let action = match action {
        text_editor::Action::Edit(edit) => {
            let used = state.contact.form.message.chars().count();
            match fit_edit(edit, MESSAGE_LIMIT.saturating_sub(used)) {
                Some(edit) => text_editor::Action::Edit(edit),
                None => return,
            }
        }
        other => other,
    };

    let is_edit = action.is_edit();
    state.message_editor.perform(action);
    if !is_edit {
        return;
    }

    let text = state.message_editor.text();
    let clamped = clamp_message(text.clone());
    // Only reachable for edits that insert several characters at once
    if clamped != text {
        state.message_editor = text_editor::Content::with_text(&clamped);
    }
    state.contact.form.set(Field::Message, clamped);
}

/// Left button pressed anywhere: focus follows the pointer
pub(crate) fn handle_pointer_pressed(state: &mut State) {
    let target = state.hovered_field;
    move_focus(state, target);
}

pub(crate) fn handle_tab_pressed(state: &mut State, backwards: bool) {
    if let Some(field) = state.focused_field {
        move_focus(state, tab_target(field, backwards));
    }
}

pub(crate) fn handle_project_type_opened(state: &mut State) {
    move_focus(state, None);
    state.project_type_open = true;
}

/// Selecting closes the dropdown and updates the type in one step
pub(crate) fn handle_project_type_selected(state: &mut State, kind: ProjectType) {
    state.contact.form.project_type = kind;
    state.project_type_open = false;
}

/// Performs one send through the configured backend
pub(crate) async fn deliver(
    mailer: Arc<dyn Mailer>,
    payload: ContactPayload,
) -> Result<(), SendError> {
    mailer.send(&payload).await
}

pub(crate) fn handle_submit(state: &mut State) -> Task<Message> {
    match state.contact.submit() {
        SubmitDecision::Send(payload) => {
            tracing::info!("Sending contact message from {}", payload.from_email);
            state.focused_field = None;
            state.send_failure = None;
            let mailer = Arc::clone(&state.mailer);
            Task::perform(deliver(mailer, payload), Message::SendCompleted)
        }
        SubmitDecision::Blocked(errors) => {
            tracing::debug!("Contact form blocked by {} invalid field(s)", errors.len());
            Task::none()
        }
        SubmitDecision::Ignored => Task::none(),
    }
}

pub(crate) fn handle_send_completed(
    state: &mut State,
    result: Result<(), SendError>,
) -> Task<Message> {
    match state.contact.complete(result) {
        Completion::Delivered(ticket) => {
            tracing::info!("Contact message sent");
            state.message_editor = text_editor::Content::new();
            state.focused_field = None;

            let (timer, handle) = success_timer(ticket);
            // Replacing the handle aborts any earlier timer
            state.success_timer = Some(handle.abort_on_drop());
            timer
        }
        Completion::Failed(err) => {
            tracing::warn!("Contact message failed: {err}");
            state.send_failure = Some(err.user_message().to_string());
            Task::none()
        }
        Completion::Unexpected => {
            tracing::warn!("Send completion arrived with no submission in flight");
            Task::none()
        }
    }
}

/// Fires `SuccessExpired` once [`SUCCESS_RESET_DELAY`] has passed
fn success_timer(ticket: SuccessTicket) -> (Task<Message>, iced::task::Handle) {
    Task::perform(
        async { tokio::time::sleep(SUCCESS_RESET_DELAY).await },
        move |()| Message::SuccessExpired(ticket),
    )
    .abortable()
}

pub(crate) fn handle_success_expired(state: &mut State, ticket: SuccessTicket) {
    if state.contact.expire_success(ticket) {
        state.success_timer = None;
    }
}
