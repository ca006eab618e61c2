//! Contact submission state machine
//!
//! `Idle -> Submitting -> {Success, Idle}` and `Success -> Idle` after
//! [`SUCCESS_RESET_DELAY`]. The machine never performs I/O: [`ContactSession::submit`]
//! hands the payload back to the host, which performs exactly one send and
//! reports the outcome through [`ContactSession::complete`].

use crate::core::contact::{ContactForm, ContactPayload, FieldErrors};
use crate::core::error::SendError;
use std::time::Duration;

/// How long the success state stays visible before reverting to idle
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Identifies one success period, so a timer from an earlier success cannot
/// end a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

/// Result of a submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation failed; every field is now touched and nothing is sent
    Blocked(FieldErrors),
    /// The host must invoke the send operation once with this payload
    Send(ContactPayload),
    /// A submission is in flight or just succeeded; the action has no effect
    Ignored,
}

/// Result of feeding a send outcome back into the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Form cleared; schedule [`ContactSession::expire_success`] after the delay
    Delivered(SuccessTicket),
    /// Form kept intact; the host shows a blocking notification
    Failed(SendError),
    /// No submission was in flight
    Unexpected,
}

/// Contact form together with its submission status
#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    pub form: ContactForm,
    status: SubmissionStatus,
    successes: u64,
}

impl ContactSession {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Submit control is actionable only when idle and the form validates,
    /// regardless of which fields are touched.
    pub fn can_submit(&self) -> bool {
        self.status == SubmissionStatus::Idle && self.form.is_valid()
    }

    pub fn submit(&mut self) -> SubmitDecision {
        if self.status != SubmissionStatus::Idle {
            return SubmitDecision::Ignored;
        }

        self.form.touch_all();
        let errors = self.form.errors();
        if !errors.is_empty() {
            return SubmitDecision::Blocked(errors);
        }

        self.status = SubmissionStatus::Submitting;
        SubmitDecision::Send(self.form.payload())
    }

    /// Applies the single outcome of an in-flight send
    pub fn complete(&mut self, outcome: Result<(), SendError>) -> Completion {
        if self.status != SubmissionStatus::Submitting {
            return Completion::Unexpected;
        }

        match outcome {
            Ok(()) => {
                self.form.reset();
                self.successes += 1;
                self.status = SubmissionStatus::Success;
                Completion::Delivered(SuccessTicket(self.successes))
            }
            Err(err) => {
                self.status = SubmissionStatus::Idle;
                Completion::Failed(err)
            }
        }
    }

    /// Ends the success period identified by `ticket`.
    ///
    /// Returns `false` for stale tickets or when not in the success state.
    pub fn expire_success(&mut self, ticket: SuccessTicket) -> bool {
        if self.status == SubmissionStatus::Success && ticket == SuccessTicket(self.successes) {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::{Field, ProjectType};

    fn filled_session() -> ContactSession {
        let mut session = ContactSession::default();
        session.form.name = "Grace".to_string();
        session.form.email = "grace@navy.mil".to_string();
        session.form.project_type = ProjectType::Api;
        session.form.subject = "Compilers".to_string();
        session.form.message = "Let's build a compiler together.".to_string();
        session
    }

    #[test]
    fn test_invalid_submit_touches_all_and_stays_idle() {
        let mut session = ContactSession::default();
        assert!(!session.can_submit());

        let decision = session.submit();
        assert!(matches!(decision, SubmitDecision::Blocked(ref e) if e.len() == 4));
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert!(Field::ALL.iter().all(|f| session.form.is_touched(*f)));
    }

    #[test]
    fn test_valid_submit_enters_submitting() {
        let mut session = filled_session();
        assert!(session.can_submit());

        let SubmitDecision::Send(payload) = session.submit() else {
            panic!("expected a send decision");
        };
        assert_eq!(payload.project_type, "API");
        assert_eq!(session.status(), SubmissionStatus::Submitting);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut session = filled_session();
        assert!(matches!(session.submit(), SubmitDecision::Send(_)));
        assert_eq!(session.submit(), SubmitDecision::Ignored);
        assert_eq!(session.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut session = filled_session();
        let before = session.form.clone();
        session.submit();

        let completion = session.complete(Err(SendError::Transport("timeout".to_string())));
        assert!(matches!(completion, Completion::Failed(_)));
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert_eq!(session.form.name, before.name);
        assert_eq!(session.form.email, before.email);
        assert_eq!(session.form.subject, before.subject);
        assert_eq!(session.form.message, before.message);
        assert!(session.can_submit());
    }

    #[test]
    fn test_success_clears_and_expires() {
        let mut session = filled_session();
        session.submit();

        let Completion::Delivered(ticket) = session.complete(Ok(())) else {
            panic!("expected delivery");
        };
        assert_eq!(session.status(), SubmissionStatus::Success);
        assert_eq!(session.form.name, "");
        assert_eq!(session.form.message, "");
        assert_eq!(session.form.project_type, ProjectType::Website);
        assert!(Field::ALL.iter().all(|f| !session.form.is_touched(*f)));
        assert_eq!(session.submit(), SubmitDecision::Ignored);

        assert!(session.expire_success(ticket));
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert!(!session.expire_success(ticket));
    }

    #[test]
    fn test_stale_ticket_does_not_end_newer_success() {
        let mut session = filled_session();
        session.submit();
        let Completion::Delivered(first) = session.complete(Ok(())) else {
            panic!("expected delivery");
        };
        session.expire_success(first);

        session = ContactSession {
            form: filled_session().form,
            ..session
        };
        session.submit();
        let Completion::Delivered(second) = session.complete(Ok(())) else {
            panic!("expected delivery");
        };

        assert!(!session.expire_success(first));
        assert_eq!(session.status(), SubmissionStatus::Success);
        assert!(session.expire_success(second));
    }

    #[test]
    fn test_completion_without_submission() {
        let mut session = filled_session();
        assert_eq!(session.complete(Ok(())), Completion::Unexpected);
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert_eq!(session.form.name, "Grace");
    }
}
