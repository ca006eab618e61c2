//! Integration tests for Folio
//!
//! These tests drive the library's public surface end to end: the gallery
//! filters over the shipped catalog, and full contact submissions against
//! fake mailers that never touch the network.
//!
//! ```bash
//! cargo test --test integration_tests
//! ```

#![allow(clippy::uninlined_format_args)]

use async_trait::async_trait;
use folio::core::catalog::{CATALOG, Category, ProjectStatus};
use folio::core::contact::{ContactPayload, Field, ProjectType};
use folio::core::error::{SEND_FAILURE_MESSAGE, SendError};
use folio::core::filter::{CategoryFilter, GalleryState};
use folio::core::submission::{Completion, ContactSession, SubmissionStatus, SubmitDecision};
use folio::mailer::{EmailJsMailer, Mailer, MailerCredentials};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Accepts every message and keeps a copy
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<ContactPayload>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// Rejects every message, counting attempts
#[derive(Default)]
struct FailingMailer {
    attempts: AtomicUsize,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _payload: &ContactPayload) -> Result<(), SendError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SendError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        })
    }
}

fn fill(session: &mut ContactSession) {
    session.form.set(Field::Name, "Margaret".to_string());
    session.form.set(Field::Email, "margaret@apollo.nasa".to_string());
    session.form.set(Field::Subject, "Guidance software".to_string());
    session.form.set(
        Field::Message,
        "We need a priority scheduler for the lander.".to_string(),
    );
    session.form.project_type = ProjectType::Other;
}

fn filled_session() -> ContactSession {
    let mut session = ContactSession::default();
    fill(&mut session);
    session
}

/// Runs one submit/send/complete cycle the way the GUI does
async fn submit_through(session: &mut ContactSession, mailer: &dyn Mailer) -> Option<Completion> {
    match session.submit() {
        SubmitDecision::Send(payload) => {
            let outcome = mailer.send(&payload).await;
            Some(session.complete(outcome))
        }
        SubmitDecision::Blocked(_) | SubmitDecision::Ignored => None,
    }
}

#[tokio::test]
async fn test_successful_submission_clears_form() {
    let mailer = RecordingMailer::default();
    let mut session = filled_session();

    let completion = submit_through(&mut session, &mailer).await;
    let Some(Completion::Delivered(ticket)) = completion else {
        panic!("expected delivery, got {:?}", completion);
    };

    let sent = mailer.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from_name, "Margaret");
    assert_eq!(sent[0].project_type, "Other");

    assert_eq!(session.status(), SubmissionStatus::Success);
    assert!(session.form.name.is_empty());
    assert!(session.form.message.is_empty());
    assert_eq!(session.form.project_type, ProjectType::Website);
    assert!(Field::ALL.iter().all(|f| !session.form.is_touched(*f)));
    assert!(!session.can_submit());

    assert!(session.expire_success(ticket));
    assert_eq!(session.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_failed_submission_keeps_values() {
    let mailer = FailingMailer::default();
    let mut session = filled_session();
    let before = session.form.clone();

    let completion = submit_through(&mut session, &mailer).await;
    let Some(Completion::Failed(err)) = completion else {
        panic!("expected failure, got {:?}", completion);
    };

    assert_eq!(err.user_message(), SEND_FAILURE_MESSAGE);
    assert_eq!(session.status(), SubmissionStatus::Idle);
    assert_eq!(session.form.name, before.name);
    assert_eq!(session.form.email, before.email);
    assert_eq!(session.form.subject, before.subject);
    assert_eq!(session.form.message, before.message);

    // The user can retry straight away
    assert!(session.can_submit());
    submit_through(&mut session, &mailer).await;
    assert_eq!(mailer.attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_mailer() {
    let mailer = RecordingMailer::default();
    let mut session = ContactSession::default();
    session.form.set(Field::Email, "not-an-email".to_string());

    assert!(submit_through(&mut session, &mailer).await.is_none());
    assert!(mailer.sent.lock().unwrap().is_empty());
    assert_eq!(
        session.form.visible_error(Field::Email),
        Some("Valid email required")
    );
}

#[tokio::test]
async fn test_submit_while_in_flight_sends_once() {
    let mailer = RecordingMailer::default();
    let mut session = filled_session();

    let SubmitDecision::Send(payload) = session.submit() else {
        panic!("expected a send decision");
    };
    // Second press before the first send resolves
    assert_eq!(session.submit(), SubmitDecision::Ignored);

    let outcome = mailer.send(&payload).await;
    assert!(matches!(session.complete(outcome), Completion::Delivered(_)));
    assert_eq!(mailer.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_stale_success_timer_is_ignored() {
    let mailer = RecordingMailer::default();
    let mut session = filled_session();

    let Some(Completion::Delivered(first)) = submit_through(&mut session, &mailer).await else {
        panic!("first send should succeed");
    };
    assert!(session.expire_success(first));

    fill(&mut session);
    let Some(Completion::Delivered(second)) = submit_through(&mut session, &mailer).await else {
        panic!("second send should succeed");
    };

    assert!(!session.expire_success(first));
    assert_eq!(session.status(), SubmissionStatus::Success);
    assert!(session.expire_success(second));
}

#[tokio::test]
async fn test_missing_credentials_fail_closed() {
    let mailer = EmailJsMailer::new(MailerCredentials::default(), "http://127.0.0.1:9/unused");
    let mut session = filled_session();

    let completion = submit_through(&mut session, &mailer).await;
    assert_eq!(
        completion,
        Some(Completion::Failed(SendError::MissingCredentials("service id")))
    );
    assert_eq!(session.status(), SubmissionStatus::Idle);
}

#[test]
fn test_gallery_filters_compose() {
    let mut gallery = GalleryState::new(CATALOG);
    assert_eq!(gallery.visible().len(), CATALOG.len());

    gallery.select_category(CategoryFilter::Only(Category::WebApp));
    gallery.select_tag("React");
    let titles: Vec<_> = gallery.visible().iter().map(|p| p.title).collect();
    assert!(!titles.is_empty());
    assert!(
        gallery
            .visible()
            .iter()
            .all(|p| p.category == Category::WebApp && p.uses("React")),
        "every visible project must satisfy both selectors: {:?}",
        titles
    );

    gallery.select_category(CategoryFilter::All);
    assert_eq!(gallery.active_tag(), Some("React"));

    gallery.clear_tag();
    assert_eq!(gallery.visible().len(), CATALOG.len());
}

#[test]
fn test_counts_and_stats_match_catalog() {
    let gallery = GalleryState::new(CATALOG);
    let counts = gallery.counts();
    assert_eq!(counts[0], (CategoryFilter::All, CATALOG.len()));

    let per_category: usize = counts[1..].iter().map(|(_, n)| n).sum();
    assert_eq!(per_category, CATALOG.len());

    let stats = gallery.stats();
    assert_eq!(stats.total, CATALOG.len());
    assert_eq!(
        stats.live,
        CATALOG
            .iter()
            .filter(|p| p.status == ProjectStatus::Live)
            .count()
    );
    assert!(stats.featured <= stats.total);
}
