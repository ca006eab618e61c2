//! Shared test utilities for handler modules
//!
//! Provides common test helpers to avoid duplication across handler test suites.

use crate::core::contact::ContactPayload;
use crate::core::error::SendError;
use crate::mailer::Mailer;
use crate::theme::ThemeMode;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mailer that accepts everything and remembers what it was given
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<ContactPayload>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<ContactPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

pub fn create_test_state() -> crate::app::State {
    create_test_state_with(Arc::new(RecordingMailer::default()))
}

pub fn create_test_state_with(mailer: Arc<dyn Mailer>) -> crate::app::State {
    crate::app::State::with_mailer(ThemeMode::Dark, mailer)
}
