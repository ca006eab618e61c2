//! Contact message delivery through EmailJS
//!
//! The submission state machine only knows that sending either succeeds or
//! fails. [`Mailer`] is that boundary; [`EmailJsMailer`] is the production
//! implementation and tests substitute their own.

use crate::core::contact::ContactPayload;
use crate::core::error::SendError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// External send operation
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError>;
}

/// Opaque identifiers issued by the email service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailerCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailerCredentials {
    /// Fails closed on the first blank identifier
    fn check(&self) -> Result<(), SendError> {
        if self.service_id.trim().is_empty() {
            return Err(SendError::MissingCredentials("service id"));
        }
        if self.template_id.trim().is_empty() {
            return Err(SendError::MissingCredentials("template id"));
        }
        if self.public_key.trim().is_empty() {
            return Err(SendError::MissingCredentials("public key"));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

pub struct EmailJsMailer {
    http_client: reqwest::Client,
    endpoint: String,
    credentials: MailerCredentials,
}

impl EmailJsMailer {
    pub fn new(credentials: MailerCredentials, endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            credentials,
        }
    }

    pub fn from_config(config: &crate::config::EmailJsConfig) -> Self {
        Self::new(config.credentials(), config.endpoint.clone())
    }

    fn request_body<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: payload,
        }
    }
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        self.credentials.check()?;

        debug!("Posting contact message to {}", self.endpoint);
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&self.request_body(payload))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Contact message from {} delivered", payload.from_email);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("EmailJS rejected contact message: {} {}", status, body);
        Err(SendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            project_type: "Website".to_string(),
            subject: "Hi".to_string(),
            message: "A message of some length".to_string(),
        }
    }

    fn credentials() -> MailerCredentials {
        MailerCredentials {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk_z".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let mailer = EmailJsMailer::new(credentials(), DEFAULT_ENDPOINT);
        let payload = payload();
        let json = serde_json::to_value(mailer.request_body(&payload)).unwrap();
        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["template_id"], "template_y");
        assert_eq!(json["user_id"], "pk_z");
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["project_type"], "Website");
    }

    #[test]
    fn test_blank_credentials_detected() {
        let mut creds = credentials();
        creds.template_id = "  ".to_string();
        assert_eq!(
            creds.check(),
            Err(SendError::MissingCredentials("template id"))
        );
        assert_eq!(credentials().check(), Ok(()));
    }

    #[tokio::test]
    async fn test_send_fails_closed_without_network() {
        // Unroutable endpoint: the credential check must fail before any I/O
        let mailer = EmailJsMailer::new(MailerCredentials::default(), "http://127.0.0.1:9/");
        let result = mailer.send(&payload()).await;
        assert_eq!(result, Err(SendError::MissingCredentials("service id")));
    }
}
