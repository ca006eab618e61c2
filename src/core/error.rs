use thiserror::Error;

/// Core error types for Folio
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Contact form failed validation; carries the number of invalid fields
    #[error("{0} field(s) invalid")]
    InvalidForm(usize),

    /// Contact message delivery failed
    #[error("Send error: {0}")]
    Send(#[from] SendError),

    /// Project catalog violates one of its invariants
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Failures of the external send operation.
///
/// The variants exist for logging only. Users always see the same
/// notification, see [`SendError::user_message`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("missing EmailJS {0}")]
    MissingCredentials(&'static str),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("service rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Text of the blocking notification shown when a submission fails
pub const SEND_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

impl SendError {
    /// Failure subtypes are intentionally not distinguished for the user.
    pub fn user_message(&self) -> &'static str {
        SEND_FAILURE_MESSAGE
    }
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Project catalog invariant violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project title: {0}")]
    DuplicateTitle(String),

    #[error("project '{0}' lists no technologies")]
    EmptyTech(String),
}

pub type Result<T> = std::result::Result<T, Error>;
