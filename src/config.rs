//! Read-only application configuration
//!
//! Folio never writes configuration back; theme changes and form contents
//! live only as long as the window. The file merely overrides build-time
//! defaults:
//!
//! ```json
//! {
//!   "theme": "Light",
//!   "emailjs": {
//!     "service_id": "service_abc",
//!     "template_id": "template_def",
//!     "public_key": "pk_123"
//!   }
//! }
//! ```

use crate::core::error::Result;
use crate::mailer::{DEFAULT_ENDPOINT, MailerCredentials};
use crate::theme::ThemeMode;
use crate::utils::get_config_dir;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Theme the window opens with
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
}

/// EmailJS identifiers, defaulting to the values captured at build time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    #[serde(default = "default_service_id")]
    pub service_id: String,
    #[serde(default = "default_template_id")]
    pub template_id: String,
    #[serde(default = "default_public_key")]
    pub public_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: default_service_id(),
            template_id: default_template_id(),
            public_key: default_public_key(),
            endpoint: default_endpoint(),
        }
    }
}

impl EmailJsConfig {
    pub fn credentials(&self) -> MailerCredentials {
        MailerCredentials {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

fn default_service_id() -> String {
    option_env!("FOLIO_EMAILJS_SERVICE_ID")
        .unwrap_or_default()
        .to_string()
}

fn default_template_id() -> String {
    option_env!("FOLIO_EMAILJS_TEMPLATE_ID")
        .unwrap_or_default()
        .to_string()
}

fn default_public_key() -> String {
    option_env!("FOLIO_EMAILJS_PUBLIC_KEY")
        .unwrap_or_default()
        .to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Reads and parses `config.json` from the given directory.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_config_from(dir: &Path) -> Result<Option<AppConfig>> {
    let path = dir.join("config.json");
    let json = match tokio::fs::read_to_string(&path).await {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let config = serde_json::from_str(&json)?;
    info!("Loaded configuration from {}", path.display());
    Ok(Some(config))
}

/// Loads `config.json` from the given directory.
///
/// A missing file yields defaults silently; an unreadable or malformed one
/// yields defaults with a warning.
pub async fn load_config_from(dir: &Path) -> AppConfig {
    match read_config_from(dir).await {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring config in {}: {e}", dir.display());
            AppConfig::default()
        }
    }
}

/// Loads the app config from the XDG config directory, or returns defaults.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O.
pub async fn load_config() -> AppConfig {
    match get_config_dir() {
        Some(dir) => load_config_from(&dir).await,
        None => AppConfig::default(),
    }
}
