//! Contact form validation
//!
//! The validator is recomputed on every keystroke and always reports every
//! failing field. Hiding errors for untouched fields is a presentation
//! concern, exposed through [`ContactForm::visible_error`].

use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use strum::{Display, EnumString};

/// Upper bound on message length, enforced at the input boundary
pub const MESSAGE_LIMIT: usize = 500;

/// Minimum trimmed message length accepted by the validator
pub const MESSAGE_MIN_LEN: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Kind of work the visitor is asking about. Every option is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ProjectType {
    #[default]
    Website,
    #[strum(serialize = "UI/UX")]
    UiUx,
    #[strum(serialize = "API")]
    Api,
    Other,
}

impl ProjectType {
    pub const ALL: [Self; 4] = [Self::Website, Self::UiUx, Self::Api, Self::Other];
}

/// Validated form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];
}

/// Field name to human-readable message. A field absent from the map is valid.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Computes the error map for the four validated fields.
///
/// All fields are checked independently; nothing short-circuits.
pub fn validate(name: &str, email: &str, subject: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    if !EMAIL_PATTERN.is_match(email) {
        errors.insert(Field::Email, "Valid email required");
    }
    if subject.trim().is_empty() {
        errors.insert(Field::Subject, "Subject is required");
    }
    if message.trim().chars().count() < MESSAGE_MIN_LEN {
        errors.insert(Field::Message, "Message should be at least 10 characters");
    }

    errors
}

/// Truncates input to [`MESSAGE_LIMIT`] characters on a char boundary
pub fn clamp_message(input: String) -> String {
    match input.char_indices().nth(MESSAGE_LIMIT) {
        Some((cut, _)) => input[..cut].to_string(),
        None => input,
    }
}

/// Outbound payload for the send operation, exactly the five template fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub project_type: String,
    pub subject: String,
    pub message: String,
}

/// Mutable contact form record plus its touched set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub subject: String,
    pub message: String,
    touched: BTreeSet<Field>,
}

impl ContactForm {
    pub fn errors(&self) -> FieldErrors {
        validate(&self.name, &self.email, &self.subject, &self.message)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Replaces a field value. Message input is clamped to the character budget.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = clamp_message(value),
        }
    }

    /// Records that the user left `field`
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display for `field`, suppressed until the field is touched
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(&field).copied()
    }

    /// Restores defaults, including the touched set
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            project_type: self.project_type.to_string(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I would like a website built.".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_project_type_parsing() {
        assert_eq!("ui/ux".parse::<ProjectType>().ok(), Some(ProjectType::UiUx));
        assert_eq!("API".parse::<ProjectType>().ok(), Some(ProjectType::Api));
        assert!("mobile".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate("", "", "", "");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Email], "Valid email required");
        assert_eq!(errors[&Field::Subject], "Subject is required");
        assert_eq!(
            errors[&Field::Message],
            "Message should be at least 10 characters"
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let errors = validate("   ", "a@b.c", "\t\n", "          ");
        assert!(errors.contains_key(&Field::Name));
        assert!(errors.contains_key(&Field::Subject));
        assert!(errors.contains_key(&Field::Message));
        assert!(!errors.contains_key(&Field::Email));
    }

    #[test]
    fn test_message_length_boundary() {
        assert!(!validate("a", "a@b.c", "s", "0123456789").contains_key(&Field::Message));
        assert!(validate("a", "a@b.c", "s", "012345678").contains_key(&Field::Message));
        // Surrounding whitespace does not count
        assert!(validate("a", "a@b.c", "s", "  012345678  ").contains_key(&Field::Message));
    }

    #[test]
    fn test_message_length_counts_characters() {
        assert!(!validate("a", "a@b.c", "s", "éééééééééé").contains_key(&Field::Message));
    }

    #[test]
    fn test_email_pattern() {
        let email_ok = |e: &str| !validate("a", e, "s", "0123456789").contains_key(&Field::Email);
        assert!(email_ok("a@b.c"));
        assert!(email_ok("first.last@sub.example.org"));
        assert!(!email_ok("a@b"));
        assert!(!email_ok("a b@c.d"));
        assert!(!email_ok("@b.c"));
        assert!(!email_ok("a@@b.c"));
        assert!(!email_ok(" a@b.c"));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().is_valid());
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = ContactForm::default();
        assert_eq!(form.errors().len(), 4);
        assert!(Field::ALL.iter().all(|f| form.visible_error(*f).is_none()));

        form.touch(Field::Email);
        assert_eq!(form.visible_error(Field::Email), Some("Valid email required"));
        assert!(form.visible_error(Field::Name).is_none());

        form.touch_all();
        assert!(Field::ALL.iter().all(|f| form.visible_error(*f).is_some()));
    }

    #[test]
    fn test_message_clamped_at_limit() {
        let mut form = ContactForm::default();
        form.set(Field::Message, "x".repeat(MESSAGE_LIMIT + 25));
        assert_eq!(form.message.chars().count(), MESSAGE_LIMIT);

        form.set(Field::Message, "ü".repeat(MESSAGE_LIMIT + 1));
        assert_eq!(form.message.chars().count(), MESSAGE_LIMIT);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = valid_form();
        form.project_type = ProjectType::Api;
        form.touch_all();
        form.reset();
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.project_type, ProjectType::Website);
        assert!(Field::ALL.iter().all(|f| !form.is_touched(*f)));
    }

    #[test]
    fn test_payload_fields() {
        let mut form = valid_form();
        form.project_type = ProjectType::UiUx;
        let payload = form.payload();
        assert_eq!(payload.from_name, "Ada");
        assert_eq!(payload.from_email, "ada@example.com");
        assert_eq!(payload.project_type, "UI/UX");

        let json = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["from_email", "from_name", "message", "project_type", "subject"]
        );
    }
}
