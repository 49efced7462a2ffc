use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which rule-set the contact form runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// Name, email, message and newsletter opt-in
    #[default]
    Basic,
    /// Basic fields plus date of birth, derived age and one attachment
    Extended,
}

impl FormVariant {
    /// Whether the variant collects (and requires) a date of birth
    pub fn collects_date_of_birth(&self) -> bool {
        matches!(self, FormVariant::Extended)
    }

    /// Whether the variant offers attachment staging
    pub fn accepts_attachment(&self) -> bool {
        matches!(self, FormVariant::Extended)
    }

    /// Whether names are restricted to ASCII letters and whitespace
    pub fn letters_only_names(&self) -> bool {
        matches!(self, FormVariant::Extended)
    }
}

/// Identifies a single input on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Email,
    Message,
    Newsletter,
    DateOfBirth,
    Attachment,
}

impl FieldName {
    /// Stable identifier, also used as the DOM id of the input
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Message => "message",
            FieldName::Newsletter => "newsletter",
            FieldName::DateOfBirth => "dob",
            FieldName::Attachment => "attachment",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Full Name",
            FieldName::Email => "Email Address",
            FieldName::Message => "Message",
            FieldName::Newsletter => "Newsletter",
            FieldName::DateOfBirth => "Date of Birth",
            FieldName::Attachment => "File Upload (Optional)",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw values currently entered on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
    pub newsletter: bool,
    /// ISO 8601 date (YYYY-MM-DD) as typed; empty when not provided
    pub date_of_birth: String,
}

impl FormFields {
    /// True when nothing has been entered
    pub fn is_empty(&self) -> bool {
        self == &FormFields::default()
    }
}

/// A single edit applied to the form, carrying the new raw value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Message(String),
    Newsletter(bool),
    DateOfBirth(String),
}

impl FieldUpdate {
    pub fn field(&self) -> FieldName {
        match self {
            FieldUpdate::Name(_) => FieldName::Name,
            FieldUpdate::Email(_) => FieldName::Email,
            FieldUpdate::Message(_) => FieldName::Message,
            FieldUpdate::Newsletter(_) => FieldName::Newsletter,
            FieldUpdate::DateOfBirth(_) => FieldName::DateOfBirth,
        }
    }
}

/// Metadata of a file chosen for upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentInfo {
    pub file_name: String,
    /// MIME type reported by the browser (may be empty)
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Specific validation errors for contact form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactValidationError {
    NameRequired,
    NameTooShort(usize),
    NameTooLong(usize),
    NameInvalidCharacters,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
    MessageTooShort(usize),
    MessageTooLong(usize),
    DateOfBirthRequired,
    DateOfBirthInvalid(String),
    DateOfBirthInFuture,
}

/// Validation errors keyed by the field they belong to
pub type FieldErrors = BTreeMap<FieldName, ContactValidationError>;

/// Lifecycle of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Styling hint for the message character counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterTone {
    Normal,
    /// Above 90% of the maximum
    NearLimit,
    OverLimit,
}

/// Payload handed to the submission transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// UUID v4 assigned when the submission starts
    pub id: String,
    pub variant: FormVariant,
    pub name: String,
    pub email: String,
    pub message: String,
    pub newsletter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentInfo>,
    pub submitted_at: DateTime<Utc>,
}

/// Response after a submission was accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub submission_id: String,
    pub success_message: String,
}

/// Kind of user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast-style notification raised by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Limits and timings for the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormConfig {
    pub min_name_length: usize,
    pub max_name_length: usize,
    pub min_message_length: usize,
    pub max_message_length: usize,
    /// Attachments must be strictly smaller than this
    pub max_attachment_bytes: u64,
    /// Exact MIME types accepted besides the `image/*` and `text/*` families
    pub allowed_mime_types: Vec<String>,
    /// MIME type prefixes accepted as whole families
    pub allowed_mime_prefixes: Vec<String>,
    pub submit_delay_ms: u32,
    pub success_countdown_secs: u32,
    pub notice_duration_ms: u32,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            max_name_length: 50,
            min_message_length: 10,
            max_message_length: 500,
            max_attachment_bytes: 10 * 1024 * 1024,
            allowed_mime_types: vec![
                "application/pdf".to_string(),
                "application/msword".to_string(),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string(),
            ],
            allowed_mime_prefixes: vec!["image/".to_string(), "text/".to_string()],
            submit_delay_ms: 1000,
            success_countdown_secs: 5,
            notice_duration_ms: 3000,
        }
    }
}

/// Page-level settings: which variant to mount plus its limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContactFormSettings {
    #[serde(default)]
    pub variant: FormVariant,
    #[serde(flatten)]
    pub form: ContactFormConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_flatten_config() {
        let settings: ContactFormSettings =
            serde_json::from_str(r#"{"variant": "extended", "max_message_length": 300}"#).unwrap();
        assert_eq!(settings.variant, FormVariant::Extended);
        assert_eq!(settings.form.max_message_length, 300);
        assert_eq!(settings.form.min_message_length, 10);
    }

    #[test]
    fn test_config_defaults() {
        let config = ContactFormConfig::default();
        assert_eq!(config.min_name_length, 2);
        assert_eq!(config.max_name_length, 50);
        assert_eq!(config.min_message_length, 10);
        assert_eq!(config.max_message_length, 500);
        assert_eq!(config.max_attachment_bytes, 10_485_760);
        assert_eq!(config.submit_delay_ms, 1000);
        assert_eq!(config.success_countdown_secs, 5);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: ContactFormConfig = serde_json::from_str(r#"{"submit_delay_ms": 250}"#).unwrap();
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.max_message_length, 500);
        assert_eq!(config.allowed_mime_prefixes, vec!["image/", "text/"]);
    }

    #[test]
    fn test_variant_capabilities() {
        assert!(!FormVariant::Basic.collects_date_of_birth());
        assert!(!FormVariant::Basic.accepts_attachment());
        assert!(!FormVariant::Basic.letters_only_names());
        assert!(FormVariant::Extended.collects_date_of_birth());
        assert!(FormVariant::Extended.accepts_attachment());
        assert!(FormVariant::Extended.letters_only_names());
    }

    #[test]
    fn test_field_update_maps_to_field() {
        assert_eq!(FieldUpdate::Name("Al".into()).field(), FieldName::Name);
        assert_eq!(FieldUpdate::Newsletter(true).field(), FieldName::Newsletter);
        assert_eq!(FieldUpdate::DateOfBirth("2000-01-01".into()).field(), FieldName::DateOfBirth);
    }

    #[test]
    fn test_form_fields_is_empty() {
        let mut fields = FormFields::default();
        assert!(fields.is_empty());
        fields.newsletter = true;
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_record_serialization_omits_absent_optionals() {
        let record = SubmissionRecord {
            id: "id-1".to_string(),
            variant: FormVariant::Basic,
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            message: "Hello there friend".to_string(),
            newsletter: false,
            date_of_birth: None,
            age: None,
            attachment: None,
            submitted_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Al");
        assert_eq!(json["email"], "a@b.co");
        assert_eq!(json["message"], "Hello there friend");
        assert_eq!(json["newsletter"], false);
        assert_eq!(json["variant"], "basic");
        assert!(json.get("age").is_none());
        assert!(json.get("attachment").is_none());
    }

    #[test]
    fn test_field_errors_ordered_by_field() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldName::Message, ContactValidationError::MessageRequired);
        errors.insert(FieldName::Name, ContactValidationError::NameRequired);
        let first = errors.keys().next().copied();
        assert_eq!(first, Some(FieldName::Name));
    }
}
