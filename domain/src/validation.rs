//! Contact form validation rules.
//!
//! Validation is a pure function of the entered fields, the variant's rule-set
//! and "today". It never touches presentation state; the form state machine
//! decides when to run it and how to surface the errors.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use shared::{ContactFormConfig, ContactValidationError, FieldErrors, FieldName, FormFields, FormVariant};

use crate::age::{age_on, parse_date_of_birth};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern compiles"));

/// Field values that passed every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    pub name: String,
    pub email: String,
    pub message: String,
    pub newsletter: bool,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<u32>,
}

/// Validation service that applies one variant's rule-set
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormValidator {
    variant: FormVariant,
    config: ContactFormConfig,
}

impl ContactFormValidator {
    pub fn new(variant: FormVariant) -> Self {
        Self::with_config(variant, ContactFormConfig::default())
    }

    pub fn with_config(variant: FormVariant, config: ContactFormConfig) -> Self {
        Self { variant, config }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn config(&self) -> &ContactFormConfig {
        &self.config
    }

    /// Validate every field at once
    pub fn validate(&self, fields: &FormFields, today: NaiveDate) -> Result<ValidFields, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(e) = self.validate_name(&fields.name) {
            errors.insert(FieldName::Name, e);
        }
        if let Err(e) = self.validate_email(&fields.email) {
            errors.insert(FieldName::Email, e);
        }
        if let Err(e) = self.validate_message(&fields.message) {
            errors.insert(FieldName::Message, e);
        }
        let date_of_birth = match self.validate_date_of_birth(&fields.date_of_birth, today) {
            Ok(date) => date,
            Err(e) => {
                errors.insert(FieldName::DateOfBirth, e);
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidFields {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            message: fields.message.clone(),
            newsletter: fields.newsletter,
            date_of_birth,
            age: date_of_birth.and_then(|birth| age_on(birth, today)),
        })
    }

    /// Validate a single field, used for inline feedback while typing
    pub fn validate_field(
        &self,
        field: FieldName,
        fields: &FormFields,
        today: NaiveDate,
    ) -> Result<(), ContactValidationError> {
        match field {
            FieldName::Name => self.validate_name(&fields.name),
            FieldName::Email => self.validate_email(&fields.email),
            FieldName::Message => self.validate_message(&fields.message),
            FieldName::DateOfBirth => self.validate_date_of_birth(&fields.date_of_birth, today).map(|_| ()),
            FieldName::Newsletter | FieldName::Attachment => Ok(()),
        }
    }

    pub fn validate_name(&self, name: &str) -> Result<(), ContactValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ContactValidationError::NameRequired);
        }

        let length = trimmed.chars().count();
        if length < self.config.min_name_length {
            return Err(ContactValidationError::NameTooShort(self.config.min_name_length));
        }
        if length > self.config.max_name_length {
            return Err(ContactValidationError::NameTooLong(self.config.max_name_length));
        }
        if self.variant.letters_only_names() && !NAME_PATTERN.is_match(name) {
            return Err(ContactValidationError::NameInvalidCharacters);
        }
        Ok(())
    }

    pub fn validate_email(&self, email: &str) -> Result<(), ContactValidationError> {
        if email.trim().is_empty() {
            return Err(ContactValidationError::EmailRequired);
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ContactValidationError::EmailInvalid);
        }
        Ok(())
    }

    pub fn validate_message(&self, message: &str) -> Result<(), ContactValidationError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(ContactValidationError::MessageRequired);
        }
        if trimmed.chars().count() < self.config.min_message_length {
            return Err(ContactValidationError::MessageTooShort(self.config.min_message_length));
        }
        // raw length, so trailing whitespace still counts against the limit
        if message.chars().count() > self.config.max_message_length {
            return Err(ContactValidationError::MessageTooLong(self.config.max_message_length));
        }
        Ok(())
    }

    /// Returns the parsed date, or `None` when the variant does not collect one
    pub fn validate_date_of_birth(
        &self,
        raw: &str,
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, ContactValidationError> {
        if !self.variant.collects_date_of_birth() {
            return Ok(None);
        }

        let birth = parse_date_of_birth(raw)?;
        if birth > today {
            return Err(ContactValidationError::DateOfBirthInFuture);
        }
        Ok(Some(birth))
    }

    /// Get user-friendly error message for validation error
    pub fn get_error_message(&self, error: &ContactValidationError) -> String {
        match error {
            ContactValidationError::NameRequired => "Please enter your name".to_string(),
            ContactValidationError::NameTooShort(min) => format!("Name must be at least {} characters long", min),
            ContactValidationError::NameTooLong(max) => format!("Name cannot exceed {} characters", max),
            ContactValidationError::NameInvalidCharacters => "Name can only contain letters and spaces".to_string(),
            ContactValidationError::EmailRequired => "Please enter your email address".to_string(),
            ContactValidationError::EmailInvalid => "Please enter a valid email address".to_string(),
            ContactValidationError::MessageRequired => "Please enter your message".to_string(),
            ContactValidationError::MessageTooShort(min) => {
                format!("Message must be at least {} characters long", min)
            }
            ContactValidationError::MessageTooLong(max) => format!("Message cannot exceed {} characters", max),
            ContactValidationError::DateOfBirthRequired => "Please select your date of birth".to_string(),
            ContactValidationError::DateOfBirthInvalid(raw) => {
                format!("'{}' is not a valid date (use YYYY-MM-DD)", raw)
            }
            ContactValidationError::DateOfBirthInFuture => "Date of birth cannot be in the future".to_string(),
        }
    }

    /// Get all validation error messages, in field order
    pub fn get_error_messages(&self, errors: &FieldErrors) -> Vec<(FieldName, String)> {
        errors
            .iter()
            .map(|(field, error)| (*field, self.get_error_message(error)))
            .collect()
    }
}
