//! Form state machine.
//!
//! ```text
//! Idle --(submit, valid)--> Submitting --(delivered)--> Submitted --(reset)--> Idle
//!                           Submitting --(failed)-----> Idle
//! ```
//!
//! [`ContactForm`] owns the entered values, their derived state and the
//! submission lifecycle. The UI creates one per mounted form and hands it to
//! its event handlers; nothing here is global.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};
use shared::{
    AttachmentInfo, ContactFormConfig, CounterTone, FieldErrors, FieldName, FieldUpdate, FormFields, FormVariant,
    SubmissionRecord, SubmissionState,
};
use thiserror::Error;
use uuid::Uuid;

use crate::age::{age_on, format_age, parse_date_of_birth};
use crate::attachment::{AttachmentRejection, AttachmentStaging};
use crate::clock::{Clock, SystemClock};
use crate::notify::{LogNotifier, Notifier};
use crate::submission::{SubmissionOutcome, SubmissionTransport, FAILURE_NOTICE};
use crate::validation::{ContactFormValidator, ValidFields};

/// Why a submit request was not started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("A submission is already in progress")]
    InFlight,
    #[error("The form has already been submitted")]
    AlreadySubmitted,
    #[error("Message is {length} characters long; the maximum is {max}")]
    MessageTooLong { length: usize, max: usize },
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

/// Issued when a submission starts; pairs the transport result with its form
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub record: SubmissionRecord,
}

#[derive(Clone)]
pub struct ContactForm {
    validator: ContactFormValidator,
    fields: FormFields,
    field_errors: FieldErrors,
    age: Option<u32>,
    attachment: AttachmentStaging,
    state: SubmissionState,
    in_flight: Option<String>,
    last_submission: Option<SubmissionRecord>,
    clock: Rc<dyn Clock>,
    notifier: Rc<dyn Notifier>,
}

impl fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("variant", &self.validator.variant())
            .field("fields", &self.fields)
            .field("field_errors", &self.field_errors)
            .field("age", &self.age)
            .field("attachment", &self.attachment)
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl ContactForm {
    pub fn new(variant: FormVariant) -> Self {
        Self::with_config(variant, ContactFormConfig::default())
    }

    pub fn with_config(variant: FormVariant, config: ContactFormConfig) -> Self {
        Self {
            validator: ContactFormValidator::with_config(variant, config),
            fields: FormFields::default(),
            field_errors: FieldErrors::new(),
            age: None,
            attachment: AttachmentStaging::new(),
            state: SubmissionState::Idle,
            in_flight: None,
            last_submission: None,
            clock: Rc::new(SystemClock),
            notifier: Rc::new(LogNotifier),
        }
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_notifier(mut self, notifier: Rc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn variant(&self) -> FormVariant {
        self.validator.variant()
    }

    pub fn config(&self) -> &ContactFormConfig {
        self.validator.config()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Inline error text for one field, if it is currently invalid
    pub fn field_error_message(&self, field: FieldName) -> Option<String> {
        self.field_errors
            .get(&field)
            .map(|error| self.validator.get_error_message(error))
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn age_display(&self) -> String {
        format_age(self.age)
    }

    /// Character counter value
    pub fn message_length(&self) -> usize {
        self.fields.message.chars().count()
    }

    pub fn counter_tone(&self) -> CounterTone {
        let length = self.message_length() as u128;
        let max = self.config().max_message_length as u128;
        if length > max {
            CounterTone::OverLimit
        } else if length * 10 > max * 9 {
            CounterTone::NearLimit
        } else {
            CounterTone::Normal
        }
    }

    pub fn staged_attachment(&self) -> Option<&AttachmentInfo> {
        self.attachment.staged()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.state == SubmissionState::Idle && self.message_length() <= self.config().max_message_length
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending Message..."
        } else {
            "Send Message"
        }
    }

    /// The record of the most recent delivered submission
    pub fn last_submission(&self) -> Option<&SubmissionRecord> {
        self.last_submission.as_ref()
    }

    /// Store a raw value and refresh that field's derived state.
    ///
    /// Returns false when the edit was ignored because the form is not idle.
    pub fn update_field(&mut self, update: FieldUpdate) -> bool {
        let field = update.field();
        if self.state != SubmissionState::Idle {
            debug!("Ignoring {} update while {:?}", field, self.state);
            return false;
        }

        match update {
            FieldUpdate::Name(value) => {
                self.fields.name = match self.variant() {
                    FormVariant::Basic => truncate_chars(value, self.config().max_name_length),
                    FormVariant::Extended => value,
                };
            }
            FieldUpdate::Email(value) => self.fields.email = value,
            FieldUpdate::Message(value) => {
                self.fields.message = truncate_chars(value, self.config().max_message_length);
            }
            FieldUpdate::Newsletter(checked) => self.fields.newsletter = checked,
            FieldUpdate::DateOfBirth(value) => {
                self.fields.date_of_birth = value;
                self.refresh_age();
            }
        }

        self.revalidate(field);
        true
    }

    /// Stage a file, replacing any staged one; rejected files raise an error notice.
    ///
    /// Like field edits, staging is refused unless the form is idle.
    pub fn stage_attachment(&mut self, file: AttachmentInfo) -> Result<(), AttachmentRejection> {
        if self.state != SubmissionState::Idle {
            debug!("Ignoring attachment '{}' while {:?}", file.file_name, self.state);
            return Err(AttachmentRejection::FormBusy);
        }

        let result = if self.variant().accepts_attachment() {
            let config = self.validator.config().clone();
            self.attachment.stage(file, &config).map(|_| ())
        } else {
            Err(AttachmentRejection::NotAccepted)
        };

        if let Err(rejection) = &result {
            warn!("Attachment rejected: {:?}", rejection);
            self.notifier.error(&rejection.to_string());
        }
        result
    }

    /// Unstage the current file; returns None while the form is not idle
    pub fn remove_attachment(&mut self) -> Option<AttachmentInfo> {
        if self.state != SubmissionState::Idle {
            debug!("Ignoring attachment removal while {:?}", self.state);
            return None;
        }
        self.attachment.remove()
    }

    /// Validate the current values without changing any state
    pub fn validate(&self) -> Result<ValidFields, FieldErrors> {
        self.validator.validate(&self.fields, self.clock.today())
    }

    /// Idle -> Submitting, if the form is valid.
    ///
    /// A request made while a submission is in flight is rejected, never queued.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitRejection> {
        match self.state {
            SubmissionState::Idle => {}
            SubmissionState::Submitting => {
                debug!("Submit ignored: submission {:?} still in flight", self.in_flight);
                return Err(SubmitRejection::InFlight);
            }
            SubmissionState::Submitted => return Err(SubmitRejection::AlreadySubmitted),
        }

        let length = self.message_length();
        let max = self.config().max_message_length;
        if length > max {
            return Err(SubmitRejection::MessageTooLong { length, max });
        }

        let valid = match self.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                info!("Submission blocked: {} invalid field(s)", errors.len());
                self.field_errors = errors.clone();
                return Err(SubmitRejection::Invalid(errors));
            }
        };
        self.field_errors.clear();

        let record = SubmissionRecord {
            id: Uuid::new_v4().to_string(),
            variant: self.variant(),
            name: valid.name,
            email: valid.email,
            message: valid.message,
            newsletter: valid.newsletter,
            date_of_birth: valid.date_of_birth,
            age: valid.age,
            attachment: self.attachment.staged().cloned(),
            submitted_at: self.clock.now(),
        };

        info!("Submitting contact form {}", record.id);
        self.state = SubmissionState::Submitting;
        self.in_flight = Some(record.id.clone());

        Ok(SubmissionTicket { record })
    }

    /// Submitting -> Submitted on delivery (clearing every entry), or back to
    /// Idle with the entries kept on failure
    pub fn finish_submission(&mut self, ticket: &SubmissionTicket, outcome: SubmissionOutcome) -> SubmissionState {
        if self.in_flight.as_deref() != Some(ticket.record.id.as_str()) {
            warn!("Ignoring completion of unknown submission {}", ticket.record.id);
            return self.state;
        }
        self.in_flight = None;

        match outcome {
            SubmissionOutcome::Delivered(receipt) => {
                info!("Submission {} delivered", receipt.submission_id);
                self.clear_entries();
                self.state = SubmissionState::Submitted;
                self.last_submission = Some(ticket.record.clone());
                self.notifier.success(&receipt.success_message);
            }
            SubmissionOutcome::Failed(error) => {
                warn!("Submission {} failed: {}", ticket.record.id, error);
                self.state = SubmissionState::Idle;
                self.notifier.error(FAILURE_NOTICE);
            }
        }

        self.state
    }

    /// Run a full submission against `transport`
    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmissionOutcome, SubmitRejection>
    where
        T: SubmissionTransport + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let outcome = SubmissionOutcome::from(transport.send(&ticket.record).await);
        self.finish_submission(&ticket, outcome.clone());
        Ok(outcome)
    }

    /// Clear every entry and return to Idle.
    ///
    /// Has no effect while a submission is in flight, since the simulated
    /// delay cannot be cancelled.
    pub fn reset(&mut self) -> bool {
        if self.state == SubmissionState::Submitting {
            warn!("Reset ignored while submission is in flight");
            return false;
        }

        self.clear_entries();
        self.state = SubmissionState::Idle;
        debug!("Contact form reset");
        true
    }

    fn clear_entries(&mut self) {
        self.fields = FormFields::default();
        self.field_errors.clear();
        self.age = None;
        self.attachment.remove();
    }

    fn refresh_age(&mut self) {
        if !self.variant().collects_date_of_birth() {
            self.age = None;
            return;
        }

        let today = self.clock.today();
        self.age = parse_date_of_birth(&self.fields.date_of_birth)
            .ok()
            .and_then(|birth| age_on(birth, today));
    }

    fn revalidate(&mut self, field: FieldName) {
        match self.validator.validate_field(field, &self.fields, self.clock.today()) {
            Ok(()) => {
                self.field_errors.remove(&field);
            }
            Err(error) => {
                self.field_errors.insert(field, error);
            }
        }
    }
}

fn truncate_chars(value: String, max: usize) -> String {
    if value.chars().count() <= max {
        value
    } else {
        value.chars().take(max).collect()
    }
}
