//! Submission transport seam.
//!
//! A real deployment would post the record to an API. The shipped
//! [`SimulatedTransport`] waits a fixed delay and logs the record as JSON.

use async_trait::async_trait;
use tracing::info;
use shared::{FormVariant, SubmissionReceipt, SubmissionRecord};
use thiserror::Error;

pub const SUCCESS_NOTICE: &str = "Thank you! Your message has been sent successfully.";
pub const EXTENDED_SUCCESS_NOTICE: &str = "Form submitted successfully!";
pub const FAILURE_NOTICE: &str = "Sorry, something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Submission endpoint unavailable: {0}")]
    Unavailable(String),
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Toast text shown once a submission of `variant` is delivered
pub fn success_notice(variant: FormVariant) -> &'static str {
    match variant {
        FormVariant::Basic => SUCCESS_NOTICE,
        FormVariant::Extended => EXTENDED_SUCCESS_NOTICE,
    }
}

/// Result of handing a record to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered(SubmissionReceipt),
    Failed(SubmissionError),
}

impl From<Result<SubmissionReceipt, SubmissionError>> for SubmissionOutcome {
    fn from(result: Result<SubmissionReceipt, SubmissionError>) -> Self {
        match result {
            Ok(receipt) => SubmissionOutcome::Delivered(receipt),
            Err(e) => SubmissionOutcome::Failed(e),
        }
    }
}

/// Async wait, provided by whichever runtime hosts the form
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, millis: u32);
}

/// Endpoint that accepts validated submissions
#[async_trait(?Send)]
pub trait SubmissionTransport {
    async fn send(&self, record: &SubmissionRecord) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Stand-in for a real API call: waits, then logs the record
#[derive(Debug, Clone)]
pub struct SimulatedTransport<D> {
    delay: D,
    delay_ms: u32,
}

impl<D: Delay> SimulatedTransport<D> {
    pub fn new(delay: D, delay_ms: u32) -> Self {
        Self { delay, delay_ms }
    }
}

#[async_trait(?Send)]
impl<D: Delay> SubmissionTransport for SimulatedTransport<D> {
    async fn send(&self, record: &SubmissionRecord) -> Result<SubmissionReceipt, SubmissionError> {
        self.delay.wait(self.delay_ms).await;

        let payload = serde_json::to_string(record)
            .map_err(|e| SubmissionError::Rejected(format!("Failed to serialize submission: {}", e)))?;
        info!("Form submitted: {}", payload);

        Ok(SubmissionReceipt {
            submission_id: record.id.clone(),
            success_message: success_notice(record.variant).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingDelay {
        waits: Rc<RefCell<Vec<u32>>>,
    }

    #[async_trait(?Send)]
    impl Delay for RecordingDelay {
        async fn wait(&self, millis: u32) {
            self.waits.borrow_mut().push(millis);
        }
    }

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            id: "submission-1".to_string(),
            variant: FormVariant::Basic,
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            message: "Hello there friend".to_string(),
            newsletter: false,
            date_of_birth: None,
            age: None,
            attachment: None,
            submitted_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_simulated_transport_waits_then_acknowledges() {
        let delay = RecordingDelay::default();
        let transport = SimulatedTransport::new(delay.clone(), 1000);

        let receipt = transport.send(&record()).await.unwrap();

        assert_eq!(*delay.waits.borrow(), vec![1000]);
        assert_eq!(receipt.submission_id, "submission-1");
        assert_eq!(receipt.success_message, SUCCESS_NOTICE);
    }

    #[tokio::test]
    async fn test_success_notice_follows_variant() {
        let transport = SimulatedTransport::new(RecordingDelay::default(), 0);
        let extended = SubmissionRecord {
            variant: FormVariant::Extended,
            ..record()
        };

        let receipt = transport.send(&extended).await.unwrap();

        assert_eq!(receipt.success_message, EXTENDED_SUCCESS_NOTICE);
        assert_eq!(success_notice(FormVariant::Basic), SUCCESS_NOTICE);
    }

    #[test]
    fn test_outcome_from_result() {
        let failed: SubmissionOutcome = Err(SubmissionError::Unavailable("offline".into())).into();
        assert_eq!(failed, SubmissionOutcome::Failed(SubmissionError::Unavailable("offline".into())));
    }
}
