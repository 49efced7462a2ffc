use async_trait::async_trait;
use contact_form_domain::{Delay, SimulatedTransport, SubmissionError, SubmissionTransport};
use gloo::timers::future::TimeoutFuture;
use shared::{SubmissionReceipt, SubmissionRecord};

use crate::services::logging::Logger;

/// Browser-side wait backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn wait(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

/// API client for delivering contact form submissions.
///
/// There is no server yet, so every send goes through the simulated
/// transport: a fixed delay followed by a console log of the record.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    delay_ms: u32,
}

impl ApiClient {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl SubmissionTransport for ApiClient {
    async fn send(&self, record: &SubmissionRecord) -> Result<SubmissionReceipt, SubmissionError> {
        Logger::debug_with_component("api", &format!("Sending submission {}", record.id));

        let result = SimulatedTransport::new(GlooDelay, self.delay_ms).send(record).await;
        if let Err(e) = &result {
            Logger::error_with_component("api", &format!("Submission {} failed: {}", record.id, e));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use contact_form_domain::SUCCESS_NOTICE;
    use shared::FormVariant;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_send_acknowledges_after_delay() {
        let client = ApiClient::new(10);
        let record = SubmissionRecord {
            id: "browser-1".to_string(),
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

        let receipt = client.send(&record).await.unwrap();

        assert_eq!(receipt.submission_id, "browser-1");
        assert_eq!(receipt.success_message, SUCCESS_NOTICE);
    }
}
