//! Shared fixtures for the test modules

use crate::api::{ApiError, SubmissionId, SubmissionResponse, SubmissionTransport};
use crate::fields::{FormField, FormFields};
use crate::payload::MultipartPayload;
use std::sync::Mutex;

type Responder = dyn Fn(&MultipartPayload) -> Result<SubmissionResponse, ApiError> + Send + Sync;

/// Transport that records payloads and answers from a closure
pub struct MockTransport {
    responder: Box<Responder>,
    pub sent: Mutex<Vec<MultipartPayload>>,
}

impl MockTransport {
    pub fn new(
        responder: impl Fn(&MultipartPayload) -> Result<SubmissionResponse, ApiError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            responder: Box::new(responder),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(id: &str, title: &str) -> Self {
        let response = response(id, title);
        Self::new(move |_| Ok(response.clone()))
    }

    pub fn unreachable() -> Self {
        Self::new(|_| Err(ApiError::Network("connection refused".to_string())))
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<MultipartPayload> {
        self.sent.lock().unwrap().last().cloned()
    }
}

impl SubmissionTransport for MockTransport {
    fn submit_cause(&self, payload: &MultipartPayload) -> Result<SubmissionResponse, ApiError> {
        self.sent.lock().unwrap().push(payload.clone());
        (self.responder)(payload)
    }
}

/// Minimal server response with the given id and title
pub fn response(id: &str, title: &str) -> SubmissionResponse {
    serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
}

/// Response carrying a numeric id
pub fn numeric_response(id: i64, title: &str) -> SubmissionResponse {
    SubmissionResponse {
        id: SubmissionId::Number(id),
        ..response("0", title)
    }
}

/// The five required fields filled with the "Help Maria" values
pub fn help_maria_fields() -> FormFields {
    let mut fields = FormFields::new();
    fields.set_field(FormField::Title, "Help Maria");
    fields.set_field(FormField::Description, "Medical fund");
    fields.set_field(FormField::TargetAmount, "500.00");
    fields.set_field(FormField::SubmitterName, "J. Doe");
    fields.set_field(FormField::SubmitterEmail, "j@x.com");
    fields
}
