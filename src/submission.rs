//! Submission controller
//!
//! Owns the loading flag and the outcome of the most recent attempt. A
//! submission is split into `begin` (flag up, previous result cleared,
//! payload built) and `complete` (outcome stored, flag down) so the network
//! step can run off the UI thread.

use crate::api::{ApiError, SubmissionResponse, SubmissionTransport};
use crate::fields::FormFields;
use crate::files::FileSelections;
use crate::payload::MultipartPayload;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while submitting the cause";

/// Error shown after a failed submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// Error payload sent by the server, shown verbatim
    Server(serde_json::Value),
    /// Transport failure or a failure without a usable body
    Generic,
}

impl SubmissionError {
    pub fn from_api_error(error: &ApiError) -> Self {
        match error.server_body() {
            Some(body) => SubmissionError::Server(body.clone()),
            None => SubmissionError::Generic,
        }
    }

    /// Text displayed to the user
    pub fn display_text(&self) -> String {
        match self {
            SubmissionError::Generic => GENERIC_ERROR_MESSAGE.to_string(),
            SubmissionError::Server(serde_json::Value::String(text)) => text.clone(),
            SubmissionError::Server(value) => value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
        }
    }
}

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionResult {
    #[default]
    Absent,
    Success(SubmissionResponse),
    Error(SubmissionError),
}

impl SubmissionResult {
    pub fn success(&self) -> Option<&SubmissionResponse> {
        match self {
            SubmissionResult::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            SubmissionResult::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SubmissionResult::Absent)
    }
}

/// Drives a submission from start to resolution
#[derive(Debug, Default)]
pub struct SubmissionController {
    loading: bool,
    result: SubmissionResult,
    attempts: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> &SubmissionResult {
        &self.result
    }

    /// Number of submissions started so far
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Start a submission: raise the loading flag, clear the previous
    /// outcome and build the payload to send.
    pub fn begin(&mut self, fields: &FormFields, files: &FileSelections) -> MultipartPayload {
        self.loading = true;
        self.result = SubmissionResult::Absent;
        self.attempts += 1;

        let payload = MultipartPayload::from_form(fields, files);
        log::info!(
            "Submitting cause (attempt {}, {} fields, {} files)",
            self.attempts,
            payload.len() - payload.file_count(),
            payload.file_count()
        );
        payload
    }

    /// Store the outcome of the network step and lower the loading flag.
    /// An older attempt resolving late still overwrites the current result.
    pub fn complete(&mut self, outcome: Result<SubmissionResponse, ApiError>) {
        self.result = match outcome {
            Ok(response) => {
                log::info!("Submission successful: id={} title={:?}", response.id, response.title);
                SubmissionResult::Success(response)
            }
            Err(error) => {
                log::error!("Submission error: {}", error);
                SubmissionResult::Error(SubmissionError::from_api_error(&error))
            }
        };
        self.loading = false;
    }

    /// Run a whole submission on the calling thread
    pub fn submit(
        &mut self,
        fields: &FormFields,
        files: &FileSelections,
        transport: &dyn SubmissionTransport,
    ) -> &SubmissionResult {
        let payload = self.begin(fields, files);
        let outcome = transport.submit_cause(&payload);
        self.complete(outcome);
        &self.result
    }
}
