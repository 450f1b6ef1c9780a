//! API client for the cause submission endpoint
//!
//! Sends a `MultipartPayload` as `multipart/form-data` and parses the
//! created submission from the response.

use crate::files::FileHandle;
use crate::payload::{MultipartPayload, PayloadPart};
use reqwest::blocking::multipart::{Form, Part};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const SUBMIT_PATH: &str = "/api/personal-cause-submissions/submit";

/// Anything able to deliver a payload to the submission endpoint
pub trait SubmissionTransport: Send + Sync {
    fn submit_cause(&self, payload: &MultipartPayload) -> Result<SubmissionResponse, ApiError>;
}

/// HTTP client for the submission endpoint
#[derive(Clone)]
pub struct SubmissionClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl SubmissionClient {
    /// Create a new client against the default local backend
    pub fn new() -> Self {
        Self::with_url(DEFAULT_BASE_URL)
    }

    /// Create a client for a custom backend base URL
    pub fn with_url(base_url: &str) -> Self {
        Self::with_endpoint(join_url(base_url, SUBMIT_PATH))
    }

    /// Create a client posting to an exact endpoint URL
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(endpoint, reqwest::blocking::Client::new())
    }

    /// Use a preconfigured HTTP client (proxy, TLS roots, ...)
    pub fn with_http_client(endpoint: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(payload: &MultipartPayload) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for part in payload.parts() {
            form = match part {
                PayloadPart::Text { name, value } => form.text(name.clone(), value.clone()),
                PayloadPart::File { name, file } => form.part(name.clone(), file_part(file)?),
            };
        }
        Ok(form)
    }
}

impl Default for SubmissionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionTransport for SubmissionClient {
    fn submit_cause(&self, payload: &MultipartPayload) -> Result<SubmissionResponse, ApiError> {
        let form = Self::build_form(payload)?;
        log::debug!(
            "POST {} ({} parts, {} files)",
            self.endpoint,
            payload.len(),
            payload.file_count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body: parse_error_body(&body),
            });
        }

        response.json().map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn file_part(file: &FileHandle) -> Result<Part, ApiError> {
    // Part::file fills in the file name and guesses the MIME type from the extension
    Part::file(file.path()).map_err(|source| ApiError::File {
        path: file.path().to_path_buf(),
        source,
    })
}

/// Join a base URL and a path with exactly one slash between them
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Structured error body, or `None` when the server sent nothing usable
pub fn parse_error_body(body: &str) -> Option<serde_json::Value> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) => None,
        Ok(serde_json::Value::String(s)) if s.is_empty() => None,
        Ok(value) => Some(value),
        Err(_) => Some(serde_json::Value::String(body.to_string())),
    }
}

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("server responded with status {status}")]
    Server {
        status: u16,
        body: Option<serde_json::Value>,
    },
    #[error("cannot attach {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Error payload the server sent along with a failure status
    pub fn server_body(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Server { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

// Response types

/// Identifier assigned by the server; numeric or textual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionId::Number(n) => write!(f, "{}", n),
            SubmissionId::Text(s) => f.write_str(s),
        }
    }
}

/// Created submission as returned by the endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: SubmissionId,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub target_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub proof_document_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub proof_document_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub proof_document_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submitter_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submitter_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submitter_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submitter_message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
}

/// Accept strings as-is and render any other JSON value (date arrays,
/// enum objects) compactly; `null` becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Accept a JSON number or a numeric string (BigDecimal written as text);
/// anything else becomes `None` rather than failing the whole response.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
