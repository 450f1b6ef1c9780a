//! Personal cause submission form
//!
//! Form state, attachment selection, pre-submit validation and the
//! multipart submission to the cause review endpoint. The desktop front end
//! lives in the `cause-submission` binary (feature `gui`).

pub mod api;
pub mod fields;
pub mod files;
pub mod form;
pub mod payload;
pub mod presentation;
pub mod settings;
pub mod submission;
pub mod validation;

pub use api::{ApiError, SubmissionClient, SubmissionId, SubmissionResponse, SubmissionTransport};
pub use fields::{FieldKind, FormField, FormFields};
pub use files::{FileCategory, FileHandle, FileSelections};
pub use form::{CauseForm, SubmitBlocked};
pub use payload::{MultipartPayload, PayloadPart};
pub use presentation::FormView;
pub use settings::AppSettings;
pub use submission::{SubmissionController, SubmissionError, SubmissionResult};

#[cfg(test)]
mod tests;
