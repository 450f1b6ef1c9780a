//! Cause submission form
//!
//! Ties the field values, file selections and submission controller
//! together. Submitting goes through the validation gate first; a blocked
//! submission never reaches the controller.

use crate::api::{ApiError, SubmissionResponse, SubmissionTransport};
use crate::fields::{FieldError, FormField, FormFields};
use crate::files::{FileCategory, FileHandle, FileSelections};
use crate::payload::MultipartPayload;
use crate::submission::{SubmissionController, SubmissionResult};
use crate::validation::{validate_form, FieldViolation};

/// Why a submission did not start
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// One or more fields fail their input constraints
    Invalid(Vec<FieldViolation>),
    /// The submit control is disabled while a request is in flight
    InFlight,
}

#[derive(Debug, Default)]
pub struct CauseForm {
    fields: FormFields,
    files: FileSelections,
    controller: SubmissionController,
    violations: Vec<FieldViolation>,
}

impl CauseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn files(&self) -> &FileSelections {
        &self.files
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    pub fn result(&self) -> &SubmissionResult {
        self.controller.result()
    }

    /// Violations found by the last blocked submit
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn violation_for(&self, field: FormField) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set_field(field, value);
        self.violations.retain(|v| v.field != field);
    }

    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let field = FormField::from_name(name)?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn set_files(&mut self, category: FileCategory, files: Vec<FileHandle>) {
        self.files.set_files(category, files);
    }

    /// Run the validation gate and, if it passes, start a submission.
    /// Returns the payload to hand to a transport.
    pub fn begin_submit(&mut self) -> Result<MultipartPayload, SubmitBlocked> {
        if self.controller.is_loading() {
            return Err(SubmitBlocked::InFlight);
        }

        let violations = validate_form(&self.fields);
        if !violations.is_empty() {
            log::debug!("Submission blocked by {} invalid field(s)", violations.len());
            self.violations = violations.clone();
            return Err(SubmitBlocked::Invalid(violations));
        }

        self.violations.clear();
        Ok(self.controller.begin(&self.fields, &self.files))
    }

    pub fn complete_submit(&mut self, outcome: Result<SubmissionResponse, ApiError>) {
        self.controller.complete(outcome);
    }

    /// Validate and submit synchronously through `transport`
    pub fn submit(
        &mut self,
        transport: &dyn SubmissionTransport,
    ) -> Result<&SubmissionResult, SubmitBlocked> {
        let payload = self.begin_submit()?;
        let outcome = transport.submit_cause(&payload);
        self.complete_submit(outcome);
        Ok(self.controller.result())
    }
}
