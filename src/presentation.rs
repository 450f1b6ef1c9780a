//! Presentation model
//!
//! A pure function of the form state describing what the form shows. The
//! GUI renders this; nothing here mutates state.

use crate::fields::{FieldKind, FormField};
use crate::files::FileCategory;
use crate::form::CauseForm;
use crate::submission::SubmissionResult;

pub const FORM_HEADING: &str = "Submit Personal Cause";
pub const SUBMITTER_HEADING: &str = "Submitter Information";
pub const FILES_HEADING: &str = "Media & Documents";
pub const SUBMIT_LABEL: &str = "Submit Cause";
pub const SUBMITTING_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub field: FormField,
    /// Label with a trailing ` *` for required fields
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileRow {
    pub name: String,
    /// Whether the file matches the category's accept hint
    pub suggested: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileInputRow {
    pub category: FileCategory,
    pub label: &'static str,
    pub accept: String,
    pub files: Vec<FileRow>,
    /// `Selected: N image(s)`, only when something is selected
    pub selected_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Success {
        heading: &'static str,
        message: String,
        detail: String,
    },
    Failure {
        heading: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub heading: &'static str,
    pub cause_fields: Vec<FieldRow>,
    pub submitter_fields: Vec<FieldRow>,
    pub file_inputs: Vec<FileInputRow>,
    pub submit: SubmitButton,
    pub feedback: Option<Feedback>,
}

impl FormView {
    pub fn from_form(form: &CauseForm) -> Self {
        let (submitter_fields, cause_fields): (Vec<_>, Vec<_>) = FormField::ALL
            .iter()
            .map(|field| field_row(form, *field))
            .partition(|row| row.field.is_submitter_info());

        Self {
            heading: FORM_HEADING,
            cause_fields,
            submitter_fields,
            file_inputs: FileCategory::ALL
                .iter()
                .map(|category| file_input_row(form, *category))
                .collect(),
            submit: submit_button(form.is_loading()),
            feedback: feedback(form.result()),
        }
    }
}

fn field_row(form: &CauseForm, field: FormField) -> FieldRow {
    let required = field.is_required();
    FieldRow {
        field,
        label: if required {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        },
        kind: field.kind(),
        value: form.fields().get(field).to_string(),
        required,
        error: form.violation_for(field).map(|v| v.message.clone()),
    }
}

fn file_input_row(form: &CauseForm, category: FileCategory) -> FileInputRow {
    let accept = category.accept();
    let files = form
        .files()
        .files(category)
        .iter()
        .map(|file| FileRow {
            name: file.file_name(),
            suggested: accept.matches(file),
        })
        .collect();

    FileInputRow {
        category,
        label: category.label(),
        accept: accept.as_str().to_string(),
        files,
        selected_hint: selected_hint(category, form.files().count(category)),
    }
}

pub fn selected_hint(category: FileCategory, count: usize) -> Option<String> {
    (count > 0).then(|| format!("Selected: {} {}(s)", count, category.noun()))
}

pub fn submit_button(loading: bool) -> SubmitButton {
    SubmitButton {
        label: if loading { SUBMITTING_LABEL } else { SUBMIT_LABEL },
        disabled: loading,
    }
}

pub fn feedback(result: &SubmissionResult) -> Option<Feedback> {
    match result {
        SubmissionResult::Absent => None,
        SubmissionResult::Success(response) => Some(Feedback::Success {
            heading: "Submission Successful!",
            message: format!(
                "Your cause \"{}\" has been submitted for review.",
                response.title
            ),
            detail: format!("Submission ID: {}", response.id),
        }),
        SubmissionResult::Error(error) => Some(Feedback::Failure {
            heading: "Submission Failed",
            message: error.display_text(),
        }),
    }
}
