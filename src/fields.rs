//! Form state holder
//!
//! Holds the raw text values of every cause submission field. Values stay
//! unvalidated strings until the form is submitted.

use thiserror::Error;

/// Input control used to edit a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Email,
    Tel,
    DateTimeLocal,
}

/// Every field of the cause submission form, in display and wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    ShortDescription,
    TargetAmount,
    Category,
    Location,
    EndDate,
    SubmitterName,
    SubmitterEmail,
    SubmitterPhone,
    SubmitterMessage,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::Title,
        FormField::Description,
        FormField::ShortDescription,
        FormField::TargetAmount,
        FormField::Category,
        FormField::Location,
        FormField::EndDate,
        FormField::SubmitterName,
        FormField::SubmitterEmail,
        FormField::SubmitterPhone,
        FormField::SubmitterMessage,
    ];

    /// Name used for the multipart part
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::ShortDescription => "shortDescription",
            FormField::TargetAmount => "targetAmount",
            FormField::Category => "category",
            FormField::Location => "location",
            FormField::EndDate => "endDate",
            FormField::SubmitterName => "submitterName",
            FormField::SubmitterEmail => "submitterEmail",
            FormField::SubmitterPhone => "submitterPhone",
            FormField::SubmitterMessage => "submitterMessage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::ShortDescription => "Short Description",
            FormField::TargetAmount => "Target Amount",
            FormField::Category => "Category",
            FormField::Location => "Location",
            FormField::EndDate => "End Date",
            FormField::SubmitterName => "Name",
            FormField::SubmitterEmail => "Email",
            FormField::SubmitterPhone => "Phone",
            FormField::SubmitterMessage => "Message",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Description
            | FormField::ShortDescription
            | FormField::SubmitterMessage => FieldKind::TextArea,
            FormField::TargetAmount => FieldKind::Number,
            FormField::EndDate => FieldKind::DateTimeLocal,
            FormField::SubmitterEmail => FieldKind::Email,
            FormField::SubmitterPhone => FieldKind::Tel,
            _ => FieldKind::Text,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::Title
                | FormField::Description
                | FormField::TargetAmount
                | FormField::SubmitterName
                | FormField::SubmitterEmail
        )
    }

    /// Whether the field belongs to the "Submitter Information" section
    pub fn is_submitter_info(&self) -> bool {
        matches!(
            self,
            FormField::SubmitterName
                | FormField::SubmitterEmail
                | FormField::SubmitterPhone
                | FormField::SubmitterMessage
        )
    }

    /// Look up a field by its wire name
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

/// Current values of all form fields. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: [String; 11],
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of one field, leaving the others untouched
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Replace a field addressed by its wire name
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        let field = FormField::from_name(name)?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn get(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    /// All fields with their values, in field order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL
            .iter()
            .map(move |field| (*field, self.values[field.index()].as_str()))
    }

    /// Fields whose value is not the empty string, in field order
    pub fn non_empty(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.iter().filter(|(_, value)| !value.is_empty())
    }
}
