//! Multipart payload construction
//!
//! Builds the ordered list of parts sent to the submission endpoint. The
//! payload is transport-independent; `api` turns it into a request body.

use crate::fields::FormFields;
use crate::files::{FileHandle, FileSelections};

/// One named part of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadPart {
    Text { name: String, value: String },
    File { name: String, file: FileHandle },
}

impl PayloadPart {
    pub fn name(&self) -> &str {
        match self {
            PayloadPart::Text { name, .. } | PayloadPart::File { name, .. } => name,
        }
    }
}

/// Ordered multipart parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<PayloadPart>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-empty fields in field order, then images, videos and documents
    /// in selection order, each file under its category's part name.
    pub fn from_form(fields: &FormFields, files: &FileSelections) -> Self {
        let mut payload = Self::new();
        for (field, value) in fields.non_empty() {
            payload.append_text(field.name(), value);
        }
        for (category, file) in files.iter() {
            payload.append_file(category.field_name(), file.clone());
        }
        payload
    }

    pub fn append_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(PayloadPart::Text {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn append_file(&mut self, name: impl Into<String>, file: FileHandle) {
        self.parts.push(PayloadPart::File {
            name: name.into(),
            file,
        });
    }

    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Text parts as (name, value) pairs
    pub fn text_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts.iter().filter_map(|part| match part {
            PayloadPart::Text { name, value } => Some((name.as_str(), value.as_str())),
            PayloadPart::File { .. } => None,
        })
    }

    /// Files sent under the given part name
    pub fn files_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FileHandle> + 'a {
        self.parts.iter().filter_map(move |part| match part {
            PayloadPart::File { name: part_name, file } if part_name == name => Some(file),
            _ => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, PayloadPart::File { .. }))
            .count()
    }
}
