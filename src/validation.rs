//! Form validation utilities
//!
//! Constraint checks run before a submission is allowed, mirroring what a
//! browser enforces for `required`, `type="number"`, `type="email"` and
//! `type="datetime-local"` inputs.

use crate::fields::{FieldKind, FormField, FormFields};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

/// Validation result
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }
}

/// Validation rule trait
pub trait ValidationRule: Send + Sync {
    fn validate(&self, value: &str) -> ValidationResult;
}

/// Required field validator. Any non-empty value passes, whitespace included.
pub struct Required {
    message: String,
}

impl Required {
    pub fn new() -> Self {
        Self {
            message: "Please fill out this field".to_string(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }
}

/// Email validator. Empty values are left to `Required`.
///
/// Surrounding whitespace is ignored, as with a native email input.
pub struct Email;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
            r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
            r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        ))
        .expect("email pattern is valid")
    })
}

impl ValidationRule for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        let value = value.trim();
        if value.is_empty() || email_pattern().is_match(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid("Please enter an email address".to_string())
        }
    }
}

/// Numeric input validator: parse, lower/upper bound and step
pub struct NumericRange {
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn min(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

impl ValidationRule for NumericRange {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() {
            return ValidationResult::Valid;
        }

        let Ok(number) = value.trim().parse::<f64>() else {
            return ValidationResult::Invalid("Please enter a number".to_string());
        };
        if !number.is_finite() {
            return ValidationResult::Invalid("Please enter a number".to_string());
        }

        if let Some(min) = self.min {
            if number < min {
                return ValidationResult::Invalid(format!(
                    "Value must be greater than or equal to {}",
                    min
                ));
            }
        }
        if let Some(max) = self.max {
            if number > max {
                return ValidationResult::Invalid(format!(
                    "Value must be less than or equal to {}",
                    max
                ));
            }
        }
        if let Some(step) = self.step {
            let base = self.min.unwrap_or(0.0);
            let steps = (number - base) / step;
            if (steps - steps.round()).abs() > 1e-9 * steps.abs().max(1.0) {
                return ValidationResult::Invalid(format!(
                    "Please enter a valid value in steps of {}",
                    step
                ));
            }
        }
        ValidationResult::Valid
    }
}

/// Local date-time validator (`YYYY-MM-DDTHH:MM`, optional seconds)
pub struct DateTimeLocal;

impl DateTimeLocal {
    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    }
}

impl ValidationRule for DateTimeLocal {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() || Self::parse(value).is_some() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid("Please enter a valid date and time".to_string())
        }
    }
}

/// Validator chain - combines multiple validators
pub struct ValidatorChain {
    validators: Vec<Box<dyn ValidationRule>>,
}

impl ValidatorChain {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    pub fn add(mut self, validator: impl ValidationRule + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn validate(&self, value: &str) -> ValidationResult {
        for validator in &self.validators {
            let result = validator.validate(value);
            if !result.is_valid() {
                return result;
            }
        }
        ValidationResult::Valid
    }

    /// Constraints an input control of this field enforces
    pub fn for_field(field: FormField) -> Self {
        let mut chain = Self::new();
        if field.is_required() {
            chain = chain.add(Required::new());
        }
        match field.kind() {
            FieldKind::Number => chain.add(NumericRange::min(0.0).step(0.01)),
            FieldKind::Email => chain.add(Email),
            FieldKind::DateTimeLocal => chain.add(DateTimeLocal),
            FieldKind::Text | FieldKind::TextArea | FieldKind::Tel => chain,
        }
    }
}

impl Default for ValidatorChain {
    fn default() -> Self {
        Self::new()
    }
}

/// A field that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: FormField,
    pub message: String,
}

/// Check every field in order, collecting all violations
pub fn validate_form(fields: &FormFields) -> Vec<FieldViolation> {
    fields
        .iter()
        .filter_map(|(field, value)| {
            match ValidatorChain::for_field(field).validate(value) {
                ValidationResult::Valid => None,
                ValidationResult::Invalid(message) => Some(FieldViolation { field, message }),
            }
        })
        .collect()
}
