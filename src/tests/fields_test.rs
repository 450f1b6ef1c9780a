//! Unit tests for the form state holder
//!
//! Tests cover:
//! - Initial state
//! - Field replacement semantics
//! - Wire names and metadata

use crate::fields::*;

// ============================================================================
// INITIAL STATE TESTS
// ============================================================================

#[test]
fn test_new_fields_are_all_empty() {
    let fields = FormFields::new();
    assert_eq!(fields.iter().count(), 11);
    assert!(fields.iter().all(|(_, value)| value.is_empty()));
    assert_eq!(fields.non_empty().count(), 0);
}

#[test]
fn test_iteration_follows_field_order() {
    let fields = FormFields::new();
    let names: Vec<&str> = fields.iter().map(|(field, _)| field.name()).collect();
    assert_eq!(
        names,
        vec![
            "title",
            "description",
            "shortDescription",
            "targetAmount",
            "category",
            "location",
            "endDate",
            "submitterName",
            "submitterEmail",
            "submitterPhone",
            "submitterMessage",
        ]
    );
}

// ============================================================================
// SET FIELD TESTS
// ============================================================================

#[test]
fn test_set_field_replaces_only_that_field() {
    let mut fields = FormFields::new();
    fields.set_field(FormField::Location, "Lisbon");
    fields.set_field(FormField::Category, "Health");

    assert_eq!(fields.get(FormField::Location), "Lisbon");
    assert_eq!(fields.get(FormField::Category), "Health");
    for (field, value) in fields.iter() {
        if field != FormField::Location && field != FormField::Category {
            assert_eq!(value, "", "{} should be untouched", field.name());
        }
    }
}

#[test]
fn test_last_value_wins_per_field() {
    let mut fields = FormFields::new();
    fields.set_field(FormField::Title, "H");
    fields.set_field(FormField::Title, "He");
    fields.set_field(FormField::Title, "Help");
    assert_eq!(fields.get(FormField::Title), "Help");
}

#[test]
fn test_edit_order_across_fields_does_not_matter() {
    let mut a = FormFields::new();
    a.set_field(FormField::Title, "first");
    a.set_field(FormField::SubmitterName, "Ana");
    a.set_field(FormField::Title, "Help Maria");

    let mut b = FormFields::new();
    b.set_field(FormField::SubmitterName, "Ana");
    b.set_field(FormField::Title, "Help Maria");

    assert_eq!(a, b);
}

#[test]
fn test_empty_string_is_a_legal_value() {
    let mut fields = FormFields::new();
    fields.set_field(FormField::Title, "something");
    fields.set_field(FormField::Title, "");
    assert_eq!(fields.get(FormField::Title), "");
    assert_eq!(fields.non_empty().count(), 0);
}

#[test]
fn test_set_field_by_name() {
    let mut fields = FormFields::new();
    fields.set_field_by_name("targetAmount", "250").unwrap();
    assert_eq!(fields.get(FormField::TargetAmount), "250");
}

#[test]
fn test_set_field_by_unknown_name_is_rejected() {
    let mut fields = FormFields::new();
    let err = fields.set_field_by_name("nickname", "x").unwrap_err();
    assert_eq!(err, FieldError::UnknownField("nickname".to_string()));
    assert_eq!(fields, FormFields::new());
}

// ============================================================================
// METADATA TESTS
// ============================================================================

#[test]
fn test_from_name_round_trips_every_field() {
    for field in FormField::ALL {
        assert_eq!(FormField::from_name(field.name()).unwrap(), field);
    }
}

#[test]
fn test_required_fields() {
    let required: Vec<FormField> = FormField::ALL
        .iter()
        .copied()
        .filter(FormField::is_required)
        .collect();
    assert_eq!(
        required,
        vec![
            FormField::Title,
            FormField::Description,
            FormField::TargetAmount,
            FormField::SubmitterName,
            FormField::SubmitterEmail,
        ]
    );
}

#[test]
fn test_field_kinds() {
    assert_eq!(FormField::TargetAmount.kind(), FieldKind::Number);
    assert_eq!(FormField::SubmitterEmail.kind(), FieldKind::Email);
    assert_eq!(FormField::SubmitterPhone.kind(), FieldKind::Tel);
    assert_eq!(FormField::EndDate.kind(), FieldKind::DateTimeLocal);
    assert_eq!(FormField::Description.kind(), FieldKind::TextArea);
    assert_eq!(FormField::Title.kind(), FieldKind::Text);
}
