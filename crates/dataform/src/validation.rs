// File: src/validation.rs
// Purpose: Apply descriptor validation rules to field state

use dataform_validation::{Rule, RuleOutcome};
use std::collections::BTreeMap;

use crate::field::FieldDescriptor;

/// Flattened `name -> value` mapping handed to the submit handler
pub type FormValues = BTreeMap<String, String>;

/// Validate one field in place
///
/// Sets or clears `error` according to the field's rule and returns whether
/// the field passed. Fields without a rule, with an unknown rule, or of an
/// unsupported type always pass and keep their current error.
pub fn validate_field(field: &mut FieldDescriptor) -> bool {
    if !field.field_type.is_supported() {
        return true;
    }

    let Some(rule) = field.validation.as_deref() else {
        return true;
    };

    match Rule::parse(rule).check(&field.value, &field.display_name) {
        RuleOutcome::Pass => {
            field.error = None;
            true
        }
        RuleOutcome::Fail(message) => {
            field.error = Some(message);
            false
        }
        RuleOutcome::Skipped => true,
    }
}

/// Validate every field and return how many failed
///
/// All fields are visited so every failing field carries its message.
pub fn validate_fields(fields: &mut [FieldDescriptor]) -> usize {
    fields
        .iter_mut()
        .map(validate_field)
        .filter(|passed| !passed)
        .count()
}

/// Reduce fields into the submitted mapping, skipping unnamed fields
///
/// Later fields overwrite earlier ones with the same name.
pub fn collect_values(fields: &[FieldDescriptor]) -> FormValues {
    fields
        .iter()
        .filter(|field| field.is_named())
        .map(|field| (field.name.clone(), field.value.clone()))
        .collect()
}
