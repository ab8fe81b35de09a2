// File: src/controller.rs
// Purpose: Form controller - owns field state and runs the change/blur/submit cycle

use dataform_validation::is_empty;
use std::fmt;
use tracing::{debug, info};

use crate::config::FormConfiguration;
use crate::error::{FormError, FormResult};
use crate::field::{FieldDescriptor, FieldType};
use crate::validation::{collect_values, validate_field, validate_fields, FormValues};

/// Receives the flattened values of a successful submit
///
/// Implemented for any `FnMut(&FormValues) + Send` closure.
pub trait SubmitHandler: Send {
    fn submit(&mut self, values: &FormValues);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&FormValues) + Send,
{
    fn submit(&mut self, values: &FormValues) {
        (self)(values)
    }
}

/// Observable validation state of the whole form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No field carries an error message
    Clean,
    /// At least one field carries an error message
    Invalid,
}

/// User interaction forwarded by a widget or the embedding application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Mount,
    Change { field: usize, value: String },
    Blur { field: usize },
    Submit,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the handler was called with these values
    Submitted(FormValues),
    /// Submission was blocked by this many failing fields
    Rejected { errors: usize },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Schema-driven form controller
///
/// Owns the field descriptors copied out of a [`FormConfiguration`] and
/// mutates them in place as events arrive.
///
/// # Example
///
/// ```
/// use dataform::{DataForm, FieldDescriptor, FormConfiguration, FormEvent};
///
/// let config = FormConfiguration::new(vec![
///     FieldDescriptor::text("email", "Email").with_validation("notEmpty"),
/// ]);
/// let mut form = DataForm::new(config, |values: &dataform::FormValues| {
///     println!("submitted {:?}", values);
/// });
///
/// form.mount();
/// let outcome = form.submit();
/// assert!(!outcome.is_submitted());
/// assert_eq!(form.fields()[0].error.as_deref(), Some("Email can't be empty"));
///
/// form.dispatch(FormEvent::Change { field: 0, value: "a@b.c".into() }).unwrap();
/// assert!(form.submit().is_submitted());
/// ```
pub struct DataForm {
    pub(crate) config: FormConfiguration,
    pub(crate) fields: Vec<FieldDescriptor>,
    handler: Box<dyn SubmitHandler>,
    mounted: bool,
}

impl fmt::Debug for DataForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataForm")
            .field("class_name", &self.config.class_name)
            .field("fields", &self.fields)
            .field("processing", &self.config.processing)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl DataForm {
    /// Create a controller, taking ownership of the configured fields
    pub fn new(mut config: FormConfiguration, handler: impl SubmitHandler + 'static) -> Self {
        let fields = std::mem::take(&mut config.fields);
        Self {
            config,
            fields,
            handler: Box::new(handler),
            mounted: false,
        }
    }

    /// Select the first option of every select that has no value yet
    pub fn mount(&mut self) {
        for (index, field) in self.fields.iter_mut().enumerate() {
            if field.field_type != FieldType::SelectInput || !is_empty(&field.value) {
                continue;
            }
            let default = field.first_option_value().map(str::to_string);
            if let Some(value) = default {
                debug!(field = index, value = %value, "defaulted select value");
                field.value = value;
            }
        }
        self.mounted = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Overwrite one field's value; errors are left untouched
    pub fn change(&mut self, index: usize, value: impl Into<String>) -> FormResult<()> {
        let field = self.field_mut(index)?;
        field.value = value.into();
        debug!(field = index, name = %field.name, "field changed");
        Ok(())
    }

    /// Validate a single field, returning whether it passed
    pub fn blur(&mut self, index: usize) -> FormResult<bool> {
        let field = self.field_mut(index)?;
        let passed = validate_field(field);
        debug!(field = index, name = %field.name, passed, "field blurred");
        Ok(passed)
    }

    /// Validate every field and, if all pass, call the submit handler
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate_fields(&mut self.fields);
        if errors > 0 {
            debug!(errors, "submit rejected");
            return SubmitOutcome::Rejected { errors };
        }

        let values = collect_values(&self.fields);
        info!(fields = values.len(), "form submitted");
        self.handler.submit(&values);
        SubmitOutcome::Submitted(values)
    }

    /// Apply an event; only `Submit` yields an outcome
    pub fn dispatch(&mut self, event: FormEvent) -> FormResult<Option<SubmitOutcome>> {
        match event {
            FormEvent::Mount => {
                self.mount();
                Ok(None)
            }
            FormEvent::Change { field, value } => self.change(field, value).map(|_| None),
            FormEvent::Blur { field } => self.blur(field).map(|_| None),
            FormEvent::Submit => Ok(Some(self.submit())),
        }
    }

    pub fn state(&self) -> FormState {
        if self.fields.iter().any(FieldDescriptor::has_error) {
            FormState::Invalid
        } else {
            FormState::Clean
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> FormResult<&FieldDescriptor> {
        let len = self.fields.len();
        self.fields
            .get(index)
            .ok_or(FormError::UnknownField { index, len })
    }

    fn field_mut(&mut self, index: usize) -> FormResult<&mut FieldDescriptor> {
        let len = self.fields.len();
        self.fields
            .get_mut(index)
            .ok_or(FormError::UnknownField { index, len })
    }

    /// Current values of all named fields, without validating
    pub fn values(&self) -> FormValues {
        collect_values(&self.fields)
    }

    pub fn configuration(&self) -> &FormConfiguration {
        &self.config
    }

    pub fn is_processing(&self) -> bool {
        self.config.processing
    }

    pub fn set_processing(&mut self, processing: bool) {
        self.config.processing = processing;
    }

    pub fn request_error(&self) -> Option<&str> {
        self.config.request_error.as_deref()
    }

    pub fn set_request_error(&mut self, error: Option<String>) {
        self.config.request_error = error;
    }
}
