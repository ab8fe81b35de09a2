// File: src/error.rs
// Purpose: Errors returned by form operations

use thiserror::Error;

/// Failures that are not user-correctable input errors
///
/// Validation failures are never reported through this type; they live on
/// the field descriptors as messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field {index} does not exist (form has {len} fields)")]
    UnknownField { index: usize, len: usize },
}

pub type FormResult<T> = Result<T, FormError>;
