//! Request validation error types.

use serde::Serialize;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{}: {}", field, message)]
pub struct FieldError {
    /// Name of the offending request field
    pub field: &'static str,
    /// What was wrong with it
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validation error carrying the full list of field failures.
///
/// Validation never stops at the first bad field; callers receive every
/// failure in one response so a client can fix its request in one pass.
///
/// # Examples
///
/// ```
/// use vasari_error::{FieldError, ValidationError};
///
/// let err = ValidationError::new(vec![FieldError::new("topic", "is required")]);
/// assert_eq!(format!("{}", err), "Validation failed");
/// assert_eq!(err.errors.len(), 1);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation failed")]
pub struct ValidationError {
    /// Every field that failed validation
    pub errors: Vec<FieldError>,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error from a list of field failures.
    #[track_caller]
    pub fn new(errors: Vec<FieldError>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            errors,
            line: location.line(),
            file: location.file(),
        }
    }
}
