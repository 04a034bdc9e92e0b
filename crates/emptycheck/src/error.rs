//! The violation reported by a failed check.
//!
//! A check stops at the first empty required field, so there is exactly one
//! error kind and it carries exactly one attribute: the field label.
//!
//! Programmer errors (a value kind with no classification rule, a dynamic
//! root that is not a record) are never reported through this type. They
//! panic instead.

use std::borrow::Cow;

// ============================================================================
// REQUIRED FIELD ERROR
// ============================================================================

/// A required field was found empty.
///
/// `field` is the name of the offending field. For a zero-length sequence,
/// or for an empty element inside a sequence, it is the name of the field
/// holding the sequence.
///
/// # Examples
///
/// ```rust
/// use emptycheck::RequiredFieldError;
///
/// let error = RequiredFieldError::new("email");
/// assert_eq!(error.field(), "email");
/// assert_eq!(error.to_string(), "required field email is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("required field {field} is empty")]
pub struct RequiredFieldError {
    field: String,
}

impl RequiredFieldError {
    /// Creates an error for the given field label.
    pub fn new(field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into().into_owned(),
        }
    }

    /// The label of the empty field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Consumes the error, returning the field label.
    #[must_use]
    pub fn into_field(self) -> String {
        self.field
    }
}

/// Result of a check: `Ok(())` when every required field is populated.
pub type Result<T = (), E = RequiredFieldError> = std::result::Result<T, E>;
