#![forbid(unsafe_code)]

//! Field validation failures.

use std::fmt;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Empty or whitespace-only.
    Required,
    /// Not an email address.
    InvalidEmail,
    /// Shorter than the given number of characters.
    MinLength(usize),
    /// Longer than the given number of characters.
    MaxLength(usize),
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::InvalidEmail => f.write_str("is not a valid email address"),
            Self::MinLength(n) => write!(f, "must be at least {n} characters"),
            Self::MaxLength(n) => write!(f, "must be at most {n} characters"),
        }
    }
}

/// A rejected field with the catalog key of its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as used in markup ids.
    pub field: &'static str,
    /// Failure.
    pub kind: ValidationErrorKind,
    /// Message key, e.g. `contact.form.nameError`.
    pub message_key: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}

impl std::error::Error for FieldError {}

/// The local submission handler could not accept the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    message: String,
}

impl SubmitError {
    /// Create a submission error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed: {}", self.message)
    }
}

impl std::error::Error for SubmitError {}
