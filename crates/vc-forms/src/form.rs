#![forbid(unsafe_code)]

//! Form state and local submission.
//!
//! There is no backend: a successful submission hands the values to a
//! [`SubmissionSink`], which by default logs them as JSON at `info`.
//! Failures of any kind are turned into an [`Acknowledgment`] and never
//! escape the form.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{FieldError, SubmitError};

/// A validated form model.
pub trait Form: Serialize + DeserializeOwned + Default + Clone {
    /// Short name used in logs.
    const NAME: &'static str;
    /// Message key shown after a successful submission.
    const SUCCESS_KEY: &'static str;
    /// Message key shown when the submission handler fails.
    const ERROR_KEY: &'static str;
    /// Field names in display order.
    const FIELDS: &'static [&'static str];

    /// All field errors, in display order.
    fn validate(&self) -> Vec<FieldError>;
}

/// Where accepted submissions go.
pub trait SubmissionSink {
    /// Accept `values` of form `form`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when the values cannot be recorded.
    fn accept<F: Form>(&mut self, values: &F) -> Result<(), SubmitError>;
}

/// Logs submissions at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept<F: Form>(&mut self, values: &F) -> Result<(), SubmitError> {
        let data = serde_json::to_string(values).map_err(|err| SubmitError::new(err.to_string()))?;
        tracing::info!(form = F::NAME, %data, "form submitted");
        Ok(())
    }
}

/// Collects submissions in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    submissions: Vec<serde_json::Value>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted submissions in order.
    #[must_use]
    pub fn submissions(&self) -> &[serde_json::Value] {
        &self.submissions
    }
}

impl SubmissionSink for MemorySink {
    fn accept<F: Form>(&mut self, values: &F) -> Result<(), SubmitError> {
        let value = serde_json::to_value(values).map_err(|err| SubmitError::new(err.to_string()))?;
        self.submissions.push(value);
        Ok(())
    }
}

/// Outcome of [`FormState::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    /// Values accepted; the form was reset.
    Success {
        /// Message key to show.
        message_key: &'static str,
    },
    /// Validation failed; values and errors are kept for display.
    Rejected {
        /// Field errors in display order.
        errors: Vec<FieldError>,
    },
    /// The sink refused the values; they are kept so the user can retry.
    Failed {
        /// Message key to show.
        message_key: &'static str,
    },
}

impl Acknowledgment {
    /// Whether the submission went through.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Message key for a banner, if the outcome has one.
    #[must_use]
    pub const fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::Success { message_key } | Self::Failed { message_key } => Some(*message_key),
            Self::Rejected { .. } => None,
        }
    }
}

/// Values, errors and submission flag of one form instance.
#[derive(Debug, Clone, Default)]
pub struct FormState<F: Form> {
    values: F,
    errors: Vec<FieldError>,
    is_submitting: bool,
    submissions: usize,
}

impl<F: Form> FormState<F> {
    /// Form with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::with_values(F::default())
    }

    /// Form prefilled with `values`.
    #[must_use]
    pub fn with_values(values: F) -> Self {
        Self {
            values,
            errors: Vec::new(),
            is_submitting: false,
            submissions: 0,
        }
    }

    /// Current values.
    #[must_use]
    pub fn values(&self) -> &F {
        &self.values
    }

    /// Edit values. Existing errors stay until the next submit.
    pub fn values_mut(&mut self) -> &mut F {
        &mut self.values
    }

    /// Errors from the last submit.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Error for `field` from the last submit.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Whether a submission is in progress.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Number of accepted submissions.
    #[must_use]
    pub const fn submissions(&self) -> usize {
        self.submissions
    }

    /// Validate, then log the values.
    pub fn submit(&mut self) -> Acknowledgment {
        self.submit_to(&mut LogSink)
    }

    /// Validate, then hand the values to `sink`.
    pub fn submit_to<S: SubmissionSink>(&mut self, sink: &mut S) -> Acknowledgment {
        self.errors = self.values.validate();
        if !self.errors.is_empty() {
            tracing::debug!(form = F::NAME, errors = self.errors.len(), "form rejected");
            return Acknowledgment::Rejected {
                errors: self.errors.clone(),
            };
        }

        self.is_submitting = true;
        let outcome = sink.accept(&self.values);
        self.is_submitting = false;

        match outcome {
            Ok(()) => {
                self.values = F::default();
                self.submissions += 1;
                Acknowledgment::Success {
                    message_key: F::SUCCESS_KEY,
                }
            }
            Err(err) => {
                tracing::error!(form = F::NAME, %err, "error submitting form");
                Acknowledgment::Failed {
                    message_key: F::ERROR_KEY,
                }
            }
        }
    }

    /// Clear values and errors.
    pub fn reset(&mut self) {
        self.values = F::default();
        self.errors.clear();
    }
}
