#![forbid(unsafe_code)]

//! Error type for parsing animation descriptors.

use std::fmt;

/// Failure to parse a trigger position, toggle action list or easing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    /// A trigger position such as `"top 60%"` could not be parsed.
    InvalidTrigger {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// A toggle action list such as `"play none none none"` was malformed.
    InvalidToggleActions(String),
    /// An easing name such as `"power2.out"` is not supported.
    InvalidEasing(String),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTrigger { input, reason } => {
                write!(f, "invalid trigger position {input:?}: {reason}")
            }
            Self::InvalidToggleActions(input) => write!(f, "invalid toggle actions {input:?}"),
            Self::InvalidEasing(input) => write!(f, "unsupported easing {input:?}"),
        }
    }
}

impl std::error::Error for MotionError {}
