#![forbid(unsafe_code)]

//! Checkout form field and payment option styles.

use crate::class_list::{ClassList, StyleDescriptor};
use crate::state::{Activity, StateStyle};

/// Validation state of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldState {
    /// No error reported.
    #[default]
    Valid,
    /// An error is shown under the label.
    Invalid,
}

impl FieldState {
    /// `Invalid` when `has_error` is true.
    #[must_use]
    pub const fn from_error(has_error: bool) -> Self {
        if has_error { Self::Invalid } else { Self::Valid }
    }

    /// Border classes for this state.
    #[must_use]
    pub const fn border(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Valid => "border-[#E0E0E0] focus:border-[#4A90E2]",
            Self::Invalid => "border-red-500",
        })
    }

    /// Full input class list.
    #[must_use]
    pub fn input_classes(self) -> ClassList {
        ClassList::new()
            .with("w-full px-4 py-3 rounded-lg border-2")
            .with_style(self.border())
            .with("outline-none transition-colors")
    }
}

/// Field label.
pub const FIELD_LABEL: StyleDescriptor =
    StyleDescriptor::new("block text-sm font-medium text-[#1E1E1E]");

/// Inline error next to a label.
pub const FIELD_ERROR: StyleDescriptor = StyleDescriptor::new("text-xs text-red-600");

/// Selectable payment method card.
pub const PAYMENT_OPTION: StateStyle = StateStyle::new(
    "flex items-center p-2 rounded-lg cursor-pointer transition-colors gap-2 shadow-lg",
    "bg-green-50 border border-green-200",
    "bg-white hover:bg-gray-50 border border-transparent",
);

/// Classes for a payment option card.
#[must_use]
pub fn payment_option_classes(selected: bool) -> ClassList {
    PAYMENT_OPTION.resolve(Activity::from_bool(selected))
}
