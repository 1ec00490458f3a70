#![forbid(unsafe_code)]

//! Two-state style variants.
//!
//! Most interactive pieces of the site only distinguish "the selected one"
//! from the rest: the active billing option, the dot of the settled slide,
//! the open FAQ item. [`StateStyle`] pairs a base descriptor with one
//! overlay per state and resolves them into a [`ClassList`].

use crate::class_list::{ClassList, StyleDescriptor};

/// Whether an element is the selected one in its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activity {
    /// Selected, open or current.
    Active,
    /// Everything else.
    #[default]
    Inactive,
}

impl Activity {
    /// `Active` when `active` is true.
    #[must_use]
    pub const fn from_bool(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }

    /// Whether this is [`Activity::Active`].
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<bool> for Activity {
    fn from(active: bool) -> Self {
        Self::from_bool(active)
    }
}

/// Base classes plus per-state overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateStyle {
    /// Applied in both states.
    pub base: StyleDescriptor,
    /// Appended when active.
    pub active: StyleDescriptor,
    /// Appended when inactive.
    pub inactive: StyleDescriptor,
}

impl StateStyle {
    /// Create a state style.
    #[must_use]
    pub const fn new(base: &'static str, active: &'static str, inactive: &'static str) -> Self {
        Self {
            base: StyleDescriptor::new(base),
            active: StyleDescriptor::new(active),
            inactive: StyleDescriptor::new(inactive),
        }
    }

    /// The overlay for `state`.
    #[must_use]
    pub const fn overlay(&self, state: Activity) -> StyleDescriptor {
        match state {
            Activity::Active => self.active,
            Activity::Inactive => self.inactive,
        }
    }

    /// Base followed by the overlay for `state`.
    #[must_use]
    pub fn resolve(&self, state: Activity) -> ClassList {
        ClassList::from(self.base).with_style(self.overlay(state))
    }
}
