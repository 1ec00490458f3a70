#![forbid(unsafe_code)]

//! FAQ accordion item styles.

use crate::class_list::ClassList;
use crate::state::{Activity, StateStyle};

/// Open or closed accordion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaqItemState {
    /// Answer visible.
    Open,
    /// Answer collapsed.
    #[default]
    Closed,
}

const ITEM: StateStyle = StateStyle::new(
    "shadow-sm overflow-hidden transition-all duration-300 border border-gray-700 rounded-2xl",
    "bg-[#ffd27a] text-[#061C3D]",
    "text-white",
);

const PANEL: StateStyle = StateStyle::new(
    "px-6 overflow-hidden transition-all duration-300",
    "max-h-96 pb-4",
    "max-h-0",
);

const ANSWER: StateStyle = StateStyle::new("pb-4", "text-[#061C3D]", "");

impl FaqItemState {
    /// `Open` when `open` is true.
    #[must_use]
    pub const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    const fn activity(self) -> Activity {
        match self {
            Self::Open => Activity::Active,
            Self::Closed => Activity::Inactive,
        }
    }

    /// Whether the answer is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Item container.
    #[must_use]
    pub fn item_classes(self) -> ClassList {
        ITEM.resolve(self.activity())
    }

    /// Collapsible answer panel.
    #[must_use]
    pub fn panel_classes(self) -> ClassList {
        PANEL.resolve(self.activity())
    }

    /// Answer text.
    #[must_use]
    pub fn answer_classes(self) -> ClassList {
        ANSWER.resolve(self.activity())
    }

    /// Toggle icon path.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Open => "/assets/icons/faqs/minus.png",
            Self::Closed => "/assets/icons/faqs/plus.png",
        }
    }

    /// `aria-expanded` value.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// `aria-hidden` value for the panel.
    #[must_use]
    pub const fn aria_hidden(self) -> &'static str {
        if self.is_open() { "false" } else { "true" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_item_is_highlighted() {
        let open = FaqItemState::from_open(true);
        assert!(open.item_classes().contains("bg-[#ffd27a]"));
        assert!(open.panel_classes().contains("max-h-96"));
        assert_eq!(open.answer_classes().to_string(), "pb-4 text-[#061C3D]");
        assert_eq!(open.icon(), "/assets/icons/faqs/minus.png");
        assert_eq!(open.aria_expanded(), "true");
    }

    #[test]
    fn closed_item_collapses() {
        let closed = FaqItemState::default();
        assert!(closed.panel_classes().contains("max-h-0"));
        assert_eq!(closed.answer_classes().to_string(), "pb-4");
        assert_eq!(closed.aria_hidden(), "true");
    }
}
