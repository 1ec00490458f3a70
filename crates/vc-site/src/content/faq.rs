#![forbid(unsafe_code)]

//! FAQ accordion.

use vc_i18n::Translator;
use vc_style::FaqItemState;

/// Catalog array holding the questions, relative to `faqs`.
pub const FAQ_ITEMS_KEY: &str = "items";

/// At most one open item; toggling the open item closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    count: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    /// `count` closed items.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, open: None }
    }

    /// One item per entry of `faqs.items` in the translator's locale.
    #[must_use]
    pub fn from_catalog(t: &Translator<'_>) -> Self {
        Self::new(t.item_count(&format!("faqs.{FAQ_ITEMS_KEY}")))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub const fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Open `index`, or close it when already open. Out-of-range indices
    /// are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    #[must_use]
    pub fn state(&self, index: usize) -> FaqItemState {
        FaqItemState::from_open(self.open == Some(index))
    }

    /// `(question, answer)` keys relative to `faqs`.
    #[must_use]
    pub fn item_keys(index: usize) -> (String, String) {
        (
            format!("{FAQ_ITEMS_KEY}.{index}.question"),
            format!("{FAQ_ITEMS_KEY}.{index}.answer"),
        )
    }
}
