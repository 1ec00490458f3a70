#![forbid(unsafe_code)]

//! Style descriptors and class list composition.

use std::fmt;

/// A fixed set of utility classes for one variant of one element.
///
/// Descriptors come out of the lookup tables in this crate; they are never
/// assembled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleDescriptor(&'static str);

impl StyleDescriptor {
    /// No classes.
    pub const EMPTY: Self = Self("");

    /// Wrap a space-separated class string.
    #[must_use]
    pub const fn new(classes: &'static str) -> Self {
        Self(classes)
    }

    /// The raw class string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Individual class tokens.
    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        self.0.split_whitespace()
    }

    /// Whether the descriptor carries no classes.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim())
    }
}

impl From<&'static str> for StyleDescriptor {
    fn from(classes: &'static str) -> Self {
        Self::new(classes)
    }
}

/// Ordered class composition.
///
/// Parts are normalized to single-space separated tokens. Empty parts are
/// skipped so optional classes never leave stray whitespace behind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every token of `part`.
    pub fn push(&mut self, part: impl AsRef<str>) {
        self.tokens
            .extend(part.as_ref().split_whitespace().map(str::to_string));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, part: impl AsRef<str>) -> Self {
        self.push(part);
        self
    }

    /// Append a descriptor.
    #[must_use]
    pub fn with_style(self, style: StyleDescriptor) -> Self {
        self.with(style.as_str())
    }

    /// Append `part` only when `condition` holds.
    #[must_use]
    pub fn with_if(self, condition: bool, part: impl AsRef<str>) -> Self {
        if condition { self.with(part) } else { self }
    }

    /// Whether `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Tokens in insertion order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<StyleDescriptor> for ClassList {
    fn from(style: StyleDescriptor) -> Self {
        Self::new().with_style(style)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for part in iter {
            list.push(part);
        }
        list
    }
}

impl<S: AsRef<str>> Extend<S> for ClassList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for part in iter {
            self.push(part);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skips_empty_parts() {
        let list: ClassList = ["rounded-full", "", "  ", "shadow-md"].into_iter().collect();
        assert_eq!(list.to_string(), "rounded-full shadow-md");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn normalizes_whitespace() {
        let list = ClassList::new().with("  px-8 py-2   md:px-16 ").with("rounded-md");
        assert_eq!(list.to_string(), "px-8 py-2 md:px-16 rounded-md");
    }

    #[test]
    fn conditional_parts() {
        let list = ClassList::new()
            .with("card")
            .with_if(false, "active")
            .with_if(true, "opacity-90");
        assert!(list.contains("opacity-90"));
        assert!(!list.contains("active"));
    }

    #[test]
    fn descriptor_tokens() {
        let style = StyleDescriptor::new("text-sm  font-medium");
        assert_eq!(style.tokens().collect::<Vec<_>>(), ["text-sm", "font-medium"]);
        assert!(StyleDescriptor::EMPTY.is_empty());
        assert_eq!(ClassList::from(style).to_string(), "text-sm font-medium");
    }
}
