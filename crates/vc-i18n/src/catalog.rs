#![forbid(unsafe_code)]

//! Key-based string catalog with locale fallback and interpolation.
//!
//! # Invariants
//!
//! 1. Keys are flat dotted paths (`"plans.period.monthly"`).
//! 2. Lookup tries the requested locale, then each locale of the fallback
//!    chain in order. A locale never falls back to itself twice.
//! 3. Interpolation is a single pass: substituted values are never
//!    re-scanned for placeholders.
//! 4. A placeholder without a matching argument is left intact.

use std::collections::{BTreeMap, BTreeSet};

/// Strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    entries: BTreeMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty string table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Translation coverage for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    /// Locale code.
    pub locale: String,
    /// Keys present in this locale.
    pub present: usize,
    /// Keys defined by some other locale but missing here.
    pub missing: Vec<String>,
    /// `present / total_keys * 100`, or 100 for an empty catalog.
    pub coverage_percent: f64,
}

/// Coverage across every registered locale.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Size of the union of keys over all locales.
    pub total_keys: usize,
    /// Per-locale coverage, in registration order.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Whether every locale defines every key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|lc| lc.missing.is_empty())
    }
}

/// Catalog of strings for all locales.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: Vec<(String, LocaleStrings)>,
    fallback_chain: Vec<String>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the strings for a locale.
    pub fn add_locale(&mut self, locale: &str, strings: LocaleStrings) {
        if let Some(slot) = self.locales.iter_mut().find(|(code, _)| code == locale) {
            slot.1 = strings;
        } else {
            self.locales.push((locale.to_string(), strings));
        }
    }

    /// Set the locales tried, in order, when a key is missing.
    pub fn set_fallback_chain<I, S>(&mut self, chain: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_chain = chain.into_iter().map(Into::into).collect();
    }

    /// Registered locale codes, in registration order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|(code, _)| code.as_str())
    }

    /// Strings registered for exactly `locale`, without fallback.
    #[must_use]
    pub fn strings(&self, locale: &str) -> Option<&LocaleStrings> {
        self.locales
            .iter()
            .find(|(code, _)| code == locale)
            .map(|(_, strings)| strings)
    }

    /// Look up a key, following the fallback chain.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(value) = self.strings(locale).and_then(|s| s.get(key)) {
            return Some(value);
        }
        self.fallback_chain
            .iter()
            .filter(|code| code.as_str() != locale)
            .find_map(|code| self.strings(code).and_then(|s| s.get(key)))
    }

    /// Look up a key and substitute `{name}` placeholders.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key)
            .map(|template| interpolate(template, args))
    }

    /// Number of consecutive items stored under `prefix.0`, `prefix.1`, ...
    ///
    /// An item exists when either `prefix.N` or any `prefix.N.*` key exists.
    #[must_use]
    pub fn item_count(&self, locale: &str, prefix: &str) -> usize {
        let has_item = |strings: &LocaleStrings, index: usize| {
            let exact = format!("{prefix}.{index}");
            let nested = format!("{exact}.");
            strings
                .keys()
                .any(|key| key == exact || key.starts_with(&nested))
        };
        let count_in = |strings: &LocaleStrings| (0..).take_while(|&i| has_item(strings, i)).count();

        let own = self.strings(locale).map_or(0, count_in);
        if own > 0 {
            return own;
        }
        self.fallback_chain
            .iter()
            .filter(|code| code.as_str() != locale)
            .filter_map(|code| self.strings(code))
            .map(count_in)
            .find(|&count| count > 0)
            .unwrap_or(0)
    }

    /// Per-locale coverage against the union of all keys.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all_keys: BTreeSet<&str> = self
            .locales
            .iter()
            .flat_map(|(_, strings)| strings.keys())
            .collect();
        let total_keys = all_keys.len();

        let locales = self
            .locales
            .iter()
            .map(|(code, strings)| {
                let missing: Vec<String> = all_keys
                    .iter()
                    .filter(|key| !strings.contains(key))
                    .map(|key| (*key).to_string())
                    .collect();
                let present = total_keys - missing.len();
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    present as f64 / total_keys as f64 * 100.0
                };
                LocaleCoverage {
                    locale: code.clone(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys,
            locales,
        }
    }
}

/// Substitute `{name}` placeholders in one pass.
///
/// Unknown placeholders and unbalanced braces are copied through verbatim.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new();
        let mut en = LocaleStrings::new();
        en.insert("plans.title", "Plans");
        en.insert("plans.percent", "Save {percent}%");
        en.insert("faqs.items.0.question", "Q0");
        en.insert("faqs.items.0.answer", "A0");
        en.insert("faqs.items.1.question", "Q1");
        let mut ar = LocaleStrings::new();
        ar.insert("plans.title", "الخطط");
        catalog.add_locale("en", en);
        catalog.add_locale("ar", ar);
        catalog.set_fallback_chain(["en"]);
        catalog
    }

    #[test]
    fn lookup_prefers_requested_locale() {
        let catalog = catalog();
        assert_eq!(catalog.get("ar", "plans.title"), Some("الخطط"));
        assert_eq!(catalog.get("en", "plans.title"), Some("Plans"));
    }

    #[test]
    fn lookup_falls_back() {
        let catalog = catalog();
        assert_eq!(catalog.get("ar", "plans.percent"), Some("Save {percent}%"));
        assert_eq!(catalog.get("ar", "nope"), None);
    }

    #[test]
    fn format_substitutes_named_placeholder() {
        let catalog = catalog();
        assert_eq!(
            catalog.format("en", "plans.percent", &[("percent", "17")]),
            Some("Save 17%".to_string())
        );
    }

    #[test]
    fn interpolate_keeps_unknown_and_unbalanced() {
        assert_eq!(interpolate("a {x} b", &[]), "a {x} b");
        assert_eq!(interpolate("a {x", &[("x", "1")]), "a {x");
        assert_eq!(interpolate("{x}{y}", &[("x", "1"), ("y", "2")]), "12");
        assert_eq!(interpolate("{{x}}", &[("x", "1")]), "{1}");
    }

    #[test]
    fn item_count_counts_consecutive_items() {
        let catalog = catalog();
        assert_eq!(catalog.item_count("en", "faqs.items"), 2);
        assert_eq!(catalog.item_count("ar", "faqs.items"), 2);
        assert_eq!(catalog.item_count("en", "reviews.items"), 0);
    }

    #[test]
    fn add_locale_replaces() {
        let mut catalog = catalog();
        catalog.add_locale("ar", LocaleStrings::new());
        assert_eq!(catalog.locales().count(), 2);
        assert!(catalog.strings("ar").is_some_and(LocaleStrings::is_empty));
    }

    #[test]
    fn coverage_lists_missing_keys() {
        let report = catalog().coverage_report();
        assert_eq!(report.total_keys, 5);
        let ar = &report.locales[1];
        assert_eq!(ar.present, 1);
        assert_eq!(ar.missing.len(), 4);
        assert!(!report.is_complete());
    }

    #[test]
    fn empty_catalog_is_fully_covered() {
        let report = StringCatalog::new().coverage_report();
        assert_eq!(report.total_keys, 0);
        assert!(report.is_complete());
    }
}
