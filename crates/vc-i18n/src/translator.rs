#![forbid(unsafe_code)]

//! Locale-bound lookup handle used while rendering a page.

use crate::catalog::{StringCatalog, interpolate};
use crate::locale::{Direction, Locale};

/// Resolves keys for one locale, optionally under a namespace.
///
/// Missing keys resolve to an empty string and are logged at `warn`.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a StringCatalog,
    locale: Locale,
    namespace: Option<&'a str>,
}

impl<'a> Translator<'a> {
    /// Create a translator for `locale` at the catalog root.
    #[must_use]
    pub const fn new(catalog: &'a StringCatalog, locale: Locale) -> Self {
        Self {
            catalog,
            locale,
            namespace: None,
        }
    }

    /// A translator whose keys are relative to `namespace`.
    ///
    /// Scoping replaces any previous namespace.
    #[must_use]
    pub const fn scoped(self, namespace: &'a str) -> Self {
        Self {
            namespace: Some(namespace),
            ..self
        }
    }

    /// Active locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Text direction of the active locale.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Underlying catalog.
    #[must_use]
    pub const fn catalog(&self) -> &'a StringCatalog {
        self.catalog
    }

    fn full_key(&self, key: &str) -> String {
        match self.namespace {
            Some(namespace) => format!("{namespace}.{key}"),
            None => key.to_string(),
        }
    }

    /// Look up a key without the empty-string fallback.
    #[must_use]
    pub fn try_t(&self, key: &str) -> Option<&'a str> {
        self.catalog.get(self.locale.code(), &self.full_key(key))
    }

    /// Look up a key. Missing keys yield `""`.
    #[must_use]
    pub fn t(&self, key: &str) -> &'a str {
        match self.try_t(key) {
            Some(text) => text,
            None => {
                tracing::warn!(
                    locale = self.locale.code(),
                    key = %self.full_key(key),
                    "missing translation"
                );
                ""
            }
        }
    }

    /// Look up a key and substitute `{name}` placeholders.
    #[must_use]
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.t(key), args)
    }

    /// Number of items stored as an array under `key`.
    #[must_use]
    pub fn item_count(&self, key: &str) -> usize {
        self.catalog
            .item_count(self.locale.code(), &self.full_key(key))
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::catalog::LocaleStrings;

    fn catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new();
        let mut en = LocaleStrings::new();
        en.insert("plans.title", "Plans");
        en.insert("plans.percent", "Save {percent}%");
        en.insert("faqs.items.0.question", "Q");
        let mut ar = LocaleStrings::new();
        ar.insert("plans.title", "الخطط");
        catalog.add_locale("en", en);
        catalog.add_locale("ar", ar);
        catalog.set_fallback_chain(["en"]);
        catalog
    }

    #[test]
    fn scoped_lookup() {
        let catalog = catalog();
        let t = Translator::new(&catalog, Locale::Ar).scoped("plans");
        assert_eq!(t.t("title"), "الخطط");
        assert_eq!(t.direction(), Direction::Rtl);
    }

    #[test]
    fn placeholder_substitution() {
        let catalog = catalog();
        let t = Translator::new(&catalog, Locale::En);
        assert_eq!(t.t_args("plans.percent", &[("percent", "20")]), "Save 20%");
    }

    #[test]
    #[traced_test]
    fn missing_key_is_empty_and_logged() {
        let catalog = catalog();
        let t = Translator::new(&catalog, Locale::En).scoped("hero");
        assert_eq!(t.t("title"), "");
        assert!(t.try_t("title").is_none());
        assert!(logs_contain("missing translation"));
        assert!(logs_contain("hero.title"));
    }

    #[test]
    fn item_count_through_fallback() {
        let catalog = catalog();
        let t = Translator::new(&catalog, Locale::Ar).scoped("faqs");
        assert_eq!(t.item_count("items"), 1);
    }
}
