#![forbid(unsafe_code)]

//! Message bundles: nested JSON documents flattened into catalogs.
//!
//! Objects become dotted key segments and arrays become numeric segments,
//! so `{"faqs": {"items": [{"question": "…"}]}}` yields the key
//! `faqs.items.0.question`. Numbers and booleans are stored as their JSON
//! text; `null` entries are skipped.

use std::fmt;

use serde_json::Value;

use crate::catalog::{LocaleStrings, StringCatalog};
use crate::locale::Locale;

const EN_MESSAGES: &str = include_str!("../messages/en.json");
const AR_MESSAGES: &str = include_str!("../messages/ar.json");

/// Failure to load a message bundle.
#[derive(Debug)]
pub enum BundleError {
    /// The document is not valid JSON.
    Parse {
        /// Locale the bundle was loaded for.
        locale: String,
        /// Underlying parser error.
        source: serde_json::Error,
    },
    /// The document root is not a JSON object.
    NotAnObject {
        /// Locale the bundle was loaded for.
        locale: String,
    },
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { locale, source } => {
                write!(f, "message bundle for {locale} is not valid JSON: {source}")
            }
            Self::NotAnObject { locale } => {
                write!(f, "message bundle for {locale} must be a JSON object")
            }
        }
    }
}

impl std::error::Error for BundleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::NotAnObject { .. } => None,
        }
    }
}

/// Flatten one JSON message bundle into a string table.
pub fn parse_bundle(locale: &str, json: &str) -> Result<LocaleStrings, BundleError> {
    let root: Value = serde_json::from_str(json).map_err(|source| BundleError::Parse {
        locale: locale.to_string(),
        source,
    })?;
    if !root.is_object() {
        return Err(BundleError::NotAnObject {
            locale: locale.to_string(),
        });
    }
    let mut strings = LocaleStrings::new();
    flatten_into(&mut strings, String::new(), &root);
    Ok(strings)
}

fn flatten_into(strings: &mut LocaleStrings, prefix: String, value: &Value) {
    let child = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        }
    };
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(strings, child(key), nested);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_into(strings, child(&index.to_string()), nested);
            }
        }
        Value::String(text) => strings.insert(prefix, text.as_str()),
        Value::Number(number) => strings.insert(prefix, number.to_string()),
        Value::Bool(flag) => strings.insert(prefix, flag.to_string()),
        Value::Null => {}
    }
}

impl StringCatalog {
    /// Build a catalog from `(locale, json)` bundles.
    ///
    /// The first bundle's locale becomes the fallback for the others.
    pub fn from_json_bundles<'a, I>(bundles: I) -> Result<Self, BundleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut catalog = Self::new();
        let mut first = None;
        for (locale, json) in bundles {
            let strings = parse_bundle(locale, json)?;
            tracing::debug!(locale, keys = strings.len(), "message bundle loaded");
            catalog.add_locale(locale, strings);
            first.get_or_insert_with(|| locale.to_string());
        }
        if let Some(first) = first {
            catalog.set_fallback_chain([first]);
        }
        Ok(catalog)
    }
}

/// The catalog compiled into the binary: English, then Arabic, with
/// English as the fallback locale.
pub fn bundled() -> Result<StringCatalog, BundleError> {
    StringCatalog::from_json_bundles([
        (Locale::En.code(), EN_MESSAGES),
        (Locale::Ar.code(), AR_MESSAGES),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_objects_and_arrays() {
        let strings = parse_bundle(
            "en",
            r#"{"a": {"b": "x", "list": [{"q": "one"}, {"q": "two"}]}, "n": 3, "z": null}"#,
        )
        .unwrap();
        assert_eq!(strings.get("a.b"), Some("x"));
        assert_eq!(strings.get("a.list.0.q"), Some("one"));
        assert_eq!(strings.get("a.list.1.q"), Some("two"));
        assert_eq!(strings.get("n"), Some("3"));
        assert_eq!(strings.get("z"), None);
    }

    #[test]
    fn rejects_non_object_root() {
        let err = parse_bundle("ar", "[1, 2]").unwrap_err();
        assert!(matches!(err, BundleError::NotAnObject { .. }));
        assert!(err.to_string().contains("ar"));
    }

    #[test]
    fn reports_parse_errors_with_source() {
        let err = parse_bundle("en", "{").unwrap_err();
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn bundled_catalog_loads_both_locales() {
        let catalog = bundled().unwrap();
        let codes: Vec<&str> = catalog.locales().collect();
        assert_eq!(codes, vec!["en", "ar"]);
        assert!(catalog.get("en", "hero.title").is_some());
        assert!(catalog.get("ar", "hero.title").is_some());
    }

    #[test]
    fn bundled_catalog_is_fully_translated() {
        let report = bundled().unwrap().coverage_report();
        for locale in &report.locales {
            assert!(
                locale.missing.is_empty(),
                "{} is missing {:?}",
                locale.locale,
                locale.missing
            );
        }
    }
}
