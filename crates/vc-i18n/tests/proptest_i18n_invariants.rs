//! Property-based invariant tests for locales, interpolation, and the catalog.
//!
//! 1. Locale parsing never panics and only accepts `en`/`ar` bases
//! 2. Interpolation with no placeholders is identity
//! 3. Interpolation is single-pass (no recursive substitution)
//! 4. Missing args leave placeholder tokens intact
//! 5. Missing keys return None; the translator returns ""
//! 6. Coverage percentages stay in [0, 100] and add up
//! 7. The bundled catalog resolves every key in both locales

use proptest::prelude::*;
use vc_i18n::{Locale, LocaleStrings, StringCatalog, Translator, bundled, interpolate};

// ── 1. Locale parsing ────────────────────────────────────────────────

proptest! {
    #[test]
    fn parse_never_panics(code in ".*") {
        if let Some(locale) = Locale::parse(&code) {
            let lowered = code.to_ascii_lowercase();
            prop_assert!(lowered.trim_start().starts_with(locale.code()));
        }
    }

    #[test]
    fn direction_follows_locale(is_ar in any::<bool>()) {
        let locale = if is_ar { Locale::Ar } else { Locale::En };
        prop_assert_eq!(locale.direction().is_rtl(), is_ar);
    }
}

// ── 2. Identity ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn interpolation_without_braces_is_identity(text in "[a-zA-Z0-9 .,!?%]*") {
        prop_assert_eq!(interpolate(&text, &[("percent", "10")]), text);
    }
}

// ── 3. Single pass ───────────────────────────────────────────────────

#[test]
fn interpolation_not_recursive() {
    let out = interpolate("Save {percent}%", &[("percent", "{percent}")]);
    assert_eq!(out, "Save {percent}%");

    let out = interpolate("Save {percent}%", &[("percent", "{other}"), ("other", "x")]);
    assert_eq!(out, "Save {other}%");
}

// ── 4. Missing args ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn missing_args_preserve_tokens(name in "[a-z]{1,10}") {
        let template = format!("Value: {{{name}}}");
        prop_assert_eq!(interpolate(&template, &[]), template);
    }
}

// ── 5. Missing keys ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn missing_key_returns_none(key in "[a-z]{1,20}") {
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", LocaleStrings::new());
        prop_assert_eq!(catalog.get("en", &key), None);
        prop_assert_eq!(catalog.format("en", &key, &[]), None);
        prop_assert_eq!(Translator::new(&catalog, Locale::En).t(&key), "");
    }
}

// ── 6. Coverage ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn coverage_percent_bounded(n_keys in 0usize..=10, n_locales in 1usize..=3) {
        let mut catalog = StringCatalog::new();
        for locale_idx in 0..n_locales {
            let mut strings = LocaleStrings::new();
            for k in 0..n_keys {
                if k % (locale_idx + 1) == 0 {
                    strings.insert(format!("key_{k}"), format!("val_{k}"));
                }
            }
            catalog.add_locale(&format!("l{locale_idx}"), strings);
        }

        let report = catalog.coverage_report();
        for lc in &report.locales {
            prop_assert!((0.0..=100.0).contains(&lc.coverage_percent));
            prop_assert_eq!(lc.present + lc.missing.len(), report.total_keys);
        }
    }
}

// ── 7. Bundled catalog ───────────────────────────────────────────────

#[test]
fn bundled_keys_resolve_in_every_locale() {
    let catalog = bundled().expect("bundled messages parse");
    let keys: Vec<String> = catalog
        .strings("en")
        .expect("english bundle")
        .keys()
        .map(str::to_string)
        .collect();
    for locale in Locale::ALL {
        for key in &keys {
            assert!(
                catalog.strings(locale.code()).is_some_and(|s| s.contains(key)),
                "{locale} lacks {key}"
            );
        }
    }
}

#[test]
fn bundled_faq_items_match() {
    let catalog = bundled().expect("bundled messages parse");
    let en = Translator::new(&catalog, Locale::En).scoped("faqs");
    let ar = Translator::new(&catalog, Locale::Ar).scoped("faqs");
    assert_eq!(en.item_count("items"), 5);
    assert_eq!(en.item_count("items"), ar.item_count("items"));
}
