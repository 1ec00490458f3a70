#![forbid(unsafe_code)]

//! Locale routing: `/{locale}/` pages for enabled locales, the site root
//! redirects to the default locale, everything else is not found.

use std::path::PathBuf;

use vc_i18n::Locale;

use crate::config::{SiteConfig, exact_locale};
use crate::error::{Result, SiteError};
use crate::util::locale_href;

/// Where a request path leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The locale's landing page.
    Page(Locale),
    /// Site root; send the visitor to this locale.
    Redirect(Locale),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    enabled: Vec<Locale>,
    default: Locale,
    base_path: String,
}

impl Router {
    /// Router for `enabled` locales. An empty list publishes only
    /// `default`.
    #[must_use]
    pub fn new(enabled: Vec<Locale>, default: Locale, base_path: impl Into<String>) -> Self {
        let enabled = if enabled.is_empty() {
            vec![default]
        } else {
            enabled
        };
        Self {
            enabled,
            default,
            base_path: base_path.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.enabled_locales(),
            config.default_locale(),
            config.site.base_path.clone(),
        )
    }

    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        &self.enabled
    }

    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.default
    }

    #[must_use]
    pub fn is_enabled(&self, locale: Locale) -> bool {
        self.enabled.contains(&locale)
    }

    /// Enabled locale for a route segment such as `ar`.
    pub fn locale(&self, segment: &str) -> Result<Locale> {
        match exact_locale(segment) {
            Some(locale) if self.is_enabled(locale) => Ok(locale),
            _ => {
                tracing::warn!(segment, "unknown locale");
                Err(SiteError::not_found(segment))
            }
        }
    }

    /// Route a request path (`/`, `/ar`, `/en/`), relative to the base path.
    pub fn resolve(&self, path: &str) -> Result<Route> {
        let relative = path
            .strip_prefix(self.base_path.trim_end_matches('/'))
            .unwrap_or(path);
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Route::Redirect(self.default)),
            [segment] => self.locale(segment).map(Route::Page),
            _ => Err(SiteError::not_found(relative.trim_matches('/'))),
        }
    }

    /// Public URL of a locale's page.
    #[must_use]
    pub fn href(&self, locale: Locale) -> String {
        locale_href(&self.base_path, locale.code())
    }

    /// Output file of a locale's page, relative to the output directory.
    #[must_use]
    pub fn output_path(locale: Locale) -> PathBuf {
        PathBuf::from(locale.code()).join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    fn router() -> Router {
        Router::new(Locale::ALL.to_vec(), Locale::En, "/")
    }

    #[test]
    fn root_redirects_to_default() {
        assert_eq!(router().resolve("/").unwrap(), Route::Redirect(Locale::En));
        assert_eq!(router().resolve("").unwrap(), Route::Redirect(Locale::En));
    }

    #[test]
    fn enabled_locales_resolve() {
        assert_eq!(router().resolve("/ar").unwrap(), Route::Page(Locale::Ar));
        assert_eq!(router().resolve("/en/").unwrap(), Route::Page(Locale::En));
    }

    #[test]
    fn unknown_locale_is_not_found() {
        let err = router().resolve("/fr").unwrap_err();
        assert!(matches!(err, SiteError::NotFound { ref locale } if locale == "fr"));
        assert!(router().resolve("/en/extra").is_err());
        assert!(router().resolve("/EN").is_err());
    }

    #[test]
    #[traced_test]
    fn unknown_locale_is_logged() {
        assert!(router().locale("de").is_err());
        assert!(logs_contain("unknown locale"));
    }

    #[test]
    fn disabled_locale_is_not_found() {
        let router = Router::new(vec![Locale::Ar], Locale::Ar, "/");
        assert!(router.resolve("/en").is_err());
        assert_eq!(router.resolve("/").unwrap(), Route::Redirect(Locale::Ar));
    }

    #[test]
    fn base_path_is_stripped() {
        let router = Router::new(Locale::ALL.to_vec(), Locale::En, "/site/");
        assert_eq!(router.resolve("/site/ar/").unwrap(), Route::Page(Locale::Ar));
        assert_eq!(router.href(Locale::Ar), "/site/ar/");
        assert_eq!(Router::output_path(Locale::Ar), PathBuf::from("ar/index.html"));
    }

    #[test]
    fn empty_enabled_publishes_default() {
        let router = Router::new(Vec::new(), Locale::Ar, "/");
        assert_eq!(router.locales(), &[Locale::Ar]);
    }
}
