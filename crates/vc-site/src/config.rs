#![forbid(unsafe_code)]

//! Site configuration loaded from TOML.
//!
//! ```toml
//! # vclasses.toml
//! [site]
//! base_path = "/"
//!
//! [locales]
//! enabled = ["en", "ar"]
//! default = "en"
//!
//! [carousel]
//! tween_factor_base = 0.03
//! reviews_autoplay_ms = 6000
//!
//! [output]
//! dir = "dist"
//! ```
//!
//! Every field has a default, so an empty document (or no file at all)
//! yields the published site.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vc_carousel::TWEEN_FACTOR_BASE;
use vc_i18n::Locale;

use crate::error::{Result, SiteError};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page metadata and URLs.
    pub site: SiteSection,
    /// Published locales.
    pub locales: LocalesSection,
    /// Carousel tuning.
    pub carousel: CarouselSection,
    /// Build output.
    pub output: OutputSection,
}

/// `[site]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Overrides the catalog's `site.title`.
    pub title: Option<String>,
    /// Overrides the catalog's `site.description`.
    pub description: Option<String>,
    /// URL prefix the locale directories live under. Starts and ends with `/`.
    pub base_path: String,
    /// Brand name used in image alt text.
    pub brand: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            base_path: "/".to_string(),
            brand: "VClasses".to_string(),
        }
    }
}

/// `[locales]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalesSection {
    /// Locale codes to publish, in routing order.
    pub enabled: Vec<String>,
    /// Locale the site root redirects to.
    pub default: String,
}

impl Default for LocalesSection {
    fn default() -> Self {
        Self {
            enabled: Locale::ALL.iter().map(|l| l.code().to_string()).collect(),
            default: Locale::En.code().to_string(),
        }
    }
}

/// `[carousel]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSection {
    /// Tween factor per snap.
    pub tween_factor_base: f64,
    /// About cards autoplay delay.
    pub about_autoplay_ms: u64,
    /// Text reviews autoplay delay.
    pub reviews_autoplay_ms: u64,
    /// Viewport width the initial layout is computed for.
    pub viewport_width: u32,
    /// Visible video slides (`w-[26%]` on large screens).
    pub video_slides_per_view: f64,
    /// Visible plan slides in the mobile carousel (`w-[85%]`).
    pub plans_slides_per_view: f64,
}

impl Default for CarouselSection {
    fn default() -> Self {
        Self {
            tween_factor_base: TWEEN_FACTOR_BASE,
            about_autoplay_ms: 5000,
            reviews_autoplay_ms: 6000,
            viewport_width: 1280,
            video_slides_per_view: 3.8,
            plans_slides_per_view: 1.2,
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Directory the locale pages are written to.
    pub dir: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SiteError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate all parameters.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let base = &self.site.base_path;
        if !base.starts_with('/') || !base.ends_with('/') {
            errors.push(format!(
                "site.base_path must start and end with '/', got {base:?}"
            ));
        }

        if self.locales.enabled.is_empty() {
            errors.push("locales.enabled must name at least one locale".into());
        }
        for code in &self.locales.enabled {
            if exact_locale(code).is_none() {
                errors.push(format!("locales.enabled contains unknown locale {code:?}"));
            }
        }
        if !self.locales.enabled.contains(&self.locales.default) {
            errors.push(format!(
                "locales.default {:?} must be one of locales.enabled",
                self.locales.default
            ));
        }

        let carousel = &self.carousel;
        if !carousel.tween_factor_base.is_finite() || carousel.tween_factor_base <= 0.0 {
            errors.push(format!(
                "carousel.tween_factor_base must be > 0, got {}",
                carousel.tween_factor_base
            ));
        }
        if carousel.about_autoplay_ms == 0 {
            errors.push("carousel.about_autoplay_ms must be > 0".into());
        }
        if carousel.reviews_autoplay_ms == 0 {
            errors.push("carousel.reviews_autoplay_ms must be > 0".into());
        }
        if carousel.viewport_width == 0 {
            errors.push("carousel.viewport_width must be > 0".into());
        }
        for (name, value) in [
            ("video_slides_per_view", carousel.video_slides_per_view),
            ("plans_slides_per_view", carousel.plans_slides_per_view),
        ] {
            if !value.is_finite() || value < 1.0 {
                errors.push(format!("carousel.{name} must be >= 1, got {value}"));
            }
        }

        if self.output.dir.as_os_str().is_empty() {
            errors.push("output.dir must not be empty".into());
        }

        errors
    }

    /// [`Self::validate`] as a result.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SiteError::InvalidConfig { errors })
        }
    }

    /// Enabled locales that parse, in configured order.
    #[must_use]
    pub fn enabled_locales(&self) -> Vec<Locale> {
        let mut locales = Vec::new();
        for locale in self.locales.enabled.iter().filter_map(|c| exact_locale(c)) {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        locales
    }

    /// The default locale, falling back to English.
    #[must_use]
    pub fn default_locale(&self) -> Locale {
        exact_locale(&self.locales.default).unwrap_or_default()
    }
}

/// A locale whose code is exactly `code`.
#[must_use]
pub fn exact_locale(code: &str) -> Option<Locale> {
    Locale::ALL.into_iter().find(|locale| locale.code() == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(config.validate().is_empty());
        assert_eq!(config.enabled_locales(), vec![Locale::En, Locale::Ar]);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[locales]
enabled = ["ar"]
default = "ar"

[carousel]
tween_factor_base = 0.05
"#,
        )
        .unwrap();
        assert_eq!(config.enabled_locales(), vec![Locale::Ar]);
        assert_eq!(config.default_locale(), Locale::Ar);
        assert_eq!(config.carousel.tween_factor_base, 0.05);
        assert_eq!(config.carousel.reviews_autoplay_ms, 6000);
        assert_eq!(config.output.dir, PathBuf::from("dist"));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = SiteConfig::default();
        config.site.base_path = "site".into();
        config.locales.enabled = vec!["en".into(), "fr".into()];
        config.locales.default = "de".into();
        config.carousel.tween_factor_base = 0.0;
        config.carousel.video_slides_per_view = 0.5;
        let errors = config.validate();
        assert_eq!(errors.len(), 5, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("\"fr\"")));
        assert!(matches!(
            config.ensure_valid(),
            Err(SiteError::InvalidConfig { errors }) if errors.len() == 5
        ));
    }

    #[test]
    fn region_codes_are_not_route_codes() {
        assert_eq!(exact_locale("en"), Some(Locale::En));
        assert_eq!(exact_locale("en-US"), None);
        assert_eq!(exact_locale("AR"), None);
    }

    #[test]
    fn duplicate_locales_collapse() {
        let mut config = SiteConfig::default();
        config.locales.enabled = vec!["ar".into(), "en".into(), "ar".into()];
        assert_eq!(config.enabled_locales(), vec![Locale::Ar, Locale::En]);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            SiteConfig::from_toml_str("[locales\nenabled = 1"),
            Err(SiteError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = SiteConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SiteError::MissingConfig { .. }));
    }
}
