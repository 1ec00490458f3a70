#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use vc_i18n::{CoverageReport, StringCatalog};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// TOML config; built-in defaults when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocaleSummary {
    pub locale: String,
    pub present: usize,
    pub missing: usize,
    pub coverage_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub total_keys: usize,
    pub locales: Vec<LocaleSummary>,
}

impl From<&CoverageReport> for CheckSummary {
    fn from(report: &CoverageReport) -> Self {
        Self {
            total_keys: report.total_keys,
            locales: report
                .locales
                .iter()
                .map(|coverage| LocaleSummary {
                    locale: coverage.locale.clone(),
                    present: coverage.present,
                    missing: coverage.missing.len(),
                    coverage_percent: coverage.coverage_percent,
                })
                .collect(),
        }
    }
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let config = SiteConfig::load(args.config.as_deref())?;
    let summary = check(&config, &vc_i18n::bundled()?)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for locale in &summary.locales {
            println!(
                "{}: {}/{} keys ({:.1}%)",
                locale.locale, locale.present, summary.total_keys, locale.coverage_percent
            );
        }
        println!("ok");
    }
    Ok(())
}

/// Validate `config`, then require every catalog key in every locale.
pub fn check(config: &SiteConfig, catalog: &StringCatalog) -> Result<CheckSummary> {
    config.ensure_valid()?;
    let report = catalog.coverage_report();
    if !report.is_complete() {
        let missing: Vec<String> = report
            .locales
            .iter()
            .flat_map(|coverage| {
                coverage
                    .missing
                    .iter()
                    .map(move |key| format!("{}:{key}", coverage.locale))
            })
            .collect();
        tracing::warn!(missing = missing.len(), "translation catalog incomplete");
        return Err(SiteError::MissingTranslations { missing });
    }
    Ok(CheckSummary::from(&report))
}

#[cfg(test)]
mod tests {
    use vc_i18n::{LocaleStrings, StringCatalog};

    use super::*;

    #[test]
    fn bundled_catalog_passes() {
        let summary = check(&SiteConfig::default(), &vc_i18n::bundled().unwrap()).unwrap();
        assert_eq!(summary.locales.len(), 2);
        assert!(summary.locales.iter().all(|l| l.missing == 0));
    }

    #[test]
    fn missing_key_is_reported_with_locale() {
        let mut en = LocaleStrings::new();
        en.insert("hero.title", "Learn");
        en.insert("hero.cta", "Start");
        let mut ar = LocaleStrings::new();
        ar.insert("hero.title", "تعلم");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        catalog.add_locale("ar", ar);

        let err = check(&SiteConfig::default(), &catalog).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "incomplete translations: ar:hero.cta");
    }

    #[test]
    fn invalid_config_fails_first() {
        let mut config = SiteConfig::default();
        config.site.base_path = "site".into();
        let err = check(&config, &vc_i18n::bundled().unwrap()).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig { .. }));
    }
}
