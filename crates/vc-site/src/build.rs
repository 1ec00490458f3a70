#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use vc_i18n::Locale;

use crate::config::{SiteConfig, exact_locale};
use crate::error::{Result, SiteError};
use crate::page::Site;
use crate::routing::Router;
use crate::util::{ensure_dir, now_utc_iso, write_string};

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// TOML config; built-in defaults when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory, overriding `[output] dir`.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Build a single locale.
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    pub locale: String,
    pub dir: String,
    pub path: String,
    pub bytes: usize,
}

/// `manifest.json` written next to the pages.
#[derive(Debug, Clone, Serialize)]
pub struct BuildManifest {
    pub generated_at: String,
    pub default_locale: String,
    pub redirect: Option<String>,
    pub pages: Vec<PageEntry>,
}

pub fn run_build(args: BuildArgs) -> Result<()> {
    let config = SiteConfig::load(args.config.as_deref())?;
    config.ensure_valid()?;
    let only = args
        .locale
        .as_deref()
        .map(|code| exact_locale(code).ok_or_else(|| SiteError::not_found(code)))
        .transpose()?;
    let out = args.out.unwrap_or_else(|| config.output.dir.clone());
    if out.is_file() {
        return Err(SiteError::invalid(format!(
            "--out {} is a file, expected a directory",
            out.display()
        )));
    }

    let site = Site::new(config, vc_i18n::bundled()?);
    let manifest = build_site(&site, &out, only)?;
    println!(
        "built {} page(s) into {}",
        manifest.pages.len(),
        out.display()
    );
    Ok(())
}

/// Render `only`, or every enabled locale, under `out`. A full build also
/// writes the root redirect.
pub fn build_site(site: &Site, out: &Path, only: Option<Locale>) -> Result<BuildManifest> {
    let locales: Vec<Locale> = match only {
        Some(locale) if site.router.is_enabled(locale) => vec![locale],
        Some(locale) => return Err(SiteError::not_found(locale.code())),
        None => site.router.locales().to_vec(),
    };

    ensure_dir(out)?;
    let mut pages = Vec::with_capacity(locales.len());
    for locale in locales {
        let html = site.render_page(locale)?;
        let relative = Router::output_path(locale);
        write_string(&out.join(&relative), &html)?;
        tracing::info!(locale = locale.code(), path = %relative.display(), "page written");
        pages.push(PageEntry {
            locale: locale.code().to_string(),
            dir: locale.direction().as_str().to_string(),
            path: relative.display().to_string(),
            bytes: html.len(),
        });
    }

    let redirect = if only.is_none() {
        write_string(&out.join("index.html"), &site.render_redirect())?;
        Some("index.html".to_string())
    } else {
        None
    };

    let manifest = BuildManifest {
        generated_at: now_utc_iso(),
        default_locale: site.router.default_locale().code().to_string(),
        redirect,
        pages,
    };
    write_string(
        &out.join("manifest.json"),
        &serde_json::to_string_pretty(&manifest)?,
    )?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn site() -> Site {
        Site::new(SiteConfig::default(), vc_i18n::bundled().unwrap()).with_year(2026)
    }

    #[test]
    fn full_build_writes_pages_redirect_and_manifest() {
        let temp = tempdir().expect("tempdir");
        let manifest = build_site(&site(), temp.path(), None).unwrap();
        assert_eq!(manifest.pages.len(), 2);
        assert!(temp.path().join("en/index.html").exists());
        assert!(temp.path().join("ar/index.html").exists());
        assert!(temp.path().join("index.html").exists());
        let json = std::fs::read_to_string(temp.path().join("manifest.json")).unwrap();
        assert!(json.contains("\"default_locale\": \"en\""));
    }

    #[test]
    fn single_locale_skips_redirect() {
        let temp = tempdir().expect("tempdir");
        let manifest = build_site(&site(), temp.path(), Some(Locale::Ar)).unwrap();
        assert_eq!(manifest.pages[0].dir, "rtl");
        assert!(manifest.redirect.is_none());
        assert!(!temp.path().join("index.html").exists());
    }

    #[test]
    fn unknown_locale_argument_is_not_found() {
        let temp = tempdir().expect("tempdir");
        let err = run_build(BuildArgs {
            config: None,
            out: Some(temp.path().to_path_buf()),
            locale: Some("fr".into()),
        })
        .unwrap_err();
        assert!(matches!(err, SiteError::NotFound { .. }));
    }

    #[test]
    fn output_path_that_is_a_file_is_rejected() {
        let temp = tempdir().expect("tempdir");
        let file = temp.path().join("dist");
        std::fs::write(&file, "").expect("write file");
        let err = run_build(BuildArgs {
            config: None,
            out: Some(file),
            locale: None,
        })
        .unwrap_err();
        assert!(matches!(err, SiteError::InvalidArgument { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
