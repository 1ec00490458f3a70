#![forbid(unsafe_code)]

use std::fs;
use std::path::Path;

use chrono::{Datelike, Local, Utc};

use crate::error::Result;

#[must_use]
pub fn now_utc_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Calendar year for the footer copyright.
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

pub fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// `base` + `segment` + `/`, with `base` ending in `/`.
#[must_use]
pub fn locale_href(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/{segment}/")
}

/// Site-root `path` (`/assets/...`) moved under `base`.
#[must_use]
pub fn asset_href(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/{}", path.trim_start_matches('/'))
}
