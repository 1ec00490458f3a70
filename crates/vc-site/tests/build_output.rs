use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use vc_i18n::Locale;
use vc_site::Site;
use vc_site::build::build_site;
use vc_site::config::SiteConfig;
use vc_site::routing::{Route, Router};

fn site(config: SiteConfig) -> Site {
    Site::new(config, vc_i18n::bundled().expect("bundled catalog")).with_year(2026)
}

#[test]
fn every_routed_page_exists_after_build() {
    let temp = tempdir().expect("tempdir");
    let site = site(SiteConfig::default());
    let manifest = build_site(&site, temp.path(), None).expect("build");

    let router = Router::from_config(&SiteConfig::default());
    for page in &manifest.pages {
        let route = router.resolve(&format!("/{}/", page.locale)).expect("route");
        let Route::Page(locale) = route else {
            panic!("expected a page route for {}", page.locale);
        };
        let html = fs::read_to_string(temp.path().join(Router::output_path(locale))).expect("page");
        assert_eq!(html.len(), page.bytes);
        assert!(html.contains(&format!("<html lang=\"{}\"", locale.code())));
    }
    assert_eq!(router.resolve("/").expect("root"), Route::Redirect(Locale::En));
}

#[test]
fn pages_differ_only_by_locale_content() {
    let temp = tempdir().expect("tempdir");
    build_site(&site(SiteConfig::default()), temp.path(), None).expect("build");
    let en = fs::read_to_string(temp.path().join("en/index.html")).expect("en");
    let ar = fs::read_to_string(temp.path().join("ar/index.html")).expect("ar");

    let sections = |html: &str| html.matches("<section ").count();
    assert_eq!(sections(&en), sections(&ar));
    assert!(en.contains("dir=\"ltr\" class=\"scroll-smooth\""));
    assert!(ar.contains("dir=\"rtl\" class=\"scroll-smooth\""));
    assert!(ar.contains("scale-x-[-1]"));
    assert!(!en.contains("scale-x-[-1]"));
}

#[test]
fn base_path_prefixes_links() {
    let temp = tempdir().expect("tempdir");
    let mut config = SiteConfig::default();
    config.site.base_path = "/site/".into();
    build_site(&site(config), temp.path(), None).expect("build");
    let redirect = fs::read_to_string(temp.path().join("index.html")).expect("redirect");
    assert!(redirect.contains("url=&#x2f;site&#x2f;en&#x2f;"));
}
