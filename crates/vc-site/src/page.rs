#![forbid(unsafe_code)]

//! Full HTML documents: one landing page per locale plus the root redirect.

use vc_i18n::{Locale, StringCatalog};
use vc_motion::Motion;
use vc_style::LOADING_GRADIENT;

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::error::{Result, SiteError};
use crate::html::{Attrs, Markup, escape};
use crate::routing::Router;
use crate::sections::{RenderContext, render_body};
use crate::util::{asset_href, current_year};

const STYLESHEET: &str = "assets/site.css";
const SCRIPT: &str = "assets/site.js";

/// Everything needed to render the site.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: StringCatalog,
    pub content: SiteContent,
    pub router: Router,
    /// Copyright year.
    pub year: i32,
}

impl Site {
    /// Standard content and the current year.
    #[must_use]
    pub fn new(config: SiteConfig, catalog: StringCatalog) -> Self {
        let router = Router::from_config(&config);
        Self {
            config,
            catalog,
            content: SiteContent::standard(),
            router,
            year: current_year(),
        }
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    fn context(&self, locale: Locale) -> RenderContext<'_> {
        RenderContext {
            locale,
            catalog: &self.catalog,
            config: &self.config,
            content: &self.content,
            router: &self.router,
            motion: Motion::init(),
            year: self.year,
        }
    }

    fn asset(&self, path: &str) -> String {
        asset_href(&self.config.site.base_path, path)
    }

    /// Landing page for `locale`.
    pub fn render_page(&self, locale: Locale) -> Result<String> {
        if !self.router.is_enabled(locale) {
            return Err(SiteError::not_found(locale.code()));
        }
        let ctx = self.context(locale);
        let site = ctx.t("site");
        let title = self
            .config
            .site
            .title
            .as_deref()
            .unwrap_or_else(|| site.t("title"));
        let description = self
            .config
            .site
            .description
            .as_deref()
            .unwrap_or_else(|| site.t("description"));

        let mut html = Markup::new();
        html.raw("<!DOCTYPE html>\n");
        html.open(
            "html",
            Attrs::new()
                .set("lang", locale.code())
                .set("dir", locale.direction().as_str())
                .class("scroll-smooth"),
        );

        html.open("head", Attrs::new());
        html.void("meta", Attrs::new().set("charset", "utf-8"));
        html.void(
            "meta",
            Attrs::new()
                .set("name", "viewport")
                .set("content", "width=device-width, initial-scale=1"),
        );
        html.element("title", Attrs::new(), title);
        html.void(
            "meta",
            Attrs::new()
                .set("name", "description")
                .set("content", description),
        );
        for alternate in self.router.locales() {
            html.void(
                "link",
                Attrs::new()
                    .set("rel", "alternate")
                    .set("hreflang", alternate.code())
                    .set("href", self.router.href(*alternate)),
            );
        }
        html.void(
            "link",
            Attrs::new()
                .set("rel", "alternate")
                .set("hreflang", "x-default")
                .set("href", self.router.href(self.router.default_locale())),
        );
        html.void(
            "link",
            Attrs::new()
                .set("rel", "stylesheet")
                .set("href", self.asset(STYLESHEET)),
        );
        html.close("head");

        html.open("body", Attrs::new().class("bg-white font-sans antialiased"));
        render_loading(&ctx, &mut html);
        render_body(&ctx, &mut html);
        html.open(
            "script",
            Attrs::new().set("src", self.asset(SCRIPT)).flag("defer"),
        );
        html.close("script");
        html.close("body");
        html.close("html");

        tracing::debug!(locale = locale.code(), bytes = html.as_str().len(), "page rendered");
        Ok(html.finish())
    }

    /// Root `index.html` sending visitors to the default locale.
    #[must_use]
    pub fn render_redirect(&self) -> String {
        let target = self.router.href(self.router.default_locale());
        let target = escape(&target);
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<meta http-equiv=\"refresh\" content=\"0; url={target}\" />\n<link rel=\"canonical\" href=\"{target}\" />\n<title>Redirecting</title>\n</head>\n<body>\n<a href=\"{target}\">{target}</a>\n</body>\n</html>\n"
        )
    }
}

/// Full-screen loader hidden once the page script runs.
fn render_loading(ctx: &RenderContext<'_>, html: &mut Markup) {
    let label = ctx.t("loading").t("label");
    html.open(
        "div",
        Attrs::new()
            .set("id", "loading")
            .set("role", "status")
            .set("aria-label", label)
            .class("fixed inset-0 z-[100] flex items-center justify-center bg-white"),
    );
    html.open(
        "div",
        Attrs::new()
            .class("h-1 w-48 overflow-hidden rounded-full bg-gray-100"),
    );
    html.open(
        "div",
        Attrs::new()
            .class("h-full w-full animate-pulse")
            .style(format!("background: {}", LOADING_GRADIENT.css())),
    );
    html.close("div");
    html.close("div");
    html.element("span", Attrs::new().class("sr-only"), label);
    html.close("div");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vc_i18n::Locale;

    use super::*;

    fn site() -> Site {
        Site::new(SiteConfig::default(), vc_i18n::bundled().unwrap()).with_year(2026)
    }

    #[test]
    fn arabic_page_is_right_to_left() {
        let html = site().render_page(Locale::Ar).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"ar\" dir=\"rtl\" class=\"scroll-smooth\">"));
        assert!(html.contains("hreflang=\"x-default\""));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn page_contains_every_section_once() {
        let html = site().render_page(Locale::En).unwrap();
        for id in ["home", "about", "meet", "enroll", "reviews", "plans", "contact", "faqs"] {
            assert_eq!(html.matches(&format!("<section id=\"{id}\"")).count(), 1, "{id}");
        }
        assert!(html.contains("<title>VClasses</title>"));
        assert!(html.contains("linear-gradient(90deg, #fe5e3f 0%"));
    }

    #[test]
    fn config_overrides_title() {
        let mut config = SiteConfig::default();
        config.site.title = Some("VClasses Cairo".into());
        let site = Site::new(config, vc_i18n::bundled().unwrap());
        let html = site.render_page(Locale::En).unwrap();
        assert!(html.contains("<title>VClasses Cairo</title>"));
    }

    #[test]
    fn nested_base_path_prefixes_every_src() {
        let mut config = SiteConfig::default();
        config.site.base_path = "/site/".into();
        let site = Site::new(config, vc_i18n::bundled().unwrap());
        let html = site.render_page(Locale::En).unwrap();

        let sources = html.matches(" src=\"").count();
        assert!(sources > 100);
        assert_eq!(html.matches(" src=\"&#x2f;site&#x2f;assets&#x2f;").count(), sources);
        assert_eq!(html.matches(" src=\"&#x2f;assets&#x2f;").count(), 0);
        assert!(html.contains("href=\"&#x2f;site&#x2f;assets&#x2f;site.css\""));
    }

    #[test]
    fn disabled_locale_is_not_found() {
        let mut config = SiteConfig::default();
        config.locales.enabled = vec!["en".into()];
        let site = Site::new(config, vc_i18n::bundled().unwrap());
        let err = site.render_page(Locale::Ar).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn redirect_points_at_default_locale() {
        let html = site().render_redirect();
        assert!(html.contains("url=&#x2f;en&#x2f;"));
    }
}
