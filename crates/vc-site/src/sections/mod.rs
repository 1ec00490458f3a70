#![forbid(unsafe_code)]

//! Page sections, rendered in page order into one [`Markup`] buffer.

pub mod about;
pub mod carousel;
pub mod contact;
pub mod course;
pub mod faqs;
pub mod fields;
pub mod footer;
pub mod header;
pub mod hero;
pub mod meeting;
pub mod plans;
pub mod reviews;

use vc_i18n::{Direction, Locale, StringCatalog, Translator};
use vc_motion::{MotionContext, RevealedText, Tween};
use vc_style::{ButtonSize, ButtonVariant, button_classes};

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::html::{Attrs, Markup};
use crate::routing::Router;
use crate::util::asset_href;

const UNDERLINE_SVG: &str = "<svg class=\"absolute -bottom-2 left-0 w-full\" viewBox=\"0 0 200 12\" fill=\"none\" aria-hidden=\"true\"><path d=\"M2 9C50 3 150 3 198 9\" stroke=\"currentColor\" stroke-width=\"3\" stroke-linecap=\"round\"/></svg>";

const STAR_ICON: &str = "/assets/icons/reviews/star.png";

/// Everything a section needs to render one locale.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub locale: Locale,
    pub catalog: &'a StringCatalog,
    pub config: &'a SiteConfig,
    pub content: &'a SiteContent,
    pub router: &'a Router,
    pub motion: &'static MotionContext,
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    /// Translator at the catalog root.
    #[must_use]
    pub fn root(&self) -> Translator<'a> {
        Translator::new(self.catalog, self.locale)
    }

    /// Translator scoped to `namespace`.
    #[must_use]
    pub fn t(&self, namespace: &'a str) -> Translator<'a> {
        self.root().scoped(namespace)
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Image or icon `path` under the configured `base_path`.
    #[must_use]
    pub fn asset(&self, path: &str) -> String {
        asset_href(&self.config.site.base_path, path)
    }
}

/// Header, main sections and footer.
pub fn render_body(ctx: &RenderContext<'_>, html: &mut Markup) {
    header::render(ctx, html);
    html.open("main", Attrs::new());
    hero::render(ctx, html);
    about::render(ctx, html);
    meeting::render(ctx, html);
    course::render(ctx, html);
    reviews::render(ctx, html);
    plans::render(ctx, html);
    contact::render(ctx, html);
    faqs::render(ctx, html);
    html.close("main");
    footer::render(ctx, html);
}

/// `tag` holding `revealed` as one animated span per split unit, or
/// `fallback` as plain text when there is no reveal.
pub(crate) fn revealed_text(
    html: &mut Markup,
    tag: &str,
    attrs: Attrs,
    revealed: Option<&RevealedText>,
    fallback: &str,
) {
    let Some(revealed) = revealed else {
        html.element(tag, attrs, fallback);
        return;
    };
    html.open(tag, attrs.set("aria-label", fallback));
    let separator = revealed.text.by().separator();
    for (index, span) in revealed.text.spans().iter().enumerate() {
        if index > 0 {
            html.raw(separator);
        }
        html.element(
            "span",
            Attrs::new()
                .class("inline-block")
                .set("aria-hidden", "true")
                .motion(revealed.tweens.get(index)),
            span,
        );
    }
    html.close(tag);
}

/// Three-part title with an underlined highlight, keys `title.prefix`,
/// `title.highlight` and `title.suffix` under `t`.
pub(crate) fn highlighted_title(
    html: &mut Markup,
    t: &Translator<'_>,
    classes: &str,
    line: Option<&Tween>,
) {
    html.open("h2", Attrs::new().class(classes));
    html.text(t.t("title.prefix")).text(" ");
    html.open(
        "span",
        Attrs::new().class("relative inline-block text-primary"),
    );
    html.text(t.t("title.highlight"));
    html.open("span", Attrs::new().class("text-primary").motion(line));
    html.raw(UNDERLINE_SVG);
    html.close("span");
    html.close("span");
    html.text(" ").text(t.t("title.suffix"));
    html.close("h2");
}

/// Row of `count` star icons.
pub(crate) fn stars(ctx: &RenderContext<'_>, html: &mut Markup, count: u8, attrs: Attrs) {
    let icon = ctx.asset(STAR_ICON);
    html.open("div", attrs.class("flex gap-1").set("data-rating", count));
    for _ in 0..count {
        html.void(
            "img",
            Attrs::new()
                .set("src", &icon)
                .set("alt", "")
                .set("width", 16)
                .set("height", 16),
        );
    }
    html.close("div");
}

/// Anchor styled as a button.
pub(crate) fn link_button(
    html: &mut Markup,
    label: &str,
    href: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    attrs: Attrs,
) {
    html.element(
        "a",
        attrs
            .set("href", href)
            .class(button_classes(variant, size, "")),
        label,
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use vc_i18n::{Locale, StringCatalog};
    use vc_motion::Motion;

    use super::RenderContext;
    use crate::config::SiteConfig;
    use crate::content::SiteContent;
    use crate::html::Markup;
    use crate::routing::Router;

    /// Render one section for `locale` with the standard content.
    pub fn render_with(locale: Locale, render: fn(&RenderContext<'_>, &mut Markup)) -> String {
        let catalog: StringCatalog = vc_i18n::bundled().expect("bundled catalog");
        let config = SiteConfig::default();
        let content = SiteContent::standard();
        let router = Router::from_config(&config);
        let ctx = RenderContext {
            locale,
            catalog: &catalog,
            config: &config,
            content: &content,
            router: &router,
            motion: Motion::init(),
            year: 2026,
        };
        let mut html = Markup::new();
        render(&ctx, &mut html);
        html.finish()
    }
}
