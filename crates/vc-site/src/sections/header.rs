#![forbid(unsafe_code)]

use vc_style::{ButtonSize, ButtonVariant, ClassList, DEFAULT_BUTTON_HREF};

use super::{RenderContext, link_button};
use crate::content::{HEADER_NAV, language_options};
use crate::html::{Attrs, Markup};

const LOGO: &str = "/assets/images/header/logo.png";

/// Promo banner, brand, navigation, language switcher and call to action.
pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    let banner = ctx.t("banner");
    let t = ctx.t("header");

    html.open(
        "div",
        Attrs::new()
            .class("w-full bg-primary py-2 text-center text-sm text-white")
            .set("role", "note"),
    );
    html.text(banner.t("message"));
    html.close("div");

    html.open(
        "header",
        Attrs::new().class("sticky top-0 z-50 w-full bg-white/90 backdrop-blur"),
    );
    html.open(
        "div",
        Attrs::new().class("container mx-auto flex items-center justify-between px-4 py-4"),
    );
    html.open("a", Attrs::new().set("href", "#home"));
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(LOGO))
            .set("alt", &ctx.config.site.brand)
            .set("width", 140)
            .set("height", 40),
    );
    html.close("a");

    html.open("nav", Attrs::new().class("hidden lg:block"));
    html.open("ul", Attrs::new().class("flex items-center gap-8"));
    for link in &HEADER_NAV {
        html.open("li", Attrs::new());
        html.element(
            "a",
            Attrs::new()
                .set("href", link.href)
                .class("font-medium text-[#061C3D] transition-colors hover:text-primary"),
            t.t(&format!("nav.{}", link.label_key)),
        );
        html.close("li");
    }
    html.close("ul");
    html.close("nav");

    html.open("div", Attrs::new().class("flex items-center gap-4"));
    render_language_menu(ctx, html, t.t("language"));
    link_button(
        html,
        t.t("enroll"),
        DEFAULT_BUTTON_HREF,
        ButtonVariant::Primary,
        ButtonSize::Md,
        Attrs::new(),
    );
    html.close("div");

    html.close("div");
    html.close("header");
}

fn render_language_menu(ctx: &RenderContext<'_>, html: &mut Markup, label: &str) {
    let options = language_options(
        ctx.router.locales(),
        ctx.locale,
        &ctx.config.site.base_path,
    );
    html.open(
        "div",
        Attrs::new()
            .class("relative")
            .set("data-menu", "language"),
    );
    html.element(
        "span",
        Attrs::new().class("sr-only"),
        label,
    );
    html.open("ul", Attrs::new().class("flex gap-2").set("aria-label", label));
    for option in options {
        let classes = ClassList::new()
            .with("rounded-full px-3 py-1 text-sm")
            .with_if(option.current, "bg-primary text-white")
            .with_if(!option.current, "text-[#061C3D] hover:bg-gray-100");
        html.open("li", Attrs::new());
        html.element(
            "a",
            Attrs::new()
                .set("href", &option.href)
                .set("hreflang", option.locale.code())
                .set("lang", option.locale.code())
                .set_if(option.current, "aria-current", "page")
                .class(classes),
            option.label,
        );
        html.close("li");
    }
    html.close("ul");
    html.close("div");
}
