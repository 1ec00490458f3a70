#![forbid(unsafe_code)]

use vc_style::palette::FOOTER_BACKGROUND;

use super::RenderContext;
use crate::content::{CONTACT_ITEMS, FOOTER_LINKS, SOCIAL_LINKS};
use crate::html::{Attrs, Markup};

const LOGO: &str = "/assets/images/footer/logo-white.png";

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    let t = ctx.t("footer");

    html.open(
        "footer",
        Attrs::new().class(format!("bg-[{FOOTER_BACKGROUND}] pt-16 pb-8 text-white")),
    );
    html.open(
        "div",
        Attrs::new().class("container mx-auto grid gap-12 px-4 md:grid-cols-3"),
    );

    html.open("div", Attrs::new().class("flex flex-col gap-4"));
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(LOGO))
            .set("alt", &ctx.config.site.brand)
            .set("width", 140)
            .set("height", 40),
    );
    html.element("p", Attrs::new().class("text-white/70"), t.t("description"));
    html.open("ul", Attrs::new().class("flex gap-3"));
    for social in &SOCIAL_LINKS {
        html.open("li", Attrs::new());
        html.open(
            "a",
            Attrs::new()
                .set("href", social.href)
                .set("aria-label", social.name)
                .set("target", "_blank")
                .set("rel", "noopener noreferrer")
                .class("flex h-10 w-10 items-center justify-center rounded-full bg-white/10 hover:bg-primary"),
        );
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(social.icon))
                .set("alt", "")
                .set("width", 20)
                .set("height", 20),
        );
        html.close("a");
        html.close("li");
    }
    html.close("ul");
    html.close("div");

    html.open("nav", Attrs::new().set("aria-label", t.t("links.title")));
    html.element("h3", Attrs::new().class("mb-4 text-lg font-bold"), t.t("links.title"));
    html.open("ul", Attrs::new().class("flex flex-col gap-2"));
    for link in &FOOTER_LINKS {
        html.open("li", Attrs::new());
        html.element(
            "a",
            Attrs::new()
                .set("href", link.href)
                .class("text-white/70 hover:text-white"),
            t.t(&format!("links.{}", link.label_key)),
        );
        html.close("li");
    }
    html.close("ul");
    html.close("nav");

    html.open("div", Attrs::new());
    html.element("h3", Attrs::new().class("mb-4 text-lg font-bold"), t.t("contact.title"));
    html.open("ul", Attrs::new().class("flex flex-col gap-3"));
    for item in &CONTACT_ITEMS {
        let text = t.t(&format!("contact.{}", item.text_key));
        html.open("li", Attrs::new().class("flex items-center gap-3"));
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(item.icon))
                .set("alt", "")
                .set("width", 20)
                .set("height", 20),
        );
        match item.href(text) {
            Some(href) => {
                html.element(
                    "a",
                    Attrs::new()
                        .set("href", href)
                        .set("dir", "ltr")
                        .class("text-white/70 hover:text-white"),
                    text,
                );
            }
            None => {
                html.element("span", Attrs::new().class("text-white/70"), text);
            }
        }
        html.close("li");
    }
    html.close("ul");
    html.close("div");

    html.close("div");

    let year = ctx.year.to_string();
    html.element(
        "p",
        Attrs::new().class("mt-12 border-t border-white/10 pt-6 text-center text-sm text-white/50"),
        &t.t_args("copyright", &[("year", year.as_str())]),
    );
    html.close("footer");
}
