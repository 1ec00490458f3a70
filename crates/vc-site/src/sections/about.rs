#![forbid(unsafe_code)]

use vc_style::about::{ABOUT_DESCRIPTION, ABOUT_ICON, ABOUT_TITLE};
use vc_style::{
    Activity, ButtonSize, ButtonVariant, DEFAULT_BUTTON_HREF, DotIndicator, about_card_classes,
};

use super::carousel::{StaticCarousel, about_options};
use super::{RenderContext, highlighted_title, link_button};
use crate::html::{Attrs, Markup};

/// Cards visible at once on the widest layout.
const ABOUT_SLIDES_PER_VIEW: f64 = 3.0;

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    let t = ctx.t("about");
    let cards = &ctx.content.about_cards;
    let options = about_options(&ctx.config.carousel);
    let dir = options.direction.resolve(ctx.direction());
    let state = StaticCarousel::settle(
        cards.len(),
        options,
        ABOUT_SLIDES_PER_VIEW,
        &ctx.config.carousel,
    );

    html.open(
        "section",
        Attrs::new().set("id", "about").class("py-20"),
    );
    html.open("div", Attrs::new().class("container mx-auto px-4 text-center"));
    highlighted_title(
        html,
        &t,
        "mb-4 text-3xl font-bold text-[#061C3D] md:text-5xl",
        None,
    );
    html.element("p", Attrs::new().class("mb-12 text-[#BCBCBC]"), t.t("subtitle"));

    html.open(
        "div",
        Attrs::new()
            .class("overflow-hidden")
            .set("dir", dir.as_str())
            .set("data-carousel", "about")
            .extend(&state.engine_attributes)
            .set_if(
                state.autoplay_ms.is_some(),
                "data-autoplay-ms",
                state.autoplay_ms.unwrap_or_default(),
            ),
    );
    html.open("div", Attrs::new().class("flex"));
    for (index, card) in cards.iter().enumerate() {
        let activity = Activity::from_bool(index == state.selected);
        html.open(
            "div",
            Attrs::new()
                .class("min-w-0 flex-[0_0_100%] sm:flex-[0_0_50%] lg:flex-[0_0_33.333%]")
                .set("data-slide", index),
        );
        html.open(
            "article",
            Attrs::new().class(about_card_classes(&card.palette, activity)),
        );
        html.element(
            "h3",
            Attrs::new().class(ABOUT_TITLE.resolve(activity)),
            t.t(&card.title_key()),
        );
        html.element(
            "p",
            Attrs::new().class(ABOUT_DESCRIPTION.resolve(activity)),
            t.t(&card.description_key()),
        );
        html.open(
            "div",
            Attrs::new().class(format!(
                "mx-auto flex items-center justify-center rounded-full p-4 {}",
                card.palette.circle_class()
            )),
        );
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(&card.icon.path()))
                .set("alt", card.icon.as_str())
                .class(ABOUT_ICON.resolve(activity)),
        );
        html.close("div");
        html.close("article");
        html.close("div");
    }
    html.close("div");
    html.close("div");

    html.open(
        "div",
        Attrs::new().class("mt-8 flex justify-center gap-2"),
    );
    for dot in &state.dots {
        html.open(
            "button",
            Attrs::new()
                .set("type", "button")
                .set("data-index", dot.index)
                .set("aria-label", dot.index + 1)
                .set_if(dot.active, "aria-current", "true")
                .class(DotIndicator::About.classes(Activity::from_bool(dot.active))),
        );
        html.close("button");
    }
    html.close("div");

    html.open("div", Attrs::new().class("mt-10"));
    link_button(
        html,
        t.t("cta"),
        DEFAULT_BUTTON_HREF,
        ButtonVariant::Primary,
        ButtonSize::Lg,
        Attrs::new(),
    );
    html.close("div");

    html.close("div");
    html.close("section");
}
