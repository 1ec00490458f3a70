#![forbid(unsafe_code)]

use vc_style::palette::NAVY;

use super::RenderContext;
use crate::content::FaqAccordion;
use crate::html::{Attrs, Markup};

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    let accordion = FaqAccordion::from_catalog(&ctx.root());
    render_accordion(ctx, html, &accordion);
}

/// Section with the items of `accordion`, the open one expanded.
pub fn render_accordion(ctx: &RenderContext<'_>, html: &mut Markup, accordion: &FaqAccordion) {
    let t = ctx.t("faqs");

    html.open(
        "section",
        Attrs::new()
            .set("id", "faqs")
            .class(format!("bg-[{NAVY}] py-20 text-white")),
    );
    html.open("div", Attrs::new().class("container mx-auto max-w-3xl px-4"));
    html.element(
        "h2",
        Attrs::new().class("mb-4 text-center text-3xl font-bold md:text-5xl"),
        t.t("title"),
    );
    html.element(
        "p",
        Attrs::new().class("mb-12 text-center text-[#BCBCBC]"),
        t.t("description"),
    );

    html.open(
        "div",
        Attrs::new()
            .class("flex flex-col gap-4")
            .set("data-accordion", "faqs"),
    );
    for index in 0..accordion.len() {
        let state = accordion.state(index);
        let (question, answer) = FaqAccordion::item_keys(index);
        let panel_id = format!("faq-panel-{index}");
        html.open("div", Attrs::new().class(state.item_classes()));
        html.open(
            "button",
            Attrs::new()
                .set("type", "button")
                .set("id", format!("faq-button-{index}"))
                .set("data-index", index)
                .set("aria-expanded", state.aria_expanded())
                .set("aria-controls", &panel_id)
                .class("flex w-full items-center justify-between gap-4 px-6 py-4 text-start font-medium"),
        );
        html.element("span", Attrs::new(), t.t(&question));
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(state.icon()))
                .set("alt", "")
                .set("width", 20)
                .set("height", 20),
        );
        html.close("button");
        html.open(
            "div",
            Attrs::new()
                .set("id", &panel_id)
                .set("role", "region")
                .set("aria-labelledby", format!("faq-button-{index}"))
                .set("aria-hidden", state.aria_hidden())
                .class(state.panel_classes()),
        );
        html.element("p", Attrs::new().class(state.answer_classes()), t.t(&answer));
        html.close("div");
        html.close("div");
    }
    html.close("div");

    html.close("div");
    html.close("section");
}

#[cfg(test)]
mod tests {
    use vc_i18n::Locale;

    use super::{render, render_accordion};
    use crate::content::FaqAccordion;
    use crate::html::Markup;
    use crate::sections::RenderContext;
    use crate::sections::test_support::render_with;

    #[test]
    fn all_items_start_closed() {
        let html = render_with(Locale::En, render);
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), 5);
        assert!(!html.contains("aria-expanded=\"true\""));
        assert!(html.contains("Do I need a placement test?"));
        assert!(html.contains("bg-[#061C3D]"));
    }

    #[test]
    fn open_item_is_expanded() {
        fn second_open(ctx: &RenderContext<'_>, html: &mut Markup) {
            let mut accordion = FaqAccordion::from_catalog(&ctx.root());
            accordion.toggle(1);
            render_accordion(ctx, html, &accordion);
        }
        let html = render_with(Locale::En, second_open);
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert_eq!(html.matches("aria-hidden=\"false\"").count(), 1);
        assert!(html.contains("minus.png"));
        assert!(html.contains("bg-[#ffd27a]"));
    }

    #[test]
    fn arabic_has_same_item_count() {
        let html = render_with(Locale::Ar, render);
        assert_eq!(html.matches("data-index=").count(), 5);
    }
}
