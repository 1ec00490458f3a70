#![forbid(unsafe_code)]

use vc_motion::SectionAnimations;
use vc_style::text_start;

use super::{RenderContext, revealed_text};
use crate::html::{Attrs, Markup};

const INSTRUCTOR_IMAGE: &str = "/assets/images/meeting/instructor.png";
const CHECK_ICON: &str = "/assets/icons/meeting/check.png";
const RATING_ICON: &str = "/assets/icons/reviews/star.png";

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    let t = ctx.t("meeting");
    let title = t.t("title");
    let feature_count = t.item_count("instructor.features");
    let motion = SectionAnimations::meeting(ctx.motion, title, ctx.direction(), feature_count);

    html.open("section", Attrs::new().set("id", "meet").class("bg-[#FFF8F5] py-20"));
    html.open("div", Attrs::new().class("container mx-auto px-4"));

    html.open("div", Attrs::new().class("mb-12 text-center"));
    revealed_text(
        html,
        "h2",
        Attrs::new().class("text-3xl font-bold text-[#061C3D] md:text-5xl"),
        motion.reveal("title"),
        title,
    );
    html.open(
        "span",
        Attrs::new()
            .class("mx-auto mt-3 block h-1 w-24 rounded-full bg-primary")
            .motion(motion.tween("line")),
    );
    html.close("span");
    html.element(
        "p",
        Attrs::new()
            .class("mt-4 text-[#BCBCBC]")
            .motion(motion.tween("subtitle")),
        t.t("subtitle"),
    );
    html.close("div");

    html.open("div", Attrs::new().class("grid items-center gap-12 lg:grid-cols-2"));
    html.open("div", Attrs::new().motion(motion.tween("image")));
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(INSTRUCTOR_IMAGE))
            .set("alt", t.t("instructor.name"))
            .set("width", 520)
            .set("height", 560)
            .class("mx-auto h-auto w-full max-w-md rounded-3xl"),
    );
    html.close("div");

    html.open(
        "div",
        Attrs::new().class(format!("flex flex-col gap-4 {}", text_start(ctx.direction()))),
    );
    html.element(
        "h3",
        Attrs::new()
            .class("text-2xl font-bold text-[#061C3D]")
            .motion(motion.tween("name")),
        t.t("instructor.name"),
    );
    html.element(
        "p",
        Attrs::new()
            .class("font-medium text-primary")
            .motion(motion.tween("role")),
        t.t("instructor.role"),
    );
    html.open(
        "div",
        Attrs::new()
            .class("flex items-center gap-2 text-sm text-[#1E1E1E]")
            .motion(motion.tween("rating")),
    );
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(RATING_ICON))
            .set("alt", "")
            .set("width", 16)
            .set("height", 16),
    );
    html.text(t.t("instructor.rating"));
    html.close("div");
    html.element(
        "p",
        Attrs::new()
            .class("leading-8 text-[#1E1E1E]")
            .motion(motion.tween("description")),
        t.t("instructor.description"),
    );

    let features = motion.tweens("features");
    html.open("ul", Attrs::new().class("flex flex-col gap-3"));
    for index in 0..feature_count {
        html.open(
            "li",
            Attrs::new()
                .class("flex items-center gap-3")
                .motion(features.get(index)),
        );
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(CHECK_ICON))
                .set("alt", "")
                .set("width", 20)
                .set("height", 20),
        );
        html.element(
            "span",
            Attrs::new(),
            t.t(&format!("instructor.features.{index}")),
        );
        html.close("li");
    }
    html.close("ul");
    html.close("div");

    html.close("div");
    html.close("div");
    html.close("section");
}

#[cfg(test)]
mod tests {
    use vc_i18n::Locale;

    use super::render;
    use crate::sections::test_support::render_with;

    #[test]
    fn lists_every_feature_with_motion() {
        let html = render_with(Locale::En, render);
        assert!(html.contains("id=\"meet\""));
        assert_eq!(html.matches("<li ").count(), 3);
        assert!(html.contains("Certified CELTA trainer"));
        assert!(html.contains("data-motion-trigger=\"#meet\""));
    }

    #[test]
    fn image_enters_from_reading_start() {
        let en = render_with(Locale::En, render);
        let ar = render_with(Locale::Ar, render);
        assert!(en.contains("data-motion-from=\"opacity:0;x:-50;y:0;scale:1\""));
        assert!(ar.contains("data-motion-from=\"opacity:0;x:50;y:0;scale:1\""));
        assert!(ar.contains("text-right"));
        assert!(en.contains("text-left"));
    }
}
