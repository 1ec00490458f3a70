#![forbid(unsafe_code)]

use vc_motion::SectionAnimations;
use vc_style::{ButtonSize, ButtonVariant, mirror_for};

use super::{RenderContext, link_button, revealed_text};
use crate::html::{Attrs, Markup};

const HERO_IMAGE: &str = "/assets/images/hero/hero.png";
const PLAY_ICON: &str = "/assets/icons/hero/play.png";
const BACKGROUND: &str = "/assets/images/hero/hero-bg.png";

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    let t = ctx.t("hero");
    let title = t.t("title");
    let motion = SectionAnimations::hero(ctx.motion, title);

    html.open(
        "section",
        Attrs::new()
            .set("id", "home")
            .class("relative overflow-hidden pt-16 pb-24"),
    );
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(BACKGROUND))
            .set("alt", "")
            .class(format!(
                "absolute inset-0 -z-10 h-full w-full object-cover {}",
                mirror_for(ctx.direction())
            )),
    );
    html.open(
        "div",
        Attrs::new().class("container mx-auto grid items-center gap-12 px-4 lg:grid-cols-2"),
    );

    html.open("div", Attrs::new().class("flex flex-col gap-6"));
    revealed_text(
        html,
        "h1",
        Attrs::new().class("text-4xl font-bold leading-tight text-[#061C3D] lg:text-6xl"),
        motion.reveal("title"),
        title,
    );
    html.element(
        "p",
        Attrs::new()
            .class("text-lg text-[#BCBCBC]")
            .motion(motion.tween("description")),
        t.t("description"),
    );
    html.open("div", Attrs::new().class("flex flex-wrap items-center gap-6"));
    html.open("div", Attrs::new().motion(motion.tween("cta")));
    link_button(
        html,
        t.t("cta"),
        "#work",
        ButtonVariant::Primary,
        ButtonSize::Lg,
        Attrs::new(),
    );
    html.close("div");
    html.open(
        "a",
        Attrs::new()
            .set("href", "#video")
            .class("flex items-center gap-3 font-medium text-[#061C3D]")
            .motion(motion.tween("play")),
    );
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(PLAY_ICON))
            .set("alt", "")
            .set("width", 48)
            .set("height", 48),
    );
    html.text(t.t("watch"));
    html.close("a");
    html.close("div");
    html.close("div");

    html.open("div", Attrs::new().class("relative").motion(motion.tween("image")));
    html.void(
        "img",
        Attrs::new()
            .set("src", ctx.asset(HERO_IMAGE))
            .set("alt", title)
            .set("width", 600)
            .set("height", 600)
            .class("mx-auto h-auto w-full max-w-xl"),
    );
    html.open(
        "span",
        Attrs::new()
            .class("absolute -bottom-4 left-1/2 h-1 w-32 -translate-x-1/2 rounded-full bg-primary")
            .motion(motion.tween("line")),
    );
    html.close("span");
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
    fn hero_has_cta_and_animated_title() {
        let html = render_with(Locale::En, render);
        assert!(html.contains("id=\"home\""));
        assert!(html.contains("href=\"#work\""));
        assert!(html.contains("href=\"#video\""));
        assert!(html.contains("aria-label=\"Learn English live with teachers who care\""));
        assert!(html.contains("data-motion-ease=\"back.out(1.7)\""));
    }

    #[test]
    fn rtl_mirrors_background() {
        assert!(render_with(Locale::Ar, render).contains("scale-x-[-1]"));
        assert!(!render_with(Locale::En, render).contains("scale-x-[-1]"));
    }
}
