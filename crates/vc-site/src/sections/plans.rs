#![forbid(unsafe_code)]

//! Pricing: billing toggle, desktop grid and mobile carousel.

use vc_carousel::CarouselOptions;
use vc_i18n::Translator;
use vc_motion::SectionAnimations;
use vc_style::plan::{BILLING_TRACK, PLAN_FEATURE, SAVINGS_NOTE};
use vc_style::{
    Activity, BILLING_OPTION, mirror_for, plan_button_classes, plan_content_classes,
    plan_price_classes, plan_wrapper_classes,
};

use super::carousel::StaticCarousel;
use super::{RenderContext, revealed_text};
use crate::content::{BillingPeriod, Plan, best_save_percent, popular_index};
use crate::html::{Attrs, Markup};

const BACKGROUND: &str = "/assets/images/plans/plans-bg.png";
const CHECK_ICON: &str = "/assets/icons/plans/check.png";
const CROSS_ICON: &str = "/assets/icons/plans/cross.png";

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    let t = ctx.t("plans");
    let plans = &ctx.content.plans;
    let title = t.t("title");
    let motion = SectionAnimations::plans(ctx.motion, title, plans.len());
    let period = BillingPeriod::default();
    let popular = popular_index(plans);

    html.open(
        "section",
        Attrs::new()
            .set("id", "plans")
            .set("data-billing", period.as_str())
            .class("relative overflow-hidden bg-[#0B0B0F] py-20 text-white"),
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
    html.open("div", Attrs::new().class("container mx-auto px-4 text-center"));
    revealed_text(
        html,
        "h2",
        Attrs::new().class("mb-4 text-3xl font-bold md:text-5xl"),
        motion.reveal("title"),
        title,
    );
    html.open(
        "span",
        Attrs::new()
            .class("mx-auto mb-4 block h-1 w-24 rounded-full bg-primary")
            .motion(motion.tween("line")),
    );
    html.close("span");
    html.element(
        "p",
        Attrs::new()
            .class("mb-10 text-white/70")
            .motion(motion.tween("subtitle")),
        t.t("description"),
    );

    html.open("div", Attrs::new().motion(motion.tween("toggle")));
    html.open(
        "div",
        Attrs::new().class(BILLING_TRACK).set("role", "group"),
    );
    for option in BillingPeriod::ALL {
        let active = option == period;
        html.element(
            "button",
            Attrs::new()
                .set("type", "button")
                .set("data-period", option.as_str())
                .set("aria-pressed", active)
                .class(BILLING_OPTION.resolve(Activity::from_bool(active))),
            t.t(option.label_key()),
        );
    }
    html.close("div");
    let percent = best_save_percent(plans);
    if percent > 0 {
        html.element(
            "p",
            Attrs::new().class(format!("-mt-8 mb-10 {SAVINGS_NOTE}")),
            &t.t_args("percent", &[("percent", percent.to_string().as_str())]),
        );
    }
    html.close("div");

    let cards = motion.tweens("cards");
    html.open(
        "div",
        Attrs::new().class("hidden items-stretch gap-8 md:grid md:grid-cols-3"),
    );
    for (index, plan) in plans.iter().enumerate() {
        html.open("div", Attrs::new().motion(cards.get(index)));
        card(ctx, html, &t, plan, period, Activity::from_bool(Some(index) == popular));
        html.close("div");
    }
    html.close("div");

    let state = StaticCarousel::settle(
        plans.len(),
        CarouselOptions::pricing(popular),
        ctx.config.carousel.plans_slides_per_view,
        &ctx.config.carousel,
    );
    html.open(
        "div",
        Attrs::new()
            .class("overflow-hidden md:hidden")
            .set("dir", ctx.direction().as_str())
            .set("data-carousel", "plans")
            .extend(&state.engine_attributes)
            .set("data-start-index", state.selected)
            .motion(motion.tween("carousel")),
    );
    html.open("div", Attrs::new().class("flex"));
    for (index, plan) in plans.iter().enumerate() {
        html.open(
            "div",
            Attrs::new()
                .class("min-w-0 shrink-0 grow-0 basis-auto w-[85%] px-3")
                .set("data-slide", index),
        );
        html.open(
            "div",
            Attrs::new()
                .class("embla__slide__content h-full")
                .style(state.style(index)),
        );
        card(ctx, html, &t, plan, period, Activity::from_bool(index == state.selected));
        html.close("div");
        html.close("div");
    }
    html.close("div");
    html.close("div");

    html.close("div");
    html.close("section");
}

fn card(
    ctx: &RenderContext<'_>,
    html: &mut Markup,
    t: &Translator<'_>,
    plan: &Plan,
    period: BillingPeriod,
    state: Activity,
) {
    let emphasis = plan.emphasis();
    html.open(
        "div",
        Attrs::new()
            .class(plan_wrapper_classes(emphasis))
            .set("data-plan", plan.id),
    );
    html.open(
        "div",
        Attrs::new().class(plan_content_classes(emphasis, state)),
    );
    if plan.popular {
        html.element(
            "span",
            Attrs::new()
                .class("mb-4 self-center rounded-full bg-white/10 px-4 py-1 text-xs font-medium"),
            t.t("popular"),
        );
    }
    html.element("h3", Attrs::new().class("mb-4 text-2xl font-bold"), t.t(plan.name_key));
    html.open("div", Attrs::new().class("mb-6 flex items-baseline justify-center gap-2"));
    html.element(
        "span",
        Attrs::new()
            .class(plan_price_classes(emphasis))
            .set("data-monthly", plan.monthly_price)
            .set("data-yearly", plan.yearly_price),
        &plan.price(period).to_string(),
    );
    html.element("span", Attrs::new().class("text-white/70"), t.t("currency"));
    html.element(
        "span",
        Attrs::new()
            .class("text-sm text-white/50")
            .set("data-period-monthly", t.t(BillingPeriod::Monthly.period_key()))
            .set("data-period-yearly", t.t(BillingPeriod::Yearly.period_key())),
        t.t(period.period_key()),
    );
    html.close("div");

    html.open("ul", Attrs::new().class("mb-8 flex flex-1 flex-col gap-3 text-start"));
    for feature in &plan.features {
        html.open(
            "li",
            Attrs::new().class(
                PLAN_FEATURE
                    .resolve(Activity::from_bool(feature.included))
                    .with("flex items-center gap-3"),
            ),
        );
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(if feature.included { CHECK_ICON } else { CROSS_ICON }))
                .set("alt", "")
                .set("width", 18)
                .set("height", 18),
        );
        html.text(t.t(&format!("features.{}", feature.key)));
        html.close("li");
    }
    html.close("ul");

    html.element(
        "a",
        Attrs::new()
            .set("href", "#contact")
            .class(plan_button_classes(plan.button_variant)),
        t.t(&format!("buttons.{}", plan.button_key)),
    );
    html.close("div");
    html.close("div");
}

#[cfg(test)]
mod tests {
    use vc_i18n::Locale;

    use super::render;
    use crate::sections::test_support::render_with;

    #[test]
    fn monthly_prices_and_savings_note() {
        let html = render_with(Locale::En, render);
        assert!(html.contains("data-billing=\"monthly\""));
        assert!(html.contains("data-monthly=\"499\" data-yearly=\"4990\">499<"));
        assert!(html.contains("Save 17% with yearly billing"));
        assert!(html.contains("aria-pressed=\"true\""));
    }

    #[test]
    fn popular_plan_is_highlighted_in_both_layouts() {
        let html = render_with(Locale::En, render);
        assert_eq!(html.matches("Most popular").count(), 2);
        assert_eq!(html.matches("transform scale-105").count(), 2);
        assert!(html.contains("data-start-index=\"1\""));
        assert!(html.contains("style=\"transform: scale(1); opacity: 1\""));
    }

    #[test]
    fn card_lists_each_feature() {
        let html = render_with(Locale::En, render);
        assert_eq!(html.matches("<li ").count(), 36);
        assert_eq!(html.matches("cross.png").count(), 12);
        assert!(render_with(Locale::Ar, render).contains("scale-x-[-1]"));
    }
}
