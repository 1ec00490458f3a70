#![forbid(unsafe_code)]

use vc_carousel::CarouselOptions;
use vc_style::{Activity, AvatarDotKind, ClassList, DotIndicator};

use super::carousel::{StaticCarousel, reviews_options};
use super::{RenderContext, highlighted_title, stars};
use crate::content::{TextReview, VideoReview};
use crate::html::{Attrs, Markup};

const ARROW_LEFT: &str = "/assets/icons/reviews/arrow-left.png";
const ARROW_RIGHT: &str = "/assets/icons/reviews/arrow-right.png";
const PLAY_ICON: &str = "/assets/icons/hero/play.png";

/// Text reviews shown one at a time.
const TEXT_SLIDES_PER_VIEW: f64 = 1.0;

pub fn render(ctx: &RenderContext<'_>, html: &mut Markup) {
    let t = ctx.t("reviews");

    html.open("section", Attrs::new().set("id", "reviews").class("bg-[#FFF8F5] py-20"));
    html.open("div", Attrs::new().class("container mx-auto px-4 text-center"));
    highlighted_title(
        html,
        &t,
        "mb-4 text-3xl font-bold text-[#061C3D] md:text-5xl",
        None,
    );
    html.element("p", Attrs::new().class("mb-12 text-[#BCBCBC]"), t.t("subtitle"));
    render_text_reviews(ctx, html, &ctx.content.text_reviews);
    html.close("div");

    html.open("div", Attrs::new().set("id", "video").class("mt-16"));
    render_video_reviews(ctx, html, &ctx.content.video_reviews);
    html.close("div");
    html.close("section");
}

fn render_text_reviews(ctx: &RenderContext<'_>, html: &mut Markup, reviews: &[TextReview]) {
    let t = ctx.t("reviews");
    let options = reviews_options(&ctx.config.carousel);
    let dir = options.direction.resolve(ctx.direction());
    let state = StaticCarousel::settle(
        reviews.len(),
        options,
        TEXT_SLIDES_PER_VIEW,
        &ctx.config.carousel,
    );

    if let Some(neighbors) = state.neighbors {
        html.open(
            "div",
            Attrs::new()
                .class("mb-8 flex items-center justify-center gap-4")
                .set("data-avatars", "reviews"),
        );
        let row = [
            (neighbors.prev, AvatarDotKind::Small),
            (neighbors.current, AvatarDotKind::Highlight),
            (neighbors.next, AvatarDotKind::Small),
        ];
        for (index, kind) in row {
            let Some(review) = reviews.get(index) else {
                continue;
            };
            html.open(
                "button",
                Attrs::new()
                    .set("type", "button")
                    .set("data-index", index)
                    .set("aria-label", t.t(&review.field_key("name")))
                    .class(kind.classes())
                    .style(kind.inline_size()),
            );
            html.void(
                "img",
                Attrs::new()
                    .set("src", ctx.asset(review.avatar))
                    .set("alt", "")
                    .class("h-full w-full object-cover"),
            );
            html.close("button");
        }
        html.close("div");
    }

    html.open("div", Attrs::new().class("relative mx-auto max-w-3xl"));
    arrow(html, t.t("previous"), &ctx.asset(ARROW_LEFT), "prev");
    html.open(
        "div",
        Attrs::new()
            .class("overflow-hidden")
            .set("dir", dir.as_str())
            .set("data-carousel", "reviews")
            .extend(&state.engine_attributes)
            .set_if(
                state.autoplay_ms.is_some(),
                "data-autoplay-ms",
                state.autoplay_ms.unwrap_or_default(),
            ),
    );
    html.open("div", Attrs::new().class("flex"));
    for (index, review) in reviews.iter().enumerate() {
        html.open(
            "article",
            Attrs::new()
                .class("min-w-0 flex-[0_0_100%] px-4")
                .set("data-slide", index)
                .set_if(index != state.selected, "aria-hidden", "true"),
        );
        html.element(
            "h3",
            Attrs::new().class("text-xl font-bold text-[#061C3D]"),
            t.t(&review.field_key("name")),
        );
        html.element(
            "p",
            Attrs::new().class("text-sm text-[#BCBCBC]"),
            t.t(&review.field_key("role")),
        );
        stars(ctx, html, review.stars(), Attrs::new().class("my-4 justify-center"));
        let message = t.t(&review.field_key("message"));
        match (message.is_empty(), review.image) {
            (true, Some(image)) => {
                html.void(
                    "img",
                    Attrs::new()
                        .set("src", ctx.asset(image))
                        .set("alt", t.t(&review.field_key("name")))
                        .class("mx-auto h-auto max-w-full rounded-2xl"),
                );
            }
            _ => {
                html.open(
                    "blockquote",
                    Attrs::new().class("rounded-2xl bg-white p-6 text-[#1E1E1E] shadow-md"),
                );
                html.element("p", Attrs::new(), message);
                let time = t.t(&review.field_key("time"));
                if !time.is_empty() {
                    html.element(
                        "span",
                        Attrs::new().class("mt-3 block text-xs text-[#BCBCBC]"),
                        time,
                    );
                }
                html.close("blockquote");
            }
        }
        html.close("article");
    }
    html.close("div");
    html.close("div");
    arrow(html, t.t("next"), &ctx.asset(ARROW_RIGHT), "next");
    html.close("div");

    html.open("div", Attrs::new().class("mt-8 flex justify-center gap-2"));
    for dot in &state.dots {
        let position = (dot.index + 1).to_string();
        html.open(
            "button",
            Attrs::new()
                .set("type", "button")
                .set("data-index", dot.index)
                .set("aria-label", t.t_args("goTo", &[("index", position.as_str())]))
                .set_if(dot.active, "aria-current", "true")
                .class(DotIndicator::Reviews.classes(Activity::from_bool(dot.active))),
        );
        html.close("button");
    }
    html.close("div");
}

fn arrow(html: &mut Markup, label: &str, icon: &str, action: &str) {
    let side = if action == "prev" { "start-0" } else { "end-0" };
    html.open(
        "button",
        Attrs::new()
            .set("type", "button")
            .set("aria-label", label)
            .set("data-action", action)
            .class(format!(
                "absolute top-1/2 z-10 -translate-y-1/2 rounded-full bg-white p-3 shadow-md {side}"
            )),
    );
    html.void(
        "img",
        Attrs::new()
            .set("src", icon)
            .set("alt", "")
            .set("width", 20)
            .set("height", 20)
            .class("rtl:rotate-180"),
    );
    html.close("button");
}

fn render_video_reviews(ctx: &RenderContext<'_>, html: &mut Markup, reviews: &[VideoReview]) {
    let t = ctx.t("reviews.videoReviews");
    let options = CarouselOptions::video_reviews();
    let dir = options.direction.resolve(ctx.direction());
    let state = StaticCarousel::settle(
        reviews.len(),
        options,
        ctx.config.carousel.video_slides_per_view,
        &ctx.config.carousel,
    );

    html.open(
        "div",
        Attrs::new()
            .class("overflow-hidden")
            .set("dir", dir.as_str())
            .set("data-carousel", "video-reviews")
            .extend(&state.engine_attributes),
    );
    html.open("div", Attrs::new().class("flex"));
    for (index, review) in reviews.iter().enumerate() {
        let active = index == state.selected;
        let card = ClassList::new()
            .with("relative overflow-hidden rounded-3xl transition-all duration-300")
            .with_if(active, "opacity-100 scale-[1.02]")
            .with_if(!active, "opacity-90 scale-95");
        html.open(
            "div",
            Attrs::new()
                .class("min-w-0 shrink-0 grow-0 basis-auto w-[80%] px-3 sm:w-[45%] lg:w-[26%]")
                .set("data-slide", index),
        );
        html.open(
            "div",
            Attrs::new()
                .class("embla__slide__content")
                .style(state.style(index)),
        );
        html.open("div", Attrs::new().class(card));
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(review.thumbnail))
                .set("alt", t.t(&review.field_key("name")))
                .set("loading", "lazy")
                .class("aspect-[3/4] h-full w-full object-cover"),
        );
        html.open(
            "button",
            Attrs::new()
                .set("type", "button")
                .set("aria-label", t.t("play"))
                .set("data-youtube-id", review.youtube_id)
                .set("data-embed-url", review.embed_url())
                .class("absolute inset-0 m-auto h-16 w-16"),
        );
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(PLAY_ICON))
                .set("alt", "")
                .set("width", 64)
                .set("height", 64),
        );
        html.close("button");
        html.open(
            "div",
            Attrs::new().class(
                "absolute inset-x-0 bottom-0 flex items-center gap-3 bg-gradient-to-t from-black/70 p-4 text-white",
            ),
        );
        html.void(
            "img",
            Attrs::new()
                .set("src", ctx.asset(review.avatar))
                .set("alt", "")
                .set("width", 40)
                .set("height", 40)
                .class("rounded-full"),
        );
        html.open("div", Attrs::new().class("text-start"));
        html.element(
            "p",
            Attrs::new().class("font-bold"),
            t.t(&review.field_key("name")),
        );
        html.element(
            "p",
            Attrs::new().class("text-xs opacity-80"),
            t.t(&review.field_key("timeAgo")),
        );
        html.close("div");
        stars(
            ctx,
            html,
            review.rating.min(crate::content::MAX_RATING),
            Attrs::new().class("ms-auto"),
        );
        html.close("div");
        html.close("div");
        html.close("div");
        html.close("div");
    }
    html.close("div");
    html.close("div");

    html.open(
        "div",
        Attrs::new()
            .set("id", "video-modal")
            .set("role", "dialog")
            .set("aria-modal", "true")
            .flag("hidden")
            .class("fixed inset-0 z-50 flex items-center justify-center bg-black/80"),
    );
    html.element(
        "button",
        Attrs::new()
            .set("type", "button")
            .set("data-action", "close")
            .set("aria-label", t.t("close"))
            .class("absolute end-6 top-6 text-3xl text-white"),
        "×",
    );
    html.open(
        "div",
        Attrs::new()
            .flag("data-modal-frame")
            .class("aspect-video w-full max-w-4xl"),
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
    fn text_reviews_show_avatar_row_and_dots() {
        let html = render_with(Locale::En, render);
        assert!(html.contains("id=\"reviews\""));
        assert!(html.contains("data-autoplay-ms=\"6000\""));
        assert!(html.contains("width: 96px; height: 96px"));
        assert_eq!(html.matches("width: 48px; height: 48px").count(), 2);
        assert!(html.contains("aria-label=\"Go to review 4\""));
        assert!(html.contains("aria-label=\"Previous review\""));
    }

    #[test]
    fn empty_message_falls_back_to_image() {
        let html = render_with(Locale::En, render);
        assert!(html.contains("review-3.png"));
        assert_eq!(html.matches("<blockquote").count(), 3);
    }

    #[test]
    fn video_carousel_is_always_left_to_right() {
        let html = render_with(Locale::Ar, render);
        let video = html.split("data-carousel=\"video-reviews\"").next().unwrap();
        assert!(video.ends_with("dir=\"ltr\" "));
        assert!(html.contains("style=\"transform: scale(1); opacity: 1\""));
        assert_eq!(html.matches("data-youtube-id=").count(), 6);
        assert!(html.contains("id=\"video-modal\""));
    }
}
