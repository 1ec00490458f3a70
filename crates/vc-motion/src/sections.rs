#![forbid(unsafe_code)]

//! Entrance animation plans for the animated page sections.
//!
//! Each plan maps element roles (`"title"`, `"cta"`, `"features"`, ...) to
//! the tweens that animate them. The renderer looks roles up while writing
//! markup and emits the tweens as `data-motion-*` attributes.

use std::collections::BTreeMap;

use vc_i18n::Direction;

use crate::context::MotionContext;
use crate::presets::{FadeIn, RevealedText, ScaleIn, SlideFrom, SlideIn, TextReveal};
use crate::split::SplitBy;
use crate::tween::Tween;

/// Animation plan for one section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionAnimations {
    tweens: BTreeMap<&'static str, Vec<Tween>>,
    reveals: BTreeMap<&'static str, RevealedText>,
}

impl SectionAnimations {
    fn add(&mut self, role: &'static str, tweens: Vec<Tween>) {
        self.tweens.entry(role).or_default().extend(tweens);
    }

    fn reveal_text(&mut self, role: &'static str, revealed: RevealedText) {
        self.reveals.insert(role, revealed);
    }

    /// First tween for `role`.
    #[must_use]
    pub fn tween(&self, role: &str) -> Option<&Tween> {
        self.tweens(role).first()
    }

    /// All tweens for `role` (one per element).
    #[must_use]
    pub fn tweens(&self, role: &str) -> &[Tween] {
        self.tweens.get(role).map_or(&[], Vec::as_slice)
    }

    /// Split text for `role`.
    #[must_use]
    pub fn reveal(&self, role: &str) -> Option<&RevealedText> {
        self.reveals.get(role)
    }

    /// Roles with element tweens.
    pub fn roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tweens.keys().copied()
    }

    /// Hero: title reveal, description and image slides, play button
    /// scale, call to action fade.
    #[must_use]
    pub fn hero(ctx: &MotionContext, title: &str) -> Self {
        let mut plan = Self::default();
        plan.reveal_text(
            "title",
            ctx.text_reveal(
                title,
                &TextReveal {
                    delay: 0.2,
                    split_by: SplitBy::Words,
                    ..TextReveal::default()
                },
            ),
        );
        plan.add(
            "description",
            ctx.slide_in(
                1,
                &SlideIn {
                    delay: 0.5,
                    ..SlideIn::default()
                },
            ),
        );
        plan.add(
            "play",
            ctx.scale_in(
                1,
                &ScaleIn {
                    delay: 0.8,
                    ..ScaleIn::default()
                },
            ),
        );
        plan.add(
            "cta",
            ctx.fade_in(
                1,
                &FadeIn {
                    delay: 1.0,
                    y: 20.0,
                    ..FadeIn::default()
                },
            ),
        );
        plan.add(
            "image",
            ctx.slide_in(
                1,
                &SlideIn {
                    from: SlideFrom::Right,
                    duration: 1.0,
                    delay: 0.3,
                    distance: 80.0,
                    ..SlideIn::default()
                },
            ),
        );
        plan.add("line", underline(ctx, "#home"));
        plan
    }

    /// Meeting: the instructor image enters from the reading-start side.
    #[must_use]
    pub fn meeting(
        ctx: &MotionContext,
        title: &str,
        direction: Direction,
        feature_count: usize,
    ) -> Self {
        const TRIGGER: &str = "#meet";
        let mut plan = Self::default();
        plan.reveal_text("title", section_title(ctx, title, 0.2, 1.0, TRIGGER));
        plan.add(
            "subtitle",
            ctx.fade_in(
                1,
                &FadeIn {
                    delay: 0.5,
                    trigger: Some(TRIGGER.into()),
                    ..FadeIn::default()
                },
            ),
        );
        let image_from = if direction.is_rtl() {
            SlideFrom::Right
        } else {
            SlideFrom::Left
        };
        plan.add(
            "image",
            ctx.slide_in(
                1,
                &SlideIn {
                    from: image_from,
                    delay: 0.3,
                    trigger: Some(TRIGGER.into()),
                    ..SlideIn::default()
                },
            ),
        );
        for (role, delay) in [("name", 0.6), ("role", 0.7), ("description", 0.9)] {
            plan.add(role, rise(ctx, 1, 0.6, delay, 30.0, TRIGGER));
        }
        plan.add(
            "rating",
            ctx.fade_in(
                1,
                &FadeIn {
                    duration: 0.6,
                    delay: 0.8,
                    y: 20.0,
                    trigger: Some(TRIGGER.into()),
                    ..FadeIn::default()
                },
            ),
        );
        plan.add("features", rise(ctx, feature_count, 0.5, 1.0, 20.0, TRIGGER));
        plan.add("line", underline(ctx, TRIGGER));
        plan
    }

    /// Course checkout: image, titles, price, staggered form fields and the
    /// submit button.
    #[must_use]
    pub fn course(ctx: &MotionContext, title: &str, form_title: &str, field_count: usize) -> Self {
        const TRIGGER: &str = "#enroll";
        let mut plan = Self::default();
        plan.add(
            "image",
            ctx.slide_in(
                1,
                &SlideIn {
                    delay: 0.2,
                    trigger: Some(TRIGGER.into()),
                    ..SlideIn::default()
                },
            ),
        );
        plan.reveal_text("title", section_title(ctx, title, 0.4, 1.0, TRIGGER));
        plan.add(
            "price",
            ctx.fade_in(
                1,
                &FadeIn {
                    duration: 0.6,
                    delay: 0.6,
                    y: 20.0,
                    trigger: Some(TRIGGER.into()),
                    ..FadeIn::default()
                },
            ),
        );
        plan.reveal_text("form_title", section_title(ctx, form_title, 0.8, 0.8, TRIGGER));
        plan.add(
            "fields",
            ctx.fade_in(
                field_count,
                &FadeIn {
                    duration: 0.6,
                    delay: 1.0,
                    y: 20.0,
                    trigger: Some(TRIGGER.into()),
                    ..FadeIn::default()
                },
            ),
        );
        plan.add(
            "submit",
            ctx.scale_in(
                1,
                &ScaleIn {
                    delay: 1.5,
                    trigger: Some(TRIGGER.into()),
                    ..ScaleIn::default()
                },
            ),
        );
        plan
    }

    /// Plans: title, subtitle, billing toggle and the plan cards.
    #[must_use]
    pub fn plans(ctx: &MotionContext, title: &str, card_count: usize) -> Self {
        const TRIGGER: &str = "#plans";
        let mut plan = Self::default();
        plan.reveal_text("title", section_title(ctx, title, 0.2, 1.0, TRIGGER));
        plan.add(
            "subtitle",
            ctx.fade_in(
                1,
                &FadeIn {
                    delay: 0.5,
                    trigger: Some(TRIGGER.into()),
                    ..FadeIn::default()
                },
            ),
        );
        plan.add(
            "toggle",
            ctx.scale_in(
                1,
                &ScaleIn {
                    delay: 0.8,
                    trigger: Some(TRIGGER.into()),
                    ..ScaleIn::default()
                },
            ),
        );
        let cards = FadeIn {
            delay: 1.0,
            y: 50.0,
            trigger: Some(TRIGGER.into()),
            ..FadeIn::default()
        };
        plan.add("cards", ctx.fade_in(card_count, &cards));
        plan.add("carousel", ctx.fade_in(1, &cards));
        plan.add("line", underline(ctx, TRIGGER));
        plan
    }
}

fn section_title(
    ctx: &MotionContext,
    title: &str,
    delay: f64,
    duration: f64,
    trigger: &str,
) -> RevealedText {
    ctx.text_reveal(
        title,
        &TextReveal {
            duration,
            delay,
            split_by: SplitBy::Words,
            trigger: Some(trigger.into()),
        },
    )
}

/// Upward slide for stacked text.
fn rise(
    ctx: &MotionContext,
    count: usize,
    duration: f64,
    delay: f64,
    distance: f64,
    trigger: &str,
) -> Vec<Tween> {
    ctx.slide_in(
        count,
        &SlideIn {
            from: SlideFrom::Bottom,
            duration,
            delay,
            distance,
            trigger: Some(trigger.into()),
        },
    )
}

/// Decorative underline under a headline word.
fn underline(ctx: &MotionContext, trigger: &str) -> Vec<Tween> {
    ctx.fade_in(
        1,
        &FadeIn {
            delay: 0.5,
            y: 10.0,
            trigger: Some(trigger.into()),
            ..FadeIn::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Motion;
    use crate::presets::SlideFrom;
    use crate::tween::secs;

    #[test]
    fn meeting_image_follows_direction() {
        let ctx = Motion::init();
        let ltr = SectionAnimations::meeting(ctx, "Meet your instructor", Direction::Ltr, 3);
        let rtl = SectionAnimations::meeting(ctx, "تعرّف على مدرستك", Direction::Rtl, 3);
        assert!(ltr.tween("image").is_some_and(|t| t.from.x < 0.0));
        assert!(rtl.tween("image").is_some_and(|t| t.from.x > 0.0));
        assert_eq!(SlideFrom::Left.mirrored(), SlideFrom::Right);
    }

    #[test]
    fn meeting_features_are_staggered() {
        let plan = SectionAnimations::meeting(Motion::init(), "Meet", Direction::Ltr, 3);
        let tenths: Vec<u32> = plan
            .tweens("features")
            .iter()
            .map(|t| (t.delay.as_secs_f64() * 10.0).round() as u32)
            .collect();
        assert_eq!(tenths, vec![10, 11, 12]);
        assert_eq!(plan.tween("rating").map(|t| t.delay), Some(secs(0.8)));
    }

    #[test]
    fn hero_title_is_revealed_by_words() {
        let plan = SectionAnimations::hero(Motion::init(), "Learn English live");
        let title = plan.reveal("title").unwrap();
        assert_eq!(title.tweens.len(), 3);
        assert!(plan.tween("line").is_some_and(|t| t.trigger.is_some()));
        assert!(plan.tween("cta").is_some_and(|t| t.trigger.is_none()));
    }

    #[test]
    fn plans_cards_one_tween_each() {
        let plan = SectionAnimations::plans(Motion::init(), "Choose your plan", 3);
        assert_eq!(plan.tweens("cards").len(), 3);
        assert!(plan.tweens("missing").is_empty());
        assert!(plan.roles().any(|r| r == "toggle"));
    }

    #[test]
    fn course_fields_follow_count() {
        let plan = SectionAnimations::course(Motion::init(), "Course", "Enroll", 4);
        assert_eq!(plan.tweens("fields").len(), 4);
        assert!(plan.reveal("form_title").is_some());
    }
}
