#![forbid(unsafe_code)]

//! Entrance animation presets.
//!
//! | Preset | Default from state | Duration | Easing | Start |
//! |--------|--------------------|----------|--------|-------|
//! | fade in | opacity 0, y 30 | 0.8 s | power2.out | `top 60%` |
//! | text reveal | opacity 0, y 20 per span | 1 s total | power2.out | `top 80%` |
//! | scale in | opacity 0, scale 0.8 | 0.6 s | back.out(1.7) | `top 80%` |
//! | slide in | opacity 0, 50 px off-axis | 0.8 s | power2.out | `top 60%` |
//!
//! Presets that animate several elements offset each one by 0.1 s.
//! Fade and slide presets only get a scroll trigger when a trigger
//! selector is given; otherwise they start on load.
//!
//! Presets are reached through [`crate::MotionContext`].

use std::time::Duration;

use crate::easing::Easing;
use crate::split::{SplitBy, SplitText};
use crate::trigger::{END_BOTTOM_20, START_TOP_60, START_TOP_80, ScrollTrigger, TriggerPosition};
use crate::tween::{Props, Tween, secs};

/// Delay added per element in multi-element presets, in seconds.
pub const ELEMENT_STAGGER: f64 = 0.1;

/// Delay between text reveal spans, in seconds.
pub const SPAN_STAGGER: f64 = 0.05;

fn element_delay(base: f64, index: usize) -> Duration {
    secs(base + index as f64 * ELEMENT_STAGGER)
}

/// Fade-in options.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeIn {
    /// Seconds.
    pub duration: f64,
    /// Seconds before the first element starts.
    pub delay: f64,
    /// Initial vertical offset.
    pub y: f64,
    /// Initial horizontal offset.
    pub x: f64,
    /// Selector that activates the tween on scroll.
    pub trigger: Option<String>,
    /// Trigger start.
    pub start: TriggerPosition,
    /// Trigger end.
    pub end: TriggerPosition,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self {
            duration: 0.8,
            delay: 0.0,
            y: 30.0,
            x: 0.0,
            trigger: None,
            start: START_TOP_60,
            end: END_BOTTOM_20,
        }
    }
}

pub(crate) fn fade_in(count: usize, options: &FadeIn) -> Vec<Tween> {
    let trigger = options.trigger.as_ref().map(|selector| {
        ScrollTrigger::new(options.start)
            .until(options.end)
            .on(selector.clone())
    });
    (0..count)
        .map(|index| {
            Tween::new(
                Props::hidden_at(options.x, options.y),
                Props::IDENTITY,
                secs(options.duration),
            )
            .delayed(element_delay(options.delay, index))
            .triggered(trigger.clone())
        })
        .collect()
}

/// Text reveal options.
#[derive(Debug, Clone, PartialEq)]
pub struct TextReveal {
    /// Total seconds, divided evenly between spans.
    pub duration: f64,
    /// Seconds before the first span starts.
    pub delay: f64,
    /// Split unit.
    pub split_by: SplitBy,
    /// Selector that activates the tween; defaults to the element itself.
    pub trigger: Option<String>,
}

impl Default for TextReveal {
    fn default() -> Self {
        Self {
            duration: 1.0,
            delay: 0.0,
            split_by: SplitBy::Words,
            trigger: None,
        }
    }
}

/// Split text with one tween per span.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealedText {
    /// The spans.
    pub text: SplitText,
    /// Tween for each span, in order.
    pub tweens: Vec<Tween>,
}

pub(crate) fn text_reveal(text: &str, options: &TextReveal) -> RevealedText {
    let split = SplitText::new(text, options.split_by);
    let per_span = if split.is_empty() {
        0.0
    } else {
        options.duration / split.len() as f64
    };
    let mut trigger = ScrollTrigger::new(START_TOP_80).until(END_BOTTOM_20);
    if let Some(selector) = &options.trigger {
        trigger = trigger.on(selector.clone());
    }
    let tweens = (0..split.len())
        .map(|index| {
            Tween::new(Props::hidden_at(0.0, 20.0), Props::IDENTITY, secs(per_span))
                .delayed(secs(options.delay + index as f64 * SPAN_STAGGER))
                .triggered(Some(trigger.clone()))
        })
        .collect();
    RevealedText {
        text: split,
        tweens,
    }
}

/// Scale-in options.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleIn {
    /// Seconds.
    pub duration: f64,
    /// Seconds before the first element starts.
    pub delay: f64,
    /// Initial scale.
    pub scale_from: f64,
    /// Selector that activates the tween; defaults to the element itself.
    pub trigger: Option<String>,
}

impl Default for ScaleIn {
    fn default() -> Self {
        Self {
            duration: 0.6,
            delay: 0.0,
            scale_from: 0.8,
            trigger: None,
        }
    }
}

pub(crate) fn scale_in(count: usize, options: &ScaleIn) -> Vec<Tween> {
    let mut trigger = ScrollTrigger::new(START_TOP_80);
    if let Some(selector) = &options.trigger {
        trigger = trigger.on(selector.clone());
    }
    let from = Props {
        scale: options.scale_from,
        ..Props::HIDDEN
    };
    (0..count)
        .map(|index| {
            Tween::new(from, Props::IDENTITY, secs(options.duration))
                .delayed(element_delay(options.delay, index))
                .eased(Easing::back_out())
                .triggered(Some(trigger.clone()))
        })
        .collect()
}

/// Side a slide-in enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideFrom {
    /// From the left.
    #[default]
    Left,
    /// From the right.
    Right,
    /// From above.
    Top,
    /// From below.
    Bottom,
}

impl SlideFrom {
    /// Mirror left and right.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            other => other,
        }
    }

    const fn offset(self, distance: f64) -> (f64, f64) {
        match self {
            Self::Left => (-distance, 0.0),
            Self::Right => (distance, 0.0),
            Self::Top => (0.0, -distance),
            Self::Bottom => (0.0, distance),
        }
    }
}

/// Slide-in options.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideIn {
    /// Entry side.
    pub from: SlideFrom,
    /// Seconds.
    pub duration: f64,
    /// Seconds before the first element starts.
    pub delay: f64,
    /// Offset in pixels.
    pub distance: f64,
    /// Selector that activates the tween on scroll.
    pub trigger: Option<String>,
}

impl Default for SlideIn {
    fn default() -> Self {
        Self {
            from: SlideFrom::Left,
            duration: 0.8,
            delay: 0.0,
            distance: 50.0,
            trigger: None,
        }
    }
}

pub(crate) fn slide_in(count: usize, options: &SlideIn) -> Vec<Tween> {
    let trigger = options
        .trigger
        .as_ref()
        .map(|selector| ScrollTrigger::new(START_TOP_60).on(selector.clone()));
    let (x, y) = options.from.offset(options.distance);
    (0..count)
        .map(|index| {
            Tween::new(Props::hidden_at(x, y), Props::IDENTITY, secs(options.duration))
                .delayed(element_delay(options.delay, index))
                .triggered(trigger.clone())
        })
        .collect()
}
