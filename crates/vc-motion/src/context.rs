#![forbid(unsafe_code)]

//! Process-wide motion initialization.
//!
//! The scroll-trigger plugin must be registered exactly once before any
//! preset is built. [`Motion::init`] performs the registration on first
//! call and returns the same context on every later call, so presets are
//! only reachable once initialization has happened.

use std::sync::OnceLock;

use crate::presets::{self, FadeIn, RevealedText, ScaleIn, SlideIn, TextReveal};
use crate::tween::Tween;

/// Name of the scroll-linked activation plugin.
pub const SCROLL_TRIGGER_PLUGIN: &str = "ScrollTrigger";

static CONTEXT: OnceLock<MotionContext> = OnceLock::new();

/// Entry point for motion initialization.
#[derive(Debug, Clone, Copy)]
pub struct Motion;

impl Motion {
    /// Initialize once and return the shared context.
    pub fn init() -> &'static MotionContext {
        CONTEXT.get_or_init(|| {
            tracing::debug!(plugin = SCROLL_TRIGGER_PLUGIN, "motion plugins registered");
            MotionContext {
                plugins: vec![SCROLL_TRIGGER_PLUGIN],
            }
        })
    }

    /// The context, if [`Motion::init`] has run.
    #[must_use]
    pub fn get() -> Option<&'static MotionContext> {
        CONTEXT.get()
    }
}

/// Initialized motion state. Builds presets.
#[derive(Debug)]
pub struct MotionContext {
    plugins: Vec<&'static str>,
}

impl MotionContext {
    /// Registered plugin names.
    #[must_use]
    pub fn plugins(&self) -> &[&'static str] {
        &self.plugins
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| *plugin == name)
    }

    /// Fade `count` elements in.
    #[must_use]
    pub fn fade_in(&self, count: usize, options: &FadeIn) -> Vec<Tween> {
        presets::fade_in(count, options)
    }

    /// Split `text` and reveal its spans in turn.
    #[must_use]
    pub fn text_reveal(&self, text: &str, options: &TextReveal) -> RevealedText {
        presets::text_reveal(text, options)
    }

    /// Scale `count` elements in.
    #[must_use]
    pub fn scale_in(&self, count: usize, options: &ScaleIn) -> Vec<Tween> {
        presets::scale_in(count, options)
    }

    /// Slide `count` elements in.
    #[must_use]
    pub fn slide_in(&self, count: usize, options: &SlideIn) -> Vec<Tween> {
        presets::slide_in(count, options)
    }
}
