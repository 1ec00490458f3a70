#![forbid(unsafe_code)]

//! Entrance animations for the VClasses site.
//!
//! Animations are described, not played: a [`Tween`] records from/to
//! properties, timing, easing and an optional [`ScrollTrigger`], and the
//! page renderer writes them out as `data-motion-*` attributes. Presets are
//! only reachable through the [`MotionContext`] returned by
//! [`Motion::init`], which registers the scroll-trigger plugin once per
//! process.
//!
//! # Example
//!
//! ```
//! use vc_motion::{FadeIn, Motion};
//!
//! let ctx = Motion::init();
//! let tweens = ctx.fade_in(2, &FadeIn { trigger: Some("#plans".into()), ..FadeIn::default() });
//! assert_eq!(tweens.len(), 2);
//! assert_eq!(tweens[1].delay.as_millis(), 100);
//! ```

pub mod context;
pub mod easing;
pub mod error;
pub mod presets;
pub mod sections;
pub mod split;
pub mod trigger;
pub mod tween;

pub use context::{Motion, MotionContext, SCROLL_TRIGGER_PLUGIN};
pub use easing::{DEFAULT_OVERSHOOT, Easing};
pub use error::MotionError;
pub use presets::{
    ELEMENT_STAGGER, FadeIn, RevealedText, SPAN_STAGGER, ScaleIn, SlideFrom, SlideIn, TextReveal,
};
pub use sections::SectionAnimations;
pub use split::{NBSP, SplitBy, SplitText};
pub use trigger::{
    END_BOTTOM_20, Edge, START_TOP_60, START_TOP_80, ScrollTrigger, ToggleAction, ToggleActions,
    TriggerPosition, TriggerState,
};
pub use tween::{Props, Tween, secs};
