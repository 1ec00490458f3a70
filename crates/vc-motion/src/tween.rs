#![forbid(unsafe_code)]

//! From/to property tweens.
//!
//! A [`Tween`] interpolates [`Props`] over `duration` after `delay`, shaped
//! by an [`Easing`]. Time is measured from the moment the tween is started
//! (page load, or its scroll trigger firing).

use std::fmt::Write as _;
use std::time::Duration;

use crate::easing::Easing;
use crate::trigger::ScrollTrigger;

/// Animatable properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Props {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Props {
    /// Fully visible, in place.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Invisible, in place.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::IDENTITY
    };

    /// Hidden and offset by `(x, y)`.
    #[must_use]
    pub const fn hidden_at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::HIDDEN
        }
    }

    /// Linear interpolation; `t` is not clamped so overshooting easings
    /// carry through.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }

    /// Inline CSS for these properties.
    #[must_use]
    pub fn css(&self) -> String {
        let mut out = format!("opacity: {}", round3(self.opacity));
        let _ = write!(
            out,
            "; transform: translate({}px, {}px) scale({})",
            round3(self.x),
            round3(self.y),
            round3(self.scale)
        );
        out
    }

    /// Compact `key:value` encoding used in data attributes.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "opacity:{};x:{};y:{};scale:{}",
            round3(self.opacity),
            round3(self.x),
            round3(self.y),
            round3(self.scale)
        )
    }
}

impl Default for Props {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { 0.0 } else { r }
}

/// A from/to tween.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Start state.
    pub from: Props,
    /// End state.
    pub to: Props,
    /// Running time.
    pub duration: Duration,
    /// Wait before running.
    pub delay: Duration,
    /// Curve.
    pub easing: Easing,
    /// Scroll activation; `None` starts on load.
    pub trigger: Option<ScrollTrigger>,
}

impl Tween {
    /// Tween from `from` to `to` over `duration` with `power2.out`.
    #[must_use]
    pub fn new(from: Props, to: Props, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing: Easing::Power2Out,
            trigger: None,
        }
    }

    /// Set the delay.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the easing.
    #[must_use]
    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Attach a scroll trigger.
    #[must_use]
    pub fn triggered(mut self, trigger: Option<ScrollTrigger>) -> Self {
        self.trigger = trigger;
        self
    }

    /// Delay plus duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// Linear progress at `elapsed`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Properties at `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Props {
        let eased = self.easing.apply(self.progress(elapsed));
        self.from.lerp(&self.to, eased)
    }

    /// Whether the tween has reached its end state.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }

    /// `data-motion-*` attributes describing the tween.
    #[must_use]
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("data-motion-from", self.from.encode()),
            ("data-motion-to", self.to.encode()),
            (
                "data-motion-duration",
                format!("{}", round3(self.duration.as_secs_f64())),
            ),
            (
                "data-motion-delay",
                format!("{}", round3(self.delay.as_secs_f64())),
            ),
            ("data-motion-ease", self.easing.to_string()),
        ];
        if let Some(trigger) = &self.trigger {
            attrs.push(("data-motion-start", trigger.start.to_string()));
            if let Some(end) = trigger.end {
                attrs.push(("data-motion-end", end.to_string()));
            }
            if let Some(target) = &trigger.target {
                attrs.push(("data-motion-trigger", target.clone()));
            }
            attrs.push(("data-motion-actions", trigger.toggle_actions.to_string()));
        }
        attrs
    }
}

/// Seconds to a duration, treating negative and non-finite input as zero.
#[must_use]
pub fn secs(value: f64) -> Duration {
    if value.is_finite() && value > 0.0 {
        Duration::from_secs_f64(value)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::START_TOP_60;

    fn fade() -> Tween {
        Tween::new(Props::hidden_at(0.0, 30.0), Props::IDENTITY, secs(0.8)).delayed(secs(0.2))
    }

    #[test]
    fn waits_for_delay() {
        let tween = fade();
        assert_eq!(tween.sample(Duration::ZERO), Props::hidden_at(0.0, 30.0));
        assert_eq!(tween.sample(secs(0.2)), Props::hidden_at(0.0, 30.0));
    }

    #[test]
    fn ends_at_target() {
        let tween = fade();
        assert!(tween.is_complete(secs(1.0)));
        assert_eq!(tween.sample(secs(5.0)), Props::IDENTITY);
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = Tween::new(Props::HIDDEN, Props::IDENTITY, Duration::ZERO);
        assert_eq!(tween.sample(Duration::ZERO), Props::IDENTITY);
    }

    #[test]
    fn css_output() {
        assert_eq!(
            Props::hidden_at(-50.0, 0.0).css(),
            "opacity: 0; transform: translate(-50px, 0px) scale(1)"
        );
    }

    #[test]
    fn data_attributes_include_trigger() {
        let tween = fade().triggered(Some(ScrollTrigger::new(START_TOP_60).on("#home")));
        let attrs = tween.data_attributes();
        assert!(attrs.contains(&("data-motion-start", "top 60%".to_string())));
        assert!(attrs.contains(&("data-motion-trigger", "#home".to_string())));
        assert!(attrs.contains(&("data-motion-actions", "play none none none".to_string())));
        assert!(attrs.contains(&("data-motion-duration", "0.8".to_string())));
        assert!(attrs.contains(&("data-motion-ease", "power2.out".to_string())));
    }

    #[test]
    fn secs_guards_input() {
        assert_eq!(secs(-1.0), Duration::ZERO);
        assert_eq!(secs(f64::NAN), Duration::ZERO);
        assert_eq!(secs(0.5), Duration::from_millis(500));
    }
}
