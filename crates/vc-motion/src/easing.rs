#![forbid(unsafe_code)]

//! Easing curves.
//!
//! All curves map `t ∈ [0, 1]` to progress with `f(0) = 0` and `f(1) = 1`.
//! Inputs outside the unit range are clamped first. `BackOut` overshoots
//! past 1 before settling.

use std::fmt;
use std::str::FromStr;

use crate::error::MotionError;

/// Default overshoot for [`Easing::BackOut`].
pub const DEFAULT_OVERSHOOT: f64 = 1.7;

/// Supported easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic deceleration (`power2.out`).
    #[default]
    Power2Out,
    /// Deceleration with overshoot (`back.out(s)`).
    BackOut(f64),
}

impl Easing {
    /// `back.out` with the default overshoot.
    #[must_use]
    pub const fn back_out() -> Self {
        Self::BackOut(DEFAULT_OVERSHOOT)
    }

    /// Progress at time `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("none"),
            Self::Power2Out => f.write_str("power2.out"),
            Self::BackOut(s) => write!(f, "back.out({s})"),
        }
    }
}

impl FromStr for Easing {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name {
            "none" | "linear" => return Ok(Self::Linear),
            "power2.out" => return Ok(Self::Power2Out),
            "back.out" => return Ok(Self::back_out()),
            _ => {}
        }
        name.strip_prefix("back.out(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|arg| arg.trim().parse::<f64>().ok())
            .filter(|s| s.is_finite())
            .map(Self::BackOut)
            .ok_or_else(|| MotionError::InvalidEasing(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        for easing in [Easing::Linear, Easing::Power2Out, Easing::back_out()] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing}");
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::back_out().apply(f64::from(i) / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn power2_out_decelerates() {
        assert!(Easing::Power2Out.apply(0.5) > 0.5);
        assert!((Easing::Power2Out.apply(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!("power2.out".parse::<Easing>(), Ok(Easing::Power2Out));
        assert_eq!("back.out(1.7)".parse::<Easing>(), Ok(Easing::BackOut(1.7)));
        assert_eq!(Easing::back_out().to_string(), "back.out(1.7)");
        assert!("elastic.inOut".parse::<Easing>().is_err());
        assert!("back.out(x)".parse::<Easing>().is_err());
    }

    #[test]
    fn clamps_input() {
        assert_eq!(Easing::Linear.apply(-2.0), 0.0);
        assert_eq!(Easing::Linear.apply(7.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }
}
