#![forbid(unsafe_code)]

//! Scale/opacity tween for focus carousels.
//!
//! Given the carousel's continuous scroll progress, every slide receives a
//! weight that peaks at 1 on its snap target and falls off linearly with
//! the normalized distance to it. The weight is used as both a uniform
//! scale multiplier and an opacity.
//!
//! # Algorithm
//!
//! For each snap `s` and each slide `i` registered under it:
//!
//! 1. `diff = snap[s] - progress`
//! 2. when looping and slide `i` has a loop point with a nonzero sign:
//!    sign −1 → `diff = snap[s] - (1 + progress)`,
//!    sign +1 → `diff = snap[s] + (1 - progress)`
//! 3. `raw = 1 - |diff * tween_factor|`
//! 4. `weight = clamp(raw, 0, 1)`
//!
//! # Invariants
//!
//! 1. Weights are always within `[0, 1]`; NaN inputs clamp to 0.
//! 2. A slide that is not on the loop seam has weight exactly 1 when
//!    `progress == snap`.
//! 3. Weight is non-increasing in `|progress - snap|`.
//! 4. The diff is computed per slide: a loop correction on one slide never
//!    leaks into another slide of the same snap.
//!
//! # Failure Modes
//!
//! - Registry entries that point past the slide list are returned like any
//!   other slide; the apply step skips indices it has no handle for.
//! - An empty snap list yields no weights and a tween factor of 0.

use std::fmt;

/// Falloff per snap: the tween factor is `TWEEN_FACTOR_BASE * snap_count`.
pub const TWEEN_FACTOR_BASE: f64 = 0.03;

/// Clamp `value` into `[min, max]`. NaN maps to `min`.
#[must_use]
pub fn number_within_range(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Tween factor for a carousel with `snap_count` snaps.
#[must_use]
pub fn tween_factor(snap_count: usize) -> f64 {
    tween_factor_with_base(TWEEN_FACTOR_BASE, snap_count)
}

/// Tween factor with a configurable base.
#[must_use]
pub fn tween_factor_with_base(base: f64, snap_count: usize) -> f64 {
    base * snap_count as f64
}

/// Visual weight of a slide, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TweenWeight(f64);

impl TweenWeight {
    /// Fully faded out.
    pub const ZERO: Self = Self(0.0);
    /// Fully in focus.
    pub const FULL: Self = Self(1.0);

    /// Clamp a raw tween value into a weight.
    #[must_use]
    pub fn new(raw: f64) -> Self {
        Self(number_within_range(raw, 0.0, 1.0))
    }

    /// The weight as a number.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Uniform scale multiplier.
    #[must_use]
    pub const fn scale(self) -> f64 {
        self.0
    }

    /// Opacity.
    #[must_use]
    pub const fn opacity(self) -> f64 {
        self.0
    }
}

impl fmt::Display for TweenWeight {
    /// Shortest decimal form with at most four fraction digits (`1`,
    /// `0.64`, `0.9567`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.4}", self.0);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        f.write_str(trimmed)
    }
}

/// Direction in which a slide is shifted by a full loop cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapSign {
    /// Shifted back one cycle (e.g. the last slide shown before the first).
    Negative,
    /// Not shifted.
    #[default]
    None,
    /// Shifted forward one cycle (e.g. the first slide shown after the last).
    Positive,
}

impl WrapSign {
    /// Sign of a loop target offset.
    #[must_use]
    pub fn from_target(target: f64) -> Self {
        if target < 0.0 {
            Self::Negative
        } else if target > 0.0 {
            Self::Positive
        } else {
            Self::None
        }
    }

    /// `-1`, `0` or `+1`.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::None => 0,
            Self::Positive => 1,
        }
    }
}

/// Loop seam correction for one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopPoint {
    /// Slide the correction applies to.
    pub slide_index: usize,
    /// Which way the slide is shifted.
    pub wrap_sign: WrapSign,
}

impl LoopPoint {
    /// Create a loop point.
    #[must_use]
    pub const fn new(slide_index: usize, wrap_sign: WrapSign) -> Self {
        Self {
            slide_index,
            wrap_sign,
        }
    }
}

/// Snap geometry and falloff, recomputed together on every reinit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TweenLayout {
    snap_list: Vec<f64>,
    slide_registry: Vec<Vec<usize>>,
    tween_factor: f64,
}

impl TweenLayout {
    /// Layout with the default factor base.
    #[must_use]
    pub fn new(snap_list: Vec<f64>, slide_registry: Vec<Vec<usize>>) -> Self {
        Self::with_factor_base(snap_list, slide_registry, TWEEN_FACTOR_BASE)
    }

    /// Layout with an explicit factor base.
    #[must_use]
    pub fn with_factor_base(
        snap_list: Vec<f64>,
        slide_registry: Vec<Vec<usize>>,
        factor_base: f64,
    ) -> Self {
        let tween_factor = tween_factor_with_base(factor_base, snap_list.len());
        Self {
            snap_list,
            slide_registry,
            tween_factor,
        }
    }

    /// Snap targets.
    #[must_use]
    pub fn snap_list(&self) -> &[f64] {
        &self.snap_list
    }

    /// Snap index → slide indices.
    #[must_use]
    pub fn slide_registry(&self) -> &[Vec<usize>] {
        &self.slide_registry
    }

    /// Number of snaps.
    #[must_use]
    pub fn snap_count(&self) -> usize {
        self.snap_list.len()
    }

    /// Falloff steepness.
    #[must_use]
    pub const fn tween_factor(&self) -> f64 {
        self.tween_factor
    }
}

/// Per-frame tween inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame<'a> {
    /// Current normalized scroll progress; may leave `[0, 1]` near a seam.
    pub scroll_progress: f64,
    /// Loop corrections, present only while looping.
    pub loop_points: Option<&'a [LoopPoint]>,
    /// When set, only these slides are updated.
    pub slides_in_view: Option<&'a [usize]>,
}

impl<'a> TweenFrame<'a> {
    /// A frame that updates every slide and applies no loop correction.
    #[must_use]
    pub const fn new(scroll_progress: f64) -> Self {
        Self {
            scroll_progress,
            loop_points: None,
            slides_in_view: None,
        }
    }

    /// Apply loop seam corrections.
    #[must_use]
    pub const fn with_loop_points(mut self, loop_points: &'a [LoopPoint]) -> Self {
        self.loop_points = Some(loop_points);
        self
    }

    /// Restrict the update to the slides currently in view.
    #[must_use]
    pub const fn only_in_view(mut self, slides_in_view: &'a [usize]) -> Self {
        self.slides_in_view = Some(slides_in_view);
        self
    }

    fn wrap_for(&self, slide_index: usize) -> WrapSign {
        self.loop_points
            .and_then(|points| {
                points
                    .iter()
                    .rev()
                    .find(|p| p.slide_index == slide_index && p.wrap_sign != WrapSign::None)
            })
            .map_or(WrapSign::None, |p| p.wrap_sign)
    }

    fn is_visible(&self, slide_index: usize) -> bool {
        self.slides_in_view
            .is_none_or(|in_view| in_view.contains(&slide_index))
    }
}

/// Weight computed for one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideWeight {
    /// Slide index.
    pub slide_index: usize,
    /// Computed weight.
    pub weight: TweenWeight,
}

/// Signed distance from the progress to a snap, corrected for the seam.
#[must_use]
pub fn diff_to_target(snap: f64, scroll_progress: f64, wrap: WrapSign) -> f64 {
    match wrap {
        WrapSign::None => snap - scroll_progress,
        WrapSign::Negative => snap - (1.0 + scroll_progress),
        WrapSign::Positive => snap + (1.0 - scroll_progress),
    }
}

/// Weight for a distance and falloff.
#[must_use]
pub fn weight_for(diff: f64, tween_factor: f64) -> TweenWeight {
    TweenWeight::new(1.0 - (diff * tween_factor).abs())
}

/// Compute weights for every registered (and, if filtered, visible) slide.
///
/// Output order follows the registry: by snap, then by slide within a snap.
#[must_use]
pub fn compute_weights(layout: &TweenLayout, frame: &TweenFrame<'_>) -> Vec<SlideWeight> {
    let mut weights = Vec::new();
    for (snap_index, &snap) in layout.snap_list.iter().enumerate() {
        let Some(slides) = layout.slide_registry.get(snap_index) else {
            continue;
        };
        for &slide_index in slides {
            if !frame.is_visible(slide_index) {
                continue;
            }
            let diff = diff_to_target(snap, frame.scroll_progress, frame.wrap_for(slide_index));
            weights.push(SlideWeight {
                slide_index,
                weight: weight_for(diff, layout.tween_factor),
            });
        }
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn six_snaps() -> TweenLayout {
        let snaps: Vec<f64> = (0..6).map(|i| f64::from(i) / 6.0).collect();
        let registry = (0..6).map(|i| vec![i]).collect();
        TweenLayout::new(snaps, registry)
    }

    #[test]
    fn factor_scales_with_snap_count() {
        assert!(approx(tween_factor(6), 0.18));
        assert!(approx(six_snaps().tween_factor(), 0.18));
        assert!(approx(tween_factor(0), 0.0));
    }

    #[test]
    fn documented_example() {
        let weight = weight_for(2.0, tween_factor(6));
        assert!(approx(weight.get(), 0.64));
    }

    #[test]
    fn weight_is_one_on_target() {
        let layout = six_snaps();
        let weights = compute_weights(&layout, &TweenFrame::new(layout.snap_list()[2]));
        let on_target = weights.iter().find(|w| w.slide_index == 2).unwrap();
        assert_eq!(on_target.weight, TweenWeight::FULL);
    }

    #[test]
    fn weight_clamps_to_zero() {
        assert_eq!(weight_for(100.0, 0.18), TweenWeight::ZERO);
        assert_eq!(weight_for(-100.0, 0.18), TweenWeight::ZERO);
        assert_eq!(TweenWeight::new(f64::NAN), TweenWeight::ZERO);
        assert_eq!(TweenWeight::new(3.0), TweenWeight::FULL);
    }

    #[test]
    fn seam_corrections() {
        assert!(approx(diff_to_target(0.8, 0.0, WrapSign::Negative), -0.2));
        assert!(approx(diff_to_target(0.0, 0.8, WrapSign::Positive), 0.2));
        assert!(approx(diff_to_target(0.5, 0.25, WrapSign::None), 0.25));
    }

    #[test]
    fn loop_point_applies_only_to_its_slide() {
        let layout = TweenLayout::new(vec![0.0, 0.5], vec![vec![0, 1], vec![2, 3]]);
        let points = [LoopPoint::new(0, WrapSign::Positive)];
        let frame = TweenFrame::new(0.9).with_loop_points(&points);
        let weights = compute_weights(&layout, &frame);

        let w0 = weights[0].weight.get();
        let w1 = weights[1].weight.get();
        assert!(approx(w0, 1.0 - (0.1_f64 * layout.tween_factor()).abs()));
        assert!(approx(w1, 1.0 - (0.9_f64 * layout.tween_factor()).abs()));
    }

    #[test]
    fn last_nonzero_loop_point_wins() {
        let points = [
            LoopPoint::new(1, WrapSign::Positive),
            LoopPoint::new(1, WrapSign::Negative),
            LoopPoint::new(1, WrapSign::None),
        ];
        let frame = TweenFrame::new(0.0).with_loop_points(&points);
        assert_eq!(frame.wrap_for(1), WrapSign::Negative);
        assert_eq!(frame.wrap_for(0), WrapSign::None);
    }

    #[test]
    fn in_view_filter_skips_hidden_slides() {
        let layout = six_snaps();
        let in_view = [0, 1, 5];
        let frame = TweenFrame::new(0.0).only_in_view(&in_view);
        let indices: Vec<usize> = compute_weights(&layout, &frame)
            .iter()
            .map(|w| w.slide_index)
            .collect();
        assert_eq!(indices, vec![0, 1, 5]);
    }

    #[test]
    fn malformed_registry_is_passed_through() {
        let layout = TweenLayout::new(vec![0.0, 0.5, 1.0], vec![vec![0], vec![42]]);
        let weights = compute_weights(&layout, &TweenFrame::new(0.0));
        let indices: Vec<usize> = weights.iter().map(|w| w.slide_index).collect();
        assert_eq!(indices, vec![0, 42]);
    }

    #[test]
    fn empty_layout_is_inert() {
        let layout = TweenLayout::new(Vec::new(), Vec::new());
        assert!(compute_weights(&layout, &TweenFrame::new(0.3)).is_empty());
        assert!(approx(layout.tween_factor(), 0.0));
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(TweenWeight::FULL.to_string(), "1");
        assert_eq!(TweenWeight::new(0.64).to_string(), "0.64");
        assert_eq!(TweenWeight::ZERO.to_string(), "0");
        assert_eq!(TweenWeight::new(0.123_456).to_string(), "0.1235");
    }

    #[test]
    fn wrap_sign_from_target() {
        assert_eq!(WrapSign::from_target(-3.0), WrapSign::Negative);
        assert_eq!(WrapSign::from_target(0.0), WrapSign::None);
        assert_eq!(WrapSign::from_target(2.5).as_i8(), 1);
    }
}
