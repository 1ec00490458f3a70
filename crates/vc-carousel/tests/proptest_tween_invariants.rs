//! Property-based invariant tests for the tween math.
//!
//! 1. Weights always lie in [0, 1]
//! 2. A non-seam slide has weight exactly 1 on its snap
//! 3. Weight is non-increasing in distance to the snap
//! 4. Seam corrections are continuous with the unwrapped position
//! 5. The tween factor is linear in the snap count
//! 6. The in-view filter only ever removes slides

use proptest::prelude::*;
use vc_carousel::tween::{diff_to_target, weight_for};
use vc_carousel::{
    LoopPoint, TWEEN_FACTOR_BASE, TweenFrame, TweenLayout, TweenWeight, WrapSign,
    compute_weights, tween_factor,
};

fn layout(snaps: usize) -> TweenLayout {
    let snap_list = (0..snaps).map(|i| i as f64 / snaps as f64).collect();
    let registry = (0..snaps).map(|i| vec![i]).collect();
    TweenLayout::new(snap_list, registry)
}

fn wrap_sign() -> impl Strategy<Value = WrapSign> {
    prop_oneof![
        Just(WrapSign::Negative),
        Just(WrapSign::None),
        Just(WrapSign::Positive),
    ]
}

// ── 1. Bounds ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn weights_are_bounded(
        snaps in 1usize..=12,
        progress in -3.0f64..3.0,
        points in prop::collection::vec((0usize..12, wrap_sign()), 0..6),
    ) {
        let layout = layout(snaps);
        let points: Vec<LoopPoint> = points
            .into_iter()
            .map(|(i, sign)| LoopPoint::new(i, sign))
            .collect();
        let frame = TweenFrame::new(progress).with_loop_points(&points);
        for slide in compute_weights(&layout, &frame) {
            let w = slide.weight.get();
            prop_assert!((0.0..=1.0).contains(&w), "weight {w} out of range");
        }
    }

    #[test]
    fn raw_weight_clamps(raw in prop::num::f64::ANY) {
        let w = TweenWeight::new(raw).get();
        prop_assert!((0.0..=1.0).contains(&w));
    }
}

// ── 2. Peak on target ────────────────────────────────────────────────

proptest! {
    #[test]
    fn full_weight_on_target(snaps in 1usize..=12, pick in 0usize..12) {
        let layout = layout(snaps);
        let target = pick % snaps;
        let frame = TweenFrame::new(layout.snap_list()[target]);
        let weights = compute_weights(&layout, &frame);
        let on_target = weights.iter().find(|w| w.slide_index == target);
        prop_assert_eq!(on_target.map(|w| w.weight), Some(TweenWeight::FULL));
    }
}

// ── 3. Monotone falloff ──────────────────────────────────────────────

proptest! {
    #[test]
    fn weight_non_increasing_with_distance(
        snaps in 1usize..=12,
        a in 0.0f64..2.0,
        b in 0.0f64..2.0,
        negative in any::<bool>(),
    ) {
        let factor = tween_factor(snaps);
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let sign = if negative { -1.0 } else { 1.0 };
        prop_assert!(weight_for(near * sign, factor) >= weight_for(far * sign, factor));
    }
}

// ── 4. Seam continuity ───────────────────────────────────────────────

proptest! {
    #[test]
    fn negative_wrap_matches_next_cycle(snap in 0.0f64..1.0, progress in 0.0f64..1.0) {
        let wrapped = diff_to_target(snap, progress, WrapSign::Negative);
        let unwrapped = diff_to_target(snap, progress + 1.0, WrapSign::None);
        prop_assert!((wrapped - unwrapped).abs() < 1e-12);
    }

    #[test]
    fn positive_wrap_matches_previous_cycle(snap in 0.0f64..1.0, progress in 0.0f64..1.0) {
        let wrapped = diff_to_target(snap, progress, WrapSign::Positive);
        let unwrapped = diff_to_target(snap + 1.0, progress, WrapSign::None);
        prop_assert!((wrapped - unwrapped).abs() < 1e-12);
    }
}

// ── 5. Factor ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn factor_linear_in_snaps(snaps in 0usize..=64) {
        let expected = TWEEN_FACTOR_BASE * snaps as f64;
        prop_assert!((tween_factor(snaps) - expected).abs() < 1e-12);
        prop_assert!((layout(snaps).tween_factor() - expected).abs() < 1e-12);
    }
}

// ── 6. In-view filter ────────────────────────────────────────────────

proptest! {
    #[test]
    fn in_view_filter_is_subset(
        snaps in 1usize..=12,
        progress in 0.0f64..1.0,
        visible in prop::collection::vec(0usize..12, 0..12),
    ) {
        let layout = layout(snaps);
        let all = compute_weights(&layout, &TweenFrame::new(progress));
        let filtered = compute_weights(&layout, &TweenFrame::new(progress).only_in_view(&visible));
        for slide in &filtered {
            prop_assert!(visible.contains(&slide.slide_index));
            prop_assert!(all.contains(slide));
        }
    }
}

#[test]
fn six_snaps_two_away() {
    let weight = weight_for(2.0, tween_factor(6));
    assert!((weight.get() - 0.64).abs() < 1e-12);
    assert_eq!(weight.to_string(), "0.64");
}
