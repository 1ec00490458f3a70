#![forbid(unsafe_code)]

//! Deterministic scroll engine.
//!
//! [`SimulatedEngine`] lays slides out on evenly spaced snaps and moves
//! between them in fixed frames. The host drives it (drag, settle, step,
//! resize) and then drains the queued events into the carousel, the same
//! way a browser host pushes events into a web backend.
//!
//! Geometry:
//!
//! - `n` snaps, each grouping `slides_to_scroll` consecutive slides.
//! - Looping snaps sit at `i / n` (the seam at 1.0 is snap 0 again);
//!   non-looping snaps at `i / (n - 1)`.
//! - A slide is in view when its distance to the progress, in snaps, is at
//!   most `slides_per_view / 2 + 0.5`.

use std::collections::VecDeque;

use crate::apply::VisualHandle;
use crate::engine::ScrollEngine;
use crate::events::{EngineEvent, EventHub};
use crate::options::CarouselOptions;
use crate::tween::{LoopPoint, WrapSign, diff_to_target};

/// Frames used by an animated `scroll_to`.
pub const ANIMATION_FRAMES: u32 = 8;

/// Default number of slides visible at once.
pub const DEFAULT_SLIDES_PER_VIEW: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f64,
    delta: f64,
    target: usize,
    frame: u32,
}

/// Reference scroll engine with queued events.
#[derive(Debug)]
pub struct SimulatedEngine<H> {
    handles: Vec<Option<H>>,
    looping: bool,
    slides_to_scroll: usize,
    slides_per_view: f64,
    snap_list: Vec<f64>,
    registry: Vec<Vec<usize>>,
    progress: f64,
    selected: usize,
    animation: Option<Animation>,
    events: EventHub,
    queue: VecDeque<EngineEvent>,
}

impl<H: VisualHandle + Clone> SimulatedEngine<H> {
    /// Engine over `handles`, one slide per snap.
    #[must_use]
    pub fn new(handles: Vec<Option<H>>, looping: bool) -> Self {
        let mut engine = Self {
            handles,
            looping,
            slides_to_scroll: 1,
            slides_per_view: DEFAULT_SLIDES_PER_VIEW,
            snap_list: Vec::new(),
            registry: Vec::new(),
            progress: 0.0,
            selected: 0,
            animation: None,
            events: EventHub::new(),
            queue: VecDeque::new(),
        };
        engine.layout();
        engine
    }

    /// Engine configured like `options` for a viewport `width` pixels wide.
    #[must_use]
    pub fn from_options(handles: Vec<Option<H>>, options: &CarouselOptions, width: u32) -> Self {
        Self::new(handles, options.looping).with_slides_to_scroll(options.slides_to_scroll_for(width))
    }

    /// Group `slides_to_scroll` slides per snap.
    #[must_use]
    pub fn with_slides_to_scroll(mut self, slides_to_scroll: usize) -> Self {
        self.slides_to_scroll = slides_to_scroll.max(1);
        self.layout();
        self
    }

    /// Visible window width in slides.
    #[must_use]
    pub fn with_slides_per_view(mut self, slides_per_view: f64) -> Self {
        self.slides_per_view = slides_per_view.max(1.0);
        self
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.handles.len()
    }

    /// Whether an animated `scroll_to` is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Events queued since the last drain.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.queue.drain(..).collect()
    }

    /// Move the scroll position to `progress` as a drag would.
    pub fn drag_to(&mut self, progress: f64) {
        self.animation = None;
        self.progress = self.normalize(progress);
        self.push(EngineEvent::Scroll);
    }

    /// Move the scroll position by `delta`.
    pub fn drag_by(&mut self, delta: f64) {
        self.drag_to(self.progress + delta);
    }

    /// Release a drag: snap to the nearest snap and report the selection.
    pub fn settle(&mut self) {
        let Some(nearest) = self.nearest_snap() else {
            return;
        };
        self.animation = None;
        self.progress = self.snap_list[nearest];
        self.selected = nearest;
        self.push(EngineEvent::Scroll);
        self.push(EngineEvent::Select);
    }

    /// Advance an animated `scroll_to` by one frame. Returns whether the
    /// animation is still running.
    pub fn step(&mut self) -> bool {
        let Some(mut animation) = self.animation.take() else {
            return false;
        };
        animation.frame += 1;
        let t = f64::from(animation.frame) / f64::from(ANIMATION_FRAMES);
        self.progress = self.normalize(animation.from + animation.delta * t);
        self.push(EngineEvent::Scroll);
        if animation.frame >= ANIMATION_FRAMES {
            self.progress = self.snap_list.get(animation.target).copied().unwrap_or(0.0);
            self.selected = animation.target;
            self.push(EngineEvent::Select);
            false
        } else {
            self.animation = Some(animation);
            true
        }
    }

    /// Run any animation to completion.
    pub fn finish_animation(&mut self) {
        while self.step() {}
    }

    /// Replace the slides, recompute the layout and report a reinit.
    pub fn set_slides(&mut self, handles: Vec<Option<H>>) {
        self.handles = handles;
        self.relayout();
    }

    /// Apply a new grouping (e.g. a breakpoint change) and report a reinit.
    pub fn set_slides_to_scroll(&mut self, slides_to_scroll: usize) {
        let slides_to_scroll = slides_to_scroll.max(1);
        if slides_to_scroll == self.slides_to_scroll {
            return;
        }
        self.slides_to_scroll = slides_to_scroll;
        self.relayout();
    }

    /// Viewport resized: pick the grouping for `width` from `options`.
    pub fn resize(&mut self, options: &CarouselOptions, width: u32) {
        self.set_slides_to_scroll(options.slides_to_scroll_for(width));
    }

    fn relayout(&mut self) {
        self.animation = None;
        self.layout();
        self.selected = self.selected.min(self.snap_list.len().saturating_sub(1));
        self.progress = self.snap_list.get(self.selected).copied().unwrap_or(0.0);
        tracing::debug!(
            slides = self.handles.len(),
            snaps = self.snap_list.len(),
            "simulated engine relayout"
        );
        self.push(EngineEvent::ReInit);
    }

    fn layout(&mut self) {
        let slides = self.handles.len();
        let per_snap = self.slides_to_scroll;
        let snaps = slides.div_ceil(per_snap);
        let spacing = if self.looping {
            snaps as f64
        } else {
            snaps.saturating_sub(1).max(1) as f64
        };
        self.snap_list = (0..snaps).map(|i| i as f64 / spacing).collect();
        self.registry = (0..snaps)
            .map(|i| (i * per_snap..((i + 1) * per_snap).min(slides)).collect())
            .collect();
    }

    fn normalize(&self, progress: f64) -> f64 {
        if self.looping {
            progress.rem_euclid(1.0)
        } else {
            progress.clamp(0.0, 1.0)
        }
    }

    fn push(&mut self, event: EngineEvent) {
        if self.events.has_listeners(event) {
            self.queue.push_back(event);
        }
    }

    /// Wrap sign giving the shortest distance from the progress to `snap`.
    fn wrap_for(&self, snap: f64) -> WrapSign {
        if !self.looping {
            return WrapSign::None;
        }
        let mut best = WrapSign::None;
        let mut best_abs = diff_to_target(snap, self.progress, WrapSign::None).abs();
        for sign in [WrapSign::Negative, WrapSign::Positive] {
            let candidate = diff_to_target(snap, self.progress, sign).abs();
            if candidate < best_abs {
                best = sign;
                best_abs = candidate;
            }
        }
        best
    }

    fn distance_in_snaps(&self, snap: f64) -> f64 {
        let diff = diff_to_target(snap, self.progress, self.wrap_for(snap)).abs();
        if self.looping {
            diff * self.snap_list.len() as f64
        } else {
            diff * self.snap_list.len().saturating_sub(1).max(1) as f64
        }
    }

    fn nearest_snap(&self) -> Option<usize> {
        self.snap_list
            .iter()
            .enumerate()
            .map(|(i, &snap)| (i, self.distance_in_snaps(snap)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

impl<H: VisualHandle + Clone> ScrollEngine for SimulatedEngine<H> {
    type Handle = H;

    fn slide_handles(&self) -> Vec<Option<H>> {
        self.handles.clone()
    }

    fn scroll_snap_list(&self) -> &[f64] {
        &self.snap_list
    }

    fn slide_registry(&self) -> &[Vec<usize>] {
        &self.registry
    }

    fn scroll_progress(&self) -> f64 {
        self.progress
    }

    fn slides_in_view(&self) -> Vec<usize> {
        let window = self.slides_per_view / 2.0 + 0.5;
        self.snap_list
            .iter()
            .zip(&self.registry)
            .filter(|(snap, _)| self.distance_in_snaps(**snap) <= window)
            .flat_map(|(_, slides)| slides.iter().copied())
            .collect()
    }

    fn loop_points(&self) -> Vec<LoopPoint> {
        if !self.looping {
            return Vec::new();
        }
        self.snap_list
            .iter()
            .zip(&self.registry)
            .filter_map(|(&snap, slides)| {
                let sign = self.wrap_for(snap);
                (sign != WrapSign::None).then_some((sign, slides))
            })
            .flat_map(|(sign, slides)| slides.iter().map(move |&i| LoopPoint::new(i, sign)))
            .collect()
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn selected_scroll_snap(&self) -> usize {
        self.selected
    }

    fn scroll_to(&mut self, index: usize, jump: bool) {
        let count = self.snap_list.len();
        if count == 0 {
            return;
        }
        let target = if self.looping {
            index % count
        } else {
            index.min(count - 1)
        };
        let to = self.snap_list[target];
        if jump {
            self.animation = None;
            self.progress = to;
            self.selected = target;
            self.push(EngineEvent::Scroll);
            self.push(EngineEvent::Select);
            return;
        }
        let mut delta = to - self.progress;
        if self.looping {
            delta = (delta + 0.5).rem_euclid(1.0) - 0.5;
        }
        self.animation = Some(Animation {
            from: self.progress,
            delta,
            target,
            frame: 0,
        });
    }

    fn events(&self) -> &EventHub {
        &self.events
    }
}
