#![forbid(unsafe_code)]

//! Carousel lifecycle: mount, event dispatch, reinit and teardown.
//!
//! A mounted [`Carousel`] owns a snapshot of the engine's slide handles and
//! layout, the selection tracker, an optional autoplay timer and the event
//! subscription. The host feeds engine events through
//! [`Carousel::handle_event`]; dropping or unmounting the carousel releases
//! the subscription.
//!
//! # Reinit
//!
//! On `reInit` the handle list, snap layout and tween factor are captured
//! again as a single snapshot and swapped in, then every slide is
//! tweened once. Since events are handled one at a time, no scroll frame
//! can observe a half-updated layout.

use std::fmt;
use std::time::Duration;

use crate::apply::{VisualHandle, apply_weights};
use crate::autoplay::{Autoplay, AutoplayAction};
use crate::engine::ScrollEngine;
use crate::events::{EngineEvent, Subscription};
use crate::options::CarouselOptions;
use crate::selection::{SelectionState, SelectionTracker};
use crate::tween::{TWEEN_FACTOR_BASE, TweenFrame, TweenLayout, compute_weights};

/// Event kinds a tweening carousel listens to.
pub const TWEEN_EVENTS: [EngineEvent; 3] =
    [EngineEvent::Select, EngineEvent::ReInit, EngineEvent::Scroll];

/// Event kinds a plain carousel listens to.
pub const PLAIN_EVENTS: [EngineEvent; 1] = [EngineEvent::Select];

/// Previous and next slide around the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    /// Slide before the selected one, wrapping.
    pub prev: usize,
    /// Selected slide.
    pub current: usize,
    /// Slide after the selected one, wrapping.
    pub next: usize,
}

/// Wrapping neighbors of `index` among `count` items.
#[must_use]
pub fn neighbors(index: usize, count: usize) -> Option<Neighbors> {
    if count == 0 {
        return None;
    }
    let current = index % count;
    Some(Neighbors {
        prev: (current + count - 1) % count,
        current,
        next: (current + 1) % count,
    })
}

/// One dot of a dot indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    /// Snap the dot navigates to.
    pub index: usize,
    /// Whether the dot marks the selected snap.
    pub active: bool,
}

/// Handles and layout captured together from the engine.
struct Snapshot<H> {
    handles: Vec<Option<H>>,
    layout: TweenLayout,
}

impl<H> Snapshot<H> {
    fn capture<E>(engine: &E, factor_base: f64) -> Self
    where
        E: ScrollEngine<Handle = H>,
    {
        Self {
            handles: engine.slide_handles(),
            layout: TweenLayout::with_factor_base(
                engine.scroll_snap_list().to_vec(),
                engine.slide_registry().to_vec(),
                factor_base,
            ),
        }
    }
}

/// A mounted carousel bound to a scroll engine.
pub struct Carousel<H> {
    options: CarouselOptions,
    snapshot: Snapshot<H>,
    selection: SelectionTracker,
    autoplay: Option<Autoplay>,
    subscription: Subscription,
    factor_base: f64,
    tween_passes: u64,
}

impl<H: VisualHandle + Clone> Carousel<H> {
    /// Mount on `engine` with the default tween factor base.
    pub fn mount<E>(engine: &mut E, options: CarouselOptions) -> Self
    where
        E: ScrollEngine<Handle = H>,
    {
        Self::mount_with_factor_base(engine, options, TWEEN_FACTOR_BASE)
    }

    /// Mount on `engine`.
    ///
    /// Captures the handles and layout, tweens every slide once (tweening
    /// carousels only), subscribes to the engine's events and moves the
    /// engine to the configured start snap.
    pub fn mount_with_factor_base<E>(
        engine: &mut E,
        options: CarouselOptions,
        factor_base: f64,
    ) -> Self
    where
        E: ScrollEngine<Handle = H>,
    {
        let snapshot = Snapshot::capture(engine, factor_base);
        let kinds: &[EngineEvent] = if options.tween {
            &TWEEN_EVENTS
        } else {
            &PLAIN_EVENTS
        };
        let subscription = engine.events().subscribe(kinds);

        let snap_count = snapshot.layout.snap_count();
        let start = options.start_index.min(snap_count.saturating_sub(1));
        if snap_count > 0 && start != engine.selected_scroll_snap() {
            engine.scroll_to(start, true);
        }

        let mut carousel = Self {
            autoplay: options.autoplay.map(Autoplay::new),
            options,
            snapshot,
            selection: SelectionTracker::new(start),
            subscription,
            factor_base,
            tween_passes: 0,
        };
        if carousel.options.tween {
            carousel.tween(engine, false);
        }
        tracing::debug!(
            snap_count,
            slides = carousel.snapshot.handles.len(),
            tween_factor = carousel.snapshot.layout.tween_factor(),
            start,
            "carousel mounted"
        );
        carousel
    }

    /// Options the carousel was mounted with.
    #[must_use]
    pub const fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Selected snap as shown by the UI.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selection.selected_index()
    }

    /// Selection state.
    #[must_use]
    pub const fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    /// Number of selection updates published so far.
    #[must_use]
    pub const fn selection_updates(&self) -> u64 {
        self.selection.settle_count()
    }

    /// Current layout.
    #[must_use]
    pub const fn layout(&self) -> &TweenLayout {
        &self.snapshot.layout
    }

    /// Current tween factor.
    #[must_use]
    pub const fn tween_factor(&self) -> f64 {
        self.snapshot.layout.tween_factor()
    }

    /// Number of captured slide handles.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        self.snapshot.handles.len()
    }

    /// Number of tween passes run (mount, reinit and scroll).
    #[must_use]
    pub const fn tween_passes(&self) -> u64 {
        self.tween_passes
    }

    /// Whether the carousel receives `event`.
    #[must_use]
    pub fn listens_to(&self, event: EngineEvent) -> bool {
        self.subscription.listens_to(event)
    }

    /// Autoplay timer, when configured.
    #[must_use]
    pub const fn autoplay(&self) -> Option<&Autoplay> {
        self.autoplay.as_ref()
    }

    /// React to one engine event. Returns whether the event was handled.
    pub fn handle_event<E>(&mut self, engine: &E, event: EngineEvent) -> bool
    where
        E: ScrollEngine<Handle = H>,
    {
        if !self.subscription.listens_to(event) {
            return false;
        }
        match event {
            EngineEvent::Scroll => {
                self.selection.on_scroll();
                self.tween(engine, true);
            }
            EngineEvent::Select => {
                let index = engine.selected_scroll_snap();
                self.selection.on_settle(index);
                tracing::debug!(index, "carousel settled");
            }
            EngineEvent::ReInit => self.reinit(engine),
        }
        true
    }

    /// Handle a batch of events in order. Returns how many were handled.
    pub fn dispatch<E, I>(&mut self, engine: &E, events: I) -> usize
    where
        E: ScrollEngine<Handle = H>,
        I: IntoIterator<Item = EngineEvent>,
    {
        events
            .into_iter()
            .filter(|&event| self.handle_event(engine, event))
            .count()
    }

    /// Recapture handles and layout, then tween every slide once.
    pub fn reinit<E>(&mut self, engine: &E)
    where
        E: ScrollEngine<Handle = H>,
    {
        self.snapshot = Snapshot::capture(engine, self.factor_base);
        self.selection.clamp_to(self.snapshot.layout.snap_count());
        if self.options.tween {
            self.tween(engine, false);
        }
        tracing::debug!(
            snap_count = self.snapshot.layout.snap_count(),
            slides = self.snapshot.handles.len(),
            tween_factor = self.snapshot.layout.tween_factor(),
            "carousel reinit"
        );
    }

    fn tween<E>(&mut self, engine: &E, only_in_view: bool)
    where
        E: ScrollEngine<Handle = H>,
    {
        let loop_points = if engine.is_looping() {
            engine.loop_points()
        } else {
            Vec::new()
        };
        let in_view = if only_in_view {
            engine.slides_in_view()
        } else {
            Vec::new()
        };

        let mut frame = TweenFrame::new(engine.scroll_progress());
        if engine.is_looping() {
            frame = frame.with_loop_points(&loop_points);
        }
        if only_in_view {
            frame = frame.only_in_view(&in_view);
        }

        let weights = compute_weights(&self.snapshot.layout, &frame);
        let applied = apply_weights(&mut self.snapshot.handles, &weights);
        self.tween_passes += 1;
        tracing::trace!(
            progress = frame.scroll_progress,
            computed = weights.len(),
            applied,
            "carousel tween"
        );
    }

    /// Scroll one snap back.
    pub fn scroll_prev<E>(&mut self, engine: &mut E)
    where
        E: ScrollEngine<Handle = H>,
    {
        self.note_interaction();
        engine.scroll_prev();
    }

    /// Scroll one snap forward.
    pub fn scroll_next<E>(&mut self, engine: &mut E)
    where
        E: ScrollEngine<Handle = H>,
    {
        self.note_interaction();
        engine.scroll_next();
    }

    /// Scroll to the snap at `index` (dot or thumbnail click).
    pub fn scroll_to<E>(&mut self, engine: &mut E, index: usize)
    where
        E: ScrollEngine<Handle = H>,
    {
        self.note_interaction();
        engine.scroll_to(index, false);
    }

    fn note_interaction(&mut self) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.interaction();
        }
    }

    /// Wrapping neighbors of the selected snap.
    #[must_use]
    pub fn neighbors(&self) -> Option<Neighbors> {
        neighbors(self.selected_index(), self.snapshot.layout.snap_count())
    }

    /// Dot indicator model, one dot per snap.
    #[must_use]
    pub fn dots(&self) -> Vec<Dot> {
        let selected = self.selected_index();
        (0..self.snapshot.layout.snap_count())
            .map(|index| Dot {
                index,
                active: index == selected,
            })
            .collect()
    }

    /// Pointer entered the carousel.
    pub fn mouse_enter(&mut self) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.mouse_enter();
        }
    }

    /// Pointer left the carousel.
    pub fn mouse_leave(&mut self) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.mouse_leave();
        }
    }

    /// Advance the autoplay timer and move the engine when it fires.
    pub fn tick_autoplay<E>(&mut self, engine: &mut E, dt: Duration) -> Option<AutoplayAction>
    where
        E: ScrollEngine<Handle = H>,
    {
        let autoplay = self.autoplay.as_mut()?;
        let action = autoplay.tick(dt, engine.can_scroll_next())?;
        match action {
            AutoplayAction::ScrollNext => engine.scroll_next(),
            AutoplayAction::Rewind => engine.scroll_to(0, false),
        }
        tracing::trace!(?action, "autoplay fired");
        Some(action)
    }

    /// Release the engine subscription.
    pub fn unmount(self) {
        tracing::debug!(
            selected = self.selected_index(),
            tween_passes = self.tween_passes,
            "carousel unmounted"
        );
    }
}

impl<H> fmt::Debug for Carousel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("layout", &self.snapshot.layout)
            .field("handles", &self.snapshot.handles.len())
            .field("selection", &self.selection)
            .field("autoplay", &self.autoplay)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tracing_test::traced_test;

    use super::*;
    use crate::apply::RecordingHandle;
    use crate::simulated::SimulatedEngine;

    type Shared = Rc<RefCell<RecordingHandle>>;

    fn handles(count: usize) -> Vec<Option<Shared>> {
        (0..count)
            .map(|_| Some(Rc::new(RefCell::new(RecordingHandle::new()))))
            .collect()
    }

    #[test]
    #[traced_test]
    fn lifecycle_is_logged() {
        let mut engine = SimulatedEngine::new(handles(4), true);
        let mut carousel = Carousel::mount(&mut engine, CarouselOptions::video_reviews());
        assert!(logs_contain("carousel mounted"));

        engine.set_slides(handles(2));
        for event in engine.drain_events() {
            carousel.handle_event(&engine, event);
        }
        assert!(logs_contain("carousel reinit"));
        assert!(logs_contain("snap_count=2"));

        carousel.unmount();
        assert!(logs_contain("carousel unmounted"));
    }

    #[test]
    fn neighbors_wrap() {
        assert_eq!(
            neighbors(0, 4),
            Some(Neighbors {
                prev: 3,
                current: 0,
                next: 1
            })
        );
        let last = neighbors(3, 4).unwrap();
        assert_eq!((last.prev, last.next), (2, 0));
        assert_eq!(neighbors(0, 0), None);
        let single = neighbors(0, 1).unwrap();
        assert_eq!((single.prev, single.current, single.next), (0, 0, 0));
    }
}
