#![forbid(unsafe_code)]

//! The scroll engine seam.
//!
//! A [`ScrollEngine`] owns scroll physics, snapping and looping. The
//! carousel only reads geometry from it, asks it to move, and reacts to the
//! events it publishes through its [`EventHub`].

use crate::apply::VisualHandle;
use crate::events::EventHub;
use crate::tween::LoopPoint;

/// Scroll physics provider driving a carousel.
pub trait ScrollEngine {
    /// Visual node of a slide.
    type Handle: VisualHandle + Clone;

    /// Tween nodes of every slide, in slide order. `None` when a slide has
    /// no tween node.
    fn slide_handles(&self) -> Vec<Option<Self::Handle>>;

    /// Snap targets, normalized to `[0, 1]`.
    fn scroll_snap_list(&self) -> &[f64];

    /// Snap index → slide indices sharing that snap.
    fn slide_registry(&self) -> &[Vec<usize>];

    /// Scroll progress normalized like the snap list: `0.0` at the first
    /// snap and `1.0` at the last, or wrapped into `[0, 1)` when looping.
    fn scroll_progress(&self) -> f64;

    /// Slides currently visible in the viewport.
    fn slides_in_view(&self) -> Vec<usize>;

    /// Seam corrections for the current position. Empty when not looping.
    fn loop_points(&self) -> Vec<LoopPoint>;

    /// Whether the engine wraps around.
    fn is_looping(&self) -> bool;

    /// Snap the engine settled on most recently.
    fn selected_scroll_snap(&self) -> usize;

    /// Move to `index`. `jump` skips the animation.
    fn scroll_to(&mut self, index: usize, jump: bool);

    /// Listener registry for this engine.
    fn events(&self) -> &EventHub;

    /// Number of snaps.
    fn snap_count(&self) -> usize {
        self.scroll_snap_list().len()
    }

    /// Whether a previous snap exists.
    fn can_scroll_prev(&self) -> bool {
        self.is_looping() || self.selected_scroll_snap() > 0
    }

    /// Whether a next snap exists.
    fn can_scroll_next(&self) -> bool {
        self.is_looping() || self.selected_scroll_snap() + 1 < self.snap_count()
    }

    /// Move one snap back, wrapping when looping.
    fn scroll_prev(&mut self) {
        let count = self.snap_count();
        if count == 0 || !self.can_scroll_prev() {
            return;
        }
        let target = (self.selected_scroll_snap() + count - 1) % count;
        self.scroll_to(target, false);
    }

    /// Move one snap forward, wrapping when looping.
    fn scroll_next(&mut self) {
        let count = self.snap_count();
        if count == 0 || !self.can_scroll_next() {
            return;
        }
        let target = (self.selected_scroll_snap() + 1) % count;
        self.scroll_to(target, false);
    }
}
