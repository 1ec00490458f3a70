#![forbid(unsafe_code)]

//! Selected-snap tracking.
//!
//! The selected index only moves when the engine reports a settle. Scroll
//! frames in between mark the tracker as transitioning but never change
//! what the UI shows as selected.

/// Whether the carousel is at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// At rest on a snap.
    Settled(usize),
    /// Moving away from a snap.
    Transitioning {
        /// Snap that was selected when the movement began.
        from: usize,
    },
}

/// Tracks the selected snap across scroll and settle events.
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    state: SelectionState,
    settle_count: u64,
}

impl SelectionTracker {
    /// At rest on `start`.
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Self {
            state: SelectionState::Settled(start),
            settle_count: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Index shown as selected.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        match self.state {
            SelectionState::Settled(index) | SelectionState::Transitioning { from: index } => {
                index
            }
        }
    }

    /// Whether the carousel is moving.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        matches!(self.state, SelectionState::Transitioning { .. })
    }

    /// Number of settles observed, i.e. selection updates published.
    #[must_use]
    pub const fn settle_count(&self) -> u64 {
        self.settle_count
    }

    /// A scroll frame arrived.
    pub fn on_scroll(&mut self) {
        if let SelectionState::Settled(index) = self.state {
            self.state = SelectionState::Transitioning { from: index };
        }
    }

    /// The engine settled on `index`.
    pub fn on_settle(&mut self, index: usize) {
        self.state = SelectionState::Settled(index);
        self.settle_count += 1;
    }

    /// Keep the selection inside a layout of `snap_count` snaps. Does not
    /// count as a settle.
    pub fn clamp_to(&mut self, snap_count: usize) {
        let last = snap_count.saturating_sub(1);
        self.state = match self.state {
            SelectionState::Settled(index) => SelectionState::Settled(index.min(last)),
            SelectionState::Transitioning { from } => SelectionState::Transitioning {
                from: from.min(last),
            },
        };
    }
}
