#![forbid(unsafe_code)]

//! Engine event kinds and the per-engine listener registry.
//!
//! Listeners register interest in a set of [`EngineEvent`] kinds and hold a
//! [`Subscription`] guard. Dropping the guard unregisters the listener, so
//! a carousel that is torn down can never receive further events.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Events emitted by a scroll engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// Scrolling settled on a snap.
    Select,
    /// Slides or viewport changed; layout must be recomputed.
    ReInit,
    /// Scroll position moved.
    Scroll,
}

impl EngineEvent {
    /// Every event kind.
    pub const ALL: [Self; 3] = [Self::Select, Self::ReInit, Self::Scroll];

    /// Wire name of the event.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::ReInit => "reInit",
            Self::Scroll => "scroll",
        }
    }
}

impl fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type ListenerId = u64;

#[derive(Debug, Default)]
struct HubState {
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Vec<EngineEvent>)>,
}

/// Listener registry owned by a scroll engine.
///
/// Cloning a hub yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct EventHub {
    state: Rc<RefCell<HubState>>,
}

impl EventHub {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `kinds`. The listener stays registered for as
    /// long as the returned guard lives.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, kinds: &[EngineEvent]) -> Subscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let mut kinds = kinds.to_vec();
        kinds.dedup();
        state.listeners.push((id, kinds.clone()));
        tracing::trace!(listener = id, ?kinds, "listener registered");
        Subscription {
            id,
            kinds,
            hub: Rc::downgrade(&self.state),
        }
    }

    /// Number of live listeners interested in `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EngineEvent) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, kinds)| kinds.contains(&kind))
            .count()
    }

    /// Whether anyone listens for `kind`.
    #[must_use]
    pub fn has_listeners(&self, kind: EngineEvent) -> bool {
        self.listener_count(kind) > 0
    }

    /// Number of live listeners regardless of kind.
    #[must_use]
    pub fn total_listeners(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

/// Guard for a registered listener. Unregisters on drop.
pub struct Subscription {
    id: ListenerId,
    kinds: Vec<EngineEvent>,
    hub: Weak<RefCell<HubState>>,
}

impl Subscription {
    /// Event kinds this listener receives.
    #[must_use]
    pub fn kinds(&self) -> &[EngineEvent] {
        &self.kinds
    }

    /// Whether this listener receives `kind`.
    #[must_use]
    pub fn listens_to(&self, kind: EngineEvent) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether the engine that issued this subscription is still alive.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.hub.strong_count() > 0
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("kinds", &self.kinds)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Engine may already be gone.
        if let Some(state) = self.hub.upgrade() {
            state.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            tracing::trace!(listener = self.id, "listener released");
        }
    }
}
