#![forbid(unsafe_code)]

//! Focus carousel engine for the VClasses site.
//!
//! The crate turns a scroll engine's continuous position into per-slide
//! scale/opacity weights, tracks which snap is selected, and manages the
//! lifetime of the carousel's subscription to engine events.
//!
//! # Layers
//!
//! - [`tween`]: pure weight math, no side effects.
//! - [`apply`]: the [`VisualHandle`] seam that displays a weight.
//! - [`engine`] and [`events`]: the [`ScrollEngine`] collaborator and its
//!   listener registry.
//! - [`carousel`]: mount, dispatch, reinit, navigation and teardown.
//! - [`simulated`]: a deterministic engine for tests and static rendering.
//!
//! # Example
//!
//! ```
//! use vc_carousel::{Carousel, CarouselOptions, InlineStyle, SimulatedEngine};
//!
//! let slides = vec![Some(InlineStyle::new()); 6];
//! let mut engine = SimulatedEngine::new(slides, true);
//! let mut carousel = Carousel::mount(&mut engine, CarouselOptions::video_reviews());
//!
//! engine.drag_to(0.1);
//! engine.settle();
//! let events = engine.drain_events();
//! carousel.dispatch(&engine, events);
//! assert_eq!(carousel.selected_index(), 1);
//! carousel.unmount();
//! ```

pub mod apply;
pub mod autoplay;
pub mod carousel;
pub mod engine;
pub mod events;
pub mod options;
pub mod selection;
pub mod simulated;
pub mod tween;

pub use apply::{InlineStyle, RecordingHandle, VisualHandle, apply_weights};
pub use autoplay::{Autoplay, AutoplayAction, AutoplayOptions, AutoplayState};
pub use carousel::{Carousel, Dot, Neighbors, neighbors};
pub use engine::ScrollEngine;
pub use events::{EngineEvent, EventHub, Subscription};
pub use options::{Align, Breakpoint, CarouselOptions, ContainScroll, DirectionPolicy};
pub use selection::{SelectionState, SelectionTracker};
pub use simulated::SimulatedEngine;
pub use tween::{
    LoopPoint, SlideWeight, TWEEN_FACTOR_BASE, TweenFrame, TweenLayout, TweenWeight, WrapSign,
    compute_weights, tween_factor,
};
