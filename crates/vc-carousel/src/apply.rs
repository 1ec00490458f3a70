#![forbid(unsafe_code)]

//! Applying computed weights to slide visuals.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::tween::{SlideWeight, TweenWeight};

/// A slide visual that can display a tween weight.
///
/// Implementations decide how the weight is presented; the web renderer
/// writes an inline `transform`/`opacity` declaration.
pub trait VisualHandle {
    /// Display `weight` as scale and opacity.
    fn apply_weight(&mut self, weight: TweenWeight);
}

impl<T: VisualHandle> VisualHandle for Rc<RefCell<T>> {
    fn apply_weight(&mut self, weight: TweenWeight) {
        self.borrow_mut().apply_weight(weight);
    }
}

/// Apply `weights` to `handles`, returning how many were applied.
///
/// Slide indices without a handle (missing or out of range) are skipped.
pub fn apply_weights<H: VisualHandle>(handles: &mut [Option<H>], weights: &[SlideWeight]) -> usize {
    let mut applied = 0;
    for slide in weights {
        if let Some(Some(handle)) = handles.get_mut(slide.slide_index) {
            handle.apply_weight(slide.weight);
            applied += 1;
        }
    }
    applied
}

/// Inline CSS declarations for a slide's tween node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    weight: Option<TweenWeight>,
}

impl InlineStyle {
    /// A node with no weight applied yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied weight.
    #[must_use]
    pub const fn weight(&self) -> Option<TweenWeight> {
        self.weight
    }

    /// The `style` attribute value; empty until a weight is applied.
    #[must_use]
    pub fn css(&self) -> String {
        let mut out = String::new();
        if let Some(weight) = self.weight {
            let _ = write!(out, "transform: scale({weight}); opacity: {weight}");
        }
        out
    }
}

impl VisualHandle for InlineStyle {
    fn apply_weight(&mut self, weight: TweenWeight) {
        self.weight = Some(weight);
    }
}

/// Handle that records every applied weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingHandle {
    applied: Vec<TweenWeight>,
}

impl RecordingHandle {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All weights, oldest first.
    #[must_use]
    pub fn applied(&self) -> &[TweenWeight] {
        &self.applied
    }

    /// Most recent weight.
    #[must_use]
    pub fn last(&self) -> Option<TweenWeight> {
        self.applied.last().copied()
    }

    /// Number of times a weight was applied.
    #[must_use]
    pub fn count(&self) -> usize {
        self.applied.len()
    }
}

impl VisualHandle for RecordingHandle {
    fn apply_weight(&mut self, weight: TweenWeight) {
        self.applied.push(weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_style_css() {
        let mut style = InlineStyle::new();
        assert_eq!(style.css(), "");
        style.apply_weight(TweenWeight::new(0.64));
        assert_eq!(style.css(), "transform: scale(0.64); opacity: 0.64");
    }

    #[test]
    fn missing_handles_are_skipped() {
        let mut handles = vec![Some(RecordingHandle::new()), None];
        let weights = [
            SlideWeight {
                slide_index: 0,
                weight: TweenWeight::FULL,
            },
            SlideWeight {
                slide_index: 1,
                weight: TweenWeight::FULL,
            },
            SlideWeight {
                slide_index: 7,
                weight: TweenWeight::ZERO,
            },
        ];
        assert_eq!(apply_weights(&mut handles, &weights), 1);
        assert_eq!(handles[0].as_ref().map(RecordingHandle::count), Some(1));
    }

    #[test]
    fn shared_handle_sees_updates() {
        let shared = Rc::new(RefCell::new(RecordingHandle::new()));
        let mut handles = vec![Some(Rc::clone(&shared))];
        apply_weights(
            &mut handles,
            &[SlideWeight {
                slide_index: 0,
                weight: TweenWeight::new(0.5),
            }],
        );
        assert_eq!(shared.borrow().last(), Some(TweenWeight::new(0.5)));
    }
}
