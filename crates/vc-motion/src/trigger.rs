#![forbid(unsafe_code)]

//! Scroll trigger positions and play-once semantics.
//!
//! A position such as `"top 60%"` reads "when the element's top edge
//! reaches 60% of the viewport height". Positions are measured from the top
//! of the viewport, so a smaller percentage fires later.

use std::fmt;
use std::str::FromStr;

use crate::error::MotionError;

/// Edge of the trigger element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Vertical center.
    Center,
    /// Bottom edge.
    Bottom,
}

impl Edge {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    const fn fraction(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// Element edge paired with a viewport offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    /// Edge of the element that is tracked.
    pub element_edge: Edge,
    /// Viewport line, as a percentage of the viewport height from the top.
    pub viewport_percent: f64,
}

impl TriggerPosition {
    /// Create a position.
    #[must_use]
    pub const fn new(element_edge: Edge, viewport_percent: f64) -> Self {
        Self {
            element_edge,
            viewport_percent,
        }
    }

    /// Whether an element at `element_top` with `element_height`, in
    /// viewport coordinates, has reached this position.
    #[must_use]
    pub fn is_reached(&self, element_top: f64, element_height: f64, viewport_height: f64) -> bool {
        let edge = element_top + element_height * self.element_edge.fraction();
        edge <= viewport_height * self.viewport_percent / 100.0
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.element_edge.as_str(), self.viewport_percent)
    }
}

impl FromStr for TriggerPosition {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| MotionError::InvalidTrigger {
            input: s.to_string(),
            reason,
        };
        let mut tokens = s.split_whitespace();
        let edge = tokens.next().ok_or_else(|| invalid("empty position"))?;
        let edge = Edge::parse(edge).ok_or_else(|| invalid("unknown element edge"))?;
        let viewport = tokens.next().ok_or_else(|| invalid("missing viewport offset"))?;
        if tokens.next().is_some() {
            return Err(invalid("trailing tokens"));
        }
        let viewport_percent = match Edge::parse(viewport) {
            Some(keyword) => keyword.fraction() * 100.0,
            None => viewport
                .strip_suffix('%')
                .and_then(|n| n.parse::<f64>().ok())
                .filter(|n| n.is_finite())
                .ok_or_else(|| invalid("viewport offset must be a keyword or percentage"))?,
        };
        Ok(Self::new(edge, viewport_percent))
    }
}

/// What a trigger does on one of its four transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Start or continue forward.
    Play,
    /// Freeze.
    Pause,
    /// Continue from a pause.
    Resume,
    /// Play backwards.
    Reverse,
    /// Start over from the beginning.
    Restart,
    /// Jump back to the start state.
    Reset,
    /// Jump to the end state.
    Complete,
    /// Do nothing.
    None,
}

impl ToggleAction {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            _ => return None,
        })
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reverse => "reverse",
            Self::Restart => "restart",
            Self::Reset => "reset",
            Self::Complete => "complete",
            Self::None => "none",
        }
    }
}

/// Actions for enter, leave, enter-back and leave-back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    /// Scrolling down past the start.
    pub on_enter: ToggleAction,
    /// Scrolling down past the end.
    pub on_leave: ToggleAction,
    /// Scrolling up past the end.
    pub on_enter_back: ToggleAction,
    /// Scrolling up past the start.
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `"play none none none"`: play on first entry, never reverse.
    pub const PLAY_ONCE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_ONCE
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter.as_str(),
            self.on_leave.as_str(),
            self.on_enter_back.as_str(),
            self.on_leave_back.as_str()
        )
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions: Option<Vec<ToggleAction>> =
            s.split_whitespace().map(ToggleAction::parse).collect();
        match actions.as_deref() {
            Some(&[on_enter, on_leave, on_enter_back, on_leave_back]) => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(MotionError::InvalidToggleActions(s.to_string())),
        }
    }
}

/// Default start for fade and slide presets.
pub const START_TOP_60: TriggerPosition = TriggerPosition::new(Edge::Top, 60.0);
/// Default start for text reveal and scale presets.
pub const START_TOP_80: TriggerPosition = TriggerPosition::new(Edge::Top, 80.0);
/// Default end.
pub const END_BOTTOM_20: TriggerPosition = TriggerPosition::new(Edge::Bottom, 20.0);

/// Scroll-linked activation for a tween.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    /// Selector of the element whose position is tracked.
    pub target: Option<String>,
    /// Where the tween starts.
    pub start: TriggerPosition,
    /// Where the trigger ends.
    pub end: Option<TriggerPosition>,
    /// Transition behavior.
    pub toggle_actions: ToggleActions,
}

impl ScrollTrigger {
    /// Play-once trigger starting at `start`.
    #[must_use]
    pub const fn new(start: TriggerPosition) -> Self {
        Self {
            target: None,
            start,
            end: None,
            toggle_actions: ToggleActions::PLAY_ONCE,
        }
    }

    /// Track `selector` instead of the animated element.
    #[must_use]
    pub fn on(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    /// Set the end position.
    #[must_use]
    pub const fn until(mut self, end: TriggerPosition) -> Self {
        self.end = Some(end);
        self
    }
}

/// Tracks one trigger across scroll updates.
#[derive(Debug, Clone, Default)]
pub struct TriggerState {
    entered: bool,
    played: bool,
}

impl TriggerState {
    /// A trigger that has not fired.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tween has been started.
    #[must_use]
    pub const fn has_played(&self) -> bool {
        self.played
    }

    /// Feed the element's current position. Returns the action to run when
    /// a transition across the start line happens.
    pub fn update(
        &mut self,
        trigger: &ScrollTrigger,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> Option<ToggleAction> {
        let reached = trigger
            .start
            .is_reached(element_top, element_height, viewport_height);
        let action = match (self.entered, reached) {
            (false, true) => trigger.toggle_actions.on_enter,
            (true, false) => trigger.toggle_actions.on_leave_back,
            _ => return None,
        };
        self.entered = reached;
        match action {
            ToggleAction::None => None,
            ToggleAction::Play if self.played => None,
            ToggleAction::Play | ToggleAction::Restart => {
                self.played = true;
                Some(action)
            }
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presets() {
        assert_eq!("top 60%".parse::<TriggerPosition>(), Ok(START_TOP_60));
        assert_eq!("bottom 20%".parse::<TriggerPosition>(), Ok(END_BOTTOM_20));
        assert_eq!(
            "center center".parse::<TriggerPosition>(),
            Ok(TriggerPosition::new(Edge::Center, 50.0))
        );
        assert_eq!(START_TOP_80.to_string(), "top 80%");
    }

    #[test]
    fn rejects_malformed_positions() {
        for input in ["", "top", "left 60%", "top sixty", "top 60% extra", "top 60"] {
            assert!(input.parse::<TriggerPosition>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn reached_when_edge_crosses_line() {
        assert!(!START_TOP_60.is_reached(700.0, 200.0, 1000.0));
        assert!(START_TOP_60.is_reached(600.0, 200.0, 1000.0));
        assert!(END_BOTTOM_20.is_reached(0.0, 150.0, 1000.0));
        assert!(!END_BOTTOM_20.is_reached(0.0, 250.0, 1000.0));
    }

    #[test]
    fn toggle_actions_parse() {
        let actions: ToggleActions = "play none none none".parse().unwrap();
        assert_eq!(actions, ToggleActions::PLAY_ONCE);
        assert_eq!(actions.to_string(), "play none none none");
        assert!("play none".parse::<ToggleActions>().is_err());
        assert!("play none none bounce".parse::<ToggleActions>().is_err());
    }

    #[test]
    fn plays_once_and_never_reverses() {
        let trigger = ScrollTrigger::new(START_TOP_60).on("#meet");
        let mut state = TriggerState::new();
        assert_eq!(state.update(&trigger, 900.0, 100.0, 1000.0), None);
        assert_eq!(
            state.update(&trigger, 500.0, 100.0, 1000.0),
            Some(ToggleAction::Play)
        );
        assert_eq!(state.update(&trigger, 900.0, 100.0, 1000.0), None);
        assert_eq!(state.update(&trigger, 500.0, 100.0, 1000.0), None);
        assert!(state.has_played());
    }
}
