#![forbid(unsafe_code)]

//! Timer-driven autoplay.
//!
//! The host advances the timer with [`Autoplay::tick`]; when the delay has
//! elapsed the timer reports what the carousel should do next. Pointer and
//! hover input pause or stop the timer according to [`AutoplayOptions`].

use std::time::Duration;

/// Autoplay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayOptions {
    /// Time spent on each snap.
    pub delay: Duration,
    /// Stop for good once the user drags or clicks.
    pub stop_on_interaction: bool,
    /// Pause while the pointer hovers the carousel.
    pub stop_on_mouse_enter: bool,
    /// Stop at the last snap instead of rewinding (non-looping engines).
    pub stop_on_last_snap: bool,
}

impl AutoplayOptions {
    /// Defaults for a given delay: keep playing through interaction, pause
    /// on hover, rewind at the end.
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            stop_on_interaction: false,
            stop_on_mouse_enter: true,
            stop_on_last_snap: false,
        }
    }

    /// About section carousel.
    #[must_use]
    pub const fn about() -> Self {
        Self::with_delay(Duration::from_millis(5000))
    }

    /// Text reviews carousel.
    #[must_use]
    pub const fn reviews() -> Self {
        Self::with_delay(Duration::from_millis(6000))
    }
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self::with_delay(Duration::from_millis(4000))
    }
}

/// What the carousel should do when the timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayAction {
    /// Advance one snap.
    ScrollNext,
    /// Return to the first snap.
    Rewind,
}

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    /// Counting down.
    Playing,
    /// Paused while hovered; resumes on leave.
    Paused,
    /// Stopped until [`Autoplay::play`] is called.
    Stopped,
}

/// Autoplay timer.
#[derive(Debug, Clone)]
pub struct Autoplay {
    options: AutoplayOptions,
    state: AutoplayState,
    elapsed: Duration,
}

impl Autoplay {
    /// A playing timer.
    #[must_use]
    pub const fn new(options: AutoplayOptions) -> Self {
        Self {
            options,
            state: AutoplayState::Playing,
            elapsed: Duration::ZERO,
        }
    }

    /// Configuration.
    #[must_use]
    pub const fn options(&self) -> &AutoplayOptions {
        &self.options
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> AutoplayState {
        self.state
    }

    /// Whether the timer is counting down.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == AutoplayState::Playing
    }

    /// Time left before the timer fires. `None` unless playing.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.is_playing()
            .then(|| self.options.delay.saturating_sub(self.elapsed))
    }

    /// Start or resume counting from zero.
    pub fn play(&mut self) {
        self.state = AutoplayState::Playing;
        self.elapsed = Duration::ZERO;
    }

    /// Stop until [`Self::play`].
    pub fn stop(&mut self) {
        self.state = AutoplayState::Stopped;
        self.elapsed = Duration::ZERO;
    }

    /// Restart the countdown without changing state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Pointer entered the carousel.
    pub fn mouse_enter(&mut self) {
        if self.options.stop_on_mouse_enter && self.is_playing() {
            self.state = AutoplayState::Paused;
        }
    }

    /// Pointer left the carousel.
    pub fn mouse_leave(&mut self) {
        if self.state == AutoplayState::Paused {
            self.play();
        }
    }

    /// User dragged or clicked a control.
    pub fn interaction(&mut self) {
        if self.options.stop_on_interaction {
            self.stop();
        } else {
            self.reset();
        }
    }

    /// Advance the timer by `dt`.
    ///
    /// `can_scroll_next` tells the timer whether the engine has a next snap
    /// (always true while looping).
    pub fn tick(&mut self, dt: Duration, can_scroll_next: bool) -> Option<AutoplayAction> {
        if !self.is_playing() {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.options.delay {
            return None;
        }
        self.elapsed = Duration::ZERO;
        if can_scroll_next {
            Some(AutoplayAction::ScrollNext)
        } else if self.options.stop_on_last_snap {
            self.stop();
            None
        } else {
            Some(AutoplayAction::Rewind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn presets() {
        assert_eq!(AutoplayOptions::about().delay, Duration::from_millis(5000));
        assert_eq!(AutoplayOptions::reviews().delay, Duration::from_millis(6000));
        let reviews = AutoplayOptions::reviews();
        assert!(!reviews.stop_on_interaction);
        assert!(reviews.stop_on_mouse_enter);
        assert!(!reviews.stop_on_last_snap);
    }

    #[test]
    fn fires_after_delay() {
        let mut autoplay = Autoplay::new(AutoplayOptions::about());
        for _ in 0..4 {
            assert_eq!(autoplay.tick(SECOND, true), None);
        }
        assert_eq!(autoplay.tick(SECOND, true), Some(AutoplayAction::ScrollNext));
        assert_eq!(autoplay.time_until_next(), Some(Duration::from_millis(5000)));
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut autoplay = Autoplay::new(AutoplayOptions::reviews());
        autoplay.tick(SECOND * 3, true);
        autoplay.mouse_enter();
        assert_eq!(autoplay.state(), AutoplayState::Paused);
        assert_eq!(autoplay.tick(SECOND * 10, true), None);
        autoplay.mouse_leave();
        assert!(autoplay.is_playing());
        assert_eq!(autoplay.tick(SECOND * 5, true), None);
        assert_eq!(autoplay.tick(SECOND, true), Some(AutoplayAction::ScrollNext));
    }

    #[test]
    fn interaction_resets_without_stopping() {
        let mut autoplay = Autoplay::new(AutoplayOptions::reviews());
        autoplay.tick(SECOND * 5, true);
        autoplay.interaction();
        assert!(autoplay.is_playing());
        assert_eq!(autoplay.tick(SECOND * 5, true), None);
    }

    #[test]
    fn interaction_can_stop() {
        let mut options = AutoplayOptions::reviews();
        options.stop_on_interaction = true;
        let mut autoplay = Autoplay::new(options);
        autoplay.interaction();
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
        assert_eq!(autoplay.tick(SECOND * 60, true), None);
    }

    #[test]
    fn last_snap_rewinds_or_stops() {
        let mut autoplay = Autoplay::new(AutoplayOptions::about());
        assert_eq!(autoplay.tick(SECOND * 5, false), Some(AutoplayAction::Rewind));

        let mut options = AutoplayOptions::about();
        options.stop_on_last_snap = true;
        let mut autoplay = Autoplay::new(options);
        assert_eq!(autoplay.tick(SECOND * 5, false), None);
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
    }
}
