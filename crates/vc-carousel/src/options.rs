#![forbid(unsafe_code)]

//! Carousel configuration and the presets used by the site's carousels.

use vc_i18n::Direction;

use crate::autoplay::AutoplayOptions;

/// Where a snapped slide sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Leading edge.
    Start,
    /// Centered.
    #[default]
    Center,
    /// Trailing edge.
    End,
}

impl Align {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// How snaps near the edges are handled when not looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainScroll {
    /// Snaps may leave empty space at the edges.
    Disabled,
    /// Drop snaps that would leave empty space.
    #[default]
    TrimSnaps,
    /// Keep every snap and clamp the positions.
    KeepSnaps,
}

impl ContainScroll {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "false",
            Self::TrimSnaps => "trimSnaps",
            Self::KeepSnaps => "keepSnaps",
        }
    }
}

/// How a carousel's scroll direction is chosen.
///
/// The about and reviews carousels follow the page direction, while the
/// pricing and video carousels scroll left to right in every locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionPolicy {
    /// Use the locale's direction.
    #[default]
    FollowLocale,
    /// Always left to right.
    PinnedLtr,
}

impl DirectionPolicy {
    /// Effective direction for a page rendered in `page`.
    #[must_use]
    pub const fn resolve(self, page: Direction) -> Direction {
        match self {
            Self::FollowLocale => page,
            Self::PinnedLtr => Direction::Ltr,
        }
    }
}

/// Viewport width range overriding `slides_to_scroll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u32,
    /// Inclusive upper bound in CSS pixels.
    pub max_width: u32,
    /// Slides advanced per snap inside the range.
    pub slides_to_scroll: usize,
}

impl Breakpoint {
    /// Create a breakpoint.
    #[must_use]
    pub const fn new(min_width: u32, max_width: u32, slides_to_scroll: usize) -> Self {
        Self {
            min_width,
            max_width,
            slides_to_scroll,
        }
    }

    /// Whether `width` falls inside the range.
    #[must_use]
    pub const fn matches(&self, width: u32) -> bool {
        width >= self.min_width && width <= self.max_width
    }
}

/// Carousel configuration.
///
/// `align`, `contain_scroll`, `skip_snaps` and `drag_free` are read by the
/// host scroll engine through [`CarouselOptions::data_attributes`];
/// [`SimulatedEngine`](crate::SimulatedEngine) snaps one slide per position
/// and ignores them.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselOptions {
    /// Wrap around at the ends.
    pub looping: bool,
    /// Snap alignment. Host engine only.
    pub align: Align,
    /// Edge snap handling. Host engine only.
    pub contain_scroll: ContainScroll,
    /// Slides advanced per snap.
    pub slides_to_scroll: usize,
    /// Allow flicks to skip snaps. Host engine only.
    pub skip_snaps: bool,
    /// Free scrolling without snapping. Host engine only.
    pub drag_free: bool,
    /// Direction selection.
    pub direction: DirectionPolicy,
    /// Snap selected on mount.
    pub start_index: usize,
    /// Scale/opacity tween on scroll.
    pub tween: bool,
    /// Timer-driven advance.
    pub autoplay: Option<AutoplayOptions>,
    /// Width-dependent `slides_to_scroll` overrides; first match wins.
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            looping: false,
            align: Align::Center,
            contain_scroll: ContainScroll::TrimSnaps,
            slides_to_scroll: 1,
            skip_snaps: false,
            drag_free: false,
            direction: DirectionPolicy::FollowLocale,
            start_index: 0,
            tween: false,
            autoplay: None,
            breakpoints: Vec::new(),
        }
    }
}

impl CarouselOptions {
    /// Looping, centered, tweening video testimonials.
    #[must_use]
    pub fn video_reviews() -> Self {
        Self {
            looping: true,
            direction: DirectionPolicy::PinnedLtr,
            tween: true,
            ..Self::default()
        }
    }

    /// Pricing plans: like the video carousel, starting on the popular plan.
    #[must_use]
    pub fn pricing(popular_index: Option<usize>) -> Self {
        Self {
            start_index: popular_index.unwrap_or(0),
            ..Self::video_reviews()
        }
    }

    /// Text testimonials with autoplay.
    #[must_use]
    pub fn reviews() -> Self {
        Self {
            looping: true,
            contain_scroll: ContainScroll::KeepSnaps,
            autoplay: Some(AutoplayOptions::reviews()),
            ..Self::default()
        }
    }

    /// About cards: autoplay plus width breakpoints.
    #[must_use]
    pub fn about() -> Self {
        Self {
            looping: true,
            contain_scroll: ContainScroll::KeepSnaps,
            autoplay: Some(AutoplayOptions::about()),
            breakpoints: vec![
                Breakpoint::new(320, 640, 1),
                Breakpoint::new(641, 1024, 2),
                Breakpoint::new(1025, 1280, 3),
            ],
            ..Self::default()
        }
    }

    /// `data-carousel-*` attributes the host engine is configured from.
    #[must_use]
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data-carousel-loop", self.looping.to_string()),
            ("data-carousel-align", self.align.as_str().to_string()),
            ("data-carousel-contain", self.contain_scroll.as_str().to_string()),
            ("data-carousel-skip-snaps", self.skip_snaps.to_string()),
            ("data-carousel-drag-free", self.drag_free.to_string()),
        ]
    }

    /// `slides_to_scroll` for a viewport of `width` pixels.
    #[must_use]
    pub fn slides_to_scroll_for(&self, width: u32) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| bp.matches(width))
            .map_or(self.slides_to_scroll, |bp| bp.slides_to_scroll)
            .max(1)
    }
}
