#![forbid(unsafe_code)]

//! Carousel indicators: reviewer avatars and pagination dots.

use crate::class_list::{ClassList, StyleDescriptor};
use crate::state::{Activity, StateStyle};

/// Role of an avatar in the reviews header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvatarDotKind {
    /// The current review.
    Highlight,
    /// A neighbor of the current review.
    Small,
    /// Any other avatar.
    #[default]
    Normal,
}

impl AvatarDotKind {
    /// Diameter in pixels.
    #[must_use]
    pub const fn size_px(self) -> u32 {
        match self {
            Self::Highlight => 96,
            Self::Small => 48,
            Self::Normal => 72,
        }
    }

    /// Ring around the avatar.
    #[must_use]
    pub const fn ring(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Highlight => "ring-4 ring-primary",
            Self::Small | Self::Normal => "ring-2 ring-gray-200",
        })
    }

    /// Opacity class.
    #[must_use]
    pub const fn opacity(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Small => "opacity-80",
            Self::Highlight | Self::Normal => "opacity-100",
        })
    }

    /// Full class list for the avatar button.
    #[must_use]
    pub fn classes(self) -> ClassList {
        ClassList::new()
            .with("relative rounded-full overflow-hidden")
            .with_style(self.ring())
            .with_style(self.opacity())
            .with("focus:outline-none focus:ring-2 focus:ring-primary/60")
    }

    /// Inline `width`/`height` style.
    #[must_use]
    pub fn inline_size(self) -> String {
        let px = self.size_px();
        format!("width: {px}px; height: {px}px")
    }
}

/// Pagination dot families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotIndicator {
    /// Thin pill under the text reviews.
    Reviews,
    /// Round dot under the about cards.
    About,
}

impl DotIndicator {
    /// State table for this family.
    #[must_use]
    pub const fn style(self) -> StateStyle {
        match self {
            Self::Reviews => StateStyle::new(
                "h-2 rounded-full transition-all",
                "bg-primary w-12",
                "bg-gray-300 w-2",
            ),
            Self::About => StateStyle::new(
                "w-3 h-3 rounded-full transition-colors",
                "bg-primary hover:bg-primary-hover w-20",
                "bg-gray-300 hover:bg-gray-400",
            ),
        }
    }

    /// Classes for one dot.
    #[must_use]
    pub fn classes(self, state: Activity) -> ClassList {
        self.style().resolve(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_sizes() {
        assert_eq!(AvatarDotKind::Highlight.size_px(), 96);
        assert_eq!(AvatarDotKind::Small.size_px(), 48);
        assert_eq!(AvatarDotKind::Normal.size_px(), 72);
        assert_eq!(AvatarDotKind::Small.inline_size(), "width: 48px; height: 48px");
    }

    #[test]
    fn highlight_ring_and_small_opacity() {
        let highlight = AvatarDotKind::Highlight.classes();
        assert!(highlight.contains("ring-4"));
        assert!(highlight.contains("opacity-100"));
        assert!(AvatarDotKind::Small.classes().contains("opacity-80"));
    }

    #[test]
    fn dot_states() {
        assert!(DotIndicator::Reviews.classes(Activity::Active).contains("w-12"));
        assert!(DotIndicator::Reviews.classes(Activity::Inactive).contains("w-2"));
        assert!(DotIndicator::About.classes(Activity::Active).contains("w-20"));
    }
}
