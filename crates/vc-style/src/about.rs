#![forbid(unsafe_code)]

//! About-section card colors and sizing.

use crate::class_list::ClassList;
use crate::state::{Activity, StateStyle};

/// Background, decorative circle and inner shadow of one about card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AboutCardPalette {
    /// Card background.
    pub background: &'static str,
    /// Small circle behind the icon.
    pub circle: &'static str,
    /// Inner shadow, with alpha.
    pub shadow: &'static str,
}

impl AboutCardPalette {
    /// First card.
    pub const CORAL: Self = Self {
        background: "#F0926C",
        circle: "#F4BCA2",
        shadow: "#F0926C82",
    };
    /// Second card.
    pub const VIOLET: Self = Self {
        background: "#6629DE",
        circle: "#B08EF3",
        shadow: "#6629DE82",
    };
    /// Third card.
    pub const TEAL: Self = Self {
        background: "#2D7A73",
        circle: "#3C9C8C",
        shadow: "#2D7A7382",
    };

    /// Card order on the page.
    pub const ALL: [Self; 3] = [Self::CORAL, Self::VIOLET, Self::TEAL];

    /// Palette for card `index`, cycling.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Background utility class.
    #[must_use]
    pub fn background_class(&self) -> String {
        format!("bg-[{}]", self.background)
    }

    /// Circle utility class.
    #[must_use]
    pub fn circle_class(&self) -> String {
        format!("bg-[{}]", self.circle)
    }

    /// Shadow utility class.
    #[must_use]
    pub fn shadow_class(&self) -> String {
        format!("shadow-[{}]", self.shadow)
    }
}

/// Card frame; inactive cards shrink on small screens only.
pub const ABOUT_CARD: StateStyle = StateStyle::new(
    "flex flex-col justify-between rounded-[40px] mx-2 shadow-inner relative transition-all duration-500 ease-in-out",
    "min-h-[330px] sm:min-h-[500px] p-6 sm:p-8 scale-100 z-10 shadow-xl opacity-100",
    "min-h-[280px] sm:min-h-[500px] p-5 sm:p-8 scale-[0.88] sm:scale-100 z-0 sm:z-10 opacity-80 sm:opacity-100 shadow-sm sm:shadow-xl",
);

/// Card title.
pub const ABOUT_TITLE: StateStyle =
    StateStyle::new("text-white mb-8", "text-xl md:text-2xl", "text-lg md:text-2xl");

/// Card description.
pub const ABOUT_DESCRIPTION: StateStyle = StateStyle::new(
    "text-white leading-8 opacity-95",
    "text-sm md:text-base",
    "text-xs md:text-base",
);

/// Card icon.
pub const ABOUT_ICON: StateStyle = StateStyle::new(
    "object-contain drop-shadow-lg transition-all duration-500",
    "w-[200px] h-[200px] md:w-[220px] md:h-[220px]",
    "w-[170px] h-[170px] md:w-[220px] md:h-[220px]",
);

/// Frame classes for a card with `palette` in `state`.
#[must_use]
pub fn about_card_classes(palette: &AboutCardPalette, state: Activity) -> ClassList {
    ABOUT_CARD
        .resolve(state)
        .with(palette.background_class())
        .with(palette.shadow_class())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn palettes_in_page_order() {
        assert_eq!(AboutCardPalette::for_index(0).background, "#F0926C");
        assert_eq!(AboutCardPalette::for_index(1).circle, "#B08EF3");
        assert_eq!(AboutCardPalette::for_index(2).shadow, "#2D7A7382");
        assert_eq!(AboutCardPalette::for_index(3), AboutCardPalette::CORAL);
    }

    #[test]
    fn card_classes_carry_palette() {
        let classes = about_card_classes(&AboutCardPalette::VIOLET, Activity::Inactive);
        assert!(classes.contains("bg-[#6629DE]"));
        assert!(classes.contains("shadow-[#6629DE82]"));
        assert!(classes.contains("scale-[0.88]"));
        assert_eq!(AboutCardPalette::TEAL.circle_class(), "bg-[#3C9C8C]");
    }
}
