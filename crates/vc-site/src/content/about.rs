#![forbid(unsafe_code)]

//! About section cards.

use vc_style::AboutCardPalette;

/// Icon drawn on an about card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AboutIcon {
    Target,
    Presentation,
    Chat,
}

impl AboutIcon {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Presentation => "presentation",
            Self::Chat => "chat",
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        format!("/assets/icons/about/{}.png", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutCard {
    /// Message group relative to `about`, e.g. `card1`.
    pub key: &'static str,
    pub icon: AboutIcon,
    pub palette: AboutCardPalette,
}

impl AboutCard {
    #[must_use]
    pub fn title_key(&self) -> String {
        format!("{}.title", self.key)
    }

    #[must_use]
    pub fn description_key(&self) -> String {
        format!("{}.description", self.key)
    }
}

#[must_use]
pub fn standard_about_cards() -> Vec<AboutCard> {
    [
        ("card1", AboutIcon::Target),
        ("card2", AboutIcon::Presentation),
        ("card3", AboutIcon::Chat),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (key, icon))| AboutCard {
        key,
        icon,
        palette: AboutCardPalette::for_index(index),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_pair_icons_with_palettes() {
        let cards = standard_about_cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].palette, AboutCardPalette::CORAL);
        assert_eq!(cards[1].icon.path(), "/assets/icons/about/presentation.png");
        assert_eq!(cards[2].palette, AboutCardPalette::TEAL);
        assert_eq!(cards[2].description_key(), "card3.description");
    }
}
