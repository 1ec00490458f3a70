#![forbid(unsafe_code)]

//! Call-to-action button variants.

use crate::class_list::{ClassList, StyleDescriptor};

/// Classes shared by every button.
pub const BUTTON_BASE: StyleDescriptor = StyleDescriptor::new(
    "font-medium transition-all shadow-md hover:shadow-lg cursor-pointer text-center flex flex-center",
);

/// Shape applied after variant and size.
pub const BUTTON_SHAPE: StyleDescriptor = StyleDescriptor::new("rounded-full");

/// Link target of a button without an explicit `href`.
pub const DEFAULT_BUTTON_HREF: &str = "#enroll";

/// Color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ButtonVariant {
    /// Brand gradient.
    #[default]
    Primary,
    /// Muted gray.
    Secondary,
    /// Transparent with a brand border.
    Outline,
}

impl ButtonVariant {
    /// All variants.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Outline];

    /// Classes for this variant.
    #[must_use]
    pub const fn style(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Primary => {
                "bg-linear-to-t from-primary-hover to-primary text-white hover:from-primary-hover hover:to-primary"
            }
            Self::Secondary => "bg-gray-100 text-secondary hover:bg-gray-200",
            Self::Outline => "bg-transparent border border-primary text-primary hover:bg-primary/10",
        })
    }
}

/// Padding and type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ButtonSize {
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large, never wraps.
    Lg,
}

impl ButtonSize {
    /// All sizes.
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    /// Classes for this size.
    #[must_use]
    pub const fn style(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Sm => "text-xs md:text-sm px-8 py-2 md:px-16 md:py-2",
            Self::Md => "text-sm md:text-base px-8 py-2 md:px-16 md:py-2 rounded-md",
            Self::Lg => "text-sm md:text-base text-nowrap px-8 py-2 md:px-16 md:py-4",
        })
    }
}

/// Full class list: base, variant, size, shape, then caller extras.
#[must_use]
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> ClassList {
    ClassList::from(BUTTON_BASE)
        .with_style(variant.style())
        .with_style(size.style())
        .with_style(BUTTON_SHAPE)
        .with(extra)
}
