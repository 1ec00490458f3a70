#![forbid(unsafe_code)]

//! Pricing card and billing toggle styles.

use crate::class_list::{ClassList, StyleDescriptor};
use crate::state::{Activity, StateStyle};

/// Whether a plan is highlighted as the popular one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanEmphasis {
    /// Gradient border and oversized price.
    Popular,
    /// Frosted glass card.
    #[default]
    Regular,
}

impl PlanEmphasis {
    /// `Popular` when `popular` is true.
    #[must_use]
    pub const fn from_popular(popular: bool) -> Self {
        if popular { Self::Popular } else { Self::Regular }
    }

    /// Outer wrapper.
    #[must_use]
    pub const fn wrapper(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Popular => "plan-card-wrapper",
            Self::Regular => "rounded-3xl",
        })
    }

    /// Card body.
    #[must_use]
    pub const fn content(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Popular => "plan-card-content",
            Self::Regular => "rounded-3xl backdrop-blur-lg ring-1 ring-white/10 bg-black/10",
        })
    }

    /// Price figure.
    #[must_use]
    pub const fn price(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Popular => {
                "text-5xl bg-linear-to-r from-[#B67EFD] via-[#F088D2] to-[#FE5B3E] bg-clip-text text-transparent"
            }
            Self::Regular => "text-4xl text-gray-900 dark:text-white",
        })
    }
}

/// Button treatment inside a plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlanButtonVariant {
    /// Brand gradient.
    #[default]
    Primary,
    /// Solid secondary color.
    Secondary,
    /// White outline.
    Outline,
}

impl PlanButtonVariant {
    /// Classes for this variant.
    #[must_use]
    pub const fn style(self) -> StyleDescriptor {
        StyleDescriptor::new(match self {
            Self::Primary => {
                "bg-linear-to-r from-[#B67EFD] via-[#F088D2] to-[#FE5B3E] text-white hover:opacity-90 shadow-lg ring-1 ring-white/15"
            }
            Self::Secondary => "bg-secondary text-white hover:bg-secondary/90",
            Self::Outline => "border-2 border-white/50 text-white/80 hover:bg-[#B67EFD]/10",
        })
    }
}

const PLAN_WRAPPER_BASE: &str = "relative transition-all duration-300 h-full";
const PLAN_CONTENT_BASE: &str = "p-6 flex flex-col h-full transition-all duration-300";
const PLAN_BUTTON_BASE: &str = "w-full py-3 px-6 rounded-xl font-medium transition-colors";

/// Active card is enlarged; the rest are slightly faded.
pub const PLAN_CARD_STATE: StateStyle = StateStyle::new("", "transform scale-105", "opacity-90");

/// Feature line: unavailable features are dimmed.
pub const PLAN_FEATURE: StateStyle = StateStyle::new("text-sm", "text-white/90", "text-white/50");

/// One option of the monthly/yearly switch.
pub const BILLING_OPTION: StateStyle = StateStyle::new(
    "px-6 py-2 rounded-full text-sm font-medium transition-colors",
    "bg-white dark:bg-gray-700 text-gray-900 dark:text-white shadow-sm",
    "text-gray-500 dark:text-gray-400 hover:text-gray-700 dark:hover:text-gray-200",
);

/// Track around the billing options.
pub const BILLING_TRACK: StyleDescriptor =
    StyleDescriptor::new("inline-flex items-center bg-gray-800 rounded-full p-1 mb-12");

/// Yearly savings note.
pub const SAVINGS_NOTE: StyleDescriptor = StyleDescriptor::new("text-sm text-[#B67EFD]");

/// Wrapper classes for a plan card.
#[must_use]
pub fn plan_wrapper_classes(emphasis: PlanEmphasis) -> ClassList {
    ClassList::new()
        .with(PLAN_WRAPPER_BASE)
        .with_style(emphasis.wrapper())
}

/// Body classes for a plan card in `state`.
#[must_use]
pub fn plan_content_classes(emphasis: PlanEmphasis, state: Activity) -> ClassList {
    ClassList::from(emphasis.content())
        .with(PLAN_CONTENT_BASE)
        .with_style(PLAN_CARD_STATE.overlay(state))
}

/// Button classes for a plan card.
#[must_use]
pub fn plan_button_classes(variant: PlanButtonVariant) -> ClassList {
    ClassList::new().with(PLAN_BUTTON_BASE).with_style(variant.style())
}

/// Price classes, `font-bold` plus the emphasis scale.
#[must_use]
pub fn plan_price_classes(emphasis: PlanEmphasis) -> ClassList {
    ClassList::new().with("font-bold").with_style(emphasis.price())
}
