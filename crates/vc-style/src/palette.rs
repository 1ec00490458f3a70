#![forbid(unsafe_code)]

//! Brand colors and gradients.

use std::fmt::Write as _;

/// Brand accent, also the loading spinner color.
pub const BRAND_PRIMARY: &str = "#fe5e3f";
/// Pink midpoint of the brand gradients.
pub const BRAND_PINK: &str = "#F088D2";
/// Violet used for plan highlights.
pub const BRAND_VIOLET: &str = "#B67EFD";
/// Deep orange end of the plan gradient.
pub const BRAND_ORANGE: &str = "#FE5B3E";

/// FAQ section background.
pub const NAVY: &str = "#061C3D";
/// Open FAQ item background.
pub const HIGHLIGHT_YELLOW: &str = "#ffd27a";
/// Footer background.
pub const FOOTER_BACKGROUND: &str = "#221314";
/// Review message bubble.
pub const BUBBLE_BACKGROUND: &str = "#1D1F20";
/// Muted subtitle text on dark backgrounds.
pub const MUTED_TEXT: &str = "#BCBCBC";
/// Form labels.
pub const LABEL_TEXT: &str = "#1E1E1E";
/// Form body text.
pub const FORM_TEXT: &str = "#193142";
/// Idle input border.
pub const FIELD_BORDER: &str = "#E0E0E0";
/// Focused input border.
pub const FIELD_FOCUS: &str = "#4A90E2";

/// A left-to-right linear gradient with evenly spaced stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Color stops in order.
    pub stops: [&'static str; 3],
}

impl Gradient {
    /// CSS `linear-gradient(90deg, ...)` value.
    #[must_use]
    pub fn css(&self) -> String {
        let last = self.stops.len().saturating_sub(1).max(1);
        let mut out = String::from("linear-gradient(90deg");
        for (i, stop) in self.stops.iter().enumerate() {
            let _ = write!(out, ", {stop} {}%", i * 100 / last);
        }
        out.push(')');
        out
    }
}

/// Popular plan price and primary plan button.
pub const PLAN_GRADIENT: Gradient = Gradient {
    stops: [BRAND_VIOLET, BRAND_PINK, BRAND_ORANGE],
};

/// Loading bar shimmer.
pub const LOADING_GRADIENT: Gradient = Gradient {
    stops: [BRAND_PRIMARY, BRAND_PINK, BRAND_PRIMARY],
};
