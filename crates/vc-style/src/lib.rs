#![forbid(unsafe_code)]

//! Style variants for the VClasses site.
//!
//! # Role
//! Every piece of conditional styling on the page is a closed enum mapped
//! to a [`StyleDescriptor`] through a lookup table. Renderers pick a variant
//! and compose the result with [`ClassList`]; no class string is built
//! from free-form input.
//!
//! # This crate provides
//! - [`ButtonVariant`] and [`ButtonSize`] for call-to-action links.
//! - Plan card, billing toggle, avatar, pagination dot, FAQ and form
//!   field tables.
//! - [`AboutCardPalette`] and the brand colors in [`palette`].
//! - [`mirror_for`] for direction-dependent backgrounds.
//!
//! # Example
//!
//! ```
//! use vc_style::{ButtonSize, ButtonVariant, button_classes};
//!
//! let classes = button_classes(ButtonVariant::Secondary, ButtonSize::Sm, "");
//! assert!(classes.contains("bg-gray-100"));
//! assert!(classes.to_string().ends_with("rounded-full"));
//! ```

pub mod about;
pub mod button;
pub mod class_list;
pub mod direction;
pub mod faq;
pub mod form;
pub mod indicators;
pub mod palette;
pub mod plan;
pub mod state;

pub use about::{AboutCardPalette, about_card_classes};
pub use button::{BUTTON_BASE, ButtonSize, ButtonVariant, DEFAULT_BUTTON_HREF, button_classes};
pub use class_list::{ClassList, StyleDescriptor};
pub use direction::{MIRROR_X, mirror_for, text_start};
pub use faq::FaqItemState;
pub use form::{FieldState, payment_option_classes};
pub use indicators::{AvatarDotKind, DotIndicator};
pub use palette::{Gradient, LOADING_GRADIENT, PLAN_GRADIENT};
pub use plan::{
    BILLING_OPTION, PlanButtonVariant, PlanEmphasis, plan_button_classes, plan_content_classes,
    plan_price_classes, plan_wrapper_classes,
};
pub use state::{Activity, StateStyle};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn variants_use_lowercase_names() {
        let json = serde_json::to_string(&ButtonVariant::Outline).unwrap();
        assert_eq!(json, "\"outline\"");
        let parsed: PlanButtonVariant = serde_json::from_str("\"secondary\"").unwrap();
        assert_eq!(parsed, PlanButtonVariant::Secondary);
    }
}
