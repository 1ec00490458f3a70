#![forbid(unsafe_code)]

//! Pricing plans and the billing toggle.

use serde::Serialize;
use vc_style::{PlanButtonVariant, PlanEmphasis};

/// Billing period selected by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub const ALL: [Self; 2] = [Self::Monthly, Self::Yearly];

    /// The other period.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Toggle label key, relative to `plans`.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// "per month" / "per year" key, relative to `plans`.
    #[must_use]
    pub const fn period_key(self) -> &'static str {
        match self {
            Self::Monthly => "period.monthly",
            Self::Yearly => "period.yearly",
        }
    }
}

/// One line of a plan's feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanFeature {
    /// Key relative to `plans.features`.
    pub key: &'static str,
    pub included: bool,
}

impl PlanFeature {
    const fn yes(key: &'static str) -> Self {
        Self {
            key,
            included: true,
        }
    }

    const fn no(key: &'static str) -> Self {
        Self {
            key,
            included: false,
        }
    }
}

/// A pricing plan card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    /// Key relative to `plans`, e.g. `basic.name`.
    pub name_key: &'static str,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub features: Vec<PlanFeature>,
    pub popular: bool,
    pub button_variant: PlanButtonVariant,
    /// Key relative to `plans.buttons`.
    pub button_key: &'static str,
}

impl Plan {
    /// Price shown for `period`.
    #[must_use]
    pub const fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.yearly_price,
        }
    }

    /// Whole-percent saving of yearly over twelve monthly payments.
    ///
    /// Zero when there is no monthly price or yearly costs more.
    #[must_use]
    pub fn save_percent(&self) -> u32 {
        let twelve = f64::from(self.monthly_price) * 12.0;
        if twelve <= 0.0 {
            return 0;
        }
        let saving = (twelve - f64::from(self.yearly_price)) / twelve * 100.0;
        saving.round().clamp(0.0, 100.0) as u32
    }

    #[must_use]
    pub const fn emphasis(&self) -> PlanEmphasis {
        PlanEmphasis::from_popular(self.popular)
    }
}

/// Index of the first popular plan.
#[must_use]
pub fn popular_index(plans: &[Plan]) -> Option<usize> {
    plans.iter().position(|plan| plan.popular)
}

/// Largest saving across `plans`, shown under the toggle.
#[must_use]
pub fn best_save_percent(plans: &[Plan]) -> u32 {
    plans.iter().map(Plan::save_percent).max().unwrap_or(0)
}

/// The published plans.
#[must_use]
pub fn standard_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "basic",
            name_key: "basic.name",
            monthly_price: 299,
            yearly_price: 2990,
            features: vec![
                PlanFeature::yes("liveSessions"),
                PlanFeature::yes("recordedLessons"),
                PlanFeature::no("homework"),
                PlanFeature::no("certificate"),
                PlanFeature::no("privateMentoring"),
                PlanFeature::no("prioritySupport"),
            ],
            popular: false,
            button_variant: PlanButtonVariant::Outline,
            button_key: "start",
        },
        Plan {
            id: "standard",
            name_key: "standard.name",
            monthly_price: 499,
            yearly_price: 4990,
            features: vec![
                PlanFeature::yes("liveSessions"),
                PlanFeature::yes("recordedLessons"),
                PlanFeature::yes("homework"),
                PlanFeature::yes("certificate"),
                PlanFeature::no("privateMentoring"),
                PlanFeature::no("prioritySupport"),
            ],
            popular: true,
            button_variant: PlanButtonVariant::Primary,
            button_key: "choose",
        },
        Plan {
            id: "premium",
            name_key: "premium.name",
            monthly_price: 899,
            yearly_price: 8990,
            features: vec![
                PlanFeature::yes("liveSessions"),
                PlanFeature::yes("recordedLessons"),
                PlanFeature::yes("homework"),
                PlanFeature::yes("certificate"),
                PlanFeature::yes("privateMentoring"),
                PlanFeature::yes("prioritySupport"),
            ],
            popular: false,
            button_variant: PlanButtonVariant::Secondary,
            button_key: "contact",
        },
    ]
}
