#![forbid(unsafe_code)]

//! Course checkout form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::form::Form;
use crate::rules::{EmailRule, Rule, check_field};

const REQUIRED: &str = "course.form.required";

const REQUIRED_RULES: &[(Rule, &str)] = &[(Rule::Required, REQUIRED)];
const EMAIL_RULES: &[(Rule, &str)] = &[
    (Rule::Required, REQUIRED),
    (Rule::Email(EmailRule::Basic), "course.form.emailInvalid"),
];

/// How the student pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    /// Card payment.
    #[default]
    Mastercard,
    /// Mobile wallet.
    VodafoneCash,
}

impl PaymentMethod {
    /// Options in display order.
    pub const ALL: [Self; 2] = [Self::Mastercard, Self::VodafoneCash];

    /// Form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mastercard => "mastercard",
            Self::VodafoneCash => "vodafoneCash",
        }
    }

    /// Label key.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Mastercard => "course.form.mastercard",
            Self::VodafoneCash => "course.form.vodafoneCash",
        }
    }

    /// Option icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Mastercard => "/assets/icons/course/master-card.png",
            Self::VodafoneCash => "/assets/icons/course/vodafone-cash.png",
        }
    }

    /// Parse a form value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == value)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enrollment form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Selected payment option.
    pub payment_method: PaymentMethod,
}

impl Form for CheckoutForm {
    const NAME: &'static str = "checkout";
    const SUCCESS_KEY: &'static str = "course.successMessage";
    const ERROR_KEY: &'static str = "course.errorMessage";
    const FIELDS: &'static [&'static str] = &["name", "phone", "email", "paymentMethod"];

    fn validate(&self) -> Vec<FieldError> {
        [
            check_field("name", &self.name, REQUIRED_RULES),
            check_field("phone", &self.phone, REQUIRED_RULES),
            check_field("email", &self.email, EMAIL_RULES),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
