#![forbid(unsafe_code)]

//! Contact form.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::form::Form;
use crate::rules::{EmailRule, Rule, check_field};

/// Longest accepted email address.
pub const MAX_EMAIL_LEN: usize = 255;

const NAME_RULES: &[(Rule, &str)] = &[(Rule::MinLength(2), "contact.form.nameError")];
const EMAIL_RULES: &[(Rule, &str)] = &[
    (Rule::Email(EmailRule::Strict), "contact.form.emailError"),
    (Rule::MaxLength(MAX_EMAIL_LEN), "contact.form.emailError"),
];
const MESSAGE_RULES: &[(Rule, &str)] = &[(Rule::MinLength(10), "contact.form.messageError")];
const PHONE_RULES: &[(Rule, &str)] = &[(Rule::MinLength(10), "contact.form.phoneError")];

/// "Get in touch" form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name, two characters or more.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Phone number, ten characters or more.
    pub phone: String,
    /// Message body, ten characters or more.
    pub message: String,
}

impl Form for ContactForm {
    const NAME: &'static str = "contact";
    const SUCCESS_KEY: &'static str = "contact.successMessage";
    const ERROR_KEY: &'static str = "contact.errorMessage";
    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "message"];

    fn validate(&self) -> Vec<FieldError> {
        [
            check_field("name", &self.name, NAME_RULES),
            check_field("email", &self.email, EMAIL_RULES),
            check_field("phone", &self.phone, PHONE_RULES),
            check_field("message", &self.message, MESSAGE_RULES),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
