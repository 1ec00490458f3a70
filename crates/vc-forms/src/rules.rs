#![forbid(unsafe_code)]

//! Field rules.
//!
//! A field is checked against an ordered list of `(Rule, message_key)`
//! pairs and the first failing rule is reported. Lengths count Unicode
//! scalar values, so Arabic names are measured by letter, not by byte.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{FieldError, ValidationErrorKind};

/// Pattern accepted by the checkout form.
pub const BASIC_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Pattern accepted by the contact form: a dotted domain with an
/// alphabetic top-level label.
pub const STRICT_EMAIL_PATTERN: &str =
    r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$";

static BASIC_EMAIL: LazyLock<Result<Regex, regex_lite::Error>> =
    LazyLock::new(|| Regex::new(BASIC_EMAIL_PATTERN));

static STRICT_EMAIL: LazyLock<Result<Regex, regex_lite::Error>> =
    LazyLock::new(|| Regex::new(STRICT_EMAIL_PATTERN));

fn matches(pattern: &LazyLock<Result<Regex, regex_lite::Error>>, value: &str) -> bool {
    match &**pattern {
        Ok(re) => re.is_match(value),
        Err(err) => {
            tracing::warn!(%err, "email pattern failed to compile");
            false
        }
    }
}

/// How strictly an email address is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailRule {
    /// Something `@` something `.` something, no whitespace.
    Basic,
    /// [`STRICT_EMAIL_PATTERN`], no leading dot and no `..` in the local part.
    Strict,
}

impl EmailRule {
    /// Whether `value` passes.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Basic => matches(&BASIC_EMAIL, value),
            Self::Strict => {
                !value.starts_with('.') && !value.contains("..") && matches(&STRICT_EMAIL, value)
            }
        }
    }
}

/// One check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank.
    Required,
    /// Email address.
    Email(EmailRule),
    /// At least `n` characters.
    MinLength(usize),
    /// At most `n` characters.
    MaxLength(usize),
}

impl Rule {
    /// The failure for `value`, if any.
    #[must_use]
    pub fn check(self, value: &str) -> Option<ValidationErrorKind> {
        let passes = match self {
            Self::Required => !value.trim().is_empty(),
            Self::Email(rule) => rule.accepts(value),
            Self::MinLength(n) => value.chars().count() >= n,
            Self::MaxLength(n) => value.chars().count() <= n,
        };
        if passes {
            None
        } else {
            Some(match self {
                Self::Required => ValidationErrorKind::Required,
                Self::Email(_) => ValidationErrorKind::InvalidEmail,
                Self::MinLength(n) => ValidationErrorKind::MinLength(n),
                Self::MaxLength(n) => ValidationErrorKind::MaxLength(n),
            })
        }
    }
}

/// Check `value` against `rules`, reporting the first failure.
#[must_use]
pub fn check_field(
    field: &'static str,
    value: &str,
    rules: &[(Rule, &'static str)],
) -> Option<FieldError> {
    rules.iter().find_map(|&(rule, message_key)| {
        rule.check(value).map(|kind| FieldError {
            field,
            kind,
            message_key,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_email() {
        assert!(EmailRule::Basic.accepts("a@b.c"));
        assert!(!EmailRule::Basic.accepts("a@b"));
        assert!(!EmailRule::Basic.accepts("a b@c.d"));
        assert!(!EmailRule::Basic.accepts(""));
    }

    #[test]
    fn strict_email() {
        assert!(EmailRule::Strict.accepts("sara.adel@vclasses.com"));
        assert!(EmailRule::Strict.accepts("Omar+news@Mail.Example.org"));
        assert!(!EmailRule::Strict.accepts("a@b.c"));
        assert!(!EmailRule::Strict.accepts(".a@b.com"));
        assert!(!EmailRule::Strict.accepts("a..b@c.com"));
        assert!(!EmailRule::Strict.accepts("a.@c.com"));
    }

    #[test]
    fn lengths_count_chars() {
        assert_eq!(Rule::MinLength(2).check("سا"), None);
        assert_eq!(
            Rule::MinLength(2).check("s"),
            Some(ValidationErrorKind::MinLength(2))
        );
        assert_eq!(
            Rule::MaxLength(3).check("abcd"),
            Some(ValidationErrorKind::MaxLength(3))
        );
    }

    #[test]
    fn first_failure_wins() {
        let rules = [
            (Rule::Required, "course.form.required"),
            (Rule::Email(EmailRule::Basic), "course.form.emailInvalid"),
        ];
        let missing = check_field("email", "  ", &rules).unwrap();
        assert_eq!(missing.kind, ValidationErrorKind::Required);
        assert_eq!(missing.message_key, "course.form.required");
        let bad = check_field("email", "nope", &rules).unwrap();
        assert_eq!(bad.message_key, "course.form.emailInvalid");
        assert!(check_field("email", "a@b.co", &rules).is_none());
    }
}
