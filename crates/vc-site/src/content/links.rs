#![forbid(unsafe_code)]

//! Header navigation, language switcher and footer link lists.

use serde::Serialize;
use vc_i18n::Locale;

use crate::util::locale_href;

/// In-page anchor with a label key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label_key: &'static str,
    pub href: &'static str,
}

const fn nav(label_key: &'static str, href: &'static str) -> NavLink {
    NavLink { label_key, href }
}

/// Header menu, keys relative to `header.nav`.
pub const HEADER_NAV: [NavLink; 6] = [
    nav("home", "#home"),
    nav("about", "#about"),
    nav("course", "#enroll"),
    nav("reviews", "#reviews"),
    nav("plans", "#plans"),
    nav("contact", "#contact"),
];

/// Footer quick links, keys relative to `footer.links`.
pub const FOOTER_LINKS: [NavLink; 4] = [
    nav("home", "#home"),
    nav("about", "#about"),
    nav("plans", "#plans"),
    nav("contact", "#contact"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "facebook",
        href: "https://facebook.com/vclasses",
        icon: "/assets/icons/footer/facebook.png",
    },
    SocialLink {
        name: "instagram",
        href: "https://instagram.com/vclasses",
        icon: "/assets/icons/footer/instagram.png",
    },
    SocialLink {
        name: "youtube",
        href: "https://youtube.com/@vclasses",
        icon: "/assets/icons/footer/youtube.png",
    },
    SocialLink {
        name: "whatsapp",
        href: "https://wa.me/201000000000",
        icon: "/assets/icons/footer/whatsapp.png",
    },
];

/// Footer contact line. The text comes from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub icon: &'static str,
    /// Key relative to `footer.contact`.
    pub text_key: &'static str,
    /// Link target; the catalog text is appended for `mailto:` and `tel:`.
    pub href_scheme: Option<&'static str>,
}

pub const CONTACT_ITEMS: [ContactItem; 3] = [
    ContactItem {
        icon: "/assets/icons/footer/mail.png",
        text_key: "email",
        href_scheme: Some("mailto:"),
    },
    ContactItem {
        icon: "/assets/icons/footer/phone.png",
        text_key: "phone",
        href_scheme: Some("tel:"),
    },
    ContactItem {
        icon: "/assets/icons/footer/location.png",
        text_key: "address",
        href_scheme: None,
    },
];

impl ContactItem {
    /// Link for `text`, spaces removed from phone numbers.
    #[must_use]
    pub fn href(&self, text: &str) -> Option<String> {
        self.href_scheme.map(|scheme| {
            let target: String = if scheme == "tel:" {
                text.chars().filter(|c| !c.is_whitespace()).collect()
            } else {
                text.to_string()
            };
            format!("{scheme}{target}")
        })
    }
}

/// Language switcher entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: Locale,
    pub label: &'static str,
    pub href: String,
    pub current: bool,
}

/// One option per enabled locale, marking `current`.
#[must_use]
pub fn language_options(enabled: &[Locale], current: Locale, base_path: &str) -> Vec<LanguageOption> {
    enabled
        .iter()
        .map(|&locale| LanguageOption {
            locale,
            label: locale.native_name(),
            href: locale_href(base_path, locale.code()),
            current: locale == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_hrefs() {
        assert_eq!(
            CONTACT_ITEMS[0].href("hello@vclasses.com").as_deref(),
            Some("mailto:hello@vclasses.com")
        );
        assert_eq!(
            CONTACT_ITEMS[1].href("+20 100 000 0000").as_deref(),
            Some("tel:+201000000000")
        );
        assert_eq!(CONTACT_ITEMS[2].href("Cairo"), None);
    }

    #[test]
    fn languages_mark_current() {
        let options = language_options(&Locale::ALL, Locale::Ar, "/");
        assert_eq!(options.len(), 2);
        assert!(!options[0].current);
        assert!(options[1].current);
        assert_eq!(options[1].label, "العربية");
        assert_eq!(options[1].href, "/ar/");
    }

    #[test]
    fn nav_targets_are_section_ids() {
        assert!(HEADER_NAV.iter().all(|link| link.href.starts_with('#')));
        assert_eq!(HEADER_NAV[2].href, "#enroll");
    }
}
