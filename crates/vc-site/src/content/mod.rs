#![forbid(unsafe_code)]

//! Locale-independent page content. Text lives in the message catalog;
//! these types hold keys, prices, media paths and interaction state.

pub mod about;
pub mod faq;
pub mod links;
pub mod plans;
pub mod reviews;

pub use about::{AboutCard, AboutIcon, standard_about_cards};
pub use faq::FaqAccordion;
pub use links::{
    CONTACT_ITEMS, ContactItem, FOOTER_LINKS, HEADER_NAV, LanguageOption, NavLink, SOCIAL_LINKS,
    SocialLink, language_options,
};
pub use plans::{BillingPeriod, Plan, PlanFeature, best_save_percent, popular_index, standard_plans};
pub use reviews::{
    MAX_RATING, TextReview, VideoModal, VideoReview, embed_url, standard_text_reviews,
    standard_video_reviews,
};

/// Everything the page renders besides text.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub plans: Vec<Plan>,
    pub text_reviews: Vec<TextReview>,
    pub video_reviews: Vec<VideoReview>,
    pub about_cards: Vec<AboutCard>,
}

impl SiteContent {
    /// The published content.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            plans: standard_plans(),
            text_reviews: standard_text_reviews(),
            video_reviews: standard_video_reviews(),
            about_cards: standard_about_cards(),
        }
    }

    #[must_use]
    pub fn popular_plan_index(&self) -> Option<usize> {
        popular_index(&self.plans)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::standard()
    }
}
