#![forbid(unsafe_code)]

//! Student testimonials: text reviews, video reviews and the video modal.

use serde::Serialize;

/// Stars shown under every testimonial.
pub const MAX_RATING: u8 = 5;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Autoplaying embed URL for a YouTube video.
#[must_use]
pub fn embed_url(youtube_id: &str) -> String {
    format!("{EMBED_BASE}{youtube_id}?autoplay=1&rel=0")
}

/// A written testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextReview {
    /// Message group relative to `reviews`, e.g. `review1`.
    pub key: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
    /// Screenshot shown instead of the message bubble when the message is
    /// empty.
    pub image: Option<&'static str>,
}

impl TextReview {
    #[must_use]
    pub fn field_key(&self, field: &str) -> String {
        format!("{}.{field}", self.key)
    }

    /// Rating clamped to `0..=MAX_RATING`.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }
}

/// A video testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoReview {
    pub id: &'static str,
    pub youtube_id: &'static str,
    pub thumbnail: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
    /// Message group relative to `reviews.videoReviews`.
    pub key: &'static str,
}

impl VideoReview {
    #[must_use]
    pub fn field_key(&self, field: &str) -> String {
        format!("{}.{field}", self.key)
    }

    #[must_use]
    pub fn embed_url(&self) -> String {
        embed_url(self.youtube_id)
    }
}

/// The playing video, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoModal {
    active: Option<String>,
}

impl VideoModal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing `youtube_id`, replacing any open video.
    pub fn open(&mut self, youtube_id: impl Into<String>) {
        let youtube_id = youtube_id.into();
        tracing::debug!(%youtube_id, "video modal opened");
        self.active = Some(youtube_id);
    }

    pub fn close(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("video modal closed");
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Iframe source while open.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        self.active.as_deref().map(embed_url)
    }
}

#[must_use]
pub fn standard_text_reviews() -> Vec<TextReview> {
    vec![
        TextReview {
            key: "review1",
            rating: 5,
            avatar: "/assets/images/reviews/avatar-1.png",
            image: None,
        },
        TextReview {
            key: "review2",
            rating: 5,
            avatar: "/assets/images/reviews/avatar-2.png",
            image: None,
        },
        TextReview {
            key: "review3",
            rating: 5,
            avatar: "/assets/images/reviews/avatar-3.png",
            image: Some("/assets/images/reviews/review-3.png"),
        },
        TextReview {
            key: "review4",
            rating: 4,
            avatar: "/assets/images/reviews/avatar-4.png",
            image: None,
        },
    ]
}

const fn video(
    id: &'static str,
    youtube_id: &'static str,
    thumbnail: &'static str,
    avatar: &'static str,
    key: &'static str,
) -> VideoReview {
    VideoReview {
        id,
        youtube_id,
        thumbnail,
        avatar,
        rating: MAX_RATING,
        key,
    }
}

#[must_use]
pub fn standard_video_reviews() -> Vec<VideoReview> {
    vec![
        video(
            "1",
            "dQw4w9WgXcQ",
            "/assets/images/reviews/videos-thumbnail/video-1.png",
            "/assets/images/reviews/avatar-1.png",
            "review1",
        ),
        video(
            "2",
            "9bZkp7q19f0",
            "/assets/images/reviews/videos-thumbnail/video-2.png",
            "/assets/images/reviews/avatar-2.png",
            "review2",
        ),
        video(
            "3",
            "kJQP7kiw5Fk",
            "/assets/images/reviews/videos-thumbnail/video-3.png",
            "/assets/images/reviews/avatar-4.png",
            "review3",
        ),
        video(
            "4",
            "RgKAFK5djSk",
            "/assets/images/reviews/videos-thumbnail/video-4.png",
            "/assets/images/reviews/avatar-1.png",
            "review4",
        ),
        video(
            "5",
            "OPf0YbXqDm0",
            "/assets/images/reviews/videos-thumbnail/video-5.png",
            "/assets/images/reviews/avatar-2.png",
            "review5",
        ),
        video(
            "6",
            "JGwWNGJdvx8",
            "/assets/images/reviews/videos-thumbnail/video-6.png",
            "/assets/images/reviews/avatar-4.png",
            "review6",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_autoplays_without_related() {
        assert_eq!(
            embed_url("abc123"),
            "https://www.youtube.com/embed/abc123?autoplay=1&rel=0"
        );
    }

    #[test]
    fn modal_open_close() {
        let mut modal = VideoModal::new();
        assert!(!modal.is_open());
        assert_eq!(modal.embed_url(), None);
        modal.open("abc");
        modal.open("xyz");
        assert_eq!(modal.active(), Some("xyz"));
        assert!(modal.embed_url().unwrap().contains("/embed/xyz?"));
        modal.close();
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn standard_reviews() {
        let text = standard_text_reviews();
        assert_eq!(text.len(), 4);
        assert_eq!(text[2].field_key("message"), "review3.message");
        assert!(text[2].image.is_some());

        let videos = standard_video_reviews();
        assert_eq!(videos.len(), 6);
        assert_eq!(videos[5].field_key("timeAgo"), "review6.timeAgo");
        assert!(videos.iter().all(|v| v.thumbnail.ends_with(&format!("video-{}.png", v.id))));
    }

    #[test]
    fn stars_are_capped() {
        let review = TextReview {
            rating: 9,
            ..standard_text_reviews().remove(0)
        };
        assert_eq!(review.stars(), MAX_RATING);
    }
}
