#![forbid(unsafe_code)]

//! Splitting text into individually animated spans.
//!
//! Character splitting works on extended grapheme clusters so Arabic
//! letters with diacritics and emoji sequences stay intact.

use unicode_segmentation::UnicodeSegmentation;

/// Non-breaking space used in place of a plain space in character spans.
pub const NBSP: char = '\u{a0}';

/// Unit of a text split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitBy {
    /// One span per grapheme.
    Chars,
    /// One span per space-separated word.
    #[default]
    Words,
    /// One span per line.
    Lines,
}

impl SplitBy {
    /// Markup placed between spans when rendered.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Chars => "",
            Self::Words => " ",
            Self::Lines => "<br>",
        }
    }
}

/// Text broken into spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    by: SplitBy,
    spans: Vec<String>,
}

impl SplitText {
    /// Split `text`.
    ///
    /// Words are separated on single spaces and lines on `\n`, so empty
    /// spans are kept where the source has repeated separators. In
    /// character mode each space becomes [`NBSP`].
    #[must_use]
    pub fn new(text: &str, by: SplitBy) -> Self {
        let spans = match by {
            SplitBy::Chars => text
                .graphemes(true)
                .map(|g| {
                    if g == " " {
                        NBSP.to_string()
                    } else {
                        g.to_string()
                    }
                })
                .collect(),
            SplitBy::Words => text.split(' ').map(str::to_string).collect(),
            SplitBy::Lines => text.split('\n').map(str::to_string).collect(),
        };
        Self { by, spans }
    }

    /// Split mode.
    #[must_use]
    pub const fn by(&self) -> SplitBy {
        self.by
    }

    /// Span contents, in order.
    #[must_use]
    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    /// Number of spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether there are no spans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Concatenate the spans back with plain separators.
    #[must_use]
    pub fn joined(&self) -> String {
        let sep = match self.by {
            SplitBy::Chars => "",
            SplitBy::Words => " ",
            SplitBy::Lines => "\n",
        };
        self.spans.join(sep)
    }
}
