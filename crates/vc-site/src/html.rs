#![forbid(unsafe_code)]

//! String HTML building.
//!
//! Text and attribute values always go through [`escape`]; only
//! [`Markup::raw`] writes unescaped content and callers pass it static
//! markup.

use std::fmt::{self, Write as _};

use vc_motion::Tween;

const BLOCK_TAGS: &[&str] = &[
    "html", "head", "body", "header", "nav", "main", "section", "footer", "div", "ul", "form",
];

#[must_use]
pub fn escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Attribute list, written in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    pairs: Vec<(&'static str, Option<String>)>,
}

impl Attrs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, Some(value.to_string())));
        self
    }

    #[must_use]
    pub fn set_if(self, condition: bool, name: &'static str, value: impl ToString) -> Self {
        if condition { self.set(name, value) } else { self }
    }

    /// `class`, skipped when empty.
    #[must_use]
    pub fn class(self, classes: impl fmt::Display) -> Self {
        let classes = classes.to_string();
        if classes.trim().is_empty() {
            self
        } else {
            self.set("class", classes)
        }
    }

    /// `style`, skipped when empty.
    #[must_use]
    pub fn style(self, css: impl fmt::Display) -> Self {
        let css = css.to_string();
        if css.is_empty() { self } else { self.set("style", css) }
    }

    /// Boolean attribute.
    #[must_use]
    pub fn flag(mut self, name: &'static str) -> Self {
        self.pairs.push((name, None));
        self
    }

    /// `data-motion-*` attributes of `tween`, if any.
    #[must_use]
    pub fn motion(mut self, tween: Option<&Tween>) -> Self {
        if let Some(tween) = tween {
            self.pairs.extend(
                tween
                    .data_attributes()
                    .into_iter()
                    .map(|(name, value)| (name, Some(value))),
            );
        }
        self
    }

    /// Append prebuilt `(name, value)` pairs.
    #[must_use]
    pub fn extend<'v>(mut self, pairs: impl IntoIterator<Item = &'v (&'static str, String)>) -> Self {
        self.pairs
            .extend(pairs.into_iter().map(|(name, value)| (*name, Some(value.clone()))));
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    fn write_to(&self, out: &mut String) {
        for (name, value) in &self.pairs {
            match value {
                Some(value) => {
                    let _ = write!(out, " {name}=\"{}\"", escape(value));
                }
                None => {
                    let _ = write!(out, " {name}");
                }
            }
        }
    }
}

/// Append-only HTML buffer.
#[derive(Debug, Clone, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, tag: &str, attrs: Attrs) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        attrs.write_to(&mut self.buf);
        self.buf.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        let _ = write!(self.buf, "</{tag}>");
        if BLOCK_TAGS.contains(&tag) {
            self.buf.push('\n');
        }
        self
    }

    /// Element without children (`img`, `input`, `meta`, `link`).
    pub fn void(&mut self, tag: &str, attrs: Attrs) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        attrs.write_to(&mut self.buf);
        self.buf.push_str(" />");
        self
    }

    /// Element with escaped text content.
    pub fn element(&mut self, tag: &str, attrs: Attrs, text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
