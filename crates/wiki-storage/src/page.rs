//! Wiki page.

use std::borrow::Cow;

use crate::title::Title;

/// A wiki page: a title and its raw body.
///
/// Only the body is persisted. Rendered markup is derived from it on every view
/// and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Page title, also the storage key.
    pub title: Title,
    /// Raw body bytes, stored verbatim.
    pub body: Vec<u8>,
}

impl Page {
    /// Create a page from a title and body.
    #[must_use]
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    /// Create a page with an empty body.
    ///
    /// Used when editing a page that doesn't exist yet.
    #[must_use]
    pub fn empty(title: Title) -> Self {
        Self::new(title, Vec::new())
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
