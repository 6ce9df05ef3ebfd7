//! Wiki markup rendering.
//!
//! Converts a raw page body into HTML in two independent stages:
//!
//! 1. [`render_wiki_links`] replaces `[[Title]]` and `[https://url text]` with anchors.
//! 2. [`wrap_paragraphs`] wraps every non-blank line in `<p>` and drops blank lines.
//!
//! Links are substituted on the raw text before paragraph wrapping, so a link
//! never spans a paragraph boundary and `<p>` markers never take part in link
//! matching.
//!
//! The body is not escaped. Pages are trusted input.
//!
//! # Example
//!
//! ```
//! use wiki_markup::render;
//!
//! let html = render("See [[FrontPage]].\n\nOr [https://example.com Example].");
//! assert_eq!(
//!     html,
//!     "<p>See <a href=\"/view/FrontPage\">FrontPage</a>.</p>\n\
//!      <p>Or <a href=\"https://example.com\">Example</a>.</p>"
//! );
//! ```

mod links;
mod paragraphs;

pub use links::{render_external_links, render_internal_links, render_wiki_links};
pub use paragraphs::wrap_paragraphs;

/// Render a raw page body to HTML.
#[must_use]
pub fn render(body: &str) -> String {
    wrap_paragraphs(&render_wiki_links(body))
}
