//! Link substitution passes.

use std::sync::LazyLock;

use regex::Regex;

/// `[[Title]]` with an alphanumeric title.
static WIKI_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([a-zA-Z0-9]+)\]\]").unwrap());

/// `[http(s)://url display text]`: URL up to the first whitespace, text up to `]`.
///
/// Whitespace is the ASCII set `\t \n \f \r` and space only. Vertical tab and
/// Unicode spaces such as NBSP belong to the URL.
static EXTERNAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(https?://[^\t\n\f\r ]+)[\t\n\f\r ]([^\]]+)\]").unwrap()
});

/// Replace `[[Title]]` with a link to `/view/Title`.
///
/// Bracket sequences that don't enclose an alphanumeric title are left untouched.
#[must_use]
pub fn render_internal_links(text: &str) -> String {
    WIKI_LINK_RE
        .replace_all(text, r#"<a href="/view/${1}">${1}</a>"#)
        .into_owned()
}

/// Replace `[https://url text]` with a link to `url` labelled `text`.
#[must_use]
pub fn render_external_links(text: &str) -> String {
    EXTERNAL_LINK_RE
        .replace_all(text, r#"<a href="${1}">${2}</a>"#)
        .into_owned()
}

/// Run both link passes: wiki links first, then external links.
///
/// # Examples
///
/// ```
/// use wiki_markup::render_wiki_links;
///
/// assert_eq!(
///     render_wiki_links("[[FrontPage]]"),
///     r#"<a href="/view/FrontPage">FrontPage</a>"#
/// );
/// assert_eq!(
///     render_wiki_links("[http://example.com Example]"),
///     r#"<a href="http://example.com">Example</a>"#
/// );
/// ```
#[must_use]
pub fn render_wiki_links(text: &str) -> String {
    render_external_links(&render_internal_links(text))
}
