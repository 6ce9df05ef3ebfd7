//! Title validation for page routes.
//!
//! Every title-bearing route extracts [`ValidTitle`] before its handler body
//! runs, so validation is shared by composition rather than repeated in each
//! handler.

use std::sync::LazyLock;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use regex::Regex;
use wiki_storage::Title;

use crate::error::ServerError;

/// Full request path of a page route: action prefix plus alphanumeric title.
static VALID_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(edit|save|view)/([a-zA-Z0-9]+)$").unwrap());

/// Path prefixes that must be followed by a valid title.
const TITLE_PREFIXES: [&str; 3] = ["/edit/", "/save/", "/view/"];

/// Extract the page title from a request path.
pub(crate) fn title_from_path(path: &str) -> Option<Title> {
    let captures = VALID_PATH_RE.captures(path)?;
    Title::new(&captures[2]).ok()
}

/// Check whether a path falls under one of the title-bearing prefixes.
pub(crate) fn is_title_path(path: &str) -> bool {
    TITLE_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Page title taken from a validated request path.
///
/// Rejects with 404 when the path is not `/(edit|save|view)/<alphanumeric>`.
#[derive(Debug)]
pub(crate) struct ValidTitle(pub(crate) Title);

impl<S> FromRequestParts<S> for ValidTitle
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path();
        title_from_path(path)
            .map(Self)
            .ok_or_else(|| ServerError::InvalidTitle(path.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_path_valid() {
        for (path, expected) in [
            ("/view/FrontPage", "FrontPage"),
            ("/edit/a", "a"),
            ("/save/Page42", "Page42"),
            ("/view/0", "0"),
        ] {
            assert_eq!(
                title_from_path(path).map(|t| t.to_string()),
                Some(expected.to_owned()),
                "{path}"
            );
        }
    }

    #[test]
    fn test_title_from_path_invalid() {
        for path in [
            "/view/",
            "/view",
            "/view/Front-Page",
            "/view/Front%20Page",
            "/view/a/b",
            "/view/a/",
            "/delete/Home",
            "/VIEW/Home",
            "//view/Home",
            "/view/../etc",
            "/all",
            "/",
        ] {
            assert!(title_from_path(path).is_none(), "{path} should be rejected");
        }
    }

    #[test]
    fn test_title_from_path_rejects_trailing_newline() {
        assert!(title_from_path("/view/Home\n").is_none());
    }

    #[test]
    fn test_is_title_path() {
        assert!(is_title_path("/view/"));
        assert!(is_title_path("/edit/a/b"));
        assert!(is_title_path("/save/x y"));
        assert!(!is_title_path("/view"));
        assert!(!is_title_path("/all"));
        assert!(!is_title_path("/static/wiki.css"));
    }
}
