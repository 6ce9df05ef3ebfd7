//! Page titles.

use std::fmt;

/// Error returned when a string is not a valid page title.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid page title: {0:?}")]
pub struct InvalidTitle(pub String);

/// Validated page title.
///
/// A title is one or more ASCII letters or digits (`^[a-zA-Z0-9]+$`). It is both
/// the page identifier and the base name of the page file, so the restriction
/// also keeps titles from ever forming a path outside the data directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Title(String);

impl Title {
    /// Validate and wrap a title.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTitle`] if `value` is empty or contains anything other than
    /// ASCII letters and digits.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidTitle> {
        let value = value.into();
        if is_valid_title(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidTitle(value))
        }
    }

    /// Title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check whether a string matches `^[a-zA-Z0-9]+$`.
fn is_valid_title(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Title {
    type Error = InvalidTitle;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_accepts_alphanumeric() {
        for value in ["FrontPage", "a", "Z", "0", "Page2", "ABCxyz0189"] {
            let title = Title::new(value).unwrap();
            assert_eq!(title.as_str(), value);
        }
    }

    #[test]
    fn test_title_rejects_empty() {
        assert_eq!(Title::new(""), Err(InvalidTitle(String::new())));
    }

    #[test]
    fn test_title_rejects_non_alphanumeric() {
        for value in [
            "Front Page",
            "front-page",
            "front_page",
            "../etc",
            "a/b",
            "page.txt",
            "Über",
            "tab\t",
        ] {
            assert!(Title::new(value).is_err(), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_title_display() {
        let title = Title::new("FrontPage").unwrap();
        assert_eq!(title.to_string(), "FrontPage");
    }

    #[test]
    fn test_title_try_from() {
        assert!(Title::try_from("Home").is_ok());
        assert!(Title::try_from("Home!").is_err());
    }

    #[test]
    fn test_invalid_title_display() {
        let err = Title::new("a b").unwrap_err();
        assert_eq!(err.to_string(), "Invalid page title: \"a b\"");
    }
}
