//! Environment variable expansion for configuration strings.

use std::env::VarError;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| {
            let message = match err.cause {
                VarError::NotPresent => format!("${{{}}} not set", err.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", err.var_name),
            };
            ConfigError::EnvVar {
                field: field.to_owned(),
                message,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal() {
        assert_eq!(expand_env("data", "pages.data_dir").unwrap(), "data");
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("WIKI_EXPAND_UNSET");
        }

        assert_eq!(
            expand_env("${WIKI_EXPAND_UNSET:-fallback}", "server.host").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_expand_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WIKI_EXPAND_SET", "/srv/wiki");
        }

        assert_eq!(
            expand_env("${WIKI_EXPAND_SET}/pages", "pages.data_dir").unwrap(),
            "/srv/wiki/pages"
        );

        unsafe {
            std::env::remove_var("WIKI_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_missing_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("WIKI_EXPAND_MISSING");
        }

        let err = expand_env("${WIKI_EXPAND_MISSING}", "server.host").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("WIKI_EXPAND_MISSING"));
        assert!(err.to_string().contains("server.host"));
    }
}
