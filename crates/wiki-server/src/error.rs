//! Error types for the HTTP server.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wiki_storage::StorageError;

use crate::templates::TemplateError;

/// Request error type.
///
/// Every variant ends the current request. Bodies are plain text.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Path does not name a valid page.
    #[error("Invalid page path: {0}")]
    InvalidTitle(String),

    /// Submitted form could not be parsed.
    #[error("Cannot parse form")]
    Form(#[from] FormRejection),

    /// Storage error (failed save or listing).
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// Template rendering error.
    #[error("{0}")]
    Template(#[from] TemplateError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidTitle(_) => (StatusCode::NOT_FOUND, "404 page not found").into_response(),
            Self::Form(rejection) => {
                tracing::warn!(error = %rejection, "Rejected form submission");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
            Self::Storage(_) | Self::Template(_) => {
                tracing::warn!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wiki_storage::StorageErrorKind;

    use super::*;

    #[test]
    fn test_invalid_title_is_not_found() {
        let response = ServerError::InvalidTitle("/view/a-b".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err = StorageError::new(StorageErrorKind::PermissionDenied).with_backend("Fs");
        let response = ServerError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_message_is_raw() {
        let err = StorageError::new(StorageErrorKind::PermissionDenied).with_path("/data/Home.txt");

        assert_eq!(
            ServerError::from(err).to_string(),
            "Permission denied (path: /data/Home.txt)"
        );
    }
}
