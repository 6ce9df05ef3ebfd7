//! HTTP request handlers.

pub(crate) mod index;
pub(crate) mod pages;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use wiki_storage::Title;

/// URL of the page view for `title`.
pub(crate) fn view_url(title: &Title) -> String {
    format!("/view/{title}")
}

/// URL of the editor for `title`.
pub(crate) fn edit_url(title: &Title) -> String {
    format!("/edit/{title}")
}

/// `302 Found` redirect to `location`.
pub(crate) fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
