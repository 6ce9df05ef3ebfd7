//! Front page redirect, page listing and fallback.

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};

use crate::error::ServerError;
use crate::handlers::{found, view_url};
use crate::state::AppState;
use crate::title::is_title_path;

/// Handle GET /.
pub(crate) async fn front_page(State(state): State<Arc<AppState>>) -> Response {
    found(view_url(&state.front_page))
}

/// Handle GET /all.
pub(crate) async fn all_pages(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let titles = state.storage.list_titles()?;
    Ok(Html(state.templates.render_all(&titles)?))
}

/// Handle every unrouted request.
///
/// Malformed page paths are not found; anything else goes to the front page.
pub(crate) async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    if is_title_path(uri.path()) {
        ServerError::InvalidTitle(uri.path().to_owned()).into_response()
    } else {
        found(view_url(&state.front_page))
    }
}
