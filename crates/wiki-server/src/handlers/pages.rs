//! Page view, edit and save handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use wiki_storage::Page;

use crate::error::ServerError;
use crate::form::SaveBody;
use crate::handlers::{edit_url, found, view_url};
use crate::state::AppState;
use crate::title::ValidTitle;

/// Handle GET /view/{title}.
///
/// Pages that can't be loaded redirect to their editor.
pub(crate) async fn view_page(
    ValidTitle(title): ValidTitle,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let page = match state.storage.load(&title) {
        Ok(page) => page,
        Err(err) => {
            tracing::debug!(title = %title, error = %err, "Page not loaded, redirecting to editor");
            return Ok(found(edit_url(&title)));
        }
    };

    let rendered = wiki_markup::render(&page.body_text());
    let html = state.templates.render_view(&page, rendered)?;
    Ok(Html(html).into_response())
}

/// Handle GET /edit/{title}.
///
/// Pages that can't be loaded are edited as empty pages.
pub(crate) async fn edit_page(
    ValidTitle(title): ValidTitle,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let page = state.storage.load(&title).unwrap_or_else(|err| {
        tracing::debug!(title = %title, error = %err, "Page not loaded, editing empty page");
        Page::empty(title.clone())
    });

    Ok(Html(state.templates.render_edit(&page)?))
}

/// Handle POST /save/{title}.
///
/// A missing `body` field saves an empty page.
pub(crate) async fn save_page(
    ValidTitle(title): ValidTitle,
    State(state): State<Arc<AppState>>,
    SaveBody(body): SaveBody,
) -> Result<Response, ServerError> {
    let page = Page::new(title, body);

    state.storage.save(&page)?;
    tracing::info!(title = %page.title, "Page saved");

    Ok(found(view_url(&page.title)))
}
