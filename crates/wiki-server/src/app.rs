//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{any, get, post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `static_dir` - Directory served under `/static/`, if any
pub(crate) fn create_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let page_routes = Router::new()
        .route("/view/{title}", get(handlers::pages::view_page))
        .route("/edit/{title}", get(handlers::pages::edit_page))
        .route("/save/{title}", post(handlers::pages::save_page));

    Router::new()
        .route("/", any(handlers::index::front_page))
        .route("/all", get(handlers::index::all_pages))
        .merge(page_routes)
        .merge(static_files::static_router(static_dir))
        .fallback(handlers::index::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
