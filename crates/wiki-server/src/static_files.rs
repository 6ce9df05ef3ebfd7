//! Static file serving.
//!
//! Files under the configured static directory are served at `/static/`.
//! Without a directory, or when it doesn't exist, `/static/` paths fall
//! through to the router fallback.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// URL prefix for static files.
const STATIC_PREFIX: &str = "/static";

/// Create router for static file serving.
pub(crate) fn static_router(dir: Option<&Path>) -> Router<Arc<AppState>> {
    let router = Router::new();

    match dir {
        Some(dir) if dir.is_dir() => router.nest_service(STATIC_PREFIX, ServeDir::new(dir)),
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "Static directory not found, not serving static files");
            router
        }
        None => router,
    }
}
