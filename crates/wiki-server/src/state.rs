//! Application state.
//!
//! Shared state for all request handlers. Built once at startup and never
//! mutated afterwards.

use std::sync::Arc;

use wiki_storage::{Storage, Title};

use crate::templates::Templates;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page storage backend.
    pub(crate) storage: Arc<dyn Storage>,
    /// Parsed page templates.
    pub(crate) templates: Templates,
    /// Page that `/` redirects to.
    pub(crate) front_page: Title,
}
