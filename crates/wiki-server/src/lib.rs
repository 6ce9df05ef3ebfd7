//! HTTP server for the flat-file wiki.
//!
//! This crate provides the wiki's web front end using axum:
//! - Page routes to view, edit and save a page by title
//! - A listing of every page
//! - Static files for stylesheets and images
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wiki_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         data_dir: PathBuf::from("data"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (wiki-server)
//!                        │
//!                        ├─► /view, /edit, /save ──► ValidTitle ──► handler
//!                        │                                           │
//!                        │                     Storage (wiki-storage)┤
//!                        │                     Markup (wiki-markup) ─┤
//!                        │                                           └─► Templates
//!                        │
//!                        ├─► /all ──► Storage::list_titles ──► Templates
//!                        │
//!                        └─► /static (tower-http)
//! ```

mod app;
mod error;
mod form;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod templates;
mod title;

use std::path::PathBuf;
use std::sync::Arc;

use state::AppState;
use wiki_storage::{FsStorage, Title};

pub use error::ServerError;
pub use templates::{TemplateError, Templates};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding `<Title>.txt` page files.
    pub data_dir: PathBuf,
    /// Template directory (`None` uses the built-in templates).
    pub template_dir: Option<PathBuf>,
    /// Static file directory (`None` disables `/static/`).
    pub static_dir: Option<PathBuf>,
    /// Title that `/` redirects to.
    pub front_page: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8080,
            data_dir: PathBuf::from("data"),
            template_dir: None,
            static_dir: None,
            front_page: "FrontPage".to_owned(),
        }
    }
}

/// Run the server.
///
/// Creates the data directory and parses templates before binding.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FsStorage::new(config.data_dir.clone());
    storage.ensure_dir()?;

    let templates = Templates::load(config.template_dir.as_deref())?;
    let front_page = Title::new(config.front_page.clone())?;

    let state = Arc::new(AppState {
        storage: Arc::new(storage),
        templates,
        front_page,
    });

    let app = app::create_router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        data_dir = %config.data_dir.display(),
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from wiki config.
///
/// # Arguments
///
/// * `config` - Loaded wiki configuration
#[must_use]
pub fn server_config_from_wiki_config(config: &wiki_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        data_dir: config.pages_resolved.data_dir.clone(),
        template_dir: config.template_dir.clone(),
        static_dir: config.static_dir.clone(),
        front_page: config.pages_resolved.front_page.clone(),
    }
}
