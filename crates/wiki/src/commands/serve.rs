//! `wiki serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use wiki_config::{CliSettings, Config};
use wiki_server::{run_server, server_config_from_wiki_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover wiki.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page data directory (overrides config).
    #[arg(short, long, env = "WIKI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Template directory (overrides config; default: built-in templates).
    #[arg(short, long)]
    template_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and page logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            data_dir: self.data_dir,
            template_dir: self.template_dir,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        config.validate()?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.highlight(&format!(
            "Starting wiki on http://{}:{}/",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Data directory: {}",
            config.pages_resolved.data_dir.display()
        ));
        match &config.template_dir {
            Some(dir) => output.info(&format!("Templates: {}", dir.display())),
            None => output.info("Templates: built-in"),
        }
        if let Some(dir) = &config.static_dir {
            output.info(&format!("Static files: {}", dir.display()));
        }
        tracing::debug!(front_page = %config.pages_resolved.front_page, "Configuration loaded");

        let server_config = server_config_from_wiki_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
