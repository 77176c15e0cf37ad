//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServiceError};
use crate::utils::logging::init_logging;
use std::path::Path;
use tracing::{info, warn};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the configuration file, overlay `ITEMS_*` variables, and run the server
pub async fn run_server(config_path: impl AsRef<Path>) -> Result<()> {
    let config_path = config_path.as_ref();

    let (file_config, load_error) = match Config::from_file(config_path).await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let config = file_config.merge(Config::from_env()?);
    config.validate()?;

    init_logging(config.logging())?;

    info!("Starting items-rs {}", crate::VERSION);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => warn!(
            "Configuration file {} not loaded, using defaults: {}",
            config_path.display(),
            e
        ),
    }

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET    /health");
    info!("   GET    /api/items");
    info!("   POST   /api/items");
    info!("   GET    /api/items/{{id}}");
    info!("   PUT    /api/items/{{id}}");
    info!("   DELETE /api/items/{{id}}");
    info!("   GET    /api/items/process");
    info!("   GET    /api/items/process/report");

    server.start().await
}
