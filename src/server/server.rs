//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::io::ErrorKind;
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::from_config(config).await?;

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Start the HTTP server; once it stops, drain the worker pool and close storage
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {}", bind_addr);

        let pool = self.state.pool.clone();
        let storage = self.state.storage.clone();
        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| format_bind_error(e, &bind_addr))?
            .run();

        info!(workers, "HTTP server listening on {}", bind_addr);

        let result = server
            .await
            .map_err(|e| ServiceError::server(format!("Server error: {}", e)));

        info!("HTTP server stopped");
        pool.shutdown().await;

        if let Err(e) = storage.close().await {
            warn!("Failed to close storage: {}", e);
        }

        result
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let max_body_size = state.config.server().max_body_size;

    let json_config = web::JsonConfig::default()
        .limit(max_body_size)
        .error_handler(|err, _req| {
            warn!("Rejected request body: {}", err);
            ServiceError::bad_request(err.to_string()).into()
        });

    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        ServiceError::validation(format!("Invalid path parameter: {}", err)).into()
    });

    App::new()
        .app_data(state)
        .app_data(json_config)
        .app_data(path_config)
        .wrap(Logger::default())
        .wrap(DefaultHeaders::new().add(("Server", "items-rs")))
        .configure(routes::health::configure_routes)
        .configure(routes::items::configure_routes)
}

fn format_bind_error(error: std::io::Error, bind_addr: &str) -> ServiceError {
    if error.kind() == ErrorKind::AddrInUse {
        ServiceError::server(format!(
            "Address {} is already in use; set ITEMS_PORT or server.port to another port",
            bind_addr
        ))
    } else {
        ServiceError::server(format!("Failed to bind to {}: {}", bind_addr, error))
    }
}
