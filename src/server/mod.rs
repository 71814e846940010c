//! HTTP adapter around the amortization calculator.
//!
//! Exposes `GET /api/loan/emi` and `GET /health`, with cross-origin access
//! granted to a single configured client origin.

pub mod config;
pub mod handlers;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use log::info;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use config::ServerConfig;

/// Errors starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The API routes, without any middleware.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/loan/emi", get(handlers::get_emi_schedule))
}

/// The schedule server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the router with the CORS policy applied.
    pub fn router(&self) -> Result<Router, ServerError> {
        let origin = HeaderValue::from_str(&self.config.allowed_origin)
            .map_err(|_| ServerError::InvalidOrigin(self.config.allowed_origin.clone()))?;

        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list([origin]))
            .allow_methods([Method::GET]);

        Ok(create_router().layer(cors))
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> Result<(), ServerError> {
        let router = self.router()?;
        let listener =
            TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;

        info!(
            "serving EMI schedules on {} (CORS origin: {})",
            listener.local_addr()?,
            self.config.allowed_origin
        );

        axum::serve(listener, router).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_origin_rejected() {
        let server = Server::new(ServerConfig {
            allowed_origin: "http://bad\norigin".to_string(),
            ..Default::default()
        });
        assert!(matches!(server.router(), Err(ServerError::InvalidOrigin(_))));
    }

    #[test]
    fn test_default_router_builds() {
        let server = Server::new(ServerConfig::default());
        assert!(server.router().is_ok());
    }
}
