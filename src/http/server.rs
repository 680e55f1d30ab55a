//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the session route and the fallback
//! - Wire up middleware (request ID, tracing, hardening headers)
//! - Bind the relay to a listener and serve with graceful shutdown

use std::sync::Arc;

use axum::http::{HeaderValue, Request};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::http::{handlers, headers};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub client: reqwest::Client,
}

/// Stamps every request with a UUID v4 `x-request-id`.
#[derive(Clone, Copy, Default)]
pub struct MakeRelayRequestId;

impl MakeRequestId for MakeRelayRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP server for the session relay.
pub struct RelayServer {
    router: Router,
    config: Arc<RelayConfig>,
}

impl RelayServer {
    /// Create a new relay server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            client: reqwest::Client::new(),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let mut router = Router::new()
            .route("/start_session", get(handlers::start_session))
            .fallback(handlers::unknown_endpoint)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRelayRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            );

        for layer in headers::hardening_layers() {
            router = router.layer(layer);
        }
        router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "Session relay starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Session relay stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// The router alone, for host processes that mount the relay on their
    /// own listener instead of calling [`run`](Self::run).
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_keeps_the_config_it_was_given() {
        let mut config = RelayConfig::default();
        config.listener.port = 9999;
        config.upstream.base_url = "http://127.0.0.1:1/cr_start_session".to_string();

        let server = RelayServer::new(config);
        assert_eq!(server.config().listener.port, 9999);
        assert_eq!(
            server.config().upstream.base_url,
            "http://127.0.0.1:1/cr_start_session"
        );
    }
}
