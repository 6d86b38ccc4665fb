//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the record endpoint
//! - Wire up middleware (timeout, body limit, request ID, tracing)
//! - Bind the server to a listener
//! - Serve until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::handler::{dispatch, AppState};
use crate::http::request::RequestIdLayer;
use crate::lifecycle::wait_for_shutdown;
use crate::store::RecordStore;

/// HTTP server for the word/type record endpoint.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: ServiceConfig, store: Arc<dyn RecordStore>) -> Self {
        let state = AppState {
            store,
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        // Single path; the handler branches on the method itself so
        // unsupported methods reach its 405 arm instead of Axum's fallback.
        Router::new()
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl+C arrives or `shutdown` receives a trigger.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
