//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the redirect service as its only handler
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener and stop on shutdown signal

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::fallback::fallback_router;
use crate::redirect::map_handler;
use crate::rules::RedirectTable;

/// HTTP server fronting the fallback router with redirects.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `table` in front of the default fallback.
    pub fn new(config: AppConfig, table: RedirectTable) -> Self {
        Self::with_fallback(config, table, fallback_router())
    }

    /// Create a server with a caller-supplied fallback router.
    pub fn with_fallback(config: AppConfig, table: RedirectTable, fallback: Router) -> Self {
        let router = Self::build_router(&config, table, fallback);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, table: RedirectTable, fallback: Router) -> Router {
        Router::new()
            .fallback_service(map_handler(table, fallback))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn table() -> RedirectTable {
        [("/gh", "https://github.com")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_router_redirects_and_falls_back() {
        let server = HttpServer::new(AppConfig::default(), table());

        let res = server
            .router()
            .oneshot(Request::builder().uri("/gh").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "https://github.com");

        let res = server
            .router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = server
            .router()
            .oneshot(Request::builder().uri("/gh/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
