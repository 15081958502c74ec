//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the proxy handler as catch-all
//! - Wire up middleware (CORS origin header, request ID, tracing)
//! - Serve on a bound listener until shutdown is broadcast

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::request::UuidRequestId;
use crate::proxy::handler::{fetch_html_proxy, ProxyState};
use crate::proxy::upstream::{Fetch, ReqwestFetcher};
use crate::security::cors;

/// Build the Axum router with all middleware layers.
///
/// Every path and method reaches the proxy handler.
pub fn build_router<F: Fetch>(state: ProxyState<F>) -> Router {
    Router::new()
        .fallback(fetch_html_proxy::<F>)
        .with_state(state)
        .layer(cors::allow_any_origin())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a server that fetches with a default reqwest client.
    pub fn new(config: ProxyConfig) -> Self {
        Self::with_fetcher(config, ReqwestFetcher::new())
    }

    /// Create a server with a custom upstream client.
    pub fn with_fetcher<F: Fetch>(config: ProxyConfig, fetcher: F) -> Self {
        let router = build_router(ProxyState::new(fetcher));
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            configured_address = %self.config.listener.bind_address,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
