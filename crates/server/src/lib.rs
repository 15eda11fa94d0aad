//! LiveScore MCP server library.
//!
//! Provides a reusable server function to serve LiveScore MCP either for the binary, or for the integration tests.

#![deny(missing_docs)]

mod health;
mod pages;
mod rate_limit;

use std::{net::SocketAddr, sync::Arc};

use ::rate_limit::RateLimitManager;
use anyhow::anyhow;
use axum::{Router, routing::get};
use config::Config;
use rate_limit::RateLimitLayer;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::Layer;

/// Configuration for serving LiveScore MCP.
pub struct ServeConfig {
    /// The socket address (IP and port) the server will bind to
    pub listen_address: SocketAddr,
    /// The deserialized TOML configuration.
    pub config: Config,
    /// The externally visible origin, used on the landing page, in the sitemap and in robots.txt.
    pub public_url: String,
    /// Cancel to stop accepting connections, close open SSE sessions and stop background tasks.
    pub shutdown: CancellationToken,
}

/// Starts and runs the LiveScore MCP server with the provided configuration.
pub async fn serve(
    ServeConfig {
        listen_address,
        config,
        public_url,
        shutdown,
    }: ServeConfig,
) -> anyhow::Result<()> {
    let sse_router = mcp::router(&config.mcp, &config.upstream, listen_address, shutdown.child_token())?;

    let mut app = pages::router(&config, &public_url, sse_router.clone())?;

    // Only message ingestion is throttled. Opening a stream and the pages are not.
    let rate_limits = &config.server.rate_limits;

    if rate_limits.enabled {
        log::debug!("Applying rate limiting to {}", config.mcp.message_path);

        let manager = Arc::new(RateLimitManager::new(rate_limits)?);
        manager.spawn_sweeper(rate_limits.sweep_interval, shutdown.child_token());

        let limited = RateLimitLayer::new(manager).layer(sse_router.clone());
        app = app.route_service(&config.mcp.message_path, limited);
    } else {
        log::debug!("Rate limiting disabled");
    }

    if config.server.health.enabled {
        app = app.route(&config.server.health.path, get(health::health));
    }

    // Stream, message and anything unknown are answered by the SSE transport.
    let app = app.fallback_service(sse_router);

    let listener = TcpListener::bind(listen_address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {listen_address}: {e}"))?;

    let public_url = public_url.trim_end_matches('/');

    log::info!(
        "LiveScore MCP server {} listening on {listen_address}",
        mcp::SERVER_VERSION
    );
    log::info!("MCP SSE endpoint available at: {public_url}{}", config.mcp.sse_path);
    log::info!("Landing page available at: {public_url}/");

    if config.server.health.enabled {
        log::info!("Health endpoint available at: {public_url}{}", config.server.health.path);
    }

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| anyhow!("Failed to start HTTP server: {e}"))?;

    Ok(())
}
