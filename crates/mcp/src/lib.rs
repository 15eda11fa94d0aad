//! LiveScore football data exposed as MCP tools and resources over SSE.

#![deny(missing_docs)]

mod arguments;
mod resource;
mod server;
mod tool;
mod upstream;

use std::net::SocketAddr;

use axum::Router;
use config::{McpConfig, UpstreamConfig};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tokio_util::sync::CancellationToken;

pub use upstream::UpstreamError;

/// Name the server reports to MCP clients and on the health endpoint.
pub const SERVER_NAME: &str = "livescore-mcp";

/// Version the server reports to MCP clients and on the health endpoint.
pub const SERVER_VERSION: &str = "1.0.0";

/// Creates an axum router serving the SSE stream and the message endpoint.
///
/// Every SSE session gets its own handle to the same tool registry. Cancelling
/// `shutdown` closes all open sessions. Must be called from within a tokio runtime.
pub fn router(
    mcp: &McpConfig,
    upstream: &UpstreamConfig,
    bind: SocketAddr,
    shutdown: CancellationToken,
) -> anyhow::Result<Router> {
    log::info!(
        "Creating MCP router for stream path {} and message path {}",
        mcp.sse_path,
        mcp.message_path
    );

    let mcp_server = server::McpServer::new(upstream)?;

    let (sse_server, router) = SseServer::new(SseServerConfig {
        bind,
        sse_path: mcp.sse_path.to_string(),
        post_path: mcp.message_path.to_string(),
        ct: shutdown,
        sse_keep_alive: Some(mcp.keep_alive),
    });

    sse_server.with_service(move || mcp_server.clone());

    Ok(router)
}
