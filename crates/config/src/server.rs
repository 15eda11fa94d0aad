//! HTTP server configuration settings.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::{HealthConfig, RateLimitConfig};

/// HTTP server configuration settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// The socket address the server should listen on.
    pub listen_address: Option<SocketAddr>,
    /// The externally visible origin of the server, e.g. `https://livescoremcp.com`.
    pub public_url: Option<String>,
    /// Health endpoint configuration.
    #[serde(default)]
    pub health: HealthConfig,
    /// Rate limiting configuration for the MCP message endpoint.
    #[serde(default)]
    pub rate_limits: RateLimitConfig,
}
