//! LiveScore MCP configuration structures to map the livescore.toml configuration.

#![deny(missing_docs)]

mod health;
mod loader;
mod mcp;
mod rate_limit;
mod server;
mod upstream;

use std::path::Path;

pub use health::HealthConfig;
pub use mcp::McpConfig;
pub use rate_limit::RateLimitConfig;
use serde::Deserialize;
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

/// Main configuration structure for the LiveScore MCP server.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Model Context Protocol transport settings.
    #[serde(default)]
    pub mcp: McpConfig,
    /// The football-data API every tool forwards to.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
        loader::load(path)
    }

    /// Validates values serde cannot check on its own.
    pub fn validate(&self) -> anyhow::Result<()> {
        loader::validate(self)
    }
}
