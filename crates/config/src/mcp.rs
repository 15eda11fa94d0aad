//! MCP transport configuration.

use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;

/// Paths and timings of the SSE transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct McpConfig {
    /// Path where clients open the event stream.
    pub sse_path: String,
    /// Path where clients post their JSON-RPC messages.
    pub message_path: String,
    /// Interval between keep-alive pings on an open stream.
    #[serde(deserialize_with = "deserialize_duration")]
    pub keep_alive: Duration,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            sse_path: "/sse".to_string(),
            message_path: "/message".to_string(),
            keep_alive: Duration::from_secs(15),
        }
    }
}
