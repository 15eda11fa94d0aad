//! Upstream football-data API configuration.

use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;
use url::Url;

/// Where and how tool calls reach the football-data API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Base URL every tool path is joined onto.
    pub base_url: Url,
    /// Value of the `lang` query parameter when a tool call has no `language` argument.
    pub language: String,
    /// Value of the `version` query parameter when a tool call has no `version` argument.
    pub version: i64,
    /// `User-Agent` header sent with every upstream request.
    pub user_agent: String,
    /// Timeout for JSON GET requests.
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
    /// Timeout for the HEAD request checking that a team image exists.
    #[serde(deserialize_with = "deserialize_duration")]
    pub image_timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://uitslagen.live/footapi").expect("the default upstream URL is valid"),
            language: "en".to_string(),
            version: 2800,
            user_agent: "LiveScore-MCP/1.0".to_string(),
            request_timeout: Duration::from_secs(30),
            image_timeout: Duration::from_secs(15),
        }
    }
}
