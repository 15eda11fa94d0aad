//! The football-data API all data tools forward to.

use std::{collections::BTreeMap, time::Duration};

use anyhow::anyhow;
use config::UpstreamConfig;
use reqwest::{StatusCode, header::ACCEPT};
use rmcp::model::{CallToolResult, Content};
use url::Url;

use crate::arguments::Locale;

/// Ways an upstream request can fail.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// DNS, connect or timeout failure talking to the API.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("API error (status {}): {body}", .status.as_u16())]
    Status {
        /// The status code returned by the API.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },
    /// The response body could not be read.
    #[error("read error: {0}")]
    Body(#[source] reqwest::Error),
}

/// HTTP client bound to the configured upstream API.
pub(crate) struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
    language: String,
    version: i64,
    request_timeout: Duration,
    image_timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| anyhow!("Failed to create the upstream HTTP client: {e}"))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            language: config.language.clone(),
            version: config.version,
            request_timeout: config.request_timeout,
            image_timeout: config.image_timeout,
        })
    }

    /// Upstream URL for `path` carrying `lang` and `version` plus the `extra` query pairs.
    ///
    /// Query parameters are emitted sorted by name, a later pair with the same
    /// name replaces an earlier one.
    pub fn build_url(&self, path: &[&str], locale: &Locale, extra: &[(&str, String)]) -> Url {
        let mut query = BTreeMap::new();

        let language = locale.language.as_deref().unwrap_or(&self.language);
        query.insert("lang", language.to_string());

        let version = locale.version.unwrap_or(self.version);
        query.insert("version", version.to_string());

        for (key, value) in extra {
            query.insert(*key, value.clone());
        }

        let mut url = self.join(path);
        url.query_pairs_mut().extend_pairs(query);

        url
    }

    /// The base URL with `path` appended one segment at a time.
    ///
    /// Each segment is percent-encoded, so an identifier containing `/` or `?`
    /// stays inside its segment.
    pub fn join(&self, path: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        // Only cannot-be-a-base URLs refuse segments, and the config rejects those.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }

        url
    }

    /// GET `url` and turn the answer into a tool result titled `title`.
    pub async fn fetch(&self, url: Url, title: &str) -> CallToolResult {
        log::debug!("Fetching {url}");

        match self.get(url).await {
            Ok(body) => CallToolResult::success(vec![Content::text(format!("{title}:\n\n{}", pretty(&body)))]),
            Err(error) => {
                log::warn!("Upstream request for '{title}' failed: {error}");
                CallToolResult::error(vec![Content::text(error.to_string())])
            }
        }
    }

    /// GET `url` and return the body of a successful response.
    #[fastrace::trace(name = "upstream:get")]
    pub async fn get(&self, url: Url) -> Result<String, UpstreamError> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(UpstreamError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(UpstreamError::Body)?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, body });
        }

        Ok(body)
    }

    /// HEAD `url` and return the response status, whatever it is.
    #[fastrace::trace(name = "upstream:head")]
    pub async fn head(&self, url: Url) -> Result<StatusCode, reqwest::Error> {
        let response = self.http.head(url).timeout(self.image_timeout).send().await?;

        Ok(response.status())
    }
}

/// Re-indent a JSON document, anything else is returned as-is.
fn pretty(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}
