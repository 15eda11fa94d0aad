use std::path::Path;

use anyhow::{Context, bail};
use indoc::indoc;

use crate::Config;

pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    log::debug!("Loaded configuration from {}", path.display());

    Ok(config)
}

pub(crate) fn validate(config: &Config) -> anyhow::Result<()> {
    let rate_limits = &config.server.rate_limits;

    if rate_limits.enabled && (rate_limits.limit == 0 || rate_limits.burst == 0) {
        bail!(indoc! {r#"
            Rate limiting is enabled but `limit` or `burst` is zero, which would reject every message.

            Either raise both values or disable rate limiting:

              [server.rate_limits]
              enabled = false
        "#});
    }

    if rate_limits.enabled && rate_limits.interval.is_zero() {
        bail!("Rate limiting is enabled but `interval` is zero");
    }

    if rate_limits.enabled && rate_limits.sweep_interval.is_zero() {
        bail!(indoc! {r#"
            Rate limiting is enabled but `sweep_interval` is zero, so idle clients would never be evicted.

            Use a positive interval:

              [server.rate_limits]
              sweep_interval = "5m"
        "#});
    }

    if config.mcp.keep_alive.is_zero() {
        bail!(indoc! {r#"
            The SSE `keep_alive` interval is zero.

            Use a positive interval:

              [mcp]
              keep_alive = "15s"
        "#});
    }

    let base_url = &config.upstream.base_url;

    if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
        bail!("The upstream base URL must be an absolute http(s) URL, got '{base_url}'");
    }

    Ok(())
}
