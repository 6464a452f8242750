use std::env;

use eyre::{eyre, Result, WrapErr};
use lumen_core::logging::parse_log_level;
use reqwest::Url;
use tracing::Level;

/// Configuration for the tool server.
#[derive(Debug, Clone)]
pub struct ToolsConfig {
    /// Base URL of the Lumen API, without a trailing slash
    pub api_url: String,
    /// Sent as `X-API-Key` on every request
    pub api_key: String,
    pub log_level: Level,
}

impl ToolsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("LUMEN_API_URL")
            .ok_or_else(|| eyre!("LUMEN_API_URL environment variable not set"))?;
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&api_url).wrap_err("LUMEN_API_URL must be a valid URL")?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(eyre!("LUMEN_API_URL must use http or https, got {}", parsed.scheme()));
        }

        let api_key = lookup("API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| eyre!("API_KEY environment variable not set"))?;

        let log_level = parse_log_level(&lookup("LOG_LEVEL").unwrap_or_default());

        Ok(Self {
            api_url,
            api_key,
            log_level,
        })
    }
}
