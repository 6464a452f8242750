//! # API Configuration Module
//!
//! Configuration for the Lumen API server, read once at startup from
//! environment variables.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `API_KEY`: Shared secret expected in the `X-API-Key` header (required, at
//!   least 32 characters)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `DB_QUERY_TIMEOUT_SECONDS`: Per-query timeout (default: 10)
//! - `APP_ENV`: `development`, `production` or `test` (default: development)

use std::{env, str::FromStr, time::Duration};

use eyre::{bail, eyre, Result, WrapErr};
use lumen_core::logging::parse_log_level;
use tracing::Level;

pub const MIN_API_KEY_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl FromStr for Environment {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(eyre!(
                "Invalid APP_ENV value {:?}, expected development, production or test",
                other
            )),
        }
    }
}

/// Configuration for the Lumen API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_key: String,
    pub log_level: Level,
    /// CORS allowed origins. `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Database query timeout in seconds
    pub db_query_timeout: u64,
    pub environment: Environment,
}

impl ApiConfig {
    /// Creates a new ApiConfig from the process environment
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` or `API_KEY` is missing, the key is shorter
    /// than [`MIN_API_KEY_LENGTH`], or a numeric or `APP_ENV` value does not
    /// parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`] with variables resolved by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        // Network settings
        let host = var_or("API_HOST", "0.0.0.0");
        let port = var_or("API_PORT", "3000")
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;
        let db_query_timeout = var_or("DB_QUERY_TIMEOUT_SECONDS", "10")
            .parse()
            .wrap_err("Invalid DB_QUERY_TIMEOUT_SECONDS value")?;

        // Security settings
        let api_key = lookup("API_KEY").ok_or_else(|| eyre!("API_KEY environment variable must be set"))?;
        if api_key.chars().count() < MIN_API_KEY_LENGTH {
            bail!("API_KEY must be at least {} characters long", MIN_API_KEY_LENGTH);
        }

        // Logging settings
        let log_level = parse_log_level(&var_or("LOG_LEVEL", "info"));

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = var_or("API_REQUEST_TIMEOUT_SECONDS", "30")
            .parse()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        let environment = var_or("APP_ENV", "development").parse()?;

        Ok(Self {
            host,
            port,
            database_url,
            api_key,
            log_level,
            cors_origins,
            request_timeout,
            db_query_timeout,
            environment,
        })
    }

    /// Returns the server address as a string, e.g. "0.0.0.0:3000"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn db_query_timeout(&self) -> Duration {
        Duration::from_secs(self.db_query_timeout)
    }
}
