//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `AVANT_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `AVANT_HOST` - Bind address (default: 127.0.0.1)
//! - `AVANT_PORT` - Listen port (default: 3000)
//! - `AVANT_DATA_DIR` - Directory for the persisted cart snapshot (default: ./data)
//! - `AVANT_CONTENT_DIR` - Markdown content directory (default: crates/storefront/content)
//! - `AVANT_CATALOG` - Catalog JSON path (default: crates/storefront/catalog/products.json)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g. production)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry tracing sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding the durable cart snapshot
    pub data_dir: PathBuf,
    /// Directory holding markdown pages and journal entries
    pub content_dir: PathBuf,
    /// Path to the catalog JSON file
    pub catalog_path: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry tracing sample rate
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("AVANT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("AVANT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("AVANT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("AVANT_PORT".to_string(), e.to_string()))?;

        let base_url = get_required_env("AVANT_BASE_URL")?;
        url::Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("AVANT_BASE_URL".to_string(), e.to_string()))?;

        let data_dir = PathBuf::from(get_env_or_default("AVANT_DATA_DIR", "./data"));
        let content_dir = PathBuf::from(get_env_or_default(
            "AVANT_CONTENT_DIR",
            "crates/storefront/content",
        ));
        let catalog_path = PathBuf::from(get_env_or_default(
            "AVANT_CATALOG",
            "crates/storefront/catalog/products.json",
        ));

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_traces_sample_rate = get_env_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0")
            .parse::<f32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SENTRY_TRACES_SAMPLE_RATE".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            content_dir,
            catalog_path,
            sentry_dsn,
            sentry_environment,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Configuration for in-process tests; no environment involved.
    pub(crate) fn test_config(data_dir: PathBuf) -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_dir,
            content_dir: PathBuf::from("does-not-exist"),
            catalog_path: PathBuf::from("does-not-exist.json"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_traces_sample_rate: 0.0,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config(PathBuf::from("./data"));
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("AVANT_BASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: AVANT_BASE_URL"
        );

        let err = ConfigError::InvalidEnvVar("AVANT_PORT".to_string(), "bad port".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid environment variable AVANT_PORT: bad port"
        );
    }
}
