//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_PATH` - JSON file backing the product catalog; when unset the
//!   catalog lives in memory and is lost on restart
//! - `CONTENT_LATENCY_MS` - Simulated latency for CMS and rates calls (default: 300)
//! - `CATALOG_LATENCY_MS` - Simulated latency for catalog listing and edits (default: 500)
//! - `CATALOG_READ_LATENCY_MS` - Simulated latency for single-product reads (default: 300)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Fraction of errors sent to Sentry (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
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
    /// JSON file for the product catalog (in-memory when `None`)
    pub catalog_path: Option<PathBuf>,
    /// Simulated call latency
    pub latency: LatencyConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
}

/// Artificial latency applied by the API facade before each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    /// CMS content and rates
    pub content: Duration,
    /// Catalog listing and mutations
    pub catalog: Duration,
    /// Single-product lookups
    pub catalog_read: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            content: Duration::from_millis(300),
            catalog: Duration::from_millis(500),
            catalog_read: Duration::from_millis(300),
        }
    }
}

impl LatencyConfig {
    /// No latency at all. Used by tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            content: Duration::ZERO,
            catalog: Duration::ZERO,
            catalog_read: Duration::ZERO,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or(&lookup, "STOREFRONT_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_or(&lookup, "STOREFRONT_PORT", 3000_u16)?;
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let defaults = LatencyConfig::default();
        let latency = LatencyConfig {
            content: millis_or(&lookup, "CONTENT_LATENCY_MS", defaults.content)?,
            catalog: millis_or(&lookup, "CATALOG_LATENCY_MS", defaults.catalog)?,
            catalog_read: millis_or(&lookup, "CATALOG_READ_LATENCY_MS", defaults.catalog_read)?,
        };

        let sentry_sample_rate = parse_or(&lookup, "SENTRY_SAMPLE_RATE", 1.0_f32)?;
        if !(0.0..=1.0).contains(&sentry_sample_rate) {
            return Err(ConfigError::InvalidEnvVar(
                "SENTRY_SAMPLE_RATE".to_string(),
                format!("must be between 0.0 and 1.0 (got {sentry_sample_rate})"),
            ));
        }

        Ok(Self {
            host,
            port,
            catalog_path,
            latency,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
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

/// Parse a variable if set, otherwise fall back to `default`.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Parse a millisecond count if set, otherwise fall back to `default`.
fn millis_or(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match lookup(key) {
        Some(_) => parse_or(lookup, key, 0_u64).map(Duration::from_millis),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).expect("defaults are valid");
        assert_eq!(config.port, 3000);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.latency, LatencyConfig::default());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = config_from(&[("STOREFRONT_HOST", "0.0.0.0"), ("STOREFRONT_PORT", "8080")])
            .expect("valid config");

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_latency_overrides() {
        let config = config_from(&[("CONTENT_LATENCY_MS", "0"), ("CATALOG_LATENCY_MS", "25")])
            .expect("valid config");

        assert_eq!(config.latency.content, Duration::ZERO);
        assert_eq!(config.latency.catalog, Duration::from_millis(25));
        assert_eq!(config.latency.catalog_read, Duration::from_millis(300));
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("STOREFRONT_PORT", "not-a-port")]).expect_err("invalid port");
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_PORT"));
    }

    #[test]
    fn test_invalid_sample_rate() {
        assert!(config_from(&[("SENTRY_SAMPLE_RATE", "1.5")]).is_err());
        assert!(config_from(&[("SENTRY_SAMPLE_RATE", "abc")]).is_err());
    }

    #[test]
    fn test_blank_catalog_path_means_memory() {
        let config = config_from(&[("CATALOG_PATH", "  ")]).expect("valid config");
        assert!(config.catalog_path.is_none());

        let config = config_from(&[("CATALOG_PATH", "/var/lib/ratannam/products.json")])
            .expect("valid config");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/var/lib/ratannam/products.json"))
        );
    }
}
