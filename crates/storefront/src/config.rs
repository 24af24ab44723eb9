//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to local-development defaults.
//!
//! - `SARISARI_HOST` - Bind address (default: 127.0.0.1)
//! - `SARISARI_PORT` - Listen port (default: 3000)
//! - `SARISARI_DATA_DIR` - Directory holding the persisted cart (default: data)
//! - `SARISARI_NOTICE_HIDE_SECS` - Notification auto-hide delay (default: 3)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_NOTICE_HIDE_SECS: &str = "3";

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
    /// Directory the persisted cart file lives in
    pub data_dir: PathBuf,
    /// Seconds a notification stays visible before auto-hiding
    pub notice_hide_secs: u64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::build(
            &get_env_or_default("SARISARI_HOST", DEFAULT_HOST),
            &get_env_or_default("SARISARI_PORT", DEFAULT_PORT),
            &get_env_or_default("SARISARI_DATA_DIR", DEFAULT_DATA_DIR),
            &get_env_or_default("SARISARI_NOTICE_HIDE_SECS", DEFAULT_NOTICE_HIDE_SECS),
        )
    }

    fn build(
        host: &str,
        port: &str,
        data_dir: &str,
        notice_hide_secs: &str,
    ) -> Result<Self, ConfigError> {
        let host = host.parse::<IpAddr>().map_err(|e| {
            ConfigError::InvalidEnvVar("SARISARI_HOST".to_string(), e.to_string())
        })?;
        let port = port.parse::<u16>().map_err(|e| {
            ConfigError::InvalidEnvVar("SARISARI_PORT".to_string(), e.to_string())
        })?;
        let notice_hide_secs = notice_hide_secs.parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar("SARISARI_NOTICE_HIDE_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            host,
            port,
            data_dir: PathBuf::from(data_dir),
            notice_hide_secs,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// How long a notification stays visible before the hide timer fires.
    #[must_use]
    pub const fn notice_hide(&self) -> Duration {
        Duration::from_secs(self.notice_hide_secs)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn build_applies_defaults() {
        let config = StorefrontConfig::build(
            DEFAULT_HOST,
            DEFAULT_PORT,
            DEFAULT_DATA_DIR,
            DEFAULT_NOTICE_HIDE_SECS,
        )
        .unwrap();

        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.notice_hide(), Duration::from_secs(3));
    }

    #[test]
    fn build_rejects_invalid_host() {
        let result = StorefrontConfig::build("not-an-ip", "3000", "data", "3");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(var, _)) if var == "SARISARI_HOST"));
    }

    #[test]
    fn build_rejects_invalid_port() {
        let result = StorefrontConfig::build("127.0.0.1", "70000", "data", "3");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(var, _)) if var == "SARISARI_PORT"));
    }

    #[test]
    fn build_rejects_invalid_hide_delay() {
        let result = StorefrontConfig::build("127.0.0.1", "3000", "data", "soon");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(var, _)) if var == "SARISARI_NOTICE_HIDE_SECS"
        ));
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = StorefrontConfig::build("0.0.0.0", "8080", "data", "3").unwrap();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }
}
