//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::prices::DEFAULT_PRICE_TTL;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of a cached price catalog in seconds
    pub price_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PRICE_TTL` - Price cache TTL in seconds (default: 21600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            price_ttl: env_or("PRICE_TTL", defaults.price_ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_ttl: DEFAULT_PRICE_TTL,
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.price_ttl, 21_600);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("PRICE_TTL");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.price_ttl, 21_600);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_env_or_ignores_garbage() {
        env::set_var("PRICE_CACHE_TEST_GARBAGE", "not-a-number");
        assert_eq!(env_or("PRICE_CACHE_TEST_GARBAGE", 7u64), 7);
        env::remove_var("PRICE_CACHE_TEST_GARBAGE");
    }
}
