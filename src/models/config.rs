//! Configuration module
//! Server and renderer settings read from the environment

use std::net::SocketAddr;
use std::time::Duration;

use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_API_URL, DEFAULT_CONTACT_DELAY_MS, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

/// Settings for the portfolio server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `PORT` (hosting platforms), then `PORTFOLIO_PORT`, then `PORTFOLIO_HOST`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup, for tests
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("PORTFOLIO_HOST") {
            config.host = host;
        }

        let port = lookup("PORT")
            .map(|v| ("PORT", v))
            .or_else(|| lookup("PORTFOLIO_PORT").map(|v| ("PORTFOLIO_PORT", v)));
        if let Some((key, value)) = port {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| AppError::invalid_config(key, &value))?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| AppError::invalid_config("PORTFOLIO_HOST", &self.host))
    }
}

/// Settings for the page renderer / API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the portfolio API, without the `/api` suffix
    pub api_url: String,
    pub timeout: Duration,
    /// Simulated contact submission delay
    pub contact_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            contact_delay: Duration::from_millis(DEFAULT_CONTACT_DELAY_MS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PORTFOLIO_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(value) = lookup("PORTFOLIO_CONTACT_DELAY_MS") {
            let ms: u64 = value
                .trim()
                .parse()
                .map_err(|_| AppError::invalid_config("PORTFOLIO_CONTACT_DELAY_MS", &value))?;
            config.contact_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 5174);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_port_takes_precedence() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("PORTFOLIO_PORT", "9000"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORTFOLIO_PORT", "abc")])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_client_config_trims_trailing_slash() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("PORTFOLIO_API_URL", "http://localhost:5174/"),
            ("PORTFOLIO_CONTACT_DELAY_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:5174");
        assert_eq!(config.contact_delay, Duration::from_millis(250));
    }
}
