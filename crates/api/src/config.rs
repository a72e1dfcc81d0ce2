//! Service configuration loaded from the environment.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const BIND_ADDR_ENV: &str = "ROSTER_BIND_ADDR";

/// Listen address used when `ROSTER_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(BIND_ADDR_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let bind_addr = raw.parse::<SocketAddr>().map_err(|source| ConfigError::InvalidBindAddr {
            var: BIND_ADDR_ENV,
            value: raw.clone(),
            source,
        })?;

        Ok(Self { bind_addr })
    }
}
