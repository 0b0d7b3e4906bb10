//! Process Configuration
//!
//! Read once at startup from the environment (and `.env`, if present).

use anyhow::Context;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// API process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Interface to bind (`HOST`)
    pub host: IpAddr,
    /// Listening port (`PORT`)
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Load from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup; unset or blank keys fall
    /// back to the defaults, malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match read("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("HOST must be an IP address, got {raw:?}"))?,
            None => defaults.host,
        };

        let port = match read("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
