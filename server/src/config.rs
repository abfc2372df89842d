//! Host configuration parsed from environment variables.
//!
//! Leptos reads its own settings (`LEPTOS_SITE_ADDR`, `LEPTOS_SITE_ROOT`, ...)
//! through `get_configuration`; this module only covers overrides on top.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PORT`: replaces the port of the Leptos site address when set.
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(
                raw.trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort { value: raw.clone() })?,
            ),
        };
        Ok(Self { port })
    }

    /// Address to listen on given the Leptos site address.
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(site_addr.ip(), port),
            None => site_addr,
        }
    }
}
