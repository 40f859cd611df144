//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BOOKHUB_BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BOOKHUB_BIND_ADDR`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::var("PORT").ok().as_deref(), std::env::var("BOOKHUB_BIND_ADDR").ok().as_deref())
    }

    fn parse(port: Option<&str>, bind: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let raw_bind = bind.unwrap_or(DEFAULT_BIND_ADDR);
        let ip: IpAddr = raw_bind
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_bind.to_owned()))?;
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}
