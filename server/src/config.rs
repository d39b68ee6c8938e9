//! Host configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    Port(String),
    #[error("invalid BIND_ADDR: {0}")]
    BindAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let ip = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Port(value.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = raw.unwrap_or(DEFAULT_BIND_ADDR);
    value.trim().parse().map_err(|_| ConfigError::BindAddr(value.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
