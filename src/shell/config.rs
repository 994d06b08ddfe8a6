use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 1080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("VOTER_API_HOST is not an IP address: {0}")]
    InvalidHost(String),

    #[error("VOTER_API_PORT is not a port number: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_host = lookup("VOTER_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = raw_host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(raw_host))?;
        let port = match lookup("VOTER_API_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
