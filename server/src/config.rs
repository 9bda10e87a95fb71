//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when either variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { host: parse_host(host)?, port: parse_port(port)? })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HOST),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidHost { value: value.to_owned() }),
    }
}
