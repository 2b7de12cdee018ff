use std::env;
use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR {value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        source: AddrParseError,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: String,
}

impl Config {
    /// Reads `BIND_ADDR` and `DATABASE_URL`, falling back to the defaults.
    pub fn new_from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("BIND_ADDR").ok(), env::var("DATABASE_URL").ok())
    }

    pub fn from_values(
        bind_addr: Option<String>,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            database_url: database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }
}
