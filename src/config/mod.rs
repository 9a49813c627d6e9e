//! Configuration handling for the service.
//!
//! Only the bind address is read from the environment. Fetch, layout and
//! render settings are fixed defaults that callers can still override when
//! assembling a `Config` by hand (tests do this).

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

use crate::fetcher::FetchOptions;
use crate::render::{PageLayout, RenderOptions};

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Service runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    bind_addr: SocketAddr,
    pub fetch: FetchOptions,
    pub layout: PageLayout,
    pub render: RenderOptions,
}

impl Config {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            fetch: FetchOptions::default(),
            layout: PageLayout::default(),
            render: RenderOptions::default(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Self::new(parse_bind_addr(&raw)?))
    }

    /// TCP bind address for the HTTP server.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
            field: ENV_BIND_ADDR,
            reason: format!("{raw:?} is not a socket address ({e})"),
        })
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
