//! Server configuration read from the environment.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "FLIGHT_SERVER_ADDR";

/// Environment variable holding the upload size limit in bytes.
pub const MAX_UPLOAD_VAR: &str = "FLIGHT_SERVER_MAX_UPLOAD_BYTES";

/// Default listen address.
const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    8000,
);

/// Default upload size limit (20 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Errors from reading the configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is not a positive byte count: {value:?}")]
    InvalidSize { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// Unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of
    /// a variable or `None` when unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(MAX_UPLOAD_VAR) {
            config.max_upload_bytes = value
                .trim()
                .parse()
                .ok()
                .filter(|&n: &usize| n > 0)
                .ok_or_else(|| ConfigError::InvalidSize {
                    var: MAX_UPLOAD_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
