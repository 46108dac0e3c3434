//! Server configuration.
//!
//! Values come from the environment, with the first command-line argument
//! taking precedence for the route file:
//!
//! - `BUS_ROUTE_FILE`: path of the route data file
//! - `BUS_ROUTE_ADDR`: socket address to listen on
//! - `BUS_ROUTE_ON_MISSING`: `fail` or `empty`, see [`MissingSourcePolicy`]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(std::net::SocketAddrV4::new(std::net::Ipv4Addr::LOCALHOST, 8088));

/// Errors in configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Bind address could not be parsed
    #[error("invalid bind address {value:?}")]
    InvalidAddr { value: String },

    /// Unknown missing-source policy
    #[error("invalid missing source policy {value:?} (expected \"fail\" or \"empty\")")]
    InvalidPolicy { value: String },
}

/// What to do when no route data can be read at startup.
///
/// Only a missing or unreadable source is covered. Malformed route data
/// always fails the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSourcePolicy {
    /// Refuse to start.
    #[default]
    FailFast,

    /// Log the error and serve an empty index that answers `false`.
    DegradeToEmpty,
}

impl FromStr for MissingSourcePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(MissingSourcePolicy::FailFast),
            "empty" => Ok(MissingSourcePolicy::DegradeToEmpty),
            _ => Err(ConfigError::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for the route server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Route data file. `None` means no source was configured.
    pub routes_file: Option<PathBuf>,

    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Behaviour when the route file is missing or unreadable.
    pub on_missing_source: MissingSourcePolicy,
}

impl ServerConfig {
    /// Create a configuration with the given route file and defaults
    /// for everything else.
    pub fn new(routes_file: impl Into<PathBuf>) -> Self {
        Self {
            routes_file: Some(routes_file.into()),
            ..Self::default()
        }
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the missing-source policy.
    pub fn with_missing_source_policy(mut self, policy: MissingSourcePolicy) -> Self {
        self.on_missing_source = policy;
        self
    }

    /// Read configuration from the process environment and arguments.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    /// Build configuration from a variable lookup and positional arguments.
    ///
    /// Empty variables are treated as unset.
    pub fn from_lookup<F, I>(lookup: F, mut args: I) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
        I: Iterator<Item = String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.routes_file = args
            .next()
            .filter(|arg| !arg.is_empty())
            .or_else(|| var("BUS_ROUTE_FILE"))
            .map(PathBuf::from);

        if let Some(addr) = var("BUS_ROUTE_ADDR") {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { value: addr.clone() })?;
        }

        if let Some(policy) = var("BUS_ROUTE_ON_MISSING") {
            config.on_missing_source = policy.parse()?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            routes_file: None,
            bind_addr: DEFAULT_BIND_ADDR,
            on_missing_source: MissingSourcePolicy::FailFast,
        }
    }
}
