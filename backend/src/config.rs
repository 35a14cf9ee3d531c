//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional configuration file,
//! `TAGARELA_*` environment variables, and command-line flags.

use std::ffi::OsString;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Address used when `bind_addr` is not configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while loading or interpreting settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration layers could not be merged.
    #[error("failed to load configuration: {0}")]
    Load(String),
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings controlling the HTTP server and its initial data.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TAGARELA")]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. `127.0.0.1:3000`.
    pub bind_addr: Option<String>,
    /// Start without the example users and posts.
    #[ortho_config(default = false)]
    pub empty_board: bool,
}

impl ServerSettings {
    /// Load settings from the process arguments and environment.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::load_from_args(std::env::args_os())
    }

    /// Load settings from an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|err| ConfigError::Load(err.to_string()))
    }

    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| ConfigError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Whether the board should start with the example records.
    pub fn seed_example_data(&self) -> bool {
        !self.empty_board
    }
}
