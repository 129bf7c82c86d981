//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_core::DEFAULT_BOARD_LENGTH;
use tracing::{debug, info, instrument};

/// Configuration for the HTTP game server.
///
/// Every field has a default, so an empty TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    port: u16,

    /// Board length for games created without `board_length`.
    #[serde(default = "default_board_length")]
    default_board_length: usize,

    /// Largest board length a client may request.
    #[serde(default = "default_max_board_length")]
    max_board_length: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_board_length() -> usize {
    DEFAULT_BOARD_LENGTH
}

fn default_max_board_length() -> usize {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_board_length: default_board_length(),
            max_board_length: default_max_board_length(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Checks that the board length limits are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_board_length < 1 {
            return Err(ConfigError::new("max_board_length must be at least 1"));
        }
        if !(1..=self.max_board_length).contains(&self.default_board_length) {
            return Err(ConfigError::new(format!(
                "default_board_length {} must be between 1 and {}",
                self.default_board_length, self.max_board_length
            )));
        }
        Ok(())
    }

    /// Overrides the port from the `PORT` environment variable, if set.
    #[instrument(skip(self))]
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(raw) = std::env::var("PORT") {
            self.port = raw
                .parse()
                .map_err(|_| ConfigError::new(format!("Invalid PORT value: {}", raw)))?;
            debug!(port = self.port, "Port taken from environment");
        }
        Ok(self)
    }

    /// Replaces the bind host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Replaces the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replaces the board length limits.
    pub fn with_board_lengths(mut self, default: usize, max: usize) -> Self {
        self.default_board_length = default;
        self.max_board_length = max;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
