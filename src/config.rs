//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::keys::DEFAULT_EXPIRY_SECS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds after issuance during which a key stays valid
    pub expiry_window_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EXPIRY_WINDOW_SECS` - Key lifetime in seconds (default: 3600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            expiry_window_secs: env::var("EXPIRY_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_EXPIRY_SECS),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expiry_window_secs: DEFAULT_EXPIRY_SECS,
            server_port: 3000,
        }
    }
}
