//! Server configuration with documented defaults
//!
//! Every tunable of the backend lives here. Values come from an optional TOML
//! file, then environment overrides, then command-line flags.

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{AssistantError, Result};

/// Environment variable overriding the listen address
pub const LISTEN_ENV: &str = "ASSISTANT_LISTEN";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Configuration for the HTTP backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    // === NETWORK ===
    /// Address the HTTP server binds to
    ///
    /// Defaults to all interfaces so devices on the local WiFi can reach it.
    pub listen: SocketAddr,

    // === LOGGING ===
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,

    // === REQUEST LIMITS ===
    /// Largest accepted request body in bytes
    ///
    /// The firmware serializes requests into a 384 byte document, so the
    /// default leaves ample headroom for hand-written clients.
    pub max_body_bytes: usize,

    /// Optional cap on the `text` field, counted in characters
    ///
    /// Unset by default: any well-formed request is answered, and
    /// `max_body_bytes` is the only size guard.
    pub max_text_chars: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8000)),
            log_filter: "device_assistant=info".to_string(),
            max_body_bytes: 16 * 1024,
            max_text_chars: None,
        }
    }
}

impl ServerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(listen) = lookup(LISTEN_ENV) {
            self.listen = listen.trim().parse::<SocketAddr>().map_err(|e| {
                AssistantError::InvalidConfig(format!("{LISTEN_ENV}={listen:?}: {e}"))
            })?;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            if !filter.trim().is_empty() {
                self.log_filter = filter;
            }
        }
        Ok(())
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_body_bytes == 0 {
            return Err(AssistantError::InvalidConfig(
                "max_body_bytes must be positive".into(),
            ));
        }

        if self.max_text_chars == Some(0) {
            return Err(AssistantError::InvalidConfig(
                "max_text_chars must be positive when set".into(),
            ));
        }

        Ok(())
    }
}
